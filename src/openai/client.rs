use anyhow::Context;
use tracing::debug;

use super::messages::{
    AudioUpload, ChatCompletionRequest, ChatCompletionResponse, ChatMessage,
    TranscriptionResponse,
};
use crate::config::OpenAiConfig;
use crate::error::RelayError;

/// Fixed model for audio transcription
pub const TRANSCRIPTION_MODEL: &str = "whisper-1";

/// Fixed model for chat completions
pub const COMPLETION_MODEL: &str = "gpt-3.5-turbo";

/// Client for the OpenAI transcription and chat completion endpoints.
///
/// Holds a shared connection pool and the bearer credential; handlers clone
/// nothing and go through one instance per process.
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    transcriptions_url: String,
    completions_url: String,
}

impl OpenAiClient {
    pub fn new(cfg: &OpenAiConfig) -> Self {
        let base = cfg.api_base.trim_end_matches('/');
        Self {
            http: reqwest::Client::new(),
            api_key: cfg.api_key.clone(),
            transcriptions_url: format!("{base}/audio/transcriptions"),
            completions_url: format!("{base}/chat/completions"),
        }
    }

    /// Forward an uploaded audio file to the transcription endpoint and
    /// return the transcribed text.
    pub async fn transcribe(&self, audio: AudioUpload) -> Result<String, RelayError> {
        let form = reqwest::multipart::Form::new()
            .text("model", TRANSCRIPTION_MODEL)
            .part(
                "file",
                reqwest::multipart::Part::bytes(audio.data)
                    .file_name(audio.filename)
                    .mime_str(&audio.content_type)
                    .context("Invalid audio content type")?,
            );

        debug!("Forwarding audio to {}", self.transcriptions_url);

        let response = self
            .http
            .post(&self.transcriptions_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .multipart(form)
            .send()
            .await?;

        let body = self.check_status(response).await?;
        let parsed: TranscriptionResponse = serde_json::from_str(&body)
            .context("Failed to parse transcription response")?;

        Ok(parsed.text)
    }

    /// Issue a single chat completion with a system instruction and a user
    /// message, returning the generated text.
    pub async fn chat(&self, system: &str, user: &str) -> Result<String, RelayError> {
        let request = ChatCompletionRequest {
            model: COMPLETION_MODEL.to_string(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
        };

        debug!("Requesting chat completion from {}", self.completions_url);

        let response = self
            .http
            .post(&self.completions_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        let body = self.check_status(response).await?;
        let parsed: ChatCompletionResponse = serde_json::from_str(&body)
            .context("Failed to parse completion response")?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .context("No completion choices returned")?;

        Ok(choice.message.content)
    }

    /// Read the response body, converting a non-2xx status into an upstream
    /// error that carries the status and raw body.
    async fn check_status(&self, response: reqwest::Response) -> Result<String, RelayError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read upstream response body")?;

        if !status.is_success() {
            return Err(RelayError::Upstream { status, body });
        }

        Ok(body)
    }
}
