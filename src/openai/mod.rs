//! Thin client for the two OpenAI endpoints this service relays to:
//! audio transcription (Whisper) and chat completions.

pub mod client;
pub mod messages;

pub use client::OpenAiClient;
pub use messages::AudioUpload;
