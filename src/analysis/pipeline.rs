use serde::Serialize;
use tracing::info;

use super::prompts;
use crate::error::RelayError;
use crate::openai::OpenAiClient;

/// Combined result of the three analysis steps
#[derive(Debug, Serialize)]
pub struct MeetingAnalysis {
    pub summary: String,
    pub action_items: String,
    pub meeting_notes: String,
}

/// Run the three analysis steps against one transcript.
///
/// The calls are strictly sequential: a step is only issued once the previous
/// step has succeeded. The first failure propagates immediately and any
/// already-generated text is dropped, so the caller never sees a partial
/// result.
pub async fn analyze_transcript(
    client: &OpenAiClient,
    transcript: &str,
) -> Result<MeetingAnalysis, RelayError> {
    info!("Generating summary");
    let summary = client
        .chat(prompts::SUMMARY_SYSTEM, &prompts::summary_user(transcript))
        .await?;

    info!("Extracting action items");
    let action_items = client
        .chat(
            prompts::ACTION_ITEMS_SYSTEM,
            &prompts::action_items_user(transcript),
        )
        .await?;

    info!("Generating meeting notes");
    let meeting_notes = client
        .chat(
            prompts::MEETING_NOTES_SYSTEM,
            &prompts::meeting_notes_user(transcript),
        )
        .await?;

    Ok(MeetingAnalysis {
        summary,
        action_items,
        meeting_notes,
    })
}
