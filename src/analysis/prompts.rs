//! Prompt templates for the three analysis steps.

pub const SUMMARY_SYSTEM: &str =
    "You are an AI assistant that summarizes meeting transcripts concisely.";

pub const ACTION_ITEMS_SYSTEM: &str =
    "You are an AI assistant that extracts action items from meeting transcripts.";

pub const MEETING_NOTES_SYSTEM: &str =
    "You are an AI assistant that creates structured meeting notes.";

pub fn summary_user(transcript: &str) -> String {
    format!("Summarize this meeting transcript in 3-5 sentences:\n\n{transcript}")
}

pub fn action_items_user(transcript: &str) -> String {
    format!(
        "Extract all action items from this meeting transcript. \
         Format as a bulleted list with assignee and due date if mentioned:\n\n{transcript}"
    )
}

pub fn meeting_notes_user(transcript: &str) -> String {
    format!(
        "Create professional meeting notes from this transcript. \
         Include sections for Summary, Discussion Topics, Decisions Made, \
         and Next Steps:\n\n{transcript}"
    )
}
