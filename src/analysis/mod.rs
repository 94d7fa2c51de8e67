//! Transcript analysis: summary, action items, and meeting notes.
//!
//! Three chat completions are issued in strict sequence against the same
//! transcript. The pipeline is all-or-nothing: the first upstream failure
//! aborts the run and earlier results are discarded.

pub mod pipeline;
pub mod prompts;

pub use pipeline::{analyze_transcript, MeetingAnalysis};
