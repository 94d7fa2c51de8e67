pub mod analysis;
pub mod config;
pub mod error;
pub mod http;
pub mod openai;

pub use analysis::{analyze_transcript, MeetingAnalysis};
pub use config::Config;
pub use error::RelayError;
pub use http::{create_router, AppState};
pub use openai::{AudioUpload, OpenAiClient};
