//! Summarizer engine: transfer client, document IO and effect execution.
mod client;
mod document;
mod engine;
mod preview;
mod settings;
mod types;

pub use client::{ReqwestSummarizer, Summarizer, GENERIC_FAILURE_MESSAGE};
pub use document::{load_document, LoadError};
pub use engine::{EngineError, EngineHandle};
pub use preview::{PreviewError, PreviewStore};
pub use settings::{ClientSettings, DEFAULT_BASE_URL};
pub use types::{EngineEvent, FailureKind, SubmitError, SummaryResponse};
