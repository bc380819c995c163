//! Summarizer core: pure session state machine and view-model helpers.
mod document;
mod effect;
mod mode;
mod msg;
mod state;
mod update;
mod view_model;

pub use document::{Document, SummarizeRequest, SummaryResult, PDF_CONTENT_TYPE};
pub use effect::Effect;
pub use mode::{Mode, UnknownMode};
pub use msg::Msg;
pub use state::{AppState, PreviewId, PreviewLocation, RequestId, Status};
pub use update::{update, NO_SELECTION_MESSAGE};
pub use view_model::{AppViewModel, PreviewView, SelectionView};
