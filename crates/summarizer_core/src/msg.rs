use std::path::PathBuf;

use crate::{Document, Mode, PreviewId, RequestId, SummaryResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the file path input box.
    PathInputChanged(String),
    /// User confirmed the file path input. An empty path clears the selection.
    PathSubmitted,
    /// User picked a file in the browser; loaded as-is without editing the path.
    FileChosen(PathBuf),
    /// The platform finished reading the chosen file.
    DocumentLoaded(Result<Document, String>),
    /// User removed the current selection.
    SelectionCleared,
    /// A preview reference was materialized for the given id.
    PreviewReady { preview: PreviewId, location: String },
    /// A preview reference could not be materialized.
    PreviewUnavailable { preview: PreviewId, reason: String },
    /// User picked a summarization mode.
    ModeChanged(Mode),
    /// User stepped the mode selector forward.
    ModeCycled,
    /// User edited the optional title.
    TitleChanged(String),
    /// User triggered Summarize.
    SummarizeClicked,
    /// Engine completion for a summarize request.
    SummaryFinished {
        request_id: RequestId,
        result: Result<SummaryResult, String>,
    },
    /// The session is being torn down.
    Shutdown,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
