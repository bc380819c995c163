use crate::{Mode, PreviewId, PreviewLocation, Status};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub status: Status,
    pub path_input: String,
    pub selection: Option<SelectionView>,
    pub preview: Option<PreviewView>,
    pub mode: Mode,
    pub title: String,
    pub loading: bool,
    /// Advisory only: the trigger is disabled while a request is in flight.
    pub can_submit: bool,
    pub summary: Option<String>,
    pub error: Option<String>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionView {
    pub file_name: String,
    pub content_type: String,
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewView {
    pub id: PreviewId,
    pub location: PreviewLocation,
}
