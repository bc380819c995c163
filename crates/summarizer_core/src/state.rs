use crate::view_model::{AppViewModel, PreviewView, SelectionView};
use crate::{Document, Mode, SummaryResult};

pub type RequestId = u64;
pub type PreviewId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Success,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PreviewLocation {
    #[default]
    Pending,
    Ready(String),
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PreviewSlot {
    pub(crate) id: PreviewId,
    pub(crate) location: PreviewLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    path_input: String,
    selection: Option<Document>,
    preview: Option<PreviewSlot>,
    next_preview_id: PreviewId,
    mode: Mode,
    title: String,
    in_flight: Option<RequestId>,
    next_request_id: RequestId,
    result: Option<SummaryResult>,
    error: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            status: self.status(),
            path_input: self.path_input.clone(),
            selection: self.selection.as_ref().map(|doc| SelectionView {
                file_name: doc.file_name().to_string(),
                content_type: doc.content_type().to_string(),
                size: doc.size(),
            }),
            preview: self.preview.as_ref().map(|slot| PreviewView {
                id: slot.id,
                location: slot.location.clone(),
            }),
            mode: self.mode,
            title: self.title.clone(),
            loading: self.is_loading(),
            can_submit: !self.is_loading(),
            summary: self.result.as_ref().map(|result| result.summary.clone()),
            error: self.error.clone(),
            dirty: self.dirty,
        }
    }

    /// Loading wins over any stale text; otherwise an error outranks a result.
    pub fn status(&self) -> Status {
        if self.in_flight.is_some() {
            Status::Loading
        } else if self.error.is_some() {
            Status::Failed
        } else if self.result.is_some() {
            Status::Success
        } else {
            Status::Idle
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    pub fn selection(&self) -> Option<&Document> {
        self.selection.as_ref()
    }

    pub fn result(&self) -> Option<&SummaryResult> {
        self.result.as_ref()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn path_input(&self) -> &str {
        &self.path_input
    }

    /// Id of the live preview reference, if any.
    pub fn live_preview(&self) -> Option<PreviewId> {
        self.preview.as_ref().map(|slot| slot.id)
    }

    /// Returns whether the state changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_path_input(&mut self, text: String) {
        if self.path_input != text {
            self.path_input = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            self.mode = mode;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_title(&mut self, title: String) {
        if self.title != title {
            self.title = title;
            self.mark_dirty();
        }
    }

    /// Replaces the selection and hands back the preview id that must be revoked.
    pub(crate) fn replace_selection(&mut self, document: Option<Document>) -> Option<PreviewId> {
        let revoked = self.preview.take().map(|slot| slot.id);
        let had_selection = self.selection.is_some();
        self.selection = document;
        if revoked.is_some() || had_selection || self.selection.is_some() {
            self.mark_dirty();
        }
        revoked
    }

    /// Establishes a fresh, pending preview reference for the current selection.
    pub(crate) fn open_preview(&mut self) -> PreviewId {
        self.next_preview_id += 1;
        let id = self.next_preview_id;
        self.preview = Some(PreviewSlot {
            id,
            location: PreviewLocation::Pending,
        });
        self.mark_dirty();
        id
    }

    /// Records where the preview lives. Returns `false` for a stale id.
    pub(crate) fn resolve_preview(&mut self, id: PreviewId, location: PreviewLocation) -> bool {
        match self.preview.as_mut() {
            Some(slot) if slot.id == id => {
                slot.location = location;
                self.mark_dirty();
                true
            }
            _ => false,
        }
    }

    pub(crate) fn close_preview(&mut self) -> Option<PreviewId> {
        let revoked = self.preview.take().map(|slot| slot.id);
        if revoked.is_some() {
            self.mark_dirty();
        }
        revoked
    }

    pub(crate) fn begin_request(&mut self) -> RequestId {
        self.next_request_id += 1;
        let id = self.next_request_id;
        self.error = None;
        self.result = None;
        self.in_flight = Some(id);
        self.mark_dirty();
        id
    }

    pub(crate) fn finish_request(&mut self, result: Result<SummaryResult, String>) {
        match result {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
            }
            Err(message) => {
                self.error = Some(message);
                self.result = None;
            }
        }
        self.in_flight = None;
        self.mark_dirty();
    }

    /// Fails a Summarize trigger locally. Any request still in flight is abandoned,
    /// so its late completion is treated as stale.
    pub(crate) fn reject_submit(&mut self, message: impl Into<String>) {
        self.in_flight = None;
        self.set_error(message);
    }

    pub(crate) fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.mark_dirty();
    }
}
