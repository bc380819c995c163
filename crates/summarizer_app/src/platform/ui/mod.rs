pub mod constants;
pub mod input;
pub mod layout;
pub mod picker;
pub mod render;

/// Control that receives typed keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    File,
    Title,
    Mode,
    Summarize,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::File => Focus::Title,
            Focus::Title => Focus::Mode,
            Focus::Mode => Focus::Summarize,
            Focus::Summarize => Focus::File,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::File => Focus::Summarize,
            Focus::Title => Focus::File,
            Focus::Mode => Focus::Title,
            Focus::Summarize => Focus::Mode,
        }
    }
}

/// Presentation-only state that never reaches the session.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub focus: Focus,
    pub summary_scroll: u16,
    pub tick: usize,
    /// Open while the user browses for a PDF.
    pub picker: Option<picker::FilePicker>,
}
