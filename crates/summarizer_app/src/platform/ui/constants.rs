pub const APP_TITLE: &str = "PDF Summarizer";
pub const FILE_LABEL: &str = " PDF file (Enter to load, Ctrl+O to browse) ";
pub const TITLE_LABEL: &str = " Title ";
pub const TITLE_PLACEHOLDER: &str = "Optional title";
pub const MODE_LABEL: &str = " Mode ";
pub const BUTTON_IDLE: &str = "Summarize";
pub const BUTTON_BUSY: &str = "Summarizing\u{2026}";
pub const PREVIEW_LABEL: &str = " Preview ";
pub const PREVIEW_EMPTY: &str = "Choose a PDF to preview.";
pub const PREVIEW_HINT: &str = "Open the preview link in a PDF viewer to read the document.";
pub const SUMMARY_LABEL: &str = " Summary ";
pub const SUMMARY_EMPTY: &str = "Press \u{201c}Summarize\u{201d} to see the result.";
pub const KEY_HINTS: &str =
    "Tab focus \u{2022} Enter confirm \u{2022} Ctrl+S summarize \u{2022} Ctrl+O browse \u{2022} Ctrl+X clear file \u{2022} PgUp/PgDn scroll \u{2022} Esc quit";

/// Spinner frames for animated progress indication.
pub const SPINNER_FRAMES: &[char] = &[
    '\u{280B}', '\u{2819}', '\u{2839}', '\u{2838}', '\u{283C}', '\u{2834}', '\u{2826}', '\u{2827}',
    '\u{2807}', '\u{280F}',
];

pub const SUMMARY_PAGE: u16 = 10;

pub const PICKER_LABEL: &str = " Choose a PDF ";
pub const PICKER_EMPTY: &str = "No PDFs or folders here.";
pub const PICKER_HINTS: &str =
    "\u{2191}/\u{2193} move \u{2022} Enter open or choose \u{2022} Backspace parent folder \u{2022} Esc close";
pub const PICKER_PAGE: usize = 10;
