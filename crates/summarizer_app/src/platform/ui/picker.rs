use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use client_logging::{client_trace, client_warn};
use ratatui::crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

/// One row of the browser: a directory to descend into or a PDF to choose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Directory browser listing sub-directories and PDFs.
#[derive(Debug, Clone)]
pub struct FilePicker {
    pub current_dir: PathBuf,
    pub entries: Vec<PickerEntry>,
    pub cursor: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction {
    Up,
    Down,
    PageUp,
    PageDown,
    Top,
    Bottom,
    Open,
    Parent,
    Close,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    Browsing,
    Closed,
    Chosen(PathBuf),
}

impl FilePicker {
    pub fn open(dir: &Path) -> Self {
        let current_dir = fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf());
        let mut picker = Self {
            current_dir,
            entries: Vec::new(),
            cursor: 0,
        };
        picker.refresh();
        picker
    }

    pub fn refresh(&mut self) {
        let mut entries = Vec::new();
        if let Some(parent) = self.current_dir.parent() {
            entries.push(PickerEntry {
                name: "..".to_string(),
                path: parent.to_path_buf(),
                is_dir: true,
            });
        }

        let mut dirs = Vec::new();
        let mut pdfs = Vec::new();
        match fs::read_dir(&self.current_dir) {
            Ok(read_dir) => {
                for entry in read_dir.flatten() {
                    let name = entry.file_name().to_string_lossy().to_string();
                    if name.starts_with('.') {
                        continue;
                    }
                    let path = entry.path();
                    if path.is_dir() {
                        dirs.push(PickerEntry {
                            name,
                            path,
                            is_dir: true,
                        });
                    } else if is_pdf_name(&path) {
                        pdfs.push(PickerEntry {
                            name,
                            path,
                            is_dir: false,
                        });
                    }
                }
            }
            Err(err) => {
                client_warn!("Cannot list {:?}: {}", self.current_dir, err);
            }
        }
        dirs.sort_by_key(|entry| entry.name.to_lowercase());
        pdfs.sort_by_key(|entry| entry.name.to_lowercase());
        entries.extend(dirs);
        entries.extend(pdfs);

        client_trace!(
            "Listing {} entries in {:?}",
            entries.len(),
            self.current_dir
        );
        self.entries = entries;
        self.cursor = 0;
    }

    pub fn apply(&mut self, action: PickerAction, page: usize) -> PickerOutcome {
        let last = self.entries.len().saturating_sub(1);
        match action {
            PickerAction::Up => self.cursor = self.cursor.saturating_sub(1),
            PickerAction::Down => self.cursor = (self.cursor + 1).min(last),
            PickerAction::PageUp => self.cursor = self.cursor.saturating_sub(page.max(1)),
            PickerAction::PageDown => self.cursor = (self.cursor + page.max(1)).min(last),
            PickerAction::Top => self.cursor = 0,
            PickerAction::Bottom => self.cursor = last,
            PickerAction::Open => {
                if let Some(entry) = self.entries.get(self.cursor).cloned() {
                    if entry.is_dir {
                        self.enter(entry.path);
                    } else {
                        return PickerOutcome::Chosen(entry.path);
                    }
                }
            }
            PickerAction::Parent => {
                if let Some(parent) = self.current_dir.parent().map(Path::to_path_buf) {
                    self.enter(parent);
                }
            }
            PickerAction::Close => return PickerOutcome::Closed,
            PickerAction::None => {}
        }
        PickerOutcome::Browsing
    }

    fn enter(&mut self, dir: PathBuf) {
        self.current_dir = dir;
        self.refresh();
    }
}

/// Directory to browse first: the typed path's folder when it names one, else the working directory.
pub fn start_dir(path_input: &str) -> PathBuf {
    let typed = Path::new(path_input);
    if !path_input.is_empty() {
        if typed.is_dir() {
            return typed.to_path_buf();
        }
        if let Some(parent) = typed.parent().filter(|parent| parent.is_dir()) {
            return parent.to_path_buf();
        }
    }
    env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

pub fn map_picker_event(event: &Event) -> PickerAction {
    let Event::Key(key) = event else {
        return PickerAction::None;
    };
    if key.kind != KeyEventKind::Press {
        return PickerAction::None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('o') => PickerAction::Close,
            _ => PickerAction::None,
        };
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => PickerAction::Up,
        KeyCode::Down | KeyCode::Char('j') => PickerAction::Down,
        KeyCode::PageUp => PickerAction::PageUp,
        KeyCode::PageDown => PickerAction::PageDown,
        KeyCode::Home | KeyCode::Char('g') => PickerAction::Top,
        KeyCode::End | KeyCode::Char('G') => PickerAction::Bottom,
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => PickerAction::Open,
        KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => PickerAction::Parent,
        KeyCode::Esc => PickerAction::Close,
        _ => PickerAction::None,
    }
}

fn is_pdf_name(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}
