use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use summarizer_core::{AppViewModel, Mode, Msg};

use super::constants::SUMMARY_PAGE;
use super::Focus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    Dispatch(Msg),
    FocusNext,
    FocusPrev,
    OpenPicker,
    Scroll(i32),
    Quit,
    None,
}

/// Map a crossterm terminal event to an action for the focused control.
pub fn map_event(event: &Event, focus: Focus, view: &AppViewModel) -> UiAction {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key(key, focus, view),
        _ => UiAction::None,
    }
}

fn map_key(key: &KeyEvent, focus: Focus, view: &AppViewModel) -> UiAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => UiAction::Quit,
            KeyCode::Char('s') => summarize(view),
            KeyCode::Char('x') => UiAction::Dispatch(Msg::SelectionCleared),
            KeyCode::Char('o') => UiAction::OpenPicker,
            KeyCode::Char('u') => clear_field(focus),
            _ => UiAction::None,
        };
    }

    match key.code {
        KeyCode::Esc => return UiAction::Quit,
        KeyCode::Tab => return UiAction::FocusNext,
        KeyCode::BackTab => return UiAction::FocusPrev,
        KeyCode::PageDown => return UiAction::Scroll(i32::from(SUMMARY_PAGE)),
        KeyCode::PageUp => return UiAction::Scroll(-i32::from(SUMMARY_PAGE)),
        _ => {}
    }

    match focus {
        Focus::File => match key.code {
            KeyCode::Enter => UiAction::Dispatch(Msg::PathSubmitted),
            KeyCode::Backspace => edit(&view.path_input, None, Msg::PathInputChanged),
            KeyCode::Char(c) => edit(&view.path_input, Some(c), Msg::PathInputChanged),
            _ => UiAction::None,
        },
        Focus::Title => match key.code {
            KeyCode::Enter => summarize(view),
            KeyCode::Backspace => edit(&view.title, None, Msg::TitleChanged),
            KeyCode::Char(c) => edit(&view.title, Some(c), Msg::TitleChanged),
            _ => UiAction::None,
        },
        Focus::Mode => match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                UiAction::Dispatch(Msg::ModeChanged(view.mode.prev()))
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') | KeyCode::Enter => {
                UiAction::Dispatch(Msg::ModeCycled)
            }
            KeyCode::Char(c @ '1'..='3') => {
                let index = c as usize - '1' as usize;
                UiAction::Dispatch(Msg::ModeChanged(Mode::ALL[index]))
            }
            _ => UiAction::None,
        },
        Focus::Summarize => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => summarize(view),
            _ => UiAction::None,
        },
    }
}

/// The trigger is disabled while a request is in flight.
fn summarize(view: &AppViewModel) -> UiAction {
    if view.can_submit {
        UiAction::Dispatch(Msg::SummarizeClicked)
    } else {
        UiAction::None
    }
}

fn clear_field(focus: Focus) -> UiAction {
    match focus {
        Focus::File => UiAction::Dispatch(Msg::PathInputChanged(String::new())),
        Focus::Title => UiAction::Dispatch(Msg::TitleChanged(String::new())),
        Focus::Mode | Focus::Summarize => UiAction::None,
    }
}

fn edit(current: &str, typed: Option<char>, to_msg: fn(String) -> Msg) -> UiAction {
    let mut text = current.to_string();
    match typed {
        Some(c) => text.push(c),
        None => {
            if text.pop().is_none() {
                return UiAction::None;
            }
        }
    }
    UiAction::Dispatch(to_msg(text))
}
