use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;
use summarizer_core::{AppViewModel, Mode, PreviewLocation, Status};

use super::constants::*;
use super::layout::{split, Regions};
use super::picker::FilePicker;
use super::{Focus, UiState};

pub fn draw(frame: &mut Frame, view: &AppViewModel, ui: &UiState) {
    let regions = split(frame.area());

    draw_header(frame, regions.header, view, ui);
    draw_text_field(
        frame,
        regions.file,
        FILE_LABEL,
        &view.path_input,
        None,
        ui.focus == Focus::File,
    );
    draw_text_field(
        frame,
        regions.title,
        TITLE_LABEL,
        &view.title,
        Some(TITLE_PLACEHOLDER),
        ui.focus == Focus::Title,
    );
    draw_mode(frame, regions.mode, view.mode, ui.focus == Focus::Mode);
    draw_button(frame, regions.button, view, ui.focus == Focus::Summarize);
    draw_error(frame, regions.error, view);
    draw_preview(frame, regions.preview, view);
    draw_summary(frame, regions.summary, view, ui);

    let hints = match &ui.picker {
        Some(picker) => {
            draw_picker(frame, regions.preview.union(regions.summary), picker);
            PICKER_HINTS
        }
        None => {
            place_cursor(frame, &regions, view, ui.focus);
            KEY_HINTS
        }
    };
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        regions.status,
    );
}

fn focus_block(label: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(label)
}

fn draw_header(frame: &mut Frame, area: Rect, view: &AppViewModel, ui: &UiState) {
    let status = match view.status {
        Status::Idle => Span::styled("Idle", Style::default().fg(Color::DarkGray)),
        Status::Loading => {
            let spinner = SPINNER_FRAMES[ui.tick % SPINNER_FRAMES.len()];
            Span::styled(
                format!("{spinner} Loading"),
                Style::default().fg(Color::Yellow),
            )
        }
        Status::Success => Span::styled("Success", Style::default().fg(Color::Green)),
        Status::Failed => Span::styled("Failed", Style::default().fg(Color::Red)),
    };
    let line = Line::from(vec![
        Span::styled(APP_TITLE, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        status,
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    placeholder: Option<&str>,
    focused: bool,
) {
    let content = match placeholder {
        Some(hint) if value.is_empty() => {
            Span::styled(hint, Style::default().fg(Color::DarkGray))
        }
        _ => Span::raw(value),
    };
    frame.render_widget(
        Paragraph::new(Line::from(content)).block(focus_block(label, focused)),
        area,
    );
}

fn draw_mode(frame: &mut Frame, area: Rect, mode: Mode, focused: bool) {
    let line = Line::from(vec![
        Span::raw("\u{25C2} "),
        Span::styled(mode.label(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" \u{25B8}"),
    ]);
    frame.render_widget(
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(focus_block(MODE_LABEL, focused)),
        area,
    );
}

fn draw_button(frame: &mut Frame, area: Rect, view: &AppViewModel, focused: bool) {
    let (label, style) = if view.loading {
        (BUTTON_BUSY, Style::default().fg(Color::DarkGray))
    } else if focused {
        (
            BUTTON_IDLE,
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
        )
    } else {
        (BUTTON_IDLE, Style::default().add_modifier(Modifier::BOLD))
    };
    frame.render_widget(
        Paragraph::new(Span::styled(label, style))
            .alignment(Alignment::Center)
            .block(focus_block("", focused)),
        area,
    );
}

fn draw_error(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    if let Some(error) = &view.error {
        frame.render_widget(
            Paragraph::new(Span::styled(
                error.as_str(),
                Style::default().fg(Color::Red),
            )),
            area,
        );
    }
}

fn draw_preview(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let dim = Style::default().fg(Color::DarkGray);
    let lines = match &view.selection {
        None => vec![Line::styled(PREVIEW_EMPTY, dim)],
        Some(selection) => {
            let mut lines = vec![
                Line::from(vec![
                    Span::styled("File  ", dim),
                    Span::raw(selection.file_name.as_str()),
                ]),
                Line::from(vec![
                    Span::styled("Size  ", dim),
                    Span::raw(format_size(selection.size)),
                ]),
                Line::from(vec![
                    Span::styled("Type  ", dim),
                    Span::raw(selection.content_type.as_str()),
                ]),
                Line::default(),
            ];
            match view.preview.as_ref().map(|preview| &preview.location) {
                Some(PreviewLocation::Ready(url)) => {
                    lines.push(Line::from(Span::styled(
                        url.as_str(),
                        Style::default().fg(Color::Cyan),
                    )));
                    lines.push(Line::styled(PREVIEW_HINT, dim));
                }
                Some(PreviewLocation::Unavailable(reason)) => {
                    lines.push(Line::styled(
                        format!("Preview unavailable: {reason}"),
                        Style::default().fg(Color::Yellow),
                    ));
                }
                Some(PreviewLocation::Pending) | None => {
                    lines.push(Line::styled("Preparing preview\u{2026}", dim));
                }
            }
            lines
        }
    };
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(focus_block(PREVIEW_LABEL, false)),
        area,
    );
}

fn draw_summary(frame: &mut Frame, area: Rect, view: &AppViewModel, ui: &UiState) {
    let text = match &view.summary {
        Some(summary) => Text::raw(summary.as_str()),
        None if view.loading => {
            Text::styled(BUTTON_BUSY, Style::default().fg(Color::Yellow))
        }
        None => Text::styled(SUMMARY_EMPTY, Style::default().fg(Color::DarkGray)),
    };
    frame.render_widget(
        Paragraph::new(text)
            .wrap(Wrap { trim: false })
            .scroll((ui.summary_scroll, 0))
            .block(focus_block(SUMMARY_LABEL, false)),
        area,
    );
}

fn draw_picker(frame: &mut Frame, area: Rect, picker: &FilePicker) {
    let block = focus_block(PICKER_LABEL, true).title_bottom(Line::styled(
        format!(" {} ", picker.current_dir.display()),
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Clear, area);

    if picker.entries.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::styled(PICKER_EMPTY, Style::default().fg(Color::DarkGray)))
                .block(block),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = picker
        .entries
        .iter()
        .map(|entry| {
            if entry.is_dir {
                ListItem::new(Line::styled(
                    format!("{}/", entry.name),
                    Style::default().fg(Color::Cyan),
                ))
            } else {
                ListItem::new(Line::raw(entry.name.as_str()))
            }
        })
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(picker.cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

fn place_cursor(frame: &mut Frame, regions: &Regions, view: &AppViewModel, focus: Focus) {
    let (area, value) = match focus {
        Focus::File => (regions.file, view.path_input.as_str()),
        Focus::Title => (regions.title, view.title.as_str()),
        Focus::Mode | Focus::Summarize => return,
    };
    let inner_width = area.width.saturating_sub(2);
    if inner_width == 0 {
        return;
    }
    let typed = u16::try_from(value.chars().count()).unwrap_or(u16::MAX);
    frame.set_cursor_position(Position::new(
        area.x + 1 + typed.min(inner_width - 1),
        area.y + 1,
    ));
}

fn format_size(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    let size = bytes as f64;
    if size < KIB {
        format!("{bytes} B")
    } else if size < KIB * KIB {
        format!("{:.1} KiB", size / KIB)
    } else {
        format!("{:.1} MiB", size / (KIB * KIB))
    }
}
