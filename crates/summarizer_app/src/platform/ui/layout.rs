use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Copy)]
pub struct Regions {
    pub header: Rect,
    pub file: Rect,
    pub title: Rect,
    pub mode: Rect,
    pub button: Rect,
    pub error: Rect,
    pub preview: Rect,
    pub summary: Rect,
    pub status: Rect,
}

pub fn split(area: Rect) -> Regions {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(area);

    let controls = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(16),
            Constraint::Length(20),
            Constraint::Length(17),
        ])
        .split(rows[2]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[4]);

    Regions {
        header: rows[0],
        file: rows[1],
        title: controls[0],
        mode: controls[1],
        button: controls[2],
        error: rows[3],
        preview: columns[0],
        summary: columns[1],
        status: rows[5],
    }
}
