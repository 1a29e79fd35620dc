//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Desk screen layout areas
pub struct DeskLayout {
    pub tabs: Rect,
    pub form: Option<Rect>,
    pub table: Rect,
    pub summary: Rect,
    pub status: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate the desk screen layout; `form_fields == 0` drops the form panel
pub fn calculate_desk_layout(area: Rect, form_fields: usize) -> DeskLayout {
    let mut constraints = vec![Constraint::Length(3)];
    if form_fields > 0 {
        // One line per field plus borders
        constraints.push(Constraint::Length(form_fields as u16 + 2));
    }
    constraints.extend([
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    if form_fields > 0 {
        DeskLayout {
            tabs: chunks[0],
            form: Some(chunks[1]),
            table: chunks[2],
            summary: chunks[3],
            status: chunks[4],
            help: chunks[5],
        }
    } else {
        DeskLayout {
            tabs: chunks[0],
            form: None,
            table: chunks[1],
            summary: chunks[2],
            status: chunks[3],
            help: chunks[4],
        }
    }
}
