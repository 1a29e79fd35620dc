//! Table component for query results
//!
//! Renders rows with headers, a row cursor, and a scrollbar. Column widths
//! follow the widest cell, measured in terminal columns.

use ratatui::{
    layout::{Constraint, Margin, Rect},
    style::{Color, Modifier, Style},
    widgets::{
        Block, Borders, Cell, Row, Scrollbar, ScrollbarOrientation, ScrollbarState, Table,
        TableState,
    },
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Widest a column may grow before cells are cut off
const MAX_COLUMN_WIDTH: usize = 50;

/// Rows moved by PageUp/PageDown
const PAGE: usize = 10;

#[derive(Debug, Default)]
pub struct DataTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    state: TableState,
}

impl DataTable {
    #[cfg(test)]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Replace the contents, keeping the cursor on the same index when it still exists
    pub fn set_data(&mut self, headers: Vec<String>, rows: Vec<Vec<String>>) {
        self.headers = headers;
        self.rows = rows;

        let selected = match (self.state.selected(), self.rows.len()) {
            (_, 0) => None,
            (Some(i), len) => Some(i.min(len - 1)),
            (None, _) => Some(0),
        };
        self.state.select(selected);
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let next = match self.state.selected() {
            Some(i) if i + 1 < self.rows.len() => i + 1,
            Some(_) => 0, // Wrap to first
            None => 0,
        };
        self.state.select(Some(next));
    }

    pub fn previous(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let prev = match self.state.selected() {
            Some(0) | None => self.rows.len() - 1, // Wrap to last
            Some(i) => i - 1,
        };
        self.state.select(Some(prev));
    }

    pub fn select_first(&mut self) {
        if !self.rows.is_empty() {
            self.state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.rows.is_empty() {
            self.state.select(Some(self.rows.len() - 1));
        }
    }

    pub fn page_down(&mut self) {
        if let Some(i) = self.state.selected() {
            let last = self.rows.len().saturating_sub(1);
            self.state.select(Some((i + PAGE).min(last)));
        }
    }

    pub fn page_up(&mut self) {
        if let Some(i) = self.state.selected() {
            self.state.select(Some(i.saturating_sub(PAGE)));
        }
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect, title: String) {
        let widths: Vec<Constraint> = column_widths(&self.headers, &self.rows)
            .into_iter()
            .map(Constraint::Length)
            .collect();

        let header = Row::new(self.headers.iter().map(|h| Cell::from(h.clone()))).style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

        let rows = self.rows.iter().map(|row| {
            Row::new(row.iter().map(|cell| Cell::from(cell.clone())))
                .style(Style::default().fg(Color::White))
        });

        let table = Table::new(rows, widths)
            .header(header)
            .column_spacing(3)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(table, area, &mut self.state);

        // Border and header row take three lines
        let visible_height = area.height.saturating_sub(3) as usize;
        let total = self.rows.len();
        if total > visible_height {
            let mut scrollbar_state = ScrollbarState::new(total.saturating_sub(visible_height))
                .position(self.state.offset());

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }
    }
}

/// Display width of each column, capped at `MAX_COLUMN_WIDTH`
pub fn column_widths(headers: &[String], rows: &[Vec<String>]) -> Vec<u16> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.width());
            }
        }
    }

    widths
        .into_iter()
        .map(|w| w.min(MAX_COLUMN_WIDTH) as u16)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn table_with(rows: usize) -> DataTable {
        let mut table = DataTable::default();
        table.set_data(
            strings(&["ID"]),
            (0..rows).map(|i| vec![i.to_string()]).collect(),
        );
        table
    }

    #[test]
    fn test_column_widths_use_display_width() {
        let headers = strings(&["ID", "Name"]);
        let rows = vec![strings(&["1", "Кофеварка"]), strings(&["22", "T"])];
        assert_eq!(column_widths(&headers, &rows), vec![2, 9]);
    }

    #[test]
    fn test_column_widths_are_capped() {
        let headers = strings(&["Name"]);
        let rows = vec![vec!["x".repeat(80)]];
        assert_eq!(column_widths(&headers, &rows), vec![50]);
    }

    #[test]
    fn test_selection_wraps() {
        let mut table = table_with(3);
        assert_eq!(table.selected(), Some(0));
        table.previous();
        assert_eq!(table.selected(), Some(2));
        table.next();
        assert_eq!(table.selected(), Some(0));
    }

    #[test]
    fn test_set_data_clamps_selection() {
        let mut table = table_with(5);
        table.select_last();
        table.set_data(strings(&["ID"]), vec![strings(&["1"]), strings(&["2"])]);
        assert_eq!(table.selected(), Some(1));

        table.set_data(strings(&["ID"]), Vec::new());
        assert_eq!(table.selected(), None);
        table.next();
        assert_eq!(table.selected(), None);
    }

    #[test]
    fn test_paging_stops_at_ends() {
        let mut table = table_with(15);
        table.page_down();
        assert_eq!(table.selected(), Some(10));
        table.page_down();
        assert_eq!(table.selected(), Some(14));
        table.page_up();
        table.page_up();
        assert_eq!(table.selected(), Some(0));
    }
}
