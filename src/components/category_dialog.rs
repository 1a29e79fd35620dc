//! Category filter dialog component
//!
//! Allows selecting a product category to filter the table by.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Label of the entry that clears the filter
pub const ALL_CATEGORIES: &str = "All categories";

pub struct CategoryDialog {
    pub categories: Vec<String>,
    /// 0 is "All categories", then one entry per category
    pub selected_index: usize,
    pub list_state: ListState,
    /// Active category, to mark it in the list
    pub current: Option<String>,
}

impl Default for CategoryDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryDialog {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            categories: Vec::new(),
            selected_index: 0,
            list_state,
            current: None,
        }
    }

    /// Load choices and put the cursor on the active one
    pub fn set_categories(&mut self, categories: Vec<String>, current: Option<&str>) {
        self.categories = categories;
        self.current = current.map(str::to_string);

        self.selected_index = current
            .and_then(|c| self.categories.iter().position(|t| t == c))
            .map(|idx| idx + 1)
            .unwrap_or(0);
        self.list_state.select(Some(self.selected_index));
    }

    /// `None` means all categories
    pub fn selected_category(&self) -> Option<&str> {
        if self.selected_index == 0 {
            None
        } else {
            self.categories
                .get(self.selected_index - 1)
                .map(|s| s.as_str())
        }
    }

    fn select_next(&mut self) {
        if self.selected_index < self.categories.len() {
            self.selected_index += 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn select_prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.list_state.select(Some(self.selected_index));
        }
    }
}

impl Component for CategoryDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('f') => Some(Action::CloseModal),
            KeyCode::Enter => Some(Action::SetCategoryFilter(
                self.selected_category().map(str::to_string),
            )),
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                Some(Action::ModalUp)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Some(Action::ModalDown)
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_width = 44u16.min(area.width.saturating_sub(4));
        let content_height = self.categories.len() as u16 + 3;
        let popup_height = (content_height + 6)
            .min(area.height.saturating_sub(4))
            .max(10);

        let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
        let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
        let popup_area = Rect::new(x, y, popup_width, popup_height);

        frame.render_widget(Clear, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(3),    // Category list
                Constraint::Length(3), // Help bar
            ])
            .split(popup_area);

        let header_text = match &self.current {
            Some(category) => format!("Current: {}", category),
            None => "No filter active".to_string(),
        };

        let header = Paragraph::new(Line::from(Span::styled(
            header_text,
            Style::default().fg(Color::Cyan),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Filter by Category ")
                .title_style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(header, chunks[0]);

        let marker = |active: bool| {
            Span::styled(
                if active { "● " } else { "  " },
                Style::default().fg(Color::Green),
            )
        };

        let mut items = vec![ListItem::new(Line::from(vec![
            marker(self.current.is_none()),
            Span::styled(ALL_CATEGORIES, Style::default().fg(Color::DarkGray)),
        ]))];

        for category in &self.categories {
            let is_current = self.current.as_deref() == Some(category.as_str());
            items.push(ListItem::new(Line::from(vec![
                marker(is_current),
                Span::styled(
                    category.clone(),
                    if is_current {
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::White)
                    },
                ),
            ])));
        }

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(list, chunks[1], &mut self.list_state);

        let help = Paragraph::new(Line::from(vec![
            Span::styled(" Enter ", Style::default().fg(Color::Yellow)),
            Span::raw("Select  "),
            Span::styled(" j/k ", Style::default().fg(Color::Cyan)),
            Span::raw("Navigate  "),
            Span::styled(" Esc/f ", Style::default().fg(Color::Yellow)),
            Span::raw("Cancel"),
        ]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn categories() -> Vec<String> {
        vec!["Books".to_string(), "Electronics".to_string()]
    }

    #[test]
    fn test_cursor_starts_on_active_category() {
        let mut dialog = CategoryDialog::new();
        dialog.set_categories(categories(), Some("Electronics"));
        assert_eq!(dialog.selected_index, 2);
        assert_eq!(dialog.selected_category(), Some("Electronics"));

        dialog.set_categories(categories(), None);
        assert_eq!(dialog.selected_category(), None);
    }

    #[test]
    fn test_enter_emits_choice() {
        let mut dialog = CategoryDialog::new();
        dialog.set_categories(categories(), None);

        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(dialog.handle_key_event(down).unwrap(), Some(Action::ModalDown));

        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(
            dialog.handle_key_event(enter).unwrap(),
            Some(Action::SetCategoryFilter(Some("Books".to_string())))
        );
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut dialog = CategoryDialog::new();
        dialog.set_categories(categories(), None);
        for _ in 0..5 {
            dialog.select_next();
        }
        assert_eq!(dialog.selected_index, 2);
        for _ in 0..5 {
            dialog.select_prev();
        }
        assert_eq!(dialog.selected_index, 0);
    }
}
