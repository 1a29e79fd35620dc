//! Notice dialog component
//!
//! Shows the outcome of an action (success, bad input, store failure) until
//! the user dismisses it.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::model::notice::{Notice, NoticeLevel};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

#[derive(Default)]
pub struct NoticeDialog;

fn level_color(level: NoticeLevel) -> Color {
    match level {
        NoticeLevel::Info => Color::Green,
        NoticeLevel::Warning => Color::Yellow,
        NoticeLevel::Error => Color::Red,
    }
}

impl NoticeDialog {
    pub fn draw_with_notice(&mut self, frame: &mut Frame, area: Rect, notice: &Notice) -> Result<()> {
        let color = level_color(notice.level);

        // Wide enough for most messages; long ones wrap
        let message_len = notice.message.chars().count() as u16;
        let width = (message_len + 6).clamp(36, 70);
        let message_lines = message_len.div_ceil(width - 4).max(1);
        let popup_area = centered_popup(area, width, message_lines + 6);
        frame.render_widget(Clear, popup_area);

        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                notice.message.clone(),
                Style::default().fg(Color::White),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    " Enter/Esc ",
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::raw("OK"),
            ]),
        ];

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .title(format!(" {} ", notice.title))
                    .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

impl Component for NoticeDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') | KeyCode::Char('q') => {
                Some(Action::CloseModal)
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        Ok(())
    }
}
