//! Desk screen component
//!
//! One screen per tab: an edit form, the result table, a summary line, and
//! a status line. Desks write to it through `TableView`; keys are turned
//! into Actions here and the App routes the ones that need a desk.

use crate::action::Action;
use crate::component::Component;
use crate::components::calculate_desk_layout;
use crate::components::table::DataTable;
use crate::desk::TableView;
use crate::model::filter::ViewFilter;
use crate::model::join::NamedQuery;
use crate::model::ui::{Focus, Tab};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

pub struct DeskScreen {
    tab: Tab,
    /// Form labels in field order; empty for read-only screens
    labels: &'static [&'static str],
    form: Vec<String>,
    pub focus: Focus,
    pub search_query: String,
    table: DataTable,
    summary: String,
    status: String,
    filter_line: Option<String>,
    filter_options: Vec<String>,
}

impl DeskScreen {
    pub fn new(tab: Tab, labels: &'static [&'static str]) -> Self {
        Self {
            tab,
            labels,
            form: vec![String::new(); labels.len()],
            focus: Focus::Table,
            search_query: String::new(),
            table: DataTable::default(),
            summary: String::new(),
            status: String::new(),
            filter_line: None,
            filter_options: Vec::new(),
        }
    }

    pub fn has_form(&self) -> bool {
        !self.labels.is_empty()
    }

    fn has_categories(&self) -> bool {
        self.tab == Tab::Products
    }

    fn has_search(&self) -> bool {
        self.tab != Tab::Joins
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.table.selected()
    }

    pub fn form_values(&self) -> &[String] {
        &self.form
    }

    #[cfg(test)]
    pub fn headers(&self) -> &[String] {
        self.table.headers()
    }

    #[cfg(test)]
    pub fn rows(&self) -> &[Vec<String>] {
        self.table.rows()
    }

    #[cfg(test)]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    #[cfg(test)]
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn filter_options(&self) -> &[String] {
        &self.filter_options
    }

    /// Leave search mode, returning what was typed
    pub fn take_search_query(&mut self) -> String {
        self.focus = Focus::Table;
        std::mem::take(&mut self.search_query)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Key maps per focus
    // ─────────────────────────────────────────────────────────────────────────

    fn table_key(&self, key: KeyEvent) -> Option<Action> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextRow),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevRow),
            KeyCode::Char('g') => Some(Action::FirstRow),
            KeyCode::Char('G') => Some(Action::LastRow),
            KeyCode::Char('d') if ctrl => Some(Action::PageDown),
            KeyCode::Char('u') if ctrl => Some(Action::PageUp),
            KeyCode::Char('c') if ctrl => Some(Action::OpenQuitDialog),
            // Other Ctrl chords must not fall through to the letter actions
            KeyCode::Char(_) if ctrl => None,
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::Tab => Some(Action::NextTab),
            KeyCode::BackTab => Some(Action::PrevTab),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),

            KeyCode::Enter if self.has_form() => Some(Action::FillForm),
            KeyCode::Char('i') if self.has_form() => Some(Action::FocusForm),
            KeyCode::Char('a') if self.has_form() => Some(Action::CreateRecord),
            KeyCode::Char('u') if self.has_form() => Some(Action::UpdateRecord),
            KeyCode::Char('d') if self.has_form() => Some(Action::DeleteRecord),
            KeyCode::Char('c') if self.has_form() => Some(Action::ClearForm),

            KeyCode::Char('/') if self.has_search() => Some(Action::EnterSearchMode),
            KeyCode::Char('r') if self.has_search() => Some(Action::ResetFilter),
            KeyCode::Char('f') if self.has_categories() => Some(Action::OpenCategoryFilter),

            KeyCode::Char(c) if self.tab == Tab::Joins => {
                NamedQuery::from_key(c).map(Action::RunQuery)
            }
            _ => None,
        }
    }

    fn form_key(&self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::FocusTable),
            KeyCode::Tab | KeyCode::Down => Some(Action::NextField),
            KeyCode::BackTab | KeyCode::Up => Some(Action::PrevField),
            KeyCode::Backspace => Some(Action::FormBackspace),
            KeyCode::Char(c) => Some(Action::FormInput(c)),
            _ => None,
        }
    }

    fn search_key(&self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => Some(Action::CancelSearch),
            KeyCode::Enter => Some(Action::SubmitSearch),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Char(c) => Some(Action::SearchInput(c)),
            _ => None,
        }
    }

    fn focused_field_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Form(index) => self.form.get_mut(index),
            _ => None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────────

    fn draw_tabs(&self, frame: &mut Frame, area: Rect) {
        let all_tabs = Tab::all();
        let titles: Vec<&str> = all_tabs.iter().map(|t| t.name()).collect();
        let selected = all_tabs.iter().position(|t| *t == self.tab).unwrap_or(0);

        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::BOTTOM))
            .select(selected)
            .style(Style::default().fg(Color::DarkGray))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_widget(tabs, area);
    }

    fn draw_form(&self, frame: &mut Frame, area: Rect) {
        let label_width = self.labels.iter().map(|l| l.len()).max().unwrap_or(0);

        let lines: Vec<Line> = self
            .labels
            .iter()
            .zip(&self.form)
            .enumerate()
            .map(|(i, (label, value))| {
                let focused = self.focus == Focus::Form(i);
                let marker = if focused { "▶ " } else { "  " };
                let value_text = if focused {
                    format!("{}_", value)
                } else {
                    value.clone()
                };
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Green)),
                    Span::styled(
                        format!("{:>width$}: ", label, width = label_width),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        value_text,
                        if focused {
                            Style::default()
                                .fg(Color::Cyan)
                                .add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().fg(Color::White)
                        },
                    ),
                ])
            })
            .collect();

        let border = if matches!(self.focus, Focus::Form(_)) {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Form ")
                .border_style(Style::default().fg(border)),
        );
        frame.render_widget(paragraph, area);
    }

    fn table_title(&self) -> String {
        let mut title = format!(" {} ({}) ", self.tab.name(), self.table.rows().len());
        if let Some(filter) = &self.filter_line {
            title = format!("{} [{}] ", title.trim_end(), filter);
        }
        title
    }

    fn draw_help_bar(&self, frame: &mut Frame, area: Rect) {
        let key = |k: &str, color: Color| {
            Span::styled(
                format!(" {} ", k),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        };

        let spans = match self.focus {
            Focus::Search => vec![
                key("Esc", Color::Yellow),
                Span::raw("Cancel  "),
                key("Enter", Color::Green),
                Span::raw("Search  "),
                Span::styled(
                    format!("Search: {}_", self.search_query),
                    Style::default().fg(Color::Cyan),
                ),
            ],
            Focus::Form(_) => vec![
                key("Tab/↓", Color::Cyan),
                Span::raw("Next field "),
                key("S-Tab/↑", Color::Cyan),
                Span::raw("Previous "),
                key("Esc/Enter", Color::Yellow),
                Span::raw("Back to table"),
            ],
            Focus::Table if self.tab == Tab::Joins => {
                let mut spans = vec![key("q", Color::Yellow), Span::raw("Quit ")];
                for query in NamedQuery::all() {
                    spans.push(key(&query.key().to_string(), Color::Green));
                    spans.push(Span::raw(format!("{} ", query.label())));
                }
                spans.push(key("?", Color::White));
                spans.push(Span::raw("Help"));
                spans
            }
            Focus::Table => {
                let mut spans = vec![
                    key("q", Color::Yellow),
                    Span::raw("Quit "),
                    key("a", Color::Green),
                    Span::raw("Add "),
                    key("u", Color::Green),
                    Span::raw("Update "),
                    key("d", Color::Red),
                    Span::raw("Delete "),
                    key("i", Color::Cyan),
                    Span::raw("Edit "),
                    key("/", Color::Cyan),
                    Span::raw("Search "),
                ];
                if self.has_categories() {
                    spans.push(key("f", Color::Magenta));
                    spans.push(Span::raw("Category "));
                }
                spans.push(key("?", Color::White));
                spans.push(Span::raw("Help"));
                spans
            }
        };

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

impl TableView for DeskScreen {
    fn set_rows(&mut self, headers: Vec<String>, rows: Vec<Vec<String>>) {
        self.table.set_data(headers, rows);
    }

    fn set_summary(&mut self, summary: String) {
        self.summary = summary;
    }

    fn set_status(&mut self, status: String) {
        self.status = status;
    }

    fn set_filter(&mut self, filter: &ViewFilter) {
        self.filter_line = filter.describe();
    }

    fn set_filter_options(&mut self, options: Vec<String>) {
        self.filter_options = options;
    }

    fn set_form(&mut self, mut values: Vec<String>) {
        values.resize(self.labels.len(), String::new());
        self.form = values;
    }

    fn clear_form(&mut self) {
        self.form = vec![String::new(); self.labels.len()];
    }
}

impl Component for DeskScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match self.focus {
            Focus::Table => self.table_key(key),
            Focus::Form(_) => self.form_key(key),
            Focus::Search => self.search_key(key),
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::NextRow => self.table.next(),
            Action::PrevRow => self.table.previous(),
            Action::FirstRow => self.table.select_first(),
            Action::LastRow => self.table.select_last(),
            Action::PageDown => self.table.page_down(),
            Action::PageUp => self.table.page_up(),

            Action::FocusForm if self.has_form() => self.focus = Focus::Form(0),
            Action::FocusTable => self.focus = Focus::Table,
            Action::NextField => {
                if let Focus::Form(index) = self.focus {
                    self.focus = Focus::Form((index + 1) % self.labels.len());
                }
            }
            Action::PrevField => {
                if let Focus::Form(index) = self.focus {
                    let count = self.labels.len();
                    self.focus = Focus::Form((index + count - 1) % count);
                }
            }
            Action::FormInput(c) => {
                if let Some(field) = self.focused_field_mut() {
                    field.push(c);
                }
            }
            Action::FormBackspace => {
                if let Some(field) = self.focused_field_mut() {
                    field.pop();
                }
            }

            Action::EnterSearchMode => {
                self.search_query.clear();
                self.focus = Focus::Search;
            }
            Action::SearchInput(c) => self.search_query.push(c),
            Action::SearchBackspace => {
                self.search_query.pop();
            }
            Action::CancelSearch => {
                self.search_query.clear();
                self.focus = Focus::Table;
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_desk_layout(area, self.labels.len());

        self.draw_tabs(frame, layout.tabs);
        if let Some(form_area) = layout.form {
            self.draw_form(frame, form_area);
        }

        let title = self.table_title();
        self.table.draw(frame, layout.table, title);

        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {}", self.summary),
                Style::default().fg(Color::Yellow),
            )),
            layout.summary,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {}", self.status),
                Style::default().fg(Color::Green),
            )),
            layout.status,
        );
        self.draw_help_bar(frame, layout.help);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::product::PRODUCT_FIELDS;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn product_screen() -> DeskScreen {
        DeskScreen::new(Tab::Products, &PRODUCT_FIELDS)
    }

    fn apply(screen: &mut DeskScreen, code: KeyCode) {
        if let Some(action) = screen.handle_key_event(key(code)).unwrap() {
            screen.update(action).unwrap();
        }
    }

    #[test]
    fn test_table_keys() {
        let screen = product_screen();
        assert_eq!(screen.table_key(key(KeyCode::Char('a'))), Some(Action::CreateRecord));
        assert_eq!(screen.table_key(key(KeyCode::Enter)), Some(Action::FillForm));
        assert_eq!(
            screen.table_key(key(KeyCode::Char('f'))),
            Some(Action::OpenCategoryFilter)
        );
        assert_eq!(screen.table_key(key(KeyCode::Char('1'))), None);
    }

    #[test]
    fn test_ctrl_c_keeps_form() {
        let mut screen = product_screen();
        screen.set_form(vec!["Lamp".to_string(), "Home".to_string()]);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(screen.table_key(ctrl_c), Some(Action::OpenQuitDialog));
        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(screen.table_key(ctrl_a), None);
        assert_eq!(screen.form_values()[0], "Lamp");
    }

    #[test]
    fn test_joins_screen_keys() {
        let screen = DeskScreen::new(Tab::Joins, &[]);
        assert_eq!(
            screen.table_key(key(KeyCode::Char('2'))),
            Some(Action::RunQuery(NamedQuery::LeftJoin))
        );
        assert_eq!(screen.table_key(key(KeyCode::Char('a'))), None);
        assert_eq!(screen.table_key(key(KeyCode::Char('/'))), None);
        assert_eq!(screen.table_key(key(KeyCode::Char('q'))), Some(Action::OpenQuitDialog));
    }

    #[test]
    fn test_form_typing_and_field_cycle() {
        let mut screen = product_screen();
        apply(&mut screen, KeyCode::Char('i'));
        assert_eq!(screen.focus, Focus::Form(0));

        for c in "Pen".chars() {
            apply(&mut screen, KeyCode::Char(c));
        }
        apply(&mut screen, KeyCode::Tab);
        apply(&mut screen, KeyCode::Char('x'));
        apply(&mut screen, KeyCode::Backspace);
        apply(&mut screen, KeyCode::BackTab);
        apply(&mut screen, KeyCode::BackTab);
        assert_eq!(screen.focus, Focus::Form(PRODUCT_FIELDS.len() - 1));

        apply(&mut screen, KeyCode::Esc);
        assert_eq!(screen.focus, Focus::Table);
        assert_eq!(screen.form_values()[0], "Pen");
        assert_eq!(screen.form_values()[1], "");
    }

    #[test]
    fn test_search_mode_round_trip() {
        let mut screen = product_screen();
        apply(&mut screen, KeyCode::Char('/'));
        assert_eq!(screen.focus, Focus::Search);
        apply(&mut screen, KeyCode::Char('m'));
        apply(&mut screen, KeyCode::Char('o'));
        assert_eq!(screen.search_query, "mo");

        assert_eq!(
            screen.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::SubmitSearch)
        );
        assert_eq!(screen.take_search_query(), "mo");
        assert_eq!(screen.focus, Focus::Table);
        assert!(screen.search_query.is_empty());
    }

    #[test]
    fn test_set_form_pads_to_field_count() {
        let mut screen = product_screen();
        screen.set_form(vec!["Lamp".to_string()]);
        assert_eq!(screen.form_values().len(), PRODUCT_FIELDS.len());
        screen.clear_form();
        assert!(screen.form_values().iter().all(String::is_empty));
    }

    #[test]
    fn test_filter_shows_in_title() {
        let mut screen = product_screen();
        screen.set_filter(&ViewFilter::Category("Books".to_string()));
        assert_eq!(screen.table_title(), " Products (0) [category = Books] ");
        screen.set_filter(&ViewFilter::All);
        assert_eq!(screen.table_title(), " Products (0) ");
    }
}
