//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! App holds no record logic of its own: it routes Actions to the desk of the
//! active tab and turns every outcome into a status line or a notice.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    CategoryDialog, ConfirmDeleteDialog, DeskScreen, HelpDialog, NoticeDialog, QuitDialog,
};
use crate::desk::{EmployeeDesk, JoinDesk, ProductDesk, TableView};
use crate::error::DeskResult;
use crate::model::employee::{EmployeeForm, EMPLOYEE_FIELDS};
use crate::model::filter::ViewFilter;
use crate::model::join::NamedQuery;
use crate::model::modal::{Modal, ModalStack, PendingDelete};
use crate::model::notice::Notice;
use crate::model::product::{ProductForm, PRODUCT_FIELDS};
use crate::model::ui::Tab;
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};
use tracing::{debug, info, warn};

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between desks and components
pub struct App {
    pub active_tab: Tab,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // Desks
    // ─────────────────────────────────────────────────────────────────────────
    products: ProductDesk,
    employees: EmployeeDesk,
    joins: JoinDesk,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub product_screen: DeskScreen,
    pub employee_screen: DeskScreen,
    pub join_screen: DeskScreen,
    pub quit_dialog: QuitDialog,
    pub confirm_dialog: ConfirmDeleteDialog,
    pub notice_dialog: NoticeDialog,
    pub category_dialog: CategoryDialog,
    pub help_dialog: HelpDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    pub fn new(products: ProductDesk, employees: EmployeeDesk, joins: JoinDesk) -> App {
        App {
            active_tab: Tab::Products,
            modals: ModalStack::new(),
            should_quit: false,
            products,
            employees,
            joins,
            product_screen: DeskScreen::new(Tab::Products, &PRODUCT_FIELDS),
            employee_screen: DeskScreen::new(Tab::Employees, &EMPLOYEE_FIELDS),
            join_screen: DeskScreen::new(Tab::Joins, &[]),
            quit_dialog: QuitDialog,
            confirm_dialog: ConfirmDeleteDialog,
            notice_dialog: NoticeDialog,
            category_dialog: CategoryDialog::new(),
            help_dialog: HelpDialog::default(),
        }
    }

    /// Release all three stores. Consumes the app, so it runs once.
    pub fn close(self) -> DeskResult<()> {
        let results = [
            self.products.close(),
            self.employees.close(),
            self.joins.close(),
        ];
        info!("desks closed");
        results.into_iter().collect()
    }

    fn active_screen_mut(&mut self) -> &mut DeskScreen {
        match self.active_tab {
            Tab::Products => &mut self.product_screen,
            Tab::Employees => &mut self.employee_screen,
            Tab::Joins => &mut self.join_screen,
        }
    }

    /// Turn an action outcome into a notice modal
    fn settle(&mut self, action: &Action, outcome: DeskResult<Option<Notice>>) {
        match outcome {
            Ok(Some(notice)) => self.modals.push(Modal::Notice(notice)),
            Ok(None) => {}
            Err(err) => {
                warn!(%action, error = %err, "action failed");
                self.modals.push(Modal::Notice(Notice::from(&err)));
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Desk operations, routed by active tab
    // ─────────────────────────────────────────────────────────────────────────

    fn initial_load(&mut self) -> DeskResult<()> {
        self.products.reset(&mut self.product_screen)?;
        self.products.refresh_categories(&mut self.product_screen)?;
        self.employees.reset(&mut self.employee_screen)?;
        self.joins
            .run_named_query(&mut self.join_screen, NamedQuery::ShowTables)?;
        Ok(())
    }

    fn fill_form(&mut self) -> DeskResult<Option<Notice>> {
        match self.active_tab {
            Tab::Products => {
                let selected = self.selected_product();
                self.products.fill_form(&mut self.product_screen, selected)?;
            }
            Tab::Employees => {
                let selected = self.selected_employee();
                self.employees.fill_form(&mut self.employee_screen, selected)?;
            }
            Tab::Joins => {}
        }
        Ok(None)
    }

    fn create_record(&mut self) -> DeskResult<Option<Notice>> {
        let notice = match self.active_tab {
            Tab::Products => {
                let form = ProductForm::from_values(self.product_screen.form_values());
                self.products.create(&mut self.product_screen, &form)?
            }
            Tab::Employees => {
                let form = EmployeeForm::from_values(self.employee_screen.form_values());
                self.employees.create(&mut self.employee_screen, &form)?
            }
            Tab::Joins => return Ok(None),
        };
        Ok(Some(notice))
    }

    fn update_record(&mut self) -> DeskResult<Option<Notice>> {
        let notice = match self.active_tab {
            Tab::Products => {
                let selected = self.selected_product();
                let form = ProductForm::from_values(self.product_screen.form_values());
                self.products
                    .update(&mut self.product_screen, selected, &form)?
            }
            Tab::Employees => {
                let selected = self.selected_employee();
                let form = EmployeeForm::from_values(self.employee_screen.form_values());
                self.employees
                    .update(&mut self.employee_screen, selected, &form)?
            }
            Tab::Joins => return Ok(None),
        };
        Ok(Some(notice))
    }

    fn request_delete(&mut self) -> DeskResult<Option<Notice>> {
        let pending = match self.active_tab {
            Tab::Products => self.products.request_delete(self.selected_product())?,
            Tab::Employees => self.employees.request_delete(self.selected_employee())?,
            Tab::Joins => return Ok(None),
        };
        self.modals.push(Modal::ConfirmDelete(pending));
        Ok(None)
    }

    fn confirm_delete(&mut self, pending: &PendingDelete) -> DeskResult<Option<Notice>> {
        let notice = match pending.tab {
            Tab::Products => self
                .products
                .confirm_delete(&mut self.product_screen, pending)?,
            Tab::Employees => self
                .employees
                .confirm_delete(&mut self.employee_screen, pending)?,
            Tab::Joins => return Ok(None),
        };
        Ok(Some(notice))
    }

    fn reset_filter(&mut self) -> DeskResult<Option<Notice>> {
        match self.active_tab {
            Tab::Products => self.products.reset(&mut self.product_screen)?,
            Tab::Employees => self.employees.reset(&mut self.employee_screen)?,
            Tab::Joins => {}
        }
        Ok(None)
    }

    fn submit_search(&mut self) -> DeskResult<Option<Notice>> {
        let term = self.active_screen_mut().take_search_query();
        match self.active_tab {
            Tab::Products => self.products.search(&mut self.product_screen, &term),
            Tab::Employees => self.employees.search(&mut self.employee_screen, &term),
            Tab::Joins => Ok(None),
        }
    }

    fn open_category_filter(&mut self) {
        let current = match self.products.filter() {
            ViewFilter::Category(category) => Some(category.as_str()),
            _ => None,
        };
        self.category_dialog
            .set_categories(self.product_screen.filter_options().to_vec(), current);
        self.modals.push(Modal::CategoryFilter {
            selected_index: self.category_dialog.selected_index,
        });
    }

    fn selected_product(&self) -> Option<i64> {
        self.product_screen
            .selected_index()
            .and_then(|i| self.products.id_at(i))
    }

    fn selected_employee(&self) -> Option<i64> {
        self.employee_screen
            .selected_index()
            .and_then(|i| self.employees.id_at(i))
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        if let Err(err) = self.initial_load() {
            warn!(error = %err, "initial load failed");
            self.modals.push(Modal::Notice(Notice::from(&err)));
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match self.modals.top().cloned() {
            Some(Modal::QuitConfirm) => self.quit_dialog.handle_key_event(key),
            Some(Modal::ConfirmDelete(_)) => self.confirm_dialog.handle_key_event(key),
            Some(Modal::Notice(_)) => self.notice_dialog.handle_key_event(key),
            Some(Modal::CategoryFilter { .. }) => self.category_dialog.handle_key_event(key),
            Some(Modal::Help) => self.help_dialog.handle_key_event(key),
            None => self.active_screen_mut().handle_key_event(key),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        debug!(%action, "dispatch");
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick | Action::Resize(_, _) => {}

            // ─────────────────────────────────────────────────────────────────
            // Navigation, form and search editing (delegate to the screen)
            // ─────────────────────────────────────────────────────────────────
            Action::NextRow
            | Action::PrevRow
            | Action::FirstRow
            | Action::LastRow
            | Action::PageDown
            | Action::PageUp
            | Action::FocusForm
            | Action::FocusTable
            | Action::NextField
            | Action::PrevField
            | Action::FormInput(_)
            | Action::FormBackspace
            | Action::EnterSearchMode
            | Action::SearchInput(_)
            | Action::SearchBackspace
            | Action::CancelSearch => {
                return self.active_screen_mut().update(action);
            }
            Action::NextTab => self.active_tab = self.active_tab.next(),
            Action::PrevTab => self.active_tab = self.active_tab.previous(),

            // ─────────────────────────────────────────────────────────────────
            // Desk operations
            // ─────────────────────────────────────────────────────────────────
            Action::FillForm => {
                let outcome = self.fill_form();
                self.settle(&action, outcome);
            }
            Action::CreateRecord => {
                let outcome = self.create_record();
                self.settle(&action, outcome);
            }
            Action::UpdateRecord => {
                let outcome = self.update_record();
                self.settle(&action, outcome);
            }
            Action::DeleteRecord => {
                let outcome = self.request_delete();
                self.settle(&action, outcome);
            }
            Action::ClearForm => {
                let screen = self.active_screen_mut();
                screen.clear_form();
                screen.set_status("Form cleared".to_string());
            }
            Action::ResetFilter => {
                let outcome = self.reset_filter();
                self.settle(&action, outcome);
            }
            Action::SubmitSearch => {
                let outcome = self.submit_search();
                self.settle(&action, outcome);
            }
            Action::OpenCategoryFilter => self.open_category_filter(),
            Action::SetCategoryFilter(ref category) => {
                self.modals.pop();
                let outcome = self
                    .products
                    .filter_by_category(&mut self.product_screen, category.clone())
                    .map(|_| None);
                self.settle(&action, outcome);
            }
            Action::RunQuery(query) => {
                let outcome = self
                    .joins
                    .run_named_query(&mut self.join_screen, query)
                    .map(|_| None);
                self.settle(&action, outcome);
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
            Action::CloseModal => {
                self.modals.pop();
            }
            Action::ConfirmModal => match self.modals.pop() {
                Some(Modal::QuitConfirm) => {
                    self.should_quit = true;
                }
                Some(Modal::ConfirmDelete(pending)) => {
                    let outcome = self.confirm_delete(&pending);
                    self.settle(&action, outcome);
                }
                Some(other) => self.modals.push(other),
                None => {}
            },
            Action::ModalUp | Action::ModalDown => {
                // CategoryDialog moves its own cursor in handle_key_event
                if let Some(Modal::CategoryFilter { selected_index }) = self.modals.top_mut() {
                    *selected_index = self.category_dialog.selected_index;
                }
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.active_screen_mut().draw(frame, area)?;

        // Draw modal overlay if active
        match self.modals.top().cloned() {
            Some(Modal::QuitConfirm) => self.quit_dialog.draw(frame, area)?,
            Some(Modal::ConfirmDelete(pending)) => {
                self.confirm_dialog.draw_with_pending(frame, area, &pending)?
            }
            Some(Modal::Notice(notice)) => {
                self.notice_dialog.draw_with_notice(frame, area, &notice)?
            }
            Some(Modal::CategoryFilter { .. }) => self.category_dialog.draw(frame, area)?,
            Some(Modal::Help) => self.help_dialog.draw(frame, area)?,
            None => {}
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::notice::NoticeLevel;
    use crate::model::ui::Focus;
    use crate::store::Store;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn app() -> App {
        let products = ProductDesk::open(Store::open_in_memory().unwrap()).unwrap();
        let employees = EmployeeDesk::open(Store::open_in_memory().unwrap()).unwrap();
        let joins = JoinDesk::open(Store::open_in_memory().unwrap()).unwrap();
        let mut app = App::new(products, employees, joins);
        app.init().unwrap();
        app
    }

    /// Feed one key through the same loop main runs
    fn press(app: &mut App, code: KeyCode) {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        let mut next = app.handle_key_event(key).unwrap();
        while let Some(action) = next {
            next = app.update(action).unwrap();
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn top_notice(app: &App) -> Option<&Notice> {
        match app.modals.top() {
            Some(Modal::Notice(notice)) => Some(notice),
            _ => None,
        }
    }

    #[test]
    fn test_init_loads_every_tab() {
        let app = app();
        assert_eq!(app.product_screen.rows().len(), 8);
        assert!(app.product_screen.summary().starts_with("Products: 8"));
        assert_eq!(app.employee_screen.rows().len(), 3);
        assert_eq!(app.employee_screen.status(), "Loaded 3 records");
        assert_eq!(app.join_screen.headers()[0], "Table");
        assert!(!app.product_screen.filter_options().is_empty());
        assert!(app.modals.top().is_none());
    }

    #[test]
    fn test_add_with_blank_name_warns() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));

        let notice = top_notice(&app).unwrap();
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(app.product_screen.rows().len(), 8);

        press(&mut app, KeyCode::Enter);
        assert!(app.modals.top().is_none());
    }

    #[test]
    fn test_add_product_through_form() {
        let mut app = app();
        press(&mut app, KeyCode::Char('i'));
        type_text(&mut app, "Desk Lamp");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Home");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "19.5");
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('a'));

        assert_eq!(top_notice(&app).unwrap().level, NoticeLevel::Info);
        assert_eq!(app.product_screen.rows().len(), 9);
        assert!(app.product_screen.form_values().iter().all(String::is_empty));
        assert!(app
            .product_screen
            .filter_options()
            .contains(&"Home".to_string()));
    }

    #[test]
    fn test_delete_needs_confirmation() {
        let mut app = app();
        press(&mut app, KeyCode::Char('d'));
        assert!(matches!(app.modals.top(), Some(Modal::ConfirmDelete(_))));

        press(&mut app, KeyCode::Char('n'));
        assert!(app.modals.top().is_none());
        assert_eq!(app.product_screen.rows().len(), 8);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.product_screen.rows().len(), 7);
        assert_eq!(top_notice(&app).unwrap().title, "Success");
    }

    #[test]
    fn test_update_without_selection() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "zzz");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.product_screen.rows().len(), 0);
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('u'));
        assert_eq!(top_notice(&app).unwrap().title, "No selection");
    }

    #[test]
    fn test_search_then_reset() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "MON");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.product_screen.focus, Focus::Table);
        assert_eq!(app.product_screen.rows().len(), 1);
        assert_eq!(app.product_screen.rows()[0][1], "Monitor");

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.product_screen.rows().len(), 8);
    }

    #[test]
    fn test_category_filter_flow() {
        let mut app = app();
        press(&mut app, KeyCode::Char('f'));
        assert!(matches!(app.modals.top(), Some(Modal::CategoryFilter { .. })));

        press(&mut app, KeyCode::Down);
        assert_eq!(
            app.modals.top(),
            Some(&Modal::CategoryFilter { selected_index: 1 })
        );
        press(&mut app, KeyCode::Enter);

        assert!(app.modals.top().is_none());
        let category = app.category_dialog.categories[0].clone();
        assert!(app
            .product_screen
            .rows()
            .iter()
            .all(|row| row[2] == category));
    }

    #[test]
    fn test_fill_form_from_selection() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_tab, Tab::Employees);

        press(&mut app, KeyCode::Enter);
        assert!(app.modals.top().is_none());
        let row = &app.employee_screen.rows()[0];
        assert_eq!(app.employee_screen.form_values()[0], row[0]);
        assert_eq!(app.employee_screen.form_values()[1], row[1]);
    }

    #[test]
    fn test_join_tab_runs_queries() {
        let mut app = app();
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.active_tab, Tab::Joins);

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.join_screen.rows().len(), 6);
        assert_eq!(app.join_screen.status(), "LEFT JOIN: 6 rows found");

        // Form keys do nothing here
        press(&mut app, KeyCode::Char('a'));
        assert!(app.modals.top().is_none());
    }

    #[test]
    fn test_quit_flow_and_close() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Esc);
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
        assert!(app.close().is_ok());
    }

    #[test]
    fn test_draw_smoke() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();

        terminal
            .draw(|frame| app.draw(frame, frame.area()).unwrap())
            .unwrap();
        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Products (8)"));
        assert!(screen.contains("Laptop"));

        press(&mut app, KeyCode::Char('?'));
        terminal
            .draw(|frame| app.draw(frame, frame.area()).unwrap())
            .unwrap();
        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Keyboard Shortcuts"));
    }
}
