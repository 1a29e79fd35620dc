//! Desks - the logic between a form, a result table, and a store
//!
//! A desk owns its `Store` and never touches widgets directly: everything it
//! wants shown goes through the `TableView` trait. Each operation runs one
//! statement and then refreshes the view, or fails with a `DeskError` before
//! mutating anything.

pub mod employees;
pub mod joins;
pub mod products;

pub use employees::EmployeeDesk;
pub use joins::JoinDesk;
pub use products::ProductDesk;

use crate::model::filter::ViewFilter;

/// What a desk can do to the screen
pub trait TableView {
    /// Replace the table contents
    fn set_rows(&mut self, headers: Vec<String>, rows: Vec<Vec<String>>);

    /// Summary line derived from the rows shown
    fn set_summary(&mut self, summary: String);

    /// Transient status line
    fn set_status(&mut self, status: String);

    /// Current display state, for the filter line
    fn set_filter(&mut self, filter: &ViewFilter);

    /// Choices for the category picker
    fn set_filter_options(&mut self, options: Vec<String>);

    /// Put values into the edit form, in field order
    fn set_form(&mut self, values: Vec<String>);

    fn clear_form(&mut self);
}

pub(crate) fn headers_of(columns: &[&str]) -> Vec<String> {
    columns.iter().map(|c| c.to_string()).collect()
}
