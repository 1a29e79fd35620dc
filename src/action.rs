//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to key events, and `App::update`
//! is the dispatch table that routes each one to its handler.

use crate::model::join::NamedQuery;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick with no input
    Tick,
    /// Terminal was resized
    Resize(u16, u16),

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    NextRow,
    PrevRow,
    FirstRow,
    LastRow,
    PageDown,
    PageUp,
    NextTab,
    PrevTab,

    // ─────────────────────────────────────────────────────────────────────────
    // Form editing
    // ─────────────────────────────────────────────────────────────────────────
    /// Move keyboard focus into the form
    FocusForm,
    /// Return keyboard focus to the table
    FocusTable,
    NextField,
    PrevField,
    FormInput(char),
    FormBackspace,

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────
    EnterSearchMode,
    SearchInput(char),
    SearchBackspace,
    /// Run the typed search
    SubmitSearch,
    /// Leave search mode without searching
    CancelSearch,

    // ─────────────────────────────────────────────────────────────────────────
    // Desk operations
    // ─────────────────────────────────────────────────────────────────────────
    /// Copy the selected row into the form
    FillForm,
    /// Insert the form as a new row
    CreateRecord,
    /// Write the form onto the selected row
    UpdateRecord,
    /// Ask for confirmation to delete the selected row
    DeleteRecord,
    ClearForm,
    /// Reload all rows, dropping any filter
    ResetFilter,
    /// Open the category picker
    OpenCategoryFilter,
    /// Apply a category filter; `None` means all categories
    SetCategoryFilter(Option<String>),
    /// Run one of the canned JOIN queries
    RunQuery(NamedQuery),

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    OpenQuitDialog,
    OpenHelp,
    CloseModal,
    /// Accept the current modal (quit, delete)
    ConfirmModal,
    ModalUp,
    ModalDown,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::NextRow => write!(f, "NextRow"),
            Action::PrevRow => write!(f, "PrevRow"),
            Action::FirstRow => write!(f, "FirstRow"),
            Action::LastRow => write!(f, "LastRow"),
            Action::PageDown => write!(f, "PageDown"),
            Action::PageUp => write!(f, "PageUp"),
            Action::NextTab => write!(f, "NextTab"),
            Action::PrevTab => write!(f, "PrevTab"),
            Action::FocusForm => write!(f, "FocusForm"),
            Action::FocusTable => write!(f, "FocusTable"),
            Action::NextField => write!(f, "NextField"),
            Action::PrevField => write!(f, "PrevField"),
            Action::FormInput(c) => write!(f, "FormInput('{}')", c),
            Action::FormBackspace => write!(f, "FormBackspace"),
            Action::EnterSearchMode => write!(f, "EnterSearchMode"),
            Action::SearchInput(c) => write!(f, "SearchInput('{}')", c),
            Action::SearchBackspace => write!(f, "SearchBackspace"),
            Action::SubmitSearch => write!(f, "SubmitSearch"),
            Action::CancelSearch => write!(f, "CancelSearch"),
            Action::FillForm => write!(f, "FillForm"),
            Action::CreateRecord => write!(f, "CreateRecord"),
            Action::UpdateRecord => write!(f, "UpdateRecord"),
            Action::DeleteRecord => write!(f, "DeleteRecord"),
            Action::ClearForm => write!(f, "ClearForm"),
            Action::ResetFilter => write!(f, "ResetFilter"),
            Action::OpenCategoryFilter => write!(f, "OpenCategoryFilter"),
            Action::SetCategoryFilter(Some(c)) => write!(f, "SetCategoryFilter({})", c),
            Action::SetCategoryFilter(None) => write!(f, "SetCategoryFilter(all)"),
            Action::RunQuery(q) => write!(f, "RunQuery({})", q.label()),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ConfirmModal => write!(f, "ConfirmModal"),
            Action::ModalUp => write!(f, "ModalUp"),
            Action::ModalDown => write!(f, "ModalDown"),
        }
    }
}
