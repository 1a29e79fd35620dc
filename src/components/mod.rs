//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod category_dialog;
pub mod confirm_dialog;
pub mod desk_screen;
pub mod help_dialog;
pub mod layout;
pub mod notice_dialog;
pub mod quit_dialog;
pub mod table;

pub use category_dialog::CategoryDialog;
pub use confirm_dialog::ConfirmDeleteDialog;
pub use desk_screen::DeskScreen;
pub use help_dialog::HelpDialog;
pub use layout::{calculate_desk_layout, centered_popup};
pub use notice_dialog::NoticeDialog;
pub use quit_dialog::QuitDialog;
