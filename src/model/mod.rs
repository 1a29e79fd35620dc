//! Model layer - records, form parsing, and presentation state
//!
//! This module contains all state-related types:
//! - `Product`, `Employee` - Rows and their form/patch forms
//! - `ViewFilter`, `NamedQuery` - What a desk currently shows
//! - `ModalStack`, `Tab`, `Focus` - Presentation state

pub mod employee;
pub mod filter;
pub mod input;
pub mod join;
pub mod modal;
pub mod notice;
pub mod product;
pub mod ui;
