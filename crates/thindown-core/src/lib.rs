//! Core types for the THINDOWN site forms and content.
//!
//! This crate has no HTTP dependencies. It holds the form
//! schemas and their validation, the submission status state machine, and the
//! static catalog the site is built from. `thindown-forms`, `thindown-site`
//! and `thindown-cli` all depend on it.

pub mod catalog;
pub mod choice;
pub mod constraint;
pub mod error;
pub mod field;
pub mod form;
pub mod forms;
pub mod status;
pub mod text;

pub use error::{Error, Result};
