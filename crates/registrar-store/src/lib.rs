//! Registrar Store - flat-file persistence for the registrar
//!
//! This crate maps the in-memory Registry to three comma-delimited text
//! files (students, courses, enrollments) and back, reconstructing the
//! enrollment graph on load by replaying enrollment lines through the core
//! operations. It also provides the backup utilities behind the CLI's file
//! menu.

pub mod backup;
pub mod errors;
pub mod flatfile;

pub use errors::{Result, StoreError};
pub use flatfile::{export_all, import_all, ImportSummary};
