//! Flat-file codec for the registrar's three data files
//!
//! Bidirectional mapping between the in-memory Registry and three
//! comma-delimited text files, one record per line, no header row.

pub mod codec;
mod export;
mod import;

pub use export::export_all;
pub use import::{import_all, ImportSummary};

/// File names under the data directory
pub const STUDENTS_FILE: &str = "students.csv";
pub const COURSES_FILE: &str = "courses.csv";
pub const ENROLLMENTS_FILE: &str = "enrollments.csv";
