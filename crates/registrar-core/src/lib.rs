//! Registrar Core - in-memory academic records kernel
//!
//! This crate provides the domain model and operations for the registrar,
//! including:
//! - Student, Course, and Enrollment models with business-identifier keys
//! - The Registry entity store with uniqueness enforcement
//! - Enrollment operations with duplicate and credit-ceiling rules
//! - Transcript rendering with a credit-weighted GPA
//! - Configuration and logging initialization
//!
//! Persistence lives in `registrar-store`; the interactive surface lives in
//! `registrar-cli`.

pub mod config;
pub mod errors;
pub mod logging;
pub mod model;
pub mod ops;
pub mod transcript;

// Re-export commonly used types
pub use config::AppConfig;
pub use errors::{RegistrarError, Result};
pub use model::{Course, CourseSpec, Enrollment, Grade, Semester, Student};
pub use ops::Registry;
