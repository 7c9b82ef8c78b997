//! Domain model for the registrar
//!
//! Students and Courses are independent entities keyed by business
//! identifiers; an Enrollment is a relationship record owned by a Student,
//! referencing its Course by code.

mod course;
mod enrollment;
mod student;

pub use course::{Course, CourseSpec, ParseSemesterError, Semester};
pub use enrollment::{Enrollment, Grade, ParseGradeError};
pub use student::Student;
