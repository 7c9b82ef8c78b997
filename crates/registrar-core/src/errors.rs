use thiserror::Error;

/// Result type alias using RegistrarError
pub type Result<T> = std::result::Result<T, RegistrarError>;

/// Error taxonomy for registrar operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistrarError {
    // ===== Lookup Errors =====
    /// Student not found in the registry
    #[error("Student not found: {reg_no}")]
    StudentNotFound { reg_no: String },

    /// Course not found in the registry
    #[error("Course not found: {code}")]
    CourseNotFound { code: String },

    /// No enrollment exists for the (student, course) pair
    #[error("No enrollment found for student {reg_no} in course {code}")]
    EnrollmentNotFound { reg_no: String, code: String },

    // ===== Uniqueness Errors =====
    /// Registration number is already taken
    #[error("Student already exists: {reg_no}")]
    StudentAlreadyExists { reg_no: String },

    /// Course code is already taken
    #[error("Course already exists: {code}")]
    CourseAlreadyExists { code: String },

    // ===== Business-Rule Violations =====
    /// The (student, course) pair already has an enrollment
    #[error("Student {reg_no} is already enrolled in course {code}")]
    DuplicateEnrollment { reg_no: String, code: String },

    /// Enrolling would push the student past the credit ceiling
    ///
    /// `attempted` is a u64: the rejected load can exceed what u32 holds.
    #[error("Enrolling {reg_no} would carry {attempted} credits, exceeding the limit of {limit}")]
    MaxCreditLimitExceeded {
        reg_no: String,
        attempted: u64,
        limit: u32,
    },

    /// Unenrollment has no defined removal semantics; nothing was mutated
    #[error("Unenrollment is not implemented: no enrollment was removed for {reg_no} in {code}")]
    UnenrollmentUnsupported { reg_no: String, code: String },

    // ===== Validation Errors =====
    /// Course construction failed validation
    #[error("Invalid course {code}: {reason}")]
    InvalidCourse { code: String, reason: String },

    /// Configuration file could not be read or parsed
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}
