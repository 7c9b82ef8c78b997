use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enrollment::Enrollment;

/// Student - an academic record holder
///
/// Identified by registration number, which is unique and immutable.
/// Students are never physically removed; deactivation clears the active
/// flag and nothing else. Enrollments are kept in enrollment order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Full display name
    pub full_name: String,

    /// Contact email
    pub email: String,

    /// Date of birth
    pub date_of_birth: NaiveDate,

    /// Unique registration number (immutable business identifier)
    pub reg_no: String,

    /// Whether the student is active; deactivation is the only "removal"
    pub active: bool,

    /// Enrollments in insertion order (= enrollment order)
    pub enrollments: Vec<Enrollment>,
}

impl Student {
    /// Create a new active Student with no enrollments
    pub fn new(full_name: String, email: String, date_of_birth: NaiveDate, reg_no: String) -> Self {
        Self {
            full_name,
            email,
            date_of_birth,
            reg_no,
            active: true,
            enrollments: Vec::new(),
        }
    }

    /// Check if this student is active
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Check if this student has an enrollment for the given course code
    pub fn is_enrolled_in(&self, code: &str) -> bool {
        self.enrollments.iter().any(|e| e.course_code == code)
    }

    /// Find this student's enrollment for the given course code
    pub fn find_enrollment(&self, code: &str) -> Option<&Enrollment> {
        self.enrollments.iter().find(|e| e.course_code == code)
    }

    /// Find this student's enrollment for the given course code, mutably
    pub fn find_enrollment_mut(&mut self, code: &str) -> Option<&mut Enrollment> {
        self.enrollments.iter_mut().find(|e| e.course_code == code)
    }
}

/// One-line profile summary used by the list and find menu actions
impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | born {} | {}",
            self.reg_no,
            self.full_name,
            self.email,
            self.date_of_birth,
            if self.active { "active" } else { "inactive" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dob() -> NaiveDate {
        NaiveDate::from_ymd_opt(2006, 7, 20).unwrap()
    }

    #[test]
    fn test_new_student() {
        let student = Student::new(
            "John Doe".to_string(),
            "john@example.com".to_string(),
            dob(),
            "24BCE10001".to_string(),
        );

        assert_eq!(student.reg_no, "24BCE10001");
        assert!(student.is_active());
        assert!(student.enrollments.is_empty());
        assert!(!student.is_enrolled_in("CSE0001"));
    }

    #[test]
    fn test_find_enrollment() {
        let mut student = Student::new(
            "John Doe".to_string(),
            "john@example.com".to_string(),
            dob(),
            "24BCE10001".to_string(),
        );

        student.enrollments.push(Enrollment::new("CSE0001".to_string()));

        assert!(student.is_enrolled_in("CSE0001"));
        assert!(student.find_enrollment("CSE0001").is_some());
        assert!(student.find_enrollment("CSE0002").is_none());
    }

    #[test]
    fn test_profile_line() {
        let mut student = Student::new(
            "John Doe".to_string(),
            "john@example.com".to_string(),
            dob(),
            "24BCE10001".to_string(),
        );

        let line = student.to_string();
        assert!(line.contains("24BCE10001"));
        assert!(line.contains("John Doe"));
        assert!(line.contains("born 2006-07-20"));
        assert!(line.ends_with("active"));

        student.active = false;
        assert!(student.to_string().ends_with("inactive"));
    }
}
