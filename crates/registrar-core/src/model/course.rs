use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::errors::{RegistrarError, Result};

/// Academic term a course is offered in
///
/// Serialized names are uppercase (`SPRING`), and parsing requires the
/// exact uppercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Semester {
    Spring,
    Summer,
    Fall,
}

impl Semester {
    /// Uppercase serialized name
    pub fn name(&self) -> &'static str {
        match self {
            Semester::Spring => "SPRING",
            Semester::Summer => "SUMMER",
            Semester::Fall => "FALL",
        }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Semester name could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown semester: {0}")]
pub struct ParseSemesterError(pub String);

impl FromStr for Semester {
    type Err = ParseSemesterError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "SPRING" => Ok(Semester::Spring),
            "SUMMER" => Ok(Semester::Summer),
            "FALL" => Ok(Semester::Fall),
            _ => Err(ParseSemesterError(s.to_string())),
        }
    }
}

/// Course - a unit of study
///
/// Identified by code, which is unique and immutable. Courses have no
/// update operation; a Course is immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course code (immutable business identifier)
    pub code: String,

    /// Human-readable title
    pub title: String,

    /// Credit count (always >= 1)
    pub credits: u32,

    /// Owning department
    pub department: String,

    /// Term the course is offered in
    pub semester: Semester,
}

/// One-line listing summary used by the list and search menu actions
impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} credits | {} | {}",
            self.code, self.title, self.credits, self.department, self.semester
        )
    }
}

/// Configuration record for constructing a Course
///
/// `code` and `title` are required; the remaining fields default when
/// omitted (credits 3, department "General", semester FALL). Validation
/// happens once, in [`CourseSpec::build`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSpec {
    pub code: String,
    pub title: String,
    pub credits: Option<u32>,
    pub department: Option<String>,
    pub semester: Option<Semester>,
}

impl CourseSpec {
    /// Create a spec with only the required fields set
    pub fn new(code: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            credits: None,
            department: None,
            semester: None,
        }
    }

    /// Validate the spec and build the Course
    ///
    /// # Errors
    /// * `InvalidCourse` - If the code or title is blank, or credits is zero
    pub fn build(self) -> Result<Course> {
        if self.code.trim().is_empty() {
            return Err(RegistrarError::InvalidCourse {
                code: self.code,
                reason: "code cannot be blank".to_string(),
            });
        }
        if self.title.trim().is_empty() {
            return Err(RegistrarError::InvalidCourse {
                code: self.code,
                reason: "title cannot be blank".to_string(),
            });
        }

        let credits = self.credits.unwrap_or(3);
        if credits == 0 {
            return Err(RegistrarError::InvalidCourse {
                code: self.code,
                reason: "credits must be at least 1".to_string(),
            });
        }

        Ok(Course {
            code: self.code,
            title: self.title,
            credits,
            department: self.department.unwrap_or_else(|| "General".to_string()),
            semester: self.semester.unwrap_or(Semester::Fall),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_with_defaults() {
        let course = CourseSpec::new("CSE0001", "Data Structures").build().unwrap();

        assert_eq!(course.code, "CSE0001");
        assert_eq!(course.title, "Data Structures");
        assert_eq!(course.credits, 3);
        assert_eq!(course.department, "General");
        assert_eq!(course.semester, Semester::Fall);
    }

    #[test]
    fn test_build_with_all_fields() {
        let course = CourseSpec {
            code: "MAT0002".to_string(),
            title: "Calculus".to_string(),
            credits: Some(4),
            department: Some("Mathematics".to_string()),
            semester: Some(Semester::Spring),
        }
        .build()
        .unwrap();

        assert_eq!(course.credits, 4);
        assert_eq!(course.department, "Mathematics");
        assert_eq!(course.semester, Semester::Spring);
    }

    #[test]
    fn test_build_rejects_blank_code() {
        let result = CourseSpec::new("  ", "Data Structures").build();
        assert!(matches!(result, Err(RegistrarError::InvalidCourse { .. })));
    }

    #[test]
    fn test_build_rejects_blank_title() {
        let result = CourseSpec::new("CSE0001", "").build();
        assert!(matches!(result, Err(RegistrarError::InvalidCourse { .. })));
    }

    #[test]
    fn test_build_rejects_zero_credits() {
        let mut spec = CourseSpec::new("CSE0001", "Data Structures");
        spec.credits = Some(0);
        let result = spec.build();
        assert!(matches!(result, Err(RegistrarError::InvalidCourse { .. })));
    }

    #[test]
    fn test_semester_parse_round_trip() {
        for semester in [Semester::Spring, Semester::Summer, Semester::Fall] {
            assert_eq!(semester.name().parse::<Semester>().unwrap(), semester);
        }
    }

    #[test]
    fn test_semester_parse_requires_exact_uppercase() {
        assert!("Fall".parse::<Semester>().is_err());
        assert!("WINTER".parse::<Semester>().is_err());
    }
}
