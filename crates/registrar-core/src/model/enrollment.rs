use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Letter grade on the ten-point scale
///
/// S is the top grade; F is a fail and carries zero points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    S,
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Grade {
    /// Fixed point value used for GPA weighting
    pub fn points(&self) -> u32 {
        match self {
            Grade::S => 10,
            Grade::A => 9,
            Grade::B => 8,
            Grade::C => 7,
            Grade::D => 6,
            Grade::E => 5,
            Grade::F => 0,
        }
    }

    /// Uppercase serialized name
    pub fn name(&self) -> &'static str {
        match self {
            Grade::S => "S",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Grade letter could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown grade: {0}")]
pub struct ParseGradeError(pub String);

impl FromStr for Grade {
    type Err = ParseGradeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "S" => Ok(Grade::S),
            "A" => Ok(Grade::A),
            "B" => Ok(Grade::B),
            "C" => Ok(Grade::C),
            "D" => Ok(Grade::D),
            "E" => Ok(Grade::E),
            "F" => Ok(Grade::F),
            _ => Err(ParseGradeError(s.to_string())),
        }
    }
}

/// Enrollment - the relationship record linking a Student to a Course
///
/// Owned by the Student side; the Course endpoint is carried as a code
/// reference resolved through the Registry. The grade starts unset and is
/// mutated in place by the grading operation. Enrollments are never
/// removed in the current design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    /// Code of the enrolled course
    pub course_code: String,

    /// Assigned grade, or None while ungraded
    pub grade: Option<Grade>,
}

impl Enrollment {
    /// Create a new ungraded Enrollment for the given course code
    pub fn new(course_code: String) -> Self {
        Self {
            course_code,
            grade: None,
        }
    }

    /// Check if a grade has been assigned
    pub fn is_graded(&self) -> bool {
        self.grade.is_some()
    }
}
