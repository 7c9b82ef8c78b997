//! Per-line codec for the three data files
//!
//! One record per line, fields joined by a comma with no escaping or
//! quoting: a field value containing the delimiter corrupts its line. That
//! is the wire format's known limitation, not something to patch here.
//! Extra trailing fields are tolerated and ignored; missing fields are an
//! error.

use std::str::FromStr;

use chrono::NaiveDate;
use registrar_core::{Course, CourseSpec, Enrollment, Grade, Semester, Student};
use thiserror::Error;

/// Date format used inside the data files (prompts use ISO instead)
pub const FILE_DATE_FORMAT: &str = "%d-%m-%Y";

/// Literal marking an unset grade in the enrollments file
const NULL_GRADE: &str = "NULL";

/// A single line that could not be decoded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("expected at least {expected} fields, got {got}")]
    FieldCount { expected: usize, got: usize },

    #[error("blank {field} field")]
    BlankField { field: &'static str },

    #[error("invalid date '{value}': expected dd-MM-yyyy")]
    InvalidDate { value: String },

    #[error("invalid credits '{value}'")]
    InvalidCredits { value: String },

    #[error("unknown semester '{value}'")]
    UnknownSemester { value: String },

    #[error("unknown grade '{value}'")]
    UnknownGrade { value: String },

    #[error("invalid course: {reason}")]
    InvalidCourse { reason: String },
}

/// Decoded enrollment line, not yet replayed against the Registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollmentRecord {
    pub reg_no: String,
    pub course_code: String,
    pub grade: Option<Grade>,
}

fn split(line: &str, expected: usize) -> Result<Vec<&str>, LineError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < expected {
        return Err(LineError::FieldCount {
            expected,
            got: fields.len(),
        });
    }
    Ok(fields)
}

/// Decode a student line: `fullName,email,dob(dd-MM-yyyy),regNo`
pub fn parse_student_line(line: &str) -> Result<Student, LineError> {
    let fields = split(line, 4)?;

    if fields[3].trim().is_empty() {
        return Err(LineError::BlankField {
            field: "registration number",
        });
    }
    let date_of_birth = NaiveDate::parse_from_str(fields[2], FILE_DATE_FORMAT).map_err(|_| {
        LineError::InvalidDate {
            value: fields[2].to_string(),
        }
    })?;

    Ok(Student::new(
        fields[0].to_string(),
        fields[1].to_string(),
        date_of_birth,
        fields[3].to_string(),
    ))
}

/// Encode a student line in the fixed field order
pub fn encode_student(student: &Student) -> String {
    // The format carries no active flag: deactivation does not survive a
    // save/load cycle. Preserved as-is.
    format!(
        "{},{},{},{}",
        student.full_name,
        student.email,
        student.date_of_birth.format(FILE_DATE_FORMAT),
        student.reg_no
    )
}

/// Decode a course line: `code,title,credits,department,semesterName`
pub fn parse_course_line(line: &str) -> Result<Course, LineError> {
    let fields = split(line, 5)?;

    if fields[0].trim().is_empty() {
        return Err(LineError::BlankField { field: "code" });
    }
    let credits: u32 = fields[2].parse().map_err(|_| LineError::InvalidCredits {
        value: fields[2].to_string(),
    })?;
    let semester =
        Semester::from_str(fields[4]).map_err(|_| LineError::UnknownSemester {
            value: fields[4].to_string(),
        })?;

    CourseSpec {
        code: fields[0].to_string(),
        title: fields[1].to_string(),
        credits: Some(credits),
        department: Some(fields[3].to_string()),
        semester: Some(semester),
    }
    .build()
    .map_err(|e| LineError::InvalidCourse {
        reason: e.to_string(),
    })
}

/// Encode a course line in the fixed field order
pub fn encode_course(course: &Course) -> String {
    format!(
        "{},{},{},{},{}",
        course.code, course.title, course.credits, course.department, course.semester
    )
}

/// Decode an enrollment line: `studentRegNo,courseCode,gradeNameOrNULL`
///
/// The grade field is the literal `NULL` (case-insensitive) for an unset
/// grade.
pub fn parse_enrollment_line(line: &str) -> Result<EnrollmentRecord, LineError> {
    let fields = split(line, 3)?;

    if fields[0].trim().is_empty() {
        return Err(LineError::BlankField {
            field: "registration number",
        });
    }
    if fields[1].trim().is_empty() {
        return Err(LineError::BlankField { field: "course code" });
    }

    let grade = if fields[2].eq_ignore_ascii_case(NULL_GRADE) {
        None
    } else {
        Some(
            Grade::from_str(fields[2]).map_err(|_| LineError::UnknownGrade {
                value: fields[2].to_string(),
            })?,
        )
    };

    Ok(EnrollmentRecord {
        reg_no: fields[0].to_string(),
        course_code: fields[1].to_string(),
        grade,
    })
}

/// Encode an enrollment line for one student's enrollment
pub fn encode_enrollment(reg_no: &str, enrollment: &Enrollment) -> String {
    let grade = match enrollment.grade {
        Some(g) => g.to_string(),
        None => NULL_GRADE.to_string(),
    };
    format!("{},{},{}", reg_no, enrollment.course_code, grade)
}
