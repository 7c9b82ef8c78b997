use chrono::NaiveDate;
use registrar_core::{Course, CourseSpec, Semester, Student};

/// Credit ceiling used across store tests
#[allow(dead_code)]
pub const CEILING: u32 = 24;

/// Create a test Student with the given registration number
#[allow(dead_code)]
pub fn test_student(reg_no: &str) -> Student {
    Student::new(
        format!("Student {reg_no}"),
        format!("{reg_no}@example.edu"),
        NaiveDate::from_ymd_opt(2004, 5, 17).unwrap(),
        reg_no.to_string(),
    )
}

/// Create a test Course with the given code and credit count
#[allow(dead_code)]
pub fn test_course(code: &str, credits: u32) -> Course {
    CourseSpec {
        code: code.to_string(),
        title: format!("Course {code}"),
        credits: Some(credits),
        department: Some("CS".to_string()),
        semester: Some(Semester::Fall),
    }
    .build()
    .unwrap()
}
