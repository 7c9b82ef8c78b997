use super::registry::Registry;
use crate::errors::{RegistrarError, Result};
use crate::model::{Enrollment, Grade, Student};

/// Enroll a student in a course
///
/// On success a new ungraded Enrollment is appended to the student's
/// sequence. Checks run in order: student resolution, course resolution,
/// duplicate scan, credit ceiling. Reaching the ceiling exactly is allowed;
/// exceeding it is not. A failed attempt leaves the sequence untouched.
///
/// # Arguments
/// * `registry` - Mutable reference to the Registry
/// * `reg_no` - Registration number of the student
/// * `code` - Code of the course
/// * `max_credits` - Configured credit ceiling
///
/// # Errors
/// * `StudentNotFound` / `CourseNotFound` - If either endpoint is missing
/// * `DuplicateEnrollment` - If the pair already has an enrollment
/// * `MaxCreditLimitExceeded` - If the new load would exceed the ceiling
pub fn enroll(registry: &mut Registry, reg_no: &str, code: &str, max_credits: u32) -> Result<()> {
    let student = registry.get_student(reg_no)?;
    let course_credits = registry.get_course(code)?.credits;

    if student.is_enrolled_in(code) {
        return Err(RegistrarError::DuplicateEnrollment {
            reg_no: reg_no.to_string(),
            code: code.to_string(),
        });
    }

    // Enrollment, not completion, consumes the credit budget: every
    // enrollment in the sequence counts, graded or not. The sum is carried
    // in u64 so arbitrarily large per-course credit counts cannot wrap it
    // back under the ceiling.
    let attempted = enrolled_credits(registry, student) + u64::from(course_credits);
    if attempted > u64::from(max_credits) {
        return Err(RegistrarError::MaxCreditLimitExceeded {
            reg_no: reg_no.to_string(),
            attempted,
            limit: max_credits,
        });
    }

    registry
        .get_student_mut(reg_no)?
        .enrollments
        .push(Enrollment::new(code.to_string()));
    tracing::debug!(reg_no, code, "enrolled");
    Ok(())
}

/// Unenroll a student from a course
///
/// Enrollment records have no defined removal path, so this validates that
/// both endpoints resolve and then fails with `UnenrollmentUnsupported`
/// without mutating anything.
///
/// # Errors
/// * `StudentNotFound` / `CourseNotFound` - If either endpoint is missing
/// * `UnenrollmentUnsupported` - Always, once both endpoints resolve
pub fn unenroll(registry: &mut Registry, reg_no: &str, code: &str) -> Result<()> {
    registry.get_student(reg_no)?;
    registry.get_course(code)?;

    Err(RegistrarError::UnenrollmentUnsupported {
        reg_no: reg_no.to_string(),
        code: code.to_string(),
    })
}

/// Assign a grade to an existing enrollment
///
/// Mutates the Enrollment's grade field in place; never creates an
/// enrollment.
///
/// # Errors
/// * `StudentNotFound` / `CourseNotFound` - If either endpoint is missing
/// * `EnrollmentNotFound` - If no enrollment exists for the pair
pub fn assign_grade(registry: &mut Registry, reg_no: &str, code: &str, grade: Grade) -> Result<()> {
    registry.get_student(reg_no)?;
    registry.get_course(code)?;

    let student = registry.get_student_mut(reg_no)?;
    match student.find_enrollment_mut(code) {
        Some(enrollment) => {
            enrollment.grade = Some(grade);
            tracing::debug!(reg_no, code, grade = %grade, "grade assigned");
            Ok(())
        }
        None => Err(RegistrarError::EnrollmentNotFound {
            reg_no: reg_no.to_string(),
            code: code.to_string(),
        }),
    }
}

/// Total credits the student currently carries across all enrollments
///
/// Summed in u64 so the total stays exact whatever the per-course credit
/// counts. A course code that no longer resolves contributes nothing;
/// unreachable in practice since courses are never removed.
pub fn enrolled_credits(registry: &Registry, student: &Student) -> u64 {
    student
        .enrollments
        .iter()
        .filter_map(|e| registry.find_course(&e.course_code))
        .map(|c| u64::from(c.credits))
        .sum()
}
