use crate::errors::Result;
use crate::model::Student;
use crate::ops::enrollment_ops::enrolled_credits;
use crate::ops::Registry;

/// Render a student's transcript
///
/// Generates a plain-text report containing:
/// - The student's profile line
/// - One line per enrollment, in enrollment order
/// - The total enrolled credits
/// - The credit-weighted GPA over graded enrollments, to two decimals
///
/// An enrollment whose course no longer resolves renders as the bare code.
///
/// # Errors
/// * `StudentNotFound` - If no student has that registration number
pub fn render_transcript(registry: &Registry, reg_no: &str) -> Result<String> {
    let student = registry.get_student(reg_no)?;

    let mut output = String::new();
    output.push_str(&format!("--- Transcript for {} ---\n", student.reg_no));
    output.push_str(&format!("{}\n", student));

    for enrollment in &student.enrollments {
        let grade_marker = match enrollment.grade {
            Some(grade) => format!("Grade: {}", grade),
            None => "ungraded".to_string(),
        };
        match registry.find_course(&enrollment.course_code) {
            Some(course) => output.push_str(&format!(
                "  {} | {} | {} credits | {}\n",
                course.code, course.title, course.credits, grade_marker
            )),
            None => {
                output.push_str(&format!("  {} | {}\n", enrollment.course_code, grade_marker))
            }
        }
    }

    output.push_str(&format!(
        "Total enrolled credits: {}\n",
        enrolled_credits(registry, student)
    ));

    match gpa(registry, student) {
        Some(value) => output.push_str(&format!("GPA: {:.2}\n", value)),
        None => output.push_str("GPA: no graded enrollments\n"),
    }

    Ok(output)
}

/// Credit-weighted grade-point average over graded enrollments
///
/// Ungraded enrollments are excluded from both the numerator and the
/// denominator. Both accumulators are u64 so large credit counts cannot
/// wrap them. Returns None when no graded enrollment has a resolvable
/// course.
pub fn gpa(registry: &Registry, student: &Student) -> Option<f64> {
    let mut points = 0u64;
    let mut credits = 0u64;

    for enrollment in &student.enrollments {
        let Some(grade) = enrollment.grade else {
            continue;
        };
        let Some(course) = registry.find_course(&enrollment.course_code) else {
            continue;
        };
        points += u64::from(grade.points()) * u64::from(course.credits);
        credits += u64::from(course.credits);
    }

    (credits > 0).then(|| points as f64 / credits as f64)
}
