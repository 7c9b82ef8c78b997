mod common;

use common::{test_course, test_student, CEILING};
use registrar_core::ops::enrollment_ops::{assign_grade, enroll};
use registrar_core::transcript::{gpa, render_transcript};
use registrar_core::{Enrollment, Grade, Registry, RegistrarError};

fn graded_registry() -> Registry {
    let mut registry = Registry::new();
    registry.add_student(test_student("S1")).unwrap();
    registry.add_course(test_course("C1", 3)).unwrap();
    registry.add_course(test_course("C2", 4)).unwrap();
    registry.add_course(test_course("C3", 2)).unwrap();

    enroll(&mut registry, "S1", "C1", CEILING).unwrap();
    enroll(&mut registry, "S1", "C2", CEILING).unwrap();
    enroll(&mut registry, "S1", "C3", CEILING).unwrap();
    assign_grade(&mut registry, "S1", "C1", Grade::A).unwrap();
    assign_grade(&mut registry, "S1", "C2", Grade::B).unwrap();
    // C3 stays ungraded

    registry
}

// ===== GPA =====

#[test]
fn test_gpa_weighted_over_graded_enrollments_only() {
    let registry = graded_registry();
    let student = registry.get_student("S1").unwrap();

    // (9*3 + 8*4) / (3 + 4) = 59/7; the ungraded 2-credit course is excluded
    let value = gpa(&registry, student).unwrap();
    assert!((value - 59.0 / 7.0).abs() < 1e-9);
}

#[test]
fn test_gpa_exact_with_huge_credit_counts() {
    let mut registry = Registry::new();
    registry.add_student(test_student("S1")).unwrap();
    registry.add_course(test_course("C1", u32::MAX)).unwrap();
    registry.add_course(test_course("C2", u32::MAX)).unwrap();

    // Bypass the ceiling: the accumulators must stay exact regardless of
    // how the enrollments got there.
    let student = registry.get_student_mut("S1").unwrap();
    for (code, grade) in [("C1", Grade::S), ("C2", Grade::F)] {
        let mut enrollment = Enrollment::new(code.to_string());
        enrollment.grade = Some(grade);
        student.enrollments.push(enrollment);
    }

    // (10 + 0) / 2 credit-weighted over two equal-credit courses
    let student = registry.get_student("S1").unwrap();
    let value = gpa(&registry, student).unwrap();
    assert!((value - 5.0).abs() < 1e-9);
}

#[test]
fn test_gpa_none_without_graded_enrollments() {
    let mut registry = Registry::new();
    registry.add_student(test_student("S1")).unwrap();
    registry.add_course(test_course("C1", 3)).unwrap();
    enroll(&mut registry, "S1", "C1", CEILING).unwrap();

    let student = registry.get_student("S1").unwrap();
    assert_eq!(gpa(&registry, student), None);
}

// ===== REPORT =====

#[test]
fn test_transcript_lists_enrollments_and_totals() {
    let registry = graded_registry();

    let report = render_transcript(&registry, "S1").unwrap();

    assert!(report.contains("--- Transcript for S1 ---"));
    assert!(report.contains("C1 | Course C1 | 3 credits | Grade: A"));
    assert!(report.contains("C2 | Course C2 | 4 credits | Grade: B"));
    assert!(report.contains("C3 | Course C3 | 2 credits | ungraded"));
    assert!(report.contains("Total enrolled credits: 9"));
    assert!(report.contains("GPA: 8.43"));
}

#[test]
fn test_transcript_notes_missing_gpa() {
    let mut registry = Registry::new();
    registry.add_student(test_student("S1")).unwrap();

    let report = render_transcript(&registry, "S1").unwrap();
    assert!(report.contains("Total enrolled credits: 0"));
    assert!(report.contains("GPA: no graded enrollments"));
}

#[test]
fn test_transcript_unknown_student_fails() {
    let registry = Registry::new();
    let result = render_transcript(&registry, "ghost");
    assert!(matches!(
        result,
        Err(RegistrarError::StudentNotFound { .. })
    ));
}

#[test]
fn test_transcript_renders_bare_code_for_unresolvable_course() {
    let mut registry = Registry::new();
    registry.add_student(test_student("S1")).unwrap();
    registry
        .get_student_mut("S1")
        .unwrap()
        .enrollments
        .push(Enrollment::new("GONE01".to_string()));

    let report = render_transcript(&registry, "S1").unwrap();
    assert!(report.contains("  GONE01 | ungraded"));
}
