mod common;

use std::fs;
use std::path::Path;

use common::{test_course, test_student, CEILING};
use registrar_core::ops::enrollment_ops::enroll;
use registrar_core::{Grade, Registry};
use registrar_store::{import_all, ImportSummary};
use tempfile::TempDir;

fn write_data(dir: &Path, file: &str, content: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(file), content).unwrap();
}

// ===== MISSING FILES =====

#[test]
fn test_missing_data_directory_imports_as_empty() {
    let temp = TempDir::new().unwrap();
    let mut registry = Registry::new();

    let summary = import_all(&mut registry, &temp.path().join("nowhere"), CEILING);

    assert_eq!(summary, ImportSummary::default());
    assert!(registry.is_empty());
}

#[test]
fn test_missing_individual_file_contributes_nothing() {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path().join("data");
    write_data(&data_dir, "students.csv", "Ana,ana@example.edu,01-01-2000,S1\n");

    let mut registry = Registry::new();
    let summary = import_all(&mut registry, &data_dir, CEILING);

    assert_eq!(summary.students, 1);
    assert_eq!(summary.courses, 0);
    assert_eq!(summary.skipped, 0);
}

// ===== PER-LINE TOLERANCE =====

#[test]
fn test_malformed_student_line_skipped_rest_loaded() {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path().join("data");
    write_data(
        &data_dir,
        "students.csv",
        "only,three,fields\n\
         Ana,ana@example.edu,01-01-2000,S1\n\
         Ben,ben@example.edu,31-12-1999,S2\n",
    );

    let mut registry = Registry::new();
    let summary = import_all(&mut registry, &data_dir, CEILING);

    assert_eq!(summary.students, 2);
    assert_eq!(summary.skipped, 1);
    assert!(registry.find_student("S1").is_some());
    assert!(registry.find_student("S2").is_some());
}

#[test]
fn test_student_line_with_bad_date_skipped() {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path().join("data");
    write_data(
        &data_dir,
        "students.csv",
        "Ana,ana@example.edu,2000-01-01,S1\n",
    );

    let mut registry = Registry::new();
    let summary = import_all(&mut registry, &data_dir, CEILING);

    assert_eq!(summary.students, 0);
    assert_eq!(summary.skipped, 1);
}

#[test]
fn test_enrollment_with_unknown_course_skipped_subsequent_lines_apply() {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path().join("data");
    write_data(&data_dir, "students.csv", "Ana,ana@example.edu,01-01-2000,S1\n");
    write_data(&data_dir, "courses.csv", "C1,Course C1,4,CS,FALL\n");
    write_data(
        &data_dir,
        "enrollments.csv",
        "S1,GONE01,A\n\
         S1,C1,B\n",
    );

    let mut registry = Registry::new();
    let summary = import_all(&mut registry, &data_dir, CEILING);

    assert_eq!(summary.enrollments, 1);
    assert_eq!(summary.skipped, 1);

    let student = registry.get_student("S1").unwrap();
    assert_eq!(student.enrollments.len(), 1);
    assert_eq!(student.find_enrollment("C1").unwrap().grade, Some(Grade::B));
}

#[test]
fn test_enrollment_with_unknown_grade_letter_skipped_entirely() {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path().join("data");
    write_data(&data_dir, "students.csv", "Ana,ana@example.edu,01-01-2000,S1\n");
    write_data(&data_dir, "courses.csv", "C1,Course C1,4,CS,FALL\n");
    write_data(&data_dir, "enrollments.csv", "S1,C1,Z\n");

    let mut registry = Registry::new();
    let summary = import_all(&mut registry, &data_dir, CEILING);

    // Parse fails before replay: no enrollment is created
    assert_eq!(summary.enrollments, 0);
    assert_eq!(summary.skipped, 1);
    assert!(registry.get_student("S1").unwrap().enrollments.is_empty());
}

#[test]
fn test_ceiling_violation_in_hand_edited_file_skipped() {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path().join("data");
    write_data(&data_dir, "students.csv", "Ana,ana@example.edu,01-01-2000,S1\n");
    write_data(
        &data_dir,
        "courses.csv",
        "C1,Course C1,20,CS,FALL\nC2,Course C2,10,CS,FALL\n",
    );
    write_data(&data_dir, "enrollments.csv", "S1,C1,NULL\nS1,C2,NULL\n");

    let mut registry = Registry::new();
    let summary = import_all(&mut registry, &data_dir, CEILING);

    assert_eq!(summary.enrollments, 1);
    assert_eq!(summary.skipped, 1);
    assert!(!registry.get_student("S1").unwrap().is_enrolled_in("C2"));
}

#[test]
fn test_duplicate_student_line_skipped() {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path().join("data");
    write_data(
        &data_dir,
        "students.csv",
        "Ana,ana@example.edu,01-01-2000,S1\n\
         Ana Again,other@example.edu,01-01-2000,S1\n",
    );

    let mut registry = Registry::new();
    let summary = import_all(&mut registry, &data_dir, CEILING);

    assert_eq!(summary.students, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(registry.get_student("S1").unwrap().full_name, "Ana");
}

// ===== REPLAY OVER EXISTING STATE =====

#[test]
fn test_duplicate_enrollment_replay_still_assigns_grade() {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path().join("data");
    write_data(&data_dir, "enrollments.csv", "S1,C1,A\n");

    // The pair already exists in memory, ungraded
    let mut registry = Registry::new();
    registry.add_student(test_student("S1")).unwrap();
    registry.add_course(test_course("C1", 4)).unwrap();
    enroll(&mut registry, "S1", "C1", CEILING).unwrap();

    let summary = import_all(&mut registry, &data_dir, CEILING);

    assert_eq!(summary.enrollments, 1);
    assert_eq!(summary.skipped, 0);

    let student = registry.get_student("S1").unwrap();
    assert_eq!(student.enrollments.len(), 1);
    assert_eq!(student.find_enrollment("C1").unwrap().grade, Some(Grade::A));
}
