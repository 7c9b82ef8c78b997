//! Full-rewrite export of the three data files
//!
//! Each export is a complete snapshot: every file is truncated and
//! recreated, never appended across sessions.

use std::fs;
use std::path::Path;

use registrar_core::Registry;

use super::codec;
use super::{COURSES_FILE, ENROLLMENTS_FILE, STUDENTS_FILE};
use crate::errors::Result;

/// Write all three data files under `data_dir`, creating it if needed
///
/// Enrollment lines walk `list_students()` order and each student's
/// sequence order, so exports are deterministic.
///
/// # Errors
///
/// Returns `Io` on any filesystem failure; the caller reports it and the
/// session continues with in-memory state.
pub fn export_all(registry: &Registry, data_dir: &Path) -> Result<()> {
    fs::create_dir_all(data_dir)?;

    let students = registry.list_students();

    let lines: Vec<String> = students.iter().map(|s| codec::encode_student(s)).collect();
    write_file(&data_dir.join(STUDENTS_FILE), &lines)?;

    let lines: Vec<String> = registry
        .list_courses()
        .iter()
        .map(|c| codec::encode_course(c))
        .collect();
    write_file(&data_dir.join(COURSES_FILE), &lines)?;

    let mut lines = Vec::new();
    for student in &students {
        for enrollment in &student.enrollments {
            lines.push(codec::encode_enrollment(&student.reg_no, enrollment));
        }
    }
    write_file(&data_dir.join(ENROLLMENTS_FILE), &lines)?;

    tracing::debug!(dir = %data_dir.display(), "exported data files");
    Ok(())
}

fn write_file(path: &Path, lines: &[String]) -> Result<()> {
    let mut content = lines.join("\n");
    if !content.is_empty() {
        content.push('\n');
    }
    fs::write(path, content)?;
    Ok(())
}
