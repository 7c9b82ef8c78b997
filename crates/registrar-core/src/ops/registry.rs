use std::collections::HashMap;

use crate::errors::{RegistrarError, Result};
use crate::model::{Course, Student};

/// In-memory store for Students and Courses
///
/// Simple HashMap-based storage keyed by business identifiers. Not
/// thread-safe (no Arc/RwLock) - designed for single-threaded use. Listing
/// methods sort by key so listings and exported files are deterministic.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// Map of registration number to Student
    pub(crate) students: HashMap<String, Student>,
    /// Map of course code to Course
    pub(crate) courses: HashMap<String, Course>,
}

impl Registry {
    /// Create a new empty Registry
    pub fn new() -> Self {
        Self {
            students: HashMap::new(),
            courses: HashMap::new(),
        }
    }

    /// Check if the Registry holds no students and no courses
    pub fn is_empty(&self) -> bool {
        self.students.is_empty() && self.courses.is_empty()
    }

    // ===== Students =====

    /// Add a Student to the registry
    ///
    /// # Errors
    ///
    /// Returns `StudentAlreadyExists` if the registration number is taken.
    pub fn add_student(&mut self, student: Student) -> Result<()> {
        if self.students.contains_key(&student.reg_no) {
            return Err(RegistrarError::StudentAlreadyExists {
                reg_no: student.reg_no,
            });
        }
        self.students.insert(student.reg_no.clone(), student);
        Ok(())
    }

    /// Get a Student by registration number
    ///
    /// # Errors
    ///
    /// Returns `StudentNotFound` if no student has that registration number.
    pub fn get_student(&self, reg_no: &str) -> Result<&Student> {
        self.students
            .get(reg_no)
            .ok_or_else(|| RegistrarError::StudentNotFound {
                reg_no: reg_no.to_string(),
            })
    }

    /// Get a mutable reference to a Student by registration number
    ///
    /// # Errors
    ///
    /// Returns `StudentNotFound` if no student has that registration number.
    pub fn get_student_mut(&mut self, reg_no: &str) -> Result<&mut Student> {
        self.students
            .get_mut(reg_no)
            .ok_or_else(|| RegistrarError::StudentNotFound {
                reg_no: reg_no.to_string(),
            })
    }

    /// Look up a Student by registration number
    pub fn find_student(&self, reg_no: &str) -> Option<&Student> {
        self.students.get(reg_no)
    }

    /// List all students, ordered by registration number
    pub fn list_students(&self) -> Vec<&Student> {
        let mut students: Vec<&Student> = self.students.values().collect();
        students.sort_by(|a, b| a.reg_no.cmp(&b.reg_no));
        students
    }

    /// Replace a Student record in place, matched by registration number
    ///
    /// # Errors
    ///
    /// Returns `StudentNotFound` if no student has that registration number.
    pub fn update_student(&mut self, student: Student) -> Result<()> {
        if !self.students.contains_key(&student.reg_no) {
            return Err(RegistrarError::StudentNotFound {
                reg_no: student.reg_no,
            });
        }
        self.students.insert(student.reg_no.clone(), student);
        Ok(())
    }

    // ===== Courses =====

    /// Add a Course to the registry
    ///
    /// # Errors
    ///
    /// Returns `CourseAlreadyExists` if the code is taken.
    pub fn add_course(&mut self, course: Course) -> Result<()> {
        if self.courses.contains_key(&course.code) {
            return Err(RegistrarError::CourseAlreadyExists { code: course.code });
        }
        self.courses.insert(course.code.clone(), course);
        Ok(())
    }

    /// Get a Course by code
    ///
    /// # Errors
    ///
    /// Returns `CourseNotFound` if no course has that code.
    pub fn get_course(&self, code: &str) -> Result<&Course> {
        self.courses
            .get(code)
            .ok_or_else(|| RegistrarError::CourseNotFound {
                code: code.to_string(),
            })
    }

    /// Look up a Course by code
    pub fn find_course(&self, code: &str) -> Option<&Course> {
        self.courses.get(code)
    }

    /// List all courses, ordered by code
    pub fn list_courses(&self) -> Vec<&Course> {
        let mut courses: Vec<&Course> = self.courses.values().collect();
        courses.sort_by(|a, b| a.code.cmp(&b.code));
        courses
    }

    /// List courses in the given department, matched case-insensitively
    pub fn courses_by_department(&self, department: &str) -> Vec<&Course> {
        let mut courses: Vec<&Course> = self
            .courses
            .values()
            .filter(|c| c.department.eq_ignore_ascii_case(department))
            .collect();
        courses.sort_by(|a, b| a.code.cmp(&b.code));
        courses
    }
}
