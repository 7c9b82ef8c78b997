use registrar_core::CourseSpec;

use crate::prompt::{read_reply, read_u32};
use crate::session::Session;

pub fn run(session: &mut Session) {
    loop {
        println!("\n-- Course Management --");
        println!("1. Add New Course");
        println!("2. List All Courses");
        println!("3. Search Courses by Department");
        println!("9. Back to Main Menu");

        let Some(choice) = read_reply("Enter your choice: ") else {
            return;
        };
        match choice.as_str() {
            "1" => add(session),
            "2" => list(session),
            "3" => search(session),
            "9" => return,
            _ => println!("Invalid choice."),
        }
    }
}

fn add(session: &mut Session) {
    let Some(code) = read_reply("Enter Course Code (e.g., CSE0001): ") else {
        return;
    };
    let Some(title) = read_reply("Enter Course Title: ") else {
        return;
    };
    let Some(maybe_credits) = read_u32("Enter Credits: ") else {
        return;
    };
    let Some(credits) = maybe_credits else {
        return;
    };
    let Some(department) = read_reply("Enter Department: ") else {
        return;
    };

    // The semester is not prompted; the spec default (FALL) applies
    let course = match (CourseSpec {
        code,
        title,
        credits: Some(credits),
        department: Some(department),
        semester: None,
    })
    .build()
    {
        Ok(course) => course,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    let title = course.title.clone();
    match session.registry.add_course(course) {
        Ok(()) => println!("Course added successfully: {}", title),
        Err(e) => eprintln!("An error occurred: {}", e),
    }
}

fn list(session: &Session) {
    println!("\n--- All Courses ---");
    let courses = session.registry.list_courses();
    if courses.is_empty() {
        println!("No courses found.");
    } else {
        for course in courses {
            println!("{}", course);
        }
    }
}

fn search(session: &Session) {
    let Some(department) = read_reply("Enter department to search for: ") else {
        return;
    };
    let results = session.registry.courses_by_department(&department);
    println!("\n--- Courses in '{}' ---", department);
    if results.is_empty() {
        println!("No courses found for this department.");
    } else {
        for course in results {
            println!("{}", course);
        }
    }
}
