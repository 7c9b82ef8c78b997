use registrar_core::Student;

use crate::prompt::{read_date, read_reply};
use crate::session::Session;

pub fn run(session: &mut Session) {
    loop {
        println!("\n-- Student Management --");
        println!("1. Add New Student");
        println!("2. List All Students");
        println!("3. Find Student by Registration Number");
        println!("4. Update Student Details");
        println!("5. Deactivate Student");
        println!("9. Back to Main Menu");

        let Some(choice) = read_reply("Enter your choice: ") else {
            return;
        };
        match choice.as_str() {
            "1" => add(session),
            "2" => list(session),
            "3" => find(session),
            "4" => update(session),
            "5" => deactivate(session),
            "9" => return,
            _ => println!("Invalid choice."),
        }
    }
}

fn add(session: &mut Session) {
    let Some(name) = read_reply("Enter Full Name: ") else {
        return;
    };
    let Some(email) = read_reply("Enter Email: ") else {
        return;
    };
    let Some(maybe_dob) = read_date("Enter Date of Birth (YYYY-MM-DD): ") else {
        return;
    };
    let Some(dob) = maybe_dob else {
        return;
    };
    let Some(reg_no) = read_reply("Enter Registration Number (e.g., 24BCE10001): ") else {
        return;
    };

    match session
        .registry
        .add_student(Student::new(name.clone(), email, dob, reg_no))
    {
        Ok(()) => println!("Student '{}' added successfully.", name),
        Err(e) => eprintln!("An error occurred: {}", e),
    }
}

fn list(session: &Session) {
    println!("\n--- All Students ---");
    let students = session.registry.list_students();
    if students.is_empty() {
        println!("No students found.");
    } else {
        for student in students {
            println!("{}", student);
        }
    }
}

fn find(session: &Session) {
    let Some(reg_no) = read_reply("Enter student registration number to find: ") else {
        return;
    };
    match session.registry.find_student(&reg_no) {
        Some(student) => println!("Found: {}", student),
        None => println!("No student found with registration number: {}", reg_no),
    }
}

fn update(session: &mut Session) {
    let Some(reg_no) = read_reply("Enter Registration Number of student to update: ") else {
        return;
    };
    let Some(mut student) = session.registry.find_student(&reg_no).cloned() else {
        println!("Student not found.");
        return;
    };

    let Some(name) = read_reply(&format!(
        "Enter new Full Name (or press Enter to keep '{}'): ",
        student.full_name
    )) else {
        return;
    };
    if !name.is_empty() {
        student.full_name = name;
    }

    let Some(email) = read_reply(&format!(
        "Enter new Email (or press Enter to keep '{}'): ",
        student.email
    )) else {
        return;
    };
    if !email.is_empty() {
        student.email = email;
    }

    match session.registry.update_student(student) {
        Ok(()) => println!("Student record updated successfully."),
        Err(e) => eprintln!("An error occurred: {}", e),
    }
}

fn deactivate(session: &mut Session) {
    let Some(reg_no) = read_reply("Enter Registration Number of student to deactivate: ") else {
        return;
    };
    let Some(mut student) = session.registry.find_student(&reg_no).cloned() else {
        println!("Student not found.");
        return;
    };

    student.active = false;
    let name = student.full_name.clone();
    match session.registry.update_student(student) {
        Ok(()) => println!("Student {} has been deactivated.", name),
        Err(e) => eprintln!("An error occurred: {}", e),
    }
}
