use registrar_core::ops::enrollment_ops;
use registrar_core::transcript::render_transcript;
use registrar_core::{Grade, RegistrarError};

use crate::prompt::read_reply;
use crate::session::Session;

pub fn run(session: &mut Session) {
    loop {
        println!("\n-- Enrollment & Grades --");
        println!("1. Enroll Student in Course");
        println!("2. Unenroll Student from Course");
        println!("3. Assign Grade");
        println!("4. Print Student Transcript");
        println!("9. Back to Main Menu");

        let Some(choice) = read_reply("Enter your choice: ") else {
            return;
        };
        match choice.as_str() {
            "1" => enroll(session),
            "2" => unenroll(session),
            "3" => assign_grade(session),
            "4" => transcript(session),
            "9" => return,
            _ => println!("Invalid choice."),
        }
    }
}

fn enroll(session: &mut Session) {
    let Some(reg_no) = read_reply("Enter Student Registration Number: ") else {
        return;
    };
    let Some(code) = read_reply("Enter Course Code: ") else {
        return;
    };

    let max_credits = session.config.max_credits;
    match enrollment_ops::enroll(&mut session.registry, &reg_no, &code, max_credits) {
        Ok(()) => println!("Enrollment successful."),
        Err(e) => eprintln!("Enrollment Error: {}", e),
    }
}

fn unenroll(session: &mut Session) {
    let Some(reg_no) = read_reply("Enter Student Registration Number: ") else {
        return;
    };
    let Some(code) = read_reply("Enter Course Code to unenroll from: ") else {
        return;
    };

    match enrollment_ops::unenroll(&mut session.registry, &reg_no, &code) {
        Ok(()) => println!("Unenrollment successful."),
        Err(e @ RegistrarError::UnenrollmentUnsupported { .. }) => println!("{}", e),
        Err(e) => eprintln!("Error: {}", e),
    }
}

fn assign_grade(session: &mut Session) {
    let Some(reg_no) = read_reply("Enter Student Registration Number: ") else {
        return;
    };
    let Some(code) = read_reply("Enter Course Code: ") else {
        return;
    };
    let Some(grade_raw) = read_reply("Enter Letter Grade (S, A, B, C, D, E, F): ") else {
        return;
    };

    let grade = match grade_raw.to_uppercase().parse::<Grade>() {
        Ok(grade) => grade,
        Err(_) => {
            eprintln!("Error: Invalid grade. Please use one of S, A, B, C, D, E, F.");
            return;
        }
    };

    match enrollment_ops::assign_grade(&mut session.registry, &reg_no, &code, grade) {
        Ok(()) => println!("Grade assigned successfully."),
        Err(e) => eprintln!("Error: {}", e),
    }
}

fn transcript(session: &Session) {
    let Some(reg_no) = read_reply("Enter student registration number for transcript: ") else {
        return;
    };
    match render_transcript(&session.registry, &reg_no) {
        Ok(report) => print!("{}", report),
        Err(e) => println!("{}", e),
    }
}
