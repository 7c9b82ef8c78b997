//! Interactive menu tree
//!
//! Each sub-menu loops until the user picks 9 (Back); invalid input prints
//! an error and redisplays the same menu. The File Utilities menu runs
//! once per visit, matching the reference behavior.

mod course;
mod enrollment;
mod files;
mod student;

use crate::prompt::read_reply;
use crate::session::Session;

/// Top-level menu loop; returns when the user picks Save and Exit or
/// stdin closes
pub fn run(session: &mut Session) {
    loop {
        println!("\n--- MAIN MENU ---");
        println!("1. Student Management");
        println!("2. Course Management");
        println!("3. Enrollment & Grades");
        println!("4. File Utilities");
        println!("9. Save and Exit");

        let Some(choice) = read_reply("Enter your choice: ") else {
            return;
        };
        match choice.as_str() {
            "1" => student::run(session),
            "2" => course::run(session),
            "3" => enrollment::run(session),
            "4" => files::run(session),
            "9" => return,
            _ => println!("Invalid choice. Please try again."),
        }
    }
}
