use registrar_store::backup::{directory_size, perform_backup};

use crate::prompt::read_reply;
use crate::session::Session;

/// File Utilities presents its actions once per visit (no inner loop)
pub fn run(session: &mut Session) {
    println!("\n-- File Utilities --");
    println!("1. Create Backup of Current Data");
    println!("2. Show Backup Directory Size");

    let Some(choice) = read_reply("Enter your choice: ") else {
        return;
    };
    match choice.as_str() {
        "1" => match perform_backup(&session.config.data_dir, &session.config.backup_dir) {
            Ok(target) => println!("Backup created at {}", target.display()),
            Err(e) => eprintln!("Backup failed: {}", e),
        },
        "2" => match directory_size(&session.config.backup_dir) {
            Ok(size) => println!(
                "Total size of backups directory: {:.2} KB",
                size as f64 / 1024.0
            ),
            Err(e) => eprintln!("Could not read backup directory: {}", e),
        },
        _ => println!("Invalid choice."),
    }
}
