//! Registrar CLI
//!
//! Interactive menu surface for the campus course & records manager. Data
//! is loaded once at startup and exported once on the save-and-exit path;
//! everything in between mutates in-memory state only.

use std::path::PathBuf;

use clap::Parser;
use registrar_core::logging::{self, Profile};
use registrar_core::AppConfig;
use registrar_store::{export_all, import_all};

mod menu;
mod prompt;
mod session;

use session::Session;

#[derive(Debug, Parser)]
#[command(name = "registrar")]
#[command(about = "Campus course & records manager", long_about = None)]
struct Cli {
    /// Data directory override (defaults to the configured `data_dir`)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(long, default_value = "registrar.toml")]
    config: PathBuf,

    /// Emit JSON logs (production profile)
    #[arg(long)]
    log_json: bool,
}

fn main() {
    let cli = Cli::parse();

    logging::init(if cli.log_json {
        Profile::Production
    } else {
        Profile::Development
    });

    let mut config = match AppConfig::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    let mut session = Session::new(config);

    println!("Welcome to the Campus Course & Records Manager!");
    println!("Loading data from files...");
    let summary = import_all(
        &mut session.registry,
        &session.config.data_dir,
        session.config.max_credits,
    );
    println!("{}", summary);
    if session.registry.is_empty() {
        println!("No data found. You can add new students and courses.");
    }

    menu::run(&mut session);

    // The exit path always exports; a failure is reported, not retried
    println!("Saving all data to files...");
    if let Err(e) = export_all(&session.registry, &session.config.data_dir) {
        eprintln!("Failed to save data: {}", e);
    }
    println!("Thank you for using the records manager. Goodbye!");
}
