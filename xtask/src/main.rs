//! xtask - Development tasks for day-clock

use clap::{Parser, Subcommand};
use std::fs;
use std::path::Path;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tasks for day-clock")]
struct Xtask {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate CLI documentation from clap definitions
    GenDocs,
    /// Render the example clock face to docs/clock.svg
    GenSample,
}

fn main() {
    let args = Xtask::parse();
    match args.command {
        Commands::GenDocs => generate_cli_docs(),
        Commands::GenSample => generate_sample_face(),
    }
}

fn generate_cli_docs() {
    let markdown = clap_markdown::help_markdown::<day_clock::cli::Cli>();

    let docs_dir = Path::new("docs/cli");
    fs::create_dir_all(docs_dir).expect("Failed to create docs/cli directory");

    let output_path = docs_dir.join("reference.md");
    fs::write(&output_path, markdown).expect("Failed to write CLI reference");

    println!("Generated CLI documentation at {}", output_path.display());
}

fn generate_sample_face() {
    let now = chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.and_hms_opt(8, 34, 30))
        .expect("valid sample time");
    let store = day_clock::task::TaskStore::seeded(now);
    let config = day_clock::config::ClockConfig::default();
    let face = store.face(&config.layout());
    let svg = day_clock::clock::render_svg(&face, config.palette.as_slice());

    let docs_dir = Path::new("docs");
    fs::create_dir_all(docs_dir).expect("Failed to create docs directory");

    let output_path = docs_dir.join("clock.svg");
    fs::write(&output_path, svg).expect("Failed to write sample clock");

    println!("Generated sample clock face at {}", output_path.display());
}
