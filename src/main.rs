//! # og-image CLI
//!
//! Generates the Open Graph preview card for the Write Toba website.
//!
//! ## Usage
//!
//! ```bash
//! # Write og-image.png into the current directory
//! og-image
//!
//! # Trace font resolution and layout
//! RUST_LOG=debug og-image
//! ```

use clap::Parser;
use std::path::Path;

use og_image::{
    OgImageError,
    compose::{self, FontSources},
    config::OUTPUT_PATH,
};

/// og-image - Write Toba preview card generator
#[derive(Parser, Debug)]
#[command(name = "og-image")]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error creating image: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), OgImageError> {
    let report = compose::generate(
        Path::new(OUTPUT_PATH),
        &FontSources::SYSTEM,
        &mut std::io::stderr(),
    )?;

    println!("Successfully created {}", report.path.display());
    println!("Image size: {}x{} pixels", report.width, report.height);

    Ok(())
}
