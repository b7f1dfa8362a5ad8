//! Minimal runner around the backend: reads a profile from a JSON file and
//! prints the generated response. Set `RUST_LOG=info` to see service logs.
//!
//! ```text
//! luckracle <profile.json> [--no-history]
//! luckracle --history
//! luckracle --clear-history
//! ```

use anyhow::{Context, Result};
use log::{error, info};
use std::fs;

use luckracle_backend::Backend;
use shared::UserProfile;

const USAGE: &str = "usage: luckracle <profile.json> [--no-history] | --history | --clear-history";

fn main() {
    env_logger::init();

    if let Err(e) = run(std::env::args().skip(1).collect()) {
        error!("{:#}", e);
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Vec<String>) -> Result<()> {
    let backend = Backend::new();

    match args.first().map(String::as_str) {
        Some("--history") => {
            println!("{}", serde_json::to_string_pretty(&backend.luck_service.history())?);
        }
        Some("--clear-history") => {
            backend.luck_service.clear_history();
            println!("History cleared");
        }
        Some(path) if !path.starts_with("--") => {
            let record_history = !args.iter().any(|a| a == "--no-history");
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read profile from {}", path))?;
            let profile: UserProfile = serde_json::from_str(&content)
                .with_context(|| format!("{} is not a valid profile", path))?;

            info!("Loaded profile from {}", path);
            let response = backend.luck_service.generate(&profile, record_history)?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        _ => anyhow::bail!(USAGE),
    }

    Ok(())
}
