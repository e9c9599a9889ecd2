//! Contact Form - Main entry point
//!
//! Runs the contact form on stdin/stdout, keeping accepted contacts in memory
//! for the lifetime of the process.

use anyhow::Result;
use contact_form::{console, Config, ContactForm, InMemoryContactBook};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();

    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Logs go to stderr so they do not interleave with prompts on stdout
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let mut form = ContactForm::from_config(&config);
    let mut book = InMemoryContactBook::with_case_sensitivity(config.case_sensitive_names);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    console::run(&mut form, &mut book, stdin.lock(), &mut stdout)?;

    info!(contacts = book.len(), "Contact form closed");
    Ok(())
}
