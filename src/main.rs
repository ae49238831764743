//! deck-estimate - CLI tool to replay deck configuration sessions.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use deck_core::{load_session, validate_session, InstanceDefaults};

/// Replay a recorded deck configuration session and emit its estimate line item.
#[derive(Parser, Debug)]
#[command(name = "deck-estimate")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input session file (JSON action log)
    #[arg(short, long)]
    input: PathBuf,

    /// Output file for the line item JSON (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON file overriding the finish defaults of new instances
    #[arg(long)]
    defaults: Option<PathBuf>,

    /// Validate only, don't generate output
    #[arg(long)]
    validate: bool,

    /// Output the replayed session state as JSON
    #[arg(long)]
    debug: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout stays clean JSON.
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let defaults = match &args.defaults {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            InstanceDefaults::from_json_str(&json)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        }
        None => InstanceDefaults::default(),
    };

    info!("Processing: {}", args.input.display());

    let script = load_session(&args.input)
        .with_context(|| format!("Failed to load {}", args.input.display()))?;

    let session = script
        .replay(&defaults)
        .with_context(|| format!("Failed to replay {}", args.input.display()))?;

    info!(
        "Replayed {} action(s) into {} component instance(s)",
        script.actions.len(),
        session.instances().len()
    );

    // Debug output
    if args.debug {
        let json = serde_json::to_string_pretty(&session)?;
        println!("{}", json);
        return Ok(());
    }

    // Validate
    let validation = validate_session(&session);
    validation.log();

    if !validation.passed() {
        anyhow::bail!("Validation failed");
    }

    // Validate-only mode
    if args.validate {
        info!("Validation passed");
        return Ok(());
    }

    let item = session.finalize()?;
    let json = serde_json::to_string_pretty(&item)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Generated: {}", path.display());
        }
        None => println!("{}", json),
    }

    info!("{}", item.summary);

    Ok(())
}
