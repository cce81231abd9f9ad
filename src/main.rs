//! Publish Wizard - Main entry point
//!
//! Command line front end for the publish wizard validator. Every command
//! reads a draft JSON file, runs the same checks the wizard runs, and
//! exits non-zero when the draft would be blocked.

use anyhow::Result;
use serde_json::{Map, Value, json};
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use publish_wizard::cli::{Cli, Commands};
use publish_wizard::form::load_form_file;
use publish_wizard::{LocalRequest, PublishError, PublishValidator, WizardStep};

/// Initialize the tracing subscriber; `RUST_LOG` overrides the default level.
fn init_logger() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    init_logger();

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    let passed = match cli.command {
        Commands::Validate { draft } => run_validate(&draft, cli.json)?,
        Commands::Step { step, draft } => run_step(step, &draft, cli.json)?,
        Commands::Progress { draft } => run_progress(&draft, cli.json)?,
        Commands::Request { draft, user_id } => run_request(&draft, user_id, cli.json)?,
    };

    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Validate every field of the draft
fn run_validate(path: &Path, json: bool) -> Result<bool> {
    info!("Validating draft: {:?}", path);
    let form = load_form_file(path)?;

    let mut validator = PublishValidator::new();
    let valid = validator.validate_all(&form);

    if json {
        print_json(&json!({
            "valid": valid,
            "errors": error_map(&validator),
        }))?;
    } else if valid {
        println!("✓ Draft is ready to publish");
    } else {
        println!("✗ Draft has invalid fields:");
        print_errors(&validator);
    }

    Ok(valid)
}

/// Run the navigation gate and full validation for one step
fn run_step(number: u8, path: &Path, json: bool) -> Result<bool> {
    let step = WizardStep::try_from(number)?;
    info!("Checking step {} of draft: {:?}", step, path);
    let form = load_form_file(path)?;

    let mut validator = PublishValidator::new();
    let gate = validator.is_step_valid(number, &form);
    let valid = validator.validate_step(number, &form);

    if json {
        print_json(&json!({
            "step": number,
            "title": step.title(),
            "gate": gate,
            "valid": valid,
            "errors": error_map(&validator),
        }))?;
    } else {
        println!("Step {}", step);
        println!("  can continue: {}", if gate { "yes" } else { "no" });
        println!("  complete:     {}", if valid { "yes" } else { "no" });
        print_errors(&validator);
    }

    Ok(valid)
}

/// Report progress over the trackable steps
fn run_progress(path: &Path, json: bool) -> Result<bool> {
    info!("Computing progress for draft: {:?}", path);
    let form = load_form_file(path)?;

    let progress = PublishValidator::new().step_progress(&form);

    if json {
        print_json(&progress)?;
    } else {
        println!(
            "{}/{} steps complete ({}%)",
            progress.completed, progress.total, progress.percentage
        );
        for step in WizardStep::TRACKABLE {
            let mark = if progress.steps.contains(&step.number()) {
                "✓"
            } else {
                " "
            };
            println!("  [{}] {}", mark, step);
        }
    }

    Ok(true)
}

/// Print the publish request body, or the fields blocking it
fn run_request(path: &Path, user_id: i64, json: bool) -> Result<bool> {
    info!("Building publish request for draft: {:?}", path);
    let form = load_form_file(path)?;

    match LocalRequest::from_form(&form, user_id) {
        Ok(request) => {
            print_json(&request)?;
            Ok(true)
        }
        Err(PublishError::InvalidDraft(fields)) => {
            if json {
                print_json(&json!({ "valid": false, "errors": fields }))?;
            } else {
                println!("✗ Draft cannot be published yet:");
                for error in &fields {
                    println!("  {}: {}", error.field, error.message);
                }
            }
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

fn error_map(validator: &PublishValidator) -> Map<String, Value> {
    validator
        .invalid_fields()
        .map(|(field, messages)| (field.to_string(), json!(messages)))
        .collect()
}

fn print_errors(validator: &PublishValidator) {
    for (field, messages) in validator.invalid_fields() {
        for message in messages {
            println!("  {}: {}", field, message);
        }
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
