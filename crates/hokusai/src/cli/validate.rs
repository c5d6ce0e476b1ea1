//! Validation command handler.

use super::OutputFormat;
use hokusai_pattern::{ComposeRejection, PatternRegistry, compose};
use std::path::{Path, PathBuf};

/// Handles the validate command.
///
/// # Arguments
///
/// * `path` - Path to the document file
/// * `format` - Output format (human or json)
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn handle_validate_command(path: PathBuf, format: OutputFormat) -> anyhow::Result<()> {
    tracing::info!("Starting validation");

    let raw = std::fs::read_to_string(&path)?;
    let registry = PatternRegistry::standard()?;

    match compose(&raw, &registry) {
        Ok(composed) => {
            match format {
                OutputFormat::Human => {
                    println!("✅ {}", path.display());
                    println!("{}", "─".repeat(80));
                    println!(
                        "\n  \"{}\": {} slide(s), no issues found",
                        composed.presentation().title(),
                        composed.presentation().slides().len()
                    );
                }
                OutputFormat::Json => {
                    let output = serde_json::json!({
                        "valid": true,
                        "file": path.display().to_string(),
                        "title": composed.presentation().title(),
                        "slides": composed.presentation().slides().len(),
                        "violations": [],
                    });
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
            }
            Ok(())
        }
        Err(rejection) => {
            output_rejection(path.as_path(), &rejection, format)?;
            std::process::exit(1);
        }
    }
}

/// Outputs a rejection in the requested format.
fn output_rejection(
    path: &Path,
    rejection: &ComposeRejection,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Human => {
            println!("❌ {}", path.display());
            println!("{}", "─".repeat(80));

            let violations = rejection.error().violations();
            if violations.is_empty() {
                println!("\n  {}", rejection.error().kind);
            } else {
                println!("\nViolations:");
                for (i, violation) in violations.iter().enumerate() {
                    println!("\n  {}. {}", i + 1, violation);
                }
            }

            println!("\nNormalized source:");
            for line in rejection.normalized_source().lines() {
                println!("  {line}");
            }
        }
        OutputFormat::Json => {
            let violations: Vec<serde_json::Value> = rejection
                .error()
                .violations()
                .iter()
                .map(|v| {
                    serde_json::json!({
                        "path": v.path,
                        "category": format!("{:?}", v.kind),
                        "message": v.message,
                    })
                })
                .collect();

            let output = serde_json::json!({
                "valid": false,
                "file": path.display().to_string(),
                "error": rejection.error().kind.to_string(),
                "violations": violations,
                "normalized_source": rejection.normalized_source(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
