//! Render command handler.

use hokusai_core::{Element, PresentationUnit};
use hokusai_pattern::{PatternRegistry, compose, render_presentation};
use std::path::PathBuf;

/// Handles the render command.
///
/// Composes the document, dispatches every slide through the registry,
/// and prints the resulting element trees as plain text.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn handle_render_command(path: PathBuf) -> anyhow::Result<()> {
    tracing::info!("Starting render");

    let raw = std::fs::read_to_string(&path)?;
    let registry = PatternRegistry::standard()?;

    let composed = match compose(&raw, &registry) {
        Ok(composed) => composed,
        Err(rejection) => {
            eprintln!("❌ {}", rejection.error().kind);
            std::process::exit(1);
        }
    };

    println!("{}", composed.presentation().title());
    println!("{}", composed.presentation().description());

    let units = render_presentation(composed.presentation(), &registry);
    for (idx, unit) in units.iter().enumerate() {
        println!("\n{}", "═".repeat(80));
        println!("Slide {} [{}]", idx + 1, unit.pattern());
        print_unit(unit);
    }

    Ok(())
}

/// Prints one rendered slide.
fn print_unit(unit: &PresentationUnit) {
    for element in unit.elements() {
        match element {
            Element::Title(text) => println!("\n  {text}"),
            Element::Paragraph(text) => println!("\n  {text}"),
            Element::Columns(columns) => {
                for column in columns {
                    println!("\n  [{}]", column.heading());
                    for bullet in column.bullets() {
                        println!("    • {bullet}");
                    }
                }
            }
            Element::NumberedSteps(steps) => {
                for step in steps {
                    println!("\n  {}. {}: {}", step.number(), step.heading(), step.body());
                    for note in step.notes() {
                        println!("       {note}");
                    }
                }
            }
            Element::Callout(text) => println!("\n  ➤ {text}"),
            Element::Diagnostic { label, body } => {
                println!("\n  ⚠ {label}");
                for line in body.lines() {
                    println!("    {line}");
                }
            }
        }
    }
}
