//! Colored output formatting for the ltlsimp CLI

use colored::*;
use ltlsimp_ir::{Formula, SimplificationMetrics};
use serde::Serialize;
use std::fmt::Write;

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

pub fn print_warning(message: &str) {
    eprintln!("{} {}", "!".yellow().bold(), message);
}

pub fn print_header(title: &str) {
    println!("\n{}", title.cyan().bold());
    println!("{}", "=".repeat(title.chars().count()).cyan());
}

pub fn format_run_summary(metrics: &SimplificationMetrics) -> String {
    format!(
        "{}: {} -> {} nodes, {} rewrites in {} passes",
        metrics.strategy.to_string().cyan(),
        metrics.initial_size.to_string().yellow(),
        metrics.final_size.to_string().green(),
        metrics.rewrites.to_string().magenta(),
        metrics.passes
    )
}

pub fn print_simplification_success(metrics: &SimplificationMetrics) {
    print_success("Simplification complete");
    println!("  {}", format_run_summary(metrics));
}

/// Plain-text statistics for `--output-format stats`
pub fn format_stats(metrics: &SimplificationMetrics) -> Result<String, std::fmt::Error> {
    let mut output = String::new();
    writeln!(&mut output, "Simplification Statistics:")?;
    writeln!(&mut output, "  Strategy: {}", metrics.strategy)?;
    writeln!(
        &mut output,
        "  Passes: {} ({})",
        metrics.passes,
        if metrics.converged {
            "converged"
        } else {
            "pass limit reached"
        }
    )?;
    writeln!(&mut output, "  Rewrites: {}", metrics.rewrites)?;
    writeln!(
        &mut output,
        "  Size: {} -> {} ({:.1}% smaller)",
        metrics.initial_size,
        metrics.final_size,
        metrics.reduction_ratio * 100.0
    )?;
    if !metrics.rule_counts.is_empty() {
        writeln!(&mut output, "\nRule Firings:")?;
        for (rule, count) in &metrics.rule_counts {
            writeln!(&mut output, "  {}: {}", rule, count)?;
        }
    }
    Ok(output)
}

/// Everything `--output-format json` reports about one formula
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub input: String,
    pub output: String,
    pub formula: &'a Formula,
    pub metrics: &'a SimplificationMetrics,
    /// Number of lasso words the result was checked on, when verified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_on: Option<usize>,
}

pub fn enable_colors(enabled: bool) {
    if enabled {
        colored::control::unset_override();
    } else {
        colored::control::set_override(false);
    }
}
