//! ltlsimp CLI - Command-line interface for the LTL simplifier
//!
//! Parses a formula, simplifies it with the selected strategy and prints the
//! result, optionally with metrics, an analysis and a bounded equivalence check.

mod analysis;
mod batch;
mod cli;
mod config;
mod logging;
mod output;
mod verify;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use ltlsimp_ir::{Formula, SimplificationMetrics, Simplifier};
use serde::Serialize;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

use analysis::FormulaMetrics;
use batch::{BatchProcessor, BatchResult};
use cli::{Cli, Commands, ConfigCommand, OutputFormat};
use config::Config;
use output::{
    enable_colors, format_stats, print_error, print_header, print_simplification_success,
    print_success, print_warning, Report,
};

fn main() {
    if let Err(e) = run() {
        print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // `config path` and `config init` work even when the file is broken
    if let Some(Commands::Config { command }) = &cli.command {
        enable_colors(!cli.no_color);
        return handle_config_command(command, &cli);
    }

    // Load configuration
    let mut config = if cli.no_config {
        Config::default()
    } else {
        Config::load_default()?
    };

    // Override config with CLI options
    if let Some(strategy) = &cli.strategy {
        config.strategy = strategy.clone();
    }
    if let Some(max_passes) = cli.max_passes {
        config.max_passes = max_passes;
    }
    if cli.no_color {
        config.colored = false;
    }

    enable_colors(config.colored);
    logging::init(&config.log_level, cli.debug, config.colored)?;

    match &cli.command {
        Some(Commands::Batch {
            files,
            fail_fast,
            no_progress,
        }) => batch_mode(&cli, &config, files, *fail_fast, *no_progress),
        Some(Commands::Config { command }) => handle_config_command(command, &cli),
        None => simplify_mode(&cli, &config),
    }
}

fn simplify_mode(cli: &Cli, config: &Config) -> Result<()> {
    let Some(input) = &cli.input else {
        anyhow::bail!("No formula given (see --help for usage)");
    };
    let text = read_input(input)?;
    let text = text.trim();

    let formula =
        ltlsimp_parser::parse(text).with_context(|| format!("Failed to parse formula `{}`", text))?;
    debug!(formula = %formula, size = formula.size(), "parsed input");

    let simplifier = Simplifier::new(config.simplifier_config()?);
    let (simplified, metrics) = simplifier.run(&formula);
    debug!(result = %simplified, passes = metrics.passes, "simplified");

    if !metrics.converged {
        print_warning(&format!(
            "Stopped after {} passes without reaching a fixpoint",
            metrics.passes
        ));
    }

    let verified_on = if cli.verify {
        Some(verify::verify(&formula, &simplified)?.lassos)
    } else {
        None
    };

    if cli.analyze {
        FormulaMetrics::print_comparison(
            &FormulaMetrics::analyze(&formula),
            &FormulaMetrics::analyze(&simplified),
        );
        println!();
    }

    let format = output_format(cli, config)?;
    let output = generate_output(format, text, &simplified, &metrics, verified_on)?;
    let show_status = !cli.quiet && (format == OutputFormat::Text || cli.output.is_some());

    if show_status {
        print_simplification_success(&metrics);
        if let Some(lassos) = verified_on {
            print_success(&format!("Verified on {} lasso words", lassos));
        }
    }

    match &cli.output {
        Some(path) => {
            fs::write(path, format!("{}\n", output)).context("Failed to write output file")?;
            if show_status {
                print_success(&format!("Output written to: {}", path.display()));
            }
        }
        None => {
            if show_status {
                println!();
            }
            println!("{}", output);
        }
    }

    Ok(())
}

/// The formula argument itself, or stdin for `-`
fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read formula from stdin")?;
        Ok(buffer)
    } else {
        Ok(input.to_string())
    }
}

fn output_format(cli: &Cli, config: &Config) -> Result<OutputFormat> {
    match cli.output_format {
        Some(format) => Ok(format),
        None => OutputFormat::from_str(&config.output_format, true).map_err(|e| {
            anyhow::anyhow!("Invalid output_format in configuration: {}", e)
        }),
    }
}

fn generate_output(
    format: OutputFormat,
    input: &str,
    simplified: &Formula,
    metrics: &SimplificationMetrics,
    verified_on: Option<usize>,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(simplified.to_string()),
        OutputFormat::Json => {
            let report = Report {
                input: input.to_string(),
                output: simplified.to_string(),
                formula: simplified,
                metrics,
                verified_on,
            };
            serde_json::to_string_pretty(&report).context("Failed to serialize to JSON")
        }
        OutputFormat::Stats => Ok(format_stats(metrics)?.trim_end().to_string()),
    }
}

#[derive(Serialize)]
struct FileReport<'a> {
    file: String,
    #[serde(flatten)]
    result: &'a BatchResult,
}

fn batch_mode(
    cli: &Cli,
    config: &Config,
    files: &[PathBuf],
    fail_fast: bool,
    no_progress: bool,
) -> Result<()> {
    let format = output_format(cli, config)?;
    let fail_fast = fail_fast || config.batch.fail_fast;
    let processor = BatchProcessor::new(
        Simplifier::new(config.simplifier_config()?),
        cli.verify,
        config.batch.progress && !no_progress && !cli.quiet && format != OutputFormat::Json,
        fail_fast,
    );

    let mut results: Vec<(&Path, BatchResult)> = Vec::new();
    for file in files {
        if !cli.quiet && format != OutputFormat::Json {
            print_header(&format!("Processing: {}", file.display()));
        }

        let result = processor.process_file(file)?;
        match format {
            OutputFormat::Text => {
                result.print_entries();
                if !cli.quiet {
                    result.print_summary();
                }
            }
            OutputFormat::Stats => result.print_summary(),
            OutputFormat::Json => {}
        }

        let stop = fail_fast && !result.is_success();
        results.push((file.as_path(), result));
        if stop {
            break;
        }
    }

    if format == OutputFormat::Json {
        let reports: Vec<FileReport> = results
            .iter()
            .map(|(file, result)| FileReport {
                file: file.display().to_string(),
                result,
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&reports).context("Failed to serialize to JSON")?
        );
    }

    let failed: usize = results.iter().map(|(_, r)| r.failures.len()).sum();
    if failed > 0 {
        let total: usize = results.iter().map(|(_, r)| r.total).sum();
        anyhow::bail!("{} of {} formulas failed", failed, total);
    }
    Ok(())
}

fn handle_config_command(command: &ConfigCommand, cli: &Cli) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            let config = if cli.no_config {
                Config::default()
            } else {
                Config::load_default()?
            };
            let toml_str = toml::to_string_pretty(&config)?;
            println!("{}", toml_str);
        }
        ConfigCommand::Path => {
            let path = Config::config_path();
            println!("{}", path.display());
        }
        ConfigCommand::Init => {
            let path = Config::create_default()?;
            print_success(&format!("Created config file: {}", path.display()));
        }
    }

    Ok(())
}
