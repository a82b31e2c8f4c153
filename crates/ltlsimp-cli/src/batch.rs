//! Batch processing mode for the ltlsimp CLI

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use ltlsimp_ir::{SimplificationMetrics, Simplifier};
use ltlsimp_parser::parse;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::output::{print_error, print_success};
use crate::verify::verify;

pub struct BatchProcessor {
    simplifier: Simplifier,
    verify: bool,
    progress: bool,
    fail_fast: bool,
}

/// One simplified formula
#[derive(Debug, Serialize)]
pub struct BatchEntry {
    pub line: usize,
    pub input: String,
    pub output: String,
    pub metrics: SimplificationMetrics,
}

/// One formula that could not be processed
#[derive(Debug, Serialize)]
pub struct BatchFailure {
    pub line: usize,
    pub input: String,
    pub error: String,
}

impl BatchProcessor {
    pub fn new(simplifier: Simplifier, verify: bool, progress: bool, fail_fast: bool) -> Self {
        Self {
            simplifier,
            verify,
            progress,
            fail_fast,
        }
    }

    pub fn process_file(&self, input_path: &Path) -> Result<BatchResult> {
        let content = fs::read_to_string(input_path)
            .with_context(|| format!("Failed to read file: {}", input_path.display()))?;

        // keep the 1-based line numbers of the file
        let formulas: Vec<(usize, String)> = content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty() && !line.trim().starts_with('#'))
            .map(|(i, line)| (i + 1, line.trim().to_string()))
            .collect();

        self.process_formulas(&formulas)
    }

    pub fn process_formulas(&self, formulas: &[(usize, String)]) -> Result<BatchResult> {
        let mut result = BatchResult {
            total: formulas.len(),
            ..Default::default()
        };

        let pb = if self.progress {
            ProgressBar::new(formulas.len() as u64)
        } else {
            ProgressBar::hidden()
        };
        pb.set_style(
            ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")?
                .progress_chars("##-"),
        );

        for (line, input) in formulas {
            pb.set_message(format!("line {}", line));

            match self.process_one(input) {
                Ok((output, metrics)) => result.entries.push(BatchEntry {
                    line: *line,
                    input: input.clone(),
                    output,
                    metrics,
                }),
                Err(e) => {
                    result.failures.push(BatchFailure {
                        line: *line,
                        input: input.clone(),
                        error: format!("{:#}", e),
                    });
                    if self.fail_fast {
                        pb.abandon_with_message("Stopped");
                        return Ok(result);
                    }
                }
            }

            pb.inc(1);
        }

        pb.finish_with_message("Done");
        Ok(result)
    }

    fn process_one(&self, input: &str) -> Result<(String, SimplificationMetrics)> {
        let formula = parse(input)?;
        let (simplified, metrics) = self.simplifier.run(&formula);

        if self.verify {
            verify(&formula, &simplified)?;
        }

        Ok((simplified.to_string(), metrics))
    }
}

#[derive(Debug, Default, Serialize)]
pub struct BatchResult {
    pub total: usize,
    pub entries: Vec<BatchEntry>,
    pub failures: Vec<BatchFailure>,
}

impl BatchResult {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty() && self.entries.len() == self.total
    }

    pub fn print_entries(&self) {
        for entry in &self.entries {
            println!("  {:>4}: {}  =>  {}", entry.line, entry.input, entry.output);
        }
    }

    pub fn print_summary(&self) {
        let (before, after) = self.entries.iter().fold((0, 0), |(b, a), entry| {
            (b + entry.metrics.initial_size, a + entry.metrics.final_size)
        });

        println!("\nBatch Processing Summary:");
        println!("  Total: {}", self.total);
        println!("  Nodes: {} -> {}", before, after);
        print_success(&format!("Simplified: {}", self.entries.len()));

        let skipped = self.total - self.entries.len() - self.failures.len();
        if skipped > 0 {
            println!("  Skipped: {}", skipped);
        }

        if !self.failures.is_empty() {
            print_error(&format!("Failures: {}", self.failures.len()));
            println!("\nFailed formulas:");
            for failure in &self.failures {
                println!("  Line {}: {}", failure.line, failure.input);
                println!("    Error: {}", failure.error);
            }
        }
    }
}
