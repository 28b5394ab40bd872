use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};

use crate::clipboard::copy_to_clipboard;
use crate::models::Diagnostic;
use crate::parsers::{extract_all_bodies, has_prefix, parse_marker};
use crate::pipeline::{
    PayloadMode, PipelineConfig, PrefixMode, format_all_bodies, format_first_body, parse_timestamp,
    prepare_entries,
};
use crate::utils::{read_input, sanitize_for_terminal, write_output_file};

#[derive(Parser)]
#[command(name = "logcat-body-pretty")]
#[command(version = "0.1.0")]
#[command(
    about = "Reassemble paginated logcat output and pretty-print SDK event bodies",
    long_about = None
)]
pub struct Cli {
    /// Log pipeline details to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options shared by every command that reassembles the input
#[derive(Args, Debug, Clone)]
pub struct PipelineArgs {
    /// Where to strip the logcat prefix
    #[arg(long, value_enum, env = "LOGCAT_BODY_PREFIX_MODE", default_value_t = PrefixMode::Fragment)]
    pub prefix_mode: PrefixMode,

    /// Keep whitespace around page bodies when joining paginated logs
    #[arg(long)]
    pub no_trim_pages: bool,
}

impl PipelineArgs {
    fn config(&self, payload_mode: PayloadMode) -> PipelineConfig {
        PipelineConfig { prefix_mode: self.prefix_mode, payload_mode, trim_pages: !self.no_trim_pages }
    }
}

#[derive(Args, Debug, Clone)]
pub struct PayloadArgs {
    /// How the extracted body is decoded before parsing
    #[arg(long, value_enum, env = "LOGCAT_BODY_VARIANT", default_value_t = PayloadMode::Structured)]
    pub variant: PayloadMode,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Pretty-print the first event body in the log
    Format {
        /// Logcat dump to read (stdin when omitted or "-")
        input: Option<PathBuf>,

        #[command(flatten)]
        pipeline: PipelineArgs,

        #[command(flatten)]
        payload: PayloadArgs,

        /// Replace the input file's contents with the formatted body
        #[arg(long)]
        in_place: bool,

        /// Also copy the formatted body to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Pretty-print every event body, one document per body
    FormatAll {
        /// Logcat dump to read (stdin when omitted or "-")
        input: Option<PathBuf>,

        #[command(flatten)]
        pipeline: PipelineArgs,

        #[command(flatten)]
        payload: PayloadArgs,

        /// Write each document to DIR/body-NNN.json instead of stdout
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },
    /// Print the reassembled log lines in chronological order
    Reassemble {
        /// Logcat dump to read (stdin when omitted or "-")
        input: Option<PathBuf>,

        #[command(flatten)]
        pipeline: PipelineArgs,

        /// Print one JSON object per line
        #[arg(long)]
        json: bool,
    },
    /// Show statistics about a logcat dump
    Stats {
        /// Logcat dump to read (stdin when omitted or "-")
        input: Option<PathBuf>,

        #[command(flatten)]
        pipeline: PipelineArgs,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Some(Commands::Format { input, pipeline, payload, in_place, copy }) => {
            let config = pipeline.config(payload.variant);
            format_first(input.as_deref(), &config, *in_place, *copy)?;
        }
        Some(Commands::FormatAll { input, pipeline, payload, out_dir }) => {
            let config = pipeline.config(payload.variant);
            format_all(input.as_deref(), &config, out_dir.as_deref())?;
        }
        Some(Commands::Reassemble { input, pipeline, json }) => {
            let config = pipeline.config(PayloadMode::default());
            reassemble(input.as_deref(), &config, *json)?;
        }
        Some(Commands::Stats { input, pipeline }) => {
            let config = pipeline.config(PayloadMode::default());
            show_stats(input.as_deref(), &config)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn report_diagnostics(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        eprintln!("Warning: {}", diagnostic);
    }
}

fn format_first(input: Option<&Path>, config: &PipelineConfig, in_place: bool, copy: bool) -> Result<()> {
    let target = match input {
        Some(path) if in_place && path != Path::new("-") => Some(path),
        _ if in_place => bail!("--in-place needs an input file"),
        _ => None,
    };

    let text = read_input(input)?;
    let mut diagnostics = Vec::new();
    let result = format_first_body(&text, config, &mut diagnostics);
    report_diagnostics(&diagnostics);
    let formatted = result?;

    match target {
        Some(path) => {
            write_output_file(path, &formatted)?;
            eprintln!("Formatted body written to {}", path.display());
        }
        None => println!("{}", formatted),
    }

    if copy {
        copy_to_clipboard(&formatted)?;
        eprintln!("Formatted body copied to clipboard");
    }

    Ok(())
}

fn format_all(input: Option<&Path>, config: &PipelineConfig, out_dir: Option<&Path>) -> Result<()> {
    let text = read_input(input)?;
    let mut diagnostics = Vec::new();
    let result = format_all_bodies(&text, config, &mut diagnostics);
    report_diagnostics(&diagnostics);
    let documents = result?;

    if let Some(dir) = out_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    }

    let total = documents.len();
    let mut written = 0;
    for (index, document) in documents.into_iter().enumerate() {
        let number = index + 1;
        let formatted = match document {
            Ok(formatted) => formatted,
            Err(e) => {
                eprintln!("Warning: Skipping body {} of {}: {}", number, total, e);
                continue;
            }
        };

        match out_dir {
            Some(dir) => {
                let path = dir.join(format!("body-{:03}.json", number));
                if let Err(e) = write_output_file(&path, &formatted) {
                    eprintln!("Warning: {:#}", e);
                    continue;
                }
                println!("{}", path.display());
            }
            None => {
                if written > 0 {
                    println!();
                }
                println!("{}", formatted);
            }
        }
        written += 1;
    }

    if written == 0 {
        bail!("Unable to format: none of the {} bodies could be formatted", total);
    }
    if written < total {
        eprintln!("Formatted {} of {} bodies", written, total);
    }

    Ok(())
}

fn reassemble(input: Option<&Path>, config: &PipelineConfig, json: bool) -> Result<()> {
    let text = read_input(input)?;
    let prepared = prepare_entries(&text, config);
    report_diagnostics(&prepared.diagnostics);

    for entry in &prepared.entries {
        if json {
            let line = serde_json::to_string(entry).context("Failed to serialize log entry")?;
            println!("{}", line);
        } else {
            println!("{}", sanitize_for_terminal(entry.as_str()));
        }
    }

    Ok(())
}

fn show_stats(input: Option<&Path>, config: &PipelineConfig) -> Result<()> {
    let text = read_input(input)?;
    let prepared = prepare_entries(&text, config);

    let physical_lines = text.lines().count();
    let prefixed = text.lines().filter(|line| has_prefix(line)).count();
    let fragments = text.lines().filter(|line| parse_marker(line).is_some()).count();
    let bodies = extract_all_bodies(&prepared.entries).len();

    println!("Logcat Dump Statistics");
    println!("======================");
    println!("Physical lines: {}", physical_lines);
    println!("  With logcat prefix: {}", prefixed);
    println!("  Paginated fragments: {}", fragments);
    println!("Logical entries: {}", prepared.entries.len());
    println!("Incomplete paginated logs: {}", prepared.diagnostics.len());
    println!("Bodies found: {}", bodies);

    let mut timestamps = prepared.entries.iter().filter_map(|e| parse_timestamp(e.as_str()));
    if let Some(earliest) = timestamps.next() {
        println!("Earliest entry: {}", earliest.format("%Y-%m-%d %H:%M:%S%.3f"));
        let latest = timestamps.last().unwrap_or(earliest);
        println!("Latest entry: {}", latest.format("%Y-%m-%d %H:%M:%S%.3f"));
    }

    Ok(())
}
