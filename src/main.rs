mod logging;

use anyhow::{Context, Result};
use clap::{Arg, Command};
use glob::glob;
use std::path::{Path, PathBuf};
use telemetry_csv::{
    default_output_path, resolve_output_path, ConversionReport, ConvertOptions, Converter,
};

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("VERGEN_GIT_COMMIT_DATE"),
    ")"
);

fn build_command() -> Command {
    Command::new("Telemetry CSV")
        .version(VERSION)
        .about("Convert semicolon-delimited telemetry logs (Time_ms;PITCH;ROLL;YAW;Dizziness;Nystagmus) into spreadsheet-ready CSV.")
        .arg(
            Arg::new("files")
                .help("Telemetry log files to convert (supports globbing). Output defaults to the input name with .txt replaced by .csv, next to the input.")
                .required(false)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file for a single input (.xlsx is rewritten to .csv, other names get .csv appended)")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .help("Directory for output files (default: same as input file); created if missing")
                .value_name("DIR")
                .conflicts_with("output"),
        )
        .arg(
            Arg::new("overwrite")
                .long("overwrite")
                .help("Replace output files that already exist")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug output and detailed conversion information")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print a JSON report per converted file instead of the text summary (requires the `json` feature)")
                .action(clap::ArgAction::SetTrue),
        )
}

/// Expand glob patterns; plain paths are passed through as given
fn expand_input_patterns(patterns: &[&String]) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    for pattern in patterns {
        if !(pattern.contains('*') || pattern.contains('?') || pattern.contains('[')) {
            paths.push(PathBuf::from(pattern.as_str()));
            continue;
        }

        match glob(pattern) {
            Ok(glob_iter) => match glob_iter.collect::<Result<Vec<_>, _>>() {
                Ok(matched) => {
                    if matched.is_empty() {
                        eprintln!("Warning: Pattern '{pattern}' matched no files");
                    }
                    paths.extend(matched.into_iter().filter(|p| p.is_file()));
                }
                Err(e) => eprintln!("Error expanding glob pattern '{pattern}': {e}"),
            },
            Err(e) => eprintln!("Invalid glob pattern '{pattern}': {e}"),
        }
    }

    paths
}

#[cfg(feature = "json")]
fn render_json_report(report: &ConversionReport) -> Result<String> {
    serde_json::to_string_pretty(report).with_context(|| {
        format!(
            "Failed to serialize report for {}",
            report.output_path.display()
        )
    })
}

#[cfg(feature = "json")]
fn print_json_report(report: &ConversionReport) -> Result<()> {
    println!("{}", render_json_report(report)?);
    Ok(())
}

#[cfg(not(feature = "json"))]
fn print_json_report(_report: &ConversionReport) -> Result<()> {
    anyhow::bail!("--json requires telemetry_csv to be built with the `json` feature")
}

fn display_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
}

fn main() -> Result<()> {
    let matches = build_command().get_matches();

    let debug = matches.get_flag("debug");
    let json = matches.get_flag("json");
    logging::init_logging(debug);

    let options = ConvertOptions {
        output: matches.get_one::<String>("output").map(PathBuf::from),
        output_dir: matches.get_one::<String>("output-dir").map(PathBuf::from),
        overwrite: matches.get_flag("overwrite"),
    };

    // No files provided, show help and exit
    let file_patterns: Vec<&String> = match matches.get_many::<String>("files") {
        Some(files) => files.collect(),
        None => {
            build_command()
                .print_help()
                .context("Failed to print usage")?;
            println!();
            return Ok(());
        }
    };

    let input_files = expand_input_patterns(&file_patterns);
    if input_files.is_empty() {
        eprintln!("Error: No input files found.");
        eprintln!("Input patterns were: {file_patterns:?}");
        std::process::exit(1);
    }

    if options.output.is_some() && input_files.len() > 1 {
        eprintln!(
            "Error: --output can only be used with a single input file ({} given).",
            input_files.len()
        );
        std::process::exit(1);
    }

    let mut converter = Converter::new();
    let mut converted_files = 0;

    for (index, path) in input_files.iter().enumerate() {
        let filename = display_name(path);
        if !json {
            if index > 0 {
                println!();
            }
            println!("Processing: {filename}");
        }

        let output_path = resolve_output_path(&default_output_path(path, &options));
        if !options.overwrite && output_path.exists() {
            eprintln!(
                "Warning: Output file already exists, skipping {filename} (use --overwrite to replace): {}",
                output_path.display()
            );
            continue;
        }

        let result = converter.convert(path, &output_path);
        if !result.success {
            eprintln!("Error processing {filename}: {}", result.message);
            continue;
        }

        converted_files += 1;
        match converter.last_report() {
            Some(report) if json => print_json_report(report)
                .with_context(|| format!("Failed to report result for {filename}"))?,
            _ => println!("{}", converter.last_message()),
        }
    }

    if converted_files == 0 {
        eprintln!(
            "Error: No files were converted out of {} file(s) given.",
            input_files.len()
        );
        eprintln!("Use --debug flag for more detailed information.");
        std::process::exit(1);
    }

    Ok(())
}
