use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use glob::Pattern;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use serde_json::to_string_pretty;
use std::env;
use std::fs::File;
use std::io::Write;
use std::sync::Arc;

use copyright_tagger::cli::Cli;
use copyright_tagger::copyright::CopyrightTagger;
use copyright_tagger::models::{ExtraData, Header, OUTPUT_FORMAT_VERSION, Output, SystemEnvironment};
use copyright_tagger::scanner::{ProcessResult, count, process};

fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let start_time = Utc::now();

    let exclude_patterns = compile_exclude_patterns(&cli.exclude);
    info!("Exclusion patterns: {:?}", cli.exclude);

    let (total_files, total_dirs, excluded_count) =
        count(&cli.dir_path, cli.max_depth, &exclude_patterns)
            .with_context(|| format!("Failed to walk {}", cli.dir_path))?;
    println!(
        "Found {} files in {} directories ({} items excluded)",
        total_files, total_dirs, excluded_count
    );

    let tagger = Arc::new(
        CopyrightTagger::from_corpus_file(&cli.corpus)
            .with_context(|| format!("Failed to build tagger from corpus {}", cli.corpus))?,
    );
    info!("Copyright tagger initialized from {}", cli.corpus);

    let progress_bar = create_progress_bar(total_files)?;
    let scan_result = process(
        &cli.dir_path,
        cli.max_depth,
        Arc::clone(&progress_bar),
        &exclude_patterns,
        tagger,
        cli.mode,
    )?;
    progress_bar.finish_with_message("Scan complete!");

    let end_time = Utc::now();
    let output = create_output(start_time, end_time, &cli, scan_result, total_dirs);
    write_output(&cli.output_file, &output)?;

    println!("JSON output written to {}", cli.output_file);
    Ok(())
}

fn compile_exclude_patterns(patterns: &[String]) -> Vec<Pattern> {
    patterns
        .iter()
        .filter_map(|pattern| match Pattern::new(pattern) {
            Ok(compiled) => Some(compiled),
            Err(e) => {
                warn!("Ignoring invalid exclude pattern '{}': {}", pattern, e);
                None
            }
        })
        .collect()
}

fn create_progress_bar(total_files: usize) -> Result<Arc<ProgressBar>> {
    let progress_bar = ProgressBar::new(total_files as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files processed ({eta})")?
            .progress_chars("#>-"),
    );
    Ok(Arc::new(progress_bar))
}

fn create_output(
    start_time: chrono::DateTime<Utc>,
    end_time: chrono::DateTime<Utc>,
    cli: &Cli,
    scan_result: ProcessResult,
    total_dirs: usize,
) -> Output {
    let duration = (end_time - start_time).num_nanoseconds().unwrap_or(0) as f64 / 1_000_000_000.0;

    let extra_data = ExtraData {
        files_count: scan_result.files.len(),
        directories_count: total_dirs,
        excluded_count: scan_result.excluded_count,
        files_with_copyright_count: scan_result
            .files
            .iter()
            .filter(|file| file.has_copyright_notice())
            .count(),
        system_environment: SystemEnvironment {
            operating_system: sys_info::os_type().ok(),
            cpu_architecture: env::consts::ARCH.to_string(),
            platform: format!(
                "{}-{}-{}",
                sys_info::os_type().unwrap_or_else(|_| "unknown".to_string()),
                sys_info::os_release().unwrap_or_else(|_| "unknown".to_string()),
                env::consts::ARCH
            ),
            rust_version: rustc_version_runtime::version().to_string(),
        },
    };

    // Collect all scan errors from individual files
    let errors: Vec<String> = scan_result
        .files
        .iter()
        .flat_map(|file| {
            file.scan_errors
                .iter()
                .map(move |error| format!("{}: {}", file.path, error))
        })
        .collect();

    Output {
        headers: vec![Header {
            start_timestamp: start_time.to_rfc3339(),
            end_timestamp: end_time.to_rfc3339(),
            duration,
            mode: cli.mode.as_str().to_string(),
            corpus_path: cli.corpus.clone(),
            extra_data,
            errors,
            output_format_version: OUTPUT_FORMAT_VERSION.to_string(),
        }],
        files: scan_result.files,
    }
}

fn write_output(output_file: &str, output: &Output) -> Result<()> {
    let json_output = to_string_pretty(output)?;
    let mut file = File::create(output_file)
        .with_context(|| format!("Failed to create output file {}", output_file))?;
    file.write_all(json_output.as_bytes())?;
    Ok(())
}
