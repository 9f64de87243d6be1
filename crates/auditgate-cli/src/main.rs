//! CLI entry point for auditgate.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, the scanner
//! subprocess, and exit codes. All business logic lives in the `auditgate-app` crate.

mod logging;
mod scanner;

use anyhow::Context;
use auditgate_app::{
    AnalysisError, CheckInput, EXIT_INPUT_ERROR, ExplainOutput, ValidateOutput, load_config,
    parse_report_json, render_annotations, render_markdown, render_text, run_check, run_explain,
    run_validate_allowlist, verdict_exit_code, write_report, write_text,
};
use auditgate_settings::Overrides;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use logging::LogFormat;
use std::io::Read;
use std::process::ExitCode;
use time::{Date, OffsetDateTime};

#[derive(Parser, Debug)]
#[command(
    name = "auditgate",
    version,
    about = "Gate CI on dependency audit results, with an expiring allowlist of accepted risks"
)]
struct Cli {
    /// Path to auditgate config TOML (a missing file means defaults).
    #[arg(long, default_value = "auditgate.toml", global = true)]
    config: Utf8PathBuf,

    /// Log filter directives (e.g. `debug`, `auditgate_app=trace`). Overrides RUST_LOG.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Log output format on stderr.
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify audit advisories against the allowlist and write artifacts.
    Check(CheckArgs),

    /// Validate an allowlist file without running the scanner.
    Validate {
        /// Allowlist file (default: from config, else audit-allowlist.json).
        #[arg(long)]
        allowlist: Option<Utf8PathBuf>,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/auditgate/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/auditgate/report.json")]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Explain a status or error code with remediation guidance.
    Explain {
        /// A status (e.g. "expired") or code (e.g. "allowlist_invalid").
        identifier: String,
    },
}

#[derive(clap::Args, Debug)]
struct CheckArgs {
    /// Allowlist file (default: from config, else audit-allowlist.json). A missing file is an
    /// empty allowlist.
    #[arg(long)]
    allowlist: Option<Utf8PathBuf>,

    /// Read captured scanner output from this file (`-` for stdin) instead of running the scanner.
    #[arg(long)]
    audit_report: Option<Utf8PathBuf>,

    /// Scanner command (default: from config, else `npm`).
    #[arg(long)]
    scanner: Option<String>,

    /// Scanner argument; repeat for several (default: `audit --json`).
    #[arg(long = "scanner-arg", allow_hyphen_values = true)]
    scanner_args: Vec<String>,

    /// Date to evaluate expiry against, YYYY-MM-DD (default: today in UTC).
    #[arg(long, value_parser = parse_reference_date)]
    reference_date: Option<Date>,

    /// Look-ahead in days for flagging entries about to expire (1..=365).
    #[arg(long)]
    expiring_window_days: Option<u32>,

    /// Where to write the JSON report.
    #[arg(long, default_value = "artifacts/auditgate/report.json")]
    report_out: Utf8PathBuf,

    /// Also write a Markdown report here.
    #[arg(long)]
    markdown_out: Option<Utf8PathBuf>,

    /// Print GitHub Actions annotations to stdout.
    #[arg(long)]
    annotations: bool,

    /// Suppress the console summary.
    #[arg(long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = logging::init_tracing(cli.log_level.as_deref(), cli.log_format) {
        eprintln!("auditgate error: {err:#}");
        return exit_code(EXIT_INPUT_ERROR);
    }

    let result = match &cli.cmd {
        Commands::Check(args) => cmd_check(&cli.config, args),
        Commands::Validate { allowlist } => cmd_validate(&cli.config, allowlist.as_deref()),
        Commands::Md { report, output } => cmd_md(report, output.as_deref()),
        Commands::Annotations { report, max } => cmd_annotations(report, *max),
        Commands::Explain { identifier } => Ok(cmd_explain(identifier)),
    };

    match result {
        Ok(code) => exit_code(code),
        Err(err) => {
            eprintln!("auditgate error: {err:#}");
            exit_code(EXIT_INPUT_ERROR)
        }
    }
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

fn parse_reference_date(s: &str) -> Result<Date, String> {
    auditgate_types::dates::parse_date(s).map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn cmd_check(config_path: &Utf8Path, args: &CheckArgs) -> anyhow::Result<i32> {
    let config_text = read_optional(config_path).context("read config")?;
    let overrides = Overrides {
        allowlist: args.allowlist.as_ref().map(|p| p.to_string()),
        expiring_window_days: args.expiring_window_days,
        scanner_command: args.scanner.clone(),
        scanner_args: args.scanner_args.clone(),
    };
    let resolved = match load_config(config_text.as_deref(), overrides) {
        Ok(resolved) => resolved,
        Err(err) => return Ok(report_analysis_error(&err)),
    };

    let allowlist_path = Utf8PathBuf::from(&resolved.allowlist_path);
    let allowlist_text = read_optional(&allowlist_path)
        .with_context(|| format!("read allowlist: {allowlist_path}"))?;
    tracing::debug!(path = %allowlist_path, found = allowlist_text.is_some(), "allowlist");

    let audit_text = match &args.audit_report {
        Some(path) if path.as_str() == "-" => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("read audit output from stdin")?;
            text
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("read audit report: {path}"))?,
        None => {
            let scan = scanner::run_scanner(&resolved.scanner)?;
            if scan.exit_code != Some(0) {
                tracing::debug!(
                    exit_code = ?scan.exit_code,
                    "scanner exited non-zero; parsing its output anyway"
                );
            }
            scan.stdout
        }
    };

    let reference_date = args
        .reference_date
        .unwrap_or_else(|| OffsetDateTime::now_utc().date());

    let output = match run_check(CheckInput {
        allowlist_text: allowlist_text.as_deref(),
        audit_text: &audit_text,
        reference_date,
        effective: &resolved.effective,
    }) {
        Ok(output) => output,
        Err(err) => return Ok(report_analysis_error(&err)),
    };

    write_report(&args.report_out, &output.report).context("write report json")?;
    tracing::debug!(path = %args.report_out, "wrote report");

    if let Some(markdown_out) = &args.markdown_out {
        let md = render_markdown(&output.report);
        write_text(markdown_out, &md).context("write markdown")?;
    }

    if !args.quiet {
        print!("{}", render_text(&output.report));
    }
    if args.annotations {
        for annotation in render_annotations(&output.report, usize::MAX) {
            println!("{annotation}");
        }
    }

    Ok(verdict_exit_code(output.report.verdict))
}

fn cmd_validate(config_path: &Utf8Path, allowlist: Option<&Utf8Path>) -> anyhow::Result<i32> {
    let config_text = read_optional(config_path).context("read config")?;
    let overrides = Overrides {
        allowlist: allowlist.map(|p| p.to_string()),
        ..Overrides::default()
    };
    let resolved = match load_config(config_text.as_deref(), overrides) {
        Ok(resolved) => resolved,
        Err(err) => return Ok(report_analysis_error(&err)),
    };

    let path = Utf8PathBuf::from(&resolved.allowlist_path);
    let text =
        std::fs::read_to_string(&path).with_context(|| format!("read allowlist: {path}"))?;

    match run_validate_allowlist(&text) {
        ValidateOutput::Valid {
            entries,
            duplicates,
        } => {
            for dup in &duplicates {
                println!(
                    "warning: $[{}] repeats {} from $[{}]; only the first entry applies",
                    dup.duplicate_index, dup.key, dup.first_index
                );
            }
            println!("{path}: ok ({entries} entries)");
            Ok(0)
        }
        ValidateOutput::Invalid { message, errors } => {
            eprintln!("{path}: {message}");
            for error in errors {
                eprintln!("  {error}");
            }
            Ok(1)
        }
    }
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<i32> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&report);

    if let Some(out_path) = output {
        write_text(out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(0)
}

fn cmd_annotations(report_path: &Utf8Path, max: usize) -> anyhow::Result<i32> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;

    for annotation in render_annotations(&report, max) {
        println!("{}", annotation);
    }

    Ok(0)
}

fn cmd_explain(identifier: &str) -> i32 {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", auditgate_app::format_explanation(&exp));
            0
        }
        ExplainOutput::NotFound {
            identifier,
            available_statuses,
            available_codes,
        } => {
            eprint!(
                "{}",
                auditgate_app::format_not_found(&identifier, available_statuses, available_codes)
            );
            1
        }
    }
}

/// Print an input error with every field-level detail; the run could not happen.
fn report_analysis_error(err: &AnalysisError) -> i32 {
    eprintln!("error[{}]: {err}", err.code());
    for field in err.field_errors() {
        eprintln!("  {field}");
    }
    eprintln!("hint: run `auditgate explain {}` for guidance", err.code());
    EXIT_INPUT_ERROR
}

/// Read a file that may legitimately be absent.
fn read_optional(path: &Utf8Path) -> anyhow::Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("read {path}")),
    }
}
