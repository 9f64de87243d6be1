//! Use case orchestration for auditgate.
//!
//! This crate provides the application layer: use cases that coordinate the allowlist, audit,
//! domain, and render layers. It is intentionally thin and delegates heavy lifting to the
//! appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing, the scanner subprocess,
//! and file I/O.

#![forbid(unsafe_code)]

mod check;
mod config;
mod error;
mod explain;
mod render;
mod report;
mod validate;

pub use check::{CheckInput, CheckOutput, run_check, verdict_exit_code};
pub use config::load_config;
pub use error::AnalysisError;
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use render::{render_annotations, render_markdown, render_text, write_text};
pub use report::{parse_report_json, serialize_report, to_renderable, write_report};
pub use validate::{ValidateOutput, run_validate_allowlist};

/// Exit code when the analysis could not run (invalid input, config, or I/O).
pub const EXIT_INPUT_ERROR: i32 = 2;
