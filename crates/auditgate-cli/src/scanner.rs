//! Scanner subprocess adapter.
//!
//! `npm audit` exits non-zero whenever it finds vulnerabilities, so the exit status never
//! decides anything here. The captured stdout is handed to the parser as-is.

use anyhow::Context;
use auditgate_settings::ScannerCommand;
use std::process::Command;

#[derive(Clone, Debug)]
pub struct ScanOutput {
    pub stdout: String,
    pub exit_code: Option<i32>,
}

pub fn run_scanner(scanner: &ScannerCommand) -> anyhow::Result<ScanOutput> {
    tracing::info!(command = %scanner.display(), "running scanner");

    let output = Command::new(&scanner.command)
        .args(&scanner.args)
        .output()
        .with_context(|| format!("spawn scanner: {}", scanner.command))?;

    let exit_code = output.status.code();
    tracing::debug!(bytes = output.stdout.len(), "scanner finished");

    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.trim().is_empty() {
        tracing::debug!(stderr = %stderr.trim(), "scanner stderr");
    }

    let stdout = String::from_utf8(output.stdout).context("scanner output is not valid UTF-8")?;

    Ok(ScanOutput { stdout, exit_code })
}
