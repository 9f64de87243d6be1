use crate::error::AnalysisError;
use anyhow::Context;
use auditgate_settings::{AuditgateConfigV1, Overrides, ResolvedConfig};

/// Parse optional `auditgate.toml` contents and apply CLI overrides.
///
/// `None` (no config file) and blank text both mean defaults.
pub fn load_config(
    config_text: Option<&str>,
    overrides: Overrides,
) -> Result<ResolvedConfig, AnalysisError> {
    let cfg = match config_text {
        Some(text) if !text.trim().is_empty() => auditgate_settings::parse_config_toml(text)
            .context("parse config")
            .map_err(AnalysisError::Config)?,
        _ => AuditgateConfigV1::default(),
    };

    auditgate_settings::resolve_config(cfg, overrides)
        .context("resolve config")
        .map_err(AnalysisError::Config)
}
