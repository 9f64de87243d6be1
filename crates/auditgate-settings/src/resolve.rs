use crate::model::AuditgateConfigV1;
use auditgate_domain::policy::{DEFAULT_EXPIRING_WINDOW_DAYS, EffectiveConfig};
use auditgate_types::ids::SCHEMA_CONFIG_V1;

pub const DEFAULT_ALLOWLIST_PATH: &str = "audit-allowlist.json";
pub const DEFAULT_SCANNER_COMMAND: &str = "npm";
pub const DEFAULT_SCANNER_ARGS: &[&str] = &["audit", "--json"];

const WINDOW_RANGE: std::ops::RangeInclusive<u32> = 1..=365;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub allowlist: Option<String>,
    pub expiring_window_days: Option<u32>,
    pub scanner_command: Option<String>,
    /// Replaces the configured arguments when non-empty.
    pub scanner_args: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScannerCommand {
    pub command: String,
    pub args: Vec<String>,
}

impl ScannerCommand {
    /// Shell-like rendering for logs.
    pub fn display(&self) -> String {
        std::iter::once(self.command.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
    pub allowlist_path: String,
    pub scanner: ScannerCommand,
}

pub fn resolve_config(
    cfg: AuditgateConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected '{SCHEMA_CONFIG_V1}')");
    }

    let expiring_window_days = overrides
        .expiring_window_days
        .or(cfg.expiring_window_days)
        .unwrap_or(DEFAULT_EXPIRING_WINDOW_DAYS);
    if !WINDOW_RANGE.contains(&expiring_window_days) {
        anyhow::bail!(
            "expiring_window_days must be between {} and {}, got {expiring_window_days}",
            WINDOW_RANGE.start(),
            WINDOW_RANGE.end()
        );
    }

    let allowlist_path = overrides
        .allowlist
        .or(cfg.allowlist)
        .unwrap_or_else(|| DEFAULT_ALLOWLIST_PATH.to_string());
    if allowlist_path.trim().is_empty() {
        anyhow::bail!("allowlist path must not be empty");
    }

    let scanner_cfg = cfg.scanner.unwrap_or_default();
    let command = overrides
        .scanner_command
        .or(scanner_cfg.command)
        .unwrap_or_else(|| DEFAULT_SCANNER_COMMAND.to_string());
    if command.trim().is_empty() {
        anyhow::bail!("scanner command must not be empty");
    }
    let args = if overrides.scanner_args.is_empty() {
        scanner_cfg
            .args
            .unwrap_or_else(|| DEFAULT_SCANNER_ARGS.iter().map(|s| s.to_string()).collect())
    } else {
        overrides.scanner_args
    };

    Ok(ResolvedConfig {
        effective: EffectiveConfig {
            expiring_window_days,
        },
        allowlist_path,
        scanner: ScannerCommand { command, args },
    })
}
