//! Config parsing and policy resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{AuditgateConfigV1, ScannerConfig};
pub use resolve::{
    DEFAULT_ALLOWLIST_PATH, DEFAULT_SCANNER_ARGS, DEFAULT_SCANNER_COMMAND, Overrides,
    ResolvedConfig, ScannerCommand,
};

/// Parse `auditgate.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<AuditgateConfigV1> {
    let cfg: AuditgateConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config (file values, then CLI overrides, then defaults).
pub fn resolve_config(
    cfg: AuditgateConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let cfg = parse_config_toml(
            r#"
schema = "auditgate.config.v1"
allowlist = "security/allowlist.json"
expiring_window_days = 14

[scanner]
command = "yarn"
args = ["audit", "--json"]
"#,
        )
        .expect("parse");

        assert_eq!(cfg.allowlist.as_deref(), Some("security/allowlist.json"));
        assert_eq!(cfg.expiring_window_days, Some(14));
        let scanner = cfg.scanner.expect("scanner table");
        assert_eq!(scanner.command.as_deref(), Some("yarn"));
        assert_eq!(
            scanner.args,
            Some(vec!["audit".to_string(), "--json".to_string()])
        );
    }

    #[test]
    fn empty_config_is_all_defaults() {
        let cfg = parse_config_toml("").expect("parse");
        assert_eq!(cfg, AuditgateConfigV1::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = parse_config_toml("expiring_window = 10\n").expect_err("unknown key");
        assert!(err.to_string().contains("expiring_window"), "{err}");

        let err = parse_config_toml("[scanner]\ncmd = \"npm\"\n").expect_err("unknown key");
        assert!(err.to_string().contains("cmd"), "{err}");
    }

    #[test]
    fn wrong_types_are_rejected() {
        assert!(parse_config_toml("expiring_window_days = \"thirty\"\n").is_err());
        assert!(parse_config_toml("expiring_window_days = -1\n").is_err());
    }
}
