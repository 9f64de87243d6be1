use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `auditgate.toml` schema v1.
///
/// Every key is optional. Unknown keys are rejected so that typos surface instead of being
/// silently ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct AuditgateConfigV1 {
    /// Optional schema string for tooling (`auditgate.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Path of the allowlist file, relative to the working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowlist: Option<String>,

    /// Look-ahead, in days, for flagging entries that are about to expire (1..=365).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiring_window_days: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scanner: Option<ScannerConfig>,
}

/// External scanner invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ScannerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,
}
