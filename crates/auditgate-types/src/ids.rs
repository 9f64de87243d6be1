//! Stable identifiers for statuses, error codes, and document schemas.
//!
//! Codes are short snake_case discriminators. They appear in reports, logs, and `explain`.

// Schemas
pub const SCHEMA_CONFIG_V1: &str = "auditgate.config.v1";

// Statuses
pub const STATUS_NEW: &str = "new";
pub const STATUS_ALLOWED: &str = "allowed";
pub const STATUS_EXPIRED: &str = "expired";
pub const STATUS_EXPIRING_SOON: &str = "expiring_soon";

// Error codes (the analysis could not run)
pub const CODE_ALLOWLIST_INVALID: &str = "allowlist_invalid";
pub const CODE_AUDIT_REPORT_INVALID: &str = "audit_report_invalid";
pub const CODE_CONFIG_INVALID: &str = "config_invalid";

// Audit report formats
pub const FORMAT_NPM_V1: &str = "npm-v1";
pub const FORMAT_NPM_V2: &str = "npm-v2";
pub const FORMAT_YARN_CLASSIC: &str = "yarn-classic";
