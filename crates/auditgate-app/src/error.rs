use auditgate_allowlist::{AllowlistError, FieldError};
use auditgate_audit::AuditReportError;
use auditgate_types::ids;

/// Why an analysis could not run. Classification outcomes are never errors.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Allowlist(#[from] AllowlistError),

    #[error(transparent)]
    AuditReport(#[from] AuditReportError),

    #[error("invalid configuration: {0:#}")]
    Config(anyhow::Error),
}

impl AnalysisError {
    /// Stable code, as accepted by `explain`.
    pub fn code(&self) -> &'static str {
        match self {
            AnalysisError::Allowlist(_) => ids::CODE_ALLOWLIST_INVALID,
            AnalysisError::AuditReport(_) => ids::CODE_AUDIT_REPORT_INVALID,
            AnalysisError::Config(_) => ids::CODE_CONFIG_INVALID,
        }
    }

    /// Field-level allowlist violations, empty for other failures.
    pub fn field_errors(&self) -> Vec<FieldError> {
        match self {
            AnalysisError::Allowlist(e) => e.field_errors(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        let allowlist = AnalysisError::from(AllowlistError::Empty);
        assert_eq!(allowlist.code(), "allowlist_invalid");
        assert_eq!(allowlist.field_errors().len(), 1);

        let audit = AnalysisError::from(AuditReportError::UnrecognizedShape);
        assert_eq!(audit.code(), "audit_report_invalid");
        assert!(audit.field_errors().is_empty());

        let config = AnalysisError::Config(anyhow::anyhow!("bad window"));
        assert_eq!(config.code(), "config_invalid");
        assert_eq!(config.to_string(), "invalid configuration: bad window");
    }
}
