use crate::format::AuditFormat;

/// The scanner output could not be turned into advisories. Always fatal for the run.
#[derive(Debug, thiserror::Error)]
pub enum AuditReportError {
    #[error("audit output is empty")]
    Empty,

    #[error(
        "audit output does not contain a recognised report \
         (expected npm audit v1/v2 JSON or yarn audit NDJSON)"
    )]
    UnrecognizedShape,

    #[error("unsupported npm audit report version: {version}")]
    UnsupportedVersion { version: String },

    #[error("malformed {format} audit report: {message}")]
    Malformed { format: AuditFormat, message: String },

    #[error("advisory {id} has unknown severity {severity:?}")]
    UnknownSeverity { id: String, severity: String },

    #[error("scanner reported an error ({code}): {summary}")]
    ScannerReported { code: String, summary: String },
}
