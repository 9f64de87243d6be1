//! Pure allowlist classification (no IO, no clock).
//!
//! Input: advisories and validated allowlist entries constructed elsewhere, plus a reference date.
//! Output: the categorized `AnalysisResult` + counts.

#![forbid(unsafe_code)]

pub mod classify;
pub mod expiry;
pub mod matcher;
pub mod policy;
pub mod report;
pub mod severity;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::analyze;
