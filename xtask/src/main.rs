//! Developer tasks (schema generation, fixture conformance, explain coverage).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use auditgate_test_util::TIMESTAMP_PLACEHOLDER;
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .or_else(|_| std::env::current_dir())
        .unwrap_or_else(|_| PathBuf::from("."));

    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or(manifest_dir)
    } else {
        manifest_dir
    }
}

/// Get the schemas directory path.
fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

fn fixtures_dir() -> PathBuf {
    project_root().join("tests").join("fixtures")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(auditgate_types::ReportEnvelope)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(auditgate_settings::AuditgateConfigV1)
}

/// The allowlist document is a bare array of entries.
fn generate_allowlist_schema() -> schemars::Schema {
    schema_for!(Vec<auditgate_types::AllowlistEntry>)
}

const REPORT_SCHEMA: &str = "auditgate.report.v1.json";
const CONFIG_SCHEMA: &str = "auditgate.config.v1.json";
const ALLOWLIST_SCHEMA: &str = "auditgate.allowlist.v1.json";

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: REPORT_SCHEMA,
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: CONFIG_SCHEMA,
            generate: generate_config_schema,
        },
        SchemaSpec {
            filename: ALLOWLIST_SCHEMA,
            generate: generate_allowlist_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn compile(schema: &schemars::Schema) -> anyhow::Result<jsonschema::Validator> {
    let value = serde_json::to_value(schema).context("Failed to serialize schema")?;
    jsonschema::validator_for(&value).map_err(|e| anyhow::anyhow!("Failed to compile schema: {e}"))
}

fn read_json(path: &Path) -> anyhow::Result<serde_json::Value> {
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Validate fixture documents against the generated schemas.
///
/// Every fixture with an `expected.report.json` must have a schema-valid report and, when
/// present, a schema-valid allowlist. Fixtures without an expected report are the input-error
/// cases and are skipped.
fn conform() -> anyhow::Result<()> {
    let report_validator = compile(&generate_report_schema())?;
    let allowlist_validator = compile(&generate_allowlist_schema())?;

    let mut errors = Vec::new();
    let mut checked = 0usize;

    let mut dirs: Vec<PathBuf> = fs::read_dir(fixtures_dir())
        .context("Failed to read tests/fixtures/")?
        .filter_map(Result::ok)
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    dirs.sort();

    for dir in dirs {
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let report_path = dir.join("expected.report.json");
        if !report_path.exists() {
            continue;
        }

        let mut report = read_json(&report_path)?;
        // Placeholders stand in for wall-clock values; any RFC 3339 timestamp is fine here.
        for key in ["started_at", "finished_at"] {
            if report.get(key).and_then(|v| v.as_str()) == Some(TIMESTAMP_PLACEHOLDER) {
                report[key] = serde_json::Value::String("2025-01-01T00:00:00Z".to_string());
            }
        }
        for err in report_validator.iter_errors(&report) {
            errors.push(format!("fixture '{name}': expected.report.json: {err}"));
        }

        let allowlist_path = dir.join("allowlist.json");
        if allowlist_path.exists() {
            let allowlist = read_json(&allowlist_path)?;
            for err in allowlist_validator.iter_errors(&allowlist) {
                errors.push(format!("fixture '{name}': allowlist.json: {err}"));
            }
        }

        checked += 1;
        println!("  ✓ fixture '{name}'");
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Conformance validation failed with {} errors", errors.len());
    }

    println!("\n✓ {checked} fixtures conform to the generated schemas");
    Ok(())
}

/// Validate that all statuses and codes have explanations.
fn explain_coverage() -> anyhow::Result<()> {
    use auditgate_types::explain::{all_codes, all_statuses, lookup_explanation};

    let mut errors = Vec::new();
    for id in all_statuses().iter().chain(all_codes()) {
        match lookup_explanation(id) {
            Some(exp) => {
                if exp.title.is_empty() {
                    errors.push(format!("'{id}' has empty title"));
                }
                if exp.description.is_empty() {
                    errors.push(format!("'{id}' has empty description"));
                }
                if exp.remediation.is_empty() {
                    errors.push(format!("'{id}' has empty remediation"));
                }
            }
            None => errors.push(format!("'{id}' has no explanation")),
        }
    }

    if !errors.is_empty() {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        );
    }

    println!("✓ {} statuses have explanations", all_statuses().len());
    println!("✓ {} codes have explanations", all_codes().len());
    Ok(())
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate fixture reports and allowlists against the schemas");
    eprintln!("  explain-coverage  Validate all statuses and codes have explanations");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_schema_compiles() {
        for spec in schema_specs() {
            compile(&(spec.generate)()).unwrap_or_else(|e| panic!("{}: {e:#}", spec.filename));
        }
    }

    #[test]
    fn allowlist_schema_rejects_unknown_fields() {
        let validator = compile(&generate_allowlist_schema()).unwrap();
        let good = serde_json::json!([{ "id": "1001", "package": "lodash", "reason": "r" }]);
        let bad = serde_json::json!([
            { "id": "1001", "package": "lodash", "reason": "r", "owner": "x" }
        ]);
        assert!(validator.is_valid(&good));
        assert!(!validator.is_valid(&bad));
    }

    #[test]
    fn fixtures_conform() {
        conform().unwrap();
    }

    #[test]
    fn explanations_are_complete() {
        explain_coverage().unwrap();
    }
}
