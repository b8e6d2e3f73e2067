//! Report JSON generation.

use crate::domain::{Exclusions, SkippedFile};
use crate::render::ConcatOutcome;
use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::path::Path;

pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Write a pretty-printed JSON summary of a concatenation run.
pub fn write_report(
    report_path: &Path,
    output_path: &Path,
    exclusions: &Exclusions,
    outcome: &ConcatOutcome,
) -> Result<()> {
    let mut skipped: Vec<&SkippedFile> = outcome.skipped.iter().collect();
    skipped.sort_by(|a, b| a.path.cmp(&b.path));

    let mut report = Map::new();
    report.insert("schema_version".to_string(), Value::String(REPORT_SCHEMA_VERSION.to_string()));
    report.insert("output".to_string(), Value::String(output_path.display().to_string()));
    report.insert("exclusions".to_string(), serde_json::to_value(exclusions)?);
    report.insert("stats".to_string(), serde_json::to_value(&outcome.stats)?);
    if !skipped.is_empty() {
        report.insert("skipped".to_string(), serde_json::to_value(skipped)?);
    }

    if let Some(parent) = report_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(report_path, serde_json::to_string_pretty(&Value::Object(report))?)
        .with_context(|| format!("Failed writing report: {}", report_path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::write_report;
    use crate::domain::{ConcatStats, Exclusions, SkippedFile};
    use crate::render::ConcatOutcome;
    use serde_json::json;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    #[test]
    fn report_includes_stats_and_sorted_skips() {
        let tmp = TempDir::new().expect("tmp");
        let report_path = tmp.path().join("reports/run.json");
        let outcome = ConcatOutcome {
            stats: ConcatStats { files_written: 4, files_unreadable: 2, ..ConcatStats::default() },
            skipped: vec![
                SkippedFile { path: "./z.bin".to_string(), reason: "bad".to_string() },
                SkippedFile { path: "./a.bin".to_string(), reason: "worse".to_string() },
            ],
        };

        write_report(
            &report_path,
            Path::new("all_files_combined.txt"),
            &Exclusions::concat_defaults(),
            &outcome,
        )
        .expect("write report");

        let content = fs::read_to_string(report_path).expect("read report");
        let parsed: serde_json::Value = serde_json::from_str(&content).expect("json");
        assert_eq!(parsed["output"], json!("all_files_combined.txt"));
        assert_eq!(parsed["stats"]["files_written"], json!(4));
        assert_eq!(parsed["stats"]["files_unreadable"], json!(2));
        assert_eq!(parsed["skipped"][0]["path"], json!("./a.bin"));
        assert_eq!(parsed["exclusions"]["extensions"], json!([".md"]));
    }

    #[test]
    fn report_omits_skipped_when_clean() {
        let tmp = TempDir::new().expect("tmp");
        let report_path = tmp.path().join("run.json");

        write_report(
            &report_path,
            Path::new("out.txt"),
            &Exclusions::default(),
            &ConcatOutcome::default(),
        )
        .expect("write report");

        let content = fs::read_to_string(report_path).expect("read report");
        let parsed: serde_json::Value = serde_json::from_str(&content).expect("json");
        assert!(parsed.get("skipped").is_none());
        assert_eq!(parsed["schema_version"], json!("1.0.0"));
    }
}
