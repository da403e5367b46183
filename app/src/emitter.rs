// In app/src/emitter.rs

use analytics::RunReport;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Renders a report the way it is published: pretty JSON with 2-space indents.
pub fn render(report: &RunReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialise result document")
}

/// Writes the report to `output` and echoes it to `out`.
///
/// The echo happens even when the file cannot be written, so the result is
/// never lost entirely; the file error is still returned.
pub fn emit(report: &RunReport, output: &Path, out: &mut impl Write) -> Result<()> {
    let document = render(report)?;

    let written = fs::write(output, &document)
        .with_context(|| format!("Failed to write result document to {}", output.display()));

    writeln!(out, "{document}").context("Failed to echo result document")?;
    out.flush().context("Failed to echo result document")?;

    written
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn file_and_echo_carry_the_same_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("metrics.json");
        let report = RunReport::success("v1".to_string(), 5, 0.6, 3, 42);

        let mut echoed = Vec::new();
        emit(&report, &path, &mut echoed).unwrap();

        let file = fs::read_to_string(&path).unwrap();
        assert_eq!(String::from_utf8(echoed).unwrap(), format!("{file}\n"));
        assert!(file.starts_with("{\n  \"version\": \"v1\","));
        assert!(!file.ends_with('\n'));
    }

    #[test]
    fn unwritable_output_still_echoes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing_dir").join("metrics.json");
        let report = RunReport::failure(None, "Input file not found.");

        let mut echoed = Vec::new();
        let err = emit(&report, &path, &mut echoed).unwrap_err();

        assert!(err.to_string().starts_with("Failed to write result document"));
        let echoed = String::from_utf8(echoed).unwrap();
        assert!(echoed.contains("\"error_message\": \"Input file not found.\""));
    }
}
