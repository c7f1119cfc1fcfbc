//! Entry point functions for the command-line interface.

use std::fs;
use std::path::Path;

use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use hanzi_deck::ValidationReport;
use hanzi_strokes::EnrichmentSummary;
use hanzi_strokes::StrokeDatabase;
use serde_json::Value;

/// Reads and parses a deck document from a JSON file.
///
/// I/O failures and JSON syntax errors surface here, before any schema
/// validation runs; they produce a single explanatory error rather than a
/// diagnostic report.
pub fn read_deck(path: &Path) -> Result<Value> {
    if path.extension().and_then(|e| e.to_str()) != Some("json") {
        bail!(
            "deck file `{path}` must have a `.json` extension",
            path = path.display()
        );
    }

    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read deck file `{path}`", path = path.display()))?;

    serde_json::from_str(&source)
        .with_context(|| format!("failed to parse deck file `{path}`", path = path.display()))
}

/// Validates the deck document at `path`.
///
/// Returns the report for the caller to render; deciding the process exit
/// code from the verdict is the caller's concern.
pub fn validate(path: &Path) -> Result<ValidationReport> {
    let document = read_deck(path)?;
    Ok(hanzi_deck::validate(&document))
}

/// Enriches the deck document at `deck_path` with stroke geometry from the
/// dataset at `graphics_path`, rewriting the deck file in place.
pub fn enrich(deck_path: &Path, graphics_path: &Path) -> Result<EnrichmentSummary> {
    let database = StrokeDatabase::load(graphics_path)?;
    tracing::info!(
        "loaded {count} glyphs from `{path}`",
        count = database.len(),
        path = graphics_path.display()
    );

    let mut document = read_deck(deck_path)?;
    let summary = hanzi_strokes::enrich_deck(&mut document, &database);

    let output =
        serde_json::to_string_pretty(&document).context("failed to serialize enriched deck")?;
    fs::write(deck_path, output).with_context(|| {
        format!(
            "failed to write deck file `{path}`",
            path = deck_path.display()
        )
    })?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[test]
    fn non_json_paths_are_rejected() {
        let error = read_deck(Path::new("deck.yaml")).expect_err("path should be rejected");
        assert!(error.to_string().contains(".json"));
    }

    #[test]
    fn json_syntax_errors_are_io_failures_not_reports() {
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .expect("temp file should be created");
        write!(file, "{{ not json").expect("source should be written");

        assert!(read_deck(file.path()).is_err());
    }
}
