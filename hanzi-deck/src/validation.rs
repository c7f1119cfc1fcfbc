//! Schema validation for deck documents.
//!
//! Validation is exhaustive rather than fail-fast: every rule runs
//! regardless of earlier failures, and the resulting diagnostics are
//! reported together. The single exception is the `characters` field, where
//! per-item validation only runs once the collection itself is a list of
//! acceptable size (iterating anything else is undefined).

pub mod check;

mod character;
mod document;

pub use character::validate_character;
pub use document::validate_document;

use serde_json::Value;

use crate::deck::Deck;
use crate::diagnostic::Code;
use crate::diagnostic::Diagnostic;
use crate::report::DeckStatistics;
use crate::report::ValidationReport;

/// Creates a diagnostic for a document that passed every field rule but
/// still does not decode as a deck.
///
/// The enumerated rules leave a few corners untyped (for example, the
/// creation timestamp is only checked for presence); this diagnostic covers
/// a document that exploits one of them.
fn undecodable(error: &serde_json::Error) -> Diagnostic {
    Diagnostic::deck(
        Code::TypeMismatch,
        format!("deck does not conform to the expected shape: {error}"),
    )
}

/// Validates a parsed deck document, producing the full report.
///
/// Deck-level diagnostics come first in a fixed rule order, followed by each
/// character's diagnostics in item order. When no diagnostics are produced,
/// the report carries [`DeckStatistics`] derived from the typed deck.
///
/// Validation is a pure function of its input: the same document always
/// yields the same report.
///
/// # Examples
///
/// ```
/// use hanzi_deck::validation::validate;
/// use serde_json::json;
///
/// let report = validate(&json!({}));
/// assert!(!report.passed());
/// ```
pub fn validate(document: &Value) -> ValidationReport {
    let mut diagnostics = document::validate_document(document);

    let statistics = if diagnostics.is_empty() {
        match serde_json::from_value::<Deck>(document.clone()) {
            Ok(deck) => Some(DeckStatistics::new(&deck)),
            Err(e) => {
                diagnostics.push(undecodable(&e));
                None
            }
        }
    } else {
        None
    };

    ValidationReport::new(diagnostics, statistics)
}
