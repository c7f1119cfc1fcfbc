//! Deck documents for the LearnTheCharacters content repository.
//!
//! A deck is a named, versioned collection of characters to study. Community
//! decks are exchanged as JSON documents; before a document is accepted into
//! the content repository it must pass the schema validation implemented
//! here.
//!
//! Validation operates on an already-parsed [`serde_json::Value`] so that
//! shape and type problems can be reported as diagnostics rather than parse
//! failures. A document that passes validation decodes into the typed
//! [`Deck`] model.

mod deck;
pub mod diagnostic;
pub mod report;
pub mod validation;

pub use deck::Character;
pub use deck::Deck;
pub use deck::DeckCategory;
pub use diagnostic::Code;
pub use diagnostic::Diagnostic;
pub use diagnostic::Scope;
pub use report::DeckStatistics;
pub use report::ValidationReport;
pub use validation::validate;
