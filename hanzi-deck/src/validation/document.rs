//! Validation of deck-level fields.

use std::str::FromStr;

use serde_json::Value;
use strum::VariantNames;

use super::character::validate_character;
use super::check;
use crate::deck::DeckCategory;
use crate::diagnostic::Code;
use crate::diagnostic::Diagnostic;

/// The fields every deck document must carry.
const REQUIRED_FIELDS: &[&str] = &[
    "id",
    "name",
    "description",
    "category",
    "version",
    "createdDate",
    "characters",
];

/// The minimum length of a deck name, in codepoints.
const MIN_NAME_LENGTH: usize = 3;

/// The maximum length of a deck name, in codepoints.
const MAX_NAME_LENGTH: usize = 100;

/// The minimum length of a deck description, in codepoints.
const MIN_DESCRIPTION_LENGTH: usize = 10;

/// The maximum length of a deck description, in codepoints.
const MAX_DESCRIPTION_LENGTH: usize = 500;

/// The maximum number of characters in a deck.
const MAX_CHARACTERS: usize = 500;

/// Creates a diagnostic for a document that is not a JSON object.
fn not_an_object() -> Diagnostic {
    Diagnostic::deck(Code::TypeMismatch, "deck document must be a JSON object")
}

/// Creates a "missing required field" diagnostic.
fn missing_field(field: &str) -> Diagnostic {
    Diagnostic::deck(
        Code::MissingField,
        format!("missing required field: {field}"),
    )
}

/// Creates a diagnostic for a field with the wrong type.
fn wrong_type(field: &str, expected: &str) -> Diagnostic {
    Diagnostic::deck(Code::TypeMismatch, format!("`{field}` must be {expected}"))
}

/// Creates an "invalid identifier" diagnostic.
fn invalid_identifier(id: &str) -> Diagnostic {
    Diagnostic::deck(Code::InvalidFormat, format!("invalid identifier: {id}"))
}

/// Creates a diagnostic for a deck name below its length limit.
fn name_too_short(name: &str) -> Diagnostic {
    Diagnostic::deck(
        Code::OutOfBounds,
        format!("name is too short: {name} (minimum {MIN_NAME_LENGTH} characters)"),
    )
}

/// Creates a diagnostic for a deck name over its length limit.
fn name_too_long(name: &str) -> Diagnostic {
    Diagnostic::deck(
        Code::OutOfBounds,
        format!("name is too long: {name} (maximum {MAX_NAME_LENGTH} characters)"),
    )
}

/// Creates a diagnostic for a deck description below its length limit.
fn description_too_short() -> Diagnostic {
    Diagnostic::deck(
        Code::OutOfBounds,
        format!("description is too short (minimum {MIN_DESCRIPTION_LENGTH} characters)"),
    )
}

/// Creates a diagnostic for a deck description over its length limit.
fn description_too_long() -> Diagnostic {
    Diagnostic::deck(
        Code::OutOfBounds,
        format!("description is too long (maximum {MAX_DESCRIPTION_LENGTH} characters)"),
    )
}

/// Creates a diagnostic for a category outside the closed set.
fn invalid_category(category: &Value) -> Diagnostic {
    Diagnostic::deck(
        Code::EnumViolation,
        format!(
            "invalid category: {category} (must be one of: {valid})",
            valid = DeckCategory::VARIANTS.join(", ")
        ),
    )
}

/// Creates a diagnostic for a malformed version string.
fn invalid_version(version: &str) -> Diagnostic {
    Diagnostic::deck(
        Code::InvalidFormat,
        format!("invalid version format: {version} (must be X.Y)"),
    )
}

/// Creates a diagnostic for an empty character collection.
fn no_characters() -> Diagnostic {
    Diagnostic::deck(
        Code::EmptyCollection,
        "deck must contain at least 1 character",
    )
}

/// Creates a diagnostic for a character collection over its size limit.
fn too_many_characters(count: usize) -> Diagnostic {
    Diagnostic::deck(
        Code::OutOfBounds,
        format!("deck contains too many characters: {count} (maximum {MAX_CHARACTERS})"),
    )
}

/// Validates the deck-level fields of a document and every character entry
/// it contains.
///
/// Deck-level diagnostics come first, in the order the rules are written
/// here; character diagnostics follow in item order. Unknown fields are
/// ignored. Every check is independent, with one exception: the character
/// entries are only visited when `characters` is a list of acceptable size.
pub fn validate_document(document: &Value) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    let Some(fields) = document.as_object() else {
        // Field rules are undefined for a non-object document.
        diagnostics.push(not_an_object());
        return diagnostics;
    };

    for field in REQUIRED_FIELDS {
        if !fields.contains_key(*field) {
            diagnostics.push(missing_field(field));
        }
    }

    if let Some(id) = fields.get("id") {
        match id.as_str() {
            Some(id) => {
                if !check::is_valid_identifier(id) {
                    diagnostics.push(invalid_identifier(id));
                }
            }
            None => diagnostics.push(wrong_type("id", "a string")),
        }
    }

    if let Some(name) = fields.get("name") {
        match name.as_str() {
            Some(name) => {
                let length = name.chars().count();
                if length < MIN_NAME_LENGTH {
                    diagnostics.push(name_too_short(name));
                }
                if length > MAX_NAME_LENGTH {
                    diagnostics.push(name_too_long(name));
                }
            }
            None => diagnostics.push(wrong_type("name", "a string")),
        }
    }

    if let Some(description) = fields.get("description") {
        match description.as_str() {
            Some(description) => {
                let length = description.chars().count();
                if length < MIN_DESCRIPTION_LENGTH {
                    diagnostics.push(description_too_short());
                }
                if length > MAX_DESCRIPTION_LENGTH {
                    diagnostics.push(description_too_long());
                }
            }
            None => diagnostics.push(wrong_type("description", "a string")),
        }
    }

    if let Some(category) = fields.get("category") {
        // Membership in the closed set is the whole check: a non-string can
        // never be a member, so it fails the same way a wrong string does.
        let valid = category
            .as_str()
            .is_some_and(|c| DeckCategory::from_str(c).is_ok());
        if !valid {
            diagnostics.push(invalid_category(category));
        }
    }

    if let Some(version) = fields.get("version") {
        match version.as_str() {
            Some(version) => {
                if !check::is_valid_version(version) {
                    diagnostics.push(invalid_version(version));
                }
            }
            None => diagnostics.push(wrong_type("version", "a string")),
        }
    }

    if let Some(characters) = fields.get("characters") {
        match characters.as_array() {
            Some(characters) => {
                if characters.is_empty() {
                    diagnostics.push(no_characters());
                } else if characters.len() > MAX_CHARACTERS {
                    diagnostics.push(too_many_characters(characters.len()));
                } else {
                    for (index, character) in characters.iter().enumerate() {
                        diagnostics.extend(validate_character(character, index + 1));
                    }
                }
            }
            None => diagnostics.push(wrong_type("characters", "a list")),
        }
    }

    diagnostics
}
