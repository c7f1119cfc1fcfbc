//! Validation of individual character entries.

use serde_json::Value;

use super::check;
use crate::diagnostic::Code;
use crate::diagnostic::Diagnostic;

/// The fields every character entry must carry.
const REQUIRED_FIELDS: &[&str] = &["id", "simplified", "pinyin", "meaning", "frequency"];

/// The maximum length of a simplified form, in codepoints.
const MAX_SIMPLIFIED_LENGTH: usize = 10;

/// The maximum length of a pinyin transcription, in codepoints.
const MAX_PINYIN_LENGTH: usize = 50;

/// The minimum frequency rank.
const MIN_FREQUENCY: i64 = 1;

/// The maximum frequency rank.
const MAX_FREQUENCY: i64 = 10000;

/// The minimum HSK level.
const MIN_HSK_LEVEL: i64 = 1;

/// The maximum HSK level.
const MAX_HSK_LEVEL: i64 = 6;

/// The maximum number of usage examples.
const MAX_EXAMPLES: usize = 5;

/// Creates a diagnostic for a character entry that is not a JSON object.
fn not_an_object(position: usize) -> Diagnostic {
    Diagnostic::character(position, Code::TypeMismatch, "entry must be an object")
}

/// Creates a "missing required field" diagnostic.
fn missing_field(position: usize, field: &str) -> Diagnostic {
    Diagnostic::character(
        position,
        Code::MissingField,
        format!("missing required field: {field}"),
    )
}

/// Creates a diagnostic for a field with the wrong type.
fn wrong_type(position: usize, field: &str, expected: &str) -> Diagnostic {
    Diagnostic::character(
        position,
        Code::TypeMismatch,
        format!("`{field}` must be {expected}"),
    )
}

/// Creates an "invalid identifier" diagnostic.
fn invalid_identifier(position: usize) -> Diagnostic {
    Diagnostic::character(position, Code::InvalidFormat, "invalid identifier")
}

/// Creates a diagnostic for an empty simplified form.
fn empty_simplified(position: usize) -> Diagnostic {
    Diagnostic::character(position, Code::OutOfBounds, "simplified form is empty")
}

/// Creates a diagnostic for a simplified form over its length limit.
fn simplified_too_long(position: usize) -> Diagnostic {
    Diagnostic::character(
        position,
        Code::OutOfBounds,
        format!("simplified form is too long (maximum {MAX_SIMPLIFIED_LENGTH} characters)"),
    )
}

/// Creates a diagnostic for an empty pinyin transcription.
fn empty_pinyin(position: usize) -> Diagnostic {
    Diagnostic::character(position, Code::OutOfBounds, "pinyin is empty")
}

/// Creates a diagnostic for a pinyin transcription over its length limit.
fn pinyin_too_long(position: usize) -> Diagnostic {
    Diagnostic::character(
        position,
        Code::OutOfBounds,
        format!("pinyin is too long (maximum {MAX_PINYIN_LENGTH} characters)"),
    )
}

/// Creates a diagnostic for an empty meaning list.
fn no_meanings(position: usize) -> Diagnostic {
    Diagnostic::character(
        position,
        Code::EmptyCollection,
        "at least one meaning is required",
    )
}

/// Creates a diagnostic for a meaning entry that is not a non-empty string.
fn invalid_meaning(position: usize) -> Diagnostic {
    Diagnostic::character(
        position,
        Code::TypeMismatch,
        "meanings must be non-empty strings",
    )
}

/// Creates a diagnostic for a frequency rank outside its bounds.
fn frequency_out_of_bounds(position: usize, frequency: i64) -> Diagnostic {
    Diagnostic::character(
        position,
        Code::OutOfBounds,
        format!("frequency {frequency} is out of bounds ({MIN_FREQUENCY}-{MAX_FREQUENCY})"),
    )
}

/// Creates a diagnostic for an HSK level outside its bounds.
fn hsk_level_out_of_bounds(position: usize, level: i64) -> Diagnostic {
    Diagnostic::character(
        position,
        Code::OutOfBounds,
        format!("HSK level {level} is out of bounds ({MIN_HSK_LEVEL}-{MAX_HSK_LEVEL})"),
    )
}

/// Creates a diagnostic for too many usage examples.
fn too_many_examples(position: usize, count: usize) -> Diagnostic {
    Diagnostic::character(
        position,
        Code::OutOfBounds,
        format!("too many examples: {count} (maximum {MAX_EXAMPLES})"),
    )
}

/// Validates one character entry against its field contract.
///
/// `position` is the entry's 1-based position within the deck and prefixes
/// every diagnostic. The checks are exhaustive: each rule runs regardless of
/// earlier failures, so an entry violating N independent rules yields
/// exactly N diagnostics.
///
/// A `null` value for a required field counts as present and falls through
/// to the type-specific check for that field; `null` only means "absent"
/// for the explicitly optional fields (`hskLevel`, `examples`).
pub fn validate_character(character: &Value, position: usize) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    let Some(fields) = character.as_object() else {
        // Field rules are undefined for a non-object entry.
        diagnostics.push(not_an_object(position));
        return diagnostics;
    };

    for field in REQUIRED_FIELDS {
        if !fields.contains_key(*field) {
            diagnostics.push(missing_field(position, field));
        }
    }

    if let Some(id) = fields.get("id") {
        match id.as_str() {
            Some(id) => {
                if !check::is_valid_identifier(id) {
                    diagnostics.push(invalid_identifier(position));
                }
            }
            None => diagnostics.push(wrong_type(position, "id", "a string")),
        }
    }

    if let Some(simplified) = fields.get("simplified") {
        match simplified.as_str() {
            Some(simplified) => {
                if simplified.is_empty() {
                    diagnostics.push(empty_simplified(position));
                }
                if !check::length_within(simplified, 0, MAX_SIMPLIFIED_LENGTH) {
                    diagnostics.push(simplified_too_long(position));
                }
            }
            None => diagnostics.push(wrong_type(position, "simplified", "a string")),
        }
    }

    if let Some(pinyin) = fields.get("pinyin") {
        match pinyin.as_str() {
            Some(pinyin) => {
                if pinyin.is_empty() {
                    diagnostics.push(empty_pinyin(position));
                }
                if !check::length_within(pinyin, 0, MAX_PINYIN_LENGTH) {
                    diagnostics.push(pinyin_too_long(position));
                }
            }
            None => diagnostics.push(wrong_type(position, "pinyin", "a string")),
        }
    }

    if let Some(meaning) = fields.get("meaning") {
        match meaning.as_array() {
            Some(meanings) => {
                if meanings.is_empty() {
                    diagnostics.push(no_meanings(position));
                } else {
                    for meaning in meanings {
                        if !meaning.as_str().is_some_and(|m| !m.is_empty()) {
                            diagnostics.push(invalid_meaning(position));
                        }
                    }
                }
            }
            None => diagnostics.push(wrong_type(position, "meaning", "a list")),
        }
    }

    if let Some(frequency) = fields.get("frequency") {
        match frequency.as_i64() {
            Some(frequency) => {
                if !check::in_range(frequency, MIN_FREQUENCY, MAX_FREQUENCY) {
                    diagnostics.push(frequency_out_of_bounds(position, frequency));
                }
            }
            // Floats that happen to be integer-valued land here as well:
            // the contract requires an integer type, not an integral value.
            None => diagnostics.push(wrong_type(position, "frequency", "an integer")),
        }
    }

    if let Some(level) = fields.get("hskLevel") {
        if !level.is_null() {
            match level.as_i64() {
                Some(level) => {
                    if !check::in_range(level, MIN_HSK_LEVEL, MAX_HSK_LEVEL) {
                        diagnostics.push(hsk_level_out_of_bounds(position, level));
                    }
                }
                None => diagnostics.push(wrong_type(position, "hskLevel", "an integer")),
            }
        }
    }

    if let Some(examples) = fields.get("examples") {
        if !examples.is_null() {
            match examples.as_array() {
                Some(examples) => {
                    if examples.len() > MAX_EXAMPLES {
                        diagnostics.push(too_many_examples(position, examples.len()));
                    }
                }
                None => diagnostics.push(wrong_type(position, "examples", "a list")),
            }
        }
    }

    diagnostics
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::diagnostic::Scope;

    #[test]
    fn missing_fields_are_each_reported() {
        let diagnostics = validate_character(&json!({}), 1);

        assert_eq!(diagnostics.len(), 5);
        for (diagnostic, field) in diagnostics.iter().zip(REQUIRED_FIELDS) {
            assert_eq!(diagnostic.code(), Code::MissingField);
            assert_eq!(diagnostic.scope(), Scope::Character(1));
            assert!(diagnostic.message().contains(field));
        }
    }

    #[test]
    fn null_frequency_is_a_type_mismatch_not_a_missing_field() {
        let diagnostics = validate_character(
            &json!({
                "id": "550e8400-e29b-41d4-a716-446655440000",
                "simplified": "你",
                "pinyin": "nǐ",
                "meaning": ["you"],
                "frequency": null,
            }),
            1,
        );

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code(), Code::TypeMismatch);
        assert!(diagnostics[0].message().contains("frequency"));
    }

    #[test]
    fn integer_valued_float_frequency_is_a_type_mismatch() {
        let diagnostics = validate_character(
            &json!({
                "id": "550e8400-e29b-41d4-a716-446655440000",
                "simplified": "你",
                "pinyin": "nǐ",
                "meaning": ["you"],
                "frequency": 100.0,
            }),
            1,
        );

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code(), Code::TypeMismatch);
    }

    #[test]
    fn non_object_entry_short_circuits() {
        let diagnostics = validate_character(&json!("你"), 7);

        assert_eq!(diagnostics, vec![not_an_object(7)]);
    }

    #[test]
    fn null_hsk_level_is_absent() {
        let diagnostics = validate_character(
            &json!({
                "id": "550e8400-e29b-41d4-a716-446655440000",
                "simplified": "你",
                "pinyin": "nǐ",
                "meaning": ["you"],
                "frequency": 100,
                "hskLevel": null,
            }),
            1,
        );

        assert!(diagnostics.is_empty());
    }
}
