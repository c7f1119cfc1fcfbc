//! The deck document model.
//!
//! These types mirror the JSON exchange format for community decks. Unknown
//! fields are ignored on decode: the schema is open-world, and additive
//! fields must never break older tooling.

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::report::ValidationReport;

/// A category of deck content.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::VariantNames,
)]
pub enum DeckCategory {
    /// HSK level 1 vocabulary.
    #[serde(rename = "HSK1")]
    #[strum(serialize = "HSK1")]
    Hsk1,

    /// HSK level 2 vocabulary.
    #[serde(rename = "HSK2")]
    #[strum(serialize = "HSK2")]
    Hsk2,

    /// HSK level 3 vocabulary.
    #[serde(rename = "HSK3")]
    #[strum(serialize = "HSK3")]
    Hsk3,

    /// HSK level 4 vocabulary.
    #[serde(rename = "HSK4")]
    #[strum(serialize = "HSK4")]
    Hsk4,

    /// HSK level 5 vocabulary.
    #[serde(rename = "HSK5")]
    #[strum(serialize = "HSK5")]
    Hsk5,

    /// HSK level 6 vocabulary.
    #[serde(rename = "HSK6")]
    #[strum(serialize = "HSK6")]
    Hsk6,

    /// A deck organized around a theme rather than an HSK level.
    Thematic,

    /// A user-created deck.
    Custom,
}

/// A community deck document.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    /// The unique identifier of the deck.
    pub id: String,

    /// The display name of the deck.
    pub name: String,

    /// A short description of the deck's contents.
    pub description: String,

    /// The category the deck belongs to.
    pub category: DeckCategory,

    /// The two-component version of the deck, such as `1.0`.
    pub version: String,

    /// When the deck was created.
    pub created_date: String,

    /// The characters contained in the deck.
    pub characters: Vec<Character>,

    /// The author of the deck, if specified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl Deck {
    /// Validates a parsed JSON document and decodes it into a typed deck.
    ///
    /// Returns the full [`ValidationReport`] as the error when the document
    /// fails any schema rule; the report carries every diagnostic, not just
    /// the first.
    ///
    /// # Examples
    ///
    /// ```
    /// use hanzi_deck::Deck;
    /// use serde_json::json;
    ///
    /// let document = json!({
    ///     "id": "550e8400-e29b-41d4-a716-446655440000",
    ///     "name": "HSK 1 Basics",
    ///     "description": "The essential characters of HSK level 1.",
    ///     "category": "HSK1",
    ///     "version": "1.0",
    ///     "createdDate": "2025-01-15T10:00:00Z",
    ///     "characters": [{
    ///         "id": "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
    ///         "simplified": "你",
    ///         "pinyin": "nǐ",
    ///         "meaning": ["you"],
    ///         "frequency": 100,
    ///     }],
    /// });
    ///
    /// let deck = Deck::from_value(&document).expect("deck should validate");
    /// assert_eq!(deck.characters.len(), 1);
    /// ```
    pub fn from_value(value: &Value) -> Result<Self, ValidationReport> {
        let report = crate::validation::validate(value);

        // A report that passed guarantees the document decodes: `validate`
        // reports a diagnostic for any document the typed model rejects.
        match serde_json::from_value(value.clone()) {
            Ok(deck) if report.passed() => Ok(deck),
            _ => Err(report),
        }
    }
}

/// One character entry within a deck.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// The unique identifier of the character entry.
    pub id: String,

    /// The simplified form, such as `爱`.
    pub simplified: String,

    /// The pinyin transcription, such as `ài`.
    pub pinyin: String,

    /// The meanings of the character, in display order.
    pub meaning: Vec<String>,

    /// The usage frequency rank, from 1 (most frequent) to 10000.
    pub frequency: u32,

    /// The HSK level the character is introduced at, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hsk_level: Option<u8>,

    /// The traditional form, such as `愛`, where it differs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traditional: Option<String>,

    /// Example sentences using the character.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,

    /// A mnemonic aid for remembering the character.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mnemonics: Option<String>,

    /// Stroke geometry attached by the enrichment tooling.
    ///
    /// The payload is carried through untouched; deck validation never
    /// inspects it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_order: Option<Value>,
}
