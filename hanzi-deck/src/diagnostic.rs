//! Diagnostics reported by deck validation.

use std::fmt;

/// The classification of a validation failure.
///
/// Every failure maps to exactly one code; the code never changes which
/// decks are accepted, but it lets callers group and test diagnostics
/// without matching on message text.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Code {
    /// A required attribute is absent.
    MissingField,

    /// A value is present but does not match its expected pattern.
    InvalidFormat,

    /// A numeric or length value lies outside its closed interval.
    OutOfBounds,

    /// A value is present but has the wrong type or shape.
    TypeMismatch,

    /// A required non-empty collection is empty.
    EmptyCollection,

    /// A value is not a member of its closed set.
    EnumViolation,
}

/// The scope a diagnostic applies to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Scope {
    /// The diagnostic applies to a deck-level field.
    Deck,

    /// The diagnostic applies to the character entry at the given 1-based
    /// position.
    Character(usize),
}

/// A single validation failure.
///
/// Diagnostics are collected, never raised: validation always runs to
/// completion and reports every failure it finds. There is no warning tier;
/// any diagnostic blocks acceptance of the deck.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Diagnostic {
    /// The classification of the failure.
    code: Code,

    /// The scope the failure applies to.
    scope: Scope,

    /// The human-readable description of the failure.
    message: String,
}

impl Diagnostic {
    /// Creates a deck-scoped diagnostic.
    pub fn deck(code: Code, message: impl Into<String>) -> Self {
        Self {
            code,
            scope: Scope::Deck,
            message: message.into(),
        }
    }

    /// Creates a character-scoped diagnostic for the entry at the given
    /// 1-based position.
    pub fn character(position: usize, code: Code, message: impl Into<String>) -> Self {
        Self {
            code,
            scope: Scope::Character(position),
            message: message.into(),
        }
    }

    /// Gets the classification of the failure.
    pub fn code(&self) -> Code {
        self.code
    }

    /// Gets the scope the failure applies to.
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Gets the description of the failure.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.scope {
            Scope::Deck => write!(f, "{message}", message = self.message),
            Scope::Character(position) => {
                write!(f, "Character #{position}: {message}", message = self.message)
            }
        }
    }
}
