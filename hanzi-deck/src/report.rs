//! Validation reports and deck statistics.

use std::fmt;

use crate::deck::Deck;
use crate::diagnostic::Diagnostic;

/// Descriptive statistics over a deck that passed validation.
#[derive(Clone, Debug)]
pub struct DeckStatistics {
    /// The deck name.
    name: String,

    /// The deck category, in display form.
    category: String,

    /// The deck version.
    version: String,

    /// The deck author, if specified.
    author: Option<String>,

    /// The number of characters in the deck.
    character_count: usize,

    /// The number of characters with at least one usage example.
    with_examples: usize,

    /// The number of characters with a mnemonic aid.
    with_mnemonics: usize,

    /// The number of characters with a traditional form.
    with_traditional: usize,
}

impl DeckStatistics {
    /// Computes statistics over a deck.
    ///
    /// An optional attribute counts as populated only when it is non-empty;
    /// an absent key and an empty value read the same.
    pub fn new(deck: &Deck) -> Self {
        let characters = deck.characters.as_slice();

        Self {
            name: deck.name.clone(),
            category: deck.category.to_string(),
            version: deck.version.clone(),
            author: deck.author.clone(),
            character_count: characters.len(),
            with_examples: characters.iter().filter(|c| !c.examples.is_empty()).count(),
            with_mnemonics: characters
                .iter()
                .filter(|c| c.mnemonics.as_deref().is_some_and(|m| !m.is_empty()))
                .count(),
            with_traditional: characters
                .iter()
                .filter(|c| c.traditional.as_deref().is_some_and(|t| !t.is_empty()))
                .count(),
        }
    }

    /// Gets the number of characters in the deck.
    pub fn character_count(&self) -> usize {
        self.character_count
    }

    /// Gets the number of characters with at least one usage example.
    pub fn with_examples(&self) -> usize {
        self.with_examples
    }

    /// Gets the number of characters with a mnemonic aid.
    pub fn with_mnemonics(&self) -> usize {
        self.with_mnemonics
    }

    /// Gets the number of characters with a traditional form.
    pub fn with_traditional(&self) -> usize {
        self.with_traditional
    }
}

impl fmt::Display for DeckStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Statistics:")?;
        writeln!(f, "  name: {name}", name = self.name)?;
        writeln!(f, "  category: {category}", category = self.category)?;
        writeln!(f, "  characters: {count}", count = self.character_count)?;
        writeln!(
            f,
            "  author: {author}",
            author = self.author.as_deref().unwrap_or("unspecified")
        )?;
        writeln!(f, "  version: {version}", version = self.version)?;
        writeln!(f)?;
        writeln!(
            f,
            "  characters with examples: {with}/{count}",
            with = self.with_examples,
            count = self.character_count
        )?;
        writeln!(
            f,
            "  characters with mnemonics: {with}/{count}",
            with = self.with_mnemonics,
            count = self.character_count
        )?;
        write!(
            f,
            "  characters with traditional form: {with}/{count}",
            with = self.with_traditional,
            count = self.character_count
        )
    }
}

/// The aggregated outcome of validating one deck document.
///
/// A report is created fresh for every validation call and retains no state
/// between runs. It passes exactly when it carries no diagnostics.
#[derive(Clone, Debug)]
pub struct ValidationReport {
    /// Every diagnostic produced, deck-level first, then per character in
    /// item order.
    diagnostics: Vec<Diagnostic>,

    /// Statistics over the deck; present only when validation passed.
    statistics: Option<DeckStatistics>,
}

impl ValidationReport {
    /// Creates a new report.
    pub(crate) fn new(diagnostics: Vec<Diagnostic>, statistics: Option<DeckStatistics>) -> Self {
        Self {
            diagnostics,
            statistics,
        }
    }

    /// Whether the deck passed validation.
    pub fn passed(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Gets the diagnostics in the order they were produced.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.diagnostics.as_slice()
    }

    /// Gets the statistics derived from the deck, if validation passed.
    pub fn statistics(&self) -> Option<&DeckStatistics> {
        self.statistics.as_ref()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed() {
            write!(f, "Deck structure is valid.")?;
            if let Some(statistics) = &self.statistics {
                write!(f, "\n\n{statistics}")?;
            }
            return Ok(());
        }

        writeln!(
            f,
            "{count} error{s} found:",
            count = self.diagnostics.len(),
            s = if self.diagnostics.len() == 1 { "" } else { "s" }
        )?;

        for diagnostic in &self.diagnostics {
            writeln!(f)?;
            write!(f, "  {diagnostic}")?;
        }

        Ok(())
    }
}
