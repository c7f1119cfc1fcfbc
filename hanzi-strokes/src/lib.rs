//! Stroke geometry enrichment for LearnTheCharacters decks.
//!
//! Deck documents optionally carry a `strokeOrder` payload per character so
//! the app can animate and grade handwriting. The geometry comes from the
//! [Make Me a Hanzi](https://github.com/skishore/makemeahanzi) dataset; this
//! crate loads the dataset's `graphics.txt` file and attaches payloads to
//! parsed deck documents.
//!
//! Deck validation treats `strokeOrder` as opaque passthrough data: nothing
//! here is schema-checked, and enrichment never alters any other field of
//! the deck.

mod database;
mod enrich;
mod order;

pub use database::StrokeDatabase;
pub use enrich::EnrichmentSummary;
pub use enrich::enrich_deck;
pub use order::StrokeOrder;
pub use order::ViewBox;
