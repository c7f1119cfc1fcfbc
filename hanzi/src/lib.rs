//! LearnTheCharacters deck tooling.
//!
//! This crate is a convenience package that reëxports the deck tooling
//! crates as modules. For detailed information, see the module-level
//! documentation.

pub mod cli;

#[doc(inline)]
pub use hanzi_deck as deck;
#[doc(inline)]
pub use hanzi_strokes as strokes;
