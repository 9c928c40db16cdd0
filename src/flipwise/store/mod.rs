//! # Persistence Gateway
//!
//! A deck is persisted as one JSON document: an array of
//! `{"front", "back", "category"}` objects holding every card, whatever the
//! active filter. There is no schema version and no auto-save; the deck only
//! reaches disk when the user asks for it.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//! - [`memory::InMemoryStore`]: Documents kept in a map, for tests
//!
//! Both go through [`format`], so the document shape is defined in one place.
//!
//! ## Failure Semantics
//!
//! Loading is all-or-nothing: a document with any malformed record is rejected
//! as a whole and nothing is handed back to the caller. Saving an empty deck is
//! refused with [`FlipwiseError::EmptyDeck`](crate::error::FlipwiseError::EmptyDeck).

use crate::error::Result;
use crate::model::Card;
use std::path::Path;

pub mod format;
pub mod fs;
pub mod memory;

/// Abstract interface for deck persistence.
pub trait DeckStore {
    /// Write every card to `location`, replacing what was there.
    fn save_cards(&mut self, location: &Path, cards: &[Card]) -> Result<()>;

    /// Read a complete deck back from `location`.
    fn load_cards(&self, location: &Path) -> Result<Vec<Card>>;

    /// Whether a deck document exists at `location`.
    fn exists(&self, location: &Path) -> bool;
}
