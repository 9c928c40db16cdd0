//! # Deck Controller
//!
//! The controller owns the whole study session: the [`Deck`], the category
//! filter, the view derived from both, the [`Cursor`] into that view and the
//! [`ShuffleMode`]. These four pieces are only ever changed together, through
//! the operations below, and each operation leaves them consistent:
//!
//! - the view is rebuilt (never patched) after every deck mutation, category
//!   switch and load
//! - any rebuild drops back to natural order, so a shuffle never survives a
//!   change of content or filter
//! - a named filter whose last card disappears falls back to "All"
//! - the cursor always points inside a non-empty view
//!
//! Presentation code reads the session through [`DeckController::read_model`]
//! and never touches the parts directly.

use crate::deck::Deck;
use crate::error::{FlipwiseError, Result};
use crate::model::{Card, Category, Face, EMPTY_DECK_TEXT};
use crate::shuffle::ShuffleMode;
use crate::store::format;
use crate::view::{natural_view, Cursor};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Everything a front end needs to draw the current card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadModel {
    pub has_cards: bool,
    pub displayed_text: String,
    pub displayed_category: Option<String>,
    pub face: Face,
    /// 1-based position and view length.
    pub position: Option<(usize, usize)>,
    pub filter: String,
    pub shuffled: bool,
}

pub struct DeckController {
    deck: Deck,
    filter: Category,
    view: Vec<usize>,
    cursor: Cursor,
    shuffle: ShuffleMode,
    rng: StdRng,
}

impl Default for DeckController {
    fn default() -> Self {
        Self::new()
    }
}

impl DeckController {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// A controller whose shuffles are reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            deck: Deck::new(),
            filter: Category::All,
            view: Vec::new(),
            cursor: Cursor::new(),
            shuffle: ShuffleMode::Ordered,
            rng,
        }
    }

    pub fn with_deck(mut self, deck: Deck) -> Self {
        self.deck = deck;
        self.filter = Category::All;
        self.rebuild();
        self.cursor.reset();
        self
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn filter(&self) -> &Category {
        &self.filter
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn shuffle_mode(&self) -> ShuffleMode {
        self.shuffle
    }

    pub fn categories(&self) -> Vec<String> {
        self.deck.categories()
    }

    /// The cards being navigated, in navigation order.
    pub fn view(&self) -> Vec<&Card> {
        self.view
            .iter()
            .filter_map(|&i| self.deck.get(i))
            .collect()
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.current_index().and_then(|i| self.deck.get(i))
    }

    /// Deck position of the card under the cursor.
    fn current_index(&self) -> Option<usize> {
        self.view.get(self.cursor.position()).copied()
    }

    /// Re-derives the view in natural order after the deck or filter changed.
    fn rebuild(&mut self) {
        if let Category::Named(name) = &self.filter {
            if !self.deck.has_category(name) {
                tracing::debug!(category = %name, "category no longer present, showing all cards");
                self.filter = Category::All;
            }
        }
        self.view = natural_view(&self.deck, &self.filter);
        self.shuffle = ShuffleMode::Ordered;
    }

    pub fn add_card(&mut self, front: &str, back: &str, category: &str) -> Result<()> {
        let card = Card::new(front, back, category)?;
        let in_view = self.filter.matches(&card);
        let was_shuffled = self.shuffle.is_shuffled();

        let index = self.deck.add(card)?;
        self.rebuild();

        if in_view {
            let position = self.view.iter().position(|&i| i == index).unwrap_or(0);
            self.cursor = Cursor::at(position);
        } else if was_shuffled {
            self.cursor.reset();
        }
        tracing::debug!(index, in_view, "card added");
        Ok(())
    }

    /// Replaces the card under the cursor.
    pub fn edit_card(&mut self, front: &str, back: &str, category: &str) -> Result<()> {
        let index = self.current_index().ok_or(FlipwiseError::IndexOutOfBounds {
            index: self.cursor.position(),
            len: self.view.len(),
        })?;
        let card = Card::new(front, back, category)?;

        self.deck.replace_at(index, card)?;
        self.rebuild();
        self.cursor.reset();
        tracing::debug!(index, "card edited");
        Ok(())
    }

    /// Removes the card under the cursor. Returns `None` when the view is empty.
    pub fn delete_card(&mut self) -> Result<Option<Card>> {
        let Some(index) = self.current_index() else {
            return Ok(None);
        };
        let filter_before = self.filter.clone();

        let removed = self.deck.remove_at(index)?;
        self.rebuild();

        if self.filter == filter_before {
            self.cursor.clamp(self.view.len());
        } else {
            self.cursor.reset();
        }
        tracing::debug!(index, remaining = self.deck.len(), "card deleted");
        Ok(Some(removed))
    }

    pub fn flip(&mut self) {
        self.cursor.flip(self.view.len());
    }

    pub fn next(&mut self) {
        self.cursor.next(self.view.len());
    }

    pub fn previous(&mut self) {
        self.cursor.previous(self.view.len());
    }

    /// Filters the view to `category`. Unknown categories select all cards.
    ///
    /// Returns the filter that ended up active.
    pub fn switch_category(&mut self, category: Category) -> &Category {
        self.filter = category;
        self.rebuild();
        self.cursor.reset();
        tracing::debug!(filter = %self.filter, size = self.view.len(), "category switched");
        &self.filter
    }

    /// Toggles shuffle mode. Returns `false`, changing nothing, when the view is empty.
    pub fn toggle_shuffle(&mut self) -> bool {
        match self
            .shuffle
            .toggle(&self.deck, &self.filter, &self.view, &mut self.rng)
        {
            Some(view) => {
                self.view = view;
                self.cursor.reset();
                tracing::debug!(mode = %self.shuffle, "shuffle toggled");
                true
            }
            None => false,
        }
    }

    /// Replaces the whole deck and starts over from the first card of "All".
    pub fn replace_cards(&mut self, cards: Vec<Card>) {
        self.deck.replace_all(cards);
        self.filter = Category::All;
        self.rebuild();
        self.cursor.reset();
        tracing::debug!(size = self.deck.len(), "deck replaced");
    }

    /// Serializes every card, regardless of the active filter.
    pub fn save_document(&self) -> Result<String> {
        format::encode(self.deck.cards())
    }

    /// Parses `document` and, only if all of it is valid, replaces the deck.
    pub fn load_document(&mut self, document: &str) -> Result<usize> {
        let cards = format::decode(document)?;
        let count = cards.len();
        self.replace_cards(cards);
        Ok(count)
    }

    pub fn read_model(&self) -> ReadModel {
        let face = self.cursor.face();
        match self.current_card() {
            Some(card) => ReadModel {
                has_cards: true,
                displayed_text: card.text(face).to_string(),
                displayed_category: Some(card.category().to_string()),
                face,
                position: Some((self.cursor.position() + 1, self.view.len())),
                filter: self.filter.to_string(),
                shuffled: self.shuffle.is_shuffled(),
            },
            None => ReadModel {
                has_cards: false,
                displayed_text: EMPTY_DECK_TEXT.to_string(),
                displayed_category: None,
                face,
                position: None,
                filter: self.filter.to_string(),
                shuffled: self.shuffle.is_shuffled(),
            },
        }
    }
}
