//! # Deck Store and Category Index
//!
//! [`Deck`] owns every card in insertion order. It is the only place cards are
//! mutated; views, cursors and the shuffle state all refer to cards by their
//! position here.
//!
//! Categories are never stored on their own. [`Deck::categories`] derives them
//! from the cards each time it is asked, so there is nothing to invalidate when
//! the deck changes.

use crate::error::{FlipwiseError, Result};
use crate::model::Card;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Appends a card and returns its position.
    pub fn add(&mut self, card: Card) -> Result<usize> {
        card.validate()?;
        self.cards.push(card);
        Ok(self.cards.len() - 1)
    }

    /// Replaces the card at `index`, returning the card it displaced.
    pub fn replace_at(&mut self, index: usize, card: Card) -> Result<Card> {
        self.check_bounds(index)?;
        card.validate()?;
        Ok(std::mem::replace(&mut self.cards[index], card))
    }

    pub fn remove_at(&mut self, index: usize) -> Result<Card> {
        self.check_bounds(index)?;
        Ok(self.cards.remove(index))
    }

    /// Swaps in a whole new collection. Records are taken as they are.
    pub fn replace_all(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    /// Distinct categories across the deck, sorted and case-sensitive.
    pub fn categories(&self) -> Vec<String> {
        self.category_counts().into_keys().collect()
    }

    pub fn category_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for card in &self.cards {
            *counts.entry(card.category().to_string()).or_insert(0) += 1;
        }
        counts
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.cards.iter().any(|c| c.category() == category)
    }

    fn check_bounds(&self, index: usize) -> Result<()> {
        if index >= self.cards.len() {
            return Err(FlipwiseError::IndexOutOfBounds {
                index,
                len: self.cards.len(),
            });
        }
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Builder for decks used across the test suites.
    pub struct DeckFixture {
        pub deck: Deck,
    }

    impl Default for DeckFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl DeckFixture {
        pub fn new() -> Self {
            Self { deck: Deck::new() }
        }

        pub fn with_card(mut self, front: &str, back: &str, category: &str) -> Self {
            let card = Card::new(front, back, category).unwrap();
            self.deck.add(card).unwrap();
            self
        }

        pub fn with_cards(mut self, count: usize, category: &str) -> Self {
            for i in 0..count {
                let card = Card::new(
                    &format!("Question {}", i + 1),
                    &format!("Answer {}", i + 1),
                    category,
                )
                .unwrap();
                self.deck.add(card).unwrap();
            }
            self
        }

        /// The three-card deck used by the navigation scenarios: two math, one art.
        pub fn math_and_art() -> Self {
            Self::new()
                .with_card("a", "1", "math")
                .with_card("b", "2", "math")
                .with_card("c", "3", "art")
        }

        pub fn build(self) -> Deck {
            self.deck
        }
    }
}
