//! # View Filter and Navigation Cursor
//!
//! A view is a list of positions into the [`Deck`]. It is rebuilt from scratch
//! whenever the deck or the category filter changes, never patched, so it can
//! not drift away from the cards it points at.
//!
//! The unshuffled ("natural") order of a view is ascending by front text. Cards
//! with identical fronts keep their deck order.

use crate::deck::Deck;
use crate::model::{Category, Face};

/// Deck positions of the cards in `category`, in deck order.
pub fn filter(deck: &Deck, category: &Category) -> Vec<usize> {
    deck.cards()
        .iter()
        .enumerate()
        .filter(|(_, card)| category.matches(card))
        .map(|(i, _)| i)
        .collect()
}

/// Deck positions of the cards in `category`, in natural order.
pub fn natural_view(deck: &Deck, category: &Category) -> Vec<usize> {
    let mut view = filter(deck, category);
    let cards = deck.cards();
    view.sort_by(|&a, &b| cards[a].front().cmp(cards[b].front()));
    view
}

/// Position within a view plus the face being shown.
///
/// Every movement takes the current view length; with an empty view all
/// movements are no-ops. Navigation wraps around in both directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    position: usize,
    face: Face,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(position: usize) -> Self {
        Self {
            position,
            face: Face::Front,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn face(&self) -> Face {
        self.face
    }

    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.position = (self.position + 1) % len;
        self.face = Face::Front;
    }

    pub fn previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.position = (self.position + len - 1) % len;
        self.face = Face::Front;
    }

    pub fn flip(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.face = self.face.flipped();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Pulls the position back inside a view that shrank, showing the front.
    pub fn clamp(&mut self, len: usize) {
        self.position = self.position.min(len.saturating_sub(1));
        self.face = Face::Front;
    }
}
