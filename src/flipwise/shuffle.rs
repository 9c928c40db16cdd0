//! # Shuffle Controller
//!
//! Two states, [`ShuffleMode::Ordered`] (initial) and [`ShuffleMode::Shuffled`].
//! Turning shuffle on captures a random permutation of the current view;
//! turning it off throws the permutation away and rebuilds the natural order.
//!
//! With nothing to shuffle a toggle does nothing, including leaving the mode
//! as it was.

use crate::deck::Deck;
use crate::model::Category;
use crate::view::natural_view;
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShuffleMode {
    #[default]
    Ordered,
    Shuffled,
}

impl ShuffleMode {
    pub fn is_shuffled(&self) -> bool {
        matches!(self, ShuffleMode::Shuffled)
    }

    /// Flips the mode and returns the view to navigate from now on.
    ///
    /// Returns `None`, leaving the mode untouched, when `view` is empty.
    pub fn toggle<R: Rng + ?Sized>(
        &mut self,
        deck: &Deck,
        category: &Category,
        view: &[usize],
        rng: &mut R,
    ) -> Option<Vec<usize>> {
        if view.is_empty() {
            return None;
        }
        match self {
            ShuffleMode::Ordered => {
                let mut shuffled = view.to_vec();
                shuffled.shuffle(rng);
                *self = ShuffleMode::Shuffled;
                Some(shuffled)
            }
            ShuffleMode::Shuffled => {
                *self = ShuffleMode::Ordered;
                Some(natural_view(deck, category))
            }
        }
    }
}

impl std::fmt::Display for ShuffleMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShuffleMode::Ordered => write!(f, "ordered"),
            ShuffleMode::Shuffled => write!(f, "shuffled"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::fixtures::DeckFixture;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn shuffling_permutes_the_view() {
        let deck = DeckFixture::new().with_cards(20, "g").build();
        let view = natural_view(&deck, &Category::All);
        let mut rng = StdRng::seed_from_u64(7);
        let mut mode = ShuffleMode::default();

        let mut shuffled = mode
            .toggle(&deck, &Category::All, &view, &mut rng)
            .unwrap();
        assert!(mode.is_shuffled());

        shuffled.sort_unstable();
        let mut expected = view.clone();
        expected.sort_unstable();
        assert_eq!(shuffled, expected);
    }

    #[test]
    fn toggling_off_restores_natural_order() {
        let deck = DeckFixture::new()
            .with_card("c", "3", "g")
            .with_card("a", "1", "g")
            .with_card("b", "2", "g")
            .build();
        let view = natural_view(&deck, &Category::All);

        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut mode = ShuffleMode::default();
            let shuffled = mode
                .toggle(&deck, &Category::All, &view, &mut rng)
                .unwrap();
            let ordered = mode
                .toggle(&deck, &Category::All, &shuffled, &mut rng)
                .unwrap();
            assert_eq!(mode, ShuffleMode::Ordered);
            assert_eq!(ordered, vec![1, 2, 0]);
        }
    }

    #[test]
    fn empty_view_leaves_mode_alone() {
        let deck = Deck::new();
        let mut rng = StdRng::seed_from_u64(1);

        let mut mode = ShuffleMode::Ordered;
        assert!(mode.toggle(&deck, &Category::All, &[], &mut rng).is_none());
        assert_eq!(mode, ShuffleMode::Ordered);

        let mut mode = ShuffleMode::Shuffled;
        assert!(mode.toggle(&deck, &Category::All, &[], &mut rng).is_none());
        assert_eq!(mode, ShuffleMode::Shuffled);
    }
}
