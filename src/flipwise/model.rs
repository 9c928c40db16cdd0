use crate::error::{FlipwiseError, MissingField, Result};
use serde::Serialize;

pub const DEFAULT_CATEGORY: &str = "General";
pub const ALL_CATEGORIES: &str = "All";
pub const EMPTY_DECK_TEXT: &str = "No cards yet. Add one!";

/// A single flashcard.
///
/// Cards built through [`Card::new`] always have non-blank front and back text.
/// Cards read back from a deck file keep whatever text the file held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    front: String,
    back: String,
    category: String,
}

impl Card {
    pub fn new(front: &str, back: &str, category: &str) -> Result<Self> {
        let card = Self {
            front: front.trim().to_string(),
            back: back.trim().to_string(),
            category: normalize_category(Some(category)),
        };
        card.validate()?;
        Ok(card)
    }

    /// Checks that both faces carry text once surrounding whitespace is ignored.
    pub fn validate(&self) -> Result<()> {
        match (self.front.trim().is_empty(), self.back.trim().is_empty()) {
            (true, true) => Err(FlipwiseError::Validation(MissingField::Both)),
            (true, false) => Err(FlipwiseError::Validation(MissingField::Front)),
            (false, true) => Err(FlipwiseError::Validation(MissingField::Back)),
            (false, false) => Ok(()),
        }
    }

    /// Builds a card from a stored record without checking the text fields.
    pub(crate) fn from_stored(front: String, back: String, category: Option<String>) -> Self {
        Self {
            front,
            back,
            category: normalize_category(category.as_deref()),
        }
    }

    pub fn front(&self) -> &str {
        &self.front
    }

    pub fn back(&self) -> &str {
        &self.back
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn text(&self, face: Face) -> &str {
        match face {
            Face::Front => &self.front,
            Face::Back => &self.back,
        }
    }
}

/// The category a card is stored under.
///
/// Blank input and the reserved filter name "All" both become "General".
pub fn normalize_category(category: Option<&str>) -> String {
    match category.map(str::trim) {
        Some(c) if !c.is_empty() && c != ALL_CATEGORIES => c.to_string(),
        _ => DEFAULT_CATEGORY.to_string(),
    }
}

/// The three text fields collected from the user for a new or edited card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDraft {
    pub front: String,
    pub back: String,
    pub category: String,
}

impl CardDraft {
    pub fn new(
        front: impl Into<String>,
        back: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
            category: category.into(),
        }
    }

    pub fn from_card(card: &Card) -> Self {
        Self::new(card.front(), card.back(), card.category())
    }

    pub fn into_card(self) -> Result<Card> {
        Card::new(&self.front, &self.back, &self.category)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Face {
    #[default]
    Front,
    Back,
}

impl Face {
    pub fn flipped(self) -> Self {
        match self {
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Face::Front => write!(f, "front"),
            Face::Back => write!(f, "back"),
        }
    }
}

/// The active category filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    All,
    Named(String),
}

impl Category {
    /// Parses user input; `"All"` and blank input select the whole deck.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input.is_empty() || input == ALL_CATEGORIES {
            Category::All
        } else {
            Category::Named(input.to_string())
        }
    }

    pub fn matches(&self, card: &Card) -> bool {
        match self {
            Category::All => true,
            Category::Named(name) => card.category() == name,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::All => write!(f, "{}", ALL_CATEGORIES),
            Category::Named(name) => write!(f, "{}", name),
        }
    }
}
