use thiserror::Error;

/// Which required card field was left blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    Front,
    Back,
    Both,
}

impl std::fmt::Display for MissingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingField::Front => write!(f, "the front is empty"),
            MissingField::Back => write!(f, "the back is empty"),
            MissingField::Both => write!(f, "both front and back are empty"),
        }
    }
}

#[derive(Error, Debug)]
pub enum FlipwiseError {
    #[error("Card is missing text: {0}")]
    Validation(MissingField),

    #[error("Not a flashcard deck: {0}")]
    Format(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Card position {index} is out of bounds (deck has {len} cards)")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("No flashcards to save.")]
    EmptyDeck,

    #[error("Config error: {0}")]
    Config(String),
}

impl FlipwiseError {
    /// Errors the user can recover from by retrying with different input.
    ///
    /// `IndexOutOfBounds` is the only variant that signals a broken invariant.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, FlipwiseError::IndexOutOfBounds { .. })
    }
}

pub type Result<T> = std::result::Result<T, FlipwiseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_names_missing_field() {
        let err = FlipwiseError::Validation(MissingField::Back);
        assert_eq!(err.to_string(), "Card is missing text: the back is empty");

        let err = FlipwiseError::Validation(MissingField::Both);
        assert!(err.to_string().contains("both front and back"));
    }

    #[test]
    fn only_index_errors_are_fatal() {
        assert!(FlipwiseError::EmptyDeck.is_recoverable());
        assert!(FlipwiseError::Format("x".into()).is_recoverable());
        assert!(!FlipwiseError::IndexOutOfBounds { index: 3, len: 1 }.is_recoverable());
    }
}
