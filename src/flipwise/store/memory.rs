use super::{format, DeckStore};
use crate::error::{FlipwiseError, Result};
use crate::model::Card;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Keeps deck documents in memory, keyed by location.
///
/// Documents go through the same encoder and decoder as [`super::fs::FileStore`].
#[derive(Debug, Default)]
pub struct InMemoryStore {
    documents: HashMap<PathBuf, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, location: impl Into<PathBuf>, document: &str) -> Self {
        self.documents.insert(location.into(), document.to_string());
        self
    }

    pub fn document(&self, location: &Path) -> Option<&str> {
        self.documents.get(location).map(String::as_str)
    }
}

impl DeckStore for InMemoryStore {
    fn save_cards(&mut self, location: &Path, cards: &[Card]) -> Result<()> {
        let document = format::encode(cards)?;
        self.documents.insert(location.to_path_buf(), document);
        Ok(())
    }

    fn load_cards(&self, location: &Path) -> Result<Vec<Card>> {
        let document = self.documents.get(location).ok_or_else(|| {
            FlipwiseError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", location.display()),
            ))
        })?;
        format::decode(document)
    }

    fn exists(&self, location: &Path) -> bool {
        self.documents.contains_key(location)
    }
}
