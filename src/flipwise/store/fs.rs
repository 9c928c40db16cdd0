use super::{format, DeckStore};
use crate::error::{FlipwiseError, Result};
use crate::model::Card;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads and writes deck documents on the local filesystem.
///
/// Relative locations are resolved against `base_dir`.
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn resolve(&self, location: &Path) -> PathBuf {
        if location.is_absolute() {
            location.to_path_buf()
        } else {
            self.base_dir.join(location)
        }
    }

    fn ensure_parent(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(FlipwiseError::Io)?;
            }
        }
        Ok(())
    }
}

impl DeckStore for FileStore {
    fn save_cards(&mut self, location: &Path, cards: &[Card]) -> Result<()> {
        let document = format::encode(cards)?;
        let path = self.resolve(location);
        self.ensure_parent(&path)?;
        fs::write(&path, document).map_err(FlipwiseError::Io)?;
        Ok(())
    }

    fn load_cards(&self, location: &Path) -> Result<Vec<Card>> {
        let path = self.resolve(location);
        let document = fs::read_to_string(&path).map_err(FlipwiseError::Io)?;
        format::decode(&document)
    }

    fn exists(&self, location: &Path) -> bool {
        self.resolve(location).is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::fixtures::DeckFixture;

    #[test]
    fn save_then_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        let deck = DeckFixture::math_and_art().build();

        store
            .save_cards(Path::new("decks/study.json"), deck.cards())
            .unwrap();
        assert!(store.exists(Path::new("decks/study.json")));
        assert!(dir.path().join("decks/study.json").is_file());

        let loaded = store.load_cards(Path::new("decks/study.json")).unwrap();
        assert_eq!(loaded, deck.cards());
    }

    #[test]
    fn absolute_locations_ignore_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(PathBuf::from("/nonexistent"));
        let target = dir.path().join("deck.json");
        assert_eq!(store.resolve(&target), target);
    }

    #[test]
    fn loading_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert!(!store.exists(Path::new("missing.json")));
        assert!(matches!(
            store.load_cards(Path::new("missing.json")),
            Err(FlipwiseError::Io(_))
        ));
    }

    #[test]
    fn loading_garbage_is_format_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bad.json"), "[{\"front\": \"q\"}]").unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert!(matches!(
            store.load_cards(Path::new("bad.json")),
            Err(FlipwiseError::Format(_))
        ));
    }

    #[test]
    fn saving_empty_deck_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        assert!(matches!(
            store.save_cards(Path::new("empty.json"), &[]),
            Err(FlipwiseError::EmptyDeck)
        ));
        assert!(!dir.path().join("empty.json").exists());
    }

    #[test]
    fn reads_legacy_files_without_category() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("old.json"),
            "[\n  {\n    \"front\": \"Capital of France?\",\n    \"back\": \"Paris\"\n  }\n]",
        )
        .unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        let cards = store.load_cards(Path::new("old.json")).unwrap();
        assert_eq!(cards[0].back(), "Paris");
        assert_eq!(cards[0].category(), "General");
    }
}
