//! # API Facade
//!
//! The API layer is a **thin facade** over the [`DeckController`] and a
//! [`DeckStore`]. It is the single entry point for every user intent, whatever
//! front end issues it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** each intent to the controller (and the store for save/load)
//! - **Turns recoverable failures into notices** so a bad input never ends a session
//! - **Returns structured types** (`Result<CmdResult>`) carrying the fresh read model
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in the controller and the modules below it
//! - **I/O with the user**: No prompts, no stdout, no colors
//!
//! ## Errors vs Notices
//!
//! Validation, format, IO, empty-deck and config failures become
//! [`CmdMessage`]s and the call returns `Ok`. An out-of-bounds position means
//! an invariant broke; it is logged and returned as `Err`.
//!
//! ## Generic Over DeckStore
//!
//! - Production: `FlipwiseApi<FileStore>`
//! - Testing: `FlipwiseApi<InMemoryStore>`

use crate::config::FlipwiseConfig;
use crate::controller::{DeckController, ReadModel};
use crate::error::{FlipwiseError, Result};
use crate::model::{normalize_category, CardDraft, Category};
use crate::store::DeckStore;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub model: Option<ReadModel>,
    pub categories: Vec<(String, usize)>,
    pub config: Option<FlipwiseConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_model(mut self, model: ReadModel) -> Self {
        self.model = Some(model);
        self
    }

    pub fn with_categories(mut self, categories: Vec<(String, usize)>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_config(mut self, config: FlipwiseConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_level(&self, level: MessageLevel) -> bool {
        self.messages.iter().any(|m| m.level == level)
    }
}

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// The main API facade for a study session.
pub struct FlipwiseApi<S: DeckStore> {
    controller: DeckController,
    store: S,
    config_dir: PathBuf,
}

impl<S: DeckStore> FlipwiseApi<S> {
    pub fn new(controller: DeckController, store: S, config_dir: PathBuf) -> Self {
        Self {
            controller,
            store,
            config_dir,
        }
    }

    pub fn controller(&self) -> &DeckController {
        &self.controller
    }

    pub fn read_model(&self) -> ReadModel {
        self.controller.read_model()
    }

    /// The fields of the card under the cursor, for pre-filling an edit prompt.
    pub fn current_draft(&self) -> Option<CardDraft> {
        self.controller.current_card().map(CardDraft::from_card)
    }

    pub fn has_cards(&self) -> bool {
        !self.controller.deck().is_empty()
    }

    pub fn add_card(&mut self, draft: CardDraft) -> Result<CmdResult> {
        let mut result = CmdResult::default();
        match self
            .controller
            .add_card(&draft.front, &draft.back, &draft.category)
        {
            Ok(()) => {
                let category = normalize_category(Some(&draft.category));
                result.add_message(CmdMessage::success(format!("Card added to {}", category)));
            }
            Err(e) => report(&mut result, "Cannot add card", e)?,
        }
        Ok(self.finish(result))
    }

    pub fn edit_card(&mut self, draft: CardDraft) -> Result<CmdResult> {
        let mut result = CmdResult::default();
        if self.controller.current_card().is_none() {
            result.add_message(CmdMessage::info("No card to edit."));
            return Ok(self.finish(result));
        }
        match self
            .controller
            .edit_card(&draft.front, &draft.back, &draft.category)
        {
            Ok(()) => result.add_message(CmdMessage::success("Card updated")),
            Err(e) => report(&mut result, "Cannot edit card", e)?,
        }
        Ok(self.finish(result))
    }

    pub fn delete_card(&mut self) -> Result<CmdResult> {
        let mut result = CmdResult::default();
        match self.controller.delete_card() {
            Ok(Some(card)) => {
                result.add_message(CmdMessage::success(format!("Card deleted: {}", card.front())))
            }
            Ok(None) => result.add_message(CmdMessage::info("No card to delete.")),
            Err(e) => report(&mut result, "Cannot delete card", e)?,
        }
        Ok(self.finish(result))
    }

    pub fn flip(&mut self) -> CmdResult {
        self.controller.flip();
        self.finish(CmdResult::default())
    }

    pub fn next(&mut self) -> CmdResult {
        self.controller.next();
        self.finish(CmdResult::default())
    }

    pub fn previous(&mut self) -> CmdResult {
        self.controller.previous();
        self.finish(CmdResult::default())
    }

    pub fn switch_category(&mut self, name: &str) -> CmdResult {
        let requested = Category::parse(name);
        let active = self.controller.switch_category(requested.clone()).clone();

        let mut result = CmdResult::default();
        if active != requested {
            result.add_message(CmdMessage::warning(format!(
                "No cards in category {}, showing {}",
                requested, active
            )));
        } else {
            result.add_message(CmdMessage::info(format!(
                "Showing {} ({} cards)",
                active,
                self.controller.view().len()
            )));
        }
        self.finish(result)
    }

    pub fn toggle_shuffle(&mut self) -> CmdResult {
        let mut result = CmdResult::default();
        if !self.controller.toggle_shuffle() {
            result.add_message(CmdMessage::info("Nothing to shuffle."));
        } else if self.controller.shuffle_mode().is_shuffled() {
            result.add_message(CmdMessage::success("Shuffle on"));
        } else {
            result.add_message(CmdMessage::success("Shuffle off, back in order"));
        }
        self.finish(result)
    }

    /// The category index with per-category counts, "All" first.
    pub fn list_categories(&self) -> CmdResult {
        let mut categories = vec![(Category::All.to_string(), self.controller.deck().len())];
        categories.extend(self.controller.deck().category_counts());
        let mut result = CmdResult::default().with_categories(categories);
        if !self.has_cards() {
            result.add_message(CmdMessage::info("No categories yet."));
        }
        result
    }

    pub fn save(&mut self, location: &Path) -> Result<CmdResult> {
        let mut result = CmdResult::default();
        let cards = self.controller.deck().cards();
        match self.store.save_cards(location, cards) {
            Ok(()) => {
                tracing::info!(path = %location.display(), count = cards.len(), "deck saved");
                result.add_message(CmdMessage::success(format!("Saved {} cards!", cards.len())));
            }
            Err(e) => report(&mut result, "Save failed", e)?,
        }
        Ok(self.finish(result))
    }

    /// Replaces the deck with the one at `location`. On any failure the current
    /// deck is kept as it was.
    pub fn load(&mut self, location: &Path) -> Result<CmdResult> {
        let mut result = CmdResult::default();
        match self.store.load_cards(location) {
            Ok(cards) => {
                let count = cards.len();
                self.controller.replace_cards(cards);
                tracing::info!(path = %location.display(), count, "deck loaded");
                result.add_message(CmdMessage::success(format!("Loaded {} cards!", count)));
            }
            Err(e) => report(&mut result, "Load failed", e)?,
        }
        Ok(self.finish(result))
    }

    /// Loads `location` if a deck exists there; otherwise leaves the session empty.
    pub fn load_if_present(&mut self, location: &Path) -> Result<CmdResult> {
        if self.store.exists(location) {
            return self.load(location);
        }
        tracing::debug!(path = %location.display(), "no deck to load at startup");
        Ok(self.finish(CmdResult::default()))
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        let mut result = CmdResult::default();
        let mut config = match FlipwiseConfig::load(&self.config_dir) {
            Ok(config) => config,
            Err(e) => {
                report(&mut result, "Cannot read config", e)?;
                return Ok(result);
            }
        };
        match action {
            ConfigAction::ShowAll => return Ok(result.with_config(config)),
            ConfigAction::ShowKey(key) => match config.get(&key) {
                Some(value) => result.add_message(CmdMessage::info(value)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            },
            ConfigAction::Set(key, value) => {
                if let Err(e) = config.set(&key, &value) {
                    report(&mut result, "Config not changed", e)?;
                    return Ok(result);
                }
                if let Err(e) = config.save(&self.config_dir) {
                    report(&mut result, "Config not changed", e)?;
                    return Ok(result);
                }
                let shown = config.get(&key).unwrap_or(value);
                result.add_message(CmdMessage::success(format!("{} set to {}", key, shown)));
                result = result.with_config(config);
            }
        }
        Ok(result)
    }

    fn finish(&self, result: CmdResult) -> CmdResult {
        result.with_model(self.controller.read_model())
    }
}

/// Records a recoverable failure as a notice, or passes a broken invariant on.
fn report(result: &mut CmdResult, context: &str, err: FlipwiseError) -> Result<()> {
    if !err.is_recoverable() {
        tracing::error!(error = %err, "{}", context);
        return Err(err);
    }
    tracing::warn!(error = %err, "{}", context);
    let message = match &err {
        FlipwiseError::EmptyDeck => CmdMessage::info(err.to_string()),
        FlipwiseError::Validation(_) => CmdMessage::warning(format!("{}: {}", context, err)),
        _ => CmdMessage::error(format!("{}: {}", context, err)),
    };
    result.add_message(message);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::fixtures::DeckFixture;
    use crate::store::memory::InMemoryStore;

    fn api_with(store: InMemoryStore) -> (FlipwiseApi<InMemoryStore>, tempfile::TempDir) {
        let config_dir = tempfile::tempdir().unwrap();
        let controller = DeckController::seeded(5).with_deck(DeckFixture::math_and_art().build());
        let api = FlipwiseApi::new(controller, store, config_dir.path().to_path_buf());
        (api, config_dir)
    }

    fn api() -> (FlipwiseApi<InMemoryStore>, tempfile::TempDir) {
        api_with(InMemoryStore::new())
    }

    #[test]
    fn every_result_carries_read_model() {
        let (mut api, _dir) = api();
        let result = api.flip();
        assert_eq!(result.model.unwrap().displayed_text, "1");
        let result = api.next();
        assert_eq!(result.model.unwrap().displayed_text, "b");
        let result = api.previous();
        assert_eq!(result.model.unwrap().displayed_text, "a");
    }

    #[test]
    fn add_reports_success() {
        let (mut api, _dir) = api();
        let result = api.add_card(CardDraft::new("q", "a", "")).unwrap();
        assert!(result.has_level(MessageLevel::Success));
        assert_eq!(result.messages[0].content, "Card added to General");
        assert_eq!(api.controller().deck().len(), 4);
    }

    #[test]
    fn invalid_card_becomes_warning() {
        let (mut api, _dir) = api();
        let result = api.add_card(CardDraft::new("q", "", "g")).unwrap();
        assert!(result.has_level(MessageLevel::Warning));
        assert!(result.messages[0].content.contains("the back is empty"));
        assert_eq!(api.controller().deck().len(), 3);
    }

    #[test]
    fn edit_uses_current_card() {
        let (mut api, _dir) = api();
        api.next();
        let mut draft = api.current_draft().unwrap();
        assert_eq!(draft.front, "b");
        draft.back = "two".into();
        api.edit_card(draft).unwrap();
        assert_eq!(api.controller().deck().cards()[1].back(), "two");
    }

    #[test]
    fn edit_and_delete_on_empty_deck_are_notices() {
        let config_dir = tempfile::tempdir().unwrap();
        let mut empty = FlipwiseApi::new(
            DeckController::seeded(1),
            InMemoryStore::new(),
            config_dir.path().to_path_buf(),
        );
        let result = empty.edit_card(CardDraft::new("q", "a", "")).unwrap();
        assert_eq!(result.messages[0].content, "No card to edit.");
        let result = empty.delete_card().unwrap();
        assert_eq!(result.messages[0].content, "No card to delete.");
    }

    #[test]
    fn delete_names_removed_card() {
        let (mut api, _dir) = api();
        let result = api.delete_card().unwrap();
        assert_eq!(result.messages[0].content, "Card deleted: a");
        assert_eq!(result.model.unwrap().displayed_text, "b");
    }

    #[test]
    fn unknown_category_warns_and_shows_all() {
        let (mut api, _dir) = api();
        let result = api.switch_category("history");
        assert!(result.has_level(MessageLevel::Warning));
        assert_eq!(result.model.unwrap().filter, "All");

        let result = api.switch_category("math");
        assert_eq!(result.messages[0].content, "Showing math (2 cards)");
    }

    #[test]
    fn shuffle_notices() {
        let (mut api, _dir) = api();
        assert_eq!(api.toggle_shuffle().messages[0].content, "Shuffle on");
        assert!(api.read_model().shuffled);
        assert_eq!(
            api.toggle_shuffle().messages[0].content,
            "Shuffle off, back in order"
        );
    }

    #[test]
    fn categories_listed_with_counts() {
        let (api, _dir) = api();
        let result = api.list_categories();
        assert_eq!(
            result.categories,
            vec![
                ("All".to_string(), 3),
                ("art".to_string(), 1),
                ("math".to_string(), 2)
            ]
        );
    }

    #[test]
    fn save_and_load_through_store() {
        let (mut api, _dir) = api();
        let result = api.save(Path::new("deck.json")).unwrap();
        assert_eq!(result.messages[0].content, "Saved 3 cards!");

        api.delete_card().unwrap();
        api.switch_category("math");
        let result = api.load(Path::new("deck.json")).unwrap();
        assert_eq!(result.messages[0].content, "Loaded 3 cards!");
        let model = result.model.unwrap();
        assert_eq!(model.filter, "All");
        assert_eq!(model.position, Some((1, 3)));
    }

    #[test]
    fn empty_deck_save_is_a_notice() {
        let config_dir = tempfile::tempdir().unwrap();
        let mut api = FlipwiseApi::new(
            DeckController::seeded(1),
            InMemoryStore::new(),
            config_dir.path().to_path_buf(),
        );
        let result = api.save(Path::new("deck.json")).unwrap();
        assert!(result.has_level(MessageLevel::Info));
        assert_eq!(result.messages[0].content, "No flashcards to save.");
    }

    #[test]
    fn bad_document_keeps_current_deck() {
        let store = InMemoryStore::new().with_document("bad.json", r#"[{"front":"q"}]"#);
        let (mut api, _dir) = api_with(store);
        let result = api.load(Path::new("bad.json")).unwrap();
        assert!(result.has_level(MessageLevel::Error));
        assert!(result.messages[0].content.starts_with("Load failed"));
        assert_eq!(api.controller().deck().len(), 3);
    }

    #[test]
    fn load_if_present_skips_missing_deck() {
        let (mut api, _dir) = api();
        let result = api.load_if_present(Path::new("nothing.json")).unwrap();
        assert!(result.messages.is_empty());
        assert_eq!(api.controller().deck().len(), 3);
    }

    #[test]
    fn config_set_persists() {
        let (api, dir) = api();
        let result = api
            .config(ConfigAction::Set("deck-file".into(), "words.json".into()))
            .unwrap();
        assert_eq!(result.messages[0].content, "deck-file set to words.json");
        assert_eq!(
            FlipwiseConfig::load(dir.path()).unwrap().deck_file,
            "words.json"
        );

        let result = api.config(ConfigAction::ShowKey("deck-file".into())).unwrap();
        assert_eq!(result.messages[0].content, "words.json");
    }

    #[test]
    fn unreadable_config_is_a_notice() {
        let (api, dir) = api();
        std::fs::write(dir.path().join("config.json"), "{ not json").unwrap();
        let result = api.config(ConfigAction::ShowAll).unwrap();
        assert!(result.has_level(MessageLevel::Error));
        assert!(result.messages[0].content.starts_with("Cannot read config"));
        assert!(result.config.is_none());
    }

    #[test]
    fn unwritable_config_is_a_notice() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "").unwrap();
        let api = FlipwiseApi::new(
            DeckController::seeded(1),
            InMemoryStore::new(),
            blocker.join("flipwise"),
        );
        let result = api
            .config(ConfigAction::Set("deck-file".into(), "x.json".into()))
            .unwrap();
        assert!(result.has_level(MessageLevel::Error));
        assert!(result.messages[0].content.starts_with("Config not changed"));
    }

    #[test]
    fn reserved_category_name_is_reported_as_stored() {
        let (mut api, _dir) = api();
        let result = api.add_card(CardDraft::new("q", "a", "All")).unwrap();
        assert_eq!(result.messages[0].content, "Card added to General");
        let listing = api.list_categories().categories;
        assert_eq!(listing.iter().filter(|(name, _)| name == "All").count(), 1);
    }

    #[test]
    fn config_rejects_unknown_key() {
        let (api, _dir) = api();
        let result = api
            .config(ConfigAction::Set("theme".into(), "dark".into()))
            .unwrap();
        assert!(result.has_level(MessageLevel::Error));
        let result = api.config(ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap(), FlipwiseConfig::default());
    }
}
