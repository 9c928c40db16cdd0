use crate::error::{FlipwiseError, Result};
use crate::model::Card;
use serde::Deserialize;

/// On-disk shape of a card. `category` may be absent in older decks.
#[derive(Debug, Deserialize)]
struct CardRecord {
    front: String,
    back: String,
    #[serde(default)]
    category: Option<String>,
}

/// Serializes the full deck as a pretty-printed JSON array.
pub fn encode(cards: &[Card]) -> Result<String> {
    if cards.is_empty() {
        return Err(FlipwiseError::EmptyDeck);
    }
    let document = serde_json::to_string_pretty(cards).map_err(FlipwiseError::Serialization)?;
    Ok(document)
}

/// Parses a deck document. Any malformed record rejects the whole document.
pub fn decode(document: &str) -> Result<Vec<Card>> {
    let records: Vec<CardRecord> =
        serde_json::from_str(document).map_err(|e| FlipwiseError::Format(e.to_string()))?;
    Ok(records
        .into_iter()
        .map(|r| Card::from_stored(r.front, r.back, r.category))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::fixtures::DeckFixture;
    use crate::model::DEFAULT_CATEGORY;

    #[test]
    fn encode_writes_all_three_fields() {
        let deck = DeckFixture::new().with_card("q", "a", "").build();
        let document = encode(deck.cards()).unwrap();
        assert_eq!(
            document,
            "[\n  {\n    \"front\": \"q\",\n    \"back\": \"a\",\n    \"category\": \"General\"\n  }\n]"
        );
    }

    #[test]
    fn encode_refuses_empty_deck() {
        assert!(matches!(encode(&[]), Err(FlipwiseError::EmptyDeck)));
    }

    #[test]
    fn decode_round_trips_encoded_deck() {
        let deck = DeckFixture::math_and_art()
            .with_card("Ünïcödé \"quoted\"", "line\nbreak", "日本語")
            .build();
        let decoded = decode(&encode(deck.cards()).unwrap()).unwrap();
        assert_eq!(decoded, deck.cards());
    }

    #[test]
    fn decode_defaults_missing_category() {
        let document =
            r#"[{"front": "q", "back": "a"}, {"front": "x", "back": "y", "category": null}]"#;
        let cards = decode(document).unwrap();
        assert_eq!(cards.len(), 2);
        assert!(cards.iter().all(|c| c.category() == DEFAULT_CATEGORY));
    }

    #[test]
    fn decode_ignores_unknown_fields() {
        let cards = decode(r#"[{"front": "q", "back": "a", "seen": 3}]"#).unwrap();
        assert_eq!(cards[0].front(), "q");
    }

    #[test]
    fn decode_rejects_missing_back() {
        let err = decode(r#"[{"front":"q"}]"#).unwrap_err();
        assert!(matches!(err, FlipwiseError::Format(ref msg) if msg.contains("back")));
    }

    #[test]
    fn decode_rejects_non_array_documents() {
        assert!(matches!(decode("{}"), Err(FlipwiseError::Format(_))));
        assert!(matches!(decode("[1, 2]"), Err(FlipwiseError::Format(_))));
        assert!(matches!(decode("not json"), Err(FlipwiseError::Format(_))));
        assert!(matches!(
            decode(r#"[{"front": "q", "back": 4}]"#),
            Err(FlipwiseError::Format(_))
        ));
    }

    #[test]
    fn decode_accepts_empty_array() {
        assert!(decode("[]").unwrap().is_empty());
    }
}
