//! Tarot card catalog.
//!
//! The 78-card deck is compiled into the binary (see `card_data`) and
//! indexed once on first use. Lookups by id are O(1); the catalog is
//! never mutated after construction.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::card_data::CARDS;

/// Total number of cards in a deck.
pub const DECK_SIZE: usize = 78;

/// Number of major arcana cards.
pub const MAJOR_ARCANA_COUNT: usize = 22;

/// Number of cards per minor arcana suit.
pub const SUIT_SIZE: usize = 14;

/// Every card image lives under this path.
pub const IMAGE_PATH_PREFIX: &str = "/cards/";

/// Major or minor arcana
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Arcana {
    Major,
    Minor,
}

impl Arcana {
    pub fn as_str(&self) -> &'static str {
        match self {
            Arcana::Major => "major",
            Arcana::Minor => "minor",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "major" => Some(Arcana::Major),
            "minor" => Some(Arcana::Minor),
            _ => None,
        }
    }
}

/// Minor arcana suit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Wands,
    Cups,
    Swords,
    Pentacles,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Wands, Suit::Cups, Suit::Swords, Suit::Pentacles];

    pub fn as_str(&self) -> &'static str {
        match self {
            Suit::Wands => "wands",
            Suit::Cups => "cups",
            Suit::Swords => "swords",
            Suit::Pentacles => "pentacles",
        }
    }

    /// Korean display label
    pub fn label(&self) -> &'static str {
        match self {
            Suit::Wands => "완드",
            Suit::Cups => "컵",
            Suit::Swords => "소드",
            Suit::Pentacles => "펜타클",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "wands" => Some(Suit::Wands),
            "cups" => Some(Suit::Cups),
            "swords" => Some(Suit::Swords),
            "pentacles" => Some(Suit::Pentacles),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single immutable tarot card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Stable key, e.g. "major-00" or "wands-01"
    pub id: &'static str,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub arcana: Arcana,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suit: Option<Suit>,
    /// Major: 0-21, minor: 1-14 (Ace=1 ... Page=11, Knight=12, Queen=13, King=14)
    pub number: u8,
    pub image_url: &'static str,
    pub meaning_upright: &'static str,
    pub meaning_reversed: &'static str,
    pub keywords: &'static [&'static str],
}

impl Card {
    pub fn is_major(&self) -> bool {
        self.arcana == Arcana::Major
    }
}

/// A problem found by [`CardCatalog::validate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogIssue {
    pub card_id: Option<String>,
    pub message: String,
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.card_id {
            Some(id) => write!(f, "{}: {}", id, self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Indexed, read-only view over the deck
pub struct CardCatalog {
    cards: &'static [Card],
    index: HashMap<&'static str, usize>,
}

static STANDARD: Lazy<CardCatalog> = Lazy::new(|| CardCatalog::new(&CARDS));

impl CardCatalog {
    /// The standard 78-card deck, built on first access
    pub fn standard() -> &'static CardCatalog {
        &STANDARD
    }

    /// Build a catalog over an arbitrary card slice.
    ///
    /// Duplicate ids resolve to the first occurrence; `validate` reports them.
    pub fn new(cards: &'static [Card]) -> Self {
        let mut index = HashMap::with_capacity(cards.len());
        for (i, card) in cards.iter().enumerate() {
            index.entry(card.id).or_insert(i);
        }
        Self { cards, index }
    }

    pub fn all(&self) -> &'static [Card] {
        self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at a position in deck order
    pub fn get(&self, position: usize) -> Option<&'static Card> {
        self.cards.get(position)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&'static Card> {
        self.index.get(id).map(|&i| &self.cards[i])
    }

    pub fn major_arcana(&self) -> Vec<&'static Card> {
        self.cards.iter().filter(|c| c.is_major()).collect()
    }

    pub fn minor_arcana(&self) -> Vec<&'static Card> {
        self.cards.iter().filter(|c| c.arcana == Arcana::Minor).collect()
    }

    pub fn by_suit(&self, suit: Suit) -> Vec<&'static Card> {
        self.cards.iter().filter(|c| c.suit == Some(suit)).collect()
    }

    /// Check deck-level invariants. An empty result means the deck is sound.
    pub fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();
        let deck = |message: String| CatalogIssue {
            card_id: None,
            message,
        };

        if self.cards.len() != DECK_SIZE {
            issues.push(deck(format!(
                "deck has {} cards (expected {})",
                self.cards.len(),
                DECK_SIZE
            )));
        }

        let majors = self.major_arcana().len();
        if majors != MAJOR_ARCANA_COUNT {
            issues.push(deck(format!(
                "major arcana has {} cards (expected {})",
                majors, MAJOR_ARCANA_COUNT
            )));
        }

        let minors = self.minor_arcana().len();
        let expected_minors = DECK_SIZE - MAJOR_ARCANA_COUNT;
        if minors != expected_minors {
            issues.push(deck(format!(
                "minor arcana has {} cards (expected {})",
                minors, expected_minors
            )));
        }

        for suit in Suit::ALL {
            let count = self.by_suit(suit).len();
            if count != SUIT_SIZE {
                issues.push(deck(format!(
                    "suit {} has {} cards (expected {})",
                    suit, count, SUIT_SIZE
                )));
            }
        }

        let mut seen = HashSet::new();
        for card in self.cards {
            let mut card_issue = |message: &str| {
                issues.push(CatalogIssue {
                    card_id: Some(card.id.to_string()),
                    message: message.to_string(),
                })
            };

            if !seen.insert(card.id) {
                card_issue("duplicate id");
            }
            if card.id.trim().is_empty() {
                card_issue("missing id");
            }
            if card.name.trim().is_empty() {
                card_issue("missing name");
            }
            if card.meaning_upright.trim().is_empty() {
                card_issue("missing upright meaning");
            }
            if card.meaning_reversed.trim().is_empty() {
                card_issue("missing reversed meaning");
            }
            if card.keywords.is_empty() || card.keywords.iter().any(|k| k.trim().is_empty()) {
                card_issue("keywords must be a non-empty list of non-empty strings");
            }
            if !card.image_url.starts_with(IMAGE_PATH_PREFIX) {
                card_issue("image path must start with /cards/");
            }
            match (card.arcana, card.suit) {
                (Arcana::Minor, None) => card_issue("minor arcana card without suit"),
                (Arcana::Major, Some(_)) => card_issue("major arcana card with suit"),
                _ => {}
            }
        }

        issues
    }
}
