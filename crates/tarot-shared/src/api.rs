//! HTTP wire types shared by the daemon and the CLI.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::reading::{Category, Orientation, Reading};

/// Default route paths
pub const READING_PATH: &str = "/api/reading";
pub const READINGS_PATH: &str = "/api/readings";
pub const CARDS_PATH: &str = "/api/cards";
pub const HEALTH_PATH: &str = "/api/health";

/// POST body. Fields are optional so that absence is a validation error,
/// not a decode error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateReadingRequest {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub concern: Option<String>,
}

/// Card fields exposed in reading responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub keywords: Vec<String>,
    pub meaning_upright: String,
    pub meaning_reversed: String,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id.to_string(),
            name: card.name.to_string(),
            image_url: card.image_url.to_string(),
            keywords: card.keywords.iter().map(|k| k.to_string()).collect(),
            meaning_upright: card.meaning_upright.to_string(),
            meaning_reversed: card.meaning_reversed.to_string(),
        }
    }
}

/// Reading response. `category`, `concern` and `createdAt` are echoed on fetch only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingResponse {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concern: Option<String>,
    pub card: CardView,
    pub orientation: Orientation,
    pub interpretation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ReadingResponse {
    /// Shape returned right after creation
    pub fn created(reading: &Reading, card: &Card) -> Self {
        Self {
            id: reading.id.clone(),
            category: None,
            concern: None,
            card: CardView::from(card),
            orientation: reading.orientation,
            interpretation: reading.interpretation.clone(),
            created_at: None,
        }
    }

    /// Shape returned when fetching a stored reading
    pub fn fetched(reading: &Reading, card: &Card) -> Self {
        Self {
            category: Some(reading.category),
            concern: Some(reading.concern.clone()),
            created_at: Some(reading.created_at),
            ..Self::created(reading, card)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingsResponse {
    pub readings: Vec<ReadingResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CardsResponse {
    pub cards: Vec<&'static Card>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub cards: usize,
    pub store: String,
}

/// Error body: `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
