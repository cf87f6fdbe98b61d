//! HTTP client for communicating with tarotd.

use anyhow::{anyhow, Context, Result};
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tarot_shared::api::{CARDS_PATH, HEALTH_PATH, READINGS_PATH, READING_PATH};
use tarot_shared::{
    CreateReadingRequest, ErrorBody, HealthResponse, ReadingResponse, ReadingsResponse,
};

/// Default daemon URL
pub const DEFAULT_SERVER: &str = "http://127.0.0.1:7878";

/// Creation waits on text generation, so allow well beyond its own timeout
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Catalog entry as listed by `GET /api/cards`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogCard {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub arcana: String,
    #[serde(default)]
    pub suit: Option<String>,
    pub number: u8,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CatalogCards {
    cards: Vec<CatalogCard>,
}

/// Error reported by the daemon, with the HTTP status it came with
#[derive(Debug, thiserror::Error)]
#[error("[{}] {}", .status.as_u16(), .message)]
pub struct ServerError {
    pub status: StatusCode,
    pub message: String,
}

/// Client for the tarotd HTTP API
pub struct TarotClient {
    base_url: String,
    http: reqwest::Client,
}

impl TarotClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and decode a JSON body, turning daemon errors into `ServerError`
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await.map_err(|e| {
            anyhow!(
                "Cannot reach tarotd at {}: {}\n\n\
                 Start the daemon with `tarotd` or point --server at a running instance.",
                self.base_url,
                e
            )
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or(body);
            return Err(ServerError { status, message }.into());
        }

        response
            .json::<T>()
            .await
            .context("Failed to decode daemon response")
    }

    /// Ask the daemon for a new reading
    pub async fn create_reading(&self, category: &str, concern: &str) -> Result<ReadingResponse> {
        let body = CreateReadingRequest {
            category: Some(category.to_string()),
            concern: Some(concern.to_string()),
        };
        self.send(self.http.post(self.url(READING_PATH)).json(&body))
            .await
    }

    pub async fn get_reading(&self, id: &str) -> Result<ReadingResponse> {
        self.send(self.http.get(self.url(READING_PATH)).query(&[("id", id)]))
            .await
    }

    pub async fn recent_readings(
        &self,
        category: Option<&str>,
        limit: Option<usize>,
    ) -> Result<ReadingsResponse> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(category) = category {
            query.push(("category", category.to_string()));
        }
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }
        self.send(self.http.get(self.url(READINGS_PATH)).query(&query))
            .await
    }

    pub async fn cards(&self, suit: Option<&str>, arcana: Option<&str>) -> Result<Vec<CatalogCard>> {
        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(suit) = suit {
            query.push(("suit", suit));
        }
        if let Some(arcana) = arcana {
            query.push(("type", arcana));
        }
        let listing: CatalogCards = self
            .send(self.http.get(self.url(CARDS_PATH)).query(&query))
            .await?;
        Ok(listing.cards)
    }

    pub async fn health(&self) -> Result<HealthResponse> {
        self.send(self.http.get(self.url(HEALTH_PATH))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = TarotClient::new("http://localhost:7878/").unwrap();
        assert_eq!(client.url(READING_PATH), "http://localhost:7878/api/reading");
    }

    #[test]
    fn test_catalog_card_decodes_wire_shape() {
        let raw = serde_json::json!({
            "id": "cups-01",
            "name": "컵 에이스 (Ace of Cups)",
            "type": "minor",
            "suit": "cups",
            "number": 1,
            "imageUrl": "/cards/cups-01.jpg",
            "meaningUpright": "새로운 감정",
            "meaningReversed": "억눌린 감정",
            "keywords": ["사랑", "감정"]
        });
        let card: CatalogCard = serde_json::from_value(raw).unwrap();
        assert_eq!(card.arcana, "minor");
        assert_eq!(card.suit.as_deref(), Some("cups"));
        assert_eq!(card.keywords.len(), 2);
    }

    #[test]
    fn test_server_error_display() {
        let err = ServerError {
            status: StatusCode::TOO_MANY_REQUESTS,
            message: "요청이 너무 많습니다.".to_string(),
        };
        assert_eq!(err.to_string(), "[429] 요청이 너무 많습니다.");
    }
}
