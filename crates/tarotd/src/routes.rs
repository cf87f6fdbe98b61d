//! API routes for tarotd

use crate::server::AppState;
use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tarot_shared::api::{CARDS_PATH, HEALTH_PATH, READINGS_PATH, READING_PATH};
use tarot_shared::{
    Arcana, CardsResponse, CreateReadingRequest, ErrorBody, HealthResponse, ReadingError,
    ReadingResponse, ReadingsResponse, Suit,
};
use tracing::{debug, error, warn};

type AppStateArc = Arc<AppState>;

/// Pipeline failure rendered as `(status, {"error": ...})`
#[derive(Debug)]
pub struct ApiError(pub ReadingError);

impl From<ReadingError> for ApiError {
    fn from(err: ReadingError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if self.0.is_client_error() {
            debug!("Responding {}: {}", status, self.0);
        } else {
            error!("Responding {}: {}", status, self.0);
        }
        (status, Json(ErrorBody::new(self.0.public_message()))).into_response()
    }
}

// ============================================================================
// Reading Routes
// ============================================================================

pub fn reading_routes() -> Router<AppStateArc> {
    Router::new()
        .route(READING_PATH, post(create_reading).get(get_reading))
        .route(READINGS_PATH, get(list_readings))
}

/// Body is parsed as JSON whatever the Content-Type says
async fn create_reading(
    State(state): State<AppStateArc>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<ReadingResponse>), ApiError> {
    let body = body.map_err(|rejection| {
        warn!("Unreadable reading request: {}", rejection.body_text());
        ReadingError::MalformedRequest
    })?;
    let req: CreateReadingRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!("Malformed reading request: {}", e);
        ReadingError::MalformedRequest
    })?;

    let created = state
        .pipeline
        .create_reading(req.category.as_deref(), req.concern.as_deref())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ReadingResponse::created(&created.reading, created.card)),
    ))
}

#[derive(Debug, Deserialize)]
struct ReadingQuery {
    id: Option<String>,
}

async fn get_reading(
    State(state): State<AppStateArc>,
    Query(query): Query<ReadingQuery>,
) -> Result<Json<ReadingResponse>, ApiError> {
    let id = query.id.unwrap_or_default();
    if id.trim().is_empty() {
        return Err(ReadingError::NotFound { id }.into());
    }

    let found = state.pipeline.get_reading(&id).await?;
    Ok(Json(ReadingResponse::fetched(&found.reading, found.card)))
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    limit: Option<usize>,
    category: Option<String>,
}

async fn list_readings(
    State(state): State<AppStateArc>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<ReadingsResponse>, ApiError> {
    let Query(query) = query.map_err(|rejection| {
        warn!("Malformed listing query: {}", rejection.body_text());
        ReadingError::MalformedRequest
    })?;

    let readings = state
        .pipeline
        .recent_readings(query.category.as_deref(), query.limit)
        .await?;

    Ok(Json(ReadingsResponse {
        readings: readings
            .iter()
            .map(|r| ReadingResponse::fetched(&r.reading, r.card))
            .collect(),
    }))
}

// ============================================================================
// Catalog Routes
// ============================================================================

pub fn catalog_routes() -> Router<AppStateArc> {
    Router::new().route(CARDS_PATH, get(list_cards))
}

#[derive(Debug, Deserialize)]
struct CardsQuery {
    suit: Option<String>,
    #[serde(rename = "type")]
    arcana: Option<String>,
}

/// Parse an optional filter value; empty means no filter
fn parse_filter<T>(raw: Option<&str>, parse: fn(&str) -> Option<T>) -> Result<Option<T>, ApiError> {
    match raw.filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => parse(s)
            .map(Some)
            .ok_or_else(|| ApiError(ReadingError::MalformedRequest)),
    }
}

async fn list_cards(
    State(state): State<AppStateArc>,
    Query(query): Query<CardsQuery>,
) -> Result<Json<CardsResponse>, ApiError> {
    let suit = parse_filter(query.suit.as_deref(), Suit::parse)?;
    let arcana = parse_filter(query.arcana.as_deref(), Arcana::parse)?;

    let cards = state
        .pipeline
        .catalog()
        .all()
        .iter()
        .filter(|c| suit.map_or(true, |s| c.suit == Some(s)))
        .filter(|c| arcana.map_or(true, |a| c.arcana == a))
        .collect();

    Ok(Json(CardsResponse { cards }))
}

// ============================================================================
// Health Routes
// ============================================================================

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route(HEALTH_PATH, get(health))
}

async fn health(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(state.pipeline.health(state.start_time.elapsed()).await)
}
