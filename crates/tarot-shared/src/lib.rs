//! Shared types for the tarot reading daemon and CLI.

pub mod api;
mod card_data;
pub mod cards;
pub mod error;
pub mod reading;
pub mod validation;

pub use api::{
    CardView, CardsResponse, CreateReadingRequest, ErrorBody, HealthResponse, ReadingResponse,
    ReadingsResponse,
};
pub use cards::{Arcana, Card, CardCatalog, CatalogIssue, Suit};
pub use error::{GenerationError, ReadingError, ValidationError};
pub use reading::{Category, CategoryInfo, NewReading, Orientation, Reading, CATEGORIES};
pub use validation::{sanitize_concern, validate_request, ValidatedRequest};

/// Default daemon address
pub const DEFAULT_BIND: &str = "127.0.0.1:7878";
