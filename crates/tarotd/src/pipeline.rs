//! Reading pipeline: validation, sampling, generation, persistence.
//!
//! The pipeline is the only writer of readings. A request either ends with
//! exactly one stored row or with an error and no row at all.

use std::sync::Arc;
use std::time::Duration;
use tarot_shared::validation::validate_request;
use tarot_shared::{
    Card, CardCatalog, Category, HealthResponse, NewReading, Reading, ReadingError,
    ValidationError,
};
use tracing::{error, info, warn};

use crate::generator::InterpretationGenerator;
use crate::sampler;
use crate::store::ReadingStore;

/// Default and maximum page sizes for listings
pub const DEFAULT_LIST_LIMIT: usize = 10;
pub const MAX_LIST_LIMIT: usize = 50;

/// A stored reading with its card resolved against the catalog
#[derive(Debug, Clone)]
pub struct ResolvedReading {
    pub reading: Reading,
    pub card: &'static Card,
}

pub struct ReadingPipeline {
    catalog: &'static CardCatalog,
    generator: InterpretationGenerator,
    store: Arc<dyn ReadingStore>,
}

impl ReadingPipeline {
    pub fn new(
        catalog: &'static CardCatalog,
        generator: InterpretationGenerator,
        store: Arc<dyn ReadingStore>,
    ) -> Self {
        Self {
            catalog,
            generator,
            store,
        }
    }

    pub fn catalog(&self) -> &'static CardCatalog {
        self.catalog
    }

    /// Validate, draw, interpret and persist a new reading
    pub async fn create_reading(
        &self,
        category: Option<&str>,
        concern: Option<&str>,
    ) -> Result<ResolvedReading, ReadingError> {
        let request = validate_request(category, concern).map_err(|e| {
            warn!("Rejected reading request: {}", e);
            ReadingError::from(e)
        })?;

        let card = sampler::draw_card(self.catalog);
        let orientation = sampler::draw_orientation();

        let interpretation = self
            .generator
            .generate(card, orientation, request.category, &request.concern)
            .await
            .map_err(|e| {
                if e.is_retryable() {
                    warn!("create_reading: generation rate limited card={}: {}", card.id, e);
                } else {
                    error!(
                        "create_reading: generation failed card={} orientation={} code={}: {}",
                        card.id,
                        orientation,
                        e.code(),
                        e
                    );
                }
                ReadingError::from(e)
            })?;

        let reading = self
            .store
            .insert(NewReading {
                category: request.category,
                concern: request.concern,
                card_id: card.id.to_string(),
                orientation,
                interpretation,
            })
            .await
            .map_err(|e| {
                error!("create_reading: persistence failed card={}: {:#}", card.id, e);
                ReadingError::storage("insert", format!("{:#}", e))
            })?;

        info!(
            "Reading created: id={} category={} card={} orientation={}",
            reading.id, reading.category, card.id, reading.orientation
        );

        Ok(ResolvedReading { reading, card })
    }

    /// Fetch a stored reading by id. Never regenerates.
    pub async fn get_reading(&self, id: &str) -> Result<ResolvedReading, ReadingError> {
        let not_found = || ReadingError::NotFound { id: id.to_string() };

        let reading = match self.store.select_by_id(id).await {
            Ok(Some(reading)) => reading,
            Ok(None) => {
                warn!("get_reading: no reading with id={}", id);
                return Err(not_found());
            }
            Err(e) => {
                warn!("get_reading: lookup failed id={}: {:#}", id, e);
                return Err(not_found());
            }
        };

        let card = self.resolve_card(&reading)?;
        Ok(ResolvedReading { reading, card })
    }

    /// Most recent readings, newest first
    pub async fn recent_readings(
        &self,
        category: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<ResolvedReading>, ReadingError> {
        let category = match category.filter(|c| !c.is_empty()) {
            None => None,
            Some(raw) => Some(Category::parse(raw).ok_or_else(|| {
                ReadingError::from(ValidationError::InvalidCategory {
                    provided: Some(raw.to_string()),
                })
            })?),
        };
        let limit = limit.unwrap_or(DEFAULT_LIST_LIMIT).clamp(1, MAX_LIST_LIMIT);

        let readings = self.store.recent(category, limit).await.map_err(|e| {
            error!("recent_readings: query failed: {:#}", e);
            ReadingError::storage("recent", format!("{:#}", e))
        })?;

        readings
            .into_iter()
            .map(|reading| {
                let card = self.resolve_card(&reading)?;
                Ok(ResolvedReading { reading, card })
            })
            .collect()
    }

    /// Store liveness plus static service facts
    pub async fn health(&self, uptime: Duration) -> HealthResponse {
        let status = match self.store.ping().await {
            Ok(()) => "ok",
            Err(e) => {
                error!("health: store ping failed: {:#}", e);
                "degraded"
            }
        };

        HealthResponse {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: uptime.as_secs(),
            cards: self.catalog.len(),
            store: self.store.backend().to_string(),
        }
    }

    fn resolve_card(&self, reading: &Reading) -> Result<&'static Card, ReadingError> {
        self.catalog.find_by_id(&reading.card_id).ok_or_else(|| {
            error!(
                "Reading {} references unknown card {}",
                reading.id, reading.card_id
            );
            ReadingError::CardDataInconsistent {
                card_id: reading.card_id.clone(),
            }
        })
    }
}
