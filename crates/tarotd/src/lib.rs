//! Tarot reading daemon library.
//!
//! Exposes the reading pipeline and its collaborators so integration tests
//! can drive them without a network or a real text-generation backend.

pub mod config;
pub mod generator;
pub mod llm_client;
pub mod pipeline;
pub mod routes;
pub mod sampler;
pub mod server;
pub mod store;

pub use config::Config;
pub use generator::InterpretationGenerator;
pub use llm_client::{FakeTextGenerator, GeminiClient, GenerationParams, TextGenerator};
pub use pipeline::{ReadingPipeline, ResolvedReading};
pub use server::{build_router, AppState};
pub use store::{MemoryReadingStore, ReadingStore, SqliteReadingStore};
