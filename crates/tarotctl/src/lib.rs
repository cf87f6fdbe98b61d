//! tarotctl library: daemon client, local history and terminal output.

pub mod client;
pub mod history;
pub mod output;

pub use client::{CatalogCard, ServerError, TarotClient, DEFAULT_SERVER};
pub use history::{History, HistoryEntry, MAX_HISTORY};
