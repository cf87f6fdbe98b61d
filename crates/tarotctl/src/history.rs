//! Local reading history.
//!
//! Keeps summaries of the most recent readings drawn from this machine in
//! `<data_local_dir>/tarot/history.json`. Entries are keyed by reading id;
//! recording an id again moves it to the front.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tarot_shared::{Category, Orientation, ReadingResponse};

/// Maximum number of entries kept
pub const MAX_HISTORY: usize = 20;

const HISTORY_FILE: &str = "history.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub category: Category,
    pub card_id: String,
    pub card_name: String,
    pub orientation: Orientation,
    pub saved_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Summarize a reading returned by the daemon
    pub fn from_response(response: &ReadingResponse, category: Category) -> Self {
        Self {
            id: response.id.clone(),
            category: response.category.unwrap_or(category),
            card_id: response.card.id.clone(),
            card_name: response.card.name.clone(),
            orientation: response.orientation,
            saved_at: response.created_at.unwrap_or_else(Utc::now),
        }
    }
}

/// Newest-first bounded list of readings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Default file location
    pub fn default_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tarot")
            .join(HISTORY_FILE)
    }

    /// Load history; a missing file is an empty history
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read history: {}", path.display()))?;
        let mut history: History = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse history: {}", path.display()))?;
        history.entries.truncate(MAX_HISTORY);
        Ok(history)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write history: {}", path.display()))
    }

    /// Put an entry at the front, dropping any older copy and the overflow
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.retain(|e| e.id != entry.id);
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_HISTORY);
    }

    /// Record one entry into the history file at `path`.
    ///
    /// An unreadable file is left untouched and the error is returned.
    pub fn record_to(path: &Path, entry: HistoryEntry) -> Result<()> {
        let mut history = Self::load(path)?;
        history.record(entry);
        history.save(path)
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
