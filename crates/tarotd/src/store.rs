//! Reading store.
//!
//! SQLite-backed persistent storage for readings, plus an in-memory store
//! for tests. Location: <data_local_dir>/tarot/readings.db unless configured.

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tarot_shared::{Category, NewReading, Orientation, Reading};
use uuid::Uuid;

/// Persistence boundary for readings
#[async_trait]
pub trait ReadingStore: Send + Sync {
    /// Insert a reading; the store assigns id and timestamp
    async fn insert(&self, reading: NewReading) -> Result<Reading>;

    async fn select_by_id(&self, id: &str) -> Result<Option<Reading>>;

    /// Newest first, optionally filtered by category
    async fn recent(&self, category: Option<Category>, limit: usize) -> Result<Vec<Reading>>;

    /// Cheap liveness check
    async fn ping(&self) -> Result<()>;

    /// Backend name, for health output
    fn backend(&self) -> &'static str;
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current time at the precision the database keeps
fn stored_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

// ============================================================================
// SQLite
// ============================================================================

/// Reading store backed by SQLite
pub struct SqliteReadingStore {
    conn: Arc<Mutex<Connection>>,
    db_path: PathBuf,
}

/// Raw column values, converted outside the rusqlite row callback
type ReadingRow = (String, String, String, String, String, String, String);

const SELECT_COLUMNS: &str =
    "SELECT id, category, concern, card_id, orientation, interpretation, created_at FROM readings";

impl SqliteReadingStore {
    /// Open or create the store at a specific path
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {:?}", parent))?;
            }
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {:?}", path))?;

        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
            db_path: path.to_path_buf(),
        };

        store.init_schema()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }

    fn init_schema(&self) -> Result<()> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| anyhow!("reading store lock poisoned"))?;

        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS readings (
                id TEXT PRIMARY KEY,
                category TEXT NOT NULL
                    CHECK (category IN ('love', 'career', 'relationship', 'finance', 'etc')),
                concern TEXT NOT NULL CHECK (length(concern) BETWEEN 10 AND 500),
                card_id TEXT NOT NULL,
                orientation TEXT NOT NULL CHECK (orientation IN ('upright', 'reversed')),
                interpretation TEXT NOT NULL CHECK (length(interpretation) >= 100),
                created_at TEXT NOT NULL
            )
            "#,
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_readings_created_at ON readings(created_at)",
            [],
        )?;
        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_readings_category ON readings(category)",
            [],
        )?;

        Ok(())
    }

    /// Run a closure against the connection on the blocking pool
    async fn with_conn<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let conn = conn
                .lock()
                .map_err(|_| anyhow!("reading store lock poisoned"))?;
            f(&conn)
        })
        .await
        .context("reading store task failed")?
    }
}

fn row_to_reading(row: ReadingRow) -> Result<Reading> {
    let (id, category, concern, card_id, orientation, interpretation, created_at) = row;

    let category = Category::parse(&category)
        .ok_or_else(|| anyhow!("reading {} has unknown category {:?}", id, category))?;
    let orientation = Orientation::parse(&orientation)
        .ok_or_else(|| anyhow!("reading {} has unknown orientation {:?}", id, orientation))?;
    let created_at = DateTime::parse_from_rfc3339(&created_at)
        .with_context(|| format!("reading {} has bad timestamp {:?}", id, created_at))?
        .with_timezone(&Utc);

    Ok(Reading {
        id,
        category,
        concern,
        card_id,
        orientation,
        interpretation,
        created_at,
    })
}

fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ReadingRow> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
        row.get(6)?,
    ))
}

#[async_trait]
impl ReadingStore for SqliteReadingStore {
    async fn insert(&self, new: NewReading) -> Result<Reading> {
        let reading = Reading::from_new(new_id(), stored_now(), new);
        self.with_conn(move |conn| {
            conn.execute(
                r#"
                INSERT INTO readings (id, category, concern, card_id, orientation, interpretation, created_at)
                VALUES (?, ?, ?, ?, ?, ?, ?)
                "#,
                params![
                    &reading.id,
                    reading.category.as_str(),
                    &reading.concern,
                    &reading.card_id,
                    reading.orientation.as_str(),
                    &reading.interpretation,
                    format_timestamp(&reading.created_at),
                ],
            )
            .context("Failed to insert reading")?;
            Ok(reading)
        })
        .await
    }

    async fn select_by_id(&self, id: &str) -> Result<Option<Reading>> {
        let id = id.to_string();
        self.with_conn(move |conn| {
            let row = conn
                .query_row(
                    &format!("{} WHERE id = ?", SELECT_COLUMNS),
                    params![&id],
                    read_row,
                )
                .optional()
                .context("Failed to query reading")?;
            row.map(row_to_reading).transpose()
        })
        .await
    }

    async fn recent(&self, category: Option<Category>, limit: usize) -> Result<Vec<Reading>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        self.with_conn(move |conn| {
            let rows: Vec<ReadingRow> = match category {
                Some(category) => {
                    let mut stmt = conn.prepare(&format!(
                        "{} WHERE category = ? ORDER BY created_at DESC, rowid DESC LIMIT ?",
                        SELECT_COLUMNS
                    ))?;
                    let rows = stmt
                        .query_map(params![category.as_str(), limit], read_row)?
                        .collect::<rusqlite::Result<Vec<_>>>()?;
                    rows
                }
                None => {
                    let mut stmt = conn.prepare(&format!(
                        "{} ORDER BY created_at DESC, rowid DESC LIMIT ?",
                        SELECT_COLUMNS
                    ))?;
                    let rows = stmt
                        .query_map(params![limit], read_row)?
                        .collect::<rusqlite::Result<Vec<_>>>()?;
                    rows
                }
            };
            rows.into_iter().map(row_to_reading).collect()
        })
        .await
    }

    async fn ping(&self) -> Result<()> {
        self.with_conn(|conn| {
            conn.query_row("SELECT COUNT(*) FROM readings", [], |row| row.get::<_, i64>(0))?;
            Ok(())
        })
        .await
    }

    fn backend(&self) -> &'static str {
        "sqlite"
    }
}

// ============================================================================
// In-memory (testing)
// ============================================================================

/// In-memory store. Can be told to fail writes.
#[derive(Default)]
pub struct MemoryReadingStore {
    readings: Mutex<Vec<Reading>>,
    fail_writes: AtomicBool,
}

impl MemoryReadingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent inserts fail
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.readings.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ReadingStore for MemoryReadingStore {
    async fn insert(&self, new: NewReading) -> Result<Reading> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(anyhow!("simulated write failure"));
        }
        let reading = Reading::from_new(new_id(), stored_now(), new);
        self.readings
            .lock()
            .map_err(|_| anyhow!("memory store lock poisoned"))?
            .push(reading.clone());
        Ok(reading)
    }

    async fn select_by_id(&self, id: &str) -> Result<Option<Reading>> {
        let readings = self
            .readings
            .lock()
            .map_err(|_| anyhow!("memory store lock poisoned"))?;
        Ok(readings.iter().find(|r| r.id == id).cloned())
    }

    async fn recent(&self, category: Option<Category>, limit: usize) -> Result<Vec<Reading>> {
        let readings = self
            .readings
            .lock()
            .map_err(|_| anyhow!("memory store lock poisoned"))?;
        Ok(readings
            .iter()
            .rev()
            .filter(|r| category.map_or(true, |c| r.category == c))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_reading(category: Category) -> NewReading {
        NewReading {
            category,
            concern: "요즘 일이 잘 풀리지 않아 고민입니다".to_string(),
            card_id: "major-19".to_string(),
            orientation: Orientation::Upright,
            interpretation: "해석 문장입니다. ".repeat(15),
        }
    }

    #[test]
    fn test_timestamp_round_trips() {
        let now = Utc::now();
        let text = format_timestamp(&now);
        let parsed = DateTime::parse_from_rfc3339(&text).unwrap().with_timezone(&Utc);
        assert_eq!(parsed.timestamp_micros(), now.timestamp_micros());
        assert!(text.ends_with('Z'));
    }

    #[test]
    fn test_assigned_timestamp_survives_storage_format() {
        let ts = stored_now();
        let parsed = DateTime::parse_from_rfc3339(&format_timestamp(&ts))
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(parsed, ts);
        assert_eq!(ts.timestamp_subsec_nanos() % 1_000, 0);
    }

    #[tokio::test]
    async fn test_memory_and_sqlite_agree_on_precision() {
        let dir = tempfile::TempDir::new().unwrap();
        let memory = MemoryReadingStore::new();
        let sqlite = SqliteReadingStore::open(&dir.path().join("readings.db")).unwrap();
        for store in [&memory as &dyn ReadingStore, &sqlite as &dyn ReadingStore] {
            let inserted = store.insert(new_reading(Category::Love)).await.unwrap();
            let fetched = store.select_by_id(&inserted.id).await.unwrap().unwrap();
            assert_eq!(fetched.created_at, inserted.created_at, "{}", store.backend());
        }
    }

    #[test]
    fn test_row_with_unknown_category_is_rejected() {
        let row: ReadingRow = (
            "id-1".into(),
            "weather".into(),
            "concern text here".into(),
            "major-00".into(),
            "upright".into(),
            "x".repeat(120),
            format_timestamp(&Utc::now()),
        );
        let err = row_to_reading(row).unwrap_err();
        assert!(err.to_string().contains("unknown category"));
    }

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryReadingStore::new();
        let saved = store.insert(new_reading(Category::Career)).await.unwrap();
        assert_eq!(store.len(), 1);

        let loaded = store.select_by_id(&saved.id).await.unwrap().unwrap();
        assert_eq!(loaded, saved);
        assert!(store.select_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_memory_store_failure_switch() {
        let store = MemoryReadingStore::new();
        store.set_fail_writes(true);
        assert!(store.insert(new_reading(Category::Love)).await.is_err());
        assert!(store.is_empty());

        store.set_fail_writes(false);
        assert!(store.insert(new_reading(Category::Love)).await.is_ok());
    }

    #[tokio::test]
    async fn test_memory_store_recent_is_newest_first() {
        let store = MemoryReadingStore::new();
        let first = store.insert(new_reading(Category::Love)).await.unwrap();
        let second = store.insert(new_reading(Category::Finance)).await.unwrap();
        let third = store.insert(new_reading(Category::Love)).await.unwrap();

        let all = store.recent(None, 10).await.unwrap();
        let ids: Vec<&str> = all.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec![third.id.as_str(), second.id.as_str(), first.id.as_str()]);

        let love = store.recent(Some(Category::Love), 1).await.unwrap();
        assert_eq!(love.len(), 1);
        assert_eq!(love[0].id, third.id);
    }
}
