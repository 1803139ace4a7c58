use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::PathBuf;

use crate::generation::GenerationRequest;
use crate::paths;

/// SQLite-backed cache of completed generations.
///
/// Keyed by [`GenerationRequest::cache_key`], so a cache entry is only
/// reused for the same prompt, model, endpoint and temperature.
pub struct CacheManager {
    db_path: PathBuf,
}

impl CacheManager {
    pub fn new() -> Result<Self> {
        let cache_dir = paths::cache_dir();

        std::fs::create_dir_all(&cache_dir)
            .with_context(|| format!("Failed to create cache directory: {}", cache_dir.display()))?;

        let manager = Self {
            db_path: cache_dir.join("generations.db"),
        };
        manager.init_db()?;

        Ok(manager)
    }

    fn init_db(&self) -> Result<()> {
        let conn = self.connect()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS generations (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                cache_key TEXT UNIQUE NOT NULL,
                prompt TEXT NOT NULL,
                generated_text TEXT NOT NULL,
                model TEXT NOT NULL,
                endpoint TEXT NOT NULL,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                accessed_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )
        .context("Failed to create generations table")?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_cache_key ON generations(cache_key)",
            [],
        )
        .context("Failed to create index")?;

        Ok(())
    }

    fn connect(&self) -> Result<Connection> {
        Connection::open(&self.db_path)
            .with_context(|| format!("Failed to open cache database: {}", self.db_path.display()))
    }

    pub fn get(&self, request: &GenerationRequest) -> Result<Option<String>> {
        let cache_key = request.cache_key();
        let conn = self.connect()?;

        let mut stmt =
            conn.prepare("SELECT generated_text FROM generations WHERE cache_key = ?1")?;

        let result: Option<String> = stmt.query_row([&cache_key], |row| row.get(0)).ok();

        if result.is_some() {
            conn.execute(
                "UPDATE generations SET accessed_at = CURRENT_TIMESTAMP WHERE cache_key = ?1",
                [&cache_key],
            )?;
        }

        Ok(result)
    }

    pub fn put(&self, request: &GenerationRequest, generated_text: &str) -> Result<()> {
        let cache_key = request.cache_key();
        let conn = self.connect()?;

        conn.execute(
            "INSERT OR REPLACE INTO generations
             (cache_key, prompt, generated_text, model, endpoint)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            [
                &cache_key,
                &request.prompt,
                generated_text,
                &request.model,
                &request.endpoint,
            ],
        )
        .context("Failed to insert generation into cache")?;

        Ok(())
    }
}
