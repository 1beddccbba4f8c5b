// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Card, Transaction};
use crate::store::RecordStore;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const TRANSACTIONS_KEY: &str = "transactions";
pub const CARDS_KEY: &str = "cards";
pub const DB_ENV: &str = "FINANCAS_DB";

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.financas", "Financas", "financas"));

/// Durable key-value store holding one serialized blob per collection.
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
}

pub fn db_path() -> Result<PathBuf> {
    if let Ok(p) = std::env::var(DB_ENV) {
        if !p.trim().is_empty() {
            return Ok(PathBuf::from(p));
        }
    }
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("financas.sqlite"))
}

pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        let conn =
            Connection::open(path).with_context(|| format!("Open DB at {}", path.display()))?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_or_init() -> Result<Self> {
        Self::open(&db_path()?)
    }

    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }
}

fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS kv(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );
    "#,
    )?;
    Ok(())
}

impl Storage for SqliteStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let v: Option<String> = self
            .conn
            .query_row("SELECT value FROM kv WHERE key=?1", params![key], |r| {
                r.get(0)
            })
            .optional()
            .with_context(|| format!("Read '{}'", key))?;
        Ok(v)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO kv(key, value) VALUES(?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value=excluded.value",
                params![key, value],
            )
            .with_context(|| format!("Write '{}'", key))?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv", [])
            .context("Clear stored data")?;
        Ok(())
    }
}

/// Storage that lives and dies with the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    blobs: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.blobs.clear();
        Ok(())
    }
}

/// Reads both collections. A missing, unreadable or malformed blob yields an
/// empty collection; the other collection is unaffected.
pub fn load<S: Storage + ?Sized>(storage: &S) -> RecordStore {
    let transactions: Vec<Transaction> = load_collection(storage, TRANSACTIONS_KEY);
    let cards: Vec<Card> = load_collection(storage, CARDS_KEY);
    RecordStore::from_parts(transactions, cards)
}

fn load_collection<T, S>(storage: &S, key: &str) -> Vec<T>
where
    T: DeserializeOwned,
    S: Storage + ?Sized,
{
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::error!(key, error = %format!("{:#}", e), "failed to read stored collection");
            return Vec::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(key, error = %e, "stored collection is malformed, starting empty");
            Vec::new()
        }
    }
}

pub fn save_transactions<S: Storage + ?Sized>(
    storage: &mut S,
    transactions: &[Transaction],
) -> Result<()> {
    let blob = serde_json::to_string(transactions)?;
    storage.set(TRANSACTIONS_KEY, &blob)?;
    tracing::debug!(count = transactions.len(), "saved transactions");
    Ok(())
}

pub fn save_cards<S: Storage + ?Sized>(storage: &mut S, cards: &[Card]) -> Result<()> {
    let blob = serde_json::to_string(cards)?;
    storage.set(CARDS_KEY, &blob)?;
    tracing::debug!(count = cards.len(), "saved cards");
    Ok(())
}

pub fn clear<S: Storage + ?Sized>(storage: &mut S) -> Result<()> {
    storage.clear()
}
