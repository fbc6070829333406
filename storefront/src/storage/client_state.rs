//! redb-based storage for the client-local UI state
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `client_state` | `"language"` | language code (`"ar"` / `"en"`) | Language preference |
//! | `client_state` | `"cart"` | JSON-serialized `Vec<CartLine>` | Cart mirror |
//!
//! The cart and language are mirrored here after every mutation so a
//! restart picks up where the customer left off. Loading is lenient:
//! a missing or unreadable value falls back to the default (Arabic,
//! empty cart) with a warning instead of failing startup. Only real
//! database faults surface as errors.

use redb::{Database, ReadableDatabase, TableDefinition};
use shared::{AppState, CartLine, Language};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

/// Single key/value table holding the persisted UI state
const STATE_TABLE: TableDefinition<&str, &str> = TableDefinition::new("client_state");

const KEY_LANGUAGE: &str = "language";
const KEY_CART: &str = "cart";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Client state store backed by redb
#[derive(Clone)]
pub struct StateStore {
    db: Arc<Database>,
}

impl StateStore {
    /// Open or create the database at the given path
    ///
    /// redb commits with `Durability::Immediate`, so every saved mutation
    /// is on disk before the call returns and the file stays consistent
    /// across unexpected shutdowns.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;

        // Create the table if it doesn't exist
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(STATE_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(STATE_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Persist the language preference
    pub fn save_language(&self, language: Language) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(STATE_TABLE)?;
            table.insert(KEY_LANGUAGE, language.code())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Persist the cart lines as JSON
    pub fn save_cart(&self, lines: &[CartLine]) -> StorageResult<()> {
        let json = serde_json::to_string(lines)?;

        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(STATE_TABLE)?;
            table.insert(KEY_CART, json.as_str())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Load the persisted state, falling back field-by-field on bad data
    ///
    /// An unknown language code or an unparseable cart value is logged and
    /// replaced with its default; one bad field never poisons the other.
    pub fn load_state(&self) -> StorageResult<AppState> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(STATE_TABLE)?;

        let language = match table.get(KEY_LANGUAGE)? {
            Some(guard) => {
                let code = guard.value();
                match Language::from_code(code) {
                    Some(lang) => lang,
                    None => {
                        warn!(code = %code, "Stored language code is unknown, using Arabic");
                        Language::default()
                    }
                }
            }
            None => Language::default(),
        };

        let cart = match table.get(KEY_CART)? {
            Some(guard) => match serde_json::from_str::<Vec<CartLine>>(guard.value()) {
                Ok(lines) => lines,
                Err(e) => {
                    warn!(error = %e, "Stored cart is unreadable, starting empty");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        Ok(AppState { language, cart })
    }
}
