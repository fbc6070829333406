//! Abeer Hotel Storefront - bilingual restaurant storefront
//!
//! # Architecture overview
//!
//! A client-local storefront: static menu, per-item option selection and
//! a shopping cart mirrored to an embedded key-value store. The core is
//! the cart state machine; everything else is a thin layer around it.
//!
//! - **Cart engine** (`cart`): identity keys, merge/update/remove, money
//! - **Catalog** (`catalog`): the built-in menu and read-only lookup
//! - **Persistence** (`storage`): redb mirror of `{language, cart}`
//! - **Controller** (`core`): `Storefront` owning the app state
//! - **Terminal UI** (`ui`): ratatui presentation layer
//!
//! # Module structure
//!
//! ```text
//! storefront/src/
//! ├── core/      # Config, controller
//! ├── cart/      # identity key, mutations, money
//! ├── catalog/   # menu data, read-only accessor
//! ├── storage/   # redb persistence
//! ├── i18n.rs    # UI string tables
//! ├── ui/        # terminal front end
//! └── utils/     # logging setup
//! ```

pub mod cart;
pub mod catalog;
pub mod core;
pub mod i18n;
pub mod storage;
pub mod ui;
pub mod utils;

// Re-export public types
pub use cart::{QuantityOutcome, cart_total, item_count, line_key};
pub use catalog::Catalog;
pub use core::{Config, Notice, Storefront};
pub use shared::{AppState, CartLine, Language, LocalizedText, Product, SelectedOptions};
pub use storage::{StateStore, StorageError, StorageResult};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger, init_logger_with_file};

/// Prepare the process environment: `.env`, file logging, log cleanup
///
/// Reads configuration from the environment on its own; callers load
/// their [`Config`] afterwards.
pub fn setup_environment() -> anyhow::Result<()> {
    // A missing .env file is fine
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(&config.log_level, config.log_json, &config.log_dir)?;

    if let Err(e) = cleanup_old_logs(&config.log_dir) {
        tracing::warn!(error = %e, "Failed to clean up old log files");
    }

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ___    __
   /   |  / /_  ___  ___  _____
  / /| | / __ \/ _ \/ _ \/ ___/
 / ___ |/ /_/ /  __/  __/ /
/_/  |_/_.___/\___/\___/_/
    "#
    );
}
