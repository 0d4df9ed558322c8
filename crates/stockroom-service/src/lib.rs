//! # Stockroom Service Library
//!
//! Shared state and command functions on top of `stockroom-core`.
//! Menus, GUIs and request handlers call into this crate; none of them touch
//! the [`Store`](stockroom_core::Store) directly.
//!
//! ## Module Organization
//! ```text
//! stockroom_service/
//! ├── lib.rs          ◄─── You are here (tracing setup, bootstrap)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── store.rs    ◄─── Shared store (Arc<Mutex<Store>>)
//! │   └── config.rs   ◄─── Configuration from the environment
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Registration, lookup, listing
//! │   └── sale.rs     ◄─── Purchases, history, best sellers
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Typical Startup
//! ```rust
//! use stockroom_service::{commands, init_tracing, state::ConfigState};
//!
//! init_tracing();
//! let store = ConfigState::from_env().into_store_state();
//!
//! let laptop = commands::product::add_product(
//!     &store,
//!     commands::product::NewProduct {
//!         id: None,
//!         name: "Laptop".to_string(),
//!         unit_price_cents: 99_999,
//!         stock: 5,
//!     },
//! )
//! .unwrap();
//! assert_eq!(laptop.stock_quantity, 5);
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages everywhere
/// - `RUST_LOG=stockroom_core=trace` - Trace the core crate only
/// - Default: INFO, DEBUG for stockroom crates
///
/// Returns `false` when a subscriber was already installed (tests, embedding
/// applications); the existing one is kept.
pub fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,stockroom_core=debug,stockroom_service=debug")
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
