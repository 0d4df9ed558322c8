//! # stockroom-core: Pure Inventory Logic for Stockroom
//!
//! This crate is the **heart** of Stockroom. It owns the product catalog,
//! the purchase log and the best-seller ranking, and glues them together with
//! a single purchase transaction. Nothing in here touches disk, network or
//! the environment.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Callers (menu, GUI, command handlers)              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │          stockroom-service (StoreState, commands)               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ stockroom-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │                        ┌───────────┐                            │   │
//! │  │                        │   Store   │                            │   │
//! │  │                        └─────┬─────┘                            │   │
//! │  │          ┌───────────────────┼───────────────────┐              │   │
//! │  │   ┌──────▼──────┐    ┌───────▼──────┐    ┌───────▼──────┐       │   │
//! │  │   │ KeyedCatalog│    │ SequenceLog  │    │ RankingHeap  │       │   │
//! │  │   │ id → Product│    │ receipts,    │    │ units sold   │       │   │
//! │  │   │ name index  │    │ id generator │    │ (live keys)  │       │   │
//! │  │   └─────────────┘    └──────────────┘    └──────────────┘       │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • SINGLE OWNER              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Receipt, TopSeller, config)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//! - [`catalog`] - Products keyed by id, with a case-insensitive name index
//! - [`sequence_log`] - Append-at-head singly-linked log
//! - [`ranking`] - Index-addressable max-heap for best sellers
//! - [`store`] - The orchestrator and its purchase transaction
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::{Money, ProductDraft, Store, StoreConfig};
//!
//! let mut store = Store::new(StoreConfig::default());
//! store
//!     .add_product(ProductDraft::new("Laptop", Money::from_cents(99_999), 5))
//!     .unwrap();
//!
//! let outcome = store.purchase("laptop", 2).unwrap();
//! assert_eq!(outcome.total_cost.cents(), 199_998);
//! assert_eq!(outcome.product.stock_quantity, 3);
//!
//! let top = store.top_selling(1);
//! assert_eq!(top[0].name, "Laptop");
//! assert_eq!(top[0].units_sold, 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod ranking;
pub mod sequence_log;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use stockroom_core::Store` instead of
// `use stockroom_core::store::Store`

pub use catalog::KeyedCatalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use ranking::{RankEntry, RankingHeap};
pub use sequence_log::{SequenceLog, Snapshot};
pub use store::Store;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of best sellers reported when the caller does not say.
pub const DEFAULT_TOP_N: usize = 3;

/// Maximum length of a product name, in characters.
pub const MAX_NAME_LEN: usize = 200;
