//! # State Module
//!
//! Shared state handed to every command.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐            ┌──────────────────────┐               │
//! │  │   ConfigState    │ ─────────► │     StoreState       │               │
//! │  │                  │  builds    │                      │               │
//! │  │  id_policy       │            │  Arc<Mutex<Store>>   │               │
//! │  │  currency_symbol │            │                      │               │
//! │  │  default_top_n   │            │                      │               │
//! │  └──────────────────┘            └──────────────────────┘               │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • StoreState: one lock around the whole store, so a purchase is       │
//! │    a single critical section                                           │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod store;

pub use config::{ConfigState, ENV_CURRENCY_SYMBOL, ENV_ID_POLICY, ENV_TOP_N};
pub use store::StoreState;
