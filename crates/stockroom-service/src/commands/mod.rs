//! # Commands Module
//!
//! Everything callers can do to a store.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── product.rs  ◄─── add_product, find_product, list_products, recently_added
//! └── sale.rs     ◄─── purchase, purchase_history, receipts, top_selling
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  fn purchase(                                                           │
//! │      store: &StoreState,     ◄── shared state, passed explicitly        │
//! │      product: &str,          ◄── id digits or a name                    │
//! │      quantity: i64,          ◄── raw caller input, validated in core    │
//! │  ) -> Result<PurchaseDto, ApiError>                                     │
//! │         │                                                               │
//! │         │ (serde, camelCase)                                            │
//! │         ▼                                                               │
//! │  { "productName": "Laptop", "totalCents": 199998, ... }                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands never hold the lock across more than one store call, and never
//! hand out references into the store: every response is an owned DTO.

pub mod product;
pub mod sale;
