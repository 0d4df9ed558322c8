//! # Domain Types
//!
//! Core domain types used throughout Stockroom.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Receipt      │   │   TopSeller     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id (UUID)      │   │  id             │       │
//! │  │  name           │   │  receipt_number │   │  name           │       │
//! │  │  unit_price     │   │  name snapshot  │   │  units_sold     │       │
//! │  │  stock_quantity │   │  total          │   └─────────────────┘       │
//! │  │  units_sold     │   │  purchased_at   │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  ProductDraft   │   │   IdPolicy      │   │  StoreConfig    │       │
//! │  │  (add input)    │   │  AutoIncrement  │   │  id_policy      │       │
//! │  │                 │   │  ExplicitReq.   │   │  currency, top n│       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Receipts carry both a UUID (`id`) and a human-readable business number
//! (`receipt_number`). Products only need the numeric id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{CoreError, ValidationError};
use crate::money::Money;
use crate::DEFAULT_TOP_N;

// =============================================================================
// Product Id
// =============================================================================

/// Positive, unique, immutable product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Wraps a raw id. Positivity is checked by the store, not here.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        ProductId(raw)
    }

    /// Returns the raw numeric value.
    #[inline]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for ProductId {
    fn from(raw: u64) -> Self {
        ProductId(raw)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product on the shelf.
///
/// `stock_quantity` and `units_sold` only change through
/// [`Store::purchase`](crate::Store::purchase), which keeps
/// `stock_quantity + units_sold` constant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub stock_quantity: u64,
    pub units_sold: u64,
}

impl Product {
    /// Checks if `quantity` units can be taken from stock.
    #[inline]
    pub fn can_sell(&self, quantity: u64) -> bool {
        quantity <= self.stock_quantity
    }
}

/// Input for [`Store::add_product`](crate::Store::add_product).
///
/// Price and stock are signed so out-of-range input reaches validation
/// instead of being unrepresentable at the call site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    /// Caller-chosen id. Required under [`IdPolicy::ExplicitRequired`],
    /// rejected under [`IdPolicy::AutoIncrement`].
    pub id: Option<ProductId>,
    pub name: String,
    pub unit_price: Money,
    pub stock: i64,
}

impl ProductDraft {
    /// Draft without an id, for auto-increment stores.
    pub fn new(name: impl Into<String>, unit_price: Money, stock: i64) -> Self {
        ProductDraft {
            id: None,
            name: name.into(),
            unit_price,
            stock,
        }
    }

    /// Sets the explicit id.
    pub fn with_id(mut self, id: impl Into<ProductId>) -> Self {
        self.id = Some(id.into());
        self
    }
}

// =============================================================================
// Id Policy
// =============================================================================

/// How products get their ids.
///
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  AUTO_INCREMENT (default)                                               │
/// │  • Store mints ids from its registration log counter: 1, 2, 3, ...      │
/// │  • Drafts must not carry an id                                          │
/// │                                                                         │
/// │  EXPLICIT_REQUIRED                                                      │
/// │  • Caller supplies every id                                             │
/// │  • Reusing an id fails with DuplicateId                                 │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdPolicy {
    #[default]
    AutoIncrement,
    ExplicitRequired,
}

impl fmt::Display for IdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdPolicy::AutoIncrement => write!(f, "auto_increment"),
            IdPolicy::ExplicitRequired => write!(f, "explicit_required"),
        }
    }
}

impl FromStr for IdPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" | "auto_increment" | "autoincrement" => Ok(IdPolicy::AutoIncrement),
            "explicit" | "explicit_required" | "manual" => Ok(IdPolicy::ExplicitRequired),
            other => Err(ValidationError::Unrecognized {
                field: "id policy".to_string(),
                value: other.to_string(),
            }
            .into()),
        }
    }
}

// =============================================================================
// Store Configuration
// =============================================================================

/// Construction-time settings for a [`Store`](crate::Store).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub id_policy: IdPolicy,
    /// Symbol used when rendering receipt text.
    pub currency_symbol: String,
    /// How many best sellers to report when the caller does not say.
    pub default_top_n: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            id_policy: IdPolicy::AutoIncrement,
            currency_symbol: "$".to_string(),
            default_top_n: DEFAULT_TOP_N,
        }
    }
}

impl StoreConfig {
    /// Default configuration with the given id policy.
    pub fn with_policy(id_policy: IdPolicy) -> Self {
        StoreConfig {
            id_policy,
            ..StoreConfig::default()
        }
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// Immutable record of one purchase, stored in the purchase-history log.
///
/// Name and unit price are frozen at purchase time so the receipt reads the
/// same no matter what happens to the product afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub id: Uuid,
    /// 1-based, increasing with every purchase.
    pub receipt_number: u64,
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u64,
    pub unit_price: Money,
    pub total: Money,
    pub purchased_at: DateTime<Utc>,
}

impl Receipt {
    /// One-line receipt text, e.g. `Purchased 2 x Laptop for $1999.98`.
    pub fn render(&self, currency_symbol: &str) -> String {
        format!(
            "Purchased {} x {} for {}",
            self.quantity,
            self.product_name,
            self.total.format_with(currency_symbol)
        )
    }
}

// =============================================================================
// Purchase Outcome / Top Seller
// =============================================================================

/// What a successful purchase reports back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOutcome {
    pub total_cost: Money,
    /// Product state right after the purchase.
    pub product: Product,
    pub receipt: Receipt,
}

/// One row of the best-seller report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopSeller {
    pub id: ProductId,
    pub name: String,
    pub units_sold: u64,
}

// =============================================================================
// Unit Tests
// =============================================================================
