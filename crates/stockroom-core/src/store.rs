//! # Store
//!
//! Owns the catalog, both logs and the ranking heap, and runs the purchase
//! transaction that ties them together.
//!
//! ## Purchase Transaction
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  purchase("laptop", 2)                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. RESOLVE   all digits? ── yes ─► find_by_id                          │
//! │               │                                                         │
//! │               └──────────── no ──► find_by_name (case-insensitive)      │
//! │               miss ─► ProductNotFound                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  2. VALIDATE  qty <= 0 ─► InvalidQuantity                               │
//! │               qty > stock ─► InsufficientStock                          │
//! │               price × qty overflows ─► InvalidQuantity                  │
//! │       │       (nothing has been mutated up to here)                     │
//! │       ▼                                                                 │
//! │  3. APPLY     stock -= qty, units_sold += qty                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  4. RECORD    ranking.insert(units_sold, id)   (in-place update)        │
//! │               history.append(Receipt)                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  5. REPORT    PurchaseOutcome { total_cost, product, receipt }          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store is single-threaded by construction (`&mut self`). Callers that
//! share it across threads wrap it in a mutex, which makes steps 1-4 one
//! critical section.

use chrono::Utc;
use std::cmp::Reverse;
use tracing::{debug, info};
use uuid::Uuid;

use crate::catalog::KeyedCatalog;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::ranking::RankingHeap;
use crate::sequence_log::{SequenceLog, Snapshot};
use crate::types::{
    IdPolicy, Product, ProductDraft, ProductId, PurchaseOutcome, Receipt, StoreConfig, TopSeller,
};
use crate::validation::{
    validate_product_id, validate_product_name, validate_quantity, validate_stock,
    validate_unit_price,
};

#[derive(Debug)]
pub struct Store {
    config: StoreConfig,
    catalog: KeyedCatalog,
    /// Purchase receipts, newest first.
    history: SequenceLog<Receipt>,
    /// Registered product ids, newest first. Mints ids in auto mode.
    registrations: SequenceLog<ProductId>,
    ranking: RankingHeap<ProductId>,
}

impl Default for Store {
    fn default() -> Self {
        Store::new(StoreConfig::default())
    }
}

impl Store {
    pub fn new(config: StoreConfig) -> Self {
        debug!(id_policy = %config.id_policy, "Creating store");
        Store {
            config,
            catalog: KeyedCatalog::new(),
            history: SequenceLog::new(),
            registrations: SequenceLog::new(),
            ranking: RankingHeap::new(),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Registers a new product with `units_sold = 0`.
    ///
    /// ## Errors
    /// - `InvalidInput`: blank or overlong name, negative price or stock,
    ///   id missing/zero (explicit mode) or present (auto mode)
    /// - `DuplicateId`: explicit id already registered
    pub fn add_product(&mut self, draft: ProductDraft) -> CoreResult<Product> {
        let result = self.register(draft);
        match &result {
            Ok(product) => info!(
                id = %product.id,
                name = %product.name,
                stock = product.stock_quantity,
                "Product added"
            ),
            Err(err) => debug!(error = %err, "Product rejected"),
        }
        result
    }

    /// Looks a product up by caller-supplied text.
    ///
    /// All-digit text is treated as an id, anything else as a name.
    pub fn find_product(&self, identifier: &str) -> CoreResult<&Product> {
        let identifier = identifier.trim();
        let found = if is_numeric_id(identifier) {
            // Too many digits for a u64 cannot name any product
            identifier
                .parse::<u64>()
                .ok()
                .and_then(|raw| self.catalog.find_by_id(ProductId::new(raw)))
        } else {
            self.catalog.find_by_name(identifier)
        };

        found.ok_or_else(|| CoreError::ProductNotFound(identifier.to_string()))
    }

    pub fn find_by_id(&self, id: ProductId) -> CoreResult<&Product> {
        self.catalog
            .find_by_id(id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))
    }

    /// Case-insensitive name lookup; lowest id wins on duplicates.
    pub fn find_by_name(&self, name: &str) -> CoreResult<&Product> {
        self.catalog
            .find_by_name(name)
            .ok_or_else(|| CoreError::ProductNotFound(name.trim().to_string()))
    }

    /// All products, ascending by id.
    pub fn list_products(&self) -> Vec<Product> {
        self.catalog.list_ordered_by_id().cloned().collect()
    }

    /// The `n` most recently registered products, newest first.
    pub fn recently_added(&self, n: usize) -> Vec<Product> {
        self.registrations
            .iter()
            .take(n)
            .filter_map(|id| self.catalog.find_by_id(*id))
            .cloned()
            .collect()
    }

    pub fn product_count(&self) -> usize {
        self.catalog.len()
    }

    // =========================================================================
    // Purchases
    // =========================================================================

    /// Runs the purchase transaction. See the module docs for the steps.
    ///
    /// On any error the store is left exactly as it was.
    pub fn purchase(&mut self, identifier: &str, quantity: i64) -> CoreResult<PurchaseOutcome> {
        let result = self.apply_purchase(identifier, quantity);
        match &result {
            Ok(outcome) => info!(
                id = %outcome.product.id,
                quantity = outcome.receipt.quantity,
                total = %outcome.total_cost,
                remaining = outcome.product.stock_quantity,
                receipt_number = outcome.receipt.receipt_number,
                "Purchase recorded"
            ),
            Err(err) => debug!(identifier = %identifier, quantity, error = %err, "Purchase rejected"),
        }
        result
    }

    /// Up to `n` best sellers, highest current `units_sold` first.
    ///
    /// Products that were never purchased are not ranked. Calling this twice
    /// without a purchase in between returns the same list.
    pub fn top_selling(&mut self, n: usize) -> Vec<TopSeller> {
        let mut top: Vec<TopSeller> = self
            .ranking
            .top(n)
            .into_iter()
            .filter_map(|entry| self.catalog.find_by_id(entry.key))
            .map(|product| TopSeller {
                id: product.id,
                name: product.name.clone(),
                units_sold: product.units_sold,
            })
            .collect();

        // Counts come from the catalog, so order by them rather than by rank.
        top.sort_by_key(|seller| (Reverse(seller.units_sold), seller.id));
        top
    }

    /// Receipt lines, newest first.
    pub fn purchase_history(&self) -> Vec<String> {
        self.history
            .iter()
            .map(|receipt| receipt.render(&self.config.currency_symbol))
            .collect()
    }

    /// Structured receipts, newest first.
    pub fn receipts(&self) -> Vec<Receipt> {
        self.history.iter().cloned().collect()
    }

    /// Frozen view of the purchase history; later purchases do not show up.
    pub fn history_snapshot(&self) -> Snapshot<Receipt> {
        self.history.snapshot()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn register(&mut self, draft: ProductDraft) -> CoreResult<Product> {
        let name = validate_product_name(&draft.name)?;
        validate_unit_price(draft.unit_price)?;
        let stock = validate_stock(draft.stock)?;

        let id = match (self.config.id_policy, draft.id) {
            (IdPolicy::AutoIncrement, None) => ProductId::new(self.registrations.next_id()),
            (IdPolicy::AutoIncrement, Some(_)) => {
                return Err(ValidationError::AutoAssigned {
                    field: "id".to_string(),
                }
                .into())
            }
            (IdPolicy::ExplicitRequired, Some(id)) => {
                validate_product_id(id)?;
                id
            }
            (IdPolicy::ExplicitRequired, None) => {
                return Err(ValidationError::Required {
                    field: "id".to_string(),
                }
                .into())
            }
        };

        let product = Product {
            id,
            name,
            unit_price: draft.unit_price,
            stock_quantity: stock,
            units_sold: 0,
        };
        self.catalog.insert(product.clone())?;
        self.registrations.append(id);
        Ok(product)
    }

    fn apply_purchase(&mut self, identifier: &str, quantity: i64) -> CoreResult<PurchaseOutcome> {
        // Resolve + validate against an immutable borrow
        let (id, qty, total_cost) = {
            let product = self.find_product(identifier)?;
            let qty = validate_quantity(quantity)?;
            if !product.can_sell(qty) {
                return Err(CoreError::InsufficientStock {
                    product: product.name.clone(),
                    available: product.stock_quantity,
                    requested: qty,
                });
            }
            let total_cost = product
                .unit_price
                .checked_mul_quantity(qty)
                .ok_or(CoreError::InvalidQuantity { requested: quantity })?;
            (product.id, qty, total_cost)
        };

        // Apply
        let product = self
            .catalog
            .get_mut(id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))?;
        product.stock_quantity -= qty;
        product.units_sold += qty;
        let product = product.clone();

        // Record
        self.ranking.insert(product.units_sold, id);
        let receipt = Receipt {
            id: Uuid::new_v4(),
            receipt_number: self.history.next_id(),
            product_id: id,
            product_name: product.name.clone(),
            quantity: qty,
            unit_price: product.unit_price,
            total: total_cost,
            purchased_at: Utc::now(),
        };
        self.history.append(receipt.clone());

        Ok(PurchaseOutcome {
            total_cost,
            product,
            receipt,
        })
    }
}

fn is_numeric_id(identifier: &str) -> bool {
    !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit())
}

// =============================================================================
// Unit Tests
// =============================================================================
