//! # Product Commands
//!
//! Registration, lookup and listing.
//!
//! ## Lookup Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  find_product(&store, "  7 ")                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  trim ──► "7"                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌───────────────────────────────────────────┐                         │
//! │  │  All ASCII digits?                        │                         │
//! │  │  YES: exact id lookup                     │                         │
//! │  │  NO:  case-insensitive name lookup        │                         │
//! │  └───────────────────────────────────────────┘                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ProductDto, or NOT_FOUND                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

use crate::error::ApiError;
use crate::state::StoreState;
use stockroom_core::{Money, Product, ProductDraft, ProductId};

/// Product DTO (Data Transfer Object) for callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: u64,
    pub name: String,
    pub unit_price_cents: i64,
    pub stock_quantity: u64,
    pub units_sold: u64,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        ProductDto {
            id: p.id.get(),
            name: p.name,
            unit_price_cents: p.unit_price.cents(),
            stock_quantity: p.stock_quantity,
            units_sold: p.units_sold,
        }
    }
}

/// Request body for [`add_product`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    /// Only for stores configured with explicit ids.
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    pub unit_price_cents: i64,
    pub stock: i64,
}

impl From<NewProduct> for ProductDraft {
    fn from(req: NewProduct) -> Self {
        let draft = ProductDraft::new(req.name, Money::from_cents(req.unit_price_cents), req.stock);
        match req.id {
            Some(id) => draft.with_id(ProductId::new(id)),
            None => draft,
        }
    }
}

/// Registers a product.
///
/// ## Errors
/// - `VALIDATION_ERROR`: blank name, negative price/stock, id policy mismatch
/// - `DUPLICATE_ID`: explicit id already taken
pub fn add_product(store: &StoreState, request: NewProduct) -> Result<ProductDto, ApiError> {
    let start = Instant::now();
    debug!(name = %request.name, id = ?request.id, "add_product command");

    let product = store.with_store_mut(|s| s.add_product(request.into()))?;

    debug!(id = %product.id, elapsed_us = start.elapsed().as_micros() as u64, "add_product done");
    Ok(product.into())
}

/// Looks a product up by id digits or by name.
pub fn find_product(store: &StoreState, query: &str) -> Result<ProductDto, ApiError> {
    let start = Instant::now();
    debug!(query = %query, "find_product command");

    let product = store.with_store(|s| s.find_product(query).cloned())?;

    debug!(
        id = %product.id,
        elapsed_us = start.elapsed().as_micros() as u64,
        "find_product done"
    );
    Ok(product.into())
}

/// All products, ascending by id.
pub fn list_products(store: &StoreState) -> Result<Vec<ProductDto>, ApiError> {
    let start = Instant::now();
    let products = store.with_store(|s| s.list_products());

    debug!(
        count = products.len(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "list_products command"
    );
    Ok(products.into_iter().map(ProductDto::from).collect())
}

/// Most recently registered products, newest first.
///
/// `limit` defaults to 10.
pub fn recently_added(store: &StoreState, limit: Option<usize>) -> Result<Vec<ProductDto>, ApiError> {
    let limit = limit.unwrap_or(10);
    debug!(limit = limit, "recently_added command");

    let products = store.with_store(|s| s.recently_added(limit));
    Ok(products.into_iter().map(ProductDto::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use stockroom_core::{IdPolicy, Store, StoreConfig};

    fn new_product(name: &str, price: i64, stock: i64) -> NewProduct {
        NewProduct {
            id: None,
            name: name.to_string(),
            unit_price_cents: price,
            stock,
        }
    }

    #[test]
    fn test_add_and_find() {
        let store = StoreState::default();
        let added = add_product(&store, new_product("Laptop", 99_999, 5)).unwrap();
        assert_eq!(added.id, 1);

        assert_eq!(find_product(&store, "1").unwrap(), added);
        assert_eq!(find_product(&store, "LAPTOP").unwrap(), added);

        let err = find_product(&store, "Tablet").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_add_rejects_bad_input() {
        let store = StoreState::default();
        let err = add_product(&store, new_product(" ", 100, 1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(list_products(&store).unwrap().is_empty());
    }

    #[test]
    fn test_explicit_ids_and_duplicates() {
        let store = StoreState::new(Store::new(StoreConfig::with_policy(
            IdPolicy::ExplicitRequired,
        )));
        let mut request = new_product("Laptop", 100, 1);
        request.id = Some(42);
        add_product(&store, request.clone()).unwrap();

        request.name = "Tablet".to_string();
        let err = add_product(&store, request).unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateId);
        assert_eq!(find_product(&store, "42").unwrap().name, "Laptop");
    }

    #[test]
    fn test_list_and_recently_added_order() {
        let store = StoreState::default();
        for name in ["Laptop", "Mouse", "Monitor"] {
            add_product(&store, new_product(name, 100, 1)).unwrap();
        }

        let ids: Vec<u64> = list_products(&store).unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let recent: Vec<String> = recently_added(&store, Some(2))
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(recent, vec!["Monitor".to_string(), "Mouse".to_string()]);
    }

    #[test]
    fn test_dto_is_camel_case() {
        let request: NewProduct = serde_json::from_str(
            r#"{ "name": "Mouse", "unitPriceCents": 1999, "stock": 3 }"#,
        )
        .unwrap();
        assert_eq!(request.id, None);

        let store = StoreState::default();
        let dto = add_product(&store, request).unwrap();
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["unitPriceCents"], 1999);
        assert_eq!(json["stockQuantity"], 3);
        assert_eq!(json["unitsSold"], 0);
    }
}
