//! # Sale Commands
//!
//! Purchases and the reports built from them.

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::StoreState;
use stockroom_core::{Receipt, TopSeller};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseDto {
    pub receipt_id: String,
    pub receipt_number: u64,
    pub product_id: u64,
    pub product_name: String,
    pub quantity: u64,
    pub unit_price_cents: i64,
    pub total_cents: i64,
    /// Stock left after this purchase.
    pub remaining_stock: u64,
    pub units_sold: u64,
    /// Receipt line, e.g. "Purchased 2 x Laptop for $1999.98".
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptDto {
    pub receipt_id: String,
    pub receipt_number: u64,
    pub product_id: u64,
    pub product_name: String,
    pub quantity: u64,
    pub unit_price_cents: i64,
    pub total_cents: i64,
    pub purchased_at: String,
}

impl From<Receipt> for ReceiptDto {
    fn from(r: Receipt) -> Self {
        ReceiptDto {
            receipt_id: r.id.to_string(),
            receipt_number: r.receipt_number,
            product_id: r.product_id.get(),
            product_name: r.product_name,
            quantity: r.quantity,
            unit_price_cents: r.unit_price.cents(),
            total_cents: r.total.cents(),
            purchased_at: r.purchased_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopSellerDto {
    pub id: u64,
    pub name: String,
    pub units_sold: u64,
}

impl From<TopSeller> for TopSellerDto {
    fn from(t: TopSeller) -> Self {
        TopSellerDto {
            id: t.id.get(),
            name: t.name,
            units_sold: t.units_sold,
        }
    }
}

/// Buys `quantity` units of the product named by `product` (id digits or a
/// name).
///
/// ## Errors
/// - `NOT_FOUND`: no such product
/// - `INVALID_QUANTITY`: zero, negative, or a total that does not fit
/// - `INSUFFICIENT_STOCK`: more than is on the shelf
pub fn purchase(store: &StoreState, product: &str, quantity: i64) -> Result<PurchaseDto, ApiError> {
    let start = Instant::now();
    debug!(product = %product, quantity = quantity, "purchase command");

    let (outcome, message) = store.with_store_mut(|s| {
        let outcome = s.purchase(product, quantity)?;
        let message = outcome.receipt.render(&s.config().currency_symbol);
        Ok::<_, ApiError>((outcome, message))
    })?;

    info!(
        receipt_number = outcome.receipt.receipt_number,
        total = %outcome.total_cost,
        elapsed_us = start.elapsed().as_micros() as u64,
        "Purchase completed"
    );

    Ok(PurchaseDto {
        receipt_id: outcome.receipt.id.to_string(),
        receipt_number: outcome.receipt.receipt_number,
        product_id: outcome.product.id.get(),
        product_name: outcome.product.name,
        quantity: outcome.receipt.quantity,
        unit_price_cents: outcome.receipt.unit_price.cents(),
        total_cents: outcome.total_cost.cents(),
        remaining_stock: outcome.product.stock_quantity,
        units_sold: outcome.product.units_sold,
        message,
    })
}

/// Receipt lines, newest first.
pub fn purchase_history(store: &StoreState) -> Result<Vec<String>, ApiError> {
    let start = Instant::now();
    let lines = store.with_store(|s| s.purchase_history());

    debug!(
        count = lines.len(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "purchase_history command"
    );
    Ok(lines)
}

/// Structured receipts, newest first.
pub fn receipts(store: &StoreState) -> Result<Vec<ReceiptDto>, ApiError> {
    let receipts = store.with_store(|s| s.receipts());
    debug!(count = receipts.len(), "receipts command");
    Ok(receipts.into_iter().map(ReceiptDto::from).collect())
}

/// Best sellers, highest `unitsSold` first.
///
/// `limit` falls back to the store's configured default.
pub fn top_selling(store: &StoreState, limit: Option<usize>) -> Result<Vec<TopSellerDto>, ApiError> {
    let start = Instant::now();

    let top = store.with_store_mut(|s| {
        let n = limit.unwrap_or(s.config().default_top_n);
        s.top_selling(n)
    });

    debug!(
        limit = ?limit,
        count = top.len(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "top_selling command"
    );
    Ok(top.into_iter().map(TopSellerDto::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::product::{add_product, find_product, NewProduct};
    use crate::error::ErrorCode;

    fn stocked() -> StoreState {
        let store = StoreState::default();
        for (name, price, stock) in [
            ("Laptop", 99_999, 10),
            ("Mouse", 1_999, 20),
            ("Monitor", 24_950, 3),
            ("Cable", 500, 50),
        ] {
            add_product(
                &store,
                NewProduct {
                    id: None,
                    name: name.to_string(),
                    unit_price_cents: price,
                    stock,
                },
            )
            .unwrap();
        }
        store
    }

    #[test]
    fn test_purchase_reports_totals_and_message() {
        let store = stocked();
        let dto = purchase(&store, "laptop", 2).unwrap();

        assert_eq!(dto.total_cents, 199_998);
        assert_eq!(dto.remaining_stock, 8);
        assert_eq!(dto.units_sold, 2);
        assert_eq!(dto.receipt_number, 1);
        assert_eq!(dto.message, "Purchased 2 x Laptop for $1999.98");
    }

    #[test]
    fn test_purchase_errors_map_to_codes() {
        let store = stocked();
        assert_eq!(purchase(&store, "Toaster", 1).unwrap_err().code, ErrorCode::NotFound);
        assert_eq!(purchase(&store, "2", 0).unwrap_err().code, ErrorCode::InvalidQuantity);
        assert_eq!(
            purchase(&store, "Monitor", 4).unwrap_err().code,
            ErrorCode::InsufficientStock
        );

        assert_eq!(find_product(&store, "Monitor").unwrap().stock_quantity, 3);
        assert!(purchase_history(&store).unwrap().is_empty());
    }

    #[test]
    fn test_history_and_receipts_newest_first() {
        let store = stocked();
        purchase(&store, "Laptop", 1).unwrap();
        purchase(&store, "2", 3).unwrap();

        assert_eq!(
            purchase_history(&store).unwrap(),
            vec![
                "Purchased 3 x Mouse for $59.97".to_string(),
                "Purchased 1 x Laptop for $999.99".to_string(),
            ]
        );

        let listed = receipts(&store).unwrap();
        assert_eq!(listed[0].product_name, "Mouse");
        assert_eq!(listed[0].receipt_number, 2);
        assert_eq!(listed[1].total_cents, 99_999);
    }

    #[test]
    fn test_top_selling_uses_configured_default() {
        let store = stocked();
        purchase(&store, "Laptop", 2).unwrap();
        purchase(&store, "Mouse", 5).unwrap();
        purchase(&store, "Cable", 1).unwrap();
        purchase(&store, "Monitor", 3).unwrap();
        purchase(&store, "Laptop", 3).unwrap();

        let top = top_selling(&store, None).unwrap();
        let rows: Vec<(&str, u64)> = top.iter().map(|t| (t.name.as_str(), t.units_sold)).collect();
        assert_eq!(rows, vec![("Laptop", 5), ("Mouse", 5), ("Monitor", 3)]);

        assert_eq!(top_selling(&store, None).unwrap(), top);
        assert_eq!(top_selling(&store, Some(10)).unwrap().len(), 4);
    }

    #[test]
    fn test_top_seller_dto_is_camel_case() {
        let store = stocked();
        purchase(&store, "Cable", 4).unwrap();

        let json = serde_json::to_value(top_selling(&store, Some(1)).unwrap()).unwrap();
        assert_eq!(json[0]["name"], "Cable");
        assert_eq!(json[0]["unitsSold"], 4);
    }
}
