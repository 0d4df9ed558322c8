//! # Keyed Catalog
//!
//! Products keyed by [`ProductId`], plus a case-insensitive name index.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  products: BTreeMap<ProductId, Product>     (sole owner, id order)      │
//! │                                                                         │
//! │     1 ─► Laptop        2 ─► Mouse        3 ─► laptop                    │
//! │                                                                         │
//! │  by_name: HashMap<lowercased name, BTreeSet<ProductId>>                 │
//! │                                                                         │
//! │     "laptop" ─► {1, 3}      "mouse" ─► {2}                              │
//! │                   │                                                     │
//! │                   └── first() = lowest id wins a name tie               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog is the only owner of `Product` records. Everything else
//! (ranking heap, logs) holds ids and resolves them here on read.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::error::{CoreError, CoreResult};
use crate::types::{Product, ProductId};

#[derive(Debug, Default, Clone)]
pub struct KeyedCatalog {
    products: BTreeMap<ProductId, Product>,
    by_name: HashMap<String, BTreeSet<ProductId>>,
}

impl KeyedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `product.id` to `product`.
    ///
    /// Fails with [`CoreError::DuplicateId`] when the id is taken; the
    /// existing product is not modified.
    pub fn insert(&mut self, product: Product) -> CoreResult<()> {
        if self.products.contains_key(&product.id) {
            return Err(CoreError::DuplicateId(product.id));
        }

        self.by_name
            .entry(name_key(&product.name))
            .or_default()
            .insert(product.id);
        self.products.insert(product.id, product);
        Ok(())
    }

    pub fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    /// Case-insensitive exact name match. On ties the lowest id wins.
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.by_name
            .get(&name_key(name))
            .and_then(|ids| ids.first())
            .and_then(|id| self.products.get(id))
    }

    /// All products, strictly ascending by id.
    pub fn list_ordered_by_id(&self) -> impl Iterator<Item = &Product> + '_ {
        self.products.values()
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.products.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Mutable access for stock bookkeeping.
    ///
    /// Callers must not rename the product: the name index is only
    /// maintained by [`KeyedCatalog::insert`].
    pub(crate) fn get_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.get_mut(&id)
    }
}

fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn product(id: u64, name: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            unit_price: Money::from_cents(100),
            stock_quantity: 10,
            units_sold: 0,
        }
    }

    #[test]
    fn insert_and_find_by_id() {
        let mut catalog = KeyedCatalog::new();
        catalog.insert(product(7, "Keyboard")).unwrap();

        assert_eq!(catalog.find_by_id(ProductId::new(7)).unwrap().name, "Keyboard");
        assert!(catalog.find_by_id(ProductId::new(8)).is_none());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn duplicate_id_is_rejected_and_original_kept() {
        let mut catalog = KeyedCatalog::new();
        catalog.insert(product(1, "Laptop")).unwrap();

        let err = catalog.insert(product(1, "Tablet")).unwrap_err();
        assert_eq!(err, CoreError::DuplicateId(ProductId::new(1)));

        assert_eq!(catalog.find_by_id(ProductId::new(1)).unwrap().name, "Laptop");
        assert!(catalog.find_by_name("tablet").is_none());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn name_lookup_is_case_insensitive() {
        let mut catalog = KeyedCatalog::new();
        catalog.insert(product(1, "Laptop")).unwrap();

        for query in ["Laptop", "laptop", "LAPTOP", "  lApToP "] {
            assert_eq!(catalog.find_by_name(query).unwrap().id, ProductId::new(1));
        }
        assert!(catalog.find_by_name("lap").is_none());
    }

    #[test]
    fn name_tie_resolves_to_lowest_id() {
        let mut catalog = KeyedCatalog::new();
        catalog.insert(product(9, "Cable")).unwrap();
        catalog.insert(product(4, "CABLE")).unwrap();
        catalog.insert(product(6, "cable")).unwrap();

        assert_eq!(catalog.find_by_name("cable").unwrap().id, ProductId::new(4));
    }

    #[test]
    fn listing_is_ascending_by_id() {
        let mut catalog = KeyedCatalog::new();
        for id in [5, 2, 9, 1] {
            catalog.insert(product(id, &format!("P{id}"))).unwrap();
        }

        let ids: Vec<u64> = catalog.list_ordered_by_id().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 5, 9]);
    }
}
