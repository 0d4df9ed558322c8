//! # Store State
//!
//! The shared [`Store`] behind a mutex.
//!
//! ## Thread Safety
//! The store is wrapped in `Arc<Mutex<T>>` because:
//! 1. Commands may run on several threads at once
//! 2. A purchase reads and writes the catalog, heap and log together
//! 3. Holding one lock for the whole call keeps those writes atomic
//!
//! ```text
//! thread A: purchase("Mouse", 3) ──► lock ──► resolve, check, apply ──► unlock
//! thread B: purchase("Mouse", 3) ──► wait ─────────────────────────────► lock ...
//!
//! B sees A's stock decrement, so the shelf is never oversold.
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use stockroom_core::Store;

/// Cloneable handle to one shared store.
#[derive(Debug, Clone)]
pub struct StoreState {
    store: Arc<Mutex<Store>>,
}

impl StoreState {
    pub fn new(store: Store) -> Self {
        StoreState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = store_state.with_store(|store| store.product_count());
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Store) -> R,
    {
        // Every Store mutation validates before it writes, so a panic in
        // another holder cannot leave it half-updated.
        let store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&store)
    }

    /// Executes a function with write access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// store_state.with_store_mut(|store| store.purchase("mouse", 1))?;
    /// ```
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Store) -> R,
    {
        let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut store)
    }
}

impl Default for StoreState {
    fn default() -> Self {
        Self::new(Store::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::{Money, ProductDraft};

    #[test]
    fn test_clones_share_one_store() {
        let state = StoreState::default();
        let other = state.clone();

        other
            .with_store_mut(|store| {
                store.add_product(ProductDraft::new("Mouse", Money::from_cents(1_999), 4))
            })
            .unwrap();

        assert_eq!(state.with_store(|store| store.product_count()), 1);
    }

    #[test]
    fn test_store_state_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StoreState>();
    }
}
