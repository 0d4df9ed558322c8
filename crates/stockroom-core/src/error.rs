//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                     │
//! │  ├── CoreError        - Lookup, stock and quantity failures            │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  stockroom-service errors (separate crate)                             │
//! │  └── ApiError         - What callers see (code + message)              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Caller                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error is recoverable. The core never retries and never leaves a
//! half-applied mutation behind: validation always runs before state changes.

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Core inventory errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No product matches the id or name the caller supplied.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A product with this id is already in the catalog.
    ///
    /// Only reachable under [`IdPolicy::ExplicitRequired`](crate::IdPolicy).
    /// The existing product is left untouched.
    #[error("Product id {0} already exists")]
    DuplicateId(ProductId),

    /// Requested quantity exceeds what is on the shelf.
    ///
    /// ## User Workflow
    /// ```text
    /// purchase("Laptop", 5)
    ///      │
    ///      ▼
    /// Check stock: available=3
    ///      │
    ///      ▼
    /// InsufficientStock { product: "Laptop", available: 3, requested: 5 }
    ///      │
    ///      ▼
    /// Caller shows: "Only 3 Laptop in stock"
    /// ```
    #[error("Insufficient stock for {product}: available {available}, requested {requested}")]
    InsufficientStock {
        product: String,
        available: u64,
        requested: u64,
    },

    /// Quantity is zero, negative, or too large to price.
    #[error("Invalid quantity: {requested}")]
    InvalidQuantity { requested: i64 },

    /// Field-level validation failed.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by [`crate::validation`] before any state is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be greater than zero.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// The caller supplied a value the store assigns itself.
    #[error("{field} is assigned automatically")]
    AutoAssigned { field: String },

    /// Value is not one of the accepted spellings.
    #[error("{field} '{value}' is not recognized")]
    Unrecognized { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
