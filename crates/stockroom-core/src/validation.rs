//! # Validation Module
//!
//! Input validation for product registration and purchases.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Caller (menu / GUI)                                          │
//! │  └── Parses text into numbers, re-prompts on garbage                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Names non-empty and bounded                                       │
//! │  ├── Prices and stock non-negative                                     │
//! │  └── Quantities positive                                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Store                                                        │
//! │  ├── Id uniqueness (catalog)                                           │
//! │  └── Stock availability                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, ValidationError};
use crate::money::Money;
use crate::types::ProductId;
use crate::MAX_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name and returns it trimmed.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most [`MAX_NAME_LEN`] characters
///
/// ```rust
/// use stockroom_core::validation::validate_product_name;
///
/// assert_eq!(validate_product_name("  Laptop ").unwrap(), "Laptop");
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(name.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price. Zero is allowed (free items).
pub fn validate_unit_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates an initial stock level and converts it to the stored form.
pub fn validate_stock(stock: i64) -> ValidationResult<u64> {
    u64::try_from(stock).map_err(|_| ValidationError::MustBeNonNegative {
        field: "stock".to_string(),
    })
}

/// Validates an explicit product id.
pub fn validate_product_id(id: ProductId) -> ValidationResult<()> {
    if id.get() == 0 {
        return Err(ValidationError::MustBePositive {
            field: "id".to_string(),
        });
    }

    Ok(())
}

/// Validates a purchase quantity and converts it to the stored form.
///
/// Unlike the other validators this reports [`CoreError::InvalidQuantity`]
/// directly, since callers branch on it separately from field errors.
///
/// ```text
/// User enters quantity: 0
///       │
///       ▼
/// validate_quantity(0) ← THIS FUNCTION
///       │
///       └── qty <= 0? → InvalidQuantity { requested: 0 }
/// ```
pub fn validate_quantity(qty: i64) -> Result<u64, CoreError> {
    if qty <= 0 {
        return Err(CoreError::InvalidQuantity { requested: qty });
    }

    // qty > 0, so the conversion is lossless
    Ok(qty.unsigned_abs())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert_eq!(validate_product_name("Laptop").unwrap(), "Laptop");
        assert_eq!(validate_product_name("\tUSB hub \n").unwrap(), "USB hub");
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"A".repeat(MAX_NAME_LEN)).is_ok());
        assert_eq!(
            validate_product_name(&"A".repeat(MAX_NAME_LEN + 1)),
            Err(ValidationError::TooLong {
                field: "name".to_string(),
                max: MAX_NAME_LEN
            })
        );
    }

    #[test]
    fn test_validate_unit_price() {
        assert!(validate_unit_price(Money::zero()).is_ok());
        assert!(validate_unit_price(Money::from_cents(1099)).is_ok());
        assert!(validate_unit_price(Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_validate_stock() {
        assert_eq!(validate_stock(0).unwrap(), 0);
        assert_eq!(validate_stock(42).unwrap(), 42);
        assert!(validate_stock(-1).is_err());
    }

    #[test]
    fn test_validate_product_id() {
        assert!(validate_product_id(ProductId::new(1)).is_ok());
        assert!(validate_product_id(ProductId::new(0)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert_eq!(validate_quantity(1).unwrap(), 1);
        assert_eq!(validate_quantity(i64::MAX).unwrap(), i64::MAX as u64);
        assert_eq!(
            validate_quantity(0),
            Err(CoreError::InvalidQuantity { requested: 0 })
        );
        assert!(validate_quantity(-5).is_err());
    }
}
