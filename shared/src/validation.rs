//! Form-boundary validation
//!
//! All range and presence checks live here, at the input boundary: the
//! aggregators and classifiers assume well-typed values and never guard.
//! Malformed numeric input is rejected with an explicit error instead of
//! being silently replaced by a default.

use rust_decimal::Decimal;
use thiserror::Error;

/// A rejected form input, with bilingual user-facing messages
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("validation failed for {field}: {message_en}")]
pub struct ValidationError {
    pub field: String,
    pub message_en: String,
    pub message_fr: String,
}

impl ValidationError {
    pub fn new(field: &str, message_en: &str, message_fr: &str) -> Self {
        Self {
            field: field.to_string(),
            message_en: message_en.to_string(),
            message_fr: message_fr.to_string(),
        }
    }
}

/// Require a non-blank string field
pub fn require_field(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(
            field,
            "This field is required",
            "Ce champ est obligatoire",
        ));
    }
    Ok(())
}

/// A movement or line-item quantity must be strictly positive
pub fn validate_quantity(field: &str, quantity: i32) -> Result<(), ValidationError> {
    if quantity <= 0 {
        return Err(ValidationError::new(
            field,
            "Quantity must be a positive integer",
            "La quantité doit être un entier positif",
        ));
    }
    Ok(())
}

/// A stock level or minimum threshold must be non-negative
pub fn validate_stock_level(field: &str, level: i32) -> Result<(), ValidationError> {
    if level < 0 {
        return Err(ValidationError::new(
            field,
            "Stock level cannot be negative",
            "Le niveau de stock ne peut pas être négatif",
        ));
    }
    Ok(())
}

/// A price or unit cost must be strictly positive
pub fn validate_price(field: &str, price: Decimal) -> Result<(), ValidationError> {
    if price <= Decimal::ZERO {
        return Err(ValidationError::new(
            field,
            "Price must be positive",
            "Le prix doit être positif",
        ));
    }
    Ok(())
}

/// Parse a raw form string into a positive quantity
///
/// Legacy clients coerced unparseable quantities to a default of 1; here an
/// unparseable or non-positive value is an explicit error.
pub fn parse_quantity(field: &str, raw: &str) -> Result<i32, ValidationError> {
    let quantity: i32 = raw.trim().parse().map_err(|_| {
        ValidationError::new(
            field,
            "Expected a whole number",
            "Un nombre entier est attendu",
        )
    })?;
    validate_quantity(field, quantity)?;
    Ok(quantity)
}
