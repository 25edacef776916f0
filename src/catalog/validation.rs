//! Field validation for products entering the catalog.
//!
//! Three passes, in order:
//!
//! 1. **Required fields**: every empty/zero field is collected before failing,
//!    so the caller sees all problems at once. `is_published` is the only
//!    field allowed to keep its zero value.
//! 2. **Price**: must be finite. JSON has no encoding for NaN or infinity, so
//!    letting one through would leave an unreadable data file.
//! 3. **Expiration date**: a structural `dd/mm/yyyy` check (day 1-31,
//!    month 1-12, year 1901-2024). This is not a calendar check: `31/02/2020`
//!    is accepted.

use crate::error::{CatalogError, Result};
use crate::model::Product;

const MIN_YEAR_EXCLUSIVE: i32 = 1900;
const MAX_YEAR: i32 = 2024;

/// Names of the required fields that are empty or zero, in declaration order.
///
/// Names are the data file's JSON keys (`name`, `quantity`, `code_value`,
/// `expiration`, `price`), not display labels such as "Code Value"; adapters
/// that want labels must map them.
pub fn empty_fields(product: &Product) -> Vec<&'static str> {
    let mut fields = Vec::new();
    if product.name.is_empty() {
        fields.push("name");
    }
    if product.quantity == 0 {
        fields.push("quantity");
    }
    if product.code_value.is_empty() {
        fields.push("code_value");
    }
    if product.expiration.is_empty() {
        fields.push("expiration");
    }
    if product.price == 0.0 {
        fields.push("price");
    }
    fields
}

/// Parses `dd/mm/yyyy` into `(day, month, year)` when it is in range.
pub fn parse_expiration(date: &str) -> Option<(u32, u32, i32)> {
    let mut tokens = date.split('/');
    let (day, month, year) = match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
        (Some(d), Some(m), Some(y), None) => (d, m, y),
        _ => return None,
    };

    let day: u32 = day.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let year: i32 = year.parse().ok()?;

    let valid = (1..=31).contains(&day)
        && (1..=12).contains(&month)
        && year > MIN_YEAR_EXCLUSIVE
        && year <= MAX_YEAR;
    valid.then_some((day, month, year))
}

/// Runs the validation passes in order, stopping at the first that fails.
pub fn validate(product: &Product) -> Result<()> {
    let empty = empty_fields(product);
    if !empty.is_empty() {
        return Err(CatalogError::EmptyField(empty));
    }
    if !product.price.is_finite() {
        return Err(CatalogError::InvalidPrice(product.price));
    }
    if parse_expiration(&product.expiration).is_none() {
        return Err(CatalogError::InvalidDate(product.expiration.clone()));
    }
    Ok(())
}
