//! Conversion from decimal prices to integer minor units.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::util::stripe::PaymentError;

/// Converts a price in major units (e.g. dollars) to minor units (cents):
/// multiply by 100 and truncate toward zero.
///
/// The price goes through its shortest decimal representation first so
/// that `19.99` becomes `1999` rather than the `1998` plain `f64` math gives.
/// Zero and negative prices are converted as-is.
pub fn to_minor_units(price: f64) -> Result<i64, PaymentError> {
    if !price.is_finite() {
        return Err(PaymentError::InvalidAmount(format!("price is not a finite number: {}", price)));
    }
    let decimal = Decimal::from_str(&price.to_string())
        .map_err(|e| PaymentError::InvalidAmount(format!("price {} out of range: {}", price, e)))?;
    (decimal * Decimal::ONE_HUNDRED)
        .trunc()
        .to_i64()
        .ok_or_else(|| PaymentError::InvalidAmount(format!("price {} out of range", price)))
}
