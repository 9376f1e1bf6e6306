//! Field-level helpers shared by the request DTOs.

use std::borrow::Cow;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use validator::ValidationError;

/// Money columns are `NUMERIC(12, 2)`.
const MONEY_SCALE: u32 = 2;
const MONEY_INTEGER_DIGITS: u32 = 10;

/// Deserializes a string with surrounding whitespace removed, so length
/// checks see the value that gets stored.
pub(super) fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}

/// Accepts a positive amount that fits a money column without rounding.
///
/// Trailing zeros are ignored, so `10.500` passes and `10.505` does not.
pub(super) fn validate_money(
    value: &Decimal,
    code: &'static str,
    not_positive: &'static str,
) -> Result<(), ValidationError> {
    let message: Cow<'static, str> = if value.is_sign_negative() || value.is_zero() {
        not_positive.into()
    } else if value.normalize().scale() > MONEY_SCALE {
        format!("At most {MONEY_SCALE} decimal places are allowed").into()
    } else if value.trunc() >= Decimal::from(10_i64.pow(MONEY_INTEGER_DIGITS)) {
        format!("At most {MONEY_INTEGER_DIGITS} digits before the decimal point are allowed")
            .into()
    } else {
        return Ok(());
    };

    let mut err = ValidationError::new(code);
    err.message = Some(message);
    Err(err)
}
