//! Decimal helpers for JSON responses.

use rust_decimal::{Decimal, prelude::ToPrimitive};

/// Money and percentages leave the API as JSON numbers.
pub(crate) trait DecimalExt {
    fn to_float(self) -> f64;
}

impl DecimalExt for Decimal {
    fn to_float(self) -> f64 {
        self.to_f64().unwrap_or_default()
    }
}
