//! Coupon Fixtures

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    coupons::{Coupon, CouponBook},
    fixtures::{FixtureError, MAX_DISCOUNT_PERCENT, parse_two_places},
};

/// Longest accepted coupon name.
const MAX_NAME_LEN: usize = 50;

/// Wrapper for coupons in YAML
#[derive(Debug, Deserialize)]
pub struct CouponsFixture {
    /// Coupons
    #[serde(default)]
    pub coupons: Vec<CouponFixture>,
}

/// Coupon fixture from YAML
#[derive(Debug, Deserialize)]
pub struct CouponFixture {
    /// Coupon code
    pub name: String,

    /// Discount percentage (e.g., "12.50")
    pub discount: String,

    /// Active flag, defaults to true
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl TryFrom<CouponFixture> for Coupon {
    type Error = FixtureError;

    fn try_from(fixture: CouponFixture) -> Result<Self, Self::Error> {
        if fixture.name.is_empty() || fixture.name.chars().count() > MAX_NAME_LEN {
            return Err(FixtureError::InvalidCouponName(fixture.name));
        }

        let discount_percent = parse_two_places(&fixture.discount)
            .filter(|discount| {
                *discount >= Decimal::ZERO && *discount <= Decimal::from(MAX_DISCOUNT_PERCENT)
            })
            .ok_or_else(|| FixtureError::InvalidDiscount(fixture.discount.clone()))?;

        Ok(Coupon {
            name: fixture.name,
            discount_percent,
            is_active: fixture.is_active,
        })
    }
}

impl CouponsFixture {
    /// Validate and insert every coupon into `book`.
    ///
    /// # Errors
    ///
    /// Returns an error on duplicate names or invalid discounts.
    pub fn load_into(self, book: &mut CouponBook) -> Result<(), FixtureError> {
        for fixture in self.coupons {
            let coupon = Coupon::try_from(fixture)?;

            if book.contains(&coupon.name) {
                return Err(FixtureError::DuplicateCoupon(coupon.name));
            }

            book.insert(coupon);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::coupons::CouponLookup;

    use super::*;

    fn fixture(name: &str, discount: &str) -> CouponFixture {
        CouponFixture {
            name: name.to_string(),
            discount: discount.to_string(),
            is_active: true,
        }
    }

    #[test]
    fn accepts_fractional_discount() -> TestResult {
        let coupon = Coupon::try_from(fixture("HALFWAY", "12.50"))?;

        assert_eq!(coupon.discount_percent, "12.50".parse::<Decimal>()?);
        assert_eq!(coupon.to_string(), "HALFWAY - 12% off");

        Ok(())
    }

    #[test]
    fn rejects_out_of_range_discounts() {
        for discount in ["-0.01", "33.01", "40", "1.005", "ten"] {
            let result = Coupon::try_from(fixture("BAD", discount));

            assert!(
                matches!(result, Err(FixtureError::InvalidDiscount(_))),
                "discount {discount} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_bad_names() {
        let long = "X".repeat(51);

        assert!(matches!(
            Coupon::try_from(fixture("", "10")),
            Err(FixtureError::InvalidCouponName(_))
        ));
        assert!(matches!(
            Coupon::try_from(fixture(&long, "10")),
            Err(FixtureError::InvalidCouponName(_))
        ));
    }

    #[test]
    fn rejects_duplicate_names() -> TestResult {
        let yaml = r"
coupons:
  - name: DISCOUNT10
    discount: '10'
  - name: DISCOUNT10
    discount: '15'
";
        let fixture: CouponsFixture = serde_norway::from_str(yaml)?;
        let result = fixture.load_into(&mut CouponBook::new());

        assert!(matches!(result, Err(FixtureError::DuplicateCoupon(name)) if name == "DISCOUNT10"));

        Ok(())
    }

    #[test]
    fn is_active_defaults_to_true() -> TestResult {
        let yaml = "coupons:\n  - name: WELCOME\n    discount: '5'\n";
        let fixture: CouponsFixture = serde_norway::from_str(yaml)?;
        let mut book = CouponBook::new();

        fixture.load_into(&mut book)?;

        assert_eq!(book.coupon("WELCOME")?.map(|c| c.is_active), Some(true));

        Ok(())
    }
}
