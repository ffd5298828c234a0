//! Fixtures
//!
//! YAML fixture sets seeding the catalog and coupon book. A set named `demo`
//! lives in `{base}/catalog/demo.yml` and `{base}/coupons/demo.yml`.

use std::{fs, path::PathBuf};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    catalog::Catalog,
    coupons::CouponBook,
    fixtures::{catalog::CatalogFixture, coupons::CouponsFixture},
};

pub mod catalog;
pub mod coupons;

/// Highest discount percentage a product or coupon may carry.
pub const MAX_DISCOUNT_PERCENT: u8 = 33;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format or range
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Discount outside `0..=33` or too precise
    #[error("Invalid discount: {0}")]
    InvalidDiscount(String),

    /// Two products share an id
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(u64),

    /// Two categories share an id
    #[error("Duplicate category id: {0}")]
    DuplicateCategory(u64),

    /// Two products or two categories share a slug
    #[error("Duplicate slug: {0}")]
    DuplicateSlug(String),

    /// A product references a category that does not exist
    #[error("Product {product} references unknown category {category}")]
    UnknownCategory {
        /// Product id
        product: u64,

        /// Missing category id
        category: u64,
    },

    /// Two coupons share a name
    #[error("Duplicate coupon: {0}")]
    DuplicateCoupon(String),

    /// Coupon name is empty or longer than 50 characters
    #[error("Invalid coupon name: {0:?}")]
    InvalidCouponName(String),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    catalog: Catalog,
    coupons: CouponBook,
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            catalog: Catalog::new(),
            coupons: CouponBook::new(),
        }
    }

    /// Load categories and products from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the data is invalid.
    pub fn load_catalog(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("catalog").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: CatalogFixture = serde_norway::from_str(&contents)?;

        fixture.load_into(&mut self.catalog)?;

        Ok(self)
    }

    /// Load coupons from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the data is invalid.
    pub fn load_coupons(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("coupons").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: CouponsFixture = serde_norway::from_str(&contents)?;

        fixture.load_into(&mut self.coupons)?;

        Ok(self)
    }

    /// Load a complete fixture set (catalog and coupons with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        Self::from_set_in("./fixtures", name)
    }

    /// Load a complete fixture set from a custom base path
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set_in(base_path: impl Into<PathBuf>, name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::with_base_path(base_path);

        fixture.load_catalog(name)?.load_coupons(name)?;

        Ok(fixture)
    }

    /// Loaded catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Loaded coupons
    pub fn coupons(&self) -> &CouponBook {
        &self.coupons
    }

    /// Split into the catalog and coupon book.
    pub fn into_parts(self) -> (Catalog, CouponBook) {
        (self.catalog, self.coupons)
    }
}

/// Parse a decimal with at most two decimal places.
fn parse_two_places(value: &str) -> Option<Decimal> {
    let parsed: Decimal = value.trim().parse().ok()?;

    (parsed.scale() <= 2).then_some(parsed)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;
    use testresult::TestResult;

    use crate::{coupons::CouponLookup, products::ProductId};

    use super::*;

    const CATALOG: &str = r"
categories:
  - id: 1
    name: Pantry
    slug: pantry
products:
  - id: 10
    name: Espresso Beans
    slug: espresso-beans
    price: '14.50'
    discount: 10
    category: 1
  - id: 11
    name: Oat Milk
    slug: oat-milk
    price: '2.20'
";

    const COUPONS: &str = r"
coupons:
  - name: DISCOUNT10
    discount: '10.00'
  - name: RETIRED
    discount: '5'
    is_active: false
";

    fn write_set(dir: &std::path::Path, name: &str, catalog: &str, coupons: &str) -> TestResult {
        fs::create_dir_all(dir.join("catalog"))?;
        fs::create_dir_all(dir.join("coupons"))?;
        fs::write(dir.join("catalog").join(format!("{name}.yml")), catalog)?;
        fs::write(dir.join("coupons").join(format!("{name}.yml")), coupons)?;

        Ok(())
    }

    #[test]
    fn from_set_loads_catalog_and_coupons() -> TestResult {
        let dir = tempdir()?;

        write_set(dir.path(), "shop", CATALOG, COUPONS)?;

        let fixture = Fixture::from_set_in(dir.path(), "shop")?;

        let beans = fixture
            .catalog()
            .get_product(ProductId::new(10))
            .ok_or("Expected espresso beans")?;

        assert_eq!(beans.price, "14.50".parse::<Decimal>()?);
        assert_eq!(beans.discount_percent, 10);
        assert_eq!(beans.brand, "unbranded");

        let milk = fixture
            .catalog()
            .get_product(ProductId::new(11))
            .ok_or("Expected oat milk")?;

        assert_eq!(milk.discount_percent, 0);
        assert!(milk.category.is_none());

        assert_eq!(fixture.coupons().len(), 2);
        assert_eq!(
            fixture.coupons().coupon("RETIRED")?.map(|c| c.is_active),
            Some(false)
        );

        Ok(())
    }

    #[test]
    fn missing_file_is_io_error() -> TestResult {
        let dir = tempdir()?;

        let result = Fixture::from_set_in(dir.path(), "absent");

        assert!(matches!(result, Err(FixtureError::Io(_))));

        Ok(())
    }

    #[test]
    fn malformed_yaml_is_yaml_error() -> TestResult {
        let dir = tempdir()?;

        write_set(dir.path(), "bad", "products: [", COUPONS)?;

        let result = Fixture::from_set_in(dir.path(), "bad");

        assert!(matches!(result, Err(FixtureError::Yaml(_))));

        Ok(())
    }

    #[test]
    fn parse_two_places_rejects_extra_precision() {
        assert!(parse_two_places("1.23").is_some());
        assert!(parse_two_places(" 4 ").is_some());
        assert!(parse_two_places("1.234").is_none());
        assert!(parse_two_places("abc").is_none());
    }
}
