//! Catalog Fixtures

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    catalog::Catalog,
    fixtures::{FixtureError, MAX_DISCOUNT_PERCENT, parse_two_places},
    products::{Category, CategoryId, Product, ProductId},
};

/// Prices are stored with at most six digits, two after the point.
const PRICE_LIMIT: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Wrapper for categories and products in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Categories, referenced from products by id
    #[serde(default)]
    pub categories: Vec<CategoryFixture>,

    /// Products
    #[serde(default)]
    pub products: Vec<ProductFixture>,
}

/// Category fixture from YAML
#[derive(Debug, Deserialize)]
pub struct CategoryFixture {
    /// Category id
    pub id: u64,

    /// Display name
    pub name: String,

    /// URL slug
    pub slug: String,
}

/// Product fixture from YAML
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product id
    pub id: u64,

    /// Product name
    pub name: String,

    /// Brand, `unbranded` when omitted
    #[serde(default = "default_brand")]
    pub brand: String,

    /// Long-form description
    #[serde(default)]
    pub description: String,

    /// URL slug
    pub slug: String,

    /// Price (e.g., "2.99")
    pub price: String,

    /// Whole percent discount
    #[serde(default)]
    pub discount: i64,

    /// Category id
    #[serde(default)]
    pub category: Option<u64>,
}

fn default_brand() -> String {
    "unbranded".to_string()
}

impl ProductFixture {
    /// Convert into a [`Product`]
    ///
    /// # Errors
    ///
    /// Returns an error if the price or discount is out of range.
    pub fn try_into_product(self) -> Result<Product, FixtureError> {
        let price = parse_two_places(&self.price)
            .filter(|price| *price >= Decimal::ZERO && *price < PRICE_LIMIT)
            .ok_or_else(|| FixtureError::InvalidPrice(self.price.clone()))?;

        let discount_percent = u8::try_from(self.discount)
            .ok()
            .filter(|discount| *discount <= MAX_DISCOUNT_PERCENT)
            .ok_or_else(|| FixtureError::InvalidDiscount(self.discount.to_string()))?;

        Ok(Product {
            id: ProductId::new(self.id),
            name: self.name,
            brand: self.brand,
            description: self.description,
            slug: self.slug,
            price,
            discount_percent,
            category: self.category.map(CategoryId::new),
        })
    }
}

impl CatalogFixture {
    /// Validate and insert every category and product into `catalog`.
    ///
    /// # Errors
    ///
    /// Returns an error on duplicate ids or slugs, unknown categories, or
    /// invalid prices and discounts.
    pub fn load_into(self, catalog: &mut Catalog) -> Result<(), FixtureError> {
        for category in self.categories {
            let id = CategoryId::new(category.id);

            if catalog.get_category(id).is_some() {
                return Err(FixtureError::DuplicateCategory(category.id));
            }

            if catalog.categories().iter().any(|c| c.slug == category.slug) {
                return Err(FixtureError::DuplicateSlug(category.slug));
            }

            catalog.insert_category(Category {
                id,
                name: category.name,
                slug: category.slug,
            });
        }

        for fixture in self.products {
            let product = fixture.try_into_product()?;

            if catalog.get_product(product.id).is_some() {
                return Err(FixtureError::DuplicateProduct(product.id.get()));
            }

            if catalog.products().any(|p| p.slug == product.slug) {
                return Err(FixtureError::DuplicateSlug(product.slug));
            }

            if let Some(category) = product
                .category
                .filter(|category| catalog.get_category(*category).is_none())
            {
                return Err(FixtureError::UnknownCategory {
                    product: product.id.get(),
                    category: category.get(),
                });
            }

            catalog.insert_product(product);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn parse(yaml: &str) -> Result<CatalogFixture, serde_norway::Error> {
        serde_norway::from_str(yaml)
    }

    #[test]
    fn product_defaults_apply() -> TestResult {
        let fixture = parse(
            r"
products:
  - id: 1
    name: Tea
    slug: tea
    price: '3'
",
        )?;

        let mut catalog = Catalog::new();

        fixture.load_into(&mut catalog)?;

        let tea = catalog
            .get_product(ProductId::new(1))
            .ok_or("Expected tea")?;

        assert_eq!(tea.brand, "unbranded");
        assert_eq!(tea.description, "");
        assert_eq!(tea.discount_percent, 0);
        assert_eq!(tea.price, Decimal::from(3));

        Ok(())
    }

    #[test]
    fn rejects_discount_above_limit() -> TestResult {
        let fixture = parse(
            r"
products:
  - id: 1
    name: Tea
    slug: tea
    price: '3.00'
    discount: 34
",
        )?;

        let result = fixture.load_into(&mut Catalog::new());

        assert!(matches!(result, Err(FixtureError::InvalidDiscount(_))));

        Ok(())
    }

    #[test]
    fn rejects_negative_discount() -> TestResult {
        let fixture = parse(
            r"
products:
  - id: 1
    name: Tea
    slug: tea
    price: '3.00'
    discount: -1
",
        )?;

        let result = fixture.load_into(&mut Catalog::new());

        assert!(matches!(result, Err(FixtureError::InvalidDiscount(_))));

        Ok(())
    }

    #[test]
    fn rejects_out_of_range_prices() -> TestResult {
        for price in ["-1.00", "10000.00", "1.999", "free"] {
            let fixture = parse(&format!(
                "products:\n  - id: 1\n    name: Tea\n    slug: tea\n    price: '{price}'\n"
            ))?;

            let result = fixture.load_into(&mut Catalog::new());

            assert!(
                matches!(result, Err(FixtureError::InvalidPrice(_))),
                "price {price} should be rejected"
            );
        }

        Ok(())
    }

    #[test]
    fn accepts_largest_price() -> TestResult {
        let fixture = parse(
            "products:\n  - id: 1\n    name: Tea\n    slug: tea\n    price: '9999.99'\n",
        )?;

        fixture.load_into(&mut Catalog::new())?;

        Ok(())
    }

    #[test]
    fn rejects_duplicate_slug() -> TestResult {
        let fixture = parse(
            r"
products:
  - id: 1
    name: Tea
    slug: tea
    price: '3.00'
  - id: 2
    name: Green Tea
    slug: tea
    price: '4.00'
",
        )?;

        let result = fixture.load_into(&mut Catalog::new());

        assert!(matches!(result, Err(FixtureError::DuplicateSlug(slug)) if slug == "tea"));

        Ok(())
    }

    #[test]
    fn rejects_duplicate_product_id() -> TestResult {
        let fixture = parse(
            r"
products:
  - id: 1
    name: Tea
    slug: tea
    price: '3.00'
  - id: 1
    name: Coffee
    slug: coffee
    price: '4.00'
",
        )?;

        let result = fixture.load_into(&mut Catalog::new());

        assert!(matches!(result, Err(FixtureError::DuplicateProduct(1))));

        Ok(())
    }

    #[test]
    fn rejects_unknown_category() -> TestResult {
        let fixture = parse(
            r"
products:
  - id: 1
    name: Tea
    slug: tea
    price: '3.00'
    category: 7
",
        )?;

        let result = fixture.load_into(&mut Catalog::new());

        assert!(matches!(
            result,
            Err(FixtureError::UnknownCategory {
                product: 1,
                category: 7
            })
        ));

        Ok(())
    }
}
