//! Cart Entries

use rust_decimal::Decimal;

use crate::{
    cart::line::CartLine,
    products::{Product, ProductId, ProductLookup},
};

/// A cart line enriched with live catalog data at read time.
#[derive(Debug, Clone, PartialEq)]
pub struct CartEntry {
    /// Product id of the line
    pub product_id: ProductId,

    /// Live product, `None` if it has left the catalog
    pub product: Option<Product>,

    /// Quantity requested
    pub quantity: u32,

    /// Snapshotted unit price
    pub unit_price: Decimal,

    /// Live product discount when the product exists, the snapshot otherwise
    pub discount_percent: Decimal,

    /// `unit_price × quantity`
    pub line_total: Decimal,
}

impl CartEntry {
    pub(crate) fn enrich<P: ProductLookup + ?Sized>(
        product_id: ProductId,
        line: &CartLine,
        products: &P,
    ) -> Self {
        let product = products.product(product_id);

        // Discount follows the catalog while price stays at the snapshot.
        let discount_percent = product
            .as_ref()
            .map_or(line.discount_percent, |product| {
                Decimal::from(product.discount_percent)
            });

        Self {
            product_id,
            product,
            quantity: line.quantity,
            unit_price: line.unit_price,
            discount_percent,
            line_total: line.gross(),
        }
    }

    /// Slug of the live product.
    pub fn slug(&self) -> Option<&str> {
        self.product.as_ref().map(|product| product.slug.as_str())
    }

    /// Name of the live product.
    pub fn name(&self) -> Option<&str> {
        self.product.as_ref().map(|product| product.name.as_str())
    }
}
