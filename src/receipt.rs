//! Receipt

use std::io;

use rust_decimal::Decimal;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::{
    cart::{Cart, CartTotals},
    products::ProductLookup,
};

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Output could not be written.
    #[error("failed to write receipt: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone)]
struct ReceiptRow {
    name: String,
    quantity: u32,
    unit_price: Decimal,
    discount: String,
    line_total: Decimal,
}

/// Printable summary of a priced cart.
#[derive(Debug, Clone)]
pub struct Receipt {
    rows: Vec<ReceiptRow>,
    totals: CartTotals,
}

impl Receipt {
    /// Build a receipt for the cart, naming lines from the given products.
    pub fn from_cart<P: ProductLookup + ?Sized>(cart: &Cart, products: &P) -> Self {
        let coupon = cart.coupon_percent().filter(|percent| !percent.is_zero());

        let rows = cart
            .lines()
            .iter()
            .map(|(id, line)| {
                let name = products
                    .product(*id)
                    .map_or_else(|| format!("#{id} (unavailable)"), |product| product.name);

                let discount = if line.discount_percent > Decimal::ZERO {
                    format!("{}%", line.discount_percent.normalize())
                } else if let Some(percent) = coupon {
                    format!("{}% (coupon)", percent.normalize())
                } else {
                    String::new()
                };

                ReceiptRow {
                    name,
                    quantity: line.quantity,
                    unit_price: line.unit_price,
                    discount,
                    line_total: line.gross(),
                }
            })
            .collect();

        Self {
            rows,
            totals: cart.totals(),
        }
    }

    /// Totals printed under the table.
    pub fn totals(&self) -> &CartTotals {
        &self.totals
    }

    /// Render the receipt as a table followed by the totals.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError`] if the output cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["Item", "Qty", "Unit Price", "Discount", "Line Total"]);

        for row in &self.rows {
            builder.push_record([
                row.name.clone(),
                row.quantity.to_string(),
                format!("{:.2}", row.unit_price),
                row.discount.clone(),
                format!("{:.2}", row.line_total),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::new(1..), Alignment::right());

        writeln!(out, "{table}")?;
        writeln!(out, " Subtotal: {:.2}", self.totals.total)?;
        writeln!(out, " Savings:  {:.2}", self.totals.savings)?;
        writeln!(out, " Total:    {:.2}", self.totals.discount_total)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        coupons::{Coupon, CouponBook},
        products::{Product, tests::product},
    };

    use super::*;

    #[test]
    fn write_to_lists_lines_and_totals() -> TestResult {
        let apple = product(1, "10.00", 0);
        let pear = product(2, "4.00", 25);

        let mut coupons = CouponBook::new();

        coupons.insert(Coupon {
            name: "DISCOUNT10".to_string(),
            discount_percent: "10".parse()?,
            is_active: true,
        });

        let mut cart = Cart::new();

        cart.add_or_set(&apple, 2);
        cart.add_or_set(&pear, 1);
        cart.apply_coupon(&coupons, "DISCOUNT10");

        let catalog = vec![apple, pear];
        let mut out = Vec::new();

        Receipt::from_cart(&cart, &catalog).write_to(&mut out)?;

        let output = String::from_utf8(out)?;

        assert!(output.contains("Product 1"), "missing apple row: {output}");
        assert!(output.contains("10% (coupon)"), "missing coupon: {output}");
        assert!(output.contains("25%"), "missing line discount: {output}");
        assert!(output.contains("Subtotal: 24.00"), "bad subtotal: {output}");
        assert!(output.contains("Savings:  3.00"), "bad savings: {output}");
        assert!(output.contains("Total:    21.00"), "bad total: {output}");

        Ok(())
    }

    #[test]
    fn missing_products_are_marked_unavailable() -> TestResult {
        let mut cart = Cart::new();

        cart.add_or_set(&product(9, "1.00", 0), 1);

        let catalog: Vec<Product> = Vec::new();
        let mut out = Vec::new();

        Receipt::from_cart(&cart, &catalog).write_to(&mut out)?;

        assert!(String::from_utf8(out)?.contains("#9 (unavailable)"));

        Ok(())
    }
}
