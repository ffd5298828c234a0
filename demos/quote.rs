//! Quote Example
//!
//! Prices a cart built from a fixture set and prints a receipt.
//!
//! Use `-f` to load a fixture set by name
//! Use `-c` to apply a coupon code
//!
//! Run with: `cargo run --example quote -- -c DISCOUNT10 1=2 3=1`

use std::io;

use anyhow::{Result, anyhow};
use clap::Parser;

use trolley::{cart::Cart, fixtures::Fixture, receipt::Receipt, utils::QuoteArgs};

/// Quote Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = QuoteArgs::parse();

    let fixture = Fixture::from_set(&args.fixture)?;
    let catalog = fixture.catalog();

    let mut cart = Cart::new();

    for line in &args.lines {
        let product = catalog
            .get_product(line.product_id)
            .ok_or_else(|| anyhow!("Product {} not found", line.product_id))?;

        cart.add_or_set(product, line.quantity);
    }

    if let Some(code) = args.coupon.as_deref() {
        if cart.apply_coupon(fixture.coupons(), code) {
            println!("Coupon {code} applied");
        } else {
            println!("Coupon {code} not applied");
        }
    }

    Receipt::from_cart(&cart, catalog).write_to(io::stdout())?;

    Ok(())
}
