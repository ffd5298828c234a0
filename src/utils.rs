//! Utils

use std::{num::ParseIntError, str::FromStr};

use clap::Parser;
use thiserror::Error;

use crate::products::ProductId;

/// Arguments for the quote demo
#[derive(Debug, Parser)]
pub struct QuoteArgs {
    /// Fixture set to load the catalog and coupons from
    #[clap(short, long, default_value = "default")]
    pub fixture: String,

    /// Coupon code to apply
    #[clap(short, long)]
    pub coupon: Option<String>,

    /// Cart lines as `product_id=quantity`
    #[clap(required = true)]
    pub lines: Vec<LineArg>,
}

/// A `product_id=quantity` pair from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineArg {
    /// Product to add
    pub product_id: ProductId,

    /// Quantity to set
    pub quantity: u32,
}

/// Errors parsing a [`LineArg`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LineArgError {
    /// Missing `=` separator
    #[error("expected product_id=quantity, got {0:?}")]
    MissingSeparator(String),

    /// Product id or quantity is not a number
    #[error("invalid number in {line:?}")]
    InvalidNumber {
        /// The offending argument
        line: String,

        /// Integer parse failure
        #[source]
        source: ParseIntError,
    },
}

impl FromStr for LineArg {
    type Err = LineArgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, quantity) = s
            .split_once('=')
            .ok_or_else(|| LineArgError::MissingSeparator(s.to_string()))?;

        let invalid = |source: ParseIntError| LineArgError::InvalidNumber {
            line: s.to_string(),
            source,
        };

        let product_id = id.trim().parse::<u64>().map_err(invalid)?;
        let quantity = quantity.trim().parse::<u32>().map_err(invalid)?;

        Ok(Self {
            product_id: ProductId::new(product_id),
            quantity,
        })
    }
}
