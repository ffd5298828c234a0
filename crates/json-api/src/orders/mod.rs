//! Payments

mod countries;
mod errors;
mod handlers;

pub(crate) use handlers::*;
