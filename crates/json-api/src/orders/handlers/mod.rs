//! Payment Handlers

pub(crate) mod checkout;
pub(crate) mod complete;
pub(crate) mod get;
