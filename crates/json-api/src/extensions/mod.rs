//! Extension traits

mod decimal;
mod depot;
mod result;

pub(crate) use decimal::DecimalExt as _;
pub(crate) use depot::DepotExt as _;
pub(crate) use result::ResultExt as _;
