//! Shared application services over the trolley cart engine.

pub mod context;
pub mod domain;
pub mod sessions;
