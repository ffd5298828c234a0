//! Sessions

pub mod errors;
pub mod key;
pub mod memory;
pub mod store;

pub use errors::SessionStoreError;
pub use key::SessionKey;
pub use memory::{DEFAULT_SESSION_TTL, MemorySessionStore};
pub use store::*;
