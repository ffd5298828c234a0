//! Cookie-keyed sessions.

mod cookie;
pub(crate) mod middleware;
pub(crate) mod purge;
