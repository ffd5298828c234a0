//! App Context

use std::{path::PathBuf, sync::Arc};

use jiff::SignedDuration;
use thiserror::Error;
use trolley::fixtures::{Fixture, FixtureError};

use crate::{
    domain::{
        carts::{CartsService, SessionCartsService},
        orders::{MemoryOrdersService, OrdersService},
        products::{CatalogProductsService, ProductsService},
    },
    sessions::{MemorySessionStore, SessionStore},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to load fixture set {name:?} from {path}")]
    Fixtures {
        name: String,
        path: PathBuf,
        #[source]
        source: FixtureError,
    },
}

#[derive(Clone)]
pub struct AppContext {
    pub carts: Arc<dyn CartsService>,
    pub products: Arc<dyn ProductsService>,
    pub orders: Arc<dyn OrdersService>,
    pub sessions: Arc<dyn SessionStore>,
}

impl AppContext {
    /// Build application context from an already loaded fixture.
    #[must_use]
    pub fn from_fixture(fixture: Fixture, session_ttl: SignedDuration) -> Self {
        let (catalog, coupons) = fixture.into_parts();

        let catalog = Arc::new(catalog);
        let coupons = Arc::new(coupons);

        Self {
            carts: Arc::new(SessionCartsService::new(catalog.clone(), coupons)),
            products: Arc::new(CatalogProductsService::new(catalog.clone())),
            orders: Arc::new(MemoryOrdersService::new(catalog)),
            sessions: Arc::new(MemorySessionStore::new(session_ttl)),
        }
    }

    /// Build application context from a fixture set on disk.
    ///
    /// # Errors
    ///
    /// Returns an error when the fixture set cannot be loaded.
    pub fn from_fixture_set(
        path: impl Into<PathBuf>,
        name: &str,
        session_ttl: SignedDuration,
    ) -> Result<Self, AppInitError> {
        let path = path.into();

        let fixture =
            Fixture::from_set_in(path.clone(), name).map_err(|source| AppInitError::Fixtures {
                name: name.to_string(),
                path,
                source,
            })?;

        Ok(Self::from_fixture(fixture, session_ttl))
    }
}
