//! Products service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use trolley::{
    catalog::Catalog,
    products::{Category, Product, ProductId},
};

use crate::domain::products::errors::ProductsServiceError;

#[derive(Debug, Clone)]
pub struct CatalogProductsService {
    catalog: Arc<Catalog>,
}

impl CatalogProductsService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl ProductsService for CatalogProductsService {
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError> {
        Ok(self.catalog.products().cloned().collect())
    }

    async fn get_product(&self, product_id: ProductId) -> Result<Product, ProductsServiceError> {
        self.catalog
            .get_product(product_id)
            .cloned()
            .ok_or(ProductsServiceError::NotFound(product_id))
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ProductsServiceError> {
        Ok(self.catalog.categories().into_iter().cloned().collect())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// List every product, ordered by id.
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product_id: ProductId) -> Result<Product, ProductsServiceError>;

    /// List categories, ordered by name.
    async fn list_categories(&self) -> Result<Vec<Category>, ProductsServiceError>;
}
