//! Catalog

use std::collections::BTreeMap;

use crate::products::{Category, CategoryId, Product, ProductId, ProductLookup};

/// Read-only product and category catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: BTreeMap<ProductId, Product>,
    categories: BTreeMap<CategoryId, Category>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a product.
    pub fn insert_product(&mut self, product: Product) -> Option<Product> {
        self.products.insert(product.id, product)
    }

    /// Insert or replace a category.
    pub fn insert_category(&mut self, category: Category) -> Option<Category> {
        self.categories.insert(category.id, category)
    }

    /// Products ordered by id.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// Fetch a single product.
    pub fn get_product(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    /// Fetch a single category.
    pub fn get_category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.get(&id)
    }

    /// Categories ordered by name.
    pub fn categories(&self) -> Vec<&Category> {
        let mut categories: Vec<&Category> = self.categories.values().collect();

        categories.sort_by(|a, b| a.name.cmp(&b.name));

        categories
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductLookup for Catalog {
    fn product(&self, id: ProductId) -> Option<Product> {
        self.get_product(id).cloned()
    }
}
