//! Store Handlers

pub(crate) mod categories;
pub(crate) mod get;
pub(crate) mod index;

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use trolley::products::{CategoryId, Product, ProductId};

    pub(super) fn make_product(id: u64, price: Decimal, discount_percent: u8) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            brand: "unbranded".to_string(),
            description: String::new(),
            slug: format!("product-{id}"),
            price,
            discount_percent,
            category: Some(CategoryId::new(1)),
        }
    }
}
