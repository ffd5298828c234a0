//! Category Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use trolley::products::Category;

use crate::{extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoryResponse {
    pub id: u64,
    pub name: String,
    pub slug: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        CategoryResponse {
            id: category.id.get(),
            name: category.name,
            slug: category.slug,
        }
    }
}

/// Category Index Handler
///
/// Returns every category, ordered by name.
#[endpoint(tags("store"), summary = "List Categories")]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Vec<CategoryResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let categories = state
        .app
        .products
        .list_categories()
        .await
        .or_500("failed to fetch categories")?;

    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use trolley::products::CategoryId;
    use trolley_app::domain::products::MockProductsService;

    use crate::test_helpers::{service, state_with_products};

    use super::*;

    #[tokio::test]
    async fn test_categories_returns_list() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_list_categories().once().return_once(|| {
            Ok(vec![Category {
                id: CategoryId::new(3),
                name: "Accessories".to_string(),
                slug: "accessories".to_string(),
            }])
        });

        products.expect_list_products().never();
        products.expect_get_product().never();

        let router = Router::with_path("store/categories").get(handler);

        let response: Vec<CategoryResponse> =
            TestClient::get("http://example.com/store/categories")
                .send(&service(state_with_products(products), router))
                .await
                .take_json()
                .await?;

        let category = response.first().ok_or("Expected one category")?;

        assert_eq!(response.len(), 1);
        assert_eq!(category.id, 3);
        assert_eq!(category.slug, "accessories");

        Ok(())
    }
}
