//! Product business logic.

use std::sync::Arc;

use tracing::debug;

use crate::api::dto::{CreateProductRequest, ProductResponse, UpdateProductRequest};
use crate::error::{AppError, AppResult};
use crate::repositories::ProductRepository;

/// Service for product operations.
#[derive(Clone)]
pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    pub async fn find_all(&self) -> AppResult<Vec<ProductResponse>> {
        let records = self.repo.find_all().await?;
        Ok(records.into_iter().map(ProductResponse::from).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> AppResult<ProductResponse> {
        self.repo
            .find_by_id(id)
            .await?
            .map(ProductResponse::from)
            .ok_or_else(|| AppError::not_found("Product", id))
    }

    pub async fn save(&self, request: CreateProductRequest) -> AppResult<ProductResponse> {
        let new_product = request.into_new_product()?;
        debug!(title = %new_product.product_name, "creating product");
        let record = self.repo.create(new_product).await?;
        Ok(ProductResponse::from(record))
    }

    pub async fn update(&self, id: i32, request: UpdateProductRequest) -> AppResult<ProductResponse> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(AppError::not_found("Product", id));
        }
        let changes = request.into_changeset()?;
        let record = self.repo.update(id, changes).await?;
        Ok(ProductResponse::from(record))
    }

    /// Returns true iff a row existed. A missing id is not an error.
    pub async fn delete_by_id(&self, id: i32) -> AppResult<bool> {
        let affected = self.repo.delete_by_id(id).await?;
        Ok(affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;

    use crate::models::{Category, Product};
    use crate::repositories::ProductRecord;
    use crate::repositories::memory::InMemoryProductRepo;

    fn sample_record(id: i32) -> ProductRecord {
        (
            Product {
                product_id: id,
                product_name: format!("Widget {}", id),
                price: BigDecimal::from(10),
                quantity: 4,
                category_id: Some(1),
            },
            Some(Category {
                category_id: 1,
                category_name: "Widgets".to_string(),
            }),
        )
    }

    #[tokio::test]
    async fn find_all_maps_wire_names() {
        let service =
            ProductService::new(InMemoryProductRepo::with_rows(vec![sample_record(1)]));
        let all = service.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].product_title, "Widget 1");
        assert_eq!(all[0].category_dto.as_ref().unwrap().category_id, 1);
    }

    #[tokio::test]
    async fn update_missing_product_is_not_found() {
        let service = ProductService::new(InMemoryProductRepo::with_rows(vec![]));
        let request: UpdateProductRequest =
            serde_json::from_value(serde_json::json!({"quantity": 9})).unwrap();
        assert!(matches!(
            service.update(5, request).await,
            Err(AppError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_existed() {
        let service =
            ProductService::new(InMemoryProductRepo::with_rows(vec![sample_record(2)]));
        assert!(service.delete_by_id(2).await.unwrap());
        assert!(!service.delete_by_id(2).await.unwrap());
    }
}
