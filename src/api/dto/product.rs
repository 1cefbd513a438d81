//! Product and category DTOs for API requests and responses.
//!
//! The wire names differ from the storage columns on purpose:
//! `productTitle` maps to `product_name` and `priceUnit` maps to `price`.

use bigdecimal::ToPrimitive;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::order::decimal_from_f64;
use crate::error::AppResult;
use crate::models::{Category, NewProduct, UpdateProduct};
use crate::repositories::ProductRecord;

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating a new product.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 255, message = "Title must not be empty"))]
    pub product_title: String,
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price_unit: f64,
    #[validate(range(min = 0, message = "Quantity must not be negative"))]
    pub quantity: i32,
    pub category_id: Option<i32>,
}

impl CreateProductRequest {
    /// Converts the request DTO into a NewProduct model for database insertion.
    pub fn into_new_product(self) -> AppResult<NewProduct> {
        Ok(NewProduct {
            product_name: self.product_title,
            price: decimal_from_f64(self.price_unit, "priceUnit")?,
            quantity: self.quantity,
            category_id: self.category_id,
        })
    }
}

/// Request body for updating a product.
///
/// `categoryId: null` in the JSON clears the category link; omitting the key
/// leaves it untouched.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, max = 255, message = "Title must not be empty"))]
    pub product_title: Option<String>,
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price_unit: Option<f64>,
    #[validate(range(min = 0, message = "Quantity must not be negative"))]
    pub quantity: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub category_id: Option<Option<i32>>,
}

/// Keeps "key absent" distinct from "key set to null".
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl UpdateProductRequest {
    /// Converts the request DTO into an UpdateProduct changeset.
    pub fn into_changeset(self) -> AppResult<UpdateProduct> {
        let price = match self.price_unit {
            Some(price) => Some(decimal_from_f64(price, "priceUnit")?),
            None => None,
        };
        Ok(UpdateProduct {
            product_name: self.product_title,
            price,
            quantity: self.quantity,
            category_id: self.category_id,
        })
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Category payload nested under a product response.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub category_id: i32,
    pub category_name: String,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            category_id: category.category_id,
            category_name: category.category_name,
        }
    }
}

/// Response body for product data.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub product_id: i32,
    pub product_title: String,
    pub price_unit: f64,
    pub quantity: i32,
    pub category_dto: Option<CategoryDto>,
}

impl From<ProductRecord> for ProductResponse {
    fn from((product, category): ProductRecord) -> Self {
        Self {
            product_id: product.product_id,
            product_title: product.product_name,
            price_unit: product.price.to_f64().unwrap_or_default(),
            quantity: product.quantity,
            category_dto: category.map(CategoryDto::from),
        }
    }
}
