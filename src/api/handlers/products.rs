//! Product CRUD request handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use validator::Validate;

use crate::api::doc::PRODUCT_TAG;
use crate::api::dto::{
    CollectionResponse, CreateProductRequest, ErrorResponse, ProductResponse, UpdateProductRequest,
};
use crate::error::AppError;
use crate::state::AppState;

/// Creates product-related routes.
///
/// Routes:
/// - GET /        - List all products
/// - POST /       - Create a new product
/// - GET /{id}    - Get product by ID
/// - PUT /{id}    - Update product by ID
/// - DELETE /{id} - Delete product by ID
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// GET /api/products - List all products wrapped in the collection envelope.
#[utoipa::path(
    get,
    path = "/api/products",
    tag = PRODUCT_TAG,
    responses(
        (status = 200, description = "All products", body = CollectionResponse<ProductResponse>)
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<CollectionResponse<ProductResponse>>, AppError> {
    let products = state.services.products.find_all().await?;
    Ok(Json(CollectionResponse::new(products)))
}

/// GET /api/products/{id} - Get product by ID or 404.
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state.services.products.find_by_id(id).await?;
    Ok(Json(product))
}

/// POST /api/products - Create a new product.
#[utoipa::path(
    post,
    path = "/api/products",
    tag = PRODUCT_TAG,
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Product created", body = ProductResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse)
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<Json<ProductResponse>, AppError> {
    payload.validate()?;
    let product = state.services.products.save(payload).await?;
    Ok(Json(product))
}

/// PUT /api/products/{id} - Update a product.
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProductRequest>,
) -> Result<Json<ProductResponse>, AppError> {
    payload.validate()?;
    let product = state.services.products.update(id, payload).await?;
    Ok(Json(product))
}

/// DELETE /api/products/{id} - Delete a product; the body reports whether a
/// row existed.
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Whether a product row existed", body = bool)
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<bool>, AppError> {
    let deleted = state.services.products.delete_by_id(id).await?;
    Ok(Json(deleted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use bigdecimal::BigDecimal;
    use serde_json::json;

    use crate::api::handlers::test_support::{
        Seed, body_json, get as get_req, json_request, send, state_with,
    };
    use crate::models::{Category, Product};

    fn router(seed: Seed) -> Router {
        Router::new()
            .nest("/api/products", product_routes())
            .with_state(state_with(seed))
    }

    fn seeded_product() -> Seed {
        Seed {
            products: vec![(
                Product {
                    product_id: 1,
                    product_name: "Mechanical keyboard".to_string(),
                    price: BigDecimal::try_from(89.5).unwrap(),
                    quantity: 12,
                    category_id: Some(2),
                },
                Some(Category {
                    category_id: 2,
                    category_name: "Peripherals".to_string(),
                }),
            )],
            ..Seed::default()
        }
    }

    #[tokio::test]
    async fn get_product_uses_wire_field_names() {
        let response = send(router(seeded_product()), get_req("/api/products/1")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["productTitle"], "Mechanical keyboard");
        assert_eq!(body["priceUnit"], 89.5);
        assert_eq!(body["categoryDto"]["categoryName"], "Peripherals");
    }

    #[tokio::test]
    async fn create_product_rejects_negative_price() {
        let request = json_request(
            "POST",
            "/api/products",
            json!({"productTitle": "Lamp", "priceUnit": -3.0, "quantity": 1}),
        );
        let response = send(router(Seed::default()), request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn update_missing_product_is_404() {
        let request = json_request("PUT", "/api/products/7", json!({"quantity": 2}));
        let response = send(router(Seed::default()), request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
