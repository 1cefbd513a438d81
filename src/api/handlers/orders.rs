//! Order CRUD request handlers, including the status transition endpoint
//! and the per-user order listing.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, put},
};
use validator::Validate;

use crate::api::doc::ORDER_TAG;
use crate::api::dto::{
    CollectionResponse, CreateOrderRequest, ErrorResponse, OrderResponse, UpdateOrderRequest,
    UpdateOrderStatusRequest,
};
use crate::error::AppError;
use crate::state::AppState;

/// Creates order-related routes.
///
/// Routes:
/// - GET /                 - List all orders
/// - POST /                - Create a new order
/// - GET /{id}             - Get order by ID
/// - PUT /{id}             - Update order by ID
/// - DELETE /{id}          - Delete order by ID
/// - PUT /{id}/status      - Transition an order's status
/// - GET /user/{userId}    - List a user's orders
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/{id}", get(get_order).put(update_order).delete(delete_order))
        .route("/{id}/status", put(update_order_status))
        .route("/user/{user_id}", get(list_orders_by_user))
}

/// GET /api/orders - List all orders wrapped in the collection envelope.
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = ORDER_TAG,
    responses(
        (status = 200, description = "All orders", body = CollectionResponse<OrderResponse>)
    )
)]
pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<CollectionResponse<OrderResponse>>, AppError> {
    let orders = state.services.orders.find_all().await?;
    Ok(Json(CollectionResponse::new(orders)))
}

/// GET /api/orders/{id} - Get order by ID or 404.
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 404, description = "Order not found", body = ErrorResponse)
    )
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<OrderResponse>, AppError> {
    let order = state.services.orders.find_by_id(id).await?;
    Ok(Json(order))
}

/// GET /api/orders/user/{userId} - List the orders placed by one user.
#[utoipa::path(
    get,
    path = "/api/orders/user/{user_id}",
    tag = ORDER_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user's orders", body = CollectionResponse<OrderResponse>)
    )
)]
pub async fn list_orders_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<CollectionResponse<OrderResponse>>, AppError> {
    let orders = state.services.orders.find_by_user_id(user_id).await?;
    Ok(Json(CollectionResponse::new(orders)))
}

/// POST /api/orders - Create a new order.
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = ORDER_TAG,
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order created", body = OrderResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse)
    )
)]
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<Json<OrderResponse>, AppError> {
    payload.validate()?;
    let order = state.services.orders.save(payload).await?;
    Ok(Json(order))
}

/// PUT /api/orders/{id} - Update an order.
#[utoipa::path(
    put,
    path = "/api/orders/{id}",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    request_body = UpdateOrderRequest,
    responses(
        (status = 200, description = "Order updated", body = OrderResponse),
        (status = 404, description = "Order not found", body = ErrorResponse)
    )
)]
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateOrderRequest>,
) -> Result<Json<OrderResponse>, AppError> {
    payload.validate()?;
    let order = state.services.orders.update(id, payload).await?;
    Ok(Json(order))
}

/// PUT /api/orders/{id}/status - Transition an order to a new status.
#[utoipa::path(
    put,
    path = "/api/orders/{id}/status",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Order status updated", body = OrderResponse),
        (status = 400, description = "Invalid status transition", body = ErrorResponse)
    )
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateOrderStatusRequest>,
) -> Result<Json<OrderResponse>, AppError> {
    let order = state
        .services
        .orders
        .update_status(id, &payload.status)
        .await?;
    Ok(Json(order))
}

/// DELETE /api/orders/{id} - Delete an order; the body reports whether a row
/// existed.
#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Whether an order row existed", body = bool)
    )
)]
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<bool>, AppError> {
    let deleted = state.services.orders.delete_by_id(id).await?;
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
    use crate::models::{Order, OrderStatus};

    fn router(seed: Seed) -> Router {
        Router::new()
            .nest("/api/orders", order_routes())
            .with_state(state_with(seed))
    }

    fn order(id: i32, user_id: i32) -> Order {
        Order {
            order_id: id,
            user_id,
            total_amount: BigDecimal::from(100),
            status: OrderStatus::Pending,
            order_date: jiff::civil::date(2026, 1, 15).at(9, 30, 0, 0).into(),
        }
    }

    #[tokio::test]
    async fn listing_with_no_orders_is_an_empty_collection() {
        let response = send(router(Seed::default()), get_req("/api/orders")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["collection"], json!([]));
    }

    #[tokio::test]
    async fn status_transition_returns_updated_order() {
        let seed = Seed {
            orders: vec![order(1, 3)],
            ..Seed::default()
        };
        let request = json_request("PUT", "/api/orders/1/status", json!({"status": "SHIPPED"}));
        let response = send(router(seed), request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "SHIPPED");
        assert_eq!(body["orderId"], 1);
    }

    #[tokio::test]
    async fn status_transition_with_unknown_value_is_400() {
        let seed = Seed {
            orders: vec![order(1, 3)],
            ..Seed::default()
        };
        let request = json_request("PUT", "/api/orders/1/status", json!({"status": "LOST"}));
        let response = send(router(seed), request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn user_scoped_listing_filters_orders() {
        let seed = Seed {
            orders: vec![order(1, 3), order(2, 4)],
            ..Seed::default()
        };
        let response = send(router(seed), get_req("/api/orders/user/3")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let collection = body["collection"].as_array().unwrap();
        assert_eq!(collection.len(), 1);
        assert_eq!(collection[0]["orderId"], 1);
    }

    #[tokio::test]
    async fn create_order_serializes_amount_as_number() {
        let request = json_request(
            "POST",
            "/api/orders",
            json!({"userId": 3, "totalAmount": 45.5}),
        );
        let response = send(router(Seed::default()), request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["totalAmount"], 45.5);
        assert_eq!(body["status"], "PENDING");
    }
}
