//! Payment CRUD request handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::api::doc::PAYMENT_TAG;
use crate::api::dto::{
    CollectionResponse, CreatePaymentRequest, ErrorResponse, PaymentResponse, UpdatePaymentRequest,
};
use crate::error::AppError;
use crate::state::AppState;

/// Creates payment-related routes.
///
/// Routes:
/// - GET /                  - List all payments
/// - POST /                 - Create a new payment
/// - GET /{id}              - Get payment by ID
/// - PUT /{id}              - Update payment by ID
/// - DELETE /{id}           - Delete payment by ID
/// - GET /order/{orderId}   - List an order's payments
pub fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_payments).post(create_payment))
        .route(
            "/{id}",
            get(get_payment).put(update_payment).delete(delete_payment),
        )
        .route("/order/{order_id}", get(list_payments_by_order))
}

/// GET /api/payments - List all payments wrapped in the collection envelope.
#[utoipa::path(
    get,
    path = "/api/payments",
    tag = PAYMENT_TAG,
    responses(
        (status = 200, description = "All payments", body = CollectionResponse<PaymentResponse>)
    )
)]
pub async fn list_payments(
    State(state): State<AppState>,
) -> Result<Json<CollectionResponse<PaymentResponse>>, AppError> {
    let payments = state.services.payments.find_all().await?;
    Ok(Json(CollectionResponse::new(payments)))
}

/// GET /api/payments/{id} - Get payment by ID or 404.
#[utoipa::path(
    get,
    path = "/api/payments/{id}",
    tag = PAYMENT_TAG,
    params(("id" = i32, Path, description = "Payment ID")),
    responses(
        (status = 200, description = "Payment found", body = PaymentResponse),
        (status = 404, description = "Payment not found", body = ErrorResponse)
    )
)]
pub async fn get_payment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<PaymentResponse>, AppError> {
    let payment = state.services.payments.find_by_id(id).await?;
    Ok(Json(payment))
}

/// GET /api/payments/order/{orderId} - List the payments for one order.
#[utoipa::path(
    get,
    path = "/api/payments/order/{order_id}",
    tag = PAYMENT_TAG,
    params(("order_id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "The order's payments", body = CollectionResponse<PaymentResponse>)
    )
)]
pub async fn list_payments_by_order(
    State(state): State<AppState>,
    Path(order_id): Path<i32>,
) -> Result<Json<CollectionResponse<PaymentResponse>>, AppError> {
    let payments = state.services.payments.find_by_order_id(order_id).await?;
    Ok(Json(CollectionResponse::new(payments)))
}

/// POST /api/payments - Create a new payment.
#[utoipa::path(
    post,
    path = "/api/payments",
    tag = PAYMENT_TAG,
    request_body = CreatePaymentRequest,
    responses(
        (status = 200, description = "Payment created", body = PaymentResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse)
    )
)]
pub async fn create_payment(
    State(state): State<AppState>,
    Json(payload): Json<CreatePaymentRequest>,
) -> Result<Json<PaymentResponse>, AppError> {
    let payment = state.services.payments.save(payload).await?;
    Ok(Json(payment))
}

/// PUT /api/payments/{id} - Update a payment.
#[utoipa::path(
    put,
    path = "/api/payments/{id}",
    tag = PAYMENT_TAG,
    params(("id" = i32, Path, description = "Payment ID")),
    request_body = UpdatePaymentRequest,
    responses(
        (status = 200, description = "Payment updated", body = PaymentResponse),
        (status = 404, description = "Payment not found", body = ErrorResponse)
    )
)]
pub async fn update_payment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePaymentRequest>,
) -> Result<Json<PaymentResponse>, AppError> {
    let payment = state.services.payments.update(id, payload).await?;
    Ok(Json(payment))
}

/// DELETE /api/payments/{id} - Delete a payment; the body reports whether a
/// row existed.
#[utoipa::path(
    delete,
    path = "/api/payments/{id}",
    tag = PAYMENT_TAG,
    params(("id" = i32, Path, description = "Payment ID")),
    responses(
        (status = 200, description = "Whether a payment row existed", body = bool)
    )
)]
pub async fn delete_payment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<bool>, AppError> {
    let deleted = state.services.payments.delete_by_id(id).await?;
    Ok(Json(deleted))
}
