//! Order-related DTOs for API requests and responses.

use bigdecimal::{BigDecimal, ToPrimitive};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::{NewOrder, Order, OrderStatus, UpdateOrder};

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating a new order.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub user_id: i32,
    #[validate(range(min = 0.0, message = "Amount must not be negative"))]
    pub total_amount: f64,
    /// Initial status; defaults to PENDING when omitted.
    pub status: Option<String>,
}

impl CreateOrderRequest {
    /// Converts the request DTO into a NewOrder model for database insertion.
    ///
    /// Rejects unknown status values before anything is persisted.
    pub fn into_new_order(self) -> AppResult<NewOrder> {
        let status = match self.status.as_deref() {
            Some(raw) => raw.parse::<OrderStatus>()?,
            None => OrderStatus::Pending,
        };

        Ok(NewOrder {
            user_id: self.user_id,
            total_amount: decimal_from_f64(self.total_amount, "totalAmount")?,
            status,
        })
    }
}

/// Request body for updating an order.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    pub user_id: Option<i32>,
    #[validate(range(min = 0.0, message = "Amount must not be negative"))]
    pub total_amount: Option<f64>,
    pub status: Option<String>,
}

impl UpdateOrderRequest {
    /// Converts the request DTO into an UpdateOrder changeset.
    pub fn into_changeset(self) -> AppResult<UpdateOrder> {
        let status = match self.status.as_deref() {
            Some(raw) => Some(raw.parse::<OrderStatus>()?),
            None => None,
        };
        let total_amount = match self.total_amount {
            Some(amount) => Some(decimal_from_f64(amount, "totalAmount")?),
            None => None,
        };

        Ok(UpdateOrder {
            user_id: self.user_id,
            total_amount,
            status,
        })
    }
}

/// Request body for the status-transition endpoint.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderStatusRequest {
    pub status: String,
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Response body for order data.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub order_id: i32,
    pub user_id: i32,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub order_date: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            order_id: order.order_id,
            user_id: order.user_id,
            total_amount: order.total_amount.to_f64().unwrap_or_default(),
            status: order.status,
            order_date: jiff::civil::DateTime::from(order.order_date).to_string(),
        }
    }
}

/// Converts a JSON float into the NUMERIC representation used in storage.
pub(crate) fn decimal_from_f64(value: f64, field: &str) -> AppResult<BigDecimal> {
    BigDecimal::try_from(value).map_err(|_| AppError::Validation {
        field: field.to_string(),
        reason: format!("'{}' is not a representable amount", value),
    })
}
