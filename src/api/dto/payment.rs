//! Payment DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppResult;
use crate::models::{NewPayment, Payment, PaymentStatus, UpdatePayment};

/// Request body for creating a new payment.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    pub order_id: i32,
    #[serde(default)]
    pub is_payed: bool,
    /// Initial status; defaults to NOT_STARTED when omitted.
    pub payment_status: Option<String>,
}

impl CreatePaymentRequest {
    /// Converts the request DTO into a NewPayment model for database insertion.
    pub fn into_new_payment(self) -> AppResult<NewPayment> {
        let payment_status = match self.payment_status.as_deref() {
            Some(raw) => raw.parse::<PaymentStatus>()?,
            None => PaymentStatus::NotStarted,
        };
        Ok(NewPayment {
            order_id: self.order_id,
            is_payed: self.is_payed,
            payment_status,
        })
    }
}

/// Request body for updating a payment.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePaymentRequest {
    pub is_payed: Option<bool>,
    pub payment_status: Option<String>,
}

impl UpdatePaymentRequest {
    /// Converts the request DTO into an UpdatePayment changeset.
    pub fn into_changeset(self) -> AppResult<UpdatePayment> {
        let payment_status = match self.payment_status.as_deref() {
            Some(raw) => Some(raw.parse::<PaymentStatus>()?),
            None => None,
        };
        Ok(UpdatePayment {
            is_payed: self.is_payed,
            payment_status,
        })
    }
}

/// Response body for payment data.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub payment_id: i32,
    pub order_id: i32,
    pub is_payed: bool,
    pub payment_status: PaymentStatus,
}

impl From<Payment> for PaymentResponse {
    fn from(payment: Payment) -> Self {
        Self {
            payment_id: payment.payment_id,
            order_id: payment.order_id,
            is_payed: payment.is_payed,
            payment_status: payment.payment_status,
        }
    }
}
