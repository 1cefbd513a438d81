//! Payment business logic.

use std::sync::Arc;

use tracing::debug;

use crate::api::dto::{CreatePaymentRequest, PaymentResponse, UpdatePaymentRequest};
use crate::error::{AppError, AppResult};
use crate::repositories::PaymentRepository;

/// Service for payment operations.
#[derive(Clone)]
pub struct PaymentService {
    repo: Arc<dyn PaymentRepository>,
}

impl PaymentService {
    pub fn new(repo: Arc<dyn PaymentRepository>) -> Self {
        Self { repo }
    }

    pub async fn find_all(&self) -> AppResult<Vec<PaymentResponse>> {
        let payments = self.repo.find_all().await?;
        Ok(payments.into_iter().map(PaymentResponse::from).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> AppResult<PaymentResponse> {
        self.repo
            .find_by_id(id)
            .await?
            .map(PaymentResponse::from)
            .ok_or_else(|| AppError::not_found("Payment", id))
    }

    pub async fn find_by_order_id(&self, order_id: i32) -> AppResult<Vec<PaymentResponse>> {
        let payments = self.repo.find_by_order_id(order_id).await?;
        Ok(payments.into_iter().map(PaymentResponse::from).collect())
    }

    pub async fn save(&self, request: CreatePaymentRequest) -> AppResult<PaymentResponse> {
        let new_payment = request.into_new_payment()?;
        debug!(order_id = new_payment.order_id, "creating payment");
        let payment = self.repo.create(new_payment).await?;
        Ok(PaymentResponse::from(payment))
    }

    pub async fn update(&self, id: i32, request: UpdatePaymentRequest) -> AppResult<PaymentResponse> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(AppError::not_found("Payment", id));
        }
        let changes = request.into_changeset()?;
        let payment = self.repo.update(id, changes).await?;
        Ok(PaymentResponse::from(payment))
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
    use crate::models::{Payment, PaymentStatus};
    use crate::repositories::memory::InMemoryPaymentRepo;

    fn sample_payment(id: i32, order_id: i32) -> Payment {
        Payment {
            payment_id: id,
            order_id,
            is_payed: false,
            payment_status: PaymentStatus::NotStarted,
        }
    }

    #[tokio::test]
    async fn find_by_order_id_filters_other_orders() {
        let repo =
            InMemoryPaymentRepo::with_rows(vec![sample_payment(1, 10), sample_payment(2, 20)]);
        let service = PaymentService::new(repo);
        let payments = service.find_by_order_id(10).await.unwrap();
        assert_eq!(payments.len(), 1);
        assert_eq!(payments[0].payment_id, 1);
    }

    #[tokio::test]
    async fn update_transitions_payment_status() {
        let repo = InMemoryPaymentRepo::with_rows(vec![sample_payment(1, 10)]);
        let service = PaymentService::new(repo);
        let request: UpdatePaymentRequest = serde_json::from_value(serde_json::json!({
            "isPayed": true,
            "paymentStatus": "COMPLETED"
        }))
        .unwrap();
        let updated = service.update(1, request).await.unwrap();
        assert!(updated.is_payed);
        assert_eq!(updated.payment_status, PaymentStatus::Completed);
    }

    #[tokio::test]
    async fn update_missing_payment_is_not_found() {
        let service = PaymentService::new(InMemoryPaymentRepo::with_rows(vec![]));
        let request: UpdatePaymentRequest =
            serde_json::from_value(serde_json::json!({"isPayed": true})).unwrap();
        assert!(matches!(
            service.update(3, request).await,
            Err(AppError::NotFound { .. })
        ));
    }
}
