//! Payment repository for async database operations.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{NewPayment, Payment, UpdatePayment};
use crate::schema::payments;

/// Persistence contract for the payments domain.
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Lists all payments.
    async fn find_all(&self) -> AppResult<Vec<Payment>>;

    /// Finds a payment by primary key (`payments.payment_id = id`).
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Payment>>;

    /// Lists payments attached to an order (`payments.order_id = order_id`).
    async fn find_by_order_id(&self, order_id: i32) -> AppResult<Vec<Payment>>;

    /// Inserts a payment.
    async fn create(&self, new_payment: NewPayment) -> AppResult<Payment>;

    /// Applies a partial update to the payment row.
    async fn update(&self, id: i32, changes: UpdatePayment) -> AppResult<Payment>;

    /// Deletes by primary key, returning the number of affected rows (0 or 1).
    async fn delete_by_id(&self, id: i32) -> AppResult<usize>;
}

/// PostgreSQL-backed payment repository.
#[derive(Clone)]
pub struct PgPaymentRepository {
    pool: AsyncDbPool,
}

impl PgPaymentRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaymentRepository for PgPaymentRepository {
    async fn find_all(&self) -> AppResult<Vec<Payment>> {
        let mut conn = self.pool.get().await?;

        payments::table
            .select(Payment::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Payment>> {
        let mut conn = self.pool.get().await?;

        payments::table
            .filter(payments::payment_id.eq(id))
            .select(Payment::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn find_by_order_id(&self, order_id: i32) -> AppResult<Vec<Payment>> {
        let mut conn = self.pool.get().await?;

        payments::table
            .filter(payments::order_id.eq(order_id))
            .select(Payment::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn create(&self, new_payment: NewPayment) -> AppResult<Payment> {
        let mut conn = self.pool.get().await?;

        diesel::insert_into(payments::table)
            .values(&new_payment)
            .returning(Payment::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn update(&self, id: i32, changes: UpdatePayment) -> AppResult<Payment> {
        let mut conn = self.pool.get().await?;

        if changes.is_empty() {
            return payments::table
                .filter(payments::payment_id.eq(id))
                .select(Payment::as_select())
                .first(&mut conn)
                .await
                .map_err(AppError::from);
        }

        diesel::update(payments::table.filter(payments::payment_id.eq(id)))
            .set(&changes)
            .returning(Payment::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<usize> {
        let mut conn = self.pool.get().await?;

        diesel::delete(payments::table.filter(payments::payment_id.eq(id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
