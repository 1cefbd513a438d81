//! Order repository for async database operations.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{NewOrder, Order, UpdateOrder};
use crate::schema::orders;

/// Persistence contract for the orders domain.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Lists all orders.
    async fn find_all(&self) -> AppResult<Vec<Order>>;

    /// Finds an order by primary key (`orders.order_id = id`).
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Order>>;

    /// Lists orders placed by a user (`orders.user_id = user_id`).
    async fn find_by_user_id(&self, user_id: i32) -> AppResult<Vec<Order>>;

    /// Inserts an order.
    async fn create(&self, new_order: NewOrder) -> AppResult<Order>;

    /// Applies a partial update to the order row.
    async fn update(&self, id: i32, changes: UpdateOrder) -> AppResult<Order>;

    /// Deletes by primary key, returning the number of affected rows (0 or 1).
    async fn delete_by_id(&self, id: i32) -> AppResult<usize>;
}

/// PostgreSQL-backed order repository.
#[derive(Clone)]
pub struct PgOrderRepository {
    pool: AsyncDbPool,
}

impl PgOrderRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn find_all(&self) -> AppResult<Vec<Order>> {
        let mut conn = self.pool.get().await?;

        orders::table
            .select(Order::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Order>> {
        let mut conn = self.pool.get().await?;

        orders::table
            .filter(orders::order_id.eq(id))
            .select(Order::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn find_by_user_id(&self, user_id: i32) -> AppResult<Vec<Order>> {
        let mut conn = self.pool.get().await?;

        orders::table
            .filter(orders::user_id.eq(user_id))
            .select(Order::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn create(&self, new_order: NewOrder) -> AppResult<Order> {
        let mut conn = self.pool.get().await?;

        diesel::insert_into(orders::table)
            .values(&new_order)
            .returning(Order::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn update(&self, id: i32, changes: UpdateOrder) -> AppResult<Order> {
        let mut conn = self.pool.get().await?;

        if changes.is_empty() {
            return orders::table
                .filter(orders::order_id.eq(id))
                .select(Order::as_select())
                .first(&mut conn)
                .await
                .map_err(AppError::from);
        }

        diesel::update(orders::table.filter(orders::order_id.eq(id)))
            .set(&changes)
            .returning(Order::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<usize> {
        let mut conn = self.pool.get().await?;

        diesel::delete(orders::table.filter(orders::order_id.eq(id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
