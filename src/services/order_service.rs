//! Order business logic, including the status transition endpoint.

use std::sync::Arc;

use tracing::{debug, info};

use crate::api::dto::{CreateOrderRequest, OrderResponse, UpdateOrderRequest};
use crate::error::{AppError, AppResult};
use crate::models::{OrderStatus, UpdateOrder};
use crate::repositories::OrderRepository;

/// Service for order operations.
#[derive(Clone)]
pub struct OrderService {
    repo: Arc<dyn OrderRepository>,
}

impl OrderService {
    pub fn new(repo: Arc<dyn OrderRepository>) -> Self {
        Self { repo }
    }

    pub async fn find_all(&self) -> AppResult<Vec<OrderResponse>> {
        let orders = self.repo.find_all().await?;
        Ok(orders.into_iter().map(OrderResponse::from).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> AppResult<OrderResponse> {
        self.repo
            .find_by_id(id)
            .await?
            .map(OrderResponse::from)
            .ok_or_else(|| AppError::not_found("Order", id))
    }

    pub async fn find_by_user_id(&self, user_id: i32) -> AppResult<Vec<OrderResponse>> {
        let orders = self.repo.find_by_user_id(user_id).await?;
        Ok(orders.into_iter().map(OrderResponse::from).collect())
    }

    pub async fn save(&self, request: CreateOrderRequest) -> AppResult<OrderResponse> {
        let new_order = request.into_new_order()?;
        debug!(user_id = new_order.user_id, "creating order");
        let order = self.repo.create(new_order).await?;
        Ok(OrderResponse::from(order))
    }

    pub async fn update(&self, id: i32, request: UpdateOrderRequest) -> AppResult<OrderResponse> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(AppError::not_found("Order", id));
        }
        let changes = request.into_changeset()?;
        let order = self.repo.update(id, changes).await?;
        Ok(OrderResponse::from(order))
    }

    /// Moves an order to a new status. The raw string is validated against
    /// the known status set before the row is touched.
    pub async fn update_status(&self, id: i32, status_str: &str) -> AppResult<OrderResponse> {
        let status = status_str.parse::<OrderStatus>()?;
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(AppError::not_found("Order", id));
        }
        let changes = UpdateOrder {
            status: Some(status),
            ..UpdateOrder::default()
        };
        let order = self.repo.update(id, changes).await?;
        info!(order_id = id, status = status.as_str(), "order status updated");
        Ok(OrderResponse::from(order))
    }

    /// Returns true iff a row existed. A missing id is not an error.
    pub async fn delete_by_id(&self, id: i32) -> AppResult<bool> {
        let affected = self.repo.delete_by_id(id).await?;
        Ok(affected > 0)
    }
}
