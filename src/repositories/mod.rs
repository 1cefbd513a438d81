//! Repository layer for data access operations.
//!
//! Each domain exposes a repository trait (the persistence contract the
//! services depend on) together with its diesel-async PostgreSQL
//! implementation. Derived lookups are explicit trait methods with their
//! filter predicate documented on the method.

mod favourite_repo;
#[cfg(test)]
pub mod memory;
mod order_repo;
mod payment_repo;
mod product_repo;
mod user_repo;

use std::sync::Arc;

pub use favourite_repo::{FavouriteRepository, PgFavouriteRepository};
pub use order_repo::{OrderRepository, PgOrderRepository};
pub use payment_repo::{PaymentRepository, PgPaymentRepository};
pub use product_repo::{PgProductRepository, ProductRecord, ProductRepository};
pub use user_repo::{PgUserRepository, UserRecord, UserRepository};

use crate::db::AsyncDbPool;

/// Aggregates all repositories for convenient access.
///
/// Repositories are held as trait objects so the service layer stays
/// independent of the storage engine. Cloning is cheap (Arc handles).
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub orders: Arc<dyn OrderRepository>,
    pub payments: Arc<dyn PaymentRepository>,
    pub favourites: Arc<dyn FavouriteRepository>,
}

impl Repositories {
    /// Creates a new Repositories instance backed by PostgreSQL.
    ///
    /// # Arguments
    /// * `pool` - The async database connection pool
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            users: Arc::new(PgUserRepository::new(pool.clone())),
            products: Arc::new(PgProductRepository::new(pool.clone())),
            orders: Arc::new(PgOrderRepository::new(pool.clone())),
            payments: Arc::new(PgPaymentRepository::new(pool.clone())),
            favourites: Arc::new(PgFavouriteRepository::new(pool)),
        }
    }
}
