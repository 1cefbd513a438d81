//! Application state for Axum handlers.

use crate::db::AsyncDbPool;
use crate::repositories::Repositories;
use crate::services::Services;

/// Application state containing all shared services and resources.
///
/// This struct is designed to be used with Axum's State extractor.
/// Cloning is cheap since both Services and AsyncDbPool use Arc internally.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
    /// Direct access to the database connection pool (health checks)
    pub db_pool: AsyncDbPool,
}

impl AppState {
    /// Creates a new AppState from a database connection pool.
    ///
    /// Initializes all repositories and services from the provided pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        let repositories = Repositories::new(pool.clone());
        let services = Services::new(&repositories);
        Self {
            services,
            db_pool: pool,
        }
    }

    /// State wired to caller-supplied services, with a pool that never
    /// connects. Handler tests route through this.
    #[cfg(test)]
    pub fn with_services(services: Services) -> Self {
        use diesel_async::AsyncPgConnection;
        use diesel_async::pooled_connection::AsyncDieselConnectionManager;
        use diesel_async::pooled_connection::bb8::Pool;

        let manager =
            AsyncDieselConnectionManager::<AsyncPgConnection>::new("postgres://localhost/unused");
        let db_pool = Pool::builder().build_unchecked(manager);
        Self { services, db_pool }
    }
}
