//! Business logic layer.
//!
//! Services sit between the HTTP handlers and the repositories: they own
//! existence checks, DTO mapping, and the status/role string parsing that
//! must happen before anything touches the database.

mod favourite_service;
mod order_service;
mod payment_service;
mod product_service;
mod user_service;

pub use favourite_service::FavouriteService;
pub use order_service::OrderService;
pub use payment_service::PaymentService;
pub use product_service::ProductService;
pub use user_service::UserService;

use crate::repositories::Repositories;

/// Aggregates all services for dependency injection into handlers.
#[derive(Clone)]
pub struct Services {
    pub users: UserService,
    pub products: ProductService,
    pub orders: OrderService,
    pub payments: PaymentService,
    pub favourites: FavouriteService,
}

impl Services {
    pub fn new(repositories: &Repositories) -> Self {
        Self {
            users: UserService::new(repositories.users.clone()),
            products: ProductService::new(repositories.products.clone()),
            orders: OrderService::new(repositories.orders.clone()),
            payments: PaymentService::new(repositories.payments.clone()),
            favourites: FavouriteService::new(repositories.favourites.clone()),
        }
    }
}
