//! Shared helpers for exercising handlers with in-memory repositories.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::models::{Favourite, Order, Payment};
use crate::repositories::memory::{
    InMemoryFavouriteRepo, InMemoryOrderRepo, InMemoryPaymentRepo, InMemoryProductRepo,
    InMemoryUserRepo,
};
use crate::repositories::{ProductRecord, UserRecord};
use crate::services::{
    FavouriteService, OrderService, PaymentService, ProductService, Services, UserService,
};
use crate::state::AppState;

/// Seed rows for a handler test. Unseeded repositories start empty.
#[derive(Default)]
pub struct Seed {
    pub users: Vec<UserRecord>,
    pub products: Vec<ProductRecord>,
    pub orders: Vec<Order>,
    pub payments: Vec<Payment>,
    pub favourites: Vec<Favourite>,
}

pub fn state_with(seed: Seed) -> AppState {
    let services = Services {
        users: UserService::new(InMemoryUserRepo::with_rows(seed.users)),
        products: ProductService::new(InMemoryProductRepo::with_rows(seed.products)),
        orders: OrderService::new(InMemoryOrderRepo::with_rows(seed.orders)),
        payments: PaymentService::new(InMemoryPaymentRepo::with_rows(seed.payments)),
        favourites: FavouriteService::new(InMemoryFavouriteRepo::with_rows(seed.favourites)),
    };
    AppState::with_services(services)
}

pub async fn send(router: Router, request: Request<Body>) -> Response<Body> {
    router.oneshot(request).await.unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
