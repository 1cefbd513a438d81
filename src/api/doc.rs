use utoipa::OpenApi;

pub const USER_TAG: &str = "Users";
pub const PRODUCT_TAG: &str = "Products";
pub const ORDER_TAG: &str = "Orders";
pub const PAYMENT_TAG: &str = "Payments";
pub const FAVOURITE_TAG: &str = "Favourites";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Storefront",
        description = "A storefront backend exposing user, product, order, payment and favourite resources",
    ),
    paths(
        crate::api::handlers::users::list_users,
        crate::api::handlers::users::get_user,
        crate::api::handlers::users::get_user_by_username,
        crate::api::handlers::users::create_user,
        crate::api::handlers::users::update_user,
        crate::api::handlers::users::delete_user,
        crate::api::handlers::products::list_products,
        crate::api::handlers::products::get_product,
        crate::api::handlers::products::create_product,
        crate::api::handlers::products::update_product,
        crate::api::handlers::products::delete_product,
        crate::api::handlers::orders::list_orders,
        crate::api::handlers::orders::get_order,
        crate::api::handlers::orders::list_orders_by_user,
        crate::api::handlers::orders::create_order,
        crate::api::handlers::orders::update_order,
        crate::api::handlers::orders::update_order_status,
        crate::api::handlers::orders::delete_order,
        crate::api::handlers::payments::list_payments,
        crate::api::handlers::payments::get_payment,
        crate::api::handlers::payments::list_payments_by_order,
        crate::api::handlers::payments::create_payment,
        crate::api::handlers::payments::update_payment,
        crate::api::handlers::payments::delete_payment,
        crate::api::handlers::favourites::list_favourites,
        crate::api::handlers::favourites::get_favourite,
        crate::api::handlers::favourites::list_favourites_by_user,
        crate::api::handlers::favourites::create_favourite,
        crate::api::handlers::favourites::update_favourite,
        crate::api::handlers::favourites::delete_favourite,
        crate::api::handlers::health::health_check,
        crate::api::handlers::health::readiness_check,
        crate::api::handlers::health::liveness_check,
    ),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
            crate::api::dto::CollectionResponse<crate::api::dto::UserResponse>,
            crate::api::dto::CollectionResponse<crate::api::dto::ProductResponse>,
            crate::api::dto::CollectionResponse<crate::api::dto::OrderResponse>,
            crate::api::dto::CollectionResponse<crate::api::dto::PaymentResponse>,
            crate::api::dto::CollectionResponse<crate::api::dto::FavouriteResponse>,
            crate::api::dto::UserResponse,
            crate::api::dto::CredentialResponse,
            crate::api::dto::CreateUserRequest,
            crate::api::dto::UpdateUserRequest,
            crate::api::dto::ProductResponse,
            crate::api::dto::CategoryDto,
            crate::api::dto::CreateProductRequest,
            crate::api::dto::UpdateProductRequest,
            crate::api::dto::OrderResponse,
            crate::api::dto::CreateOrderRequest,
            crate::api::dto::UpdateOrderRequest,
            crate::api::dto::UpdateOrderStatusRequest,
            crate::api::dto::PaymentResponse,
            crate::api::dto::CreatePaymentRequest,
            crate::api::dto::UpdatePaymentRequest,
            crate::api::dto::FavouriteResponse,
            crate::api::dto::CreateFavouriteRequest,
            crate::api::dto::UpdateFavouriteRequest,
        )
    ),
    tags(
        (name = USER_TAG, description = "User and credential management endpoints"),
        (name = PRODUCT_TAG, description = "Product catalogue endpoints"),
        (name = ORDER_TAG, description = "Order lifecycle endpoints"),
        (name = PAYMENT_TAG, description = "Payment endpoints"),
        (name = FAVOURITE_TAG, description = "Favourite (wishlist) endpoints"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_documents_every_resource_collection() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/users",
            "/api/users/{id}",
            "/api/users/username/{username}",
            "/api/products",
            "/api/products/{id}",
            "/api/orders",
            "/api/orders/{id}",
            "/api/orders/{id}/status",
            "/api/orders/user/{user_id}",
            "/api/payments",
            "/api/payments/order/{order_id}",
            "/api/favourites",
            "/api/favourites/user/{user_id}",
            "/health",
        ] {
            assert!(
                doc.paths.paths.contains_key(path),
                "missing path {path} in OpenAPI document"
            );
        }
    }

    #[test]
    fn openapi_registers_resource_schemas() {
        let doc = ApiDoc::openapi();
        let components = doc.components.as_ref().unwrap();
        for schema in [
            "ErrorResponse",
            "UserResponse",
            "ProductResponse",
            "OrderResponse",
            "PaymentResponse",
            "FavouriteResponse",
        ] {
            assert!(
                components.schemas.contains_key(schema),
                "missing schema {schema}"
            );
        }
    }
}
