//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by domain:
//! - `user`, `product`, `order`, `payment`, `favourite` - resource DTOs
//! - `collection` - the list-response envelope
//! - `error` - common error response DTOs
//!
//! Conversion functions between DTOs and models live next to the DTOs and
//! are pure: no side effects, fields absent in the target shape are
//! dropped, fields absent in the source default.

mod collection;
mod error;
mod favourite;
mod order;
mod payment;
mod product;
mod user;

pub use collection::CollectionResponse;
pub use error::ErrorResponse;
pub use favourite::{CreateFavouriteRequest, FavouriteResponse, UpdateFavouriteRequest};
pub use order::{
    CreateOrderRequest, OrderResponse, UpdateOrderRequest, UpdateOrderStatusRequest,
};
pub use payment::{CreatePaymentRequest, PaymentResponse, UpdatePaymentRequest};
pub use product::{
    CategoryDto, CreateProductRequest, ProductResponse, UpdateProductRequest,
};
pub use user::{
    CreateCredentialRequest, CreateUserRequest, CredentialResponse, UpdateCredentialRequest,
    UpdateUserRequest, UserResponse,
};
