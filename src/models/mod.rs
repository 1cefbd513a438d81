//! Database models organized by resource domain.

mod favourite;
mod order;
mod payment;
mod product;
mod user;

pub use favourite::{Favourite, NewFavourite, UpdateFavourite};
pub use order::{NewOrder, Order, OrderStatus, UpdateOrder};
pub use payment::{NewPayment, Payment, PaymentStatus, UpdatePayment};
pub use product::{Category, NewProduct, Product, UpdateProduct};
pub use user::{
    Credential, NewCredential, NewUser, RoleBasedAuthority, UpdateCredential, UpdateUser, User,
};
