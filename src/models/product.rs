//! Product and category models.
//!
//! A product references zero-or-one category. The entity keeps the
//! `product_name`/`price` column spelling; the API boundary exposes
//! `productTitle`/`priceUnit` (see `api::dto::product`).

use bigdecimal::BigDecimal;
use diesel::prelude::*;

/// Category model for reading from database
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Category {
    pub category_id: i32,
    pub category_name: String,
}

/// Product model for reading from database
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Product {
    pub product_id: i32,
    pub product_name: String,
    pub price: BigDecimal,
    pub quantity: i32,
    pub category_id: Option<i32>,
}

/// NewProduct model for inserting new records
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct {
    pub product_name: String,
    pub price: BigDecimal,
    pub quantity: i32,
    pub category_id: Option<i32>,
}

/// UpdateProduct model for partial updates
#[derive(Debug, AsChangeset, Clone, Default)]
#[diesel(table_name = crate::schema::products)]
pub struct UpdateProduct {
    pub product_name: Option<String>,
    pub price: Option<BigDecimal>,
    pub quantity: Option<i32>,
    pub category_id: Option<Option<i32>>,
}

impl UpdateProduct {
    /// True when no field is set; diesel rejects empty changesets.
    pub fn is_empty(&self) -> bool {
        self.product_name.is_none()
            && self.price.is_none()
            && self.quantity.is_none()
            && self.category_id.is_none()
    }
}
