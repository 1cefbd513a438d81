//! Favourite models (a user liking a product).

use diesel::prelude::*;
use jiff_diesel::DateTime;

/// Favourite model for reading from database
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::favourites)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Favourite {
    pub favourite_id: i32,
    pub user_id: i32,
    pub product_id: i32,
    pub like_date: DateTime,
}

/// NewFavourite model for inserting new records
///
/// `like_date` is assigned by the database on insert.
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::favourites)]
pub struct NewFavourite {
    pub user_id: i32,
    pub product_id: i32,
}

/// UpdateFavourite model for partial updates
#[derive(Debug, AsChangeset, Clone, Default)]
#[diesel(table_name = crate::schema::favourites)]
pub struct UpdateFavourite {
    pub user_id: Option<i32>,
    pub product_id: Option<i32>,
}

impl UpdateFavourite {
    /// True when no field is set; diesel rejects empty changesets.
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none() && self.product_id.is_none()
    }
}
