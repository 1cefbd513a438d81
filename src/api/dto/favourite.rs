//! Favourite DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Favourite, NewFavourite, UpdateFavourite};

/// Request body for creating a new favourite.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFavouriteRequest {
    pub user_id: i32,
    pub product_id: i32,
}

impl CreateFavouriteRequest {
    pub fn into_new_favourite(self) -> NewFavourite {
        NewFavourite {
            user_id: self.user_id,
            product_id: self.product_id,
        }
    }
}

/// Request body for updating a favourite.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFavouriteRequest {
    pub user_id: Option<i32>,
    pub product_id: Option<i32>,
}

impl UpdateFavouriteRequest {
    pub fn into_changeset(self) -> UpdateFavourite {
        UpdateFavourite {
            user_id: self.user_id,
            product_id: self.product_id,
        }
    }
}

/// Response body for favourite data.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavouriteResponse {
    pub favourite_id: i32,
    pub user_id: i32,
    pub product_id: i32,
    pub like_date: String,
}

impl From<Favourite> for FavouriteResponse {
    fn from(favourite: Favourite) -> Self {
        Self {
            favourite_id: favourite.favourite_id,
            user_id: favourite.user_id,
            product_id: favourite.product_id,
            like_date: jiff::civil::DateTime::from(favourite.like_date).to_string(),
        }
    }
}
