//! Favourite business logic.

use std::sync::Arc;

use tracing::debug;

use crate::api::dto::{CreateFavouriteRequest, FavouriteResponse, UpdateFavouriteRequest};
use crate::error::{AppError, AppResult};
use crate::repositories::FavouriteRepository;

/// Service for favourite operations.
#[derive(Clone)]
pub struct FavouriteService {
    repo: Arc<dyn FavouriteRepository>,
}

impl FavouriteService {
    pub fn new(repo: Arc<dyn FavouriteRepository>) -> Self {
        Self { repo }
    }

    pub async fn find_all(&self) -> AppResult<Vec<FavouriteResponse>> {
        let favourites = self.repo.find_all().await?;
        Ok(favourites.into_iter().map(FavouriteResponse::from).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> AppResult<FavouriteResponse> {
        self.repo
            .find_by_id(id)
            .await?
            .map(FavouriteResponse::from)
            .ok_or_else(|| AppError::not_found("Favourite", id))
    }

    pub async fn find_by_user_id(&self, user_id: i32) -> AppResult<Vec<FavouriteResponse>> {
        let favourites = self.repo.find_by_user_id(user_id).await?;
        Ok(favourites.into_iter().map(FavouriteResponse::from).collect())
    }

    pub async fn save(&self, request: CreateFavouriteRequest) -> AppResult<FavouriteResponse> {
        let new_favourite = request.into_new_favourite();
        debug!(
            user_id = new_favourite.user_id,
            product_id = new_favourite.product_id,
            "creating favourite"
        );
        let favourite = self.repo.create(new_favourite).await?;
        Ok(FavouriteResponse::from(favourite))
    }

    pub async fn update(
        &self,
        id: i32,
        request: UpdateFavouriteRequest,
    ) -> AppResult<FavouriteResponse> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(AppError::not_found("Favourite", id));
        }
        let favourite = self.repo.update(id, request.into_changeset()).await?;
        Ok(FavouriteResponse::from(favourite))
    }

    /// Returns true iff a row existed. A missing id is not an error.
    pub async fn delete_by_id(&self, id: i32) -> AppResult<bool> {
        let affected = self.repo.delete_by_id(id).await?;
        Ok(affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Favourite;
    use crate::repositories::memory::InMemoryFavouriteRepo;

    fn sample_favourite(id: i32, user_id: i32) -> Favourite {
        Favourite {
            favourite_id: id,
            user_id,
            product_id: 5,
            like_date: jiff::civil::date(2026, 2, 1).at(12, 0, 0, 0).into(),
        }
    }

    #[tokio::test]
    async fn find_by_user_id_filters_other_users() {
        let repo =
            InMemoryFavouriteRepo::with_rows(vec![sample_favourite(1, 3), sample_favourite(2, 4)]);
        let service = FavouriteService::new(repo);
        let favourites = service.find_by_user_id(3).await.unwrap();
        assert_eq!(favourites.len(), 1);
        assert_eq!(favourites[0].favourite_id, 1);
    }

    #[tokio::test]
    async fn save_assigns_id_and_like_date() {
        let service = FavouriteService::new(InMemoryFavouriteRepo::with_rows(vec![]));
        let request: CreateFavouriteRequest =
            serde_json::from_value(serde_json::json!({"userId": 3, "productId": 5})).unwrap();
        let created = service.save(request).await.unwrap();
        assert_eq!(created.favourite_id, 1);
        assert!(!created.like_date.is_empty());
    }

    #[tokio::test]
    async fn delete_twice_returns_true_then_false() {
        let service =
            FavouriteService::new(InMemoryFavouriteRepo::with_rows(vec![sample_favourite(1, 3)]));
        assert!(service.delete_by_id(1).await.unwrap());
        assert!(!service.delete_by_id(1).await.unwrap());
    }
}
