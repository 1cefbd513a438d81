//! Favourite repository for async database operations.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{Favourite, NewFavourite, UpdateFavourite};
use crate::schema::favourites;

/// Persistence contract for the favourites domain.
#[async_trait]
pub trait FavouriteRepository: Send + Sync {
    /// Lists all favourites.
    async fn find_all(&self) -> AppResult<Vec<Favourite>>;

    /// Finds a favourite by primary key (`favourites.favourite_id = id`).
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Favourite>>;

    /// Lists favourites belonging to a user (`favourites.user_id = user_id`).
    async fn find_by_user_id(&self, user_id: i32) -> AppResult<Vec<Favourite>>;

    /// Inserts a favourite; `like_date` is set by the database.
    async fn create(&self, new_favourite: NewFavourite) -> AppResult<Favourite>;

    /// Applies a partial update to the favourite row.
    async fn update(&self, id: i32, changes: UpdateFavourite) -> AppResult<Favourite>;

    /// Deletes by primary key, returning the number of affected rows (0 or 1).
    async fn delete_by_id(&self, id: i32) -> AppResult<usize>;
}

/// PostgreSQL-backed favourite repository.
#[derive(Clone)]
pub struct PgFavouriteRepository {
    pool: AsyncDbPool,
}

impl PgFavouriteRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavouriteRepository for PgFavouriteRepository {
    async fn find_all(&self) -> AppResult<Vec<Favourite>> {
        let mut conn = self.pool.get().await?;

        favourites::table
            .select(Favourite::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Favourite>> {
        let mut conn = self.pool.get().await?;

        favourites::table
            .filter(favourites::favourite_id.eq(id))
            .select(Favourite::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn find_by_user_id(&self, user_id: i32) -> AppResult<Vec<Favourite>> {
        let mut conn = self.pool.get().await?;

        favourites::table
            .filter(favourites::user_id.eq(user_id))
            .select(Favourite::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn create(&self, new_favourite: NewFavourite) -> AppResult<Favourite> {
        let mut conn = self.pool.get().await?;

        diesel::insert_into(favourites::table)
            .values(&new_favourite)
            .returning(Favourite::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn update(&self, id: i32, changes: UpdateFavourite) -> AppResult<Favourite> {
        let mut conn = self.pool.get().await?;

        if changes.is_empty() {
            return favourites::table
                .filter(favourites::favourite_id.eq(id))
                .select(Favourite::as_select())
                .first(&mut conn)
                .await
                .map_err(AppError::from);
        }

        diesel::update(favourites::table.filter(favourites::favourite_id.eq(id)))
            .set(&changes)
            .returning(Favourite::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<usize> {
        let mut conn = self.pool.get().await?;

        diesel::delete(favourites::table.filter(favourites::favourite_id.eq(id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
