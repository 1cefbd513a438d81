//! Product repository for async database operations.
//!
//! Reads return the product joined with its optional category so the DTO
//! layer can embed the category without a second round trip.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{Category, NewProduct, Product, UpdateProduct};
use crate::schema::{categories, products};

/// A product row together with its optional category row.
pub type ProductRecord = (Product, Option<Category>);

/// Persistence contract for the products domain.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Lists all products with their categories.
    async fn find_all(&self) -> AppResult<Vec<ProductRecord>>;

    /// Finds a product by primary key (`products.product_id = id`).
    async fn find_by_id(&self, id: i32) -> AppResult<Option<ProductRecord>>;

    /// Inserts a product.
    async fn create(&self, new_product: NewProduct) -> AppResult<ProductRecord>;

    /// Applies a partial update to the product row.
    async fn update(&self, id: i32, changes: UpdateProduct) -> AppResult<ProductRecord>;

    /// Deletes by primary key, returning the number of affected rows (0 or 1).
    async fn delete_by_id(&self, id: i32) -> AppResult<usize>;
}

/// PostgreSQL-backed product repository.
#[derive(Clone)]
pub struct PgProductRepository {
    pool: AsyncDbPool,
}

impl PgProductRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    async fn load_category(
        conn: &mut diesel_async::pooled_connection::bb8::PooledConnection<
            '_,
            diesel_async::AsyncPgConnection,
        >,
        category_id: Option<i32>,
    ) -> AppResult<Option<Category>> {
        let Some(id) = category_id else {
            return Ok(None);
        };

        categories::table
            .filter(categories::category_id.eq(id))
            .select(Category::as_select())
            .first(conn)
            .await
            .optional()
            .map_err(AppError::from)
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_all(&self) -> AppResult<Vec<ProductRecord>> {
        let mut conn = self.pool.get().await?;

        products::table
            .left_join(categories::table)
            .select((Product::as_select(), Option::<Category>::as_select()))
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<ProductRecord>> {
        let mut conn = self.pool.get().await?;

        products::table
            .left_join(categories::table)
            .filter(products::product_id.eq(id))
            .select((Product::as_select(), Option::<Category>::as_select()))
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn create(&self, new_product: NewProduct) -> AppResult<ProductRecord> {
        let mut conn = self.pool.get().await?;

        let product: Product = diesel::insert_into(products::table)
            .values(&new_product)
            .returning(Product::as_returning())
            .get_result(&mut conn)
            .await?;

        let category = Self::load_category(&mut conn, product.category_id).await?;
        Ok((product, category))
    }

    async fn update(&self, id: i32, changes: UpdateProduct) -> AppResult<ProductRecord> {
        let mut conn = self.pool.get().await?;

        let product: Product = if changes.is_empty() {
            products::table
                .filter(products::product_id.eq(id))
                .select(Product::as_select())
                .first(&mut conn)
                .await?
        } else {
            diesel::update(products::table.filter(products::product_id.eq(id)))
                .set(&changes)
                .returning(Product::as_returning())
                .get_result(&mut conn)
                .await?
        };

        let category = Self::load_category(&mut conn, product.category_id).await?;
        Ok((product, category))
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<usize> {
        let mut conn = self.pool.get().await?;

        diesel::delete(products::table.filter(products::product_id.eq(id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
