//! User repository for async database operations.
//!
//! Users carry an optional 1:1 credential; every read returns the joined
//! pair so the service layer never issues a second lookup.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{Credential, NewCredential, NewUser, UpdateCredential, UpdateUser, User};
use crate::schema::{credentials, users};

/// A user row together with its optional credential row.
pub type UserRecord = (User, Option<Credential>);

/// Persistence contract for the users domain.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Lists all users with their credentials.
    async fn find_all(&self) -> AppResult<Vec<UserRecord>>;

    /// Finds a user by primary key (`users.user_id = id`).
    async fn find_by_id(&self, id: i32) -> AppResult<Option<UserRecord>>;

    /// Finds the user owning the credential with the given username
    /// (`credentials.username = username`, joined back to the user row).
    async fn find_by_credential_username(&self, username: &str) -> AppResult<Option<UserRecord>>;

    /// Inserts a user and, when provided, its credential in one transaction.
    async fn create(
        &self,
        new_user: NewUser,
        credential: Option<NewCredential>,
    ) -> AppResult<UserRecord>;

    /// Applies partial updates to the user row and its credential row.
    async fn update(
        &self,
        id: i32,
        update_user: UpdateUser,
        update_credential: Option<UpdateCredential>,
    ) -> AppResult<UserRecord>;

    /// Deletes by primary key, returning the number of affected rows (0 or 1).
    /// The credential row goes with it via the FK cascade.
    async fn delete_by_id(&self, id: i32) -> AppResult<usize>;
}

/// PostgreSQL-backed user repository.
///
/// Since `AsyncDbPool` (bb8::Pool) internally uses `Arc`, cloning is cheap.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: AsyncDbPool,
}

impl PgUserRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_all(&self) -> AppResult<Vec<UserRecord>> {
        let mut conn = self.pool.get().await?;

        users::table
            .left_join(credentials::table)
            .select((User::as_select(), Option::<Credential>::as_select()))
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<UserRecord>> {
        let mut conn = self.pool.get().await?;

        users::table
            .left_join(credentials::table)
            .filter(users::user_id.eq(id))
            .select((User::as_select(), Option::<Credential>::as_select()))
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn find_by_credential_username(&self, username: &str) -> AppResult<Option<UserRecord>> {
        let mut conn = self.pool.get().await?;

        users::table
            .inner_join(credentials::table)
            .filter(credentials::username.eq(username))
            .select((User::as_select(), Credential::as_select()))
            .first::<(User, Credential)>(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
            .map(|row| row.map(|(user, credential)| (user, Some(credential))))
    }

    async fn create(
        &self,
        new_user: NewUser,
        credential: Option<NewCredential>,
    ) -> AppResult<UserRecord> {
        let mut conn = self.pool.get().await?;

        conn.transaction::<UserRecord, AppError, _>(|conn| {
            async move {
                let user: User = diesel::insert_into(users::table)
                    .values(&new_user)
                    .returning(User::as_returning())
                    .get_result(conn)
                    .await?;

                let credential = match credential {
                    Some(values) => {
                        let credential: Credential = diesel::insert_into(credentials::table)
                            .values((
                                credentials::user_id.eq(user.user_id),
                                credentials::username.eq(values.username),
                                credentials::password.eq(values.password),
                                credentials::role_based_authority
                                    .eq(values.role_based_authority),
                                credentials::is_enabled.eq(values.is_enabled),
                                credentials::is_account_non_expired
                                    .eq(values.is_account_non_expired),
                                credentials::is_account_non_locked
                                    .eq(values.is_account_non_locked),
                                credentials::is_credentials_non_expired
                                    .eq(values.is_credentials_non_expired),
                            ))
                            .returning(Credential::as_returning())
                            .get_result(conn)
                            .await?;
                        Some(credential)
                    }
                    None => None,
                };

                Ok((user, credential))
            }
            .scope_boxed()
        })
        .await
    }

    async fn update(
        &self,
        id: i32,
        update_user: UpdateUser,
        update_credential: Option<UpdateCredential>,
    ) -> AppResult<UserRecord> {
        let mut conn = self.pool.get().await?;

        conn.transaction::<UserRecord, AppError, _>(|conn| {
            async move {
                let user: User = if update_user.is_empty() {
                    users::table
                        .filter(users::user_id.eq(id))
                        .select(User::as_select())
                        .first(conn)
                        .await?
                } else {
                    diesel::update(users::table.filter(users::user_id.eq(id)))
                        .set(&update_user)
                        .returning(User::as_returning())
                        .get_result(conn)
                        .await?
                };

                if let Some(changes) = update_credential {
                    if !changes.is_empty() {
                        diesel::update(credentials::table.filter(credentials::user_id.eq(id)))
                            .set(&changes)
                            .execute(conn)
                            .await?;
                    }
                }

                let credential = credentials::table
                    .filter(credentials::user_id.eq(id))
                    .select(Credential::as_select())
                    .first(conn)
                    .await
                    .optional()?;

                Ok((user, credential))
            }
            .scope_boxed()
        })
        .await
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<usize> {
        let mut conn = self.pool.get().await?;

        diesel::delete(users::table.filter(users::user_id.eq(id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
