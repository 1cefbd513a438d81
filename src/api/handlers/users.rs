//! User CRUD request handlers.
//!
//! Provides HTTP handlers for user management, including the username
//! lookup that resolves a user through their credential.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use validator::Validate;

use crate::api::doc::USER_TAG;
use crate::api::dto::{
    CollectionResponse, CreateUserRequest, ErrorResponse, UpdateUserRequest, UserResponse,
};
use crate::error::AppError;
use crate::state::AppState;

/// Creates user-related routes.
///
/// Routes:
/// - GET /                      - List all users
/// - POST /                     - Create a new user
/// - GET /{id}                  - Get user by ID
/// - PUT /{id}                  - Update user by ID
/// - DELETE /{id}               - Delete user by ID
/// - GET /username/{username}   - Get user by credential username
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
        .route("/username/{username}", get(get_user_by_username))
}

/// GET /api/users - List all users wrapped in the collection envelope.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = CollectionResponse<UserResponse>)
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<CollectionResponse<UserResponse>>, AppError> {
    let users = state.services.users.find_all().await?;
    Ok(Json(CollectionResponse::new(users)))
}

/// GET /api/users/{id} - Get user by ID or 404.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.services.users.find_by_id(id).await?;
    Ok(Json(user))
}

/// GET /api/users/username/{username} - Resolve a user by credential username.
#[utoipa::path(
    get,
    path = "/api/users/username/{username}",
    tag = USER_TAG,
    params(("username" = String, Path, description = "Credential username")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "No credential with that username", body = ErrorResponse)
    )
)]
pub async fn get_user_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    state
        .services
        .users
        .find_by_username(&username)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound {
            entity: "User".to_string(),
            field: "username".to_string(),
            value: username,
        })
}

/// POST /api/users - Create a new user (with optional nested credential).
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    payload.validate()?;
    let user = state.services.users.save(payload).await?;
    Ok(Json(user))
}

/// PUT /api/users/{id} - Update a user.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    payload.validate()?;
    let user = state.services.users.update(id, payload).await?;
    Ok(Json(user))
}

/// DELETE /api/users/{id} - Delete a user; the body reports whether a row
/// existed.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Whether a user row existed", body = bool)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<bool>, AppError> {
    let deleted = state.services.users.delete_by_id(id).await?;
    Ok(Json(deleted))
}
