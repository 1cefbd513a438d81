//! Favourite CRUD request handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::api::doc::FAVOURITE_TAG;
use crate::api::dto::{
    CollectionResponse, CreateFavouriteRequest, ErrorResponse, FavouriteResponse,
    UpdateFavouriteRequest,
};
use crate::error::AppError;
use crate::state::AppState;

/// Creates favourite-related routes.
///
/// Routes:
/// - GET /                - List all favourites
/// - POST /               - Create a new favourite
/// - GET /{id}            - Get favourite by ID
/// - PUT /{id}            - Update favourite by ID
/// - DELETE /{id}         - Delete favourite by ID
/// - GET /user/{userId}   - List a user's favourites
pub fn favourite_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_favourites).post(create_favourite))
        .route(
            "/{id}",
            get(get_favourite)
                .put(update_favourite)
                .delete(delete_favourite),
        )
        .route("/user/{user_id}", get(list_favourites_by_user))
}

/// GET /api/favourites - List all favourites wrapped in the collection
/// envelope.
#[utoipa::path(
    get,
    path = "/api/favourites",
    tag = FAVOURITE_TAG,
    responses(
        (status = 200, description = "All favourites", body = CollectionResponse<FavouriteResponse>)
    )
)]
pub async fn list_favourites(
    State(state): State<AppState>,
) -> Result<Json<CollectionResponse<FavouriteResponse>>, AppError> {
    let favourites = state.services.favourites.find_all().await?;
    Ok(Json(CollectionResponse::new(favourites)))
}

/// GET /api/favourites/{id} - Get favourite by ID or 404.
#[utoipa::path(
    get,
    path = "/api/favourites/{id}",
    tag = FAVOURITE_TAG,
    params(("id" = i32, Path, description = "Favourite ID")),
    responses(
        (status = 200, description = "Favourite found", body = FavouriteResponse),
        (status = 404, description = "Favourite not found", body = ErrorResponse)
    )
)]
pub async fn get_favourite(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<FavouriteResponse>, AppError> {
    let favourite = state.services.favourites.find_by_id(id).await?;
    Ok(Json(favourite))
}

/// GET /api/favourites/user/{userId} - List one user's favourites.
#[utoipa::path(
    get,
    path = "/api/favourites/user/{user_id}",
    tag = FAVOURITE_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user's favourites", body = CollectionResponse<FavouriteResponse>)
    )
)]
pub async fn list_favourites_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<CollectionResponse<FavouriteResponse>>, AppError> {
    let favourites = state.services.favourites.find_by_user_id(user_id).await?;
    Ok(Json(CollectionResponse::new(favourites)))
}

/// POST /api/favourites - Create a new favourite.
#[utoipa::path(
    post,
    path = "/api/favourites",
    tag = FAVOURITE_TAG,
    request_body = CreateFavouriteRequest,
    responses(
        (status = 200, description = "Favourite created", body = FavouriteResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse)
    )
)]
pub async fn create_favourite(
    State(state): State<AppState>,
    Json(payload): Json<CreateFavouriteRequest>,
) -> Result<Json<FavouriteResponse>, AppError> {
    let favourite = state.services.favourites.save(payload).await?;
    Ok(Json(favourite))
}

/// PUT /api/favourites/{id} - Update a favourite.
#[utoipa::path(
    put,
    path = "/api/favourites/{id}",
    tag = FAVOURITE_TAG,
    params(("id" = i32, Path, description = "Favourite ID")),
    request_body = UpdateFavouriteRequest,
    responses(
        (status = 200, description = "Favourite updated", body = FavouriteResponse),
        (status = 404, description = "Favourite not found", body = ErrorResponse)
    )
)]
pub async fn update_favourite(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateFavouriteRequest>,
) -> Result<Json<FavouriteResponse>, AppError> {
    let favourite = state.services.favourites.update(id, payload).await?;
    Ok(Json(favourite))
}

/// DELETE /api/favourites/{id} - Delete a favourite; the body reports whether
/// a row existed.
#[utoipa::path(
    delete,
    path = "/api/favourites/{id}",
    tag = FAVOURITE_TAG,
    params(("id" = i32, Path, description = "Favourite ID")),
    responses(
        (status = 200, description = "Whether a favourite row existed", body = bool)
    )
)]
pub async fn delete_favourite(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<bool>, AppError> {
    let deleted = state.services.favourites.delete_by_id(id).await?;
    Ok(Json(deleted))
}
