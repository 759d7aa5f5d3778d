use crate::db;
use crate::error::ApiError;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::ApiMessage;
use crate::models::movie::{CreateMovieRequest, DeleteMovieRequest, Movie, UpdateMovieRequest};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::Json;
use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::doc;

const UPDATE_MISS: &str = "Failed to update movie with provided id: No such movie found";
const DELETE_MISS: &str = "Failed to delete movie with provided id: No such movie found";
const GET_MISS: &str = "Failed to find movie with provided id: No such movie found";

fn movies(state: &AppState) -> Collection<Movie> {
    state.db.collection(db::MOVIES)
}

/// Returns every movie, unfiltered and unpaginated.
pub async fn list_movies(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<Json<Vec<Movie>>, ApiError> {
    let all: Vec<Movie> = movies(&state).find(doc! {}).await?.try_collect().await?;
    Ok(Json(all))
}

pub async fn create_movie(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Json(payload): Json<CreateMovieRequest>,
) -> Result<Json<ApiMessage>, ApiError> {
    let movie = payload.validate().map_err(ApiError::Validation)?;

    // The unique index on title is the duplicate check; no read-then-write.
    match movies(&state).insert_one(&movie).await {
        Ok(_) => Ok(Json(ApiMessage::ok("Movie created!"))),
        Err(e) if db::is_duplicate_key(&e) => Err(ApiError::Duplicate(
            "A movie with that title already exists.".into(),
        )),
        Err(e) => Err(e.into()),
    }
}

/// Partial-merge update addressed by `_id` in the body. Only supplied fields
/// overwrite; the response reports status without echoing the record.
pub async fn update_movie(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Json(payload): Json<UpdateMovieRequest>,
) -> Result<Json<ApiMessage>, ApiError> {
    // A missing or malformed id can't match anything, same as an unknown one.
    let id = payload
        .id
        .as_deref()
        .and_then(|id| ObjectId::parse_str(id).ok())
        .ok_or_else(|| ApiError::NotFound(UPDATE_MISS.into()))?;

    let changes = payload.changes().map_err(ApiError::Validation)?;

    let found = if changes.is_empty() {
        // Nothing to merge; still report whether the record exists.
        movies(&state).find_one(doc! { "_id": id }).await?.is_some()
    } else {
        match movies(&state)
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": changes })
            .await
        {
            Ok(found) => found.is_some(),
            Err(e) if db::is_duplicate_key(&e) => {
                return Err(ApiError::Duplicate(
                    "A movie with that title already exists.".into(),
                ));
            }
            Err(e) => return Err(e.into()),
        }
    };

    if !found {
        return Err(ApiError::NotFound(UPDATE_MISS.into()));
    }
    Ok(Json(ApiMessage::ok("Movie updated!")))
}

/// Delete addressed by `_id` in the body.
pub async fn delete_movie(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Json(payload): Json<DeleteMovieRequest>,
) -> Result<Json<ApiMessage>, ApiError> {
    let id = payload
        .id
        .as_deref()
        .and_then(|id| ObjectId::parse_str(id).ok())
        .ok_or_else(|| ApiError::NotFound(DELETE_MISS.into()))?;

    movies(&state)
        .find_one_and_delete(doc! { "_id": id })
        .await?
        .ok_or_else(|| ApiError::NotFound(DELETE_MISS.into()))?;

    Ok(Json(ApiMessage::ok("Movie deleted.")))
}

pub async fn get_movie(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<String>,
) -> Result<Json<Movie>, ApiError> {
    let id = ObjectId::parse_str(&id).map_err(|_| ApiError::NotFound(GET_MISS.into()))?;

    let movie = movies(&state)
        .find_one(doc! { "_id": id })
        .await?
        .ok_or_else(|| ApiError::NotFound(GET_MISS.into()))?;

    Ok(Json(movie))
}
