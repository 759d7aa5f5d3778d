use crate::db;
use crate::error::ApiError;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::user::User;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;

const GET_MISS: &str = "Failed to find user with provided id: No such user found";

fn users(state: &AppState) -> Collection<User> {
    state.db.collection(db::USERS)
}

/// Returns every user record as stored, password hashes included. That
/// exposure is inherited wire behavior; see DESIGN.md before changing it.
pub async fn list_users(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<Json<Vec<User>>, ApiError> {
    let all: Vec<User> = users(&state).find(doc! {}).await?.try_collect().await?;
    Ok(Json(all))
}

pub async fn get_user(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(user_id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id = ObjectId::parse_str(&user_id).map_err(|_| ApiError::NotFound(GET_MISS.into()))?;

    let user = users(&state)
        .find_one(doc! { "_id": id })
        .await?
        .ok_or_else(|| ApiError::NotFound(GET_MISS.into()))?;

    Ok(Json(user))
}
