use crate::db;
use crate::error::ApiError;
use crate::models::user::{Claims, SigninRequest, SignupRequest, User};
use crate::models::{ApiMessage, TokenResponse};
use crate::state::AppState;
use crate::utils::auth::{hash_password, verify_password};
use axum::{Json, extract::State};
use mongodb::bson::doc;

pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<Json<ApiMessage>, ApiError> {
    // 1. Require both credentials before touching the store
    let Some((username, password, name)) = payload.credentials() else {
        return Err(ApiError::Validation("Please pass username and password.".into()));
    };

    // 2. Hash password
    let password = hash_password(&password).map_err(|e| ApiError::Store(e.to_string()))?;

    // 3. Create user
    // The unique index on username turns a race between two signups into a
    // duplicate-key error from exactly one of them.
    let user = User {
        id: None,
        name,
        username,
        password,
        created_at: chrono::Utc::now().timestamp(),
    };

    match state.db.collection::<User>(db::USERS).insert_one(&user).await {
        Ok(_) => {
            tracing::debug!(username = %user.username, "user created");
            Ok(Json(ApiMessage::ok("User created!")))
        }
        Err(e) if db::is_duplicate_key(&e) => Err(ApiError::Duplicate(
            "A user with that username already exists.".into(),
        )),
        Err(e) => Err(e.into()),
    }
}

pub async fn signin(
    State(state): State<AppState>,
    Json(payload): Json<SigninRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let (Some(username), Some(password)) = (payload.username, payload.password) else {
        return Err(ApiError::Authentication("Authentication failed.".into()));
    };

    // 1. Fetch user
    let user = state
        .db
        .collection::<User>(db::USERS)
        .find_one(doc! { "username": &username })
        .await?
        .ok_or_else(|| ApiError::Authentication("Authentication failed.".into()))?;

    // 2. Verify password
    match verify_password(&password, &user.password) {
        Ok(true) => (),
        _ => return Err(ApiError::Authentication("Authentication failed.".into())),
    }

    // 3. Issue token. Claims are just {id, username}; no expiry.
    let claims = Claims {
        sub: user.id.map(|id| id.to_hex()).unwrap_or_default(),
        username: user.username,
    };
    let token = state
        .auth
        .encode(&claims)
        .map_err(|e| ApiError::Store(e.to_string()))?;

    Ok(Json(TokenResponse {
        success: true,
        token: format!("JWT {token}"),
    }))
}
