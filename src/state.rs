use crate::middleware::auth::AuthKeys;
use axum::extract::FromRef;
use mongodb::Database;

/// Shared handles passed to every route handler: the database and the token
/// signing/verification keys. Built once in `main` from `Config`; no
/// process-wide globals.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub auth: AuthKeys,
}

impl FromRef<AppState> for AuthKeys {
    fn from_ref(state: &AppState) -> AuthKeys {
        state.auth.clone()
    }
}
