use crate::handlers::{
    auth::{signin, signup},
    health::health_check,
    movies::{create_movie, delete_movie, get_movie, list_movies, update_movie},
    users::{get_user, list_users},
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn create_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // /signup, /signin and /health are open; everything else requires a valid
    // token via the AuthenticatedUser extractor on each handler.
    Router::new()
        .route("/health", get(health_check))
        .route("/signup", post(signup))
        .route("/signin", post(signin))
        .route(
            "/movies",
            get(list_movies)
                .post(create_movie)
                .put(update_movie)
                .delete(delete_movie),
        )
        .route("/movies/{id}", get(get_movie))
        .route("/users", get(list_users))
        .route("/users/{user_id}", get(get_user))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
