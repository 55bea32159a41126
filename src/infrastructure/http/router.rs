use crate::infrastructure::http::middleware::AppState;
use crate::infrastructure::web;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(web::show_index).post(web::register_user))
        .route("/roles/add", post(web::add_role))
        .route("/logout", get(web::handle_logout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
