//! Landing page route handler

use super::view::load_index_html;
use crate::state::SharedState;
use axum::{extract::State, response::Html, routing::get, Router};

/// Creates routes for the landing page
pub fn routes() -> Router<SharedState> {
    Router::new().route("/", get(read_root))
}

/// Endpoint: GET /
async fn read_root(State(state): State<SharedState>) -> Html<String> {
    Html(load_index_html(&state.templates_dir).await)
}
