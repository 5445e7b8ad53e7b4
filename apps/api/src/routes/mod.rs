pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::enhancer::handlers;
use crate::state::AppState;
use crate::ui;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Interactive form
        .route("/", get(ui::show_form).post(ui::submit_form))
        // JSON API
        .route("/api/v1/enhance", post(handlers::handle_enhance))
        .with_state(state)
}
