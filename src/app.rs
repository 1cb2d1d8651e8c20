use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/records", post(handlers::submit))
        .route("/records/:id/edit", post(handlers::edit_record))
        .route("/records/:id/delete", post(handlers::delete_record))
        .route("/form/cancel", post(handlers::cancel_edit))
        .route("/select", post(handlers::select_date))
        .route("/select/clear", post(handlers::clear_selection))
        .with_state(state)
}
