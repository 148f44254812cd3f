use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/slots", get(handlers::slots::list_open_slots))
        .route("/api/slots/:id/book", post(handlers::slots::book_slot))
        .route(
            "/api/assistant/context",
            get(handlers::slots::assistant_context),
        )
}
