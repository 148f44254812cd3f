use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/admin/verify", post(handlers::admin::verify_access))
        .route(
            "/api/admin/slots",
            get(handlers::admin::list_slots).post(handlers::admin::create_slots),
        )
        .route("/api/admin/slots/:id", delete(handlers::admin::delete_slot))
        .route(
            "/api/admin/slots/:id/support",
            get(handlers::admin::support_candidates).post(handlers::admin::add_support),
        )
        .route(
            "/api/admin/slots/:id/follow-up",
            patch(handlers::admin::edit_follow_up),
        )
        .route(
            "/api/admin/slots/:id/follow-up/sync",
            post(handlers::admin::sync_follow_up),
        )
}
