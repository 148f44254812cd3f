//! End-user handlers: browse a leader's free slots, book one, and serve
//! the read-only availability digest the external chat assistant consumes.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use slotbook_core::models::leader::Leader;
use slotbook_core::models::requests::{AssistantContextResponse, BookingRequest, SlotsResponse};
use slotbook_core::models::slot::Slot;

use crate::{middleware::error_handling::AppError, ApiState};

#[derive(Debug, Deserialize)]
pub struct LeaderQuery {
    pub leader: Leader,
}

/// The end-user view: free slots for the selected leader, soonest first.
#[axum::debug_handler]
pub async fn list_open_slots(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<LeaderQuery>,
) -> Result<Json<SlotsResponse>, AppError> {
    let agenda = state.agenda.lock().await;
    let slots = slotbook_core::query::user_view(&agenda.snapshot(), params.leader);

    Ok(Json(SlotsResponse { slots }))
}

#[axum::debug_handler]
pub async fn book_slot(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<BookingRequest>,
) -> Result<Json<Slot>, AppError> {
    let mut agenda = state.agenda.lock().await;
    let booked = agenda.book(id, &payload.user_name, &payload.reason).await?;

    Ok(Json(booked))
}

/// Free-slot digest for the external text-completion assistant. Read-only;
/// the assistant never mutates the collection.
#[axum::debug_handler]
pub async fn assistant_context(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<AssistantContextResponse>, AppError> {
    let agenda = state.agenda.lock().await;
    let context =
        slotbook_core::query::availability_context(&agenda.snapshot(), state.display_tz);

    Ok(Json(AssistantContextResponse { context }))
}
