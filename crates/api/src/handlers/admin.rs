//! Admin handlers: the shared-secret gate, the multi-criteria slot view,
//! batch creation, deletion, support assignment, and follow-up tracking.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use slotbook_core::models::leader::Leader;
use slotbook_core::models::requests::{
    AddSupportRequest, BatchOutcome, CreateSlotsRequest, FollowUpResponse, VerifyAccessRequest,
    VerifyAccessResponse,
};
use slotbook_core::models::follow_up::FollowUpPatch;
use slotbook_core::models::slot::Slot;
use slotbook_core::query::{
    AdminFilter, GroupedSlotsResponse, StatusFilter, SupportFilter,
};
use slotbook_core::support::SupportCandidate;

use crate::middleware::{auth, error_handling::AppError};
use crate::ApiState;

#[axum::debug_handler]
pub async fn verify_access(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<VerifyAccessRequest>,
) -> Result<Json<VerifyAccessResponse>, AppError> {
    let valid = auth::verify_access_code(
        state.admin_access_hash.as_deref(),
        state.admin_access_code.as_deref(),
        &payload.code,
    )?;

    Ok(Json(VerifyAccessResponse { valid }))
}

#[derive(Debug, Deserialize)]
pub struct AdminSlotsQuery {
    pub leader: Leader,
    #[serde(default)]
    pub status: StatusFilter,
    #[serde(default)]
    pub support: SupportFilter,
    pub search: Option<String>,
    /// `group=day` switches to the day-grouped response shape.
    pub group: Option<String>,
}

#[axum::debug_handler]
pub async fn list_slots(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<AdminSlotsQuery>,
) -> Result<Response, AppError> {
    let agenda = state.agenda.lock().await;
    let filter = AdminFilter {
        leader: params.leader,
        status: params.status,
        support: params.support,
        search: params.search.clone(),
    };
    let slots = slotbook_core::query::admin_view(&agenda.snapshot(), &filter);

    if params.group.as_deref() == Some("day") {
        let groups = slotbook_core::query::group_by_day(&slots, state.display_tz);
        return Ok(Json(GroupedSlotsResponse { groups }).into_response());
    }

    Ok(Json(slotbook_core::models::requests::SlotsResponse { slots }).into_response())
}

#[axum::debug_handler]
pub async fn create_slots(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateSlotsRequest>,
) -> Result<(StatusCode, Json<BatchOutcome>), AppError> {
    let mut agenda = state.agenda.lock().await;
    let outcome = agenda.create_slots(payload.slots).await?;

    Ok((StatusCode::CREATED, Json(outcome)))
}

#[axum::debug_handler]
pub async fn delete_slot(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let mut agenda = state.agenda.lock().await;
    agenda.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Leaders who could support the slot, with availability flags. The final
/// confirm re-checks: the collection may have changed since this rendered.
#[axum::debug_handler]
pub async fn support_candidates(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<SupportCandidate>>, AppError> {
    let agenda = state.agenda.lock().await;
    let candidates = agenda.support_candidates(id)?;

    Ok(Json(candidates))
}

#[axum::debug_handler]
pub async fn add_support(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AddSupportRequest>,
) -> Result<Json<Slot>, AppError> {
    let mut agenda = state.agenda.lock().await;
    let updated = agenda.add_support(id, payload.leader).await?;

    Ok(Json(updated))
}

/// Applies a follow-up patch to the local draft only; nothing reaches the
/// backend until the sync endpoint is called.
#[axum::debug_handler]
pub async fn edit_follow_up(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(patch): Json<FollowUpPatch>,
) -> Result<Json<FollowUpResponse>, AppError> {
    let mut agenda = state.agenda.lock().await;
    let slot = agenda.edit_follow_up(id, &patch)?;
    let pending = agenda.follow_up_pending(id);

    Ok(Json(FollowUpResponse { slot, pending }))
}

#[axum::debug_handler]
pub async fn sync_follow_up(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<FollowUpResponse>, AppError> {
    let mut agenda = state.agenda.lock().await;
    let slot = agenda.sync_follow_up(id).await?;
    let pending = agenda.follow_up_pending(id);

    Ok(Json(FollowUpResponse { slot, pending }))
}
