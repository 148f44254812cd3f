//! The optimistic session over the remote store. `Agenda` is the single
//! logical owner of the in-memory slot list for one client session: every
//! mutation validates against the local snapshot, applies a speculative
//! local patch, issues the remote call, then replaces local state wholesale
//! with a fresh fetch. Speculative patches can be silently overwritten or
//! reverted by that reconciliation; the server is the source of truth.
//!
//! A failed remote mutation surfaces as `Unavailable`; a failed reconcile
//! fetch only logs and leaves the (stale) local view in place until the
//! next successful fetch.

use std::collections::HashSet;
use std::sync::Arc;

use uuid::Uuid;

use slotbook_core::booking;
use slotbook_core::conflict;
use slotbook_core::errors::{SlotError, SlotResult};
use slotbook_core::follow_up;
use slotbook_core::models::follow_up::FollowUpPatch;
use slotbook_core::models::leader::Leader;
use slotbook_core::models::requests::BatchOutcome;
use slotbook_core::models::slot::{Slot, SlotDraft};
use slotbook_core::support::{self, SupportCandidate};

use crate::repository::SlotRepository;

pub struct Agenda {
    store: Arc<dyn SlotRepository>,
    slots: Vec<Slot>,
    pending_follow_up: HashSet<Uuid>,
}

impl Agenda {
    pub fn new(store: Arc<dyn SlotRepository>) -> Self {
        Self {
            store,
            slots: Vec::new(),
            pending_follow_up: HashSet::new(),
        }
    }

    /// Replaces local state with the authoritative collection.
    pub async fn refresh(&mut self) -> SlotResult<()> {
        let slots = self.store.fetch_all().await.map_err(SlotError::Unavailable)?;
        self.slots = slots;
        Ok(())
    }

    /// A copy of the current local view. No mutable reference to the
    /// collection ever escapes the session.
    pub fn snapshot(&self) -> Vec<Slot> {
        self.slots.clone()
    }

    fn get(&self, id: Uuid) -> SlotResult<&Slot> {
        self.slots
            .iter()
            .find(|slot| slot.id == id)
            .ok_or_else(|| SlotError::NotFound(format!("Slot {id} is not in the current view")))
    }

    fn apply_local(&mut self, updated: Slot) {
        if let Some(existing) = self.slots.iter_mut().find(|slot| slot.id == updated.id) {
            *existing = updated;
        } else {
            self.slots.push(updated);
        }
    }

    async fn reconcile(&mut self) {
        match self.store.fetch_all().await {
            Ok(slots) => self.slots = slots,
            Err(report) => {
                tracing::warn!(
                    "Reconcile fetch failed, keeping the stale local view: {report:#}"
                );
            }
        }
    }

    /// Creates every independently valid draft in the batch; overlapping
    /// drafts are skipped, not merged. When nothing validates, the whole
    /// batch is reported as one aggregate conflict.
    pub async fn create_slots(&mut self, drafts: Vec<SlotDraft>) -> SlotResult<BatchOutcome> {
        if drafts.is_empty() {
            return Err(SlotError::Validation(
                "The batch contains no slots".to_string(),
            ));
        }

        let plan = conflict::plan_batch(&self.slots, drafts);
        if plan.accepted.is_empty() {
            return Err(SlotError::Conflict(format!(
                "All {} requested slots overlap existing slots for their leader",
                plan.rejected.len()
            )));
        }

        let mut created = Vec::new();
        for draft in plan.accepted {
            let slot = draft.into_slot();
            self.apply_local(slot.clone());
            self.store
                .create(slot.clone())
                .await
                .map_err(SlotError::Unavailable)?;
            created.push(slot);
        }

        self.reconcile().await;
        Ok(BatchOutcome {
            created,
            rejected: plan.rejected,
        })
    }

    pub async fn book(&mut self, id: Uuid, user_name: &str, reason: &str) -> SlotResult<Slot> {
        let target = self.get(id)?.clone();
        let booked = booking::book(&target, user_name, reason)?;

        self.apply_local(booked.clone());
        self.store
            .book(
                id,
                user_name.trim().to_string(),
                reason.trim().to_string(),
            )
            .await
            .map_err(SlotError::Unavailable)?;

        self.reconcile().await;
        Ok(booked)
    }

    pub fn support_candidates(&self, id: Uuid) -> SlotResult<Vec<SupportCandidate>> {
        let target = self.get(id)?;
        Ok(support::support_candidates(&self.slots, target))
    }

    pub async fn add_support(&mut self, id: Uuid, leader: Leader) -> SlotResult<Slot> {
        let target = self.get(id)?.clone();
        let updated = support::add_support(&self.slots, &target, leader)?;

        self.apply_local(updated.clone());
        self.store
            .add_support(id, leader)
            .await
            .map_err(SlotError::Unavailable)?;

        self.reconcile().await;
        Ok(updated)
    }

    /// Applies a follow-up patch to the local view only and marks the slot
    /// pending. Nothing reaches the backend until [`Agenda::sync_follow_up`]
    /// is called, keeping draft edits separate from synced state.
    pub fn edit_follow_up(&mut self, id: Uuid, patch: &FollowUpPatch) -> SlotResult<Slot> {
        let target = self.get(id)?.clone();
        let updated = follow_up::apply_follow_up(&target, patch);

        self.apply_local(updated.clone());
        self.pending_follow_up.insert(id);
        Ok(updated)
    }

    /// Pushes the slot's resolved follow-up state to the backend and clears
    /// its pending mark. The full resolved state is sent, not the original
    /// patch, so the step-forces-done rule is already baked in.
    pub async fn sync_follow_up(&mut self, id: Uuid) -> SlotResult<Slot> {
        let slot = self.get(id)?.clone();
        let patch = FollowUpPatch {
            follow_up_done: Some(slot.follow_up_done),
            needs_reinforcement: Some(slot.needs_reinforcement),
            follow_up_step: Some(slot.follow_up_step),
        };

        self.store
            .update_follow_up(id, patch)
            .await
            .map_err(SlotError::Unavailable)?;
        self.pending_follow_up.remove(&id);

        self.reconcile().await;
        Ok(slot)
    }

    pub fn follow_up_pending(&self, id: Uuid) -> bool {
        self.pending_follow_up.contains(&id)
    }

    /// Unconditional removal; the only way to free a leader's interval.
    pub async fn delete(&mut self, id: Uuid) -> SlotResult<()> {
        self.get(id)?;

        self.slots.retain(|slot| slot.id != id);
        self.pending_follow_up.remove(&id);
        self.store.delete(id).await.map_err(SlotError::Unavailable)?;

        self.reconcile().await;
        Ok(())
    }
}
