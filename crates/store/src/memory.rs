//! In-process repository with the bridge's observable semantics: mutations
//! write whatever they are told and unknown ids are silently ignored, the
//! way a fire-and-forget row update behaves. Used by tests and as the dev
//! fallback when no store URL is configured.

use async_trait::async_trait;
use eyre::Result;
use tokio::sync::Mutex;
use uuid::Uuid;

use slotbook_core::models::follow_up::FollowUpPatch;
use slotbook_core::models::leader::Leader;
use slotbook_core::models::slot::Slot;

use crate::repository::SlotRepository;

#[derive(Default)]
pub struct MemorySlotStore {
    slots: Mutex<Vec<Slot>>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slots(slots: Vec<Slot>) -> Self {
        Self {
            slots: Mutex::new(slots),
        }
    }
}

#[async_trait]
impl SlotRepository for MemorySlotStore {
    async fn fetch_all(&self) -> Result<Vec<Slot>> {
        Ok(self.slots.lock().await.clone())
    }

    async fn create(&self, slot: Slot) -> Result<()> {
        self.slots.lock().await.push(slot);
        Ok(())
    }

    async fn book(&self, id: Uuid, user_name: String, reason: String) -> Result<()> {
        let mut slots = self.slots.lock().await;
        if let Some(slot) = slots.iter_mut().find(|slot| slot.id == id) {
            slot.is_booked = true;
            slot.booked_by = Some(user_name);
            slot.reason = Some(reason);
        }
        Ok(())
    }

    async fn add_support(&self, id: Uuid, leader: Leader) -> Result<()> {
        let mut slots = self.slots.lock().await;
        if let Some(slot) = slots.iter_mut().find(|slot| slot.id == id) {
            slot.support_leader = Some(leader);
        }
        Ok(())
    }

    async fn update_follow_up(&self, id: Uuid, patch: FollowUpPatch) -> Result<()> {
        let mut slots = self.slots.lock().await;
        if let Some(slot) = slots.iter_mut().find(|slot| slot.id == id) {
            if let Some(done) = patch.follow_up_done {
                slot.follow_up_done = done;
            }
            if let Some(needs) = patch.needs_reinforcement {
                slot.needs_reinforcement = needs;
            }
            if let Some(step) = patch.follow_up_step {
                slot.follow_up_step = step;
            }
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.slots.lock().await.retain(|slot| slot.id != id);
        Ok(())
    }
}
