use async_trait::async_trait;
use eyre::Result;
use uuid::Uuid;

use slotbook_core::models::follow_up::FollowUpPatch;
use slotbook_core::models::leader::Leader;
use slotbook_core::models::slot::Slot;

/// The contract the external persistence service fulfils. Mutations are
/// fire-and-forget: no mutation returns data, and the only read primitive
/// is a full-collection fetch. Callers reconcile by re-fetching rather than
/// trusting partial responses.
#[async_trait]
pub trait SlotRepository: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Slot>>;

    /// Stores a new slot. The id is assigned by the caller before the call.
    async fn create(&self, slot: Slot) -> Result<()>;

    async fn book(&self, id: Uuid, user_name: String, reason: String) -> Result<()>;

    async fn add_support(&self, id: Uuid, leader: Leader) -> Result<()>;

    async fn update_follow_up(&self, id: Uuid, patch: FollowUpPatch) -> Result<()>;

    async fn delete(&self, id: Uuid) -> Result<()>;
}
