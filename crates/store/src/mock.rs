use async_trait::async_trait;
use eyre::Result;
use mockall::mock;
use uuid::Uuid;

use slotbook_core::models::follow_up::FollowUpPatch;
use slotbook_core::models::leader::Leader;
use slotbook_core::models::slot::Slot;

use crate::repository::SlotRepository;

// Mock repository for testing failure paths.
mock! {
    pub SlotStore {}

    #[async_trait]
    impl SlotRepository for SlotStore {
        async fn fetch_all(&self) -> Result<Vec<Slot>>;

        async fn create(&self, slot: Slot) -> Result<()>;

        async fn book(&self, id: Uuid, user_name: String, reason: String) -> Result<()>;

        async fn add_support(&self, id: Uuid, leader: Leader) -> Result<()>;

        async fn update_follow_up(&self, id: Uuid, patch: FollowUpPatch) -> Result<()>;

        async fn delete(&self, id: Uuid) -> Result<()>;
    }
}
