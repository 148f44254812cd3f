//! HTTP implementation of the repository against the spreadsheet bridge.
//! The bridge exposes a single URL: `GET` returns the full slot array and
//! every mutation is a `POST` whose JSON body carries an `action`
//! discriminator next to the operation's fields.

use async_trait::async_trait;
use eyre::Result;
use serde::Serialize;
use uuid::Uuid;

use slotbook_core::models::follow_up::FollowUpPatch;
use slotbook_core::models::leader::Leader;
use slotbook_core::models::slot::Slot;

use crate::repository::SlotRepository;

pub struct RemoteSlotStore {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteSlotStore {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    async fn post<T: Serialize>(&self, payload: &T) -> Result<()> {
        self.client
            .post(&self.base_url)
            .json(payload)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[derive(Serialize)]
struct AddPayload<'a> {
    action: &'static str,
    #[serde(flatten)]
    slot: &'a Slot,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BookPayload<'a> {
    action: &'static str,
    slot_id: Uuid,
    user_name: &'a str,
    reason: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SupportPayload {
    action: &'static str,
    slot_id: Uuid,
    #[serde(rename = "supportLeaderName")]
    support_leader: Leader,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FollowUpPayload<'a> {
    action: &'static str,
    slot_id: Uuid,
    #[serde(flatten)]
    patch: &'a FollowUpPatch,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeletePayload {
    action: &'static str,
    slot_id: Uuid,
}

#[async_trait]
impl SlotRepository for RemoteSlotStore {
    async fn fetch_all(&self) -> Result<Vec<Slot>> {
        tracing::debug!("Fetching full slot collection from {}", self.base_url);
        let slots = self
            .client
            .get(&self.base_url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Slot>>()
            .await?;
        tracing::debug!("Fetched {} slots", slots.len());
        Ok(slots)
    }

    async fn create(&self, slot: Slot) -> Result<()> {
        tracing::debug!("Creating slot: id={}, leader={}", slot.id, slot.leader);
        self.post(&AddPayload {
            action: "add",
            slot: &slot,
        })
        .await
    }

    async fn book(&self, id: Uuid, user_name: String, reason: String) -> Result<()> {
        tracing::debug!("Booking slot: id={}, user={}", id, user_name);
        self.post(&BookPayload {
            action: "book",
            slot_id: id,
            user_name: &user_name,
            reason: &reason,
        })
        .await
    }

    async fn add_support(&self, id: Uuid, leader: Leader) -> Result<()> {
        tracing::debug!("Adding support: id={}, leader={}", id, leader);
        self.post(&SupportPayload {
            action: "addSupport",
            slot_id: id,
            support_leader: leader,
        })
        .await
    }

    async fn update_follow_up(&self, id: Uuid, patch: FollowUpPatch) -> Result<()> {
        tracing::debug!("Updating follow-up: id={}", id);
        self.post(&FollowUpPayload {
            action: "updateFollowUp",
            slot_id: id,
            patch: &patch,
        })
        .await
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        tracing::debug!("Deleting slot: id={}", id);
        self.post(&DeletePayload {
            action: "delete",
            slot_id: id,
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::{json, to_value};
    use slotbook_core::models::slot::SlotDraft;

    #[test]
    fn add_payload_flattens_the_slot_next_to_the_action() {
        let slot = SlotDraft {
            start: Utc.with_ymd_and_hms(2026, 1, 12, 21, 0, 0).unwrap(),
            leader: Leader::CamiloMartinez,
        }
        .into_slot();

        let value = to_value(AddPayload {
            action: "add",
            slot: &slot,
        })
        .unwrap();

        assert_eq!(value["action"], json!("add"));
        assert_eq!(value["leaderName"], json!("Camilo Martinez"));
        assert_eq!(value["isBooked"], json!(false));
        assert!(value.get("startTime").is_some());
    }

    #[test]
    fn book_payload_uses_bridge_field_names() {
        let id = Uuid::new_v4();
        let value = to_value(BookPayload {
            action: "book",
            slot_id: id,
            user_name: "Ana",
            reason: "consulta",
        })
        .unwrap();

        assert_eq!(value["action"], json!("book"));
        assert_eq!(value["slotId"], json!(id.to_string()));
        assert_eq!(value["userName"], json!("Ana"));
        assert_eq!(value["reason"], json!("consulta"));
    }

    #[test]
    fn follow_up_payload_flattens_only_present_fields() {
        let id = Uuid::new_v4();
        let patch = FollowUpPatch {
            follow_up_done: Some(true),
            needs_reinforcement: None,
            follow_up_step: None,
        };

        let value = to_value(FollowUpPayload {
            action: "updateFollowUp",
            slot_id: id,
            patch: &patch,
        })
        .unwrap();

        assert_eq!(value["action"], json!("updateFollowUp"));
        assert_eq!(value["followUpDone"], json!(true));
        assert!(value.get("needsReinforcement").is_none());
        assert!(value.get("followUpStep").is_none());
    }

    #[test]
    fn support_payload_names_the_sheet_column() {
        let id = Uuid::new_v4();
        let value = to_value(SupportPayload {
            action: "addSupport",
            slot_id: id,
            support_leader: Leader::DianaAcosta,
        })
        .unwrap();

        assert_eq!(value["action"], json!("addSupport"));
        assert_eq!(value["supportLeaderName"], json!("Diana Acosta"));
    }
}
