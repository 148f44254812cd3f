//! Persistence layer for slotbook. The backend is an opaque remote store
//! reached over HTTP (a spreadsheet bridge in the original deployment);
//! everything behind the [`repository::SlotRepository`] trait is
//! fire-and-forget, and the [`session::Agenda`] reconciles by re-fetching
//! the full collection after every mutation.

pub mod memory;
pub mod mock;
pub mod remote;
pub mod repository;
pub mod session;
