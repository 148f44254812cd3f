//! Domain core for the slotbook appointment service: the slot data model,
//! the error taxonomy, and the pure allocation/conflict engines. Everything
//! here is synchronous and side-effect free; persistence and transport live
//! in the sibling crates.

pub mod booking;
pub mod conflict;
pub mod errors;
pub mod follow_up;
pub mod models;
pub mod query;
pub mod support;
