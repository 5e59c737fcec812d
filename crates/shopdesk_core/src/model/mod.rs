//! Domain records for the business console.
//!
//! # Responsibility
//! - Define the entity records held by the store and written to snapshots.
//! - Validate caller input before the store applies it.
//!
//! # Invariants
//! - Records are plain data; identity fields owned by the store are absent
//!   from the caller-facing input shapes.
//! - Snapshot field names match the console's persisted JSON format.

pub mod aggregate;
pub mod appointment;
pub mod customer;
pub mod history;
pub mod inventory;
pub mod sale;
pub mod staff;
pub mod validation;
pub mod wire;
