//! Persistence collaborators for the store aggregate.
//!
//! # Responsibility
//! - Define the snapshot save/load contract the store writes through.
//! - Keep SQL and serialization details out of store transitions.
//!
//! # Invariants
//! - A snapshot is the whole aggregate serialized as JSON under one key.
//! - Repository errors are returned, never swallowed; the store decides
//!   whether a failure is soft.

pub mod snapshot_repo;
