//! Domain store, its command surface and the built-in seed dataset.

pub mod command;
pub mod details;
pub mod seed;
mod shop_store;

pub use command::{CommandOutcome, EntityKey, MutationOutcome, StoreCommand};
pub use shop_store::ShopStore;
