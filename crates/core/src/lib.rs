//! `smartstock-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the dashboard
//! crates (no storage, no HTTP, no clock).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{AlertId, ItemId, TransactionId, UserId};
pub use value_object::ValueObject;
