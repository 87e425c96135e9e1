//! `wareflow-core` — ids, the `Entity` trait and the shared error type.
//!
//! Pure data; no IO and no logging setup.

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{ItemId, NodeId, OrderId, ProductId};
