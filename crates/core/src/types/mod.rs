//! Shared type definitions.

pub mod id;
pub mod role;

pub use id::{OrderId, ProductId, UserId};
pub use role::{ParseRoleError, Role};
