//! Cartwheel Core - Shared types library.
//!
//! Common types used by the Cartwheel server components. This crate contains
//! only types - no I/O, no database access, no HTTP clients - which keeps it
//! lightweight and usable anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and the user role enum

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
