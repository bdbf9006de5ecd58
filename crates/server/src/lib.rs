//! Cartwheel server library.
//!
//! The order/cart/profile workflow of the Cartwheel shop as a library crate,
//! so that the router and stores can be exercised from tests as well as from
//! the binary.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
pub mod stores;
