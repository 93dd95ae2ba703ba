//! Gym membership dashboard server
//!
//! Axum HTTP API over the SQLite billing record store. The store itself
//! (the `db` module) is also consumed directly by the `gym-cli` binary.

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod state;
pub mod util;
