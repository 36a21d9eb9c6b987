//! oidkit object API.
//!
//! This crate ships an `object-api` binary; the library surface exists for
//! integration testing.

pub mod api;
pub mod config;
pub mod state;
