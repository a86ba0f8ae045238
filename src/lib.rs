//! Intersection controller firmware library.
//!
//! Exposes the state machine, controller loop and adapters for the
//! binary and for integration testing.  ESP-IDF-specific code lives in
//! `main.rs` behind `#[cfg(target_os = "espidf")]`; everything here builds
//! on the host.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod error;
pub mod fsm;
pub mod pins;

pub mod adapters;
pub mod drivers;
