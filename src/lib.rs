//! # Parking Rust Backend
//!
//! Slot allocation and billing engine for a multi-entry-point parking lot,
//! exposed over a small REST API.
//!
//! ## Features
//!
//! - **Slot allocation**: closest compatible slot per vehicle size class,
//!   ties broken by smaller slot size
//! - **Occupancy tracking**: in-memory registry of currently parked vehicles
//! - **Billing**: time-based fees with a flat full-day charge, a free leading
//!   window, per-size hourly rates, and a minimum charge
//! - **HTTP API**: axum-based park/unpark/listing endpoints
//!
//! ## Architecture
//!
//! The crate is organized into a few logical modules:
//!
//! - [`models`]: domain types (slots, vehicles, size classes)
//! - [`config`]: lot layout configuration (TOML)
//! - [`engine`]: the allocator/billing engine owning all mutable state
//! - [`http`]: axum-based HTTP server and request handlers

pub mod config;
pub mod engine;
pub mod models;

#[cfg(feature = "http-server")]
pub mod http;
