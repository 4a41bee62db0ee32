//! Shared types for the invite platform
//!
//! Common types used across the server and client crates: guest and admin
//! models, API request/response structures, and ID/timestamp helpers.

pub mod client;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use client::{LoginRequest, LoginResponse, AdminInfo};
pub use models::{Guest, GuestCreate, GuestSummary, RsvpRecord, RsvpStatus, RsvpSubmit};
