//! Data Models
//!
//! Entity types shared by the server repositories and the client.

pub mod admin;
pub mod guest;

pub use admin::{Admin, AdminCreate};
pub use guest::{Guest, GuestCreate, GuestSummary, RsvpRecord, RsvpStatus, RsvpSubmit};
