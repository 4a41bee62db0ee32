//! Invite Client - HTTP client and invitation flow engine
//!
//! Provides network-based HTTP calls to the Invite Server API, plus the
//! session engine that drives the invitation experience: debounced guest
//! lookup, suggestion/selection state, the screen flow state machine and
//! the RSVP submission handler.

pub mod config;
pub mod error;
pub mod flow;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

pub use flow::{
    AttendingChoice, BringingChoice, Debouncer, FlowError, FlowState, GuestDirectory, GuestSearch,
    InvitationFlow, Key, Language, RsvpDraft,
};

// Re-export shared types for convenience
pub use shared::client::{AdminInfo, LoginRequest, LoginResponse};
pub use shared::models::{Guest, GuestCreate, GuestSummary, RsvpRecord, RsvpStatus, RsvpSubmit};
