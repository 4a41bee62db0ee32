//! The client-local RSVP draft
//!
//! Ephemeral per-visit state: never persisted, discarded with the flow,
//! written to the server only by the explicit submit action.

use shared::models::{RsvpRecord, RsvpSubmit};

use super::FlowError;

/// The form's attendance vocabulary.
///
/// These variants, not any display string, are the source of truth for
/// the boolean flags written to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendingChoice {
    Attending,
    Declined,
}

impl AttendingChoice {
    pub fn is_attending(self) -> bool {
        matches!(self, AttendingChoice::Attending)
    }
}

/// The form's bringing-guests vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BringingChoice {
    Bringing,
    NotBringing,
}

impl BringingChoice {
    pub fn is_bringing(self) -> bool {
        matches!(self, BringingChoice::Bringing)
    }
}

/// The RSVP answer under construction (or, for an already-answered
/// guest, the stored answer loaded read-only).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RsvpDraft {
    pub attending: Option<AttendingChoice>,
    pub bringing_guests: Option<BringingChoice>,
    pub guest_names: String,
    pub song_request: String,
    /// Set once the answer is recorded server-side
    pub confirmed: Option<bool>,
    /// True only when the answer predates this visit
    pub already_responded: bool,
}

impl RsvpDraft {
    /// Load a stored answer into the draft, marked read-only.
    pub fn from_record(record: &RsvpRecord) -> Self {
        Self {
            attending: record.confirmed.map(|c| {
                if c {
                    AttendingChoice::Attending
                } else {
                    AttendingChoice::Declined
                }
            }),
            bringing_guests: record.bringing_guests.map(|b| {
                if b {
                    BringingChoice::Bringing
                } else {
                    BringingChoice::NotBringing
                }
            }),
            guest_names: record.guest_names.clone().unwrap_or_default(),
            song_request: record.song_request.clone().unwrap_or_default(),
            confirmed: record.confirmed,
            already_responded: true,
        }
    }

    /// A draft loaded from a stored answer is shown read-only.
    pub fn is_read_only(&self) -> bool {
        self.already_responded
    }

    /// Validate the draft and compute the submission payload.
    ///
    /// The attendance answer is required. The bringing-guests answer (and
    /// non-empty guest names when bringing) are required only when
    /// attending; a declined answer carries no companion fields.
    pub fn to_submit(&self) -> Result<RsvpSubmit, FlowError> {
        let attending = self
            .attending
            .ok_or(FlowError::IncompleteDraft("attending"))?;
        let is_attending = attending.is_attending();

        let bringing = if is_attending {
            self.bringing_guests
                .ok_or(FlowError::IncompleteDraft("bringing_guests"))?
                .is_bringing()
        } else {
            false
        };

        if bringing && self.guest_names.trim().is_empty() {
            return Err(FlowError::IncompleteDraft("guest_names"));
        }

        Ok(RsvpSubmit {
            confirmed: is_attending,
            bringing_guests: bringing,
            guest_names: if bringing {
                self.guest_names.clone()
            } else {
                String::new()
            },
            song_request: if is_attending {
                self.song_request.clone()
            } else {
                String::new()
            },
        })
    }
}
