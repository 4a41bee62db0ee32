//! Guest Model
//!
//! A guest row carries the invitation identity (name, optional title and
//! personal message) together with the tri-state RSVP answer. `confirmed`
//! stays NULL until the guest responds; it never returns to NULL through
//! the normal flow.

use serde::{Deserialize, Serialize};

/// Guest entity (宾客)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Guest {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub title: Option<String>,
    pub message: Option<String>,
    /// NULL = not yet answered, true = attending, false = declined
    pub confirmed: Option<bool>,
    pub bringing_guests: Option<bool>,
    pub guest_names: Option<String>,
    pub song_request: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Guest {
    /// Tri-state RSVP status derived from the `confirmed` column
    pub fn rsvp_status(&self) -> RsvpStatus {
        RsvpStatus::from_confirmed(self.confirmed)
    }
}

/// Create guest payload (admin surface)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestCreate {
    pub first_name: String,
    pub last_name: String,
    pub title: Option<String>,
    pub message: Option<String>,
}

/// Guest summary returned by the public prefix search
///
/// Deliberately excludes the RSVP columns: the lookup screen only needs
/// identity and the invitation message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct GuestSummary {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub message: Option<String>,
}

/// Persisted RSVP answer for one guest
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct RsvpRecord {
    pub confirmed: Option<bool>,
    pub bringing_guests: Option<bool>,
    pub guest_names: Option<String>,
    pub song_request: Option<String>,
}

impl RsvpRecord {
    /// Tri-state RSVP status derived from the `confirmed` column
    pub fn status(&self) -> RsvpStatus {
        RsvpStatus::from_confirmed(self.confirmed)
    }
}

/// One-shot RSVP submission payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RsvpSubmit {
    pub confirmed: bool,
    pub bringing_guests: bool,
    pub guest_names: String,
    pub song_request: String,
}

/// Tri-state RSVP status
///
/// Transitions only `Unset → Attending` or `Unset → Declined`; the server
/// rejects writes against an already-answered guest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsvpStatus {
    Unset,
    Attending,
    Declined,
}

impl RsvpStatus {
    pub fn from_confirmed(confirmed: Option<bool>) -> Self {
        match confirmed {
            None => RsvpStatus::Unset,
            Some(true) => RsvpStatus::Attending,
            Some(false) => RsvpStatus::Declined,
        }
    }

    pub fn as_confirmed(self) -> Option<bool> {
        match self {
            RsvpStatus::Unset => None,
            RsvpStatus::Attending => Some(true),
            RsvpStatus::Declined => Some(false),
        }
    }

    pub fn is_unset(self) -> bool {
        matches!(self, RsvpStatus::Unset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_confirmed_column() {
        for status in [RsvpStatus::Unset, RsvpStatus::Attending, RsvpStatus::Declined] {
            assert_eq!(RsvpStatus::from_confirmed(status.as_confirmed()), status);
        }
    }

    #[test]
    fn record_status_matches_confirmed() {
        let record = RsvpRecord {
            confirmed: Some(false),
            bringing_guests: Some(false),
            guest_names: None,
            song_request: None,
        };
        assert_eq!(record.status(), RsvpStatus::Declined);
        assert!(RsvpRecord::default().status().is_unset());
    }
}
