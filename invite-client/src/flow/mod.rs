//! Invitation flow engine
//!
//! The session-side core of the invite experience. One [`InvitationFlow`]
//! instance drives a single visit: language choice, debounced guest
//! lookup, the invitation screen and the RSVP submission. The flow is an
//! explicit state machine: every screen transition goes through a guard
//! on [`FlowState`], so no combination of flags can render an impossible
//! screen.
//!
//! The backend is abstracted behind [`GuestDirectory`] so the engine runs
//! identically against the HTTP client and against a scripted directory
//! in tests.

pub mod draft;
pub mod search;


pub use draft::{AttendingChoice, BringingChoice, RsvpDraft};
pub use search::{
    Debouncer, GuestSearch, Key, MIN_PREFIX_LEN, QUIET_INTERVAL, QueryOutcome, QueryTicket,
};

use async_trait::async_trait;
use thiserror::Error;

use crate::ClientResult;
use shared::models::{GuestSummary, RsvpRecord, RsvpStatus, RsvpSubmit};

/// Remote guest table, as seen by the flow engine
#[async_trait]
pub trait GuestDirectory: Send + Sync {
    /// Distinct last names starting with the prefix, ordered
    async fn last_names(&self, prefix: &str) -> ClientResult<Vec<String>>;

    /// Guest summaries whose last name starts with the prefix
    async fn search(&self, prefix: &str) -> ClientResult<Vec<GuestSummary>>;

    /// Persisted RSVP answer for one guest
    async fn rsvp_of(&self, guest_id: i64) -> ClientResult<RsvpRecord>;

    /// One-shot RSVP write
    async fn submit_rsvp(&self, guest_id: i64, submit: RsvpSubmit) -> ClientResult<RsvpRecord>;
}

/// Screens of the invitation flow, in forced linear order.
///
/// There is no backward transition; a new visit starts a fresh flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    /// Pick a language; everything downstream renders in it
    LanguageSelect,
    /// Find yourself by last name, disambiguate by first name
    GuestSearch,
    /// The invitation itself, with the guest's personal message
    Invitation,
    /// The RSVP form (only reachable while the answer is still unset)
    RsvpForm,
    /// Terminal screen: fresh thanks or the already-recorded answer
    Success,
}

/// Session-scoped language preference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Romanian,
    English,
}

/// Flow engine errors
///
/// `NoGuestSelected` and `IncompleteDraft` are validation failures: they
/// surface a message and change no state. `Backend` wraps transport and
/// server errors; the flow stays on the current screen so the action can
/// be retried.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("please select a guest first")]
    NoGuestSelected,

    #[error("missing required answer: {0}")]
    IncompleteDraft(&'static str),

    #[error("{action} is not available on the {state:?} screen")]
    InvalidTransition {
        state: FlowState,
        action: &'static str,
    },

    #[error(transparent)]
    Backend(#[from] crate::ClientError),
}

/// The invitation flow state machine
#[derive(Debug)]
pub struct InvitationFlow {
    state: FlowState,
    language: Option<Language>,
    search: GuestSearch,
    draft: RsvpDraft,
}

impl InvitationFlow {
    /// A fresh visit: language selection first
    pub fn new() -> Self {
        Self {
            state: FlowState::LanguageSelect,
            language: None,
            search: GuestSearch::new(),
            draft: RsvpDraft::default(),
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn language(&self) -> Option<Language> {
        self.language
    }

    pub fn search(&self) -> &GuestSearch {
        &self.search
    }

    pub fn draft(&self) -> &RsvpDraft {
        &self.draft
    }

    fn guard(&self, expected: FlowState, action: &'static str) -> Result<(), FlowError> {
        if self.state != expected {
            return Err(FlowError::InvalidTransition {
                state: self.state,
                action,
            });
        }
        Ok(())
    }

    // ── Language selection ──────────────────────────────────────────

    /// Explicit language choice moves the flow to the search screen.
    pub fn choose_language(&mut self, language: Language) -> Result<(), FlowError> {
        self.guard(FlowState::LanguageSelect, "choose_language")?;
        self.language = Some(language);
        self.state = FlowState::GuestSearch;
        Ok(())
    }

    // ── Guest search ────────────────────────────────────────────────

    /// A keystroke in the last-name input. Returns the query ticket the
    /// host should run after the quiet interval (see [`Debouncer`]), or
    /// None when the input is too short to query.
    pub fn input_changed(&mut self, text: &str) -> Result<Option<QueryTicket>, FlowError> {
        self.guard(FlowState::GuestSearch, "input_changed")?;
        Ok(self.search.set_input(text))
    }

    /// Keyboard navigation over the suggestion dropdown.
    pub fn key_pressed(&mut self, key: Key) -> Result<Option<QueryTicket>, FlowError> {
        self.guard(FlowState::GuestSearch, "key_pressed")?;
        Ok(self.search.key(key))
    }

    /// Mouse click on a suggestion; identical to Enter-commit.
    pub fn suggestion_clicked(&mut self, index: usize) -> Result<Option<QueryTicket>, FlowError> {
        self.guard(FlowState::GuestSearch, "suggestion_clicked")?;
        Ok(self.search.commit_suggestion(index))
    }

    /// First-name disambiguation: binds the selected guest for the rest
    /// of the flow.
    pub fn option_selected(&mut self, guest_id: i64) -> Result<bool, FlowError> {
        self.guard(FlowState::GuestSearch, "option_selected")?;
        Ok(self.search.select_option(guest_id))
    }

    /// Run a previously issued query ticket against the directory and
    /// apply the outcome. Stale tickets (superseded by a newer keystroke)
    /// are fetched-and-discarded without touching visible state. May
    /// return a follow-up ticket when a single match auto-fills the input.
    pub async fn run_search<D: GuestDirectory + ?Sized>(
        &mut self,
        directory: &D,
        ticket: QueryTicket,
    ) -> Result<Option<QueryTicket>, FlowError> {
        self.guard(FlowState::GuestSearch, "run_search")?;
        let outcome = search::fetch(directory, &ticket).await;
        Ok(self.search.apply(outcome))
    }

    /// Reveal the invitation. Requires a bound guest; otherwise the view
    /// stays put.
    pub fn view_invitation(&mut self) -> Result<(), FlowError> {
        self.guard(FlowState::GuestSearch, "view_invitation")?;
        if self.search.selected().is_none() {
            return Err(FlowError::NoGuestSelected);
        }
        self.state = FlowState::Invitation;
        Ok(())
    }

    // ── Confirm / RSVP ──────────────────────────────────────────────

    /// The confirm action on the invitation screen.
    ///
    /// Reads the persisted status: an already-answered guest goes
    /// straight to the success screen with the stored answer loaded
    /// read-only; an unanswered guest gets the form. Never re-opens the
    /// form for a guest who already answered.
    pub async fn confirm<D: GuestDirectory + ?Sized>(
        &mut self,
        directory: &D,
    ) -> Result<(), FlowError> {
        self.guard(FlowState::Invitation, "confirm")?;
        let guest = self.search.selected().ok_or(FlowError::NoGuestSelected)?;

        let record = directory.rsvp_of(guest.id).await?;

        match record.status() {
            RsvpStatus::Unset => {
                self.state = FlowState::RsvpForm;
            }
            _ => {
                self.draft = RsvpDraft::from_record(&record);
                self.state = FlowState::Success;
            }
        }
        Ok(())
    }

    // ── Form edits ──────────────────────────────────────────────────

    pub fn set_attending(&mut self, choice: AttendingChoice) -> Result<(), FlowError> {
        self.guard(FlowState::RsvpForm, "set_attending")?;
        self.draft.attending = Some(choice);
        Ok(())
    }

    pub fn set_bringing_guests(&mut self, choice: BringingChoice) -> Result<(), FlowError> {
        self.guard(FlowState::RsvpForm, "set_bringing_guests")?;
        self.draft.bringing_guests = Some(choice);
        Ok(())
    }

    pub fn set_guest_names(&mut self, text: impl Into<String>) -> Result<(), FlowError> {
        self.guard(FlowState::RsvpForm, "set_guest_names")?;
        self.draft.guest_names = text.into();
        Ok(())
    }

    pub fn set_song_request(&mut self, text: impl Into<String>) -> Result<(), FlowError> {
        self.guard(FlowState::RsvpForm, "set_song_request")?;
        self.draft.song_request = text.into();
        Ok(())
    }

    /// Submit the form: one update call, no optimistic mutation.
    ///
    /// On write failure the form stays open and the draft is untouched;
    /// on success the draft's confirmed flag is set from the stored
    /// record (already-responded stays false, this was a fresh answer)
    /// and the flow moves to the success screen.
    pub async fn submit<D: GuestDirectory + ?Sized>(
        &mut self,
        directory: &D,
    ) -> Result<(), FlowError> {
        self.guard(FlowState::RsvpForm, "submit")?;
        let guest = self.search.selected().ok_or(FlowError::NoGuestSelected)?;
        let submit = self.draft.to_submit()?;

        let record = directory.submit_rsvp(guest.id, submit).await?;

        self.draft.confirmed = record.confirmed;
        self.state = FlowState::Success;
        Ok(())
    }
}

impl Default for InvitationFlow {
    fn default() -> Self {
        Self::new()
    }
}
