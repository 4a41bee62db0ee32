//! Debounced guest lookup and suggestion state
//!
//! Keystrokes become [`QueryTicket`]s; the host schedules each ticket via
//! [`Debouncer`] and runs it after the quiet interval. Every new
//! keystroke bumps a generation counter, so an outcome that arrives for
//! an older generation is discarded at apply time: a slow response for
//! "Smi" can never clobber the results for "Smith".

use std::future::Future;
use std::time::Duration;

use shared::models::GuestSummary;

use super::GuestDirectory;

/// Minimum input length before any query is issued
pub const MIN_PREFIX_LEN: usize = 4;

/// Quiet interval between the last keystroke and the query
pub const QUIET_INTERVAL: Duration = Duration::from_millis(300);

/// One scheduled lookup: the prefix to query and the generation that
/// issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTicket {
    pub prefix: String,
    pub generation: u64,
}

/// The resolved reads for one ticket, tagged with its generation.
#[derive(Debug)]
pub struct QueryOutcome {
    generation: u64,
    last_names: Vec<String>,
    options: Vec<GuestSummary>,
}

/// Keyboard events the suggestion dropdown reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Down,
    Up,
    Enter,
    Escape,
}

/// Suggestion/selection state for the guest lookup screen
#[derive(Debug, Default)]
pub struct GuestSearch {
    input: String,
    suggestions: Vec<String>,
    active: Option<usize>,
    options: Vec<GuestSummary>,
    selected: Option<GuestSummary>,
    generation: u64,
    loading: bool,
}

impl GuestSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Distinct last names for the dropdown, in query order
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Highlighted suggestion, None = nothing highlighted
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// First-name disambiguation candidates for the current prefix
    pub fn options(&self) -> &[GuestSummary] {
        &self.options
    }

    /// The bound guest, once the first name has been picked
    pub fn selected(&self) -> Option<&GuestSummary> {
        self.selected.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Record a keystroke.
    ///
    /// Any change supersedes in-flight queries (generation bump) and
    /// drops the bound guest. Input shorter than [`MIN_PREFIX_LEN`]
    /// clears all suggestion/option state without querying; otherwise a
    /// ticket for the new prefix is returned.
    pub fn set_input(&mut self, text: &str) -> Option<QueryTicket> {
        self.input = text.to_string();
        self.generation += 1;
        self.selected = None;
        self.active = None;

        if self.input.chars().count() < MIN_PREFIX_LEN {
            self.suggestions.clear();
            self.options.clear();
            self.loading = false;
            return None;
        }

        self.loading = true;
        Some(QueryTicket {
            prefix: self.input.clone(),
            generation: self.generation,
        })
    }

    /// Apply a resolved query outcome.
    ///
    /// Outcomes from superseded generations are ignored entirely. When
    /// exactly one last name matches, the input auto-fills to it and the
    /// dropdown closes; the returned follow-up ticket re-queries for the
    /// completed name (no auto-submit happens).
    pub fn apply(&mut self, outcome: QueryOutcome) -> Option<QueryTicket> {
        if outcome.generation != self.generation {
            return None;
        }

        self.loading = false;
        self.suggestions = outcome.last_names;
        self.options = outcome.options;
        self.active = None;

        if self.suggestions.len() == 1 {
            let name = self.suggestions.remove(0);
            if name != self.input {
                return Some(self.autofill(name));
            }
        }
        None
    }

    /// Keyboard contract over the dropdown. Returns a follow-up ticket
    /// when Enter commits a suggestion into the input.
    pub fn key(&mut self, key: Key) -> Option<QueryTicket> {
        if self.suggestions.is_empty() {
            return None;
        }

        match key {
            Key::Down => {
                let last = self.suggestions.len() - 1;
                self.active = Some(match self.active {
                    None => 0,
                    Some(a) => (a + 1).min(last),
                });
                None
            }
            Key::Up => {
                self.active = Some(self.active.map_or(0, |a| a.saturating_sub(1)));
                None
            }
            Key::Enter => match self.active {
                Some(index) => self.commit_suggestion(index),
                None => None,
            },
            Key::Escape => {
                self.suggestions.clear();
                self.active = None;
                None
            }
        }
    }

    /// Commit a suggestion as the input value (Enter or mouse click).
    pub fn commit_suggestion(&mut self, index: usize) -> Option<QueryTicket> {
        let name = self.suggestions.get(index).cloned()?;
        self.suggestions.clear();
        self.active = None;

        if name == self.input {
            return None;
        }
        Some(self.autofill(name))
    }

    /// Bind one guest record from the disambiguation list.
    pub fn select_option(&mut self, guest_id: i64) -> bool {
        match self.options.iter().find(|g| g.id == guest_id) {
            Some(guest) => {
                self.selected = Some(guest.clone());
                true
            }
            None => {
                self.selected = None;
                false
            }
        }
    }

    fn autofill(&mut self, name: String) -> QueryTicket {
        self.input = name;
        self.generation += 1;
        self.loading = true;
        QueryTicket {
            prefix: self.input.clone(),
            generation: self.generation,
        }
    }
}

/// Resolve one ticket against the directory.
///
/// Transient failures read as "no results"; a failed lookup must never
/// block further typing.
pub async fn fetch<D: GuestDirectory + ?Sized>(directory: &D, ticket: &QueryTicket) -> QueryOutcome {
    let last_names = match directory.last_names(&ticket.prefix).await {
        Ok(names) => names,
        Err(e) => {
            tracing::warn!(error = %e, prefix = %ticket.prefix, "last-name lookup failed");
            Vec::new()
        }
    };

    let options = match directory.search(&ticket.prefix).await {
        Ok(options) => options,
        Err(e) => {
            tracing::warn!(error = %e, prefix = %ticket.prefix, "guest search failed");
            Vec::new()
        }
    };

    QueryOutcome {
        generation: ticket.generation,
        last_names,
        options,
    }
}

impl QueryOutcome {
    /// Build an outcome by hand (hosts that fetch outside [`fetch`])
    pub fn new(ticket: &QueryTicket, last_names: Vec<String>, options: Vec<GuestSummary>) -> Self {
        Self {
            generation: ticket.generation,
            last_names,
            options,
        }
    }
}

/// Trailing-edge debouncer: each call cancels the previously scheduled
/// task, so only the task for the newest keystroke ever fires.
#[derive(Debug, Default)]
pub struct Debouncer {
    handle: Option<tokio::task::JoinHandle<()>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `task` after `quiet`, cancelling any pending task.
    pub fn debounce<F>(&mut self, quiet: Duration, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet).await;
            task.await;
        }));
    }

    /// Cancel the pending task, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
