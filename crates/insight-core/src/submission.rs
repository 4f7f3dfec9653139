//! URL Submission
//!
//! State behind the landing form. One `Submission` lives as long as the
//! mounted page; once navigation is requested it stays in
//! [`Phase::Submitting`], since the destination page replaces it.

use crate::error::{Result, SubmitError};
use crate::navigation::NavigationTarget;

/// Whitespace stripped from a submitted value
///
/// Same set a browser trims from form input: Unicode `White_Space` minus
/// U+0085 (NEL), plus U+FEFF (BOM).
pub fn is_form_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Lifecycle of a submission
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    /// Navigation requested. Terminal.
    Submitting,
}

/// Transient input state for the landing form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Submission {
    url: String,
    phase: Phase,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw field value, exactly as typed
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Replace the field value verbatim (no trimming, no encoding)
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether navigation has been requested
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Submit the current value
    ///
    /// Blank input is rejected with [`SubmitError::EmptyInput`] and leaves
    /// the phase untouched. Otherwise the phase moves to `Submitting` and
    /// the caller receives the target to navigate to. Nothing here ever
    /// moves the phase back to `Idle`.
    pub fn submit(&mut self) -> Result<NavigationTarget> {
        if self.is_loading() {
            return Err(SubmitError::InFlight);
        }

        let trimmed = self.url.trim_matches(is_form_whitespace);
        if trimmed.is_empty() {
            tracing::debug!("Discarding blank submission");
            return Err(SubmitError::EmptyInput);
        }

        self.phase = Phase::Submitting;
        let target = NavigationTarget::analyze(trimmed);
        tracing::debug!(href = %target, "Submission accepted");
        Ok(target)
    }

    /// One-shot submit of a raw value, as done for form posts without
    /// client-side state
    pub fn submit_raw(raw: impl Into<String>) -> Result<NavigationTarget> {
        let mut submission = Self::new();
        submission.set_url(raw);
        submission.submit()
    }
}
