//! Screen-level session: the intake form, the active screen, and the
//! outcome of the last scoring attempt.
//!
//! Exactly two screens exist. `Editing` owns a live form; `Reviewing`
//! holds the scored report while the form is frozen. A failed scoring
//! attempt never leaves `Editing` and never discards form content;
//! starting a new analysis always yields a blank form.

use crate::client::{ClientError, RiskScorer};
use crate::form::PatientForm;
use crate::models::{PatientRecord, RiskReport};

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Editing,
    Reviewing(RiskReport),
}

pub struct Session {
    form: PatientForm,
    screen: Screen,
    loading: bool,
    error: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            form: PatientForm::new(),
            screen: Screen::Editing,
            loading: false,
            error: None,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn form(&self) -> &PatientForm {
        &self.form
    }

    /// Mutable form access, only while editing. The form is read-only
    /// once a report is on screen.
    pub fn form_mut(&mut self) -> Option<&mut PatientForm> {
        match self.screen {
            Screen::Editing => Some(&mut self.form),
            Screen::Reviewing(_) => None,
        }
    }

    pub fn report(&self) -> Option<&RiskReport> {
        match &self.screen {
            Screen::Editing => None,
            Screen::Reviewing(report) => Some(report),
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True when a submission would actually run.
    pub fn can_submit(&self) -> bool {
        matches!(self.screen, Screen::Editing) && !self.loading && self.form.can_submit()
    }

    /// Scores the current form. Ignored while a request is in flight,
    /// while reviewing, or while a gating field is absent. On success
    /// the session moves to `Reviewing`; on failure it stays in
    /// `Editing` with a banner message and the form untouched.
    pub fn submit(&mut self, scorer: &dyn RiskScorer) {
        if self.loading || !matches!(self.screen, Screen::Editing) {
            return;
        }
        let Some(patient) = PatientRecord::from_form(&self.form) else {
            return;
        };

        self.loading = true;
        self.error = None;
        let result = scorer.analyze(&patient);
        self.loading = false;

        match result {
            Ok(report) => self.screen = Screen::Reviewing(report),
            Err(error) => self.error = Some(present_error(&error)),
        }
    }

    /// Returns to `Editing` with a blank form and no residue of the
    /// previous report or banner.
    pub fn new_analysis(&mut self) {
        self.form = PatientForm::new();
        self.screen = Screen::Editing;
        self.loading = false;
        self.error = None;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Service rejections read as analysis failures; transport errors keep
/// their own wording so an unreachable service is never mistaken for a
/// bad analysis.
fn present_error(error: &ClientError) -> String {
    if error.is_transport() {
        error.to_string()
    } else {
        format!("Analysis failed: {error}")
    }
}
