//! Signup submission controller
//!
//! Drives one submission at a time through
//! `Idle -> Validating -> Submitting -> {Succeeded | DuplicateRejected | Failed} -> Idle`
//! and reports every user-visible effect through a [`Presenter`].

use std::cell::Cell;

use super::api::{ApiError, SignupApi, SignupRequest};
use super::form::RegistrationForm;
use super::outcome::{Notification, SubmissionOutcome};
use super::roles::{DEFAULT_ROLE_ID, RoleId, RoleOption};
use super::validation::{ValidationErrors, validate};

/// Route shown after a successful signup
pub const LANDING_ROUTE: &str = crate::core::routes::DASHBOARD;

/// UI capabilities the signup workflow needs from its environment
pub trait Presenter {
    /// Show a toast
    fn notify(&self, notification: Notification);

    /// Show the global loading indicator
    fn open_loading(&self);

    /// Hide the global loading indicator
    fn close_loading(&self);

    /// Keep the identity token for later authenticated requests
    fn store_token(&self, token: &str);

    /// Go to another route
    fn navigate(&self, route: &str);
}

/// Submission state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    DuplicateRejected,
    Failed,
}

impl SubmitPhase {
    fn terminal(outcome: &SubmissionOutcome) -> Self {
        match outcome {
            SubmissionOutcome::Success(_) => SubmitPhase::Succeeded,
            SubmissionOutcome::DuplicateAccount => SubmitPhase::DuplicateRejected,
            SubmissionOutcome::Failure(_) => SubmitPhase::Failed,
        }
    }
}

/// Reasons a submit request never reached the backend
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("form has {} invalid field(s)", .0.len())]
    Invalid(ValidationErrors),
    #[error("a signup request is already in flight")]
    InFlight,
}

/// Orchestrates role loading and signup submission
pub struct SignupController<A, P> {
    api: A,
    presenter: P,
    phase: Cell<SubmitPhase>,
}

impl<A: SignupApi, P: Presenter> SignupController<A, P> {
    pub fn new(api: A, presenter: P) -> Self {
        Self {
            api,
            presenter,
            phase: Cell::new(SubmitPhase::Idle),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase.get()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase.get() == SubmitPhase::Submitting
    }

    /// Fetch the role list once, with the loading indicator up while pending.
    ///
    /// Failures are returned to the caller, not presented.
    pub async fn load_roles(&self) -> Result<Vec<RoleOption>, ApiError> {
        self.presenter.open_loading();
        let result = self.api.user_types().await;
        self.presenter.close_loading();

        match &result {
            Ok(roles) => tracing::debug!("Loaded {} roles", roles.len()),
            Err(e) => tracing::warn!("Failed to load roles: {}", e),
        }
        result
    }

    /// Validate and submit the form.
    ///
    /// A missing role falls back to [`DEFAULT_ROLE_ID`]. Returns the outcome
    /// after it has been presented.
    pub async fn submit(
        &self,
        form: &RegistrationForm,
        role: Option<RoleId>,
    ) -> Result<SubmissionOutcome, SubmitRejected> {
        if self.is_submitting() {
            tracing::debug!("Ignoring submit while a request is in flight");
            return Err(SubmitRejected::InFlight);
        }

        self.phase.set(SubmitPhase::Validating);
        let errors = validate(form);
        if !errors.is_empty() {
            tracing::debug!("Signup blocked by {} invalid field(s)", errors.len());
            self.phase.set(SubmitPhase::Idle);
            return Err(SubmitRejected::Invalid(errors));
        }

        let request = SignupRequest::new(form, role.unwrap_or(DEFAULT_ROLE_ID));
        tracing::info!(
            "Signup attempt for email: {} (role {})",
            request.email,
            request.user_type_id
        );

        self.phase.set(SubmitPhase::Submitting);
        self.presenter.open_loading();
        let result = self.api.signup(&request).await;
        let outcome = SubmissionOutcome::from_response(result);

        self.phase.set(SubmitPhase::terminal(&outcome));
        self.present(&outcome);
        self.phase.set(SubmitPhase::Idle);

        Ok(outcome)
    }

    fn present(&self, outcome: &SubmissionOutcome) {
        match outcome {
            SubmissionOutcome::Success(token) => {
                tracing::info!("Signup succeeded");
                self.presenter.store_token(token.as_str());
                self.presenter.close_loading();
                self.presenter.notify(outcome.notification());
                self.presenter.navigate(LANDING_ROUTE);
            }
            SubmissionOutcome::DuplicateAccount => {
                tracing::info!("Signup rejected: account already exists");
                self.presenter.close_loading();
                self.presenter.notify(outcome.notification());
            }
            SubmissionOutcome::Failure(message) => {
                tracing::warn!("Signup failed: {}", message);
                self.presenter.close_loading();
                self.presenter.notify(outcome.notification());
            }
        }
    }
}
