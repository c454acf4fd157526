//! Submission outcomes and the notifications they map to

use super::api::{ApiError, AuthToken};

/// Message shown when a failure carries no backend message
pub const FALLBACK_ERROR_MESSAGE: &str = "Sign up error.";
pub const DUPLICATE_ACCOUNT_MESSAGE: &str = "Already registered. Please log in instead.";
pub const SUCCESS_TITLE: &str = "Success";
pub const SUCCESS_MESSAGE: &str = "Logged in.";
pub const ERROR_TITLE: &str = "Error";

/// Icon tags understood by the notification view
pub const ICON_SUCCESS: &str = "check";
pub const ICON_ERROR: &str = "alert-circle";

/// Notification severity, which also decides the color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Error,
}

/// A request to show a toast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub icon: Option<&'static str>,
    pub title: Option<String>,
    pub message: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            icon: Some(ICON_SUCCESS),
            title: Some(title.into()),
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            icon: None,
            title: None,
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            icon: Some(ICON_ERROR),
            title: Some(title.into()),
            message: message.into(),
        }
    }

    /// How long the toast stays up; errors wait for the user
    pub fn auto_dismiss_ms(&self) -> Option<u32> {
        match self.severity {
            Severity::Success | Severity::Info => Some(3000),
            Severity::Error => None,
        }
    }
}

/// Result of one signup submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success(AuthToken),
    DuplicateAccount,
    Failure(String),
}

impl SubmissionOutcome {
    /// Classify the backend response
    pub fn from_response(result: Result<AuthToken, ApiError>) -> Self {
        match result {
            Ok(token) => SubmissionOutcome::Success(token),
            Err(e) if e.is_duplicate_account() => SubmissionOutcome::DuplicateAccount,
            Err(e) => SubmissionOutcome::Failure(
                e.backend_message()
                    .unwrap_or(FALLBACK_ERROR_MESSAGE)
                    .to_string(),
            ),
        }
    }

    pub fn notification(&self) -> Notification {
        match self {
            SubmissionOutcome::Success(_) => Notification::success(SUCCESS_TITLE, SUCCESS_MESSAGE),
            SubmissionOutcome::DuplicateAccount => Notification::info(DUPLICATE_ACCOUNT_MESSAGE),
            SubmissionOutcome::Failure(message) => Notification::error(ERROR_TITLE, message.clone()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(value: &str) -> AuthToken {
        AuthToken::new(value).unwrap()
    }

    #[test]
    fn test_success_outcome() {
        let outcome = SubmissionOutcome::from_response(Ok(token("abc123")));
        assert_eq!(outcome, SubmissionOutcome::Success(token("abc123")));
        assert!(outcome.is_success());

        let n = outcome.notification();
        assert_eq!(n.severity, Severity::Success);
        assert_eq!(n.icon, Some(ICON_SUCCESS));
        assert_eq!(n.title.as_deref(), Some("Success"));
        assert_eq!(n.message, "Logged in.");
    }

    #[test]
    fn test_bad_request_is_duplicate_account() {
        let outcome = SubmissionOutcome::from_response(Err(ApiError::Status {
            status: 400,
            message: Some("Email taken".to_string()),
        }));
        assert_eq!(outcome, SubmissionOutcome::DuplicateAccount);

        let n = outcome.notification();
        assert_eq!(n.severity, Severity::Info);
        assert!(n.message.contains("Already registered"));
        assert_eq!(n.title, None);
        assert_eq!(n.icon, None);
    }

    #[test]
    fn test_server_error_without_message_uses_fallback() {
        let outcome = SubmissionOutcome::from_response(Err(ApiError::Status {
            status: 500,
            message: None,
        }));
        assert_eq!(outcome, SubmissionOutcome::Failure("Sign up error.".to_string()));

        let n = outcome.notification();
        assert_eq!(n.severity, Severity::Error);
        assert_eq!(n.title.as_deref(), Some("Error"));
        assert_eq!(n.icon, Some(ICON_ERROR));
        assert_eq!(n.message, FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn test_backend_message_is_preferred() {
        let outcome = SubmissionOutcome::from_response(Err(ApiError::Status {
            status: 503,
            message: Some("Maintenance window".to_string()),
        }));
        assert_eq!(outcome.notification().message, "Maintenance window");
    }

    #[test]
    fn test_transport_and_decode_errors_use_fallback() {
        for error in [
            ApiError::Transport("connection refused".to_string()),
            ApiError::Decode("response did not contain a token".to_string()),
        ] {
            let outcome = SubmissionOutcome::from_response(Err(error));
            assert_eq!(outcome, SubmissionOutcome::Failure(FALLBACK_ERROR_MESSAGE.to_string()));
        }
    }

    #[test]
    fn test_auto_dismiss() {
        assert_eq!(Notification::success("a", "b").auto_dismiss_ms(), Some(3000));
        assert_eq!(Notification::info("b").auto_dismiss_ms(), Some(3000));
        assert_eq!(Notification::error("a", "b").auto_dismiss_ms(), None);
    }
}
