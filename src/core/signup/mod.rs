//! Signup workflow: form state, validation, role selection and submission

mod api;
mod controller;
mod form;
mod outcome;
mod roles;
mod validation;


pub use api::{
    API_BASE_URL_META, ApiBaseUrl, ApiError, AuthToken, DEFAULT_API_BASE_URL, HttpSignupApi,
    SIGNUP_PATH, SignupApi, SignupRequest, USER_TYPES_PATH, build_api_base_url,
    resolve_api_base_url,
};
pub use controller::{LANDING_ROUTE, Presenter, SignupController, SubmitPhase, SubmitRejected};
pub use form::{Field, FormState, RegistrationForm};
pub use outcome::{
    FALLBACK_ERROR_MESSAGE, ICON_ERROR, ICON_SUCCESS, Notification, Severity, SubmissionOutcome,
};
pub use roles::{DEFAULT_ROLE_ID, RoleId, RoleLoad, RoleOption, RoleSelector};
pub use validation::{FieldError, ValidationErrors, is_valid_email, validate, validate_field};
