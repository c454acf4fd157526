//! Backend API contract for signup
//!
//! - GET  /user/get-user-types - list selectable roles
//! - POST /auth/signup         - register and receive an identity token
//!
//! [`HttpSignupApi`] talks to the backend with `gloo-net` in the browser and
//! with `reqwest` in the server build.

use serde::{Deserialize, Serialize};

use super::form::RegistrationForm;
use super::roles::{RoleId, RoleOption};

pub const USER_TYPES_PATH: &str = "/user/get-user-types";
pub const SIGNUP_PATH: &str = "/auth/signup";

/// Base URL used when `NORI_API_BASE_URL` is not set
pub const DEFAULT_API_BASE_URL: &str = "/api";

/// Status the backend uses for an already registered email
pub const DUPLICATE_ACCOUNT_STATUS: u16 = 400;

/// Name of the `<meta>` tag carrying the server's backend URL to the browser
pub const API_BASE_URL_META: &str = "nori-api-base-url";

/// Backend URL the server resolved at startup, provided as context while rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBaseUrl(pub String);

/// API base URL baked into the build
pub fn build_api_base_url() -> &'static str {
    option_env!("NORI_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL)
}

/// Pick the runtime backend URL when one was handed over, else the build-time one
pub fn resolve_api_base_url(runtime: Option<&str>) -> String {
    runtime
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(build_api_base_url())
        .to_string()
}

/// Failure talking to the backend
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Backend answered with a non-success status
    #[error("request failed with status {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },
    /// Request never produced a response
    #[error("network error: {0}")]
    Transport(String),
    /// Response could not be understood
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a status error, extracting a message from the response body
    pub fn from_status(status: u16, body: &str) -> Self {
        ApiError::Status {
            status,
            message: error_message(body),
        }
    }

    pub fn is_duplicate_account(&self) -> bool {
        matches!(
            self,
            ApiError::Status {
                status: DUPLICATE_ACCOUNT_STATUS,
                ..
            }
        )
    }

    /// Human-readable message provided by the backend, if any
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(alias = "error")]
    message: Option<String>,
}

fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
}

/// Opaque identity credential returned by a successful signup
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            None
        } else {
            Some(Self(token))
        }
    }

    /// Extract the token from a signup response body.
    ///
    /// Accepts `{"token": "..."}`, a bare JSON string, or a plain-text body.
    pub fn from_body(body: &str) -> Option<Self> {
        match serde_json::from_str::<serde_json::Value>(body) {
            Ok(serde_json::Value::String(token)) => Self::new(token),
            Ok(serde_json::Value::Object(map)) => map
                .get("token")
                .and_then(|t| t.as_str())
                .and_then(Self::new),
            Ok(_) => None,
            Err(_) => Self::new(body.trim()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AuthToken(..)")
    }
}

/// Body of `POST /auth/signup`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub user_type_id: RoleId,
}

impl SignupRequest {
    pub fn new(form: &RegistrationForm, user_type_id: RoleId) -> Self {
        Self {
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            email: form.email.clone(),
            password: form.password.clone(),
            user_type_id,
        }
    }
}

/// Backend operations the signup workflow depends on
#[allow(async_fn_in_trait)]
pub trait SignupApi {
    /// Fetch the selectable roles
    async fn user_types(&self) -> Result<Vec<RoleOption>, ApiError>;

    /// Register a new account
    async fn signup(&self, request: &SignupRequest) -> Result<AuthToken, ApiError>;
}

/// HTTP client for the signup endpoints
#[derive(Debug, Clone)]
pub struct HttpSignupApi {
    base_url: String,
    #[cfg(feature = "ssr")]
    client: reqwest::Client,
}

impl HttpSignupApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            #[cfg(feature = "ssr")]
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(not(feature = "ssr"))]
impl SignupApi for HttpSignupApi {
    async fn user_types(&self) -> Result<Vec<RoleOption>, ApiError> {
        use gloo_net::http::Request;

        let response = Request::get(&self.url(USER_TYPES_PATH))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(response.status(), &body));
        }

        response
            .json::<Vec<RoleOption>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn signup(&self, request: &SignupRequest) -> Result<AuthToken, ApiError> {
        use gloo_net::http::Request;

        let response = Request::post(&self.url(SIGNUP_PATH))
            .header("Content-Type", "application/json")
            .json(request)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(response.status(), &body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        AuthToken::from_body(&body)
            .ok_or_else(|| ApiError::Decode("response did not contain a token".to_string()))
    }
}

#[cfg(feature = "ssr")]
impl SignupApi for HttpSignupApi {
    async fn user_types(&self) -> Result<Vec<RoleOption>, ApiError> {
        let response = self
            .client
            .get(self.url(USER_TYPES_PATH))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status.as_u16(), &body));
        }

        response
            .json::<Vec<RoleOption>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn signup(&self, request: &SignupRequest) -> Result<AuthToken, ApiError> {
        let response = self
            .client
            .post(self.url(SIGNUP_PATH))
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status.as_u16(), &body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        AuthToken::from_body(&body)
            .ok_or_else(|| ApiError::Decode("response did not contain a token".to_string()))
    }
}
