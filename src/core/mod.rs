//! Core domain logic for the marketplace frontend, free of any UI framework

#[cfg(feature = "ssr")]
pub mod config;
pub mod signup;

/// Application routes
pub mod routes {
    pub const HOME: &str = "/";
    pub const SIGNUP: &str = "/signup";
    pub const LOGIN: &str = "/login";
    pub const DASHBOARD: &str = "/dashboard";
}

pub use signup::*;
