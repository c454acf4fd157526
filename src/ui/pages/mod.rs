//! Application pages module
//!
//! - Home page (marketing sections)
//! - Signup page
//! - Dashboard (post-signup landing)
//! - Not found

mod dashboard;
mod home;
mod not_found;
mod signup;

pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use signup::SignupPage;
