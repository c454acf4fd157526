pub mod backend;
pub mod common;
pub mod icon;
pub mod notifications;
pub mod pages;
pub mod session;

pub use icon::{Icon, icons};
pub use notifications::{NotificationsContainer, provide_notifications};
pub use session::{provide_session_context, use_session_context};
