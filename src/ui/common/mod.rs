//! Common reusable UI components

pub mod form;
pub mod message;
pub mod spinner;

pub use form::{FormField, RadioGroup};
pub use message::WarningMessage;
pub use spinner::{LoadingOverlay, Spinner, SpinnerSize};
