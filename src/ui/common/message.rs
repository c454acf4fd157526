//! Inline message components

use crate::ui::{Icon, icons};
use leptos::prelude::*;

/// Warning message component
/// Displays a warning message with a warning icon
#[component]
pub fn WarningMessage(
    /// Warning message signal - shows when Some, hidden when None
    message: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="flex items-center gap-2 text-sm text-yellow-700">
                <Icon name=icons::WARNING class="w-4 h-4"/>
                <span>{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}
