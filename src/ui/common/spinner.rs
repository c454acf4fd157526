use leptos::prelude::*;

/// Spinner size options
#[derive(Clone, Copy, PartialEq)]
pub enum SpinnerSize {
    Small,
    Medium,
    Large,
}

impl SpinnerSize {
    fn class(&self) -> &'static str {
        match self {
            SpinnerSize::Small => "spinner-sm",
            SpinnerSize::Medium => "spinner-md",
            SpinnerSize::Large => "spinner-lg",
        }
    }
}

/// Circular loading spinner
#[component]
pub fn Spinner(
    /// Spinner size
    #[prop(default = SpinnerSize::Medium)]
    size: SpinnerSize,
    /// Optional label text
    #[prop(default = String::new())]
    label: String,
) -> impl IntoView {
    let classes = format!("spinner spinner-circle {}", size.class());

    view! {
        <div class="spinner-container">
            <div class=classes role="status" aria-live="polite">
                <div class="spinner-circle-inner"></div>
                <span class="sr-only">"Loading..."</span>
            </div>
            {(!label.is_empty()).then(|| view! {
                <div class="spinner-label">{label.clone()}</div>
            })}
        </div>
    }
}

/// Full-page loading overlay
#[component]
pub fn LoadingOverlay(
    /// Whether overlay is visible
    visible: Signal<bool>,
    /// Loading message
    #[prop(default = "Loading...".to_string())]
    message: String,
    /// Background opacity (0.0 to 1.0)
    #[prop(default = 0.4)]
    opacity: f32,
) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div
                class="loading-overlay"
                style=format!("background-color: rgba(0, 0, 0, {})", opacity)
            >
                <div class="loading-overlay-content">
                    <Spinner size=SpinnerSize::Large label=message.clone() />
                </div>
            </div>
        </Show>
    }
}
