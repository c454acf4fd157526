use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (file name without the .svg extension)
    name: &'static str,
    /// CSS classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Icons shipped under `public/icons`
pub mod icons {
    pub const CHECK: &str = crate::core::signup::ICON_SUCCESS;
    pub const ALERT_CIRCLE: &str = crate::core::signup::ICON_ERROR;
    pub const X: &str = "x";
    pub const WARNING: &str = "warning";
    pub const LEAF: &str = "leaf";
}
