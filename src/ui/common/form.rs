use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Form field with label, input and an inline error
#[component]
pub fn FormField(
    /// Input id and name
    name: &'static str,
    /// Field label text
    label: &'static str,
    /// Whether field is required (shows an asterisk)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, password, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Focus lost callback
    on_blur: Callback<()>,
    /// Error message to display, if any
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-1">
            <label for=name>
                {label}
                {required.then(|| " *")}
            </label>
            <input
                id=name
                name=name
                type=input_type
                class="px-3 py-2 border border-gray-400 rounded-md focus:outline-none focus:ring-2 focus:ring-primary"
                class:border-red-500=move || error.get().is_some()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:blur=move |_| on_blur.run(())
            />
            {move || {
                error.get().map(|err| view! {
                    <div class="flex items-center gap-1 text-sm text-red-500">
                        <Icon name=icons::ALERT_CIRCLE class="w-4 h-4"/>
                        <span>{err}</span>
                    </div>
                })
            }}
        </div>
    }
}

/// Radio button group; options arrive as (value, label) pairs
#[component]
pub fn RadioGroup(
    /// Shared input name
    name: &'static str,
    /// Group label text
    label: &'static str,
    /// Whether a choice is required (shows an asterisk)
    #[prop(default = false)]
    required: bool,
    /// Options as (value, display_text) pairs
    options: Signal<Vec<(String, String)>>,
    /// Currently selected value
    selected: Signal<String>,
    /// Change event callback
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <fieldset class="flex flex-col">
            <legend>
                {label}
                {required.then(|| " *")}
            </legend>
            <div class="flex items-center gap-4">
                {move || {
                    options.get().into_iter().map(|(val, text)| {
                        let id = format!("{}-{}", name, val);
                        let label_for = id.clone();
                        let checked_val = val.clone();
                        view! {
                            <label for=label_for class="flex items-center gap-2 cursor-pointer py-2">
                                <input
                                    type="radio"
                                    id=id
                                    name=name
                                    value=val.clone()
                                    prop:checked=move || selected.get() == checked_val
                                    on:change=move |ev| on_change.run(event_target_value(&ev))
                                />
                                <span>{text}</span>
                            </label>
                        }
                    }).collect_view()
                }}
            </div>
        </fieldset>
    }
}
