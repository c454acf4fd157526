//! Signup page
//!
//! Registration form with role selection. Roles are fetched once after
//! hydration; submission, outcome toasts and the redirect to the dashboard
//! are handled by [`SignupController`].

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::{
    Field, FormState, RoleId, RoleLoad, RoleSelector, SignupController, SubmitRejected, routes,
};
use crate::ui::backend::signup_api;
use crate::ui::common::{FormField, RadioGroup, WarningMessage};
use crate::ui::notifications::use_notifications;
use crate::ui::session::{PagePresenter, use_session_context};

const ROLES_UNAVAILABLE: &str = "Roles could not be loaded. Refresh the page to try again.";

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = use_session_context();
    let presenter = PagePresenter::new(session, use_notifications(), use_navigate());
    let controller = StoredValue::new_local(Rc::new(SignupController::new(
        signup_api(),
        presenter,
    )));

    let form = RwSignal::new(FormState::new());
    let roles = RwSignal::new(RoleSelector::new());

    // Fetch roles once, client-side only
    Effect::new(move |_| {
        let ctrl = controller.get_value();
        spawn_local(async move {
            let result = ctrl.load_roles().await;
            roles.update(|r| r.apply(result));
            if let Some(warning) = roles.with_untracked(RoleSelector::load_warning) {
                leptos::logging::warn!("{}", warning);
            }
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // A submit attempt reveals every field error
        form.update(FormState::touch_all);

        let values = form.with_untracked(|f| f.values().clone());
        let role = roles.with_untracked(RoleSelector::selected);
        let ctrl = controller.get_value();

        spawn_local(async move {
            // Outcomes are presented by the controller; rejections stay on the page
            match ctrl.submit(&values, Some(role)).await {
                Ok(_) => {}
                Err(SubmitRejected::Invalid(errors)) => {
                    leptos::logging::debug_log!("Signup not sent: {} invalid field(s)", errors.len());
                }
                Err(SubmitRejected::InFlight) => {
                    leptos::logging::debug_log!("Signup not sent: a request is in flight");
                }
            }
        });
    };

    let field_view = move |field: Field| {
        view! {
            <FormField
                name=field.name()
                label=field.label()
                required=true
                input_type=field.input_type()
                value=Signal::derive(move || form.with(|f| f.values().value(field).to_string()))
                on_input=Callback::new(move |value: String| form.update(|f| f.set(field, value)))
                on_blur=Callback::new(move |_: ()| form.update(|f| f.touch(field)))
                error=Signal::derive(move || {
                    form.with(|f| f.visible_error(field).map(|e| e.to_string()))
                })
            />
        }
    };

    let role_options = Signal::derive(move || {
        roles.with(|r| {
            r.options()
                .iter()
                .map(|o| (o.id.to_string(), o.label()))
                .collect::<Vec<_>>()
        })
    });
    let selected_role = Signal::derive(move || roles.with(|r| r.selected().to_string()));
    let on_role_change = Callback::new(move |value: String| {
        if let Ok(id) = value.parse::<i64>() {
            roles.update(|r| {
                r.select(RoleId(id));
            });
        }
    });
    let roles_warning = Signal::derive(move || {
        roles.with(|r| match r.load() {
            RoleLoad::Failed(_) => Some(ROLES_UNAVAILABLE.to_string()),
            _ => None,
        })
    });

    view! {
        <div class="container max-w-lg mx-auto">
            <form
                class="my-3 md:my-12 p-6 md:shadow-2xl shadow-none"
                novalidate=true
                on:submit=on_submit
            >
                <h1 class="text-center font-bold text-3xl mt-4">"Sign up"</h1>

                <div class="mt-8 flex flex-col gap-4">
                    {Field::ALL.into_iter().map(field_view).collect_view()}

                    <RadioGroup
                        name="userTypeId"
                        label="Role"
                        required=true
                        options=role_options
                        selected=selected_role
                        on_change=on_role_change
                    />
                    <WarningMessage message=roles_warning />
                </div>

                <div class="flex flex-col gap-4">
                    <button
                        type="submit"
                        class="mt-8 py-2.5 px-4 bg-primary text-white text-base rounded-lg
                               disabled:opacity-50 disabled:cursor-not-allowed transition-colors"
                        disabled=move || session.loading.get()
                    >
                        "Sign up"
                    </button>
                    <p>
                        "Have account? "
                        <A href=routes::LOGIN attr:class="text-primary">"Click here"</A>
                        " to log in."
                    </p>
                </div>
            </form>
        </div>
    }
}
