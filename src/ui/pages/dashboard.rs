//! Dashboard page, the landing destination after signup

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::routes;
use crate::ui::session::use_session_context;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session_context();

    let on_sign_out = move |_| {
        session.sign_out();
        let navigate = use_navigate();
        navigate(routes::HOME, Default::default());
    };

    view! {
        <main class="container max-w-3xl mx-auto px-4 py-12">
            <Show
                when=move || session.is_authenticated()
                fallback=|| view! {
                    <div class="text-center">
                        <p class="mb-4">"You are not signed in."</p>
                        <A href=routes::SIGNUP attr:class="text-primary font-medium">"Create an account"</A>
                    </div>
                }
            >
                <h1 class="text-3xl font-bold mb-4">"Welcome to Nori"</h1>
                <p class="text-gray-600">
                    "Your account is ready. Carbon removal listings will appear here."
                </p>
            </Show>

            <Show when=move || session.is_authenticated()>
                <button
                    class="mt-8 px-4 py-2 border rounded-lg hover:bg-gray-50"
                    on:click=on_sign_out
                >
                    "Sign out"
                </button>
            </Show>
        </main>
    }
}
