//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::routes;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <h1 class="text-6xl font-bold mb-4">"404"</h1>

                <h2 class="text-2xl font-semibold mb-2">"Page Not Found"</h2>

                <p class="text-gray-600 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A
                        href=routes::HOME
                        attr:class="px-6 py-3 bg-primary text-white font-medium rounded-lg transition-colors"
                    >
                        "Go Home"
                    </A>
                    <A
                        href=routes::SIGNUP
                        attr:class="px-6 py-3 border font-medium rounded-lg transition-colors"
                    >
                        "Sign up"
                    </A>
                </div>
            </div>
        </div>
    }
}
