use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::ui::backend::ApiBaseMeta;
use crate::ui::common::LoadingOverlay;
use crate::ui::pages::{DashboardPage, HomePage, NotFoundPage, SignupPage};
use crate::ui::{NotificationsContainer, provide_notifications, provide_session_context};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <ApiBaseMeta/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let session = provide_session_context();
    provide_notifications();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/nori-web.css"/>

        <Title text="Nori"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/") view=HomePage/>
                <Route path=path!("/signup") view=SignupPage/>
                <Route path=path!("/dashboard") view=DashboardPage/>
            </Routes>
        </Router>

        <NotificationsContainer/>
        <LoadingOverlay visible=Signal::from(session.loading)/>
    }
}
