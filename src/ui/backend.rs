//! Backend location handed from the server render to the browser
//!
//! The server provides [`ApiBaseUrl`] as context and [`ApiBaseMeta`] writes
//! it into the document head. After hydration the browser reads it back, so
//! `NORI_API_BASE_URL` set at run time reaches the bundle without a rebuild.

use leptos::prelude::*;

use crate::core::{API_BASE_URL_META, ApiBaseUrl, HttpSignupApi, resolve_api_base_url};

/// `<meta>` tag with the backend URL the server was started with
#[component]
pub fn ApiBaseMeta() -> impl IntoView {
    let content = use_context::<ApiBaseUrl>().map(|url| url.0);

    view! { <meta name=API_BASE_URL_META content=content/> }
}

/// Signup client for the backend this page was rendered against
pub fn signup_api() -> HttpSignupApi {
    HttpSignupApi::new(resolve_api_base_url(runtime_api_base_url().as_deref()))
}

#[cfg(not(feature = "ssr"))]
fn runtime_api_base_url() -> Option<String> {
    let selector = format!("meta[name=\"{}\"]", API_BASE_URL_META);
    web_sys::window()?
        .document()?
        .query_selector(&selector)
        .ok()??
        .get_attribute("content")
}

#[cfg(feature = "ssr")]
fn runtime_api_base_url() -> Option<String> {
    use_context::<ApiBaseUrl>().map(|url| url.0)
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_meta_carries_runtime_url() {
        let html = Owner::new().with(|| {
            provide_context(ApiBaseUrl("https://api.example.com".to_string()));
            view! { <ApiBaseMeta/> }.to_html()
        });

        assert!(html.contains(r#"name="nori-api-base-url""#), "{html}");
        assert!(html.contains(r#"content="https://api.example.com""#), "{html}");
    }

    #[test]
    fn test_client_follows_runtime_url() {
        let api = Owner::new().with(|| {
            provide_context(ApiBaseUrl("http://backend:5000/".to_string()));
            signup_api()
        });

        assert_eq!(api.base_url(), "http://backend:5000");
    }

    #[test]
    fn test_client_without_runtime_url_uses_build_value() {
        let api = Owner::new().with(signup_api);
        assert_eq!(api.base_url(), resolve_api_base_url(None));
    }
}
