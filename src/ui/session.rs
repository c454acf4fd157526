//! Session context: identity token, global loading state and the page
//! presenter used by the signup controller
//!
//! The token is kept in a signal and mirrored to localStorage so it
//! survives reloads. It is restored after hydration, client-side only.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::core::{Notification, Presenter};
use crate::ui::notifications::NotificationManager;

#[allow(dead_code)]
const STORAGE_KEY_TOKEN: &str = "nori_token";

/// Session state shared by every page
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Identity token from the last successful signup
    token: RwSignal<Option<String>>,
    /// Global loading indicator
    pub loading: RwSignal<bool>,
}

impl SessionContext {
    /// Check if an identity token is present
    pub fn is_authenticated(&self) -> bool {
        self.token.with(Option::is_some)
    }

    pub fn set_token(&self, token: &str) {
        if let Err(e) = save_token(token) {
            leptos::logging::warn!("Could not persist token: {}", e);
        }
        self.token.set(Some(token.to_string()));
    }

    /// Forget the identity token
    pub fn sign_out(&self) {
        if let Err(e) = clear_token() {
            leptos::logging::warn!("Could not clear token: {}", e);
        }
        self.token.set(None);
    }
}

/// Provide session context to the component tree
pub fn provide_session_context() -> SessionContext {
    // Start empty on both server and client to avoid hydration mismatch
    let token = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let ctx = SessionContext { token, loading };

    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            if let Some(stored) = load_token() {
                token.set(Some(stored));
            }
        });
    }

    provide_context(ctx);
    ctx
}

/// Get session context from the component tree
pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}

/// Leptos-backed [`Presenter`]: toasts, the global loading flag, the
/// session token and router navigation
pub struct PagePresenter<N> {
    session: SessionContext,
    notifications: NotificationManager,
    navigate: N,
}

impl<N> PagePresenter<N>
where
    N: Fn(&str, NavigateOptions),
{
    pub fn new(session: SessionContext, notifications: NotificationManager, navigate: N) -> Self {
        Self {
            session,
            notifications,
            navigate,
        }
    }
}

impl<N> Presenter for PagePresenter<N>
where
    N: Fn(&str, NavigateOptions),
{
    fn notify(&self, notification: Notification) {
        self.notifications.notify(notification);
    }

    fn open_loading(&self) {
        self.session.loading.set(true);
    }

    fn close_loading(&self) {
        self.session.loading.set(false);
    }

    fn store_token(&self, token: &str) {
        self.session.set_token(token);
    }

    fn navigate(&self, route: &str) {
        (self.navigate)(route, Default::default());
    }
}

/// Read the token from localStorage
#[cfg(not(feature = "ssr"))]
fn load_token() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(STORAGE_KEY_TOKEN).ok()?
}

#[cfg(not(feature = "ssr"))]
fn save_token(token: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window available")?;
    let storage = window
        .local_storage()
        .map_err(|_| "Failed to get localStorage")?
        .ok_or("localStorage not available")?;
    storage
        .set_item(STORAGE_KEY_TOKEN, token)
        .map_err(|_| "Failed to set token")?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn clear_token() -> Result<(), String> {
    let window = web_sys::window().ok_or("No window available")?;
    let storage = window
        .local_storage()
        .map_err(|_| "Failed to get localStorage")?
        .ok_or("localStorage not available")?;
    storage
        .remove_item(STORAGE_KEY_TOKEN)
        .map_err(|_| "Failed to remove token")?;
    Ok(())
}

/// SSR stubs - there is no localStorage on the server
#[cfg(feature = "ssr")]
fn save_token(_token: &str) -> Result<(), String> {
    Ok(())
}

#[cfg(feature = "ssr")]
fn clear_token() -> Result<(), String> {
    Ok(())
}
