//! Toast notifications
//!
//! A page-wide stack of toasts fed by [`NotificationManager`]. Success and
//! info toasts dismiss themselves; errors stay until closed.

use std::collections::VecDeque;

use leptos::prelude::*;

use crate::core::{Notification, Severity};
use crate::ui::icon::{Icon, icons};

/// Maximum number of notifications to show at once
const MAX_NOTIFICATIONS: usize = 5;

/// Notification item with unique ID for tracking
#[derive(Clone, Debug)]
pub struct NotificationItem {
    pub id: u64,
    pub notification: Notification,
}

/// Notifications container component, rendered once at the app root
#[component]
pub fn NotificationsContainer() -> impl IntoView {
    let manager = use_notifications();
    let notifications = manager.notifications();

    view! {
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-2 max-w-sm">
            <For
                each=move || notifications.get()
                key=|item| item.id
                children=move |item| {
                    view! { <NotificationToast item=item manager=manager /> }
                }
            />
        </div>
    }
}

#[component]
fn NotificationToast(item: NotificationItem, manager: NotificationManager) -> impl IntoView {
    let id = item.id;
    let notification = item.notification;
    let (is_exiting, _set_is_exiting) = signal(false);

    if let Some(_ms) = notification.auto_dismiss_ms() {
        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;
            use leptos::task::spawn_local;

            spawn_local(async move {
                TimeoutFuture::new(_ms).await;
                _set_is_exiting.set(true);
                // Wait for exit animation
                TimeoutFuture::new(300).await;
                manager.dismiss(id);
            });
        }
    }

    let (bg_class, border_class, text_class) = match notification.severity {
        Severity::Success => ("bg-green-500/10", "border-green-500/30", "text-green-700"),
        Severity::Info => ("bg-blue-500/10", "border-blue-500/30", "text-blue-700"),
        Severity::Error => ("bg-red-500/10", "border-red-500/30", "text-red-700"),
    };

    let container_class = format!(
        "flex items-start gap-3 p-4 rounded-lg border backdrop-blur-sm shadow-lg transition-all duration-300 {} {}",
        bg_class, border_class
    );
    let icon = notification.icon;
    let title = notification.title;
    let message = notification.message;

    view! {
        <div
            class=container_class
            role="alert"
            style=move || if is_exiting.get() { "opacity: 0; transform: translateX(1rem);" } else { "opacity: 1; transform: translateX(0);" }
        >
            {icon.map(|name| view! { <Icon name=name class="w-6 h-6" /> })}
            <div class=format!("flex-1 min-w-0 {}", text_class)>
                {title.map(|title| view! { <h4 class="text-sm font-semibold">{title}</h4> })}
                <p class="text-sm">{message}</p>
            </div>
            <button
                class="opacity-60 hover:opacity-100 transition-opacity"
                aria-label="Dismiss"
                on:click=move |_| manager.dismiss(id)
            >
                <Icon name=icons::X class="w-4 h-4" />
            </button>
        </div>
    }
}

/// Handle for pushing and dismissing toasts
#[derive(Clone, Copy)]
pub struct NotificationManager {
    notifications: RwSignal<VecDeque<NotificationItem>>,
    next_id: RwSignal<u64>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            notifications: RwSignal::new(VecDeque::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Get the notifications signal for the container
    pub fn notifications(&self) -> RwSignal<VecDeque<NotificationItem>> {
        self.notifications
    }

    /// Add a notification, dropping the oldest past the limit
    pub fn notify(&self, notification: Notification) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.notifications.update(|n| {
            n.push_back(NotificationItem { id, notification });

            while n.len() > MAX_NOTIFICATIONS {
                n.pop_front();
            }
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.notifications.update(|n| n.retain(|i| i.id != id));
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide a notification manager to the component tree
pub fn provide_notifications() -> NotificationManager {
    let manager = NotificationManager::new();
    provide_context(manager);
    manager
}

/// Get the notification manager from the component tree
pub fn use_notifications() -> NotificationManager {
    expect_context::<NotificationManager>()
}
