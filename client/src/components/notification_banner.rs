//! Banner for the transient success/error message under a form.

#[cfg(test)]
#[path = "notification_banner_test.rs"]
mod notification_banner_test;

use leptos::prelude::*;
use recipes::Notification;

/// Renders nothing until a notification is set.
#[component]
pub fn NotificationBanner(#[prop(into)] notification: Signal<Option<Notification>>) -> impl IntoView {
    move || {
        notification.get().map(|note| {
            let class = note.css_class();
            let role = if note.is_error() { "alert" } else { "status" };
            view! {
                <div class=class role=role>
                    {note.message}
                </div>
            }
        })
    }
}
