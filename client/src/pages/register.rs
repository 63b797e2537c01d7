//! Register page: local validation, one registration call, delayed redirect.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
#[cfg(any(test, feature = "hydrate"))]
use recipes::{ApiError, RegisterResponse};
use recipes::{Notification, RegisterForm, RegisterRequest};

use crate::components::notification_banner::NotificationBanner;
#[cfg(any(test, feature = "hydrate"))]
use crate::util::auth::LOGIN_PATH;

/// Shown for any network, status or decode failure.
pub const REGISTER_FAILED: &str = "Error registering user.";
/// Pause between the success message and the redirect to `/login`.
pub const REDIRECT_DELAY_MS: u32 = 1500;

/// Validate before any network call; a failure becomes the error banner.
fn prepare_submission(form: &RegisterForm) -> Result<RegisterRequest, Notification> {
    form.validate().map_err(Notification::from)
}

#[cfg(any(test, feature = "hydrate"))]
fn outcome_notification(result: &Result<RegisterResponse, ApiError>) -> Notification {
    match result {
        Ok(resp) => Notification::success(resp.display_message()),
        Err(_) => Notification::error(REGISTER_FAILED),
    }
}

/// Where to go once the delay elapses; failures stay on the page.
#[cfg(any(test, feature = "hydrate"))]
fn redirect_target(result: &Result<RegisterResponse, ApiError>) -> Option<&'static str> {
    result.as_ref().ok().map(|_| LOGIN_PATH)
}

/// A successful submission keeps the form blocked until the redirect.
#[cfg(any(test, feature = "hydrate"))]
fn busy_after(result: &Result<RegisterResponse, ApiError>) -> bool {
    redirect_target(result).is_some()
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let notification = RwSignal::new(None::<Notification>);
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = RegisterForm {
            email: email.get(),
            username: username.get(),
            password: password.get(),
        };
        let request = match prepare_submission(&form) {
            Ok(request) => request,
            Err(note) => {
                notification.set(Some(note));
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::register(&request).await;
                notification.set(Some(outcome_notification(&result)));
                busy.set(busy_after(&result));
                if let Some(path) = redirect_target(&result) {
                    gloo_timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    navigate(path, NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &navigate);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Register to Recipe Notes"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Email address"
                        <input
                            class="auth-form__input"
                            type="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Username"
                        <input
                            class="auth-form__input"
                            type="text"
                            required
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn auth-form__submit" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <NotificationBanner notification=notification/>
                <p class="auth-card__footer">
                    "Already a user? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
