//! Login page: username + password, stores the returned user id.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use recipes::{LoginForm, LoginRequest, Notification};
#[cfg(any(test, feature = "hydrate"))]
use recipes::{ApiError, LoginResponse};

use crate::components::notification_banner::NotificationBanner;
#[cfg(feature = "hydrate")]
use crate::state::auth::AuthState;

pub const LOGIN_FAILED: &str = "Invalid username or password.";
pub const HOME_PATH: &str = "/";

fn prepare_login(form: &LoginForm) -> Result<LoginRequest, Notification> {
    form.validate().map_err(Notification::from)
}

/// The identity to store on success, or the banner to show on failure.
#[cfg(any(test, feature = "hydrate"))]
fn login_outcome(result: Result<LoginResponse, ApiError>) -> Result<String, Notification> {
    match result {
        Ok(resp) if !resp.user_id.trim().is_empty() => Ok(resp.user_id),
        _ => Err(Notification::error(LOGIN_FAILED)),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let auth = expect_context::<RwSignal<AuthState>>();
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
        let form = LoginForm { username: username.get(), password: password.get() };
        let request = match prepare_login(&form) {
            Ok(request) => request,
            Err(note) => {
                notification.set(Some(note));
                return;
            }
        };
        busy.set(true);
        notification.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match login_outcome(crate::net::api::login(&request).await) {
                    Ok(user_id) => {
                        crate::util::storage::save_user_id(&user_id);
                        auth.set(AuthState::resolved(Some(user_id)));
                        navigate(HOME_PATH, NavigateOptions::default());
                    }
                    Err(note) => notification.set(Some(note)),
                }
                busy.set(false);
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
                <h1 class="auth-card__title">"Sign in to Recipe Notes"</h1>
                <form class="auth-form" on:submit=on_submit>
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
                        "Sign in"
                    </button>
                </form>
                <NotificationBanner notification=notification/>
                <p class="auth-card__footer">
                    "New here? "
                    <a href="/register">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
