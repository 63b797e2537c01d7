//! Top navigation with identity-aware auth links.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Shows Login/Register when logged out and Logout when logged in.
/// Nothing auth-related renders while identity is resolving.
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let on_logout = move |_| {
        crate::util::storage::clear_user_id();
        auth.set(AuthState::resolved(None));
        #[cfg(feature = "hydrate")]
        {
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href(crate::util::auth::LOGIN_PATH);
            }
        }
    };

    view! {
        <nav class="nav-bar">
            <a href="/" class="nav-bar__brand">"Recipe Notes"</a>
            <a href="/" class="nav-bar__link">"Home"</a>
            <a href="/saved-recipes" class="nav-bar__link">"Saved Recipes"</a>
            <span class="nav-bar__spacer"></span>
            <Show when=move || !auth.get().loading>
                <Show
                    when=move || auth.get().is_logged_in()
                    fallback=|| {
                        view! {
                            <a href="/login" class="nav-bar__link">"Login"</a>
                            <a href="/register" class="nav-bar__link">"Register"</a>
                        }
                    }
                >
                    <button class="btn nav-bar__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </Show>
            </Show>
        </nav>
    }
}
