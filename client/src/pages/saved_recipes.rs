//! Saved-recipes page for the logged-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded route: once identity resolves without a user it redirects to
//! `/login` and never fetches. With a user it fetches
//! `/recipes/saved/{userID}` once per identity and renders one list phase.

#[cfg(test)]
#[path = "saved_recipes_test.rs"]
mod saved_recipes_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use recipes::RecipeListState;

use crate::components::recipe_list::RecipeList;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// The identity to fetch for, if a fetch is due now.
///
/// Marks the fetch as started so a repeat of the same identity is a no-op.
fn next_fetch(auth: &AuthState, list: &mut RecipeListState) -> Option<String> {
    let user_id = auth.user_id.as_deref()?;
    list.begin(user_id).then(|| user_id.to_owned())
}

#[component]
pub fn SavedRecipesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let saved = RwSignal::new(RecipeListState::saved());

    install_unauth_redirect(auth, use_navigate());

    Effect::new(move || {
        let state = auth.get();
        let mut due = None;
        saved.update(|list| due = next_fetch(&state, list));
        let Some(user_id) = due else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::fetch_saved_recipes(&user_id).await;
            if let Err(e) = &outcome {
                log::error!("saved recipes for {user_id} unavailable: {e}");
            }
            saved.update(|list| {
                list.finish(&user_id, outcome);
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = user_id;
    });

    view! {
        <section class="recipe-page">
            <h1 class="recipe-page__title">"Saved Recipes"</h1>
            <RecipeList phase=Signal::derive(move || saved.get().phase())/>
        </section>
    }
}
