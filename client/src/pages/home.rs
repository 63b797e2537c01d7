//! Home page listing every recipe, with a save action for logged-in users.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use recipes::{RecipeListState, SaveRecipeRequest, SavedRecipeIds};

use crate::components::recipe_list::RecipeList;
use crate::state::auth::AuthState;

/// List key for the all-recipes fetch; it never changes, so it runs once.
const ALL_RECIPES_KEY: &str = "all";

/// Build the save payload, or `None` when nobody is logged in or the recipe
/// is already saved.
fn save_request(auth: &AuthState, saved: &SavedRecipeIds, recipe_id: &str) -> Option<SaveRecipeRequest> {
    let user_id = auth.user_id.clone()?;
    if saved.contains(recipe_id) {
        return None;
    }
    Some(SaveRecipeRequest { recipe_id: recipe_id.to_owned(), user_id })
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let all = RwSignal::new(RecipeListState::all());
    let saved_ids = RwSignal::new(SavedRecipeIds::default());

    Effect::new(move || {
        let mut due = false;
        all.update(|list| due = list.begin(ALL_RECIPES_KEY));
        if !due {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::fetch_recipes().await;
            all.update(|list| {
                list.finish(ALL_RECIPES_KEY, outcome);
            });
        });
    });

    // Saved ids follow identity; a logout clears them.
    Effect::new(move || {
        let Some(user_id) = auth.get().user_id else {
            saved_ids.set(SavedRecipeIds::default());
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let Ok(ids) = crate::net::api::fetch_saved_recipe_ids(&user_id).await else {
                return;
            };
            if auth.get_untracked().user_id.as_deref() == Some(user_id.as_str()) {
                saved_ids.set(ids);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = user_id;
    });

    let on_save = Callback::new(move |recipe_id: String| {
        let Some(request) = save_request(&auth.get_untracked(), &saved_ids.get_untracked(), &recipe_id)
        else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Ok(ids) = crate::net::api::save_recipe(&request).await {
                saved_ids.set(ids);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    });

    let saved_signal = Signal::derive(move || {
        if auth.get().is_logged_in() { Some(saved_ids.get()) } else { None }
    });

    view! {
        <section class="recipe-page">
            <h1 class="recipe-page__title">"Recipes"</h1>
            {move || {
                let phase = Signal::derive(move || all.get().phase());
                if saved_signal.get().is_some() {
                    view! {
                        <RecipeList
                            phase=phase
                            saved_ids=Signal::derive(move || saved_signal.get().unwrap_or_default())
                            on_save=on_save
                        />
                    }
                    .into_any()
                } else {
                    view! { <RecipeList phase=phase/> }.into_any()
                }
            }}
        </section>
    }
}
