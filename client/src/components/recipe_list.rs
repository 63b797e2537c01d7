//! Four-state recipe list: spinner, error, empty message, or cards.

use leptos::prelude::*;
use recipes::{ListPhase, SavedRecipeIds};

use crate::components::recipe_card::RecipeCard;

/// Renders exactly one of the list phases.
///
/// When `saved_ids` and `on_save` are both given, each card gets a save
/// button that is disabled for recipes already in the set.
#[component]
pub fn RecipeList(
    #[prop(into)] phase: Signal<ListPhase>,
    #[prop(optional)] saved_ids: Option<Signal<SavedRecipeIds>>,
    #[prop(optional)] on_save: Option<Callback<String>>,
) -> impl IntoView {
    move || match phase.get() {
        ListPhase::Loading => view! {
            <div class="recipe-list__loading" aria-busy="true">
                <div class="spinner"></div>
            </div>
        }
        .into_any(),
        ListPhase::Failed(message) => view! {
            <p class="recipe-list__error" role="alert">{message}</p>
        }
        .into_any(),
        ListPhase::Empty(message) => view! {
            <p class="recipe-list__empty">{message}</p>
        }
        .into_any(),
        ListPhase::Ready(items) => view! {
            <div class="recipe-list__cards">
                {items
                    .into_iter()
                    .map(|recipe| {
                        let saved = saved_ids.map(|ids| {
                            let id = recipe.id.clone();
                            Signal::derive(move || ids.get().contains(&id))
                        });
                        let on_save = saved_ids.and(on_save);
                        view! { <RecipeCard recipe=recipe on_save=on_save saved=saved/> }
                    })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
    }
}
