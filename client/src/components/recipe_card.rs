//! Card presenting one recipe in a list.
//!
//! DESIGN
//! ======
//! The same card serves the home list and the saved list. The save button is
//! only rendered when the page passes an `on_save` callback.

use leptos::prelude::*;
use recipes::Recipe;

#[component]
pub fn RecipeCard(
    recipe: Recipe,
    #[prop(default = None)] on_save: Option<Callback<String>>,
    #[prop(default = None)] saved: Option<Signal<bool>>,
) -> impl IntoView {
    let Recipe { id, name, image_url, ingredients, instructions, username, .. } = recipe.clone();
    let cooking_time = recipe.cooking_time_label();
    let is_saved = move || saved.is_some_and(|s| s.get());

    let save_button = on_save.map(|on_save| {
        view! {
            <button
                class="btn recipe-card__save"
                disabled=is_saved
                on:click=move |_| on_save.run(id.clone())
            >
                {move || if is_saved() { "Saved" } else { "Save" }}
            </button>
        }
    });

    view! {
        <article class="recipe-card">
            <img class="recipe-card__image" src=image_url alt=name.clone()/>
            <div class="recipe-card__body">
                <header class="recipe-card__header">
                    <h2 class="recipe-card__name">{name}</h2>
                    {save_button}
                </header>
                <p class="recipe-card__meta">
                    <span class="recipe-card__time">{cooking_time}</span>
                    " · by "
                    <span class="recipe-card__author">{username}</span>
                </p>
                <h3 class="recipe-card__section">"Ingredients"</h3>
                <ul class="recipe-card__ingredients">
                    {ingredients
                        .into_iter()
                        .map(|line| view! { <li>{line}</li> })
                        .collect::<Vec<_>>()}
                </ul>
                <h3 class="recipe-card__section">"Instructions"</h3>
                <p class="recipe-card__instructions">{instructions}</p>
            </div>
        </article>
    }
}
