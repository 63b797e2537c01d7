use super::*;

#[test]
fn default_points_at_local_api() {
    let endpoints = Endpoints::default();
    assert_eq!(endpoints.base(), "http://localhost:5000");
    assert_eq!(endpoints.register(), "http://localhost:5000/auth/register");
}

#[test]
fn trailing_slashes_are_not_doubled() {
    let endpoints = Endpoints::new("https://api.example.com///");
    assert_eq!(endpoints.login(), "https://api.example.com/auth/login");
    assert_eq!(endpoints.recipes(), "https://api.example.com/recipes");
}

#[test]
fn blank_base_falls_back_to_default() {
    assert_eq!(Endpoints::new("   ").base(), DEFAULT_API_BASE);
}

#[test]
fn saved_recipes_path_includes_user_id() {
    let endpoints = Endpoints::default();
    assert_eq!(
        endpoints.saved_recipes("64f1c0ffee"),
        "http://localhost:5000/recipes/saved/64f1c0ffee"
    );
    assert_eq!(
        endpoints.saved_recipe_ids("64f1c0ffee"),
        "http://localhost:5000/recipes/savedRecipes/ids/64f1c0ffee"
    );
}

#[test]
fn user_id_is_percent_encoded() {
    let endpoints = Endpoints::default();
    assert_eq!(
        endpoints.saved_recipes("a/b c"),
        "http://localhost:5000/recipes/saved/a%2Fb%20c"
    );
}
