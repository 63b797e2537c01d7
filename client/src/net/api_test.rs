use super::*;

#[test]
fn endpoints_default_to_local_api() {
    assert_eq!(endpoints_for(None).base(), "http://localhost:5000");
}

#[test]
fn endpoints_use_configured_base() {
    let endpoints = endpoints_for(Some("https://recipes.example.com/"));
    assert_eq!(endpoints.register(), "https://recipes.example.com/auth/register");
    assert_eq!(
        endpoints.saved_recipes("u1"),
        "https://recipes.example.com/recipes/saved/u1"
    );
}
