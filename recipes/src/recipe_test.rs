use super::*;

// =============================================================
// Recipe decoding
// =============================================================

#[test]
fn recipe_decodes_full_record() {
    let raw = r#"{
        "_id": "r1",
        "name": "Pancakes",
        "imageUrl": "https://img.example/p.png",
        "ingredients": ["flour", "milk", "egg"],
        "instructions": "Mix and fry.",
        "cookingTime": 20,
        "username": "chef",
        "userOwner": "u1"
    }"#;
    let recipe: Recipe = serde_json::from_str(raw).unwrap();
    assert_eq!(recipe.id, "r1");
    assert_eq!(recipe.name, "Pancakes");
    assert_eq!(recipe.image_url, "https://img.example/p.png");
    assert_eq!(recipe.ingredients, vec!["flour", "milk", "egg"]);
    assert_eq!(recipe.instructions, "Mix and fry.");
    assert_eq!(recipe.cooking_time, 20);
    assert_eq!(recipe.username, "chef");
}

#[test]
fn recipe_decodes_with_missing_optional_fields() {
    let recipe: Recipe = serde_json::from_str(r#"{"_id":"r2","name":"Toast"}"#).unwrap();
    assert_eq!(recipe.image_url, "");
    assert!(recipe.ingredients.is_empty());
    assert_eq!(recipe.instructions, "");
    assert_eq!(recipe.cooking_time, 0);
    assert_eq!(recipe.username, "");
}

#[test]
fn recipe_accepts_integral_float_cooking_time() {
    let recipe: Recipe =
        serde_json::from_str(r#"{"_id":"r3","name":"Soup","cookingTime":45.0}"#).unwrap();
    assert_eq!(recipe.cooking_time, 45);
}

#[test]
fn recipe_accepts_null_cooking_time() {
    let recipe: Recipe =
        serde_json::from_str(r#"{"_id":"r3","name":"Soup","cookingTime":null}"#).unwrap();
    assert_eq!(recipe.cooking_time, 0);
}

#[test]
fn recipe_rejects_fractional_or_negative_cooking_time() {
    assert!(serde_json::from_str::<Recipe>(r#"{"_id":"r","name":"n","cookingTime":1.5}"#).is_err());
    assert!(serde_json::from_str::<Recipe>(r#"{"_id":"r","name":"n","cookingTime":-3}"#).is_err());
    assert!(serde_json::from_str::<Recipe>(r#"{"_id":"r","name":"n","cookingTime":"ten"}"#).is_err());
}

#[test]
fn recipe_list_decodes_empty_array() {
    let recipes: Vec<Recipe> = serde_json::from_str("[]").unwrap();
    assert!(recipes.is_empty());
}

#[test]
fn cooking_time_label_pluralizes() {
    let mut recipe: Recipe = serde_json::from_str(r#"{"_id":"r","name":"n","cookingTime":1}"#).unwrap();
    assert_eq!(recipe.cooking_time_label(), "1 minute");
    recipe.cooking_time = 30;
    assert_eq!(recipe.cooking_time_label(), "30 minutes");
}

// =============================================================
// Save payloads
// =============================================================

#[test]
fn save_request_uses_api_field_names() {
    let req = SaveRecipeRequest { recipe_id: "r1".to_owned(), user_id: "u1".to_owned() };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "recipeID": "r1", "userID": "u1" })
    );
}

#[test]
fn saved_ids_decode_and_lookup() {
    let ids: SavedRecipeIds = serde_json::from_str(r#"{"savedRecipes":["r1","r2"]}"#).unwrap();
    assert!(ids.contains("r2"));
    assert!(!ids.contains("r3"));

    let empty: SavedRecipeIds = serde_json::from_str("{}").unwrap();
    assert!(empty.saved_recipes.is_empty());
}

// =============================================================
// Lenient decoding of legacy records
// =============================================================

#[test]
fn recipe_treats_null_fields_as_empty() {
    let raw = r#"{
        "_id": "r4",
        "name": "Stew",
        "imageUrl": null,
        "ingredients": null,
        "instructions": null,
        "cookingTime": null,
        "username": null
    }"#;
    let recipe: Recipe = serde_json::from_str(raw).unwrap();
    assert_eq!(recipe.image_url, "");
    assert!(recipe.ingredients.is_empty());
    assert_eq!(recipe.instructions, "");
    assert_eq!(recipe.cooking_time, 0);
    assert_eq!(recipe.username, "");
}

#[test]
fn recipe_accepts_numeric_string_cooking_time() {
    let recipe: Recipe =
        serde_json::from_str(r#"{"_id":"r5","name":"Rice","cookingTime":"30"}"#).unwrap();
    assert_eq!(recipe.cooking_time, 30);

    let recipe: Recipe =
        serde_json::from_str(r#"{"_id":"r5","name":"Rice","cookingTime":" 25.0 "}"#).unwrap();
    assert_eq!(recipe.cooking_time, 25);

    let recipe: Recipe =
        serde_json::from_str(r#"{"_id":"r5","name":"Rice","cookingTime":""}"#).unwrap();
    assert_eq!(recipe.cooking_time, 0);
}

#[test]
fn one_legacy_record_does_not_fail_the_list() {
    let raw = r#"[
        {"_id":"r1","name":"Pancakes","imageUrl":"p.png","cookingTime":20},
        {"_id":"r2","name":"Soup","imageUrl":null,"cookingTime":"30"}
    ]"#;
    let recipes: Vec<Recipe> = serde_json::from_str(raw).unwrap();
    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes[1].image_url, "");
    assert_eq!(recipes[1].cooking_time, 30);
}
