//! Recipe records as served by the recipe API.
//!
//! DESIGN
//! ======
//! Field names follow the API's camelCase JSON via serde renames. Everything
//! except the id and name may be missing or `null` on the wire so a partially
//! filled record still renders as a card instead of failing the whole list.

#[cfg(test)]
#[path = "recipe_test.rs"]
mod recipe_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A recipe as returned by `GET /recipes` and `GET /recipes/saved/{userID}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Server-assigned identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Image URL shown on the card.
    #[serde(rename = "imageUrl", default, deserialize_with = "null_as_default")]
    pub image_url: String,
    /// Ingredient lines in display order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: Vec<String>,
    /// Free-form preparation text.
    #[serde(default, deserialize_with = "null_as_default")]
    pub instructions: String,
    /// Cooking time in minutes.
    #[serde(rename = "cookingTime", default, deserialize_with = "deserialize_minutes")]
    pub cooking_time: u32,
    /// Username of the recipe's author.
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
}

impl Recipe {
    /// Human-readable cooking time, e.g. `"45 minutes"`.
    #[must_use]
    pub fn cooking_time_label(&self) -> String {
        match self.cooking_time {
            1 => "1 minute".to_owned(),
            n => format!("{n} minutes"),
        }
    }
}

/// Body of `PUT /recipes`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRecipeRequest {
    #[serde(rename = "recipeID")]
    pub recipe_id: String,
    #[serde(rename = "userID")]
    pub user_id: String,
}

/// Saved-recipe id list returned by `PUT /recipes` and
/// `GET /recipes/savedRecipes/ids/{userID}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedRecipeIds {
    #[serde(rename = "savedRecipes", default)]
    pub saved_recipes: Vec<String>,
}

impl SavedRecipeIds {
    #[must_use]
    pub fn contains(&self, recipe_id: &str) -> bool {
        self.saved_recipes.iter().any(|id| id == recipe_id)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts whole minutes as an integer, an integral float, or a numeric
/// string; `null` and `""` mean unknown (0).
fn deserialize_minutes<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(0),
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return minutes_from_u64(int).map_err(D::Error::custom);
            }
            number
                .as_f64()
                .and_then(whole_minutes)
                .ok_or_else(|| D::Error::custom("expected non-negative whole minutes"))
        }
        serde_json::Value::String(raw) => {
            let raw = raw.trim();
            if raw.is_empty() {
                return Ok(0);
            }
            if let Ok(int) = raw.parse::<u64>() {
                return minutes_from_u64(int).map_err(D::Error::custom);
            }
            raw.parse::<f64>()
                .ok()
                .and_then(whole_minutes)
                .ok_or_else(|| D::Error::custom(format!("cooking time {raw:?} is not whole minutes")))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}

fn minutes_from_u64(int: u64) -> Result<u32, String> {
    u32::try_from(int).map_err(|_| format!("cooking time {int} out of range"))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_minutes(float: f64) -> Option<u32> {
    (float.is_finite() && float.fract() == 0.0 && float >= 0.0 && float <= f64::from(u32::MAX))
        .then(|| float as u32)
}
