//! Catalog record types.
//!
//! Field names follow the remote API (`idMeal`, `strMeal`, ...) on the wire and
//! idiomatic Rust names in code. Every record is a transient view model: it is
//! decoded from one response, rendered once and dropped.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Number of indexed `strIngredientN` / `strMeasureN` slots on a meal record.
pub const MAX_INGREDIENT_SLOTS: usize = 20;

// ============ Meal Types ============

/// A full meal record, as returned by `search.php` and `lookup.php`.
///
/// The ingredient slots are not modelled as fixed fields: they stay in
/// [`fields`](Self::fields) and are read by constructed key, see
/// [`Meal::ingredients`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Meal {
    /// Catalog identifier (numeric, but transmitted as a string).
    #[serde(rename = "idMeal")]
    pub id: String,
    /// Display name.
    #[serde(rename = "strMeal")]
    pub name: String,
    /// Thumbnail image URL.
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
    /// Free-form preparation text.
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    /// Cuisine / area name.
    #[serde(rename = "strArea", default)]
    pub area: Option<String>,
    /// Category name.
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    /// Comma-separated tag list.
    #[serde(rename = "strTags", default)]
    pub tags: Option<String>,
    /// Original recipe URL.
    #[serde(rename = "strSource", default)]
    pub source: Option<String>,
    /// Video URL.
    #[serde(rename = "strYoutube", default)]
    pub youtube: Option<String>,
    /// Every other field of the record, keyed by its wire name.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// One entry of a meal's ingredient list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientLine {
    /// Ingredient name (`strIngredientN`).
    pub ingredient: String,
    /// Quantity (`strMeasureN`), trimmed; `None` when absent or blank.
    pub measure: Option<String>,
}

impl IngredientLine {
    /// `"<measure> <ingredient>"`, or just the ingredient when no measure is set.
    pub fn label(&self) -> String {
        match &self.measure {
            Some(measure) => format!("{measure} {}", self.ingredient.trim()),
            None => self.ingredient.trim().to_string(),
        }
    }
}

impl Meal {
    /// Scan the indexed ingredient slots in order.
    ///
    /// The scan stops at the first missing ingredient (absent, `null` or empty
    /// string). Slots after a gap are never read, even when populated.
    pub fn ingredients(&self) -> Vec<IngredientLine> {
        (1..=MAX_INGREDIENT_SLOTS)
            .map_while(|index| {
                let ingredient = self.slot(&format!("strIngredient{index}"))?;
                let measure = self
                    .slot(&format!("strMeasure{index}"))
                    .map(|m| m.trim().to_string())
                    .filter(|m| !m.is_empty());
                Some(IngredientLine {
                    ingredient,
                    measure,
                })
            })
            .collect()
    }

    /// Tags split from [`tags`](Self::tags), whitespace trimmed, order preserved.
    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .as_deref()
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Non-empty string value of a raw field.
    fn slot(&self, key: &str) -> Option<String> {
        match self.fields.get(key)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}

/// The reduced meal record returned by `filter.php`.
///
/// Search results decode into this type as well; extra fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealSummary {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
}

// ============ Listing Types ============

/// A meal category from `categories.php`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    #[serde(rename = "idCategory", default)]
    pub id: Option<String>,
    #[serde(rename = "strCategory")]
    pub name: String,
    #[serde(rename = "strCategoryThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strCategoryDescription", default)]
    pub description: Option<String>,
}

/// An area (cuisine) from `list.php?a=list`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Area {
    #[serde(rename = "strArea")]
    pub name: String,
}

/// An ingredient from `list.php?i=list`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ingredient {
    #[serde(rename = "idIngredient", default)]
    pub id: Option<String>,
    #[serde(rename = "strIngredient")]
    pub name: String,
    #[serde(rename = "strDescription", default)]
    pub description: Option<String>,
}

// ============ Payload Helpers ============

/// Decode the top-level array stored under `key`.
///
/// Returns `None` when the key is missing, `null` (the API's "no match"), or
/// the array does not decode into `T`.
pub fn extract_list<T: DeserializeOwned>(payload: &Value, key: &str) -> Option<Vec<T>> {
    let list = payload.get(key)?;
    if list.is_null() {
        return None;
    }
    match serde_json::from_value(list.clone()) {
        Ok(items) => Some(items),
        Err(e) => {
            log::warn!("[mealdb] Could not decode '{key}' list: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn meal_from(value: Value) -> Meal {
        match serde_json::from_value(value) {
            Ok(meal) => meal,
            Err(e) => panic!("meal fixture should decode: {e}"),
        }
    }

    #[test]
    fn ingredient_scan_stops_at_first_gap() {
        let meal = meal_from(json!({
            "idMeal": "1",
            "strMeal": "Gap Stew",
            "strIngredient1": "Beef",
            "strMeasure1": "1kg",
            "strIngredient2": "Onion",
            "strMeasure2": "2",
            "strIngredient3": "",
            "strMeasure3": "",
            "strIngredient4": "Salt",
            "strMeasure4": "pinch",
        }));

        let lines = meal.ingredients();
        let names: Vec<&str> = lines.iter().map(|l| l.ingredient.as_str()).collect();
        assert_eq!(names, vec!["Beef", "Onion"]);
    }

    #[test]
    fn ingredient_scan_treats_null_and_absent_as_gap() {
        let meal = meal_from(json!({
            "idMeal": "2",
            "strMeal": "Null Soup",
            "strIngredient1": "Water",
            "strIngredient2": null,
            "strIngredient3": "Leek",
        }));
        assert_eq!(meal.ingredients().len(), 1);

        let bare = meal_from(json!({ "idMeal": "3", "strMeal": "Nothing" }));
        assert!(bare.ingredients().is_empty());
    }

    #[test]
    fn ingredient_scan_is_bounded() {
        let mut record = Map::new();
        record.insert("idMeal".into(), json!("4"));
        record.insert("strMeal".into(), json!("Everything"));
        for i in 1..=25 {
            record.insert(format!("strIngredient{i}"), json!(format!("Item {i}")));
        }
        let meal = meal_from(Value::Object(record));
        assert_eq!(meal.ingredients().len(), MAX_INGREDIENT_SLOTS);
    }

    #[test]
    fn ingredient_label_uses_trimmed_measure() {
        let meal = meal_from(json!({
            "idMeal": "5",
            "strMeal": "Label Test",
            "strIngredient1": "Flour",
            "strMeasure1": " 200g ",
            "strIngredient2": "Egg",
            "strMeasure2": " ",
        }));
        let labels: Vec<String> = meal.ingredients().iter().map(IngredientLine::label).collect();
        assert_eq!(labels, vec!["200g Flour", "Egg"]);
    }

    #[test]
    fn tags_are_trimmed_and_ordered() {
        let meal = meal_from(json!({
            "idMeal": "6",
            "strMeal": "Tagged",
            "strTags": "Soup, Vegetarian ,Spicy",
        }));
        assert_eq!(meal.tag_list(), vec!["Soup", "Vegetarian", "Spicy"]);
    }

    #[test]
    fn missing_tags_yield_empty_list() {
        let meal = meal_from(json!({ "idMeal": "7", "strMeal": "Plain", "strTags": null }));
        assert!(meal.tag_list().is_empty());
    }

    #[test]
    fn extract_list_handles_null_and_missing() {
        let payload = json!({ "meals": null });
        assert!(extract_list::<MealSummary>(&payload, "meals").is_none());
        assert!(extract_list::<MealSummary>(&json!({}), "meals").is_none());
    }

    #[test]
    fn extract_list_keeps_api_order() {
        let payload = json!({
            "meals": [
                { "idMeal": "52", "strMeal": "Zebra Cake", "strMealThumb": "z.jpg" },
                { "idMeal": "11", "strMeal": "Apple Pie", "strMealThumb": "a.jpg" }
            ]
        });
        let meals: Vec<MealSummary> = extract_list(&payload, "meals").unwrap_or_default();
        let ids: Vec<&str> = meals.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["52", "11"]);
    }

    #[test]
    fn areas_decode_from_meals_key() {
        let payload = json!({ "meals": [{ "strArea": "British" }, { "strArea": "Thai" }] });
        let areas: Vec<Area> = extract_list(&payload, "meals").unwrap_or_default();
        assert_eq!(areas.len(), 2);
        assert_eq!(areas[1].name, "Thai");
    }
}
