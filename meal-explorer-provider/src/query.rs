//! Endpoint queries against the catalog API.

use serde::{Deserialize, Serialize};

/// Top-level key holding meal-shaped arrays (meals, areas, ingredients).
pub const MEALS_KEY: &str = "meals";
/// Top-level key holding the category array.
pub const CATEGORIES_KEY: &str = "categories";

/// One parameterized request to the catalog API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum MealQuery {
    /// `search.php?s=`; an empty name returns the unfiltered default set.
    SearchByName(String),
    /// `search.php?f=`
    SearchByFirstLetter(char),
    /// `lookup.php?i=`
    LookupById(String),
    /// `categories.php`
    ListCategories,
    /// `list.php?a=list` (answered under the `meals` key)
    ListAreas,
    /// `list.php?i=list` (answered under the `meals` key)
    ListIngredients,
    /// `filter.php?c=`
    FilterByCategory(String),
    /// `filter.php?a=`
    FilterByArea(String),
    /// `filter.php?i=`
    FilterByIngredient(String),
}

impl MealQuery {
    /// The unfiltered query used on initial load and whenever search is reset.
    pub fn initial() -> Self {
        Self::SearchByName(String::new())
    }

    /// Relative path and query string, with parameter values percent-encoded.
    pub fn path(&self) -> String {
        match self {
            Self::SearchByName(name) => format!("search.php?s={}", encode(name)),
            Self::SearchByFirstLetter(letter) => {
                format!("search.php?f={}", encode(&letter.to_string()))
            }
            Self::LookupById(id) => format!("lookup.php?i={}", encode(id)),
            Self::ListCategories => "categories.php".to_string(),
            Self::ListAreas => "list.php?a=list".to_string(),
            Self::ListIngredients => "list.php?i=list".to_string(),
            Self::FilterByCategory(name) => format!("filter.php?c={}", encode(name)),
            Self::FilterByArea(name) => format!("filter.php?a={}", encode(name)),
            Self::FilterByIngredient(name) => format!("filter.php?i={}", encode(name)),
        }
    }

    /// Top-level key under which the response array is returned.
    pub fn payload_key(&self) -> &'static str {
        match self {
            Self::ListCategories => CATEGORIES_KEY,
            _ => MEALS_KEY,
        }
    }

    /// Short name used in log lines.
    pub fn action(&self) -> &'static str {
        match self {
            Self::SearchByName(_) => "search_by_name",
            Self::SearchByFirstLetter(_) => "search_by_first_letter",
            Self::LookupById(_) => "lookup_by_id",
            Self::ListCategories => "list_categories",
            Self::ListAreas => "list_areas",
            Self::ListIngredients => "list_ingredients",
            Self::FilterByCategory(_) => "filter_by_category",
            Self::FilterByArea(_) => "filter_by_area",
            Self::FilterByIngredient(_) => "filter_by_ingredient",
        }
    }
}

impl std::fmt::Display for MealQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

fn encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
