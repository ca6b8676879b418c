//! # meal-explorer-provider
//!
//! Typed access to the [TheMealDB](https://www.themealdb.com/api.php) public
//! recipe catalog.
//!
//! ## Endpoints
//!
//! | Query | Path | Payload key |
//! |-------|------|-------------|
//! | [`MealQuery::SearchByName`] | `search.php?s=` | `meals` |
//! | [`MealQuery::SearchByFirstLetter`] | `search.php?f=` | `meals` |
//! | [`MealQuery::LookupById`] | `lookup.php?i=` | `meals` |
//! | [`MealQuery::ListCategories`] | `categories.php` | `categories` |
//! | [`MealQuery::ListAreas`] | `list.php?a=list` | `meals` |
//! | [`MealQuery::ListIngredients`] | `list.php?i=list` | `meals` |
//! | [`MealQuery::FilterByCategory`] | `filter.php?c=` | `meals` |
//! | [`MealQuery::FilterByArea`] | `filter.php?a=` | `meals` |
//! | [`MealQuery::FilterByIngredient`] | `filter.php?i=` | `meals` |
//!
//! Every response is a JSON object whose payload key holds an array, or
//! `null` when nothing matched.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use meal_explorer_provider::{
//!     extract_list, ClientConfig, MealDbClient, MealQuery, MealSummary, RecipeCatalog,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MealDbClient::new(&ClientConfig::default())?;
//!
//!     let query = MealQuery::FilterByCategory("Seafood".to_string());
//!     let payload = client.fetch_json(&query).await?;
//!     let meals: Vec<MealSummary> =
//!         extract_list(&payload, query.payload_key()).unwrap_or_default();
//!     for meal in &meals {
//!         println!("{} {}", meal.id, meal.name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! [`RecipeCatalog::fetch_json`] returns [`Result<Value, FetchError>`](FetchError)
//! and distinguishes transport failures, non-success statuses and malformed
//! JSON. [`RecipeCatalog::fetch_query`] collapses all of them to `None` after
//! logging; there is no retry.

mod client;
mod error;
mod http_client;
mod query;
mod traits;
mod types;
mod utils;

pub use client::{ClientConfig, DEFAULT_API_BASE, MealDbClient};
pub use error::{FetchError, Result};
pub use query::{CATEGORIES_KEY, MEALS_KEY, MealQuery};
pub use traits::RecipeCatalog;
pub use types::{
    Area, Category, Ingredient, IngredientLine, MAX_INGREDIENT_SLOTS, Meal, MealSummary,
    extract_list,
};

pub use utils::log_sanitizer;
