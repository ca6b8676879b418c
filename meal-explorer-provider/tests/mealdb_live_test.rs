//! 真实 API 冒烟测试
//!
//! 需要网络，默认跳过；设置 `MEALDB_LIVE_TESTS=1` 后运行。

mod common;

use meal_explorer_provider::{
    extract_list, Category, ClientConfig, MealDbClient, MealQuery, MealSummary, RecipeCatalog,
};

#[tokio::test]
async fn live_initial_search_returns_meals() {
    skip_unless_env!("MEALDB_LIVE_TESTS");

    let client = require_ok!(MealDbClient::new(&ClientConfig::default()));
    let query = MealQuery::initial();
    let payload = require_some!(client.fetch_query(&query).await);
    let meals: Vec<MealSummary> = require_some!(extract_list(&payload, query.payload_key()));
    assert!(!meals.is_empty());
}

#[tokio::test]
async fn live_categories_listing() {
    skip_unless_env!("MEALDB_LIVE_TESTS");

    let client = require_ok!(MealDbClient::new(&ClientConfig::default()));
    let query = MealQuery::ListCategories;
    let payload = require_some!(client.fetch_query(&query).await);
    let categories: Vec<Category> = require_some!(extract_list(&payload, query.payload_key()));
    assert!(categories.iter().any(|c| c.name == "Seafood"));
}
