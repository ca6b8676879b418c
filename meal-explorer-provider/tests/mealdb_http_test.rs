//! HTTP 客户端集成测试（本地桩服务器）

mod common;

use common::{StubResponse, StubServer};
use meal_explorer_provider::{
    extract_list, Area, Category, ClientConfig, FetchError, Meal, MealDbClient, MealQuery,
    MealSummary, RecipeCatalog,
};

async fn client_for(routes: Vec<(&str, StubResponse)>) -> Option<MealDbClient> {
    let server = StubServer::start(routes).await.ok()?;
    MealDbClient::new(&ClientConfig {
        base_url: server.base_url,
        ..ClientConfig::default()
    })
    .ok()
}

#[tokio::test]
async fn search_by_name_returns_meals_in_api_order() {
    let client = require_some!(
        client_for(vec![(
            "search.php?s=Arrabiata",
            StubResponse::json(
                r#"{"meals":[{"idMeal":"52771","strMeal":"Spicy Arrabiata Penne","strMealThumb":"a.jpg"},{"idMeal":"11","strMeal":"Second","strMealThumb":"b.jpg"}]}"#,
            ),
        )])
        .await
    );

    let query = MealQuery::SearchByName("Arrabiata".into());
    let payload = require_some!(client.fetch_query(&query).await);
    let meals: Vec<MealSummary> = require_some!(extract_list(&payload, query.payload_key()));
    let ids: Vec<&str> = meals.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["52771", "11"]);
}

#[tokio::test]
async fn null_payload_is_a_successful_empty_result() {
    let client = require_some!(
        client_for(vec![("search.php?s=zzzz", StubResponse::json(r#"{"meals":null}"#))]).await
    );

    let query = MealQuery::SearchByName("zzzz".into());
    let payload = require_some!(client.fetch_query(&query).await);
    assert!(extract_list::<MealSummary>(&payload, query.payload_key()).is_none());
}

#[tokio::test]
async fn non_success_status_collapses_to_none() {
    let client = require_some!(
        client_for(vec![("categories.php", StubResponse::status(500))]).await
    );

    let err = client.fetch_json(&MealQuery::ListCategories).await;
    assert!(
        matches!(err, Err(FetchError::HttpStatus { status: 500, .. })),
        "unexpected: {err:?}"
    );
    assert!(client.fetch_query(&MealQuery::ListCategories).await.is_none());
}

#[tokio::test]
async fn malformed_json_collapses_to_none() {
    let client = require_some!(
        client_for(vec![("list.php?a=list", StubResponse::json("<html>maintenance</html>"))]).await
    );

    let err = client.fetch_json(&MealQuery::ListAreas).await;
    assert!(matches!(err, Err(FetchError::ParseError { .. })), "unexpected: {err:?}");
    assert!(client.fetch_query(&MealQuery::ListAreas).await.is_none());
}

#[tokio::test]
async fn connection_refused_collapses_to_none() {
    // 绑定后立即释放端口，得到一个无人监听的地址
    let addr = {
        let listener = require_ok!(std::net::TcpListener::bind("127.0.0.1:0"));
        require_ok!(listener.local_addr())
    };
    let client = require_ok!(MealDbClient::new(&ClientConfig {
        base_url: format!("http://{addr}/api/json/v1/1/"),
        ..ClientConfig::default()
    }));

    assert!(client.fetch_query(&MealQuery::ListIngredients).await.is_none());
}

#[tokio::test]
async fn lookup_decodes_full_meal_record() {
    let client = require_some!(
        client_for(vec![(
            "lookup.php?i=52772",
            StubResponse::json(
                r#"{"meals":[{"idMeal":"52772","strMeal":"Teriyaki Chicken Casserole","strArea":"Japanese","strCategory":"Chicken","strTags":"Meat,Casserole","strIngredient1":"soy sauce","strMeasure1":"3/4 cup","strIngredient2":"water","strMeasure2":"1/2 cup","strIngredient3":"","strMeasure3":""}]}"#,
            ),
        )])
        .await
    );

    let query = MealQuery::LookupById("52772".into());
    let payload = require_some!(client.fetch_query(&query).await);
    let meals: Vec<Meal> = require_some!(extract_list(&payload, query.payload_key()));
    let meal = require_some!(meals.first());
    assert_eq!(meal.area.as_deref(), Some("Japanese"));
    assert_eq!(meal.ingredients().len(), 2);
    assert_eq!(meal.tag_list(), vec!["Meat", "Casserole"]);
}

#[tokio::test]
async fn categories_use_categories_key() {
    let client = require_some!(
        client_for(vec![(
            "categories.php",
            StubResponse::json(
                r#"{"categories":[{"idCategory":"1","strCategory":"Beef","strCategoryThumb":"beef.png","strCategoryDescription":"Beef is the culinary name for meat from cattle."}]}"#,
            ),
        )])
        .await
    );

    let query = MealQuery::ListCategories;
    let payload = require_some!(client.fetch_query(&query).await);
    let categories: Vec<Category> = require_some!(extract_list(&payload, query.payload_key()));
    assert_eq!(categories[0].name, "Beef");
    assert!(extract_list::<Area>(&payload, "meals").is_none());
}
