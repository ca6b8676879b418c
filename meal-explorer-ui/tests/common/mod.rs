//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use meal_explorer_provider::{FetchError, MealQuery, RecipeCatalog};
use meal_explorer_ui::backend::{AppConfig, CatalogService};
use meal_explorer_ui::surface::HeadlessSurface;
use meal_explorer_ui::Runtime;
use serde_json::{json, Value};
use tokio::sync::oneshot;

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 测试用配置：加载遮罩立即隐藏
pub fn test_config() -> AppConfig {
    AppConfig {
        loading_hide_delay_ms: 0,
        ..AppConfig::default()
    }
}

pub fn runtime_with(catalog: Arc<dyn RecipeCatalog>, config: AppConfig) -> Runtime<HeadlessSurface> {
    Runtime::new(config, CatalogService::new(catalog), HeadlessSurface::new())
}

// ============ 载荷构造 ============

/// `{ "meals": [ { idMeal, strMeal }, ... ] }`
pub fn meals_payload(meals: &[(&str, &str)]) -> Value {
    let meals: Vec<Value> = meals
        .iter()
        .map(|(id, name)| {
            json!({
                "idMeal": id,
                "strMeal": name,
                "strMealThumb": format!("https://img.example/{id}.jpg")
            })
        })
        .collect();
    json!({ "meals": meals })
}

pub fn categories_payload(names: &[&str]) -> Value {
    let categories: Vec<Value> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            json!({
                "idCategory": (i + 1).to_string(),
                "strCategory": name,
                "strCategoryThumb": format!("https://img.example/{name}.png"),
                "strCategoryDescription": format!("{name} dishes")
            })
        })
        .collect();
    json!({ "categories": categories })
}

pub fn detail_payload(id: &str, name: &str) -> Value {
    json!({ "meals": [{
        "idMeal": id,
        "strMeal": name,
        "strInstructions": "Cook it.",
        "strArea": "Japanese",
        "strCategory": "Chicken",
        "strTags": "Meat,Casserole",
        "strIngredient1": "soy sauce",
        "strMeasure1": "3/4 cup",
        "strIngredient2": "water",
        "strMeasure2": "1/2 cup",
        "strIngredient3": null
    }]})
}

/// 查询未登记时返回的"无结果"载荷
fn no_match(query: &MealQuery) -> Value {
    let mut payload = serde_json::Map::new();
    payload.insert(query.payload_key().to_string(), Value::Null);
    Value::Object(payload)
}

// ============ 内存数据源 ============

/// 预置响应的数据源；`None` 表示该查询失败（500）
#[derive(Default)]
pub struct FakeCatalog {
    responses: HashMap<MealQuery, Option<Value>>,
    calls: Mutex<Vec<MealQuery>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, query: MealQuery, payload: Value) -> Self {
        self.responses.insert(query, Some(payload));
        self
    }

    pub fn fail(mut self, query: MealQuery) -> Self {
        self.responses.insert(query, None);
        self
    }

    /// 已收到的查询（按调用顺序）
    pub fn calls(&self) -> Vec<MealQuery> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl RecipeCatalog for FakeCatalog {
    fn id(&self) -> &'static str {
        "fake"
    }

    async fn fetch_json(&self, query: &MealQuery) -> meal_explorer_provider::Result<Value> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(query.clone());
        }
        match self.responses.get(query) {
            Some(Some(payload)) => Ok(payload.clone()),
            Some(None) => Err(FetchError::HttpStatus {
                status: 500,
                body: String::new(),
            }),
            None => Ok(no_match(query)),
        }
    }
}

// ============ 可控完成顺序的数据源 ============

/// 登记过的查询会一直挂起，直到测试调用 [`GatedCatalog::release`]
#[derive(Default)]
pub struct GatedCatalog {
    gates: Mutex<HashMap<MealQuery, oneshot::Receiver<Value>>>,
    senders: Mutex<HashMap<MealQuery, oneshot::Sender<Value>>>,
}

impl GatedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 让 `query` 挂起
    pub fn gate(&self, query: MealQuery) {
        let (tx, rx) = oneshot::channel();
        if let (Ok(mut gates), Ok(mut senders)) = (self.gates.lock(), self.senders.lock()) {
            gates.insert(query.clone(), rx);
            senders.insert(query, tx);
        }
    }

    /// 以 `payload` 完成挂起的 `query`
    pub fn release(&self, query: &MealQuery, payload: Value) -> bool {
        let sender = self.senders.lock().ok().and_then(|mut s| s.remove(query));
        sender.is_some_and(|tx| tx.send(payload).is_ok())
    }
}

#[async_trait]
impl RecipeCatalog for GatedCatalog {
    fn id(&self) -> &'static str {
        "gated"
    }

    async fn fetch_json(&self, query: &MealQuery) -> meal_explorer_provider::Result<Value> {
        let gate = self.gates.lock().ok().and_then(|mut g| g.remove(query));
        match gate {
            Some(rx) => rx.await.map_err(|e| FetchError::NetworkError {
                detail: e.to_string(),
            }),
            None => Ok(no_match(query)),
        }
    }
}
