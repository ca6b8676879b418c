//! 菜谱目录服务
//!
//! 对 [`RecipeCatalog`] 的一层薄封装，供主循环在后台任务中调用。

use std::sync::Arc;

use meal_explorer_provider::{MealDbClient, MealQuery, RecipeCatalog};
use serde_json::Value;

use super::AppConfig;

/// 目录服务（可廉价克隆，克隆共享同一个数据源）
#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<dyn RecipeCatalog>,
}

impl CatalogService {
    pub fn new(catalog: Arc<dyn RecipeCatalog>) -> Self {
        Self { catalog }
    }

    /// 根据配置创建 HTTP 数据源
    pub fn from_config(config: &AppConfig) -> meal_explorer_provider::Result<Self> {
        let client = MealDbClient::new(&config.client_config())?;
        log::info!("目录地址: {}", client.base_url());
        Ok(Self::new(Arc::new(client)))
    }

    /// 执行查询；失败时返回 `None`（错误已在数据源层记录）
    pub async fn fetch(&self, query: &MealQuery) -> Option<Value> {
        self.catalog.fetch_query(query).await
    }

    pub fn id(&self) -> &'static str {
        self.catalog.id()
    }
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService")
            .field("catalog", &self.catalog.id())
            .finish()
    }
}
