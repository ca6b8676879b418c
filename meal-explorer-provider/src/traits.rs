use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::query::MealQuery;

/// 菜谱目录数据源 Trait
///
/// UI 层只依赖此 trait；HTTP 客户端是其中一种实现，测试中使用内存实现。
#[async_trait]
pub trait RecipeCatalog: Send + Sync {
    /// 数据源标识符（用于日志）
    fn id(&self) -> &'static str;

    /// 执行查询并返回解析后的 JSON
    ///
    /// 传输失败、非 2xx 状态码、JSON 格式错误分别映射为不同的 [`FetchError`](crate::FetchError) 变体。
    async fn fetch_json(&self, query: &MealQuery) -> Result<Value>;

    /// 执行查询；任何失败都折叠为 `None`
    ///
    /// 失败在此层被吞掉并记录日志，调用方只负责展示"无数据"提示。
    async fn fetch_query(&self, query: &MealQuery) -> Option<Value> {
        match self.fetch_json(query).await {
            Ok(value) => Some(value),
            Err(e) if e.is_expected() => {
                log::warn!("[{}] {} failed: {e}", self.id(), query.action());
                None
            }
            Err(e) => {
                log::error!("[{}] {} failed: {e}", self.id(), query.action());
                None
            }
        }
    }
}
