//! 应用主消息枚举

use meal_explorer_provider::MealQuery;
use serde_json::Value;

use super::{ContactMessage, ContentMessage, NavigationMessage};
use crate::model::RequestTicket;

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 初始加载（无筛选的菜品查询）
    Init,

    /// 退出应用
    Quit,

    /// 导航相关消息
    Navigation(NavigationMessage),

    /// 内容区消息
    Content(ContentMessage),

    /// 联系表单消息
    Contact(ContactMessage),

    /// 查询完成
    Fetched(FetchOutcome),

    /// 隐藏加载遮罩
    HideLoading,

    /// 无操作
    Noop,
}

/// 一次查询的结果
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub ticket: RequestTicket,
    pub query: MealQuery,
    /// `None` 表示请求失败（网络、状态码或 JSON 错误）
    pub payload: Option<Value>,
}
