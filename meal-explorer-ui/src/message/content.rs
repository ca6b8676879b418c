//! 内容区消息
//!
//! 搜索框输入与条目点击

/// 内容区消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentMessage {
    // ========== 搜索 ==========
    /// 名称搜索框输入（当前完整值）
    SearchByName(String),
    /// 首字母搜索框输入（当前完整值）
    SearchByLetter(String),

    // ========== 条目点击 ==========
    /// 点击菜品（携带 id）
    SelectMeal(String),
    /// 关闭详情
    CloseDetail,
    /// 点击分类
    SelectCategory(String),
    /// 点击地区
    SelectArea(String),
    /// 点击食材
    SelectIngredient(String),
}
