//! 列表内容状态

use meal_explorer_provider::extract_list;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// 一个列表面板的内容
///
/// 每次查询完成都会整体替换，不做局部更新。
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Listing<T> {
    /// 尚未加载或已被清空（渲染为空白）
    #[default]
    Pending,
    /// 查询成功且有结果
    Items(Vec<T>),
    /// 查询成功但无结果（`null` 或空数组）
    Empty,
    /// 查询失败
    Failed,
}

impl<T: DeserializeOwned> Listing<T> {
    /// 由查询载荷构造：载荷为 `None` 表示请求失败
    pub fn from_payload(payload: Option<&Value>, key: &str) -> Self {
        match payload {
            None => Listing::Failed,
            Some(value) => Self::from_items(extract_list(value, key)),
        }
    }
}

impl<T> Listing<T> {
    /// `None` 与空数组都视为无结果
    pub fn from_items(items: Option<Vec<T>>) -> Self {
        match items {
            Some(items) if !items.is_empty() => Listing::Items(items),
            _ => Listing::Empty,
        }
    }

    /// 可渲染的条目；`None` 表示应显示空状态提示
    pub fn items(&self) -> Option<&[T]> {
        match self {
            Listing::Items(items) => Some(items),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.items().map_or(0, <[T]>::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
