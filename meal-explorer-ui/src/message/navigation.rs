//! 导航相关消息

use crate::model::NavItemId;

/// 导航消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationMessage {
    /// 切换侧边导航（打开 ↔ 关闭）
    ToggleNav,
    /// 关闭侧边导航
    CloseNav,
    /// 点击导航链接
    Open(NavItemId),
}
