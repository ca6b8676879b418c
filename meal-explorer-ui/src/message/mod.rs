//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁。
//! 用户操作（点击、输入、提交）与异步结果（查询完成、加载遮罩计时）
//! 都被翻译成 Message，再交给 Update 层处理。
//!
//!
//! 有模块结构：
//! ```text
//!     src/message/mod.rs
//!         mod app;            // 主消息
//!         mod contact;        // 联系表单子消息
//!         mod content;        // 内容区子消息（搜索、点击条目）
//!         mod navigation;     // 侧边导航子消息
//!
//!     与用户操作无关的两条消息：
//!         - Fetched(FetchOutcome)   后台查询任务完成后经 channel 送回
//!         - HideLoading             计时任务在延迟结束后送回
//! ```
//!

mod app;
mod contact;
mod content;
mod navigation;

pub use app::{AppMessage, FetchOutcome};
pub use contact::ContactMessage;
pub use content::ContentMessage;
pub use navigation::NavigationMessage;
