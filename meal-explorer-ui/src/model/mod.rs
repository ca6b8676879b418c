//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的唯一来源，只包含纯数据结构。
//! 所有状态变更都通过 Update 层触发。
//!
//!
//! 有模块结构：
//! ```text
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod navigation;     // 侧边导航（打开 / 关闭）
//!         mod panel;          // 面板注册表（哪个面板可见）
//!         mod request;        // 请求序号（过期响应判断）
//!
//!         pub mod state;      // 各面板的数据容器
//!
//!     panel.rs 与 state/ 的区别：
//!         - Panel 只标识"当前显示哪个区域"，不存储数据；
//!         - State 存储区域里的内容（菜品列表、表单值等）。
//! ```
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 面板可见性
//! ═══════════════════════════════════════════════════════════════════════════
//!
//! ```text
//!     ViewRegistry 只保存一个激活面板，可见集合由它推导：
//!         - Search     → 搜索区 + 菜品网格
//!         - MealGrid   → 菜品网格
//!         - 其他面板   → 仅该面板
//!
//!     数据流：
//!         用户点击导航链接 "Categories"
//!             ↓
//!         event/handler.rs 返回 Navigation(Open(Categories))
//!             ↓
//!         update/navigation.rs 调用 app.views.show_panel(Panel::Categories)
//!             ↓
//!         view 层根据 is_visible() 给其余区域加上 hidden
//! ```
//!

mod app;
mod navigation;
mod panel;
mod request;

pub mod state;

pub use app::App;
pub use navigation::{NavItem, NavItemId, NavigationState};
pub use panel::{Panel, ViewRegistry};
pub use request::{FetchTarget, RequestTicket, RequestTracker};
