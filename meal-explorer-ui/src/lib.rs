//! Meal Explorer
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新，返回需要执行的副作用 (`update/`)
//! - **View**: HTML 渲染 (`view/`)
//! - **Event**: 宿主事件 → 消息，渲染后重建处理表 (`event/`)
//! - **Backend**: 菜谱目录与配置服务 (`backend/`)
//! - **Surface**: 宿主界面 (`surface/`)
//!
//! ```text
//!   UiEvent ──▶ handle_event ──▶ AppMessage ──▶ update ──▶ Command
//!                   ▲                 ▲                       │
//!                   │                 └──── tokio 任务 ◀──────┘
//!              HandlerTable ◀── bind_handlers ◀── view::render
//! ```
//!
//! [`app::Runtime`] 把这些层串在一起。

pub mod app;
pub mod backend;
pub mod event;
pub mod message;
pub mod model;
pub mod shell;
pub mod surface;
pub mod update;
pub mod view;

pub use app::Runtime;
