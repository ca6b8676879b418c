//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Update 层只产出 Command，不直接做 I/O；
//! 主循环（app.rs）执行 Command 时才调用这里的服务。
//!
//! ```text
//!     Command::Fetch
//!         ↓
//!     tokio::spawn 中调用 CatalogService::fetch（异步）
//!         ↓
//!     meal-explorer-provider 发起 HTTP 请求
//!         ↓
//!     结果作为 AppMessage::Fetched 送回主循环
//!         ↓
//!     Update 层更新 Model，View 层重新渲染
//! ```
//!

mod catalog_service;
mod config_service;

pub use catalog_service::CatalogService;
pub use config_service::{AppConfig, ConfigError, ConfigService, LocalConfigService};
