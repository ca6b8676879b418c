//! 页面状态模块
//!
//! 定义各个面板的数据容器

mod contact;
mod listing;
mod loading;
mod search;

pub use contact::{ContactField, ContactForm, ContactOutcome};
pub use listing::Listing;
pub use loading::LoadingState;
pub use search::SearchState;
