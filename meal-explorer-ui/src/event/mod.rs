//!
//! src/event/mod.rs
//! Event 层：宿主事件 → Message
//!
//! 宿主（命令行 shell、测试）只产出 [`UiEvent`]：点击某个目标、输入框值变化、提交表单。
//! 事件能否生效取决于处理表 [`HandlerTable`]：
//!
//! ```text
//!     view::render(&app)
//!         ↓
//!     binding::bind_handlers(&document)     每次渲染后从零重建处理表
//!         ↓
//!     handler::handle_event(event, &app, &table)
//!         ↓
//!     AppMessage（目标不在表中时为 Noop）
//! ```
//!
//! 处理表只来自当前文档的可见区域，旧渲染留下的目标永远不会被复用。
//!

mod binding;
mod handler;

pub use binding::{bind_handlers, HandlerTable};
pub use handler::handle_event;

use crate::model::state::ContactField;
use crate::model::NavItemId;
use crate::view::pages::search::{LETTER_INPUT_ID, NAME_INPUT_ID};

/// 可点击的目标
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    /// 导航链接
    NavLink(NavItemId),
    /// 导航切换按钮
    NavToggle,
    /// 菜品卡片（id）
    MealTile(String),
    /// 分类卡片（名称）
    CategoryTile(String),
    /// 地区卡片（名称）
    AreaTile(String),
    /// 食材卡片（名称）
    IngredientTile(String),
    /// 详情关闭按钮
    CloseDetail,
}

/// 可输入的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    SearchByName,
    SearchByFirstLetter,
    Contact(ContactField),
}

impl InputField {
    /// 输入框元素 id
    pub fn element_id(self) -> &'static str {
        match self {
            InputField::SearchByName => NAME_INPUT_ID,
            InputField::SearchByFirstLetter => LETTER_INPUT_ID,
            InputField::Contact(field) => field.element_id(),
        }
    }

    pub fn from_element_id(id: &str) -> Option<Self> {
        match id {
            NAME_INPUT_ID => Some(InputField::SearchByName),
            LETTER_INPUT_ID => Some(InputField::SearchByFirstLetter),
            other => ContactField::from_element_id(other).map(InputField::Contact),
        }
    }
}

/// 宿主事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// 点击
    Click(Target),
    /// 输入框值变化（携带完整的当前值）
    Input { field: InputField, value: String },
    /// 提交联系表单
    SubmitContact,
    /// 关闭应用
    Quit,
}
