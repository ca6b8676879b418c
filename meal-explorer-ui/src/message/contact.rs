//! 联系表单消息

use crate::model::state::ContactField;

/// 联系表单消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactMessage {
    /// 字段输入（当前完整值）
    Input(ContactField, String),
    /// 提交
    Submit,
}
