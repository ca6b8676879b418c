//! 事件处理

use super::{HandlerTable, InputField, UiEvent};
use crate::message::{AppMessage, ContactMessage, ContentMessage};
use crate::model::App;

/// 处理事件，返回对应的消息
pub fn handle_event(event: UiEvent, app: &App, table: &HandlerTable) -> AppMessage {
    match event {
        UiEvent::Quit => AppMessage::Quit,
        UiEvent::Click(target) => match table.click(&target) {
            Some(msg) => msg.clone(),
            None => {
                log::debug!("忽略未绑定的点击目标: {target:?}");
                AppMessage::Noop
            }
        },
        UiEvent::Input { field, value } => handle_input(field, value, table),
        UiEvent::SubmitContact if table.accepts_submit() => {
            AppMessage::Contact(ContactMessage::Submit)
        }
        UiEvent::SubmitContact => {
            log::debug!("联系表单不可见 (当前面板 {:?})", app.active_panel());
            AppMessage::Noop
        }
    }
}

/// 处理输入框事件
fn handle_input(field: InputField, value: String, table: &HandlerTable) -> AppMessage {
    if !table.accepts_input(field) {
        log::debug!("忽略不可见的输入框: {field:?}");
        return AppMessage::Noop;
    }
    match field {
        InputField::SearchByName => AppMessage::Content(ContentMessage::SearchByName(value)),
        InputField::SearchByFirstLetter => {
            AppMessage::Content(ContentMessage::SearchByLetter(value))
        }
        InputField::Contact(field) => AppMessage::Contact(ContactMessage::Input(field, value)),
    }
}
