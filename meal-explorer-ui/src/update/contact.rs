//! 联系表单更新逻辑

use super::Command;
use crate::message::ContactMessage;
use crate::model::App;

/// 处理联系表单消息
pub fn update(app: &mut App, msg: ContactMessage) -> Vec<Command> {
    match msg {
        ContactMessage::Input(field, value) => {
            app.contact.set(field, value);
            Vec::new()
        }

        ContactMessage::Submit => {
            let outcome = app.contact.submit();
            log::info!("联系表单提交: {outcome:?}");
            let notice = outcome.notice().to_string();
            app.status_message = Some(notice.clone());
            vec![Command::Alert(notice)]
        }
    }
}
