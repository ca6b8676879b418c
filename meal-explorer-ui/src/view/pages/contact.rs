//! 联系表单

use crate::model::state::ContactField;
use crate::model::App;
use crate::view::html::escape;

/// 表单元素 id
pub const FORM_ID: &str = "contactForm";

/// 渲染联系表单，回显当前字段值
pub fn render(app: &App) -> String {
    let form = &app.contact;
    let input = |field: ContactField, kind: &str, placeholder: &str| {
        let required = if field.is_required() { " required" } else { "" };
        format!(
            r#"<input id="{}" type="{kind}" placeholder="{placeholder}" value="{}" class="w-full p-3 rounded"{required}>"#,
            field.element_id(),
            escape(form.value(field)),
        )
    };

    format!(
        concat!(
            r#"<h2 class="text-3xl font-bold mb-6">Contact Us</h2>"#,
            r#"<form id="{form_id}" class="grid gap-6" novalidate>"#,
            "{name}{email}",
            r#"<textarea id="{message_id}" rows="5" placeholder="Your Message" class="w-full p-3 rounded">{message}</textarea>"#,
            r#"<button type="submit" class="bg-red-600 text-white font-semibold py-2 px-6 rounded-lg">Submit</button>"#,
            "</form>"
        ),
        form_id = FORM_ID,
        name = input(ContactField::Name, "text", "Enter Your Name"),
        email = input(ContactField::Email, "email", "Enter Your Email"),
        message_id = ContactField::Message.element_id(),
        message = escape(&form.message),
    )
}
