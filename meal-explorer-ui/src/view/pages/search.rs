//! 搜索区

use crate::model::App;
use crate::view::html::escape;

pub const NAME_INPUT_ID: &str = "searchByNameInput";
pub const LETTER_INPUT_ID: &str = "searchByFirstLetterInput";

/// 两个搜索框，回显当前输入值
pub fn render(app: &App) -> String {
    format!(
        concat!(
            r#"<div class="grid grid-cols-1 md:grid-cols-2 gap-6">"#,
            r#"<input id="{name_id}" type="text" placeholder="Search By Name" value="{name}" class="w-full p-3 rounded">"#,
            r#"<input id="{letter_id}" type="text" maxlength="1" placeholder="Search By First Letter" value="{letter}" class="w-full p-3 rounded">"#,
            "</div>"
        ),
        name_id = NAME_INPUT_ID,
        letter_id = LETTER_INPUT_ID,
        name = escape(&app.search.name_query),
        letter = escape(&app.search.letter_query),
    )
}
