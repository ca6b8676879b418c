//! 加载遮罩组件

use crate::model::App;

pub fn render(app: &App) -> String {
    let display = if app.loading.is_visible() {
        "flex"
    } else {
        "none"
    };
    format!(
        r#"<div id="loadingScreen" class="fixed inset-0 z-50 items-center justify-center" style="display: {display}"><i class="fas fa-spinner fa-spin fa-3x"></i></div>"#
    )
}
