//! 侧边导航组件

use crate::model::App;

/// 切换按钮元素 id
pub const TOGGLE_BUTTON_ID: &str = "navToggleBtn";

/// 打开时导航的 left 偏移
const OPEN_OFFSET: &str = "0px";
/// 关闭时导航移出屏幕
const CLOSED_OFFSET: &str = "-250px";

/// 渲染导航面板与切换按钮
pub fn render(app: &App) -> String {
    let nav = &app.navigation;
    let offset = if nav.is_open() {
        OPEN_OFFSET
    } else {
        CLOSED_OFFSET
    };

    let links: String = nav
        .items
        .iter()
        .map(|item| {
            format!(
                r##"<li><a id="{}" href="#" data-nav="{}" class="block py-2 hover:text-red-500">{}</a></li>"##,
                item.element_id,
                item.id.key(),
                item.label
            )
        })
        .collect();

    format!(
        concat!(
            r#"<nav id="sideNav" class="fixed top-0 h-full w-64 p-6" style="left: {offset}">"#,
            r#"<ul class="space-y-4">{links}</ul>"#,
            "</nav>",
            r#"<button id="{toggle_id}" class="fixed top-4 z-20"><i class="fas {icon}"></i></button>"#
        ),
        offset = offset,
        links = links,
        toggle_id = TOGGLE_BUTTON_ID,
        icon = nav.toggle_icon(),
    )
}
