//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态，是唯一可以修改 Model 的地方。
//! 需要 I/O 的副作用（发起查询、延迟隐藏加载遮罩、弹出提示）不在这里执行，
//! 而是以 [`Command`] 的形式返回给主循环。
//!
//!
//! 有模块结构：
//! ```text
//!     src/update/mod.rs
//!         mod contact;        // 联系表单
//!         mod content;        // 搜索、条目点击
//!         mod fetch;          // 发起查询 / 应用查询结果
//!         mod navigation;     // 侧边导航
//!
//!         pub fn update(app: &mut App, msg: AppMessage) -> Vec<Command>
//! ```
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 查询的生命周期
//! ═══════════════════════════════════════════════════════════════════════════
//!
//! ```text
//!     fetch::request()
//!         - 显示加载遮罩
//!         - 为目标区域分配请求序号
//!         - 返回 Command::Fetch
//!             ↓
//!     主循环在后台任务中执行查询
//!             ↓
//!     AppMessage::Fetched 回到 update()
//!             ↓
//!     fetch::apply()
//!         - 返回 Command::HideLoadingAfter(延迟)
//!         - 过期检查（仅在 discard_stale_responses 开启时）
//!         - 整体替换目标区域的内容
//! ```
//!

mod contact;
mod content;
mod fetch;
mod navigation;

use std::time::Duration;

use meal_explorer_provider::MealQuery;

use crate::message::AppMessage;
use crate::model::{App, FetchTarget, Panel, RequestTicket};

/// Update 产出的副作用
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// 在后台执行查询，完成后送回 `AppMessage::Fetched`
    Fetch {
        ticket: RequestTicket,
        query: MealQuery,
    },
    /// 延迟后送回 `AppMessage::HideLoading`
    HideLoadingAfter(Duration),
    /// 弹出提示
    Alert(String),
}

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) -> Vec<Command> {
    match msg {
        AppMessage::Init => {
            app.navigation.close();
            app.views.show_panel(Panel::MealGrid);
            vec![fetch::request(app, FetchTarget::MealGrid, MealQuery::initial())]
        }

        AppMessage::Quit => {
            app.should_quit = true;
            Vec::new()
        }

        AppMessage::Navigation(nav_msg) => navigation::update(app, nav_msg),

        AppMessage::Content(content_msg) => content::update(app, content_msg),

        AppMessage::Contact(contact_msg) => contact::update(app, contact_msg),

        AppMessage::Fetched(outcome) => fetch::apply(app, outcome),

        AppMessage::HideLoading => {
            app.loading.hide();
            Vec::new()
        }

        AppMessage::Noop => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{ContentMessage, NavigationMessage};
    use crate::model::NavItemId;

    fn fetched_queries(commands: &[Command]) -> Vec<MealQuery> {
        commands
            .iter()
            .filter_map(|c| match c {
                Command::Fetch { query, .. } => Some(query.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn init_loads_unfiltered_meals_into_grid() {
        let mut app = App::default();
        let commands = update(&mut app, AppMessage::Init);

        assert_eq!(fetched_queries(&commands), vec![MealQuery::initial()]);
        assert_eq!(app.active_panel(), Panel::MealGrid);
        assert!(app.loading.is_visible());
        assert!(!app.navigation.is_open());
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = App::default();
        assert!(update(&mut app, AppMessage::Quit).is_empty());
        assert!(app.should_quit);
    }

    #[test]
    fn hide_loading_clears_indicator() {
        let mut app = App::default();
        update(&mut app, AppMessage::Init);
        update(&mut app, AppMessage::HideLoading);
        assert!(!app.loading.is_visible());
    }

    #[test]
    fn keystrokes_keep_nav_open_but_clicks_close_it() {
        let mut app = App::default();
        update(&mut app, AppMessage::Navigation(NavigationMessage::ToggleNav));
        update(
            &mut app,
            AppMessage::Content(ContentMessage::SearchByName("soup".into())),
        );
        assert!(app.navigation.is_open());

        update(
            &mut app,
            AppMessage::Navigation(NavigationMessage::Open(NavItemId::Categories)),
        );
        assert!(!app.navigation.is_open());
    }
}
