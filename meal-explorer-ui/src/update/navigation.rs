//! 导航更新逻辑

use meal_explorer_provider::MealQuery;

use super::{fetch, Command};
use crate::message::NavigationMessage;
use crate::model::state::Listing;
use crate::model::{App, FetchTarget, NavItemId, Panel};

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage) -> Vec<Command> {
    match msg {
        NavigationMessage::ToggleNav => {
            app.navigation.toggle();
            Vec::new()
        }

        NavigationMessage::CloseNav => {
            app.navigation.close();
            Vec::new()
        }

        NavigationMessage::Open(id) => {
            // 点击任意导航链接都会收起导航
            app.navigation.close();
            app.views.show_panel(panel_from_nav_id(id));
            open(app, id)
        }
    }
}

/// 进入面板时需要的查询
fn open(app: &mut App, id: NavItemId) -> Vec<Command> {
    let (target, query) = match id {
        NavItemId::Search => {
            app.meals = Listing::Pending;
            app.search.clear();
            (FetchTarget::MealGrid, MealQuery::initial())
        }
        NavItemId::Categories => (FetchTarget::Categories, MealQuery::ListCategories),
        NavItemId::Area => (FetchTarget::Areas, MealQuery::ListAreas),
        NavItemId::Ingredients => (FetchTarget::Ingredients, MealQuery::ListIngredients),
        NavItemId::Contact => return Vec::new(),
    };
    vec![fetch::request(app, target, query)]
}

/// 根据导航项 ID 获取对应的面板
fn panel_from_nav_id(id: NavItemId) -> Panel {
    match id {
        NavItemId::Search => Panel::Search,
        NavItemId::Categories => Panel::Categories,
        NavItemId::Area => Panel::Areas,
        NavItemId::Ingredients => Panel::Ingredients,
        NavItemId::Contact => Panel::Contact,
    }
}
