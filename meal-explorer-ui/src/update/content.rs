//! 内容区更新逻辑

use meal_explorer_provider::MealQuery;

use super::{fetch, Command};
use crate::message::ContentMessage;
use crate::model::{App, FetchTarget, Panel};

/// 处理内容区消息
pub fn update(app: &mut App, msg: ContentMessage) -> Vec<Command> {
    match msg {
        // 输入框按键：保留搜索区，不收起导航
        ContentMessage::SearchByName(value) => {
            let name = value.trim().to_string();
            app.search.name_query = value;
            app.views.show_panel(Panel::Search);
            vec![fetch::request(
                app,
                FetchTarget::MealGrid,
                MealQuery::SearchByName(name),
            )]
        }

        ContentMessage::SearchByLetter(value) => {
            let query = letter_query(&value);
            app.search.letter_query = value;
            let Some(query) = query else {
                return Vec::new();
            };
            app.views.show_panel(Panel::Search);
            vec![fetch::request(app, FetchTarget::MealGrid, query)]
        }

        ContentMessage::SelectMeal(id) => {
            app.navigation.close();
            vec![fetch::request(
                app,
                FetchTarget::MealDetail,
                MealQuery::LookupById(id),
            )]
        }

        ContentMessage::CloseDetail => filter_into_grid(app, MealQuery::initial()),

        ContentMessage::SelectCategory(name) => {
            filter_into_grid(app, MealQuery::FilterByCategory(name))
        }

        ContentMessage::SelectArea(name) => filter_into_grid(app, MealQuery::FilterByArea(name)),

        ContentMessage::SelectIngredient(name) => {
            filter_into_grid(app, MealQuery::FilterByIngredient(name))
        }
    }
}

/// 首字母输入：1 个字符按首字母查询，0 个字符回到默认查询，其他长度不查询
fn letter_query(value: &str) -> Option<MealQuery> {
    let mut chars = value.trim().chars();
    match (chars.next(), chars.next()) {
        (None, _) => Some(MealQuery::initial()),
        (Some(letter), None) => Some(MealQuery::SearchByFirstLetter(letter)),
        (Some(_), Some(_)) => None,
    }
}

/// 显示菜品网格并载入查询结果
fn filter_into_grid(app: &mut App, query: MealQuery) -> Vec<Command> {
    app.navigation.close();
    app.views.show_panel(Panel::MealGrid);
    vec![fetch::request(app, FetchTarget::MealGrid, query)]
}
