//! 菜品网格

use meal_explorer_provider::MealSummary;

use crate::model::state::Listing;
use crate::model::App;
use crate::view::html::{escape, notice};

/// 无结果提示
pub const EMPTY_MESSAGE: &str = "No meals found.";
/// 查询失败提示
pub const ERROR_MESSAGE: &str = "Could not load meals. Please try again later.";

/// 渲染菜品网格内容
pub fn render(app: &App) -> String {
    match &app.meals {
        Listing::Pending => String::new(),
        Listing::Failed => notice("text-red-500", ERROR_MESSAGE),
        listing => render_meal_list(listing.items()),
    }
}

/// 每个菜品一个卡片，按输入顺序拼接；`None` 或空列表渲染为提示
pub fn render_meal_list(meals: Option<&[MealSummary]>) -> String {
    match meals {
        Some(meals) if !meals.is_empty() => meals.iter().map(render_meal_tile).collect(),
        _ => notice("text-gray-400", EMPTY_MESSAGE),
    }
}

fn render_meal_tile(meal: &MealSummary) -> String {
    let name = escape(&meal.name);
    format!(
        concat!(
            r#"<div class="meal-item group relative rounded-lg overflow-hidden cursor-pointer" data-id="{id}">"#,
            r#"<img src="{thumb}" alt="{name}" class="w-full h-auto object-cover">"#,
            r#"<div class="meal-overlay absolute inset-0 flex items-center justify-center p-4 text-center">"#,
            r#"<h3 class="text-2xl font-bold text-black">{name}</h3>"#,
            "</div></div>"
        ),
        id = escape(&meal.id),
        thumb = escape(meal.thumbnail.as_deref().unwrap_or_default()),
        name = name,
    )
}
