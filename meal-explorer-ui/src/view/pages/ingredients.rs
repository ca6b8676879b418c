//! 食材列表

use meal_explorer_provider::Ingredient;

use crate::model::state::Listing;
use crate::model::App;
use crate::view::html::{escape, notice, preview};

pub const EMPTY_MESSAGE: &str = "No ingredients found.";

/// 渲染食材面板
pub fn render(app: &App) -> String {
    let body = match app.ingredients {
        Listing::Pending => String::new(),
        ref listing => render_ingredient_list(
            listing.items(),
            app.config.ingredient_list_limit,
            app.config.description_preview_chars,
        ),
    };
    format!(
        r#"<h2 class="text-3xl font-bold mb-6">Ingredients</h2><div id="ingredientsGrid" class="grid gap-6">{body}</div>"#
    )
}

/// 食材卡片：只渲染前 `limit` 个
pub fn render_ingredient_list(
    ingredients: Option<&[Ingredient]>,
    limit: usize,
    preview_chars: usize,
) -> String {
    match ingredients {
        Some(items) if !items.is_empty() => items
            .iter()
            .take(limit)
            .map(|ingredient| {
                let name = escape(&ingredient.name);
                format!(
                    concat!(
                        r#"<div class="ingredient-item group flex flex-col items-center justify-center rounded-lg cursor-pointer p-4 text-center" data-ingredient="{name}">"#,
                        r#"<i class="fas fa-drumstick-bite fa-3x text-green-500 mb-3"></i>"#,
                        r#"<h3 class="text-xl font-bold text-white mb-1">{name}</h3>"#,
                        r#"<p class="text-sm text-gray-300 line-clamp-3">{description}</p>"#,
                        "</div>"
                    ),
                    name = name,
                    description =
                        escape(&preview(ingredient.description.as_deref(), preview_chars)),
                )
            })
            .collect(),
        _ => notice("text-gray-400", EMPTY_MESSAGE),
    }
}
