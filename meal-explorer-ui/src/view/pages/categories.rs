//! 分类列表

use meal_explorer_provider::Category;

use crate::model::state::Listing;
use crate::model::App;
use crate::view::html::{escape, notice, preview};

pub const EMPTY_MESSAGE: &str = "No categories found.";

/// 渲染分类面板
pub fn render(app: &App) -> String {
    let body = match app.categories {
        Listing::Pending => String::new(),
        ref listing => {
            render_category_list(listing.items(), app.config.description_preview_chars)
        }
    };
    format!(
        r#"<h2 class="text-3xl font-bold mb-6">Categories</h2><div id="categoriesGrid" class="grid gap-6">{body}</div>"#
    )
}

/// 分类卡片，描述截断为预览
pub fn render_category_list(categories: Option<&[Category]>, preview_chars: usize) -> String {
    match categories {
        Some(items) if !items.is_empty() => items
            .iter()
            .map(|category| {
                let name = escape(&category.name);
                format!(
                    concat!(
                        r#"<div class="category-item group relative rounded-lg overflow-hidden cursor-pointer p-4 text-center" data-category="{name}">"#,
                        r#"<img src="{thumb}" alt="{name}" class="w-3/4 mx-auto mb-3 object-contain">"#,
                        r#"<h3 class="text-xl font-bold text-white mb-1">{name}</h3>"#,
                        r#"<p class="text-sm text-gray-300 line-clamp-3">{description}</p>"#,
                        "</div>"
                    ),
                    name = name,
                    thumb = escape(category.thumbnail.as_deref().unwrap_or_default()),
                    description =
                        escape(&preview(category.description.as_deref(), preview_chars)),
                )
            })
            .collect(),
        _ => notice("text-gray-400", EMPTY_MESSAGE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str, description: &str) -> Category {
        Category {
            id: None,
            name: name.into(),
            thumbnail: None,
            description: Some(description.into()),
        }
    }

    #[test]
    fn empty_states() {
        assert!(render_category_list(None, 100).contains(EMPTY_MESSAGE));
        assert!(render_category_list(Some(&[]), 100).contains(EMPTY_MESSAGE));
    }

    #[test]
    fn tiles_carry_category_name_and_preview() {
        let long = "x".repeat(150);
        let html = render_category_list(Some(&[category("Seafood", &long)]), 100);
        assert!(html.contains(r#"data-category="Seafood""#));
        assert!(html.contains(&format!("{}...", "x".repeat(100))));
        assert!(!html.contains(&"x".repeat(101)));
    }

    #[test]
    fn failed_fetch_shows_empty_state() {
        let mut app = App::default();
        app.categories = Listing::Failed;
        assert!(render(&app).contains(EMPTY_MESSAGE));
    }
}
