//! 地区列表

use meal_explorer_provider::Area;

use crate::model::state::Listing;
use crate::model::App;
use crate::view::html::{escape, notice};

pub const EMPTY_MESSAGE: &str = "No areas found.";

/// 渲染地区面板
pub fn render(app: &App) -> String {
    let body = match app.areas {
        Listing::Pending => String::new(),
        ref listing => render_area_list(listing.items()),
    };
    format!(
        r#"<h2 class="text-3xl font-bold mb-6">Area</h2><div id="areaGrid" class="grid gap-6">{body}</div>"#
    )
}

pub fn render_area_list(areas: Option<&[Area]>) -> String {
    match areas {
        Some(items) if !items.is_empty() => items
            .iter()
            .map(|area| {
                let name = escape(&area.name);
                format!(
                    concat!(
                        r#"<div class="area-item group flex flex-col items-center justify-center rounded-lg cursor-pointer p-4 text-center" data-area="{name}">"#,
                        r#"<i class="fas fa-map-marker-alt fa-3x text-red-500 mb-3"></i>"#,
                        r#"<h3 class="text-xl font-bold text-white">{name}</h3>"#,
                        "</div>"
                    ),
                    name = name
                )
            })
            .collect(),
        _ => notice("text-gray-400", EMPTY_MESSAGE),
    }
}
