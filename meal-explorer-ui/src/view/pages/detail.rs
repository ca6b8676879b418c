//! 菜品详情

use meal_explorer_provider::Meal;

use crate::model::App;
use crate::view::html::escape;

/// 关闭按钮元素 id
pub const CLOSE_BUTTON_ID: &str = "closeDetailBtn";

/// 渲染详情面板（未打开过详情时为空）
pub fn render(app: &App) -> String {
    app.detail.as_ref().map(render_meal_detail).unwrap_or_default()
}

/// 详情布局：图片、标题、做法、地区、分类、食材、标签、外部链接
pub fn render_meal_detail(meal: &Meal) -> String {
    let name = escape(&meal.name);
    let text = |value: &Option<String>| escape(value.as_deref().unwrap_or_default());

    let ingredients: String = meal
        .ingredients()
        .iter()
        .map(|line| {
            format!(
                r#"<span class="bg-blue-500 text-white text-xs font-semibold mr-2 px-2.5 py-0.5 rounded">{}</span>"#,
                escape(&line.label())
            )
        })
        .collect();

    let tags: String = meal
        .tag_list()
        .iter()
        .map(|tag| {
            format!(
                r#"<span class="bg-green-500 text-white text-xs font-semibold mr-2 px-2.5 py-0.5 rounded">{}</span>"#,
                escape(tag)
            )
        })
        .collect();
    let tags_section = if tags.is_empty() {
        String::new()
    } else {
        format!(
            r#"<h3 class="text-2xl font-semibold mt-6 mb-3">Tags:</h3><div class="flex flex-wrap gap-2 mb-6">{tags}</div>"#
        )
    };

    let links: String = [
        ("Source", &meal.source, "bg-green-600"),
        ("YouTube", &meal.youtube, "bg-red-600"),
    ]
    .into_iter()
    .filter_map(|(label, url, color)| {
        let url = url.as_deref().filter(|u| !u.trim().is_empty())?;
        Some(format!(
            r#"<a href="{}" target="_blank" class="{color} text-white font-semibold py-2 px-6 rounded-lg">{label}</a>"#,
            escape(url)
        ))
    })
    .collect();

    format!(
        concat!(
            r#"<div class="container mx-auto">"#,
            r#"<button id="{close_id}" class="absolute top-4 right-4 text-white bg-red-600 rounded-full p-2 z-10"><i class="fas fa-times fa-lg"></i></button>"#,
            r#"<div class="grid grid-cols-1 md:grid-cols-3 gap-8">"#,
            r#"<div class="md:col-span-1"><img src="{thumb}" alt="{name}" class="w-full rounded-lg shadow-lg"></div>"#,
            r#"<div class="md:col-span-2">"#,
            r#"<h2 class="text-4xl font-bold mb-4">{name}</h2>"#,
            r#"<p class="text-gray-300 mb-6">{instructions}</p>"#,
            r#"<p class="text-2xl font-semibold mb-2">Area: <span class="font-normal">{area}</span></p>"#,
            r#"<p class="text-2xl font-semibold mb-2">Category: <span class="font-normal">{category}</span></p>"#,
            r#"<h3 class="text-2xl font-semibold mt-6 mb-3">Recipes:</h3>"#,
            r#"<div class="flex flex-wrap gap-2 mb-6">{ingredients}</div>"#,
            "{tags_section}",
            r#"<div class="mt-8 space-x-4">{links}</div>"#,
            "</div></div></div>"
        ),
        close_id = CLOSE_BUTTON_ID,
        thumb = text(&meal.thumbnail),
        name = name,
        instructions = text(&meal.instructions),
        area = text(&meal.area),
        category = text(&meal.category),
        ingredients = ingredients,
        tags_section = tags_section,
        links = links,
    )
}
