//!
//! src/view/mod.rs
//! View 层：把 Model 渲染成 HTML 文档
//!
//! View 层只读取 App，不修改任何状态。
//! 每次渲染都整体重新生成所有区域的标记，可见性通过 `hidden` class 表达。
//!
//!
//! 有模块结构：
//! ```text
//!     src/view/mod.rs
//!         pub mod components;     // 侧边导航、加载遮罩
//!         pub mod html;           // 转义与文本预览
//!         pub mod pages;          // 各面板的渲染函数
//!
//!     每个页面模块都暴露一个纯函数 `render_*_list(Option<&[T]>)`：
//!         - None 或空列表 → 单条空状态提示
//!         - 否则 → 每个条目一个卡片，按输入顺序拼接
//!
//!     卡片上的 data-* 属性（data-id、data-category ...）
//!     供 event/binding.rs 在渲染后重新建立点击处理表。
//! ```
//!

pub mod components;
pub mod html;
pub mod pages;

use crate::model::{App, Panel};

/// 一个内容区域的渲染结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    pub panel: Panel,
    pub hidden: bool,
    /// 区域内部标记
    pub html: String,
}

/// 整个页面的渲染结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// 导航面板与切换按钮
    pub nav_html: String,
    pub nav_open: bool,
    pub loading_visible: bool,
    pub loading_html: String,
    /// 按文档顺序排列的所有区域
    pub sections: Vec<SectionView>,
}

impl Document {
    pub fn section(&self, panel: Panel) -> Option<&SectionView> {
        self.sections.iter().find(|s| s.panel == panel)
    }

    /// 当前可见的区域
    pub fn visible_sections(&self) -> impl Iterator<Item = &SectionView> {
        self.sections.iter().filter(|s| !s.hidden)
    }

    /// 拼接为完整 HTML 页面
    pub fn to_html(&self) -> String {
        let sections: String = self
            .sections
            .iter()
            .map(|section| {
                let hidden = if section.hidden { " hidden" } else { "" };
                format!(
                    r#"<section id="{}" class="container mx-auto p-6{hidden}">{}</section>"#,
                    section.panel.element_id(),
                    section.html
                )
            })
            .collect();

        format!(
            concat!(
                "<!DOCTYPE html>\n",
                r#"<html lang="en"><head><meta charset="utf-8"><title>Meal Explorer</title></head>"#,
                r#"<body class="{body_class}">"#,
                "{loading}{nav}",
                r#"<main id="mainContent">{sections}</main>"#,
                "</body></html>\n"
            ),
            body_class = if self.nav_open { "nav-open" } else { "" },
            loading = self.loading_html,
            nav = self.nav_html,
            sections = sections,
        )
    }
}

/// 渲染整个页面
pub fn render(app: &App) -> Document {
    let sections = Panel::ALL
        .into_iter()
        .map(|panel| SectionView {
            panel,
            hidden: !app.views.is_visible(panel),
            html: render_panel(app, panel),
        })
        .collect();

    Document {
        nav_html: components::navigation::render(app),
        nav_open: app.navigation.is_open(),
        loading_visible: app.loading.is_visible(),
        loading_html: components::loading::render(app),
        sections,
    }
}

fn render_panel(app: &App, panel: Panel) -> String {
    match panel {
        Panel::Search => pages::search::render(app),
        Panel::MealGrid => pages::meals::render(app),
        Panel::MealDetail => pages::detail::render(app),
        Panel::Categories => pages::categories::render(app),
        Panel::Areas => pages::areas::render(app),
        Panel::Ingredients => pages::ingredients::render(app),
        Panel::Contact => pages::contact::render(app),
    }
}
