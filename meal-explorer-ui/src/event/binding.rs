//! 处理表绑定
//!
//! 扫描渲染结果中的 `data-*` 属性与已知元素 id，建立"目标 → 消息"的映射。

use std::collections::{HashMap, HashSet};

use regex::Regex;

use super::{InputField, Target};
use crate::message::{AppMessage, ContentMessage, NavigationMessage};
use crate::model::NavItemId;
use crate::view::components::navigation::TOGGLE_BUTTON_ID;
use crate::view::html::unescape;
use crate::view::pages::{contact::FORM_ID, detail::CLOSE_BUTTON_ID};
use crate::view::Document;

const TILE_PATTERN: &str = r#"data-(id|category|area|ingredient)="([^"]*)""#;
const NAV_PATTERN: &str = r#"data-nav="([^"]*)""#;
const ID_PATTERN: &str = r#"\sid="([^"]*)""#;

/// 当前文档的处理表
#[derive(Debug, Clone, Default)]
pub struct HandlerTable {
    clicks: HashMap<Target, AppMessage>,
    inputs: HashSet<InputField>,
    contact_form: bool,
}

impl HandlerTable {
    /// 点击目标对应的消息
    pub fn click(&self, target: &Target) -> Option<&AppMessage> {
        self.clicks.get(target)
    }

    pub fn is_bound(&self, target: &Target) -> bool {
        self.clicks.contains_key(target)
    }

    pub fn accepts_input(&self, field: InputField) -> bool {
        self.inputs.contains(&field)
    }

    pub fn accepts_submit(&self) -> bool {
        self.contact_form
    }

    /// 已绑定的点击目标
    pub fn targets(&self) -> impl Iterator<Item = &Target> {
        self.clicks.keys()
    }

    pub fn len(&self) -> usize {
        self.clicks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clicks.is_empty()
    }
}

/// 从零建立处理表：导航区 + 所有可见区域
pub fn bind_handlers(document: &Document) -> HandlerTable {
    let mut table = HandlerTable::default();

    bind_navigation(&mut table, &document.nav_html);
    for section in document.visible_sections() {
        bind_tiles(&mut table, &section.html);
        bind_ids(&mut table, &section.html);
    }

    log::trace!(
        "绑定 {} 个点击目标, {} 个输入框",
        table.clicks.len(),
        table.inputs.len()
    );
    table
}

fn bind_navigation(table: &mut HandlerTable, html: &str) {
    if let Ok(re) = Regex::new(NAV_PATTERN) {
        for caps in re.captures_iter(html) {
            if let Some(id) = caps.get(1).and_then(|m| NavItemId::from_key(m.as_str())) {
                table.clicks.insert(
                    Target::NavLink(id),
                    AppMessage::Navigation(NavigationMessage::Open(id)),
                );
            }
        }
    }
    if html.contains(&format!(r#"id="{TOGGLE_BUTTON_ID}""#)) {
        table.clicks.insert(
            Target::NavToggle,
            AppMessage::Navigation(NavigationMessage::ToggleNav),
        );
    }
}

fn bind_tiles(table: &mut HandlerTable, html: &str) {
    let Ok(re) = Regex::new(TILE_PATTERN) else {
        return;
    };
    for caps in re.captures_iter(html) {
        let (Some(kind), Some(value)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let key = unescape(value.as_str());
        let (target, msg) = match kind.as_str() {
            "id" => (
                Target::MealTile(key.clone()),
                ContentMessage::SelectMeal(key),
            ),
            "category" => (
                Target::CategoryTile(key.clone()),
                ContentMessage::SelectCategory(key),
            ),
            "area" => (
                Target::AreaTile(key.clone()),
                ContentMessage::SelectArea(key),
            ),
            "ingredient" => (
                Target::IngredientTile(key.clone()),
                ContentMessage::SelectIngredient(key),
            ),
            _ => continue,
        };
        table.clicks.insert(target, AppMessage::Content(msg));
    }
}

fn bind_ids(table: &mut HandlerTable, html: &str) {
    let Ok(re) = Regex::new(ID_PATTERN) else {
        return;
    };
    for caps in re.captures_iter(html) {
        let Some(id) = caps.get(1).map(|m| m.as_str()) else {
            continue;
        };
        if id == CLOSE_BUTTON_ID {
            table.clicks.insert(
                Target::CloseDetail,
                AppMessage::Content(ContentMessage::CloseDetail),
            );
        } else if id == FORM_ID {
            table.contact_form = true;
        } else if let Some(field) = InputField::from_element_id(id) {
            table.inputs.insert(field);
        }
    }
}
