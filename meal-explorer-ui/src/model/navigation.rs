//! 导航状态定义

/// 导航项 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavItemId {
    Search,
    Categories,
    Area,
    Ingredients,
    Contact,
}

impl NavItemId {
    /// 渲染在链接 `data-nav` 属性中的值
    pub fn key(self) -> &'static str {
        match self {
            NavItemId::Search => "search",
            NavItemId::Categories => "categories",
            NavItemId::Area => "area",
            NavItemId::Ingredients => "ingredients",
            NavItemId::Contact => "contact",
        }
    }

    /// 从 `data-nav` 值解析
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "search" => Some(NavItemId::Search),
            "categories" => Some(NavItemId::Categories),
            "area" => Some(NavItemId::Area),
            "ingredients" => Some(NavItemId::Ingredients),
            "contact" => Some(NavItemId::Contact),
            _ => None,
        }
    }
}

/// 导航项
#[derive(Debug, Clone)]
pub struct NavItem {
    pub id: NavItemId,
    pub label: &'static str,
    /// 元素 id
    pub element_id: &'static str,
}

/// 导航状态
///
/// 侧边导航只有打开 / 关闭两种状态，与当前激活的内容面板无关。
#[derive(Debug, Clone)]
pub struct NavigationState {
    /// 导航项列表
    pub items: Vec<NavItem>,
    /// 是否展开
    open: bool,
}

impl NavigationState {
    /// 创建默认导航状态（初始为关闭）
    pub fn new() -> Self {
        Self {
            items: vec![
                NavItem {
                    id: NavItemId::Search,
                    label: "Search",
                    element_id: "navSearch",
                },
                NavItem {
                    id: NavItemId::Categories,
                    label: "Categories",
                    element_id: "navCategories",
                },
                NavItem {
                    id: NavItemId::Area,
                    label: "Area",
                    element_id: "navArea",
                },
                NavItem {
                    id: NavItemId::Ingredients,
                    label: "Ingredients",
                    element_id: "navIngredients",
                },
                NavItem {
                    id: NavItemId::Contact,
                    label: "Contact Us",
                    element_id: "navContact",
                },
            ],
            open: false,
        }
    }

    /// 打开 ↔ 关闭
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// 关闭导航（幂等）
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// 切换按钮图标：打开时为关闭图标，关闭时为菜单图标
    pub fn toggle_icon(&self) -> &'static str {
        if self.open {
            "fa-times"
        } else {
            "fa-bars"
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_with_menu_icon() {
        let nav = NavigationState::new();
        assert!(!nav.is_open());
        assert_eq!(nav.toggle_icon(), "fa-bars");
    }

    #[test]
    fn toggle_flips_between_two_states() {
        let mut nav = NavigationState::new();
        nav.toggle();
        assert!(nav.is_open());
        assert_eq!(nav.toggle_icon(), "fa-times");
        nav.toggle();
        assert!(!nav.is_open());
    }

    #[test]
    fn close_is_idempotent() {
        let mut nav = NavigationState::new();
        nav.close();
        nav.close();
        assert!(!nav.is_open());
        nav.toggle();
        nav.close();
        nav.close();
        assert!(!nav.is_open());
    }

    #[test]
    fn nav_keys_round_trip() {
        for item in NavigationState::new().items {
            assert_eq!(NavItemId::from_key(item.id.key()), Some(item.id));
        }
        assert_eq!(NavItemId::from_key("home"), None);
    }
}
