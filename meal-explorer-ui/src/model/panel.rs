//! 面板注册表
//!
//! 页面上有一组互斥的内容面板，任意时刻只有一个处于激活状态。
//! 搜索面板与菜品网格是唯一允许同时显示的组合（搜索结果渲染到网格中）。

/// 内容面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Panel {
    /// 搜索输入区（与菜品网格同时显示）
    Search,
    /// 菜品网格
    #[default]
    MealGrid,
    /// 菜品详情
    MealDetail,
    /// 分类列表
    Categories,
    /// 地区列表
    Areas,
    /// 食材列表
    Ingredients,
    /// 联系表单
    Contact,
}

impl Panel {
    /// 所有面板，按页面中的文档顺序排列
    pub const ALL: [Panel; 7] = [
        Panel::Search,
        Panel::MealGrid,
        Panel::MealDetail,
        Panel::Categories,
        Panel::Areas,
        Panel::Ingredients,
        Panel::Contact,
    ];

    /// 面板在文档中的元素 id
    pub fn element_id(self) -> &'static str {
        match self {
            Panel::Search => "searchSection",
            Panel::MealGrid => "mealGrid",
            Panel::MealDetail => "mealDetailSection",
            Panel::Categories => "categoriesSection",
            Panel::Areas => "areaSection",
            Panel::Ingredients => "ingredientsSection",
            Panel::Contact => "contactUsSection",
        }
    }

    /// 面板标题
    pub fn title(self) -> &'static str {
        match self {
            Panel::Search => "Search",
            Panel::MealGrid => "Meals",
            Panel::MealDetail => "Meal Detail",
            Panel::Categories => "Categories",
            Panel::Areas => "Area",
            Panel::Ingredients => "Ingredients",
            Panel::Contact => "Contact Us",
        }
    }

    /// 激活此面板时，菜品网格是否一并显示
    pub fn shows_meal_grid(self) -> bool {
        matches!(self, Panel::Search | Panel::MealGrid)
    }
}

/// 面板注册表
///
/// 只能通过 [`ViewRegistry::show_panel`] 切换，可见性由激活面板推导，
/// 因此不会出现"多个非网格面板同时可见"或"没有面板可见"的状态。
#[derive(Debug, Clone, Default)]
pub struct ViewRegistry {
    active: Panel,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 隐藏所有面板，再显示指定面板（网格 / 搜索时同时显示网格）
    pub fn show_panel(&mut self, panel: Panel) {
        self.active = panel;
    }

    /// 当前激活的面板
    pub fn active(&self) -> Panel {
        self.active
    }

    /// 指定面板当前是否可见
    pub fn is_visible(&self, panel: Panel) -> bool {
        panel == self.active || (panel == Panel::MealGrid && self.active.shows_meal_grid())
    }

    /// 所有可见面板（文档顺序）
    pub fn visible_panels(&self) -> Vec<Panel> {
        Panel::ALL
            .into_iter()
            .filter(|p| self.is_visible(*p))
            .collect()
    }
}
