//! 主应用状态

use meal_explorer_provider::{Area, Category, Ingredient, Meal, MealSummary};

use super::navigation::NavigationState;
use super::panel::{Panel, ViewRegistry};
use super::request::RequestTracker;
use super::state::{ContactForm, Listing, LoadingState, SearchState};
use crate::backend::AppConfig;

/// 应用主状态
#[derive(Debug)]
pub struct App {
    /// 是否退出应用
    pub should_quit: bool,
    /// 运行参数
    pub config: AppConfig,

    /// 面板可见性
    pub views: ViewRegistry,
    /// 侧边导航
    pub navigation: NavigationState,

    /// 搜索输入
    pub search: SearchState,
    /// 菜品网格内容
    pub meals: Listing<MealSummary>,
    /// 当前详情（`None` 表示尚未打开过详情）
    pub detail: Option<Meal>,
    /// 分类列表
    pub categories: Listing<Category>,
    /// 地区列表
    pub areas: Listing<Area>,
    /// 食材列表
    pub ingredients: Listing<Ingredient>,
    /// 联系表单
    pub contact: ContactForm,

    /// 加载遮罩
    pub loading: LoadingState,
    /// 已发起请求的序号
    pub requests: RequestTracker,
    /// 最近一次提示（alert）文本
    pub status_message: Option<String>,
}

impl App {
    /// 创建应用实例（网格激活，导航关闭，所有列表为空白）
    pub fn new(config: AppConfig) -> Self {
        let mut views = ViewRegistry::new();
        views.show_panel(Panel::MealGrid);
        Self {
            should_quit: false,
            config,
            views,
            navigation: NavigationState::new(),
            search: SearchState::new(),
            meals: Listing::Pending,
            detail: None,
            categories: Listing::Pending,
            areas: Listing::Pending,
            ingredients: Listing::Pending,
            contact: ContactForm::new(),
            loading: LoadingState::default(),
            requests: RequestTracker::new(),
            status_message: None,
        }
    }

    /// 当前激活的面板
    pub fn active_panel(&self) -> Panel {
        self.views.active()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
