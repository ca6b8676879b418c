//!
//! app.rs
//! 应用主循环
//!
//!
//! 启动时创建的初始状态：
//!
//! ```text
//! App {
//!     views: MealGrid 激活,
//!     navigation: 关闭,
//!     meals / categories / areas / ingredients: Pending（空白）,
//!     loading: 隐藏,
//! }
//! ```
//!
//! 随后应用 AppMessage::Init，发起无筛选的菜品查询。
//!
//!
//! 每条消息的处理顺序：
//!
//! ```text
//!     update::update(&mut app, msg)           // 修改状态，得到 Command 列表
//!         ↓
//!     execute(command)                        // Fetch / 计时任务放进 tokio，Alert 直接交给宿主
//!         ↓
//!     view::render(&app)                      // 整体重新渲染
//!         ↓
//!     event::bind_handlers(&document)         // 从零重建处理表
//!         ↓
//!     surface.present(&document)
//! ```
//!
//!
//! 后台任务（查询、延迟隐藏加载遮罩）的结果通过 mpsc channel 送回，
//! 由 `next()` 逐条取出并走同样的流程，状态始终只在一个逻辑线程上被修改。

use tokio::sync::mpsc;

use crate::backend::{AppConfig, CatalogService};
use crate::event::{self, HandlerTable, UiEvent};
use crate::message::{AppMessage, FetchOutcome};
use crate::model::App;
use crate::surface::{Surface, SurfaceError};
use crate::update::{self, Command};
use crate::view;

/// 交互控制器
pub struct Runtime<S: Surface> {
    app: App,
    surface: S,
    catalog: CatalogService,
    handlers: HandlerTable,
    tx: mpsc::UnboundedSender<AppMessage>,
    rx: mpsc::UnboundedReceiver<AppMessage>,
    /// 尚未送回结果的后台任务数
    in_flight: usize,
}

impl<S: Surface> Runtime<S> {
    pub fn new(config: AppConfig, catalog: CatalogService, surface: S) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            app: App::new(config),
            surface,
            catalog,
            handlers: HandlerTable::default(),
            tx,
            rx,
            in_flight: 0,
        }
    }

    /// 初始加载
    pub fn start(&mut self) -> Result<(), SurfaceError> {
        log::info!("启动, 数据源: {}", self.catalog.id());
        self.apply(AppMessage::Init)
    }

    /// 处理宿主事件
    pub fn dispatch(&mut self, event: UiEvent) -> Result<(), SurfaceError> {
        let msg = event::handle_event(event, &self.app, &self.handlers);
        self.apply(msg)
    }

    /// 应用一条消息并重新渲染
    pub fn apply(&mut self, msg: AppMessage) -> Result<(), SurfaceError> {
        if matches!(msg, AppMessage::Noop) {
            return Ok(());
        }
        for command in update::update(&mut self.app, msg) {
            self.execute(command)?;
        }
        self.render()
    }

    /// 等待并应用下一条后台消息
    ///
    /// 没有未完成的后台任务时立即返回 `Ok(false)`。
    pub async fn next(&mut self) -> Result<bool, SurfaceError> {
        if self.in_flight == 0 {
            return Ok(false);
        }
        let Some(msg) = self.rx.recv().await else {
            return Ok(false);
        };
        self.in_flight -= 1;
        self.apply(msg)?;
        Ok(true)
    }

    /// 应用所有后台消息，直到没有未完成的任务
    pub async fn settle(&mut self) -> Result<(), SurfaceError> {
        while self.next().await? {}
        Ok(())
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn handlers(&self) -> &HandlerTable {
        &self.handlers
    }

    /// 未完成的后台任务数
    pub fn pending(&self) -> usize {
        self.in_flight
    }

    pub fn should_quit(&self) -> bool {
        self.app.should_quit
    }

    fn execute(&mut self, command: Command) -> Result<(), SurfaceError> {
        match command {
            Command::Fetch { ticket, query } => {
                let catalog = self.catalog.clone();
                let tx = self.tx.clone();
                self.in_flight += 1;
                tokio::spawn(async move {
                    let payload = catalog.fetch(&query).await;
                    let outcome = FetchOutcome {
                        ticket,
                        query,
                        payload,
                    };
                    if tx.send(AppMessage::Fetched(outcome)).is_err() {
                        log::debug!("主循环已退出，丢弃查询结果 #{}", ticket.seq);
                    }
                });
            }
            Command::HideLoadingAfter(delay) => {
                let tx = self.tx.clone();
                self.in_flight += 1;
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    // 接收端已关闭时无需处理
                    let _ = tx.send(AppMessage::HideLoading);
                });
            }
            Command::Alert(message) => self.surface.alert(&message)?,
        }
        Ok(())
    }

    fn render(&mut self) -> Result<(), SurfaceError> {
        let document = view::render(&self.app);
        self.handlers = event::bind_handlers(&document);
        self.surface.present(&document)
    }
}
