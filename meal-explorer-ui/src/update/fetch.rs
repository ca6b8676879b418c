//! 查询发起与结果应用

use meal_explorer_provider::{extract_list, Meal, MealQuery};

use super::Command;
use crate::message::FetchOutcome;
use crate::model::state::Listing;
use crate::model::{App, FetchTarget, Panel};

/// 发起查询：显示加载遮罩并分配请求序号
pub(super) fn request(app: &mut App, target: FetchTarget, query: MealQuery) -> Command {
    app.loading.show();
    let ticket = app.requests.issue(target);
    log::debug!("发起查询 #{} {query} → {target:?}", ticket.seq);
    Command::Fetch { ticket, query }
}

/// 应用查询结果
///
/// 每个结束的查询（无论成功与否）都会安排一次延迟隐藏加载遮罩。
pub(super) fn apply(app: &mut App, outcome: FetchOutcome) -> Vec<Command> {
    let commands = vec![Command::HideLoadingAfter(app.config.loading_hide_delay())];

    let FetchOutcome {
        ticket,
        query,
        payload,
    } = outcome;

    if app.config.discard_stale_responses && !app.requests.is_latest(&ticket) {
        log::debug!("丢弃过期响应 #{} {query}", ticket.seq);
        return commands;
    }

    let key = query.payload_key();
    let payload = payload.as_ref();

    match ticket.target {
        FetchTarget::MealGrid => {
            app.meals = Listing::from_payload(payload, key);
            // 新的菜品结果会收起详情
            if app.views.active() == Panel::MealDetail {
                app.views.show_panel(Panel::MealGrid);
            }
        }
        FetchTarget::MealDetail => {
            // 请求失败时错误提示写入菜品网格（点击来源）
            let Some(payload) = payload else {
                app.meals = Listing::Failed;
                if app.views.active() == Panel::MealDetail {
                    app.views.show_panel(Panel::MealGrid);
                }
                return commands;
            };
            let meal = extract_list::<Meal>(payload, key).and_then(|meals| meals.into_iter().next());
            match meal {
                Some(meal) => {
                    app.detail = Some(meal);
                    app.views.show_panel(Panel::MealDetail);
                }
                None => log::info!("{query} 未返回菜品，保持当前视图"),
            }
        }
        FetchTarget::Categories => app.categories = Listing::from_payload(payload, key),
        FetchTarget::Areas => app.areas = Listing::from_payload(payload, key),
        FetchTarget::Ingredients => app.ingredients = Listing::from_payload(payload, key),
    }

    commands
}
