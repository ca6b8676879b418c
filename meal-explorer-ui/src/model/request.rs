//! 请求序号追踪
//!
//! 每次发起查询都会分配一个单调递增的序号，并记录每个显示区域最近一次发起的序号。
//! 开启 `discard_stale_responses` 时，只有序号仍是最新的响应才会被应用。

use std::collections::HashMap;

/// 查询结果写入的显示区域
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchTarget {
    /// 菜品网格（搜索、筛选结果）
    MealGrid,
    /// 菜品详情
    MealDetail,
    /// 分类列表
    Categories,
    /// 地区列表
    Areas,
    /// 食材列表
    Ingredients,
}

/// 一次已发起请求的凭据
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    pub seq: u64,
    pub target: FetchTarget,
}

/// 请求序号追踪器
#[derive(Debug, Default)]
pub struct RequestTracker {
    next_seq: u64,
    latest: HashMap<FetchTarget, u64>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 为目标区域分配新序号
    pub fn issue(&mut self, target: FetchTarget) -> RequestTicket {
        self.next_seq += 1;
        self.latest.insert(target, self.next_seq);
        RequestTicket {
            seq: self.next_seq,
            target,
        }
    }

    /// 该凭据是否仍是其区域最近一次发起的请求
    pub fn is_latest(&self, ticket: &RequestTicket) -> bool {
        self.latest.get(&ticket.target) == Some(&ticket.seq)
    }
}
