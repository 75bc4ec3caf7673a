// ==========================================
// 矿区运输路线调度系统 - 养护关注清单
// ==========================================
// 职责: 从分配明细中挑出最需要养护介入的路段
// 只读已计算结果, 无其他副作用
// ==========================================

use crate::domain::plan::RouteAllocation;
use std::cmp::Ordering;

/// 紧急度入选阈值
const URGENCY_WATCH_THRESHOLD: f64 = 0.6;

/// 风险分入选阈值
const RISK_WATCH_THRESHOLD: f64 = 0.6;

/// 清单条数上限
const WATCHLIST_LIMIT: usize = 3;

// ==========================================
// WatchlistSelector - 关注清单选择器
// ==========================================
pub struct WatchlistSelector {
    // 无状态引擎
}

impl WatchlistSelector {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 选取关注清单
    ///
    /// # 规则
    /// - 入选: urgency ≥ 0.6 或 riskScore ≥ 0.6（基于展示舍入值）
    /// - 按 urgency 降序
    /// - 至多 3 条, 返回道路标识
    pub fn select(&self, routes: &[RouteAllocation]) -> Vec<String> {
        let mut flagged: Vec<&RouteAllocation> = routes
            .iter()
            .filter(|r| {
                r.urgency >= URGENCY_WATCH_THRESHOLD || r.risk_score >= RISK_WATCH_THRESHOLD
            })
            .collect();

        flagged.sort_by(|a, b| {
            b.urgency
                .partial_cmp(&a.urgency)
                .unwrap_or(Ordering::Equal)
        });

        flagged
            .into_iter()
            .take(WATCHLIST_LIMIT)
            .map(|r| r.road_id.clone())
            .collect()
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for WatchlistSelector {
    fn default() -> Self {
        Self::new()
    }
}
