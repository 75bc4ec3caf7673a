// ==========================================
// 矿区运输路线调度系统 - 卡车分配引擎
// ==========================================
// 职责: 按逆成本权重把卡车总数分摊到路段
// 守恒机制: 排序末位(成本最高)路段吸收全部舍入余量,
//           不得替换为"更公平"的最大余数法 —— 那会破坏
//           与既有产出的逐位一致性
// ==========================================

use crate::domain::plan::RouteAllocation;
use crate::domain::road::ScoredSegment;
use crate::engine::numeric::{round1, round2};
use std::cmp::Ordering;

/// 调用方未给出卡车数时的默认总数
pub const DEFAULT_TOTAL_TRUCKS: f64 = 200.0;

/// 逆成本权重的成本下限
const MIN_COST_FOR_WEIGHT: f64 = 0.1;

// ==========================================
// TruckAllocator - 卡车分配引擎
// ==========================================
pub struct TruckAllocator {
    // 无状态引擎
}

impl TruckAllocator {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 分配卡车
    ///
    /// # 参数
    /// - `total_trucks`: 请求的卡车总数（≥0, 调用方已兜底）
    /// - `segments`: 打分后的路段
    ///
    /// # 返回
    /// 按成本升序排列的分配明细; 卡车数守恒:
    /// Σ trucks == total_trucks（基于未舍入的整数份额）
    ///
    /// # 算法
    /// 1. 按 cost 升序稳定排序（最优路段在前）
    /// 2. weight = (1/max(cost,0.1)) / max(Σ 1/max(cost,0.1), 1)
    /// 3. 非末位: share = round(weight*total), 截断到 [0, 剩余]
    /// 4. 末位: share = 剩余全部
    pub fn allocate(&self, total_trucks: f64, segments: &[ScoredSegment]) -> Vec<RouteAllocation> {
        let mut sorted: Vec<&ScoredSegment> = segments.iter().collect();
        sorted.sort_by(|a, b| a.cost.partial_cmp(&b.cost).unwrap_or(Ordering::Equal));

        let cost_sum: f64 = sorted
            .iter()
            .map(|s| 1.0 / s.cost.max(MIN_COST_FOR_WEIGHT))
            .sum();
        let weight_denom = cost_sum.max(1.0);

        let mut routes = Vec::with_capacity(sorted.len());
        let mut remaining = total_trucks;
        let last_idx = sorted.len().saturating_sub(1);

        for (idx, seg) in sorted.iter().enumerate() {
            let weight = (1.0 / seg.cost.max(MIN_COST_FOR_WEIGHT)) / weight_denom;
            let mut share = (weight * total_trucks).round();
            if idx == last_idx {
                // 余量并入末位路段, 保证守恒
                share = remaining;
            }
            share = share.min(remaining).max(0.0);
            remaining -= share;

            routes.push(RouteAllocation {
                road_id: seg.road_id.clone(),
                road_type: seg.road_type.clone(),
                trucks: share as i64,
                est_travel_minutes: round1(seg.travel_minutes),
                effective_speed_kmh: round1(seg.effective_speed_kmh),
                risk_score: round2(seg.risk),
                cost: round2(seg.cost),
                density: round2(seg.density),
                urgency: round2(seg.urgency),
            });
        }

        routes
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for TruckAllocator {
    fn default() -> Self {
        Self::new()
    }
}
