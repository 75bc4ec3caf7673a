// ==========================================
// 矿区运输路线调度系统 - 道路实体
// ==========================================
// 职责: 原始记录批次与打分后的路段实体
// 原始记录不做类型约束, 数值解释延后到打分阶段
// ==========================================

use std::collections::HashMap;

/// 原始道路状况记录（列名 → 单元格文本）
///
/// 一条记录对应数据源的一行；数值字段保持字符串形态，
/// 由打分引擎统一做兜底解析。
pub type RawRecord = HashMap<String, String>;

// ==========================================
// RecordBatch - 记录批次
// ==========================================

/// 记录源的一次读取结果
///
/// - `columns`: 列名集合；无保留行时为空
/// - `rows`: 保留的记录（受行数上限约束）
#[derive(Debug, Clone, Default)]
pub struct RecordBatch {
    pub columns: Vec<String>,
    pub rows: Vec<RawRecord>,
}

impl RecordBatch {
    /// 保留行数
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ==========================================
// ScoredSegment - 打分后的路段
// ==========================================

/// 单次调用内不可变的打分路段
///
/// 由最新道路状况记录一次性派生；
/// 归一化指标均落在 [0,1]，cost 恒为正。
#[derive(Debug, Clone)]
pub struct ScoredSegment {
    /// 道路标识（road_id，缺失时回退 road_type / 兜底名）
    pub road_id: String,

    /// 道路类型（可为空串）
    pub road_type: String,

    /// 综合风险 [0,1] = 0.5*urgency + 0.3*density + 0.2*utilization
    pub risk: f64,

    /// 养护紧急度 [0,1]
    pub urgency: f64,

    /// 交通密度 [0,1]
    pub density: f64,

    /// 产能利用率 [0,1]
    pub utilization: f64,

    /// 有效车速（km/h，下限 5）
    pub effective_speed_kmh: f64,

    /// 风险折减后的有效产能（吨/小时）
    pub capacity_tph: f64,

    /// 预计行驶时间（分钟）
    pub travel_minutes: f64,

    /// 分配排序成本（越低越优先）
    pub cost: f64,
}
