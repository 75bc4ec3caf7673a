// ==========================================
// 矿区运输路线调度系统 - 运输计划实体
// ==========================================
// 职责: 分配结果与最终 RoutePlan 结构
// 约定: 对外 JSON 契约为 camelCase, 字段名逐一显式固定
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// RouteAllocation - 单路段分配结果
// ==========================================

/// 单路段的卡车分配结果（展示舍入后的副本）
///
/// 数值字段为展示用舍入值：cost/risk/density/urgency 保留 2 位，
/// 行驶时间与有效车速保留 1 位；卡车数为整数。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteAllocation {
    /// 道路标识
    #[serde(rename = "roadId")]
    pub road_id: String,

    /// 道路类型
    #[serde(rename = "type")]
    pub road_type: String,

    /// 分配卡车数（≥0 整数）
    pub trucks: i64,

    /// 预计行驶时间（分钟，1 位小数）
    #[serde(rename = "estTravelMinutes")]
    pub est_travel_minutes: f64,

    /// 有效车速（km/h，1 位小数）
    #[serde(rename = "effectiveSpeedKmh")]
    pub effective_speed_kmh: f64,

    /// 风险分（2 位小数）
    #[serde(rename = "riskScore")]
    pub risk_score: f64,

    /// 排序成本（2 位小数）
    pub cost: f64,

    /// 交通密度（2 位小数）
    pub density: f64,

    /// 养护紧急度（2 位小数）
    pub urgency: f64,
}

// ==========================================
// RouteSummary - 计划摘要
// ==========================================

/// 计划摘要
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteSummary {
    /// 请求的卡车总数
    #[serde(rename = "totalTrucks")]
    pub total_trucks: f64,

    /// 全部路段有效产能合计（吨/小时，1 位小数）
    pub capacity: f64,

    /// 方法说明
    pub note: String,

    /// 养护关注清单（0-3 条道路标识，按紧急度降序）
    #[serde(rename = "maintenanceWatch")]
    pub maintenance_watch: Vec<String>,
}

// ==========================================
// RoutePlan - 运输计划
// ==========================================

/// 完整运输计划（路段分配明细 + 摘要）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutePlan {
    pub routes: Vec<RouteAllocation>,
    pub summary: RouteSummary,
}

impl RoutePlan {
    /// 构造空计划（无可分配路段时的成功形态，不是错误）
    pub fn empty(total_trucks: f64, note: impl Into<String>) -> Self {
        Self {
            routes: Vec::new(),
            summary: RouteSummary {
                total_trucks,
                capacity: 0.0,
                note: note.into(),
                maintenance_watch: Vec::new(),
            },
        }
    }

    /// 已分配卡车合计（守恒校验用，基于未舍入整数）
    pub fn allocated_trucks(&self) -> i64 {
        self.routes.iter().map(|r| r.trucks).sum()
    }
}
