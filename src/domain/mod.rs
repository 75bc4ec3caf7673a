// ==========================================
// 矿区运输路线调度系统 - 领域层
// ==========================================
// 职责: 定义道路状况记录/打分分段/运输计划等核心实体
// ==========================================

pub mod plan;
pub mod road;
pub mod types;

// 重导出核心类型
pub use plan::{RouteAllocation, RoutePlan, RouteSummary};
pub use road::{RawRecord, RecordBatch, ScoredSegment};
