// ==========================================
// 矿区运输路线调度系统 - RoutePlanApi DTO 定义
// ==========================================
// 职责: 定义计划接口的请求结构
// 响应即 RoutePlan 本身（对外 JSON 契约见 domain::plan）
// ==========================================

use crate::domain::plan::RoutePlan;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 计划请求
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoutePlanRequest {
    /// 数据源路径覆盖（可选, 缺省用默认数据集路径）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_path: Option<PathBuf>,

    /// 请求的卡车总数（可选, JSON 数字或字符串, 与其他数值字段同样兜底解析;
    /// 缺省 200, 负数按 0 处理）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traffic_volume_trucks: Option<serde_json::Value>,
}

/// 计划响应类型别名
pub type RoutePlanResponse = RoutePlan;
