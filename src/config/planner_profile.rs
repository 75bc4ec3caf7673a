// ==========================================
// 矿区运输路线调度系统 - 打分 Profile
// ==========================================
// 职责: 路段打分的字段兜底默认值
// 注意: 打分公式本身固定在引擎内, Profile 只承载缺失字段的回退值
// ==========================================

use serde::{Deserialize, Serialize};

/// 打分兜底参数（字段缺失/不可解析时的回退值）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringProfile {
    /// 平均车速兜底（km/h）
    #[serde(default = "default_speed_kmh")]
    pub default_speed_kmh: f64,

    /// 路段长度兜底（km）
    #[serde(default = "default_length_km")]
    pub default_length_km: f64,

    /// 路段长度下限（km）
    #[serde(default = "min_length_km")]
    pub min_length_km: f64,

    /// 交通密度兜底（归一化）
    #[serde(default = "default_ratio")]
    pub default_density: f64,

    /// 养护紧急度兜底（归一化）
    #[serde(default = "default_ratio")]
    pub default_urgency: f64,

    /// 产能利用率兜底（归一化）
    #[serde(default = "default_ratio")]
    pub default_utilization: f64,

    /// 道路产能兜底（吨/小时）
    #[serde(default = "default_capacity_tph")]
    pub default_capacity_tph: f64,
}

fn default_speed_kmh() -> f64 {
    25.0
}

fn default_length_km() -> f64 {
    3.0
}

fn min_length_km() -> f64 {
    0.1
}

fn default_ratio() -> f64 {
    0.5
}

fn default_capacity_tph() -> f64 {
    150.0
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self {
            default_speed_kmh: default_speed_kmh(),
            default_length_km: default_length_km(),
            min_length_km: min_length_km(),
            default_density: default_ratio(),
            default_urgency: default_ratio(),
            default_utilization: default_ratio(),
            default_capacity_tph: default_capacity_tph(),
        }
    }
}
