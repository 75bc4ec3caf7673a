// ==========================================
// 矿区运输路线调度系统 - 数值兜底解析
// ==========================================
// 职责: 原始字符串 → 数值的容错转换, 永不报错
// 规则: 解析失败一律回退调用方给定的 fallback
// ==========================================

use serde_json::Value;

/// 容错数值解析
///
/// # 参数
/// - `value`: 原始单元格文本（字段缺失时传 None）
/// - `fallback`: 解析失败时的回退值
///
/// # 返回
/// 解析出的有限数值, 否则 fallback; 永不报错
pub fn parse_number(value: Option<&str>, fallback: f64) -> f64 {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|n| n.is_finite())
        .unwrap_or(fallback)
}

/// 归一化到 [0,1]
///
/// 双重解释是刻意设计, 必须原样保留:
/// - 解析值 ≤ 1: 视为已归一化, 截断到 [0,1]（恰为 1 时按已归一化处理, 不是 1%）
/// - 解析值 > 1: 视为百分比, 除以 100 后截断到 [0,1]
pub fn normalize01(value: Option<&str>, fallback: f64) -> f64 {
    let num = parse_number(value, fallback);
    if num <= 1.0 {
        num.clamp(0.0, 1.0)
    } else {
        (num / 100.0).clamp(0.0, 1.0)
    }
}

/// JSON 值（数字或字符串）→ 数值, 与其他字段同样的兜底规则
///
/// 调用方传入的卡车数可能是 JSON number 也可能是字符串
pub fn coerce_json_number(value: Option<&Value>, fallback: f64) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().filter(|v| v.is_finite()).unwrap_or(fallback),
        Some(Value::String(s)) => parse_number(Some(s), fallback),
        _ => fallback,
    }
}

/// 展示舍入: 1 位小数
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// 展示舍入: 2 位小数
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
