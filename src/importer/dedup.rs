// ==========================================
// 矿区运输路线调度系统 - 记录去重器
// ==========================================
// 职责: 按道路标识只保留时间戳最新的状况记录
// 规则: 时间戳相等时取输入序靠后的记录 (比较用 >=, 非严格大于),
//       该平局规则影响产出, 不可改为严格大于
// ==========================================

use crate::domain::road::RawRecord;
use crate::domain::types::{COL_ROAD_ID, TIMESTAMP_CANDIDATE_COLS};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;

// ==========================================
// RecordDeduplicator - 记录去重器
// ==========================================
pub struct RecordDeduplicator {
    // 无状态引擎, 不需要注入依赖
}

impl RecordDeduplicator {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 按默认主键（road_id）去重
    pub fn pick_latest(&self, rows: Vec<RawRecord>) -> Vec<RawRecord> {
        self.pick_latest_by_key(rows, COL_ROAD_ID)
    }

    /// 按主键分组, 每组保留解析时间戳最大的记录
    ///
    /// # 参数
    /// - `rows`: 原始记录（按输入序）
    /// - `key`: 分组主键列名
    ///
    /// # 返回
    /// 每个主键一条记录; 主键缺失/为空的记录静默丢弃（不报错）
    ///
    /// # 规则
    /// - 时间戳取 date/timestamp/day 中第一个非空字段, 解析失败视为 0
    /// - 时间戳相等时, 输入序靠后者胜出
    pub fn pick_latest_by_key(&self, rows: Vec<RawRecord>, key: &str) -> Vec<RawRecord> {
        // 显式有序映射, 不依赖插入序的偶然行为
        let mut latest: BTreeMap<String, (i64, RawRecord)> = BTreeMap::new();

        for row in rows {
            let id = match row.get(key) {
                Some(v) if !v.is_empty() => v.clone(),
                _ => continue,
            };

            let ts = Self::parse_timestamp_millis(&row);
            match latest.get(&id) {
                Some((kept_ts, _)) if ts < *kept_ts => {
                    // 已保留的更新, 丢弃当前记录
                }
                _ => {
                    latest.insert(id, (ts, row));
                }
            }
        }

        latest.into_values().map(|(_, row)| row).collect()
    }

    /// 解析记录时间戳（毫秒）
    ///
    /// 按序取 date/timestamp/day 的第一个非空值;
    /// 字段缺失或解析失败一律回退 0（epoch 起点）
    fn parse_timestamp_millis(row: &RawRecord) -> i64 {
        let raw = TIMESTAMP_CANDIDATE_COLS
            .iter()
            .find_map(|col| row.get(*col).map(String::as_str).filter(|v| !v.is_empty()));

        let Some(value) = raw else {
            return 0;
        };

        Self::parse_datetime_millis(value).unwrap_or(0)
    }

    /// 日期解析阶梯: RFC3339 → 日期时间 → 纯日期
    fn parse_datetime_millis(value: &str) -> Option<i64> {
        let value = value.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
            return Some(dt.timestamp_millis());
        }

        for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
                return Some(dt.and_utc().timestamp_millis());
            }
        }

        for fmt in ["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d"] {
            if let Ok(date) = NaiveDate::parse_from_str(value, fmt) {
                return Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis());
            }
        }

        None
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for RecordDeduplicator {
    fn default() -> Self {
        Self::new()
    }
}
