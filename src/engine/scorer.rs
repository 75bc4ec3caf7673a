// ==========================================
// 矿区运输路线调度系统 - 路段打分引擎
// ==========================================
// 职责: 最新道路状况记录 → 风险/成本/有效产能指标
// 公式为既定口径, 浮点语义必须逐位保持, 不得"改良"
// ==========================================

use crate::config::ScoringProfile;
use crate::domain::road::{RawRecord, ScoredSegment};
use crate::domain::types::{
    COL_AVERAGE_SPEED_KMH, COL_CAPACITY_UTILIZATION, COL_LENGTH_KM, COL_MAINTENANCE_URGENCY,
    COL_ROAD_CAPACITY, COL_ROAD_ID, COL_ROAD_TYPE, COL_TRAFFIC_DENSITY, FALLBACK_ROAD_NAME,
};
use crate::engine::numeric::{normalize01, parse_number};

// 风险加权: 紧急度为主, 密度次之, 利用率最弱
const URGENCY_RISK_WEIGHT: f64 = 0.5;
const DENSITY_RISK_WEIGHT: f64 = 0.3;
const UTILIZATION_RISK_WEIGHT: f64 = 0.2;

// 风险对车速/产能的折减系数
const RISK_SPEED_PENALTY: f64 = 0.4;
const RISK_CAPACITY_PENALTY: f64 = 0.25;

// 有效车速下限（km/h）
const MIN_EFFECTIVE_SPEED_KMH: f64 = 5.0;

// 成本项: 风险加价系数与产能缺口罚分
const RISK_COST_SURCHARGE: f64 = 0.5;
const CAPACITY_SHORTFALL_COST: f64 = 10.0;

// ==========================================
// SegmentScorer - 路段打分引擎
// ==========================================
pub struct SegmentScorer {
    profile: ScoringProfile,
}

impl SegmentScorer {
    /// 使用默认兜底参数构造
    pub fn new() -> Self {
        Self {
            profile: ScoringProfile::default(),
        }
    }

    /// 使用指定兜底参数构造
    pub fn with_profile(profile: ScoringProfile) -> Self {
        Self { profile }
    }

    /// 对一批最新记录打分
    pub fn score_all(&self, records: &[RawRecord]) -> Vec<ScoredSegment> {
        records.iter().map(|r| self.score(r)).collect()
    }

    /// 单条记录打分
    ///
    /// # 指标口径
    /// ```text
    /// risk            = 0.5*urgency + 0.3*density + 0.2*utilization
    /// effectiveSpeed  = max(5, speed * (1 - 0.4*risk))
    /// capacityTph     = capacity * (1 - 0.25*risk)
    /// travelMinutes   = (length / max(0.1, effectiveSpeed)) * 60
    /// cost            = travelMinutes * (1 + 0.5*risk)
    ///                   + (1 - capacityTph / max(capacity, 1)) * 10
    /// ```
    pub fn score(&self, record: &RawRecord) -> ScoredSegment {
        let p = &self.profile;
        let field = |col: &str| record.get(col).map(String::as_str);

        let speed = parse_number(field(COL_AVERAGE_SPEED_KMH), p.default_speed_kmh);
        let length = parse_number(field(COL_LENGTH_KM), p.default_length_km).max(p.min_length_km);
        let density = normalize01(field(COL_TRAFFIC_DENSITY), p.default_density);
        let urgency = normalize01(field(COL_MAINTENANCE_URGENCY), p.default_urgency);
        let capacity = parse_number(field(COL_ROAD_CAPACITY), p.default_capacity_tph);
        let utilization = normalize01(field(COL_CAPACITY_UTILIZATION), p.default_utilization);

        let risk = URGENCY_RISK_WEIGHT * urgency
            + DENSITY_RISK_WEIGHT * density
            + UTILIZATION_RISK_WEIGHT * utilization;
        let effective_speed_kmh =
            MIN_EFFECTIVE_SPEED_KMH.max(speed * (1.0 - RISK_SPEED_PENALTY * risk));
        let capacity_tph = capacity * (1.0 - RISK_CAPACITY_PENALTY * risk);
        let travel_minutes = (length / effective_speed_kmh.max(0.1)) * 60.0;
        let cost = travel_minutes * (1.0 + RISK_COST_SURCHARGE * risk)
            + (1.0 - capacity_tph / capacity.max(1.0)) * CAPACITY_SHORTFALL_COST;

        ScoredSegment {
            road_id: self.resolve_road_id(record),
            road_type: record.get(COL_ROAD_TYPE).cloned().unwrap_or_default(),
            risk,
            urgency,
            density,
            utilization,
            effective_speed_kmh,
            capacity_tph,
            travel_minutes,
            cost,
        }
    }

    /// 道路标识回退链: road_id → road_type → 兜底名
    fn resolve_road_id(&self, record: &RawRecord) -> String {
        record
            .get(COL_ROAD_ID)
            .filter(|v| !v.is_empty())
            .or_else(|| record.get(COL_ROAD_TYPE).filter(|v| !v.is_empty()))
            .cloned()
            .unwrap_or_else(|| FALLBACK_ROAD_NAME.to_string())
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for SegmentScorer {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    /// 构造测试记录
    fn create_test_record(pairs: &[(&str, &str)]) -> RawRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_score_hand_computed() {
        let scorer = SegmentScorer::new();
        let record = create_test_record(&[
            ("road_id", "R1"),
            ("road_type", "main"),
            ("average_speed_kmh", "40"),
            ("length_km", "2"),
            ("traffic_density", "0.5"),
            ("maintenance_urgency", "0.8"),
            ("road_capacity", "100"),
            ("capacity_utilization", "0.5"),
        ]);

        let seg = scorer.score(&record);

        // risk = 0.5*0.8 + 0.3*0.5 + 0.2*0.5 = 0.65
        assert!((seg.risk - 0.65).abs() < EPS);
        // effectiveSpeed = max(5, 40*(1-0.4*0.65)) = 40*0.74 = 29.6
        assert!((seg.effective_speed_kmh - 29.6).abs() < EPS);
        // capacityTph = 100*(1-0.25*0.65) = 83.75
        assert!((seg.capacity_tph - 83.75).abs() < EPS);
        // travel = (2/29.6)*60
        let travel = (2.0 / 29.6) * 60.0;
        assert!((seg.travel_minutes - travel).abs() < EPS);
        // cost = travel*(1+0.5*0.65) + (1-83.75/100)*10
        let cost = travel * 1.325 + (1.0 - 83.75 / 100.0) * 10.0;
        assert!((seg.cost - cost).abs() < EPS);
        assert!(seg.cost > 0.0);
    }

    #[test]
    fn test_score_applies_defaults() {
        let scorer = SegmentScorer::new();
        let record = create_test_record(&[("road_id", "R9")]);

        let seg = scorer.score(&record);

        // 全部字段缺失: speed 25, length 3, 比率类 0.5, capacity 150
        // risk = 0.5*0.5 + 0.3*0.5 + 0.2*0.5 = 0.5
        assert!((seg.risk - 0.5).abs() < EPS);
        assert!((seg.effective_speed_kmh - 25.0 * 0.8).abs() < EPS);
        assert!((seg.capacity_tph - 150.0 * 0.875).abs() < EPS);
        let travel = (3.0 / 20.0) * 60.0;
        assert!((seg.travel_minutes - travel).abs() < EPS);
    }

    #[test]
    fn test_score_length_floor_and_speed_floor() {
        let scorer = SegmentScorer::new();
        let record = create_test_record(&[
            ("road_id", "R2"),
            ("length_km", "0"),
            ("average_speed_kmh", "1"),
            ("maintenance_urgency", "1"),
            ("traffic_density", "1"),
            ("capacity_utilization", "1"),
        ]);

        let seg = scorer.score(&record);

        // 长度下限 0.1, 车速下限 5
        assert!((seg.effective_speed_kmh - 5.0).abs() < EPS);
        let travel = (0.1 / 5.0) * 60.0;
        assert!((seg.travel_minutes - travel).abs() < EPS);
        // 满风险
        assert!((seg.risk - 1.0).abs() < EPS);
    }

    #[test]
    fn test_percentage_fields_normalized() {
        let scorer = SegmentScorer::new();
        let record = create_test_record(&[
            ("road_id", "R3"),
            ("traffic_density", "70"),
            ("maintenance_urgency", "90"),
            ("capacity_utilization", "50"),
        ]);

        let seg = scorer.score(&record);

        assert!((seg.density - 0.7).abs() < EPS);
        assert!((seg.urgency - 0.9).abs() < EPS);
        assert!((seg.utilization - 0.5).abs() < EPS);
    }

    #[test]
    fn test_road_id_fallback_chain() {
        let scorer = SegmentScorer::new();

        let by_type = create_test_record(&[("road_type", "spur")]);
        assert_eq!(scorer.score(&by_type).road_id, "spur");

        let neither = create_test_record(&[("length_km", "2")]);
        assert_eq!(scorer.score(&neither).road_id, "Road");
        assert_eq!(scorer.score(&neither).road_type, "");
    }
}
