// ==========================================
// 矿区运输路线调度系统 - 计划编排器
// ==========================================
// 用途: 协调 读取 → 去重 → 打分 → 分配 → 关注清单 的执行顺序
// 读取是管线中唯一的 I/O 挂起点; 其后全部为纯计算,
// 调用间不共享任何状态, 并发调用互不干扰
// ==========================================

use crate::config::ScoringProfile;
use crate::domain::plan::{RoutePlan, RouteSummary};
use crate::engine::allocator::TruckAllocator;
use crate::engine::numeric::round1;
use crate::engine::scorer::SegmentScorer;
use crate::engine::watchlist::WatchlistSelector;
use crate::importer::{ImportResult, RecordDeduplicator, RecordSource, UniversalRecordSource};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// 计划读取的保留行上限
const PLAN_SOURCE_ROW_CAP: usize = 400;

/// 方法说明（固定文案）
const NOTE_METHODOLOGY: &str = "按行程成本(行驶时间+风险)与道路有效产能加权分配卡车";

/// 无可用记录时的说明
const NOTE_NO_RECORDS: &str = "无道路状况数据";

/// 有效产能为零时的说明
const NOTE_ZERO_CAPACITY: &str = "道路有效产能为0";

// ==========================================
// RoutePlanOrchestrator - 计划编排器
// ==========================================

pub struct RoutePlanOrchestrator<S>
where
    S: RecordSource,
{
    source: Arc<S>,
    dedup: RecordDeduplicator,
    scorer: SegmentScorer,
    allocator: TruckAllocator,
    watchlist: WatchlistSelector,
}

impl RoutePlanOrchestrator<UniversalRecordSource> {
    /// 使用通用记录源与默认打分参数构造
    pub fn with_default_source() -> Self {
        Self::new(Arc::new(UniversalRecordSource))
    }
}

impl<S> RoutePlanOrchestrator<S>
where
    S: RecordSource,
{
    /// 创建新的编排器实例
    ///
    /// # 参数
    /// - `source`: 记录源
    pub fn new(source: Arc<S>) -> Self {
        Self::with_profile(source, ScoringProfile::default())
    }

    /// 使用指定打分参数构造
    pub fn with_profile(source: Arc<S>, profile: ScoringProfile) -> Self {
        Self {
            source,
            dedup: RecordDeduplicator::new(),
            scorer: SegmentScorer::with_profile(profile),
            allocator: TruckAllocator::new(),
            watchlist: WatchlistSelector::new(),
        }
    }

    /// 执行完整计划流程
    ///
    /// # 参数
    /// - `source_path`: 道路数据集路径
    /// - `total_trucks`: 请求的卡车总数（≥0, 调用方已兜底）
    ///
    /// # 返回
    /// RoutePlan; 无可分配产能时返回空计划（成功形态, 非错误）
    pub async fn build_route_plan(
        &self,
        source_path: &Path,
        total_trucks: f64,
    ) -> ImportResult<RoutePlan> {
        let plan_id = Uuid::new_v4();
        info!(
            plan_id = %plan_id,
            source = %source_path.display(),
            total_trucks,
            "开始生成运输计划"
        );

        // ==========================================
        // 步骤1: 读取道路状况记录（唯一 I/O 挂起点）
        // ==========================================
        debug!("步骤1: 读取道路状况记录");
        let batch = self
            .source
            .read_records(source_path, Some(PLAN_SOURCE_ROW_CAP))
            .await?;

        // ==========================================
        // 步骤2: 按道路取最新记录
        // ==========================================
        debug!(rows = batch.row_count(), "步骤2: 按道路去重取最新记录");
        let latest = self.dedup.pick_latest(batch.rows);

        if latest.is_empty() {
            info!(plan_id = %plan_id, "无可用道路记录, 返回空计划");
            return Ok(RoutePlan::empty(total_trucks, NOTE_NO_RECORDS));
        }

        // ==========================================
        // 步骤3: 路段打分
        // ==========================================
        debug!(segments = latest.len(), "步骤3: 路段打分");
        let scored = self.scorer.score_all(&latest);

        let total_capacity: f64 = scored.iter().map(|s| s.capacity_tph.max(0.0)).sum();
        if total_capacity == 0.0 {
            info!(plan_id = %plan_id, "有效产能为零, 返回空计划");
            return Ok(RoutePlan::empty(total_trucks, NOTE_ZERO_CAPACITY));
        }

        // ==========================================
        // 步骤4: 卡车分配
        // ==========================================
        debug!(total_capacity, "步骤4: 逆成本加权分配卡车");
        let routes = self.allocator.allocate(total_trucks, &scored);

        // ==========================================
        // 步骤5: 养护关注清单 + 计划组装
        // ==========================================
        debug!("步骤5: 生成养护关注清单");
        let maintenance_watch = self.watchlist.select(&routes);

        let plan = RoutePlan {
            routes,
            summary: RouteSummary {
                total_trucks,
                capacity: round1(total_capacity),
                note: NOTE_METHODOLOGY.to_string(),
                maintenance_watch,
            },
        };

        info!(
            plan_id = %plan_id,
            routes = plan.routes.len(),
            allocated = plan.allocated_trucks(),
            watch = plan.summary.maintenance_watch.len(),
            "运输计划生成完成"
        );
        Ok(plan)
    }
}
