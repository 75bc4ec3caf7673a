// ==========================================
// 矿区运输路线调度系统 - 计划接口
// ==========================================
// 职责: 供外部 HTTP 层调用的业务接口
// 每次调用重新读取并全量重算, 不缓存任何状态
// ==========================================

use crate::api::dto::{RoutePlanRequest, RoutePlanResponse};
use crate::api::error::ApiResult;
use crate::config::{get_default_roads_source_path, ScoringProfile};
use crate::engine::numeric::coerce_json_number;
use crate::engine::orchestrator::RoutePlanOrchestrator;
use crate::engine::DEFAULT_TOTAL_TRUCKS;
use crate::importer::UniversalRecordSource;

// ==========================================
// RoutePlanApi - 计划接口
// ==========================================
pub struct RoutePlanApi {
    orchestrator: RoutePlanOrchestrator<UniversalRecordSource>,
}

impl RoutePlanApi {
    /// 使用默认打分参数构造
    pub fn new() -> Self {
        Self {
            orchestrator: RoutePlanOrchestrator::with_default_source(),
        }
    }

    /// 使用指定打分参数构造
    pub fn with_profile(profile: ScoringProfile) -> Self {
        Self {
            orchestrator: RoutePlanOrchestrator::with_profile(
                std::sync::Arc::new(UniversalRecordSource),
                profile,
            ),
        }
    }

    /// 生成运输计划
    ///
    /// # 参数
    /// - `request`: 数据源覆盖 + 原始卡车数
    ///
    /// # 返回
    /// - Ok(RoutePlanResponse): 完整计划; 无可用产能时为空计划（成功形态）
    /// - Err(ApiError::NotFound): 数据源路径不存在
    /// - Err(ApiError::ParseError): 数据源内容格式错误
    pub async fn build_route_plan(&self, request: &RoutePlanRequest) -> ApiResult<RoutePlanResponse> {
        let source_path = request
            .source_path
            .clone()
            .unwrap_or_else(get_default_roads_source_path);

        // 卡车数兜底: 非数字回退 200, 负数按 0 处理
        let total_trucks =
            coerce_json_number(request.traffic_volume_trucks.as_ref(), DEFAULT_TOTAL_TRUCKS)
                .max(0.0);

        let plan = self
            .orchestrator
            .build_route_plan(&source_path, total_trucks)
            .await?;
        Ok(plan)
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for RoutePlanApi {
    fn default() -> Self {
        Self::new()
    }
}
