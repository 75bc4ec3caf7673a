// ==========================================
// 矿区运输路线调度系统 - API 层
// ==========================================
// 职责: 对外业务接口（HTTP 层作为外部调用方接入此处）
// ==========================================

pub mod dto;
pub mod error;
pub mod route_plan_api;

// 重导出核心类型
pub use dto::{RoutePlanRequest, RoutePlanResponse};
pub use error::{ApiError, ApiResult};
pub use route_plan_api::RoutePlanApi;
