// ==========================================
// 矿区运输路线调度系统 - 核心库
// ==========================================
// 技术栈: Rust + Tokio
// 系统定位: 决策支持系统 (卡车分配建议, 人工最终控制权)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - 外部道路状况数据
pub mod importer;

// 引擎层 - 打分/分配规则
pub mod engine;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::plan::{RouteAllocation, RoutePlan, RouteSummary};
pub use domain::road::{RawRecord, RecordBatch, ScoredSegment};

// 导入层
pub use importer::{
    CsvRecordSource, ExcelRecordSource, ImportError, ImportResult, RecordDeduplicator,
    RecordSource, UniversalRecordSource,
};

// 引擎
pub use engine::{RoutePlanOrchestrator, SegmentScorer, TruckAllocator, WatchlistSelector};

// API
pub use api::{ApiError, ApiResult, RoutePlanApi, RoutePlanRequest};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "矿区运输路线调度系统";

// ==========================================
// 预编译检查
// ==========================================
