// ==========================================
// 矿区运输路线调度系统 - 引擎层
// ==========================================
// 职责: 打分/分配业务规则, 全部为纯函数式无状态引擎
// ==========================================

pub mod allocator;
pub mod numeric;
pub mod orchestrator;
pub mod scorer;
pub mod watchlist;

// 重导出核心引擎
pub use allocator::{TruckAllocator, DEFAULT_TOTAL_TRUCKS};
pub use numeric::{coerce_json_number, normalize01, parse_number, round1, round2};
pub use orchestrator::RoutePlanOrchestrator;
pub use scorer::SegmentScorer;
pub use watchlist::WatchlistSelector;
