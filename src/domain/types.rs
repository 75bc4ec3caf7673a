// ==========================================
// 矿区运输路线调度系统 - 字段约定
// ==========================================
// 职责: 道路状况数据源的列名约定
// 数据源列以外的字段一律忽略
// ==========================================

/// 道路标识列（去重主键）
pub const COL_ROAD_ID: &str = "road_id";

/// 道路类型列
pub const COL_ROAD_TYPE: &str = "road_type";

/// 平均车速列（km/h）
pub const COL_AVERAGE_SPEED_KMH: &str = "average_speed_kmh";

/// 路段长度列（km）
pub const COL_LENGTH_KM: &str = "length_km";

/// 交通密度列（0-1 或百分比）
pub const COL_TRAFFIC_DENSITY: &str = "traffic_density";

/// 养护紧急度列（0-1 或百分比）
pub const COL_MAINTENANCE_URGENCY: &str = "maintenance_urgency";

/// 道路产能列（吨/小时）
pub const COL_ROAD_CAPACITY: &str = "road_capacity";

/// 产能利用率列（0-1 或百分比）
pub const COL_CAPACITY_UTILIZATION: &str = "capacity_utilization";

/// 时间戳候选列，按序取第一个非空值
pub const TIMESTAMP_CANDIDATE_COLS: [&str; 3] = ["date", "timestamp", "day"];

/// 道路标识缺失时的兜底名称
pub const FALLBACK_ROAD_NAME: &str = "Road";
