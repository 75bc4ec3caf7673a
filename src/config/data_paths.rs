// ==========================================
// 矿区运输路线调度系统 - 数据路径解析
// ==========================================
// 职责: 解析处理后道路数据集的默认位置
// ==========================================

use std::path::PathBuf;

/// 处理后道路数据集文件名
pub const ROADS_SOURCE_FILE: &str = "roads_processed.csv";

/// 数据目录环境变量（便于调试/测试/CI 显式指定）
pub const DATA_DIR_ENV: &str = "HAUL_ROUTE_APS_DATA_DIR";

/// 获取默认道路数据集路径
///
/// # 返回
/// - 环境变量 HAUL_ROUTE_APS_DATA_DIR 已设置: {env}/roads_processed.csv
/// - 开发环境: 用户数据目录/haul-route-aps-dev/ml_data/roads_processed.csv
/// - 生产环境: 用户数据目录/haul-route-aps/ml_data/roads_processed.csv
pub fn get_default_roads_source_path() -> PathBuf {
    // 允许通过环境变量显式指定数据目录
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        let trimmed = dir.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed).join(ROADS_SOURCE_FILE);
        }
    }

    // 先给一个默认回退值, 后续如果能拿到 data_dir 再覆盖
    let mut base = PathBuf::from("./ml_data");

    if let Some(data_dir) = dirs::data_dir() {
        // 开发环境使用独立目录, 避免污染生产数据
        #[cfg(debug_assertions)]
        {
            base = data_dir.join("haul-route-aps-dev").join("ml_data");
        }

        #[cfg(not(debug_assertions))]
        {
            base = data_dir.join("haul-route-aps").join("ml_data");
        }
    }

    base.join(ROADS_SOURCE_FILE)
}
