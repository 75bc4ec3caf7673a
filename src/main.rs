// ==========================================
// 矿区运输路线调度系统 - CLI 主入口
// ==========================================
// 用法: haul-route-aps [数据源路径] [卡车总数]
// 缺省数据源: 用户数据目录下的 roads_processed.csv
// 输出: RoutePlan JSON（由外部 HTTP 层直接透传的同一形态）
// ==========================================

use haul_route_aps::api::{RoutePlanApi, RoutePlanRequest};
use haul_route_aps::logging;
use std::path::PathBuf;

#[tokio::main]
async fn main() {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - 决策支持系统", haul_route_aps::APP_NAME);
    tracing::info!("系统版本: {}", haul_route_aps::VERSION);
    tracing::info!("==================================================");

    let args: Vec<String> = std::env::args().collect();

    let request = RoutePlanRequest {
        source_path: args.get(1).map(PathBuf::from),
        traffic_volume_trucks: args
            .get(2)
            .map(|raw| serde_json::Value::String(raw.clone())),
    };

    let api = RoutePlanApi::new();
    match api.build_route_plan(&request).await {
        Ok(plan) => {
            let json = serde_json::to_string_pretty(&plan).expect("计划序列化失败");
            println!("{json}");
        }
        Err(err) => {
            tracing::error!("计划生成失败: {err}");
            std::process::exit(1);
        }
    }
}
