// ==========================================
// 运输计划端到端测试
// ==========================================
// 测试目标: RoutePlanApi 全链路 (读取→去重→打分→分配→关注清单)
// 覆盖范围: 守恒 / 去重平局 / 关注清单 / 空产能 / 错误分类
// ==========================================

use haul_route_aps::api::{ApiError, RoutePlanApi, RoutePlanRequest};
use serde_json::json;
use std::io::Write;
use std::path::PathBuf;
use tempfile::{Builder, NamedTempFile};

// ==========================================
// 测试辅助函数
// ==========================================

/// 写入临时 CSV 数据集
fn create_test_csv(lines: &[&str]) -> NamedTempFile {
    let mut temp_file = Builder::new().suffix(".csv").tempfile().unwrap();
    for line in lines {
        writeln!(temp_file, "{}", line).unwrap();
    }
    temp_file
}

const HEADER: &str = "road_id,road_type,date,average_speed_kmh,length_km,traffic_density,maintenance_urgency,road_capacity,capacity_utilization";

/// 标准测试数据集: 4 条道路, 含重复记录与去重平局
///
/// - R1: 两条记录, 2024-01-05 的新记录(urgency 0.8)应胜出
/// - R4: 两条记录同日期, 输入序靠后者(urgency 0.95)应胜出
fn create_standard_dataset() -> NamedTempFile {
    create_test_csv(&[
        HEADER,
        "R1,main,2024-01-01,40,2,0.3,0.2,200,0.4",
        "R1,main,2024-01-05,30,2,0.5,0.8,200,0.6",
        "R2,spur,2024-01-03,25,5,0.7,0.9,100,0.8",
        "R3,ramp,2024-01-02,50,1,0.2,0.1,300,0.3",
        "R4,haul,2024-01-02,35,3,0.4,0.1,250,0.5",
        "R4,haul,2024-01-02,35,3,0.4,0.95,250,0.5",
    ])
}

fn request_for(file: &NamedTempFile, trucks: serde_json::Value) -> RoutePlanRequest {
    RoutePlanRequest {
        source_path: Some(file.path().to_path_buf()),
        traffic_volume_trucks: Some(trucks),
    }
}

// ==========================================
// 测试用例 1: 全链路 - 去重/排序/守恒/关注清单
// ==========================================

#[tokio::test]
async fn test_e2e_full_pipeline() {
    let file = create_standard_dataset();
    let api = RoutePlanApi::new();

    let plan = api
        .build_route_plan(&request_for(&file, json!(100)))
        .await
        .unwrap();

    // 每条道路只保留一条最新记录
    assert_eq!(plan.routes.len(), 4);

    // 成本升序: R3(低风险短途) 最优, R2(高风险长途) 垫底
    let order: Vec<&str> = plan.routes.iter().map(|r| r.road_id.as_str()).collect();
    assert_eq!(order, vec!["R3", "R1", "R4", "R2"]);

    // 逆成本和 < 1 时权重分母取 1, 末位吸收余量
    assert_eq!(plan.routes[0].trucks, 55);
    assert_eq!(plan.routes[1].trucks, 11);
    assert_eq!(plan.routes[2].trucks, 9);
    assert_eq!(plan.routes[3].trucks, 25);

    // 守恒
    assert_eq!(plan.allocated_trucks(), 100);
    assert_eq!(plan.summary.total_trucks, 100.0);

    // 去重结果: R1 取新记录(urgency 0.8), R4 平局取输入序靠后者(0.95)
    let r1 = plan.routes.iter().find(|r| r.road_id == "R1").unwrap();
    assert_eq!(r1.urgency, 0.8);
    let r4 = plan.routes.iter().find(|r| r.road_id == "R4").unwrap();
    assert_eq!(r4.urgency, 0.95);

    // 关注清单: urgency 降序, R3 未达标
    assert_eq!(
        plan.summary.maintenance_watch,
        vec!["R4".to_string(), "R2".to_string(), "R1".to_string()]
    );

    // 摘要
    assert!(plan.summary.capacity > 0.0);
    assert!(!plan.summary.note.is_empty());
}

// ==========================================
// 测试用例 2: 对外 JSON 契约
// ==========================================

#[tokio::test]
async fn test_e2e_wire_contract() {
    let file = create_standard_dataset();
    let api = RoutePlanApi::new();

    let plan = api
        .build_route_plan(&request_for(&file, json!("80")))
        .await
        .unwrap();

    let value = serde_json::to_value(&plan).unwrap();
    let route = &value["routes"][0];
    for key in [
        "roadId",
        "type",
        "trucks",
        "estTravelMinutes",
        "effectiveSpeedKmh",
        "riskScore",
        "cost",
        "density",
        "urgency",
    ] {
        assert!(route.get(key).is_some(), "缺少字段 {key}");
    }
    for key in ["totalTrucks", "capacity", "note", "maintenanceWatch"] {
        assert!(value["summary"].get(key).is_some(), "缺少字段 {key}");
    }

    // 字符串形式的卡车数同样兜底解析
    assert_eq!(value["summary"]["totalTrucks"], 80.0);
}

// ==========================================
// 测试用例 3: 空产能 - 成功形态的空计划
// ==========================================

#[tokio::test]
async fn test_e2e_zero_capacity_is_success() {
    let file = create_test_csv(&[
        HEADER,
        "Z1,main,2024-01-01,30,2,0.5,0.5,0,0.5",
        "Z2,spur,2024-01-01,25,3,0.5,0.5,0,0.5",
    ]);
    let api = RoutePlanApi::new();

    let plan = api
        .build_route_plan(&request_for(&file, json!(200)))
        .await
        .unwrap();

    assert!(plan.routes.is_empty());
    assert_eq!(plan.summary.capacity, 0.0);
    assert!(!plan.summary.note.is_empty());
    assert!(plan.summary.maintenance_watch.is_empty());
}

// ==========================================
// 测试用例 4: 无数据行 - 成功形态的空计划
// ==========================================

#[tokio::test]
async fn test_e2e_headers_only_is_success() {
    let file = create_test_csv(&[HEADER]);
    let api = RoutePlanApi::new();

    let plan = api
        .build_route_plan(&request_for(&file, json!(200)))
        .await
        .unwrap();

    assert!(plan.routes.is_empty());
    assert_eq!(plan.summary.capacity, 0.0);
    assert!(!plan.summary.note.is_empty());
}

// ==========================================
// 测试用例 5: 错误分类
// ==========================================

#[tokio::test]
async fn test_e2e_missing_source_is_not_found() {
    let api = RoutePlanApi::new();
    let request = RoutePlanRequest {
        source_path: Some(PathBuf::from("/nonexistent/roads_processed.csv")),
        traffic_volume_trucks: None,
    };

    let result = api.build_route_plan(&request).await;
    assert!(matches!(result, Err(ApiError::NotFound(_))));
}

#[tokio::test]
async fn test_e2e_unsupported_extension_is_parse_error() {
    let file = Builder::new().suffix(".txt").tempfile().unwrap();
    let api = RoutePlanApi::new();
    let request = RoutePlanRequest {
        source_path: Some(file.path().to_path_buf()),
        traffic_volume_trucks: None,
    };

    let result = api.build_route_plan(&request).await;
    assert!(matches!(result, Err(ApiError::ParseError(_))));
}

// ==========================================
// 测试用例 6: 卡车数兜底
// ==========================================

#[tokio::test]
async fn test_e2e_truck_count_coercion() {
    let file = create_standard_dataset();
    let api = RoutePlanApi::new();

    // 缺省 → 200
    let plan = api
        .build_route_plan(&RoutePlanRequest {
            source_path: Some(file.path().to_path_buf()),
            traffic_volume_trucks: None,
        })
        .await
        .unwrap();
    assert_eq!(plan.summary.total_trucks, 200.0);
    assert_eq!(plan.allocated_trucks(), 200);

    // 非数字 → 200
    let plan = api
        .build_route_plan(&request_for(&file, json!("not-a-number")))
        .await
        .unwrap();
    assert_eq!(plan.summary.total_trucks, 200.0);

    // 负数 → 0
    let plan = api
        .build_route_plan(&request_for(&file, json!(-50)))
        .await
        .unwrap();
    assert_eq!(plan.summary.total_trucks, 0.0);
    assert_eq!(plan.allocated_trucks(), 0);
}
