//! Handler模块

use std::collections::BTreeMap;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use common::errors::{AppError, AppResult};
use common::models::credentials::MysqlOverrideRequest;
use common::response::{ApiResponse, EmptyData};

use crate::deadline::{parse_simulated_secs, WorkOutcome, WorkSimulator};
use crate::state::AppState;

/// Key/value dump of headers or environment variables.
pub type EnvMap = BTreeMap<String, String>;

/// 以原始 JSON 对象返回请求头
#[utoipa::path(
    get,
    path = "/",
    tag = "inspect",
    responses(
        (status = 200, description = "请求头键值对", body = EnvMap)
    )
)]
pub async fn headers_raw(headers: HeaderMap) -> Json<EnvMap> {
    Json(header_map(&headers))
}

/// 以统一响应格式返回请求头
#[utoipa::path(
    post,
    path = "/",
    tag = "inspect",
    responses(
        (status = 200, description = "请求头获取成功", body = ApiResponse<EnvMap>)
    )
)]
pub async fn headers_report(headers: HeaderMap) -> Json<ApiResponse<EnvMap>> {
    Json(ApiResponse::ok(
        "Headers fetched successfully",
        header_map(&headers),
    ))
}

/// 返回进程全部环境变量
#[utoipa::path(
    post,
    path = "/env",
    tag = "inspect",
    responses(
        (status = 200, description = "环境变量获取成功", body = ApiResponse<EnvMap>)
    )
)]
pub async fn env_all() -> Json<ApiResponse<EnvMap>> {
    let env: EnvMap = std::env::vars().collect();
    Json(ApiResponse::ok(
        "Environment variables fetched successfully",
        env,
    ))
}

/// 返回 .env 文件中的变量
#[utoipa::path(
    post,
    path = "/env-from-dotenv",
    tag = "inspect",
    responses(
        (status = 200, description = ".env 变量获取成功", body = ApiResponse<EnvMap>),
        (status = 500, description = ".env 文件读取失败")
    )
)]
pub async fn env_from_dotenv() -> AppResult<Json<ApiResponse<EnvMap>>> {
    let mut env = EnvMap::new();
    let iter = dotenvy::from_path_iter(".env").map_err(|e| AppError::DotenvRead(e.to_string()))?;
    for item in iter {
        let (key, value) = item.map_err(|e| AppError::DotenvRead(e.to_string()))?;
        env.insert(key, value);
    }
    Ok(Json(ApiResponse::ok(
        "Environment variables from .env file fetched successfully",
        env,
    )))
}

/// 按关键字搜索环境变量
#[utoipa::path(
    get,
    path = "/env/{search_key}",
    tag = "inspect",
    params(
        ("search_key" = String, Path, description = "变量名搜索关键字（至少 2 个字符）")
    ),
    responses(
        (status = 200, description = "匹配的环境变量", body = ApiResponse<EnvMap>),
        (status = 400, description = "关键字过短")
    )
)]
pub async fn env_search(Path(search_key): Path<String>) -> AppResult<Json<ApiResponse<EnvMap>>> {
    if search_key.len() < 2 {
        return Err(AppError::Validation(
            "At least 2 characters are required to make a search".to_string(),
        ));
    }

    let needle = search_key.to_lowercase();
    let env: EnvMap = std::env::vars()
        .filter(|(key, _)| key.to_lowercase().contains(&needle))
        .collect();

    Ok(Json(ApiResponse::ok(
        "Environment variables with key similar to search key fetched successfully",
        env,
    )))
}

/// 探测 MongoDB 连通性
#[utoipa::path(
    get,
    path = "/check-mongo-connection",
    tag = "connectivity",
    responses(
        (status = 200, description = "MongoDB 可达", body = ApiResponse<EmptyData>),
        (status = 500, description = "MongoDB 不可达")
    )
)]
pub async fn check_mongo(State(state): State<AppState>) -> AppResult<Json<ApiResponse<EmptyData>>> {
    let url = mongo_url_from_env();
    state.prober.probe_mongo(&url).await?;
    Ok(Json(ApiResponse::message("MongoDB connection successful")))
}

/// 使用当前生效的凭据探测 MySQL 连通性
#[utoipa::path(
    get,
    path = "/check-mysql-connection",
    tag = "connectivity",
    responses(
        (status = 200, description = "MySQL 可达", body = ApiResponse<EmptyData>),
        (status = 500, description = "MySQL 不可达")
    )
)]
pub async fn check_mysql(State(state): State<AppState>) -> AppResult<Json<ApiResponse<EmptyData>>> {
    let credentials = state.credentials.resolve().await;
    state.prober.probe_mysql(&credentials).await?;
    Ok(Json(ApiResponse::message("MySQL connection successful")))
}

/// 设置 MySQL 凭据覆盖并立即探测连通性
#[utoipa::path(
    post,
    path = "/setup-and-check-mysql-connection",
    tag = "connectivity",
    request_body = MysqlOverrideRequest,
    responses(
        (status = 200, description = "探测成功，消息标明凭据来源", body = ApiResponse<EmptyData>),
        (status = 400, description = "字段缺失或为空"),
        (status = 500, description = "MySQL 不可达")
    )
)]
pub async fn setup_and_check_mysql(
    State(state): State<AppState>,
    Json(req): Json<MysqlOverrideRequest>,
) -> AppResult<Json<ApiResponse<EmptyData>>> {
    let source = state.credentials.set_override(req).await?;
    let credentials = state.credentials.resolve().await;
    state.prober.probe_mysql(&credentials).await?;

    Ok(Json(ApiResponse::message(format!(
        "MySQL connection successful using {} credentials",
        source
    ))))
}

/// 模拟耗时处理并与固定上限赛跑
#[utoipa::path(
    get,
    path = "/timeout/{timeout_value}",
    tag = "inspect",
    params(
        ("timeout_value" = String, Path, description = "模拟处理秒数（非法或非正数时取 30）")
    ),
    responses(
        (status = 200, description = "处理在上限之内完成", body = ApiResponse<EmptyData>),
        (status = 408, description = "处理超过上限", body = ApiResponse<EmptyData>)
    )
)]
pub async fn simulate_timeout(
    State(state): State<AppState>,
    Path(timeout_value): Path<String>,
) -> (StatusCode, Json<ApiResponse<EmptyData>>) {
    let simulated = Duration::from_secs(parse_simulated_secs(&timeout_value));
    let simulator = WorkSimulator::new(Duration::from_secs(state.config.work_ceiling_secs));

    match simulator.run(simulated).await {
        WorkOutcome::Completed => (
            StatusCode::OK,
            Json(ApiResponse::message("Response after timeout")),
        ),
        WorkOutcome::Exceeded => (
            StatusCode::REQUEST_TIMEOUT,
            Json(ApiResponse::err("Processing taking longer than expected")),
        ),
    }
}

/// 健康检查端点
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "服务运行正常", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: state.config.service_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}

fn header_map(headers: &HeaderMap) -> EnvMap {
    let mut map = EnvMap::new();
    for (name, value) in headers {
        // First value wins for repeated headers, matching the raw dump's
        // one-value-per-name shape
        map.entry(name.as_str().to_string())
            .or_insert_with(|| value.to_str().unwrap_or_default().to_string());
    }
    map
}

fn mongo_url_from_env() -> String {
    let user = std::env::var("MONGO_USER").unwrap_or_default();
    let password = std::env::var("MONGO_PASSWORD").unwrap_or_default();
    let host = std::env::var("MONGO_HOST").unwrap_or_default();
    let port = std::env::var("MONGO_PORT").unwrap_or_default();
    let database = std::env::var("MONGO_DATABASE").unwrap_or_default();
    format!(
        "mongodb://{}:{}@{}:{}/{}",
        user, password, host, port, database
    )
}

/// 健康检查响应
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// 服务状态
    pub status: String,
    /// 服务名称
    pub service: String,
    /// 服务版本
    pub version: String,
    /// 当前时间戳
    pub timestamp: DateTime<Utc>,
}
