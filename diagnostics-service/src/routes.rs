//! 诊断服务路由模块

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::state::AppState;

/// 创建诊断服务路由
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::headers_raw).post(handlers::headers_report))
        .route("/env", post(handlers::env_all))
        .route("/env-from-dotenv", post(handlers::env_from_dotenv))
        .route("/env/{search_key}", get(handlers::env_search))
        .route("/check-mongo-connection", get(handlers::check_mongo))
        .route("/check-mysql-connection", get(handlers::check_mysql))
        .route(
            "/setup-and-check-mysql-connection",
            post(handlers::setup_and_check_mysql),
        )
        .route("/timeout/{timeout_value}", get(handlers::simulate_timeout))
        .route("/api/health", get(handlers::health_check))
}
