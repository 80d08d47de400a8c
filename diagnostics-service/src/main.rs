//! 请求与数据库连通性诊断服务
//!
//! 提供调试用的自省端点，包括：
//! - 请求头与环境变量回显
//! - MySQL / MongoDB 连通性探测（支持请求级凭据覆盖）
//! - 带上限的模拟耗时处理

mod credential_store;
mod deadline;
mod handlers;
mod prober;
mod routes;
mod state;

use axum::{middleware, routing::get, Json, Router};
use common::config::AppConfig;
use common::middleware::request_log::request_log_middleware;
use state::AppState;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;

const SERVICE_NAME: &str = "diagnostics-service";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "诊断服务 API",
        version = "0.1.0",
        description = "请求自省与数据库连通性诊断服务"
    ),
    paths(
        handlers::headers_raw,
        handlers::headers_report,
        handlers::env_all,
        handlers::env_from_dotenv,
        handlers::env_search,
        handlers::check_mongo,
        handlers::check_mysql,
        handlers::setup_and_check_mysql,
        handlers::simulate_timeout,
        handlers::health_check,
    ),
    components(schemas(
        common::models::MysqlOverrideRequest,
        common::models::CredentialSource,
        common::response::EmptyData,
        handlers::HealthResponse,
    )),
    tags(
        (name = "inspect", description = "请求与环境自省端点"),
        (name = "connectivity", description = "数据库连通性端点"),
        (name = "health", description = "健康检查端点")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    // 加载 .env 文件（缺失时忽略）
    dotenvy::dotenv().ok();

    // 初始化日志追踪
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // 加载配置
    let config = AppConfig::load_with_service(SERVICE_NAME);

    // 创建应用状态
    let state = AppState::new(config.clone());

    // 创建路由
    let app = create_router(state);

    // 启动服务
    let addr = format!("{}:{}", config.host, config.port);
    info!(service = SERVICE_NAME, address = %addr, "启动服务");

    let listener = TcpListener::bind(&addr).await.expect("绑定地址失败");
    axum::serve(listener, app).await.expect("服务启动失败");
}

fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::router())
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(middleware::from_fn(request_log_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
