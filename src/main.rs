//! users-service - 用户 CRUD HTTP 服务
//!
//! 启动流程：加载配置 -> 初始化日志 -> 创建连接器与仓储 -> 启动 HTTP 服务器

use std::sync::Arc;

use users_service::config::{load_config, print_config};
use users_service::infrastructure::http::{AppState, HttpServer};
use users_service::infrastructure::persistence::{SqlConnector, SqlUserRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},users_service={},tower_http=debug",
        config.log.level, config.log.level
    );
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));
    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    tracing::info!("users-service v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 连接器只保存连接参数，每个请求单独建立连接
    let connector = SqlConnector::new(&config.database)
        .map_err(|e| anyhow::anyhow!("Invalid database settings: {}", e))?;
    let user_repo = Arc::new(SqlUserRepository::new(connector));

    let state = AppState::new(user_repo);
    let server = HttpServer::new(config.server.clone(), state);

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
