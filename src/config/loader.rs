//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 服务约定的环境变量（`PORT`、`DB_HOST` 等，可来自 `.env`）
//! 2. 带前缀的环境变量（`USERS_SECTION__KEY`）
//! 3. 配置文件（config.toml）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File, Map};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 环境变量 -> 配置键
const ENV_BINDINGS: &[(&str, &str)] = &[
    ("PORT", "server.port"),
    ("DB_HOST", "database.host"),
    ("DB_PORT", "database.port"),
    ("DB_USER", "database.user"),
    ("DB_PASSWORD", "database.password"),
    ("DB_NAME", "database.name"),
    ("DATABASE_URL", "database.url"),
];

/// 加载应用配置
///
/// 先读取工作目录下的 `.env`（不覆盖已存在的变量），再合并所有配置来源。
///
/// # 环境变量示例
/// - `PORT=8080`
/// - `DB_HOST=db.internal`
/// - `DB_PASSWORD=secret`
/// - `USERS_LOG__LEVEL=debug`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "Loaded .env file");
    }

    let env: Map<String, String> = std::env::vars().collect();
    load_config_from(None, &env)
}

/// 从指定路径和环境变量表加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
/// - `env` - 环境变量表，测试时可以传入自定义内容
pub fn load_config_from(
    config_path: Option<&Path>,
    env: &Map<String, String>,
) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("database.host", "localhost")?
        .set_default("database.port", 3306)?
        .set_default("database.user", "root")?
        .set_default("database.password", "")?
        .set_default("database.name", "users")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 带前缀的环境变量
    // 例如: USERS_SERVER__PORT=8080
    builder = builder.add_source(
        Environment::with_prefix("USERS")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(Some(env.clone())),
    );

    // 4. 约定的扁平环境变量（最高优先级）
    for (var, key) in ENV_BINDINGS {
        builder = builder.set_override_option(*key, env.get(*var).cloned())?;
    }

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    match &config.database.url {
        Some(url) if url.trim().is_empty() => {
            return Err(ConfigError::ValidationError(
                "Database URL cannot be empty".to_string(),
            ));
        }
        Some(_) => {}
        None => {
            if config.database.host.is_empty() {
                return Err(ConfigError::ValidationError(
                    "Database host cannot be empty".to_string(),
                ));
            }
            if config.database.name.is_empty() {
                return Err(ConfigError::ValidationError(
                    "Database name cannot be empty".to_string(),
                ));
            }
        }
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Database: {}", config.database.describe());
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
