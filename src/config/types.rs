//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 数据库配置
    #[serde(default)]
    pub database: DatabaseConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口（环境变量 `PORT`）
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 数据库配置
///
/// 启动时解析一次，之后只读地交给连接器使用
#[derive(Clone, Deserialize)]
pub struct DatabaseConfig {
    /// 完整连接 URL（环境变量 `DATABASE_URL`），设置后忽略下面的各个字段
    #[serde(default)]
    pub url: Option<String>,

    /// `DB_HOST`
    #[serde(default = "default_db_host")]
    pub host: String,

    /// `DB_PORT`
    #[serde(default = "default_db_port")]
    pub port: u16,

    /// `DB_USER`
    #[serde(default = "default_db_user")]
    pub user: String,

    /// `DB_PASSWORD`
    #[serde(default)]
    pub password: String,

    /// `DB_NAME`
    #[serde(default = "default_db_name")]
    pub name: String,
}

fn default_db_host() -> String {
    "localhost".to_string()
}

fn default_db_port() -> u16 {
    3306
}

fn default_db_user() -> String {
    "root".to_string()
}

fn default_db_name() -> String {
    "users".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: default_db_host(),
            port: default_db_port(),
            user: default_db_user(),
            password: String::new(),
            name: default_db_name(),
        }
    }
}

// 手写 Debug，避免密码进入日志
impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url.as_ref().map(|_| "<set>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .finish()
    }
}

impl DatabaseConfig {
    /// 直接使用指定 URL 的配置（测试中用于 SQLite）
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// 用于启动日志的连接描述，不包含密码
    pub fn describe(&self) -> String {
        match &self.url {
            Some(url) => {
                let scheme = url.split(':').next().unwrap_or_default();
                format!("{} (from DATABASE_URL)", scheme)
            }
            None => format!("mysql://{}@{}:{}/{}", self.user, self.host, self.port, self.name),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.port, 3306);
        assert!(config.database.url.is_none());
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_server_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = DatabaseConfig {
            password: "hunter2".to_string(),
            ..DatabaseConfig::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_describe_hides_url_credentials() {
        let config = DatabaseConfig::from_url("mysql://app:secret@db:3306/users");
        assert_eq!(config.describe(), "mysql (from DATABASE_URL)");

        let config = DatabaseConfig::default();
        assert_eq!(config.describe(), "mysql://root@localhost:3306/users");
    }
}
