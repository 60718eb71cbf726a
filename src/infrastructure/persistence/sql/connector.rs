//! SQL Connector - 按请求打开短连接
//!
//! 通过 sqlx 的 Any 驱动连接：生产环境为 MySQL，测试使用 SQLite。
//! 不使用连接池，每次存储操作都会打开并关闭一个新连接。

use std::str::FromStr;

use sqlx::any::{install_default_drivers, AnyConnectOptions};
use sqlx::mysql::MySqlConnectOptions;
use sqlx::{AnyConnection, ConnectOptions, Connection};

use crate::application::ports::RepositoryError;
use crate::config::DatabaseConfig;

/// 数据库连接器
///
/// 持有启动时解析好的连接参数，本身不持有任何连接。
/// 连接参数中含有密码，所以不实现 Debug
#[derive(Clone)]
pub struct SqlConnector {
    options: AnyConnectOptions,
}

impl SqlConnector {
    /// 根据数据库配置创建连接器
    ///
    /// 配置了 `url` 时直接使用；否则用 host/port/user/password/name 拼出 MySQL URL
    pub fn new(config: &DatabaseConfig) -> Result<Self, RepositoryError> {
        install_default_drivers();

        let url = match &config.url {
            Some(url) => url.clone(),
            None => MySqlConnectOptions::new()
                .host(&config.host)
                .port(config.port)
                .username(&config.user)
                .password(&config.password)
                .database(&config.name)
                .to_url_lossy()
                .to_string(),
        };

        let options = AnyConnectOptions::from_str(&url)?;

        Ok(Self { options })
    }

    /// 打开一个新连接
    pub async fn connect(&self) -> Result<AnyConnection, RepositoryError> {
        let conn = AnyConnection::connect_with(&self.options).await?;
        Ok(conn)
    }
}
