//! SQL User Repository

use async_trait::async_trait;
use sqlx::{Any, Connection, FromRow, QueryBuilder};

use super::SqlConnector;
use crate::application::ports::{RepositoryError, UserRepositoryPort};
use crate::domain::user::{NewUser, User, UserId, UserPatch};

const SELECT_BY_ID: &str = "SELECT id, full_name, role, efficiency FROM users WHERE id = ?";

/// SQL User Repository
///
/// 每个操作打开一个连接，执行完语句后关闭
pub struct SqlUserRepository {
    connector: SqlConnector,
}

impl SqlUserRepository {
    pub fn new(connector: SqlConnector) -> Self {
        Self { connector }
    }
}

#[derive(FromRow)]
struct UserRow {
    id: i64,
    full_name: String,
    role: String,
    efficiency: i64,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: UserId::new(row.id),
            full_name: row.full_name,
            role: row.role,
            efficiency: row.efficiency,
        }
    }
}

#[async_trait]
impl UserRepositoryPort for SqlUserRepository {
    async fn insert(&self, user: &NewUser) -> Result<UserId, RepositoryError> {
        let mut conn = self.connector.connect().await?;

        let result =
            sqlx::query("INSERT INTO users (full_name, role, efficiency) VALUES (?, ?, ?)")
                .bind(user.full_name().as_str())
                .bind(user.role().as_str())
                .bind(user.efficiency().value())
                .execute(&mut conn)
                .await?;

        // MySQL 在执行结果里带回自增 ID；Any 驱动下的 SQLite 不带，需在同一连接上回读
        let id = match result.last_insert_id() {
            Some(id) => id,
            None => {
                sqlx::query_scalar::<_, i64>("SELECT last_insert_rowid()")
                    .fetch_one(&mut conn)
                    .await?
            }
        };

        conn.close().await?;

        Ok(UserId::new(id))
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let mut conn = self.connector.connect().await?;

        let row: Option<UserRow> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.as_i64())
            .fetch_optional(&mut conn)
            .await?;

        conn.close().await?;

        Ok(row.map(User::from))
    }

    async fn find_all(&self, role: Option<&str>) -> Result<Vec<User>, RepositoryError> {
        let mut conn = self.connector.connect().await?;

        let rows: Vec<UserRow> = match role {
            Some(role) => {
                sqlx::query_as(
                    "SELECT id, full_name, role, efficiency FROM users WHERE role = ? ORDER BY id",
                )
                .bind(role)
                .fetch_all(&mut conn)
                .await?
            }
            None => {
                sqlx::query_as("SELECT id, full_name, role, efficiency FROM users ORDER BY id")
                    .fetch_all(&mut conn)
                    .await?
            }
        };

        conn.close().await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn update(
        &self,
        id: UserId,
        patch: &UserPatch,
    ) -> Result<Option<User>, RepositoryError> {
        let mut conn = self.connector.connect().await?;

        // 列名固定，只有值走参数绑定
        let mut builder = QueryBuilder::<Any>::new("UPDATE users SET ");
        {
            let mut columns = builder.separated(", ");
            if let Some(full_name) = &patch.full_name {
                columns.push("full_name = ");
                columns.push_bind_unseparated(full_name.as_str());
            }
            if let Some(role) = &patch.role {
                columns.push("role = ");
                columns.push_bind_unseparated(role.as_str());
            }
            if let Some(efficiency) = patch.efficiency {
                columns.push("efficiency = ");
                columns.push_bind_unseparated(efficiency.value());
            }
        }
        builder.push(" WHERE id = ");
        builder.push_bind(id.as_i64());

        builder.build().execute(&mut conn).await?;

        let row: Option<UserRow> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.as_i64())
            .fetch_optional(&mut conn)
            .await?;

        conn.close().await?;

        Ok(row.map(User::from))
    }

    async fn delete(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let mut conn = self.connector.connect().await?;

        let row: Option<UserRow> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.as_i64())
            .fetch_optional(&mut conn)
            .await?;

        if row.is_some() {
            sqlx::query("DELETE FROM users WHERE id = ?")
                .bind(id.as_i64())
                .execute(&mut conn)
                .await?;
        }

        conn.close().await?;

        Ok(row.map(User::from))
    }

    async fn delete_all(&self) -> Result<u64, RepositoryError> {
        let mut conn = self.connector.connect().await?;

        let result = sqlx::query("DELETE FROM users").execute(&mut conn).await?;

        conn.close().await?;

        Ok(result.rows_affected())
    }
}
