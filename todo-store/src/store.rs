//! 基于 SQLite 的 Todo 存储服务

use std::str::FromStr;

use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use crate::{
    config::StoreConfig,
    error::{StoreError, StoreResult},
    model::{NewTodo, Todo, TodoPatch},
};

const CREATE_TABLE_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS todos (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT    NOT NULL,
    completed   BOOLEAN NOT NULL DEFAULT 0,
    created_at  TEXT    NOT NULL,
    updated_at  TEXT    NOT NULL
)
"#;

const SELECT_COLUMNS: &str = "id, name, completed, created_at, updated_at";

/// Todo 存储服务
///
/// 内部持有连接池，克隆开销很小，可直接注入到各个路由处理器中。
#[derive(Debug, Clone)]
pub struct TodoStore {
    pool: SqlitePool,
}

impl TodoStore {
    /// 打开连接池，不做表结构同步
    pub async fn connect(config: &StoreConfig) -> StoreResult<Self> {
        let mut options = SqliteConnectOptions::from_str(&config.database_url)
            .map_err(|e| StoreError::config(format!("无效的数据库地址 {}: {}", config.database_url, e)))?
            .create_if_missing(config.create_if_missing);

        let mut pool_options = SqlitePoolOptions::new().max_connections(config.max_connections.max(1));

        if config.is_in_memory() {
            // 每个内存连接都是独立的数据库，必须始终复用同一个连接
            pool_options = pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        } else {
            options = options.journal_mode(SqliteJournalMode::Wal);
        }

        let pool = pool_options.connect_with(options).await?;
        debug!("数据库连接池已创建: {}", config.database_url);

        Ok(Self { pool })
    }

    /// 完整的启动流程：连接、验证连通性、同步表结构
    pub async fn open(config: &StoreConfig) -> StoreResult<Self> {
        let store = Self::connect(config).await?;
        store.authenticate().await?;
        store.sync().await?;
        Ok(store)
    }

    /// 验证数据库连通性
    pub async fn authenticate(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        info!("数据库连接成功");
        Ok(())
    }

    /// 表不存在时创建 todos 表
    pub async fn sync(&self) -> StoreResult<()> {
        sqlx::query(CREATE_TABLE_SQL).execute(&self.pool).await?;
        info!("数据表同步成功");
        Ok(())
    }

    /// 按插入顺序返回全部待办事项
    pub async fn list(&self) -> StoreResult<Vec<Todo>> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM todos ORDER BY id ASC");
        let todos = sqlx::query_as::<_, Todo>(&sql).fetch_all(&self.pool).await?;
        Ok(todos)
    }

    /// 新建待办事项并返回持久化后的记录
    pub async fn create(&self, new_todo: NewTodo) -> StoreResult<Todo> {
        let now = Utc::now();
        let sql = format!(
            "INSERT INTO todos (name, completed, created_at, updated_at) VALUES (?, ?, ?, ?) RETURNING {SELECT_COLUMNS}"
        );

        let todo = sqlx::query_as::<_, Todo>(&sql)
            .bind(new_todo.name)
            .bind(new_todo.completed)
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;

        debug!("创建 Todo 成功: id={}", todo.id);
        Ok(todo)
    }

    /// 按 id 查询，不存在时返回 `None`
    pub async fn get(&self, id: i64) -> StoreResult<Option<Todo>> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM todos WHERE id = ?");
        let todo = sqlx::query_as::<_, Todo>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(todo)
    }

    /// 覆盖载荷中出现的字段并刷新 `updated_at`，返回受影响的行数
    pub async fn update(&self, id: i64, patch: TodoPatch) -> StoreResult<u64> {
        let result = sqlx::query(
            "UPDATE todos SET name = COALESCE(?, name), completed = COALESCE(?, completed), updated_at = ? WHERE id = ?",
        )
        .bind(patch.name)
        .bind(patch.completed)
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// 物理删除，返回受影响的行数
    pub async fn delete(&self, id: i64) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// 关闭连接池，之后的所有操作都会返回数据库错误
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
