//! Todo Store - 待办事项的持久化存储层
//!
//! 定义 Todo 实体及其请求载荷，并基于 sqlx + SQLite 提供增删改查服务

mod coerce;
pub mod config;
pub mod error;
pub mod model;
pub mod store;

// 重新导出核心类型
pub use config::{StoreConfig, DEFAULT_DATABASE_URL};
pub use error::{StoreError, StoreResult};
pub use model::{CreateTodoRequest, NewTodo, Todo, TodoPatch};
pub use store::TodoStore;

/// 便捷的初始化函数：连接数据库并确保表结构存在
pub async fn open_store(config: &StoreConfig) -> StoreResult<TodoStore> {
    TodoStore::open(config).await
}
