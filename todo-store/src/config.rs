//! 存储配置

use serde::{Deserialize, Serialize};

/// 默认数据库地址
pub const DEFAULT_DATABASE_URL: &str = "sqlite://todos.db";

/// 存储配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// 数据库连接地址
    pub database_url: String,
    /// 连接池最大连接数
    pub max_connections: u32,
    /// 数据库文件不存在时是否创建
    pub create_if_missing: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 5,
            create_if_missing: true,
        }
    }
}

impl StoreConfig {
    /// 创建新的配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 内存数据库配置，进程退出后数据即丢失
    pub fn in_memory() -> Self {
        Self::default()
            .with_database_url("sqlite::memory:")
            .with_max_connections(1)
    }

    /// 设置数据库连接地址
    pub fn with_database_url<S: Into<String>>(mut self, database_url: S) -> Self {
        self.database_url = database_url.into();
        self
    }

    /// 设置连接池最大连接数
    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    /// 设置是否自动创建数据库文件
    pub fn with_create_if_missing(mut self, create_if_missing: bool) -> Self {
        self.create_if_missing = create_if_missing;
        self
    }

    /// 是否为内存数据库
    pub fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:") || self.database_url.contains("mode=memory")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.max_connections, 5);
        assert!(config.create_if_missing);
        assert!(!config.is_in_memory());
    }

    #[test]
    fn test_in_memory_config() {
        let config = StoreConfig::in_memory();
        assert!(config.is_in_memory());
        assert_eq!(config.max_connections, 1);
    }

    #[test]
    fn test_builder_methods() {
        let config = StoreConfig::new()
            .with_database_url("sqlite:///tmp/other.db")
            .with_max_connections(8)
            .with_create_if_missing(false);

        assert_eq!(config.database_url, "sqlite:///tmp/other.db");
        assert_eq!(config.max_connections, 8);
        assert!(!config.create_if_missing);
    }
}
