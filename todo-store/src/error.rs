//! 存储层错误处理模块

use std::fmt;
use thiserror::Error;

/// 存储错误类型
#[derive(Error, Debug)]
pub enum StoreError {
    /// 校验错误
    #[error("校验错误: {0}")]
    Validation(String),

    /// 数据库错误
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),

    /// 配置错误
    #[error("配置错误: {0}")]
    Configuration(String),
}

impl StoreError {
    /// 创建校验错误
    pub fn validation<T: fmt::Display>(msg: T) -> Self {
        Self::Validation(msg.to_string())
    }

    /// 创建配置错误
    pub fn config<T: fmt::Display>(msg: T) -> Self {
        Self::Configuration(msg.to_string())
    }

    /// 是否由调用方的输入引起
    pub fn is_client_error(&self) -> bool {
        matches!(self, StoreError::Validation(_))
    }

    /// 获取错误代码
    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::Validation(_) => "VALIDATION_ERROR",
            StoreError::Database(_) => "DATABASE_ERROR",
            StoreError::Configuration(_) => "CONFIG_ERROR",
        }
    }
}

/// 存储结果类型别名
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = StoreError::validation("name 不能为空");
        assert_eq!(error.error_code(), "VALIDATION_ERROR");
        assert!(error.to_string().contains("name 不能为空"));
        assert!(error.is_client_error());
    }

    #[test]
    fn test_database_error_is_server_side() {
        let error = StoreError::from(sqlx::Error::PoolClosed);
        assert_eq!(error.error_code(), "DATABASE_ERROR");
        assert!(!error.is_client_error());

        let error = StoreError::config("无效的数据库地址");
        assert_eq!(error.error_code(), "CONFIG_ERROR");
        assert!(!error.is_client_error());
    }
}
