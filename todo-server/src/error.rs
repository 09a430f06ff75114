//! HTTP 错误映射

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use todo_store::StoreError;
use tracing::error;

/// API 错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    /// 存储层错误
    #[error(transparent)]
    Store(#[from] StoreError),

    /// 请求体无法解析
    #[error("请求体无效: {0}")]
    InvalidBody(#[from] JsonRejection),

    /// 路径参数无法解析
    #[error("路径参数无效: {0}")]
    InvalidPath(#[from] PathRejection),
}

impl ApiError {
    /// 获取错误代码
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Store(err) => err.error_code(),
            ApiError::InvalidBody(_) => "INVALID_BODY",
            ApiError::InvalidPath(_) => "INVALID_PATH",
        }
    }

    /// 对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Store(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidBody(_) | ApiError::InvalidPath(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// API 结果类型别名
pub type ApiResult<T> = Result<T, ApiError>;

/// 错误响应结构
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 错误代码
    pub code: String,
    /// 错误消息
    pub message: String,
    /// 时间戳
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl ErrorResponse {
    /// 从 ApiError 创建错误响应
    pub fn from_error(error: &ApiError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
            timestamp: chrono::Utc::now(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("请求处理失败: {}", self);
        }
        (status, Json(ErrorResponse::from_error(&self))).into_response()
    }
}

/// 服务启动与运行期间的错误
#[derive(Error, Debug)]
pub enum ServerError {
    /// 存储初始化失败
    #[error("存储初始化失败: {0}")]
    Store(#[from] StoreError),

    /// 监听或服务失败
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}
