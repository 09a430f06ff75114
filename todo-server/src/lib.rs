pub mod config;
pub mod error;
pub mod routes;

use std::path::Path;

use axum::{routing::get, Router};
use routes::{create_todo, delete_todo, get_todo, list_todos, update_todo};
use todo_store::{open_store, TodoStore};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult, ErrorResponse, ServerError};

#[derive(Debug, Clone)]
pub struct AppState {
    store: TodoStore,
}

impl AppState {
    pub fn new(store: TodoStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &TodoStore {
        &self.store
    }
}

/// 创建 Todo API 路由
pub fn create_api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/todo", get(list_todos).post(create_todo))
        .route(
            "/api/todo/{id}",
            get(get_todo).patch(update_todo).delete(delete_todo),
        )
}

/// 创建完整应用：API 路由，其余请求交给静态文件服务
pub fn create_axum_app(store: TodoStore, static_dir: impl AsRef<Path>) -> Router {
    create_api_routes()
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(store))
}

/// 打开存储并启动服务，直到收到 Ctrl-C
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let store = open_store(&config.store).await?;
    let app = create_axum_app(store.clone(), &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("服务器运行在 http://{}", listener.local_addr()?);
    info!("静态文件目录: {}", config.static_dir.display());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    info!("服务器已停止");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("监听 Ctrl-C 信号失败: {}", e);
        std::future::pending::<()>().await;
    }
    info!("收到停止信号，正在关闭服务器");
}
