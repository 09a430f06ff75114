//! todo-server 命令行入口
//!
//! 连接数据库、同步表结构后启动 HTTP 服务

use std::{net::SocketAddr, path::PathBuf, process::ExitCode};

use clap::Parser;
use todo_server::{config::DEFAULT_STATIC_DIR, ServerConfig};
use todo_store::{StoreConfig, DEFAULT_DATABASE_URL};
use tracing::{error, info, Level};

/// Todo 列表 HTTP 服务
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// 数据库连接地址
    #[clap(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    database_url: String,

    /// 监听地址
    #[clap(short, long, env = "TODO_BIND", default_value = "0.0.0.0:3000")]
    bind: SocketAddr,

    /// 静态文件目录，相对路径按当前工作目录解析（在工作区根目录运行时请指定 todo-server/client）
    #[clap(long, env = "TODO_STATIC_DIR", default_value = DEFAULT_STATIC_DIR)]
    static_dir: PathBuf,

    /// 连接池最大连接数
    #[clap(long, env = "TODO_MAX_CONNECTIONS", default_value = "5")]
    max_connections: u32,

    /// 输出调试日志
    #[clap(short, long)]
    verbose: bool,
}

impl Args {
    fn into_config(self) -> ServerConfig {
        let store = StoreConfig::new()
            .with_database_url(self.database_url)
            .with_max_connections(self.max_connections);

        ServerConfig::new()
            .with_bind_addr(self.bind)
            .with_static_dir(self.static_dir)
            .with_store(store)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // 初始化日志
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let config = args.into_config();
    info!("启动 todo 服务，数据库: {}", config.store.database_url);
    info!("=== API端点列表 ===");
    info!("  GET    /api/todo      - 获取全部 Todo");
    info!("  POST   /api/todo      - 创建 Todo");
    info!("  GET    /api/todo/:id  - 获取单个 Todo");
    info!("  PATCH  /api/todo/:id  - 更新 Todo");
    info!("  DELETE /api/todo/:id  - 删除 Todo");

    match todo_server::run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("服务启动失败: {}", e);
            ExitCode::FAILURE
        }
    }
}
