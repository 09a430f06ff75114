//! 服务配置

use std::{
    net::{Ipv4Addr, SocketAddr},
    path::PathBuf,
};

use serde::{Deserialize, Serialize};
use todo_store::StoreConfig;

/// 默认监听端口
pub const DEFAULT_PORT: u16 = 3000;

/// 默认静态文件目录
pub const DEFAULT_STATIC_DIR: &str = "./client";

/// 服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    pub bind_addr: SocketAddr,
    /// 静态文件目录
    pub static_dir: PathBuf,
    /// 存储配置
    pub store: StoreConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            store: StoreConfig::default(),
        }
    }
}

impl ServerConfig {
    /// 创建新的配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置监听地址
    pub fn with_bind_addr(mut self, bind_addr: SocketAddr) -> Self {
        self.bind_addr = bind_addr;
        self
    }

    /// 设置静态文件目录
    pub fn with_static_dir<P: Into<PathBuf>>(mut self, static_dir: P) -> Self {
        self.static_dir = static_dir.into();
        self
    }

    /// 设置存储配置
    pub fn with_store(mut self, store: StoreConfig) -> Self {
        self.store = store;
        self
    }
}
