use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 日志模块统一错误类型
#[derive(Error, Debug)]
pub enum XlogError {
    #[error("打开日志文件失败 {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("刷新日志缓冲区失败: {0}")]
    Flush(#[source] io::Error),

    #[error("同步日志文件到磁盘失败: {0}")]
    Sync(#[source] io::Error),

    #[error("日志文件未初始化")]
    NotInitialized,

    #[error("配置错误: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, XlogError>;
