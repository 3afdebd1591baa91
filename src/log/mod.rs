//! 日志模块
//!
//! 同步、线程安全的文件日志器，使用轻量的 `%v` 占位符格式化消息。
//!
//! # 特性
//!
//! - 日志级别：Debug, Info, Warn, Error（不做级别过滤）
//! - `%v` 占位符按顺序替换参数，参数不足写入 `args needed`，多余参数被忽略
//! - 带缓冲的文件输出，距上次刷盘超过刷盘间隔（默认 2 秒）时同步刷盘
//! - 全局默认 logger 与独立 Logger 实例
//!
//! # 快速开始
//!
//! ```rust,no_run
//! use xlog::log::*;
//!
//! fn main() -> Result<()> {
//!     let config: LoggerConfig = LoggerConfig {
//!         file_path: "logs/app.log".to_string(),
//!         ..Default::default()
//!     };
//!
//!     let logger = Logger::from_config(&config)?;
//!
//!     xlog::infof!(logger, "application started, pid=%v", std::process::id() as i64);
//!     xlog::errorf!(logger, "connection to %v failed", "db-1");
//!
//!     logger.flush()?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod duration;
pub mod error;
pub mod formatter;
pub mod global;
pub mod level;
pub mod logger;
pub mod macros;
pub mod value;

// 重新导出核心类型
pub use config::{LoggerConfig, DEFAULT_FLUSH_INTERVAL};
pub use error::{Result, XlogError};
pub use level::LogLevel;
pub use logger::Logger;
pub use value::{LogValue, ToLogValue, Unknown};

pub use global::{
    close, default_logger, errorf, flush, infof, init_log, init_with_config, try_init_log, warnf,
};
