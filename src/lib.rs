//! xlog - 轻量的同步文件日志库
//!
//! 多线程并发写入、`%v` 占位符格式化、按时间窗口刷盘。
//!
//! ## 模块
//!
//! - **log**: Logger、格式化、刷盘策略以及全局默认 logger
//!
//! ## 日志格式
//!
//! ```text
//! INFO 03-07 09:05:03.12 user alice logged in
//! ERROR 03-07 09:05:04 connect db-1 failed
//! ```

pub mod log;

// 重新导出主要的公共 API
pub use log::{
    close, default_logger, errorf, flush, infof, init_log, init_with_config, try_init_log, warnf,
};
pub use log::{LogLevel, LogValue, Logger, LoggerConfig, ToLogValue, Unknown, XlogError};
