use crate::log::config::LoggerConfig;
use crate::log::error::Result;
use crate::log::value::LogValue;
use crate::log::Logger;
use std::path::Path;

/// 全局默认 Logger 单例
///
/// 首次访问时创建，此时尚未关联文件，需要调用 [`init_log`] 指定日志文件
static DEFAULT_LOGGER: once_cell::sync::Lazy<Logger> = once_cell::sync::Lazy::new(Logger::new);

/// 获取全局默认 logger
pub fn default_logger() -> &'static Logger {
    &DEFAULT_LOGGER
}

/// 初始化全局默认 logger 的日志文件
///
/// 日志文件打开失败时直接 panic，日志系统不能在没有输出目标的情况下运行
///
/// # 示例
///
/// ```ignore
/// fn main() {
///     xlog::init_log("logs/app.log");
///     xlog::ginfof!("server started on port %v", 8080);
///     xlog::flush().ok();
/// }
/// ```
pub fn init_log(path: impl AsRef<Path>) {
    let path = path.as_ref();
    if let Err(e) = try_init_log(path) {
        panic!("xlog: failed to initialize log file: {}", e);
    }
}

/// 初始化全局默认 logger 的日志文件，失败时返回错误
pub fn try_init_log(path: impl AsRef<Path>) -> Result<()> {
    default_logger().attach(path)
}

/// 使用配置初始化全局默认 logger
pub fn init_with_config(config: &LoggerConfig) -> Result<()> {
    default_logger().apply_config(config)
}

/// 刷新全局默认 logger 的缓冲区并同步到磁盘
pub fn flush() -> Result<()> {
    default_logger().flush()
}

/// 刷盘并关闭全局默认 logger 的日志文件
pub fn close() -> Result<()> {
    default_logger().close()
}

// ========== 默认 logger 的便捷 log 方法 ==========

/// 使用默认 logger 记录 INFO 级别日志
pub fn infof(msg: &str, args: &[LogValue<'_>]) {
    default_logger().infof(msg, args)
}

/// 使用默认 logger 记录 WARN 级别日志
pub fn warnf(msg: &str, args: &[LogValue<'_>]) {
    default_logger().warnf(msg, args)
}

/// 使用默认 logger 记录 ERROR 级别日志
pub fn errorf(msg: &str, args: &[LogValue<'_>]) {
    default_logger().errorf(msg, args)
}
