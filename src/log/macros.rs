//! 日志宏模块
//!
//! 参数可以是任意实现了 `ToLogValue` 的表达式，无需手动构造 `LogValue`
//!
//! # 示例
//!
//! ```ignore
//! use xlog::*;
//!
//! let logger = Logger::open("app.log")?;
//! infof!(logger, "user %v logged in from %v", user_id, addr);
//!
//! // 全局默认 logger
//! init_log("app.log");
//! gwarnf!("retry %v/%v", attempt, max_attempts);
//! ```

/// 内部使用：把参数列表转换为 `[LogValue]`
#[doc(hidden)]
#[macro_export]
macro_rules! __log_values {
    ($($arg:expr),* $(,)?) => {
        [$($crate::log::ToLogValue::to_log_value(&$arg)),*]
    };
}

/// 记录 INFO 级别日志
///
/// ```ignore
/// infof!(logger, "request %v took %vms", path, elapsed);
/// ```
#[macro_export]
macro_rules! infof {
    ($logger:expr, $msg:expr $(, $arg:expr)* $(,)?) => {
        $logger.infof($msg, &$crate::__log_values!($($arg),*))
    };
}

/// 记录 WARN 级别日志
///
/// ```ignore
/// warnf!(logger, "queue depth %v over %v", depth, limit);
/// ```
#[macro_export]
macro_rules! warnf {
    ($logger:expr, $msg:expr $(, $arg:expr)* $(,)?) => {
        $logger.warnf($msg, &$crate::__log_values!($($arg),*))
    };
}

/// 记录 ERROR 级别日志
///
/// ```ignore
/// errorf!(logger, "connect %v failed: %v", host, Unknown(&err));
/// ```
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $msg:expr $(, $arg:expr)* $(,)?) => {
        $logger.errorf($msg, &$crate::__log_values!($($arg),*))
    };
}

/// 使用全局默认 logger 记录 INFO 级别日志
#[macro_export]
macro_rules! ginfof {
    ($msg:expr $(, $arg:expr)* $(,)?) => {
        $crate::log::infof($msg, &$crate::__log_values!($($arg),*))
    };
}

/// 使用全局默认 logger 记录 WARN 级别日志
#[macro_export]
macro_rules! gwarnf {
    ($msg:expr $(, $arg:expr)* $(,)?) => {
        $crate::log::warnf($msg, &$crate::__log_values!($($arg),*))
    };
}

/// 使用全局默认 logger 记录 ERROR 级别日志
#[macro_export]
macro_rules! gerrorf {
    ($msg:expr $(, $arg:expr)* $(,)?) => {
        $crate::log::errorf($msg, &$crate::__log_values!($($arg),*))
    };
}
