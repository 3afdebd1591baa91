/// 日志级别
///
/// 级别之间有顺序，但 Logger 不做级别过滤，所有调用都会写入
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// 调试信息
    Debug = 1,
    /// 一般信息
    Info = 2,
    /// 警告信息
    Warn = 3,
    /// 错误信息
    Error = 4,
}

impl LogLevel {
    /// 行首的级别标签（包含结尾空格）
    pub fn tag(&self) -> &'static [u8] {
        match self {
            LogLevel::Debug => b"DEBUG ",
            LogLevel::Info => b"INFO ",
            LogLevel::Warn => b"WARN ",
            LogLevel::Error => b"ERROR ",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}
