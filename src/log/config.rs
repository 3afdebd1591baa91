use crate::log::duration::HumanDur;
use crate::log::error::{Result, XlogError};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use smart_default::SmartDefault;
use std::time::Duration;

/// 默认自动刷盘间隔
pub const DEFAULT_FLUSH_INTERVAL: Duration = Duration::from_secs(2);

/// Logger 配置
///
/// ```ignore
/// let config: LoggerConfig = json5::from_str(r#"{
///     file_path: "logs/app.log",
///     flush_interval: "2s",
/// }"#)?;
/// ```
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, SmartDefault, PartialEq)]
#[serde(default)]
pub struct LoggerConfig {
    /// 日志文件路径
    #[default("app.log".to_string())]
    pub file_path: String,

    /// 距上次刷盘超过该间隔后，下一次写入会同步刷盘
    #[default(DEFAULT_FLUSH_INTERVAL)]
    #[serde_as(as = "HumanDur")]
    pub flush_interval: Duration,
}

impl LoggerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.file_path.trim().is_empty() {
            return Err(XlogError::Config("file_path 不能为空".to_string()));
        }
        Ok(())
    }
}
