use crate::log::config::{LoggerConfig, DEFAULT_FLUSH_INTERVAL};
use crate::log::error::{Result, XlogError};
use crate::log::formatter::write_line;
use crate::log::level::LogLevel;
use crate::log::value::LogValue;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// 已打开的日志文件及其缓冲区，两者同时创建、同时关闭
struct Output {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl Output {
    fn open(path: &Path) -> Result<Self> {
        let mut options = OpenOptions::new();
        options.create(true).append(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o777);
        }

        let file = options.open(path).map_err(|source| XlogError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            writer: BufWriter::new(file),
            path: path.to_path_buf(),
        })
    }

    /// 先刷新缓冲区，再 fsync；缓冲区错误优先返回
    fn flush_and_sync(&mut self) -> Result<()> {
        self.writer.flush().map_err(XlogError::Flush)?;
        self.writer.get_ref().sync_all().map_err(XlogError::Sync)
    }
}

struct State {
    output: Option<Output>,
    last_flush: Instant,
    flush_interval: Duration,
    /// 每次写入前先在这里拼出完整的一行
    line: Vec<u8>,
}

/// 先把整行格式化到 `scratch`，再一次性写入 `writer`
///
/// 写入失败时缓冲区里不会残留半行内容
fn append_line<W, Tz>(
    writer: &mut W,
    scratch: &mut Vec<u8>,
    level: LogLevel,
    time: &DateTime<Tz>,
    msg: &str,
    args: &[LogValue<'_>],
) -> io::Result<()>
where
    W: Write + ?Sized,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    scratch.clear();
    write_line(scratch, level, time, msg, args)?;
    writer.write_all(scratch.as_slice())
}

/// 核心日志器
///
/// 所有格式化、写入和刷盘都在同一把锁内完成，多个线程同时写入时每一行都是完整的
pub struct Logger {
    state: Mutex<State>,
    flush_failures: AtomicU64,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// 创建未关联文件的 Logger，关联文件前的日志会被丢弃
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                output: None,
                last_flush: Instant::now(),
                flush_interval: DEFAULT_FLUSH_INTERVAL,
                line: Vec::with_capacity(256),
            }),
            flush_failures: AtomicU64::new(0),
        }
    }

    /// 打开（不存在则创建）日志文件并以追加模式写入
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let logger = Self::new();
        logger.attach(path)?;
        Ok(logger)
    }

    pub fn from_config(config: &LoggerConfig) -> Result<Self> {
        let logger = Self::new();
        logger.apply_config(config)?;
        Ok(logger)
    }

    /// 按配置关联日志文件并设置刷盘间隔，两者在同一次加锁内生效
    ///
    /// 配置无效或文件打开失败时，原有输出和刷盘间隔都保持不变
    pub fn apply_config(&self, config: &LoggerConfig) -> Result<()> {
        config.validate()?;
        self.replace_output(Path::new(&config.file_path), Some(config.flush_interval))
    }

    pub fn with_flush_interval(self, interval: Duration) -> Self {
        self.set_flush_interval(interval);
        self
    }

    pub fn set_flush_interval(&self, interval: Duration) {
        self.lock().flush_interval = interval;
    }

    pub fn flush_interval(&self) -> Duration {
        self.lock().flush_interval
    }

    /// 关联日志文件，替换当前输出
    ///
    /// 原有文件会先刷盘再关闭；新文件打开失败时保留原有输出
    pub fn attach(&self, path: impl AsRef<Path>) -> Result<()> {
        self.replace_output(path.as_ref(), None)
    }

    fn replace_output(&self, path: &Path, flush_interval: Option<Duration>) -> Result<()> {
        let output = Output::open(path)?;

        let mut state = self.lock();
        if let Some(interval) = flush_interval {
            state.flush_interval = interval;
        }
        if let Some(mut previous) = state.output.replace(output) {
            if let Err(e) = previous.flush_and_sync() {
                self.report_failure(&previous.path, &e);
            }
        }
        Ok(())
    }

    /// 当前日志文件路径
    pub fn path(&self) -> Option<PathBuf> {
        self.lock().output.as_ref().map(|o| o.path.clone())
    }

    pub fn is_attached(&self) -> bool {
        self.lock().output.is_some()
    }

    /// 自动刷盘或写入失败的次数（这些失败没有调用方可以返回）
    pub fn flush_failures(&self) -> u64 {
        self.flush_failures.load(Ordering::Relaxed)
    }

    /// 刷新缓冲区并同步到磁盘
    pub fn flush(&self) -> Result<()> {
        let mut state = self.lock();
        let output = state.output.as_mut().ok_or(XlogError::NotInitialized)?;
        output.flush_and_sync()?;
        state.last_flush = Instant::now();
        Ok(())
    }

    /// 刷盘后关闭日志文件，之后的日志会被丢弃直到重新关联文件
    pub fn close(&self) -> Result<()> {
        let mut state = self.lock();
        match state.output.as_mut() {
            Some(output) => {
                output.flush_and_sync()?;
                state.output = None;
                state.last_flush = Instant::now();
                Ok(())
            }
            None => Ok(()),
        }
    }

    /// 记录 INFO 级别日志
    pub fn infof(&self, msg: &str, args: &[LogValue<'_>]) {
        self.logf(LogLevel::Info, msg, args)
    }

    /// 记录 WARN 级别日志
    pub fn warnf(&self, msg: &str, args: &[LogValue<'_>]) {
        self.logf(LogLevel::Warn, msg, args)
    }

    /// 记录 ERROR 级别日志
    pub fn errorf(&self, msg: &str, args: &[LogValue<'_>]) {
        self.logf(LogLevel::Error, msg, args)
    }

    pub(crate) fn logf(&self, level: LogLevel, msg: &str, args: &[LogValue<'_>]) {
        let mut state = self.lock();
        let now = Instant::now();
        let State {
            output,
            last_flush,
            flush_interval,
            line,
        } = &mut *state;

        let Some(output) = output.as_mut() else {
            return;
        };

        let time = chrono::Local::now();
        if let Err(e) = append_line(&mut output.writer, line, level, &time, msg, args) {
            self.report_failure(&output.path, &XlogError::Flush(e));
            return;
        }

        if now.duration_since(*last_flush) > *flush_interval {
            match output.flush_and_sync() {
                Ok(()) => *last_flush = now,
                Err(e) => self.report_failure(&output.path, &e),
            }
        }
    }

    fn report_failure(&self, path: &Path, err: &XlogError) {
        self.flush_failures.fetch_add(1, Ordering::Relaxed);
        eprintln!("xlog: {}: {}", path.display(), err);
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
