//! 全局默认 logger 的集成测试
//!
//! 默认 logger 是进程级单例，所有用例串行执行

use serial_test::serial;
use std::time::Duration;
use xlog::{gerrorf, ginfof, gwarnf, LoggerConfig, XlogError};

#[test]
#[serial]
fn test_default_logger_usable_before_init() {
    xlog::close().unwrap();

    // 未初始化时日志被丢弃，刷盘返回未初始化错误
    ginfof!("nothing to see %v", 1);
    assert!(!xlog::default_logger().is_attached());
    assert!(matches!(xlog::flush(), Err(XlogError::NotInitialized)));
}

#[test]
#[serial]
fn test_init_log_and_flush() -> anyhow::Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    let path = temp_dir.path().join("global.log");

    xlog::init_log(&path);
    ginfof!("started %v", "server");
    gwarnf!("slow %v", 250);
    gerrorf!("failed %v");
    xlog::infof("plain %v", &[xlog::LogValue::Int(-3)]);
    xlog::flush()?;

    let contents = std::fs::read_to_string(&path)?;
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("INFO ") && lines[0].ends_with(" started server"));
    assert!(lines[1].starts_with("WARN ") && lines[1].ends_with(" slow 250"));
    assert!(lines[2].starts_with("ERROR ") && lines[2].ends_with(" failed args needed"));
    assert!(lines[3].ends_with(" plain -3"));

    xlog::close()?;
    Ok(())
}

#[test]
#[serial]
fn test_try_init_log_reports_open_failure() -> anyhow::Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    let path = temp_dir.path().join("no").join("such").join("dir.log");

    let result = xlog::try_init_log(&path);
    assert!(matches!(result, Err(XlogError::Open { .. })));

    Ok(())
}

#[test]
#[serial]
#[should_panic(expected = "failed to initialize log file")]
fn test_init_log_panics_on_open_failure() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    xlog::init_log(temp_dir.path().join("missing").join("app.log"));
}

#[test]
#[serial]
fn test_init_with_config() -> anyhow::Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    let path = temp_dir.path().join("configured.log");
    let config: LoggerConfig = json5::from_str(&format!(
        r#"{{ file_path: "{}", flush_interval: "100ms" }}"#,
        path.display()
    ))?;

    xlog::init_with_config(&config)?;
    assert_eq!(
        xlog::default_logger().flush_interval(),
        Duration::from_millis(100)
    );

    std::thread::sleep(Duration::from_millis(150));
    ginfof!("auto flushed");
    let contents = std::fs::read_to_string(&path)?;
    assert!(contents.ends_with(" auto flushed\n"));

    xlog::default_logger().set_flush_interval(xlog::log::DEFAULT_FLUSH_INTERVAL);
    xlog::close()?;
    Ok(())
}
