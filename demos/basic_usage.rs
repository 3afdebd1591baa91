//! 全局默认 Logger 和独立 Logger 的使用示例

use std::time::Duration;
use xlog::{errorf, ginfof, gwarnf, infof, Logger, LoggerConfig, Unknown};

fn main() -> anyhow::Result<()> {
    println!("=== xlog 使用示例 ===\n");

    // 1. 全局默认 logger，文件打开失败会直接 panic
    println!("1. 全局默认 logger 写入 logs/demo.log");
    std::fs::create_dir_all("logs")?;
    xlog::init_log("logs/demo.log");

    for i in 0..10 {
        ginfof!("This is msg: %v", i);
    }
    gwarnf!("disk usage %v%% on %v", 91, "/data");

    // 2. 独立 logger，使用配置创建
    println!("2. 独立 logger 写入 logs/worker.log，刷盘间隔 500ms");
    let config: LoggerConfig = json5::from_str(
        r#"
        {
            file_path: "logs/worker.log",
            flush_interval: "500ms",
        }
        "#,
    )?;
    let worker = Logger::from_config(&config)?;

    infof!(worker, "worker %v started", "w-1");
    errorf!(worker, "job %v failed after %v retries: %v", 42, 3, Unknown(("timeout", 30)));

    // 超过刷盘间隔后的写入会同步刷盘
    std::thread::sleep(Duration::from_millis(600));
    infof!(worker, "end");

    // 3. 退出前刷盘
    println!("3. 退出前刷盘");
    xlog::flush()?;
    worker.close()?;

    println!("\n=== 示例完成 ===");
    Ok(())
}
