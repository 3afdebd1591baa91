use crate::log::level::LogLevel;
use crate::log::value::LogValue;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::io::{self, Write};

/// 占位符数量多于参数时写入的标记
pub const ARGS_NEEDED: &[u8] = b"args needed";

/// 按 `%v` 占位符把参数依次填入模板，直接写入缓冲区
///
/// 按字节从左到右扫描一次：
/// - 第 N 个 `%v` 使用第 N 个参数
/// - 参数不足时写入 `args needed`
/// - 多余的参数被忽略
/// - 没有转义，单独的 `%` 原样输出
pub fn write_message<W: Write + ?Sized>(
    out: &mut W,
    template: &str,
    args: &[LogValue<'_>],
) -> io::Result<()> {
    let msg = template.as_bytes();
    let mut start = 0;
    let mut next_arg = 0;
    let mut j = 0;

    while j < msg.len() {
        if msg[j] != b'%' || j + 1 == msg.len() || msg[j + 1] != b'v' {
            j += 1;
            continue;
        }

        // %v 之前的文本
        out.write_all(&msg[start..j])?;
        match args.get(next_arg) {
            Some(arg) => {
                arg.write_to(out)?;
                next_arg += 1;
            }
            None => out.write_all(ARGS_NEEDED)?,
        }
        j += 2;
        start = j;
    }

    if start < msg.len() {
        out.write_all(&msg[start..])?;
    }
    Ok(())
}

/// 写入时间戳，格式: `MM-DD HH:MM:SS.mmm `
///
/// 毫秒去掉末尾的 0，为 0 时连同小数点一起省略
pub fn write_timestamp<W, Tz>(out: &mut W, time: &DateTime<Tz>) -> io::Result<()>
where
    W: Write + ?Sized,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    write!(out, "{}", time.format("%m-%d %H:%M:%S"))?;

    // 闰秒时 subsec 可能超过 999
    let millis = time.timestamp_subsec_millis().min(999);
    if millis != 0 {
        let digits = [
            b'0' + (millis / 100) as u8,
            b'0' + (millis / 10 % 10) as u8,
            b'0' + (millis % 10) as u8,
        ];
        let mut len = digits.len();
        while digits[len - 1] == b'0' {
            len -= 1;
        }
        out.write_all(b".")?;
        out.write_all(&digits[..len])?;
    }
    out.write_all(b" ")
}

/// 写入完整的一行日志: `<LEVEL> <时间戳> <消息>\n`
pub fn write_line<W, Tz>(
    out: &mut W,
    level: LogLevel,
    time: &DateTime<Tz>,
    template: &str,
    args: &[LogValue<'_>],
) -> io::Result<()>
where
    W: Write + ?Sized,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    out.write_all(level.tag())?;
    write_timestamp(out, time)?;
    write_message(out, template, args)?;
    out.write_all(b"\n")
}
