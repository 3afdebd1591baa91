use std::borrow::Cow;
use std::fmt;
use std::io::{self, Write};

/// 占位符 `%v` 对应的参数值
///
/// 只有三种渲染方式：有符号整数、文本、未知类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogValue<'a> {
    /// 有符号整数，按十进制输出
    Int(i64),
    /// 文本，原样输出
    Str(&'a str),
    /// 其他类型，内容为类型的默认文本表示
    Unknown(String),
}

impl LogValue<'_> {
    /// 把参数值直接写入缓冲区
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        match self {
            LogValue::Int(n) => write!(out, "{}", n),
            LogValue::Str(s) => out.write_all(s.as_bytes()),
            LogValue::Unknown(repr) => write!(out, "(unknown type: {})", repr),
        }
    }
}

impl fmt::Display for LogValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogValue::Int(n) => write!(f, "{}", n),
            LogValue::Str(s) => f.write_str(s),
            LogValue::Unknown(repr) => write!(f, "(unknown type: {})", repr),
        }
    }
}

/// 转换为 [`LogValue`]
///
/// 由 `infof!` 等宏对每个参数调用
pub trait ToLogValue {
    fn to_log_value(&self) -> LogValue<'_>;
}

impl<T: ToLogValue + ?Sized> ToLogValue for &T {
    fn to_log_value(&self) -> LogValue<'_> {
        (**self).to_log_value()
    }
}

impl<'a, T: ToLogValue + ?Sized> From<&'a T> for LogValue<'a> {
    fn from(value: &'a T) -> Self {
        value.to_log_value()
    }
}

macro_rules! impl_signed {
    ($($t:ty),*) => {
        $(
            impl ToLogValue for $t {
                fn to_log_value(&self) -> LogValue<'_> {
                    LogValue::Int(*self as i64)
                }
            }
        )*
    };
}

macro_rules! impl_unknown_display {
    ($($t:ty),*) => {
        $(
            impl ToLogValue for $t {
                fn to_log_value(&self) -> LogValue<'_> {
                    LogValue::Unknown(self.to_string())
                }
            }
        )*
    };
}

impl_signed!(i8, i16, i32, i64, isize);
impl_unknown_display!(u8, u16, u32, u64, u128, usize, i128, f32, f64, bool, char);

impl ToLogValue for str {
    fn to_log_value(&self) -> LogValue<'_> {
        LogValue::Str(self)
    }
}

impl ToLogValue for String {
    fn to_log_value(&self) -> LogValue<'_> {
        LogValue::Str(self.as_str())
    }
}

impl ToLogValue for Cow<'_, str> {
    fn to_log_value(&self) -> LogValue<'_> {
        LogValue::Str(self.as_ref())
    }
}

/// 把任意 `Debug` 类型作为未知类型参数传入
///
/// ```ignore
/// infof!(logger, "peer=%v", Unknown(&addr));
/// ```
pub struct Unknown<T>(pub T);

impl<T: fmt::Debug> ToLogValue for Unknown<T> {
    fn to_log_value(&self) -> LogValue<'_> {
        LogValue::Unknown(format!("{:?}", self.0))
    }
}
