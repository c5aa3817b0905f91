use crate::log::record::LogRecord;
use chrono::{DateTime, FixedOffset};
use std::fmt::Write;

/// 文本格式默认的时间戳格式
pub const DEFAULT_TIMESTAMP_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// RFC 3339 时间戳格式，JSON / CSV 格式化器默认使用
pub const RFC3339_TIMESTAMP_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// 日志格式化器 trait
///
/// 负责将 LogRecord 格式化为一行（或多行）文本
pub trait LogFormatter: Send + Sync {
    /// 格式化日志记录
    ///
    /// 返回值以换行结尾，空消息也会得到一个换行；编码失败时返回空字符串
    fn format(&self, record: &LogRecord) -> String;
}

/// 按 chrono strftime 格式输出时间戳，格式串非法时返回空字符串
pub(crate) fn format_timestamp(timestamp: &DateTime<FixedOffset>, layout: &str) -> String {
    let mut out = String::with_capacity(layout.len() + 16);
    if write!(out, "{}", timestamp.format(layout)).is_err() {
        return String::new();
    }
    out
}
