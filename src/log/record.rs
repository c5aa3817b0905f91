use crate::log::caller::Caller;
use crate::log::level::LogLevel;
use chrono::{DateTime, FixedOffset, Local};

/// 日志记录
///
/// 每次放行的日志调用只构建一次，交给所有输出目标的格式化器
#[derive(Debug, Clone)]
pub struct LogRecord {
    /// 日志级别
    pub level: LogLevel,
    /// 日志消息
    pub message: String,
    /// 调用方，解析失败时为空
    pub caller: Caller,
    /// 时间戳（本地时区）
    pub timestamp: DateTime<FixedOffset>,
}

impl LogRecord {
    /// 创建新的日志记录，时间戳取当前本地时间
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            caller: Caller::default(),
            timestamp: Local::now().fixed_offset(),
        }
    }

    /// 设置调用方
    pub fn with_caller(mut self, caller: Caller) -> Self {
        self.caller = caller;
        self
    }

    /// 设置时间戳
    pub fn with_timestamp(mut self, timestamp: DateTime<FixedOffset>) -> Self {
        self.timestamp = timestamp;
        self
    }
}
