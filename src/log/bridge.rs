//! `log` crate 桥接
//!
//! 把第三方库通过 `log` 门面输出的日志转发到 [`Logger`]。
//! 调用方模块取自 `log::Record` 的 module_path，不再解析调用栈。

use crate::log::caller::Caller;
use crate::log::error::LogError;
use crate::log::level::LogLevel;
use crate::log::logger::Logger;
use crate::log::record::LogRecord;
use std::sync::Arc;

/// `log::Log` 的实现
pub struct LogBridge {
    logger: Arc<Logger>,
}

impl LogBridge {
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }

    /// Trace / Debug → DEBUG，Info / Warn → INFO，Error → ERROR
    pub fn map_level(level: ::log::Level) -> LogLevel {
        match level {
            ::log::Level::Trace | ::log::Level::Debug => LogLevel::Debug,
            ::log::Level::Info | ::log::Level::Warn => LogLevel::Info,
            ::log::Level::Error => LogLevel::Error,
        }
    }
}

impl ::log::Log for LogBridge {
    fn enabled(&self, metadata: &::log::Metadata<'_>) -> bool {
        Self::map_level(metadata.level()) != LogLevel::Debug || self.logger.debug_mode()
    }

    fn log(&self, record: &::log::Record<'_>) {
        let module = record.module_path().unwrap_or_else(|| record.target());
        let entry = LogRecord::new(Self::map_level(record.level()), record.args().to_string())
            .with_caller(Caller::new("", module));
        self.logger.log_record(&entry);
    }

    fn flush(&self) {
        let _ = self.logger.flush();
    }
}

/// 把 `log` 门面的输出接到指定 Logger，进程内只能调用成功一次
pub fn init_log_bridge(logger: Arc<Logger>) -> Result<(), LogError> {
    ::log::set_logger(Box::leak(Box::new(LogBridge::new(logger))))
        .map_err(|_| LogError::BridgeInstalled)?;
    ::log::set_max_level(::log::LevelFilter::Trace);
    Ok(())
}
