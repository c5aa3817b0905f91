use crate::log::appender::LogAppender;
use crate::log::formatter::LogFormatter;
use crate::log::logger::{FilterList, IntoMessage, Logger};
use crate::log::record::LogRecord;
use anyhow::Result;
use once_cell::sync::Lazy;
use std::fmt;
use std::sync::Arc;

/// 全局 Logger 单例
///
/// 默认输出到标准输出，使用默认文本格式
static GLOBAL_LOGGER: Lazy<Arc<Logger>> = Lazy::new(|| Arc::new(Logger::with_console()));

/// 获取全局 Logger
pub fn global_logger() -> Arc<Logger> {
    Arc::clone(&GLOBAL_LOGGER)
}

// ========== 全局 Logger 的便捷方法 ==========

pub fn set_output(appender: Arc<dyn LogAppender>) {
    GLOBAL_LOGGER.set_output(appender)
}

pub fn set_outputs(appenders: Vec<Arc<dyn LogAppender>>) {
    GLOBAL_LOGGER.set_outputs(appenders)
}

pub fn set_formatted_output(appender: Arc<dyn LogAppender>, formatter: Arc<dyn LogFormatter>) {
    GLOBAL_LOGGER.set_formatted_output(appender, formatter)
}

pub fn set_formatted_outputs(outputs: Vec<(Arc<dyn LogAppender>, Arc<dyn LogFormatter>)>) {
    GLOBAL_LOGGER.set_formatted_outputs(outputs)
}

pub fn clear_outputs() {
    GLOBAL_LOGGER.clear_outputs()
}

pub fn flush() -> Result<()> {
    GLOBAL_LOGGER.flush()
}

pub fn set_debug_mode(enabled: bool) {
    GLOBAL_LOGGER.set_debug_mode(enabled)
}

pub fn debug_mode() -> bool {
    GLOBAL_LOGGER.debug_mode()
}

pub fn denylist_functions<I, S>(names: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    GLOBAL_LOGGER.denylist_functions(names)
}

pub fn denylist_modules<I, S>(names: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    GLOBAL_LOGGER.denylist_modules(names)
}

pub fn clear_denylist() {
    GLOBAL_LOGGER.clear_denylist()
}

pub fn allowlist_functions<I, S>(names: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    GLOBAL_LOGGER.allowlist_functions(names)
}

pub fn allowlist_modules<I, S>(names: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    GLOBAL_LOGGER.allowlist_modules(names)
}

pub fn clear_allowlist() {
    GLOBAL_LOGGER.clear_allowlist()
}

pub fn allowlist() -> FilterList {
    GLOBAL_LOGGER.allowlist()
}

pub fn denylist() -> FilterList {
    GLOBAL_LOGGER.denylist()
}

pub fn set_write_error_handler<F>(handler: F)
where
    F: Fn(&LogRecord, &anyhow::Error) + Send + Sync + 'static,
{
    GLOBAL_LOGGER.set_write_error_handler(handler)
}

pub fn clear_write_error_handler() {
    GLOBAL_LOGGER.clear_write_error_handler()
}

/// 使用全局 Logger 记录 ERROR 级别日志
pub fn error(message: impl IntoMessage) {
    GLOBAL_LOGGER.error(message)
}

/// 使用全局 Logger 记录 INFO 级别日志
pub fn info(message: impl IntoMessage) {
    GLOBAL_LOGGER.info(message)
}

/// 使用全局 Logger 记录 DEBUG 级别日志
pub fn debug(message: impl IntoMessage) {
    GLOBAL_LOGGER.debug(message)
}

pub fn errorf(args: fmt::Arguments<'_>) {
    GLOBAL_LOGGER.errorf(args)
}

pub fn infof(args: fmt::Arguments<'_>) {
    GLOBAL_LOGGER.infof(args)
}

pub fn debugf(args: fmt::Arguments<'_>) {
    GLOBAL_LOGGER.debugf(args)
}

/// 关闭单条 DEBUG 日志，不做任何事
pub fn xdebug(message: impl IntoMessage) {
    GLOBAL_LOGGER.xdebug(message)
}

pub fn xdebugf(args: fmt::Arguments<'_>) {
    GLOBAL_LOGGER.xdebugf(args)
}
