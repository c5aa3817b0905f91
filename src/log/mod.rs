//! 日志模块
//!
//! 三个级别（DEBUG / INFO / ERROR）、多输出目标、按调用方过滤调试日志。
//!
//! # 特性
//!
//! - 每条日志自动解析调用方（函数名、模块路径）
//! - 多个输出目标，每个目标有自己的格式化器：TextFormatter、JsonFormatter、CsvFormatter、RawFormatter
//! - 输出目标：ConsoleAppender、FileAppender、MemoryAppender、WriterAppender
//! - DEBUG 日志受调试模式和白名单/黑名单控制
//! - 基于配置的动态创建
//! - `log` crate 桥接
//!
//! # 快速开始
//!
//! ```rust,no_run
//! use callerlog::log::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = LoggerConfig::from_json(r#"
//!         {
//!             debug_mode: true,
//!             outputs: [
//!                 {
//!                     formatter: { type: "TextFormatter", options: { colors_disabled: true } },
//!                     appender: { type: "ConsoleAppender", options: { target: "stdout" } },
//!                 },
//!             ],
//!             denylist: { modules: ["my_app::noisy"] },
//!         }
//!     "#)?;
//!
//!     // 创建 Logger（组件会自动注册）
//!     let logger = Logger::from_config(config)?;
//!
//!     logger.info("Application started");
//!     logger.error(["Connection", "failed"]);
//!     logger.debug("only in debug mode");
//!
//!     Ok(())
//! }
//! ```

pub mod appender;
pub mod bridge;
pub mod caller;
pub mod error;
pub mod formatter;
pub mod global;
pub mod level;
pub mod logger;
pub mod macros;
pub mod record;
pub mod registry;

// 重新导出核心类型
pub use appender::LogAppender;
pub use bridge::{init_log_bridge, LogBridge};
pub use caller::{
    parse_symbol, BacktraceIntrospector, Caller, CallerResolver, NoopIntrospector,
    StackIntrospector,
};
pub use error::LogError;
pub use formatter::LogFormatter;
pub use level::LogLevel;
pub use logger::{FilterList, IntoMessage, Logger, LoggerConfig, OutputConfig, WriteErrorHandler};
pub use record::LogRecord;
pub use registry::{create_logger_from_config, register_log_components};

// 全局 Logger 的便捷方法
pub use global::{
    allowlist, allowlist_functions, allowlist_modules, clear_allowlist, clear_denylist,
    clear_outputs, clear_write_error_handler, debug, debug_mode, debugf, denylist,
    denylist_functions, denylist_modules, error, errorf, flush, global_logger, info, infof,
    set_debug_mode, set_formatted_output, set_formatted_outputs, set_output, set_outputs,
    set_write_error_handler, xdebug, xdebugf,
};

// 重新导出子模块的注册函数
pub use appender::{
    register_appenders, ConsoleAppender, ConsoleAppenderConfig, FileAppender, FileAppenderConfig,
    MemoryAppender, Target, WriterAppender,
};
pub use formatter::{
    register_formatters, CsvFormatter, CsvFormatterConfig, JsonFormatter, JsonFormatterConfig,
    RawFormatter, RawFormatterConfig, TextFormatter, TextFormatterConfig,
};
