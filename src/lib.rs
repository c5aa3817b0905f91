//! callerlog - 带调用方识别的结构化日志库
//!
//! 每条日志自动带上调用方的函数名和模块路径；调试日志可以按调用方的函数、模块开关。
//!
//! ## 模块
//!
//! - **cfg**: 配置管理模块（TypeOptions + trait 注册表）
//! - **log**: 日志模块（调用方解析、多输出目标、多种格式）
//!
//! ## 使用
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use callerlog::{infof, log, MemoryAppender};
//!
//! log::info("service started");
//! infof!("listening on {}", 8080);
//!
//! log::set_debug_mode(true);
//! log::denylist_modules(["my_app::noisy"]);
//! log::debug("visible unless the caller is in my_app::noisy");
//!
//! let capture = Arc::new(MemoryAppender::new());
//! log::set_output(capture.clone());
//! ```

pub mod cfg;
pub mod log;

// 重新导出主要的公共 API
pub use crate::cfg::{create_trait_from_type_options, register_trait, TypeOptions};

pub use crate::log::{
    Caller, CallerResolver, LogAppender, LogError, LogFormatter, LogLevel, LogRecord, Logger,
    LoggerConfig, MemoryAppender,
};
