//! 格式化日志宏
//!
//! ```ignore
//! use callerlog::{errorf, infof};
//!
//! // 使用全局 Logger
//! infof!("listening on {}", addr);
//!
//! // 使用指定的 Logger
//! errorf!(logger => "request {} failed: {}", id, err);
//! ```

/// 记录格式化的 ERROR 级别日志
#[macro_export]
macro_rules! errorf {
    ($logger:expr => $($arg:tt)+) => {
        $logger.errorf(format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::log::errorf(format_args!($($arg)+))
    };
}

/// 记录格式化的 INFO 级别日志
#[macro_export]
macro_rules! infof {
    ($logger:expr => $($arg:tt)+) => {
        $logger.infof(format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::log::infof(format_args!($($arg)+))
    };
}

/// 记录格式化的 DEBUG 级别日志
#[macro_export]
macro_rules! debugf {
    ($logger:expr => $($arg:tt)+) => {
        $logger.debugf(format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::log::debugf(format_args!($($arg)+))
    };
}

/// `debugf!` 的关闭版本，参数只做类型检查，不输出
#[macro_export]
macro_rules! xdebugf {
    ($logger:expr => $($arg:tt)+) => {
        $logger.xdebugf(format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::log::xdebugf(format_args!($($arg)+))
    };
}
