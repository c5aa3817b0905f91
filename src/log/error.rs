use thiserror::Error;

/// 日志模块错误
#[derive(Debug, Error)]
pub enum LogError {
    /// 无法识别的日志级别名称
    #[error("invalid log level: {0}")]
    UnknownLevel(String),

    /// 无法识别的终端输出目标
    #[error("invalid console target: {0}")]
    UnknownTarget(String),

    /// `log` 门面已经安装了其他 logger
    #[error("a logger is already installed for the log facade")]
    BridgeInstalled,
}
