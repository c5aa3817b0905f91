use crate::log::appender::LogAppender;
use crate::log::error::LogError;
use anyhow::Result;
use serde::Deserialize;
use smart_default::SmartDefault;
use std::io::{self, Write};
use std::str::FromStr;

/// 终端输出目标，配置中写作 `stdout` / `stderr`（不区分大小写）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Target {
    #[default]
    Stdout,
    Stderr,
}

impl FromStr for Target {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stdout" => Ok(Target::Stdout),
            "stderr" => Ok(Target::Stderr),
            _ => Err(LogError::UnknownTarget(s.to_string())),
        }
    }
}

impl TryFrom<String> for Target {
    type Error = LogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// ConsoleAppender 配置
#[derive(Debug, Clone, Deserialize, PartialEq, SmartDefault)]
#[serde(default)]
pub struct ConsoleAppenderConfig {
    /// 输出到 stdout 还是 stderr
    pub target: Target,

    /// 每条日志写完后立即刷新
    #[default = true]
    pub auto_flush: bool,
}

/// 终端输出器
pub struct ConsoleAppender {
    config: ConsoleAppenderConfig,
}

impl ConsoleAppender {
    pub fn new(config: ConsoleAppenderConfig) -> Self {
        Self { config }
    }

    /// 输出到标准输出
    pub fn stdout() -> Self {
        Self::new(ConsoleAppenderConfig::default())
    }

    /// 输出到标准错误
    pub fn stderr() -> Self {
        Self::new(ConsoleAppenderConfig {
            target: Target::Stderr,
            ..Default::default()
        })
    }

    pub fn target(&self) -> Target {
        self.config.target
    }

    fn write_to(writer: &mut dyn Write, formatted_message: &str, flush: bool) -> io::Result<()> {
        writer.write_all(formatted_message.as_bytes())?;
        if flush {
            writer.flush()?;
        }
        Ok(())
    }
}

impl LogAppender for ConsoleAppender {
    fn append(&self, formatted_message: &str) -> Result<()> {
        let flush = self.config.auto_flush;
        match self.config.target {
            Target::Stdout => Self::write_to(&mut io::stdout().lock(), formatted_message, flush)?,
            Target::Stderr => Self::write_to(&mut io::stderr().lock(), formatted_message, flush)?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        match self.config.target {
            Target::Stdout => io::stdout().flush()?,
            Target::Stderr => io::stderr().flush()?,
        }
        Ok(())
    }
}

crate::impl_from!(ConsoleAppenderConfig => ConsoleAppender);
crate::impl_box_from!(ConsoleAppender => dyn LogAppender);
