use crate::cfg::{create_trait_from_type_options, register_trait, TypeOptions};
use crate::log::appender::LogAppender;
use crate::log::appender::{
    console_appender::{ConsoleAppender, ConsoleAppenderConfig},
    file_appender::{FileAppender, FileAppenderConfig},
};
use anyhow::Result;

/// 注册所有 Appender 实现
pub fn register_appenders() -> Result<()> {
    register_trait::<ConsoleAppender, dyn LogAppender, ConsoleAppenderConfig>("ConsoleAppender")?;
    register_trait::<FileAppender, dyn LogAppender, FileAppenderConfig>("FileAppender")?;
    Ok(())
}

/// 从 TypeOptions 创建 Appender
pub fn create_appender_from_options(options: &TypeOptions) -> Result<Box<dyn LogAppender>> {
    create_trait_from_type_options(options)
}
