use crate::log::{Logger, LoggerConfig};
use anyhow::Result;

/// 从 LoggerConfig 创建 Logger
pub fn create_logger_from_config(config: LoggerConfig) -> Result<Logger> {
    Logger::from_config(config)
}

/// 注册所有日志组件
///
/// 包括 formatter 和 appender
pub fn register_log_components() -> Result<()> {
    crate::log::register_formatters()?;
    crate::log::register_appenders()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cfg::{create_trait_from_type_options, TypeOptions};
    use crate::log::{LogAppender, LogFormatter, LogLevel, LogRecord};

    #[test]
    fn test_register_log_components() -> Result<()> {
        register_log_components()?;

        let formatter: Box<dyn LogFormatter> =
            create_trait_from_type_options(&TypeOptions::new("CsvFormatter"))?;
        let appender: Box<dyn LogAppender> =
            create_trait_from_type_options(&TypeOptions::new("ConsoleAppender"))?;

        let formatted = formatter.format(&LogRecord::new(LogLevel::Info, "registered"));
        assert!(formatted.ends_with(",INFO,,,registered\n"));
        appender.append(&formatted)?;

        Ok(())
    }

    #[test]
    fn test_create_logger_with_file_appender() -> Result<()> {
        let temp_file = tempfile::NamedTempFile::new()?;

        let config = LoggerConfig::from_json(&format!(
            r#"
            {{
                outputs: [
                    {{
                        formatter: {{ type: "JsonFormatter", options: {{ caller_disabled: true }} }},
                        appender: {{ type: "FileAppender", options: {{ file_path: "{}" }} }},
                    }},
                ],
            }}
        "#,
            temp_file.path().display()
        ))?;

        let logger = create_logger_from_config(config)?;
        logger.error("Error occurred");
        logger.flush()?;

        let contents = std::fs::read_to_string(temp_file.path())?;
        let value: serde_json::Value = serde_json::from_str(&contents)?;
        assert_eq!(value["level"], "ERROR");
        assert_eq!(value["msg"], "Error occurred");

        Ok(())
    }
}
