use crate::log::formatter::ansi::strip_ansi;
use crate::log::formatter::core::{format_timestamp, LogFormatter, RFC3339_TIMESTAMP_LAYOUT};
use crate::log::record::LogRecord;
use serde::Deserialize;
use smart_default::SmartDefault;

/// CsvFormatter 配置
#[derive(Debug, Clone, Deserialize, PartialEq, SmartDefault)]
#[serde(default)]
pub struct CsvFormatterConfig {
    /// 关闭颜色：去掉消息中的 ANSI 控制序列
    #[default = true]
    pub colors_disabled: bool,

    /// 不输出时间戳列
    pub timestamp_disabled: bool,

    /// 时间戳格式（chrono strftime）
    #[default(RFC3339_TIMESTAMP_LAYOUT.to_string())]
    pub timestamp_layout: String,

    /// 不输出 package / function 列
    pub caller_disabled: bool,

    /// 列分隔符
    #[default = ',']
    pub delimiter: char,
}

/// CSV 格式化器
///
/// 列顺序固定为：时间戳、级别、模块、函数、消息（被关闭的列不输出）
#[derive(Debug, Clone, Default)]
pub struct CsvFormatter {
    config: CsvFormatterConfig,
}

impl CsvFormatter {
    pub fn new(config: CsvFormatterConfig) -> Self {
        Self { config }
    }

    fn write_field(&self, line: &mut String, field: &str) {
        if !self.needs_quotes(field) {
            line.push_str(field);
            return;
        }

        line.push('"');
        for c in field.chars() {
            if c == '"' {
                line.push_str("\"\"");
            } else {
                line.push(c);
            }
        }
        line.push('"');
    }

    fn needs_quotes(&self, field: &str) -> bool {
        if field.is_empty() {
            return false;
        }
        field.contains(self.config.delimiter)
            || field.contains(['"', '\r', '\n'])
            || field.starts_with(char::is_whitespace)
    }
}

impl LogFormatter for CsvFormatter {
    fn format(&self, record: &LogRecord) -> String {
        let timestamp;
        let message;
        let mut fields: Vec<&str> = Vec::with_capacity(5);

        if !self.config.timestamp_disabled {
            timestamp = format_timestamp(&record.timestamp, &self.config.timestamp_layout);
            fields.push(&timestamp);
        }

        fields.push(record.level.as_str());

        if !self.config.caller_disabled {
            fields.push(&record.caller.module);
            fields.push(&record.caller.function);
        }

        message = if self.config.colors_disabled {
            strip_ansi(&record.message)
        } else {
            std::borrow::Cow::Borrowed(record.message.as_str())
        };
        fields.push(&message);

        let mut line = String::with_capacity(fields.iter().map(|f| f.len() + 3).sum::<usize>() + 1);
        for (index, field) in fields.iter().enumerate() {
            if index > 0 {
                line.push(self.config.delimiter);
            }
            self.write_field(&mut line, field);
        }
        line.push('\n');
        line
    }
}

crate::impl_from!(CsvFormatterConfig => CsvFormatter);
crate::impl_box_from!(CsvFormatter => dyn LogFormatter);
