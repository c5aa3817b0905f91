use crate::log::formatter::ansi::strip_ansi;
use crate::log::formatter::core::{format_timestamp, LogFormatter, RFC3339_TIMESTAMP_LAYOUT};
use crate::log::record::LogRecord;
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use std::collections::BTreeMap;

/// JsonFormatter 配置
#[derive(Debug, Clone, Deserialize, PartialEq, SmartDefault)]
#[serde(default)]
pub struct JsonFormatterConfig {
    /// 关闭颜色：去掉消息中的 ANSI 控制序列
    #[default = true]
    pub colors_disabled: bool,

    /// 不输出 time 字段
    pub timestamp_disabled: bool,

    /// 时间戳格式（chrono strftime）
    #[default(RFC3339_TIMESTAMP_LAYOUT.to_string())]
    pub timestamp_layout: String,

    /// 不输出 package / function 字段
    pub caller_disabled: bool,

    /// 多行缩进输出
    pub pretty_print: bool,

    /// 缩进字符串，仅 pretty_print 时生效
    #[default = "\t"]
    pub indent: String,
}

/// JSON 格式化器
///
/// 每条日志输出一个对象，字段按字母序：function、level、msg、package、time
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    config: JsonFormatterConfig,
}

impl JsonFormatter {
    pub fn new(config: JsonFormatterConfig) -> Self {
        Self { config }
    }

    fn encode(&self, entries: &BTreeMap<&str, String>) -> serde_json::Result<Vec<u8>> {
        if !self.config.pretty_print {
            return serde_json::to_vec(entries);
        }

        let mut buffer = Vec::with_capacity(128);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(self.config.indent.as_bytes());
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        entries.serialize(&mut serializer)?;
        Ok(buffer)
    }
}

impl LogFormatter for JsonFormatter {
    fn format(&self, record: &LogRecord) -> String {
        let mut entries = BTreeMap::new();

        if !self.config.timestamp_disabled {
            entries.insert(
                "time",
                format_timestamp(&record.timestamp, &self.config.timestamp_layout),
            );
        }

        if !self.config.caller_disabled {
            entries.insert("package", record.caller.module.clone());
            entries.insert("function", record.caller.function.clone());
        }

        entries.insert("level", record.level.to_string());
        let message = if self.config.colors_disabled {
            strip_ansi(&record.message).into_owned()
        } else {
            record.message.clone()
        };
        entries.insert("msg", message);

        match self.encode(&entries).map(String::from_utf8) {
            Ok(Ok(mut encoded)) => {
                encoded.push('\n');
                encoded
            }
            _ => String::new(),
        }
    }
}

crate::impl_from!(JsonFormatterConfig => JsonFormatter);
crate::impl_box_from!(JsonFormatter => dyn LogFormatter);
