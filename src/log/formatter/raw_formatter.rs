use crate::log::formatter::ansi::strip_ansi;
use crate::log::formatter::core::LogFormatter;
use crate::log::record::LogRecord;
use serde::Deserialize;

/// RawFormatter 配置
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct RawFormatterConfig {
    /// 去掉消息中的 ANSI 控制序列
    pub strip_colors: bool,
}

/// 原样输出消息，只追加换行
#[derive(Debug, Clone, Default)]
pub struct RawFormatter {
    config: RawFormatterConfig,
}

impl RawFormatter {
    pub fn new(config: RawFormatterConfig) -> Self {
        Self { config }
    }
}

impl LogFormatter for RawFormatter {
    fn format(&self, record: &LogRecord) -> String {
        let mut entry = if self.config.strip_colors {
            strip_ansi(&record.message).into_owned()
        } else {
            record.message.clone()
        };
        entry.push('\n');
        entry
    }
}

crate::impl_from!(RawFormatterConfig => RawFormatter);
crate::impl_box_from!(RawFormatter => dyn LogFormatter);
