use crate::log::formatter::core::{format_timestamp, LogFormatter, DEFAULT_TIMESTAMP_LAYOUT};
use crate::log::level::LogLevel;
use crate::log::record::LogRecord;
use colored::{Color, Colorize};
use serde::Deserialize;
use smart_default::SmartDefault;

/// 单个级别的前景色 / 背景色（`colored` 的颜色名，如 "white"、"bright black"）
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct LevelColor {
    pub foreground: String,
    pub background: String,
}

impl LevelColor {
    pub fn new(foreground: &str, background: &str) -> Self {
        Self {
            foreground: foreground.to_string(),
            background: background.to_string(),
        }
    }
}

/// 各级别的颜色
#[derive(Debug, Clone, Deserialize, PartialEq, SmartDefault)]
#[serde(default)]
pub struct LevelColors {
    #[default(LevelColor::new("white", "bright black"))]
    pub debug: LevelColor,
    #[default(LevelColor::new("black", "white"))]
    pub info: LevelColor,
    #[default(LevelColor::new("white", "red"))]
    pub error: LevelColor,
}

impl LevelColors {
    fn get(&self, level: LogLevel) -> &LevelColor {
        match level {
            LogLevel::Debug => &self.debug,
            LogLevel::Info => &self.info,
            LogLevel::Error => &self.error,
        }
    }
}

/// TextFormatter 配置
#[derive(Debug, Clone, Deserialize, PartialEq, SmartDefault)]
#[serde(default)]
pub struct TextFormatterConfig {
    /// 关闭级别的颜色
    pub colors_disabled: bool,

    /// 各级别颜色
    pub colors: LevelColors,

    /// 不输出时间戳
    pub timestamp_disabled: bool,

    /// 时间戳格式（chrono strftime）
    #[default(DEFAULT_TIMESTAMP_LAYOUT.to_string())]
    pub timestamp_layout: String,

    /// 不输出调用方
    pub caller_disabled: bool,
}

/// 文本格式化器
///
/// 输出格式：`<时间戳> <<模块>.<函数>> <级别>:\t<消息>\n`
#[derive(Debug, Clone, Default)]
pub struct TextFormatter {
    config: TextFormatterConfig,
}

impl TextFormatter {
    pub fn new(config: TextFormatterConfig) -> Self {
        Self { config }
    }

    // 居中到 9 列后上色
    fn render_level(&self, level: LogLevel) -> String {
        let centered = format!("{:^9}", level.as_str());
        let color = self.config.colors.get(level);

        let mut styled = centered.normal();
        if let Ok(foreground) = color.foreground.parse::<Color>() {
            styled = styled.color(foreground);
        }
        if let Ok(background) = color.background.parse::<Color>() {
            styled = styled.on_color(background);
        }
        styled.to_string()
    }
}

impl LogFormatter for TextFormatter {
    fn format(&self, record: &LogRecord) -> String {
        // 时间戳约 20 字节 + 调用方 + 级别 + 消息
        let mut entry = String::with_capacity(
            48 + record.caller.module.len() + record.caller.function.len() + record.message.len(),
        );

        if !self.config.timestamp_disabled {
            entry.push_str(&format_timestamp(
                &record.timestamp,
                &self.config.timestamp_layout,
            ));
            entry.push(' ');
        }

        if !self.config.caller_disabled {
            entry.push('<');
            entry.push_str(&record.caller.qualified_name());
            entry.push_str("> ");
        }

        if self.config.colors_disabled {
            entry.push_str(record.level.as_str());
        } else {
            entry.push_str(&self.render_level(record.level));
        }
        entry.push_str(":\t");

        entry.push_str(&record.message);
        entry.push('\n');
        entry
    }
}

crate::impl_from!(TextFormatterConfig => TextFormatter);
crate::impl_box_from!(TextFormatter => dyn LogFormatter);
