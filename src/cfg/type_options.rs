// TypeOptions：按类型名 + 选项描述一个可创建的组件

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// 类型选项结构
///
/// ```text
/// { type: "JsonFormatter", options: { pretty_print: true } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeOptions {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default = "empty_options")]
    pub options: JsonValue,
}

fn empty_options() -> JsonValue {
    JsonValue::Object(serde_json::Map::new())
}

impl TypeOptions {
    /// 创建不带选项的 TypeOptions
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            options: empty_options(),
        }
    }

    /// 设置选项
    pub fn with_options(mut self, options: JsonValue) -> Self {
        self.options = options;
        self
    }

    /// 从 JSON 字符串创建 TypeOptions（支持 JSON5 格式）
    pub fn from_json(json_str: &str) -> Result<Self> {
        Ok(json5::from_str(json_str)?)
    }

    /// 从 YAML 字符串创建 TypeOptions
    pub fn from_yaml(yaml_str: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml_str)?)
    }

    /// 从 TOML 字符串创建 TypeOptions
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// 导出为 JSON 字符串
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 导出为 YAML 字符串
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// 导出为 TOML 字符串
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_options_from_json5() -> Result<()> {
        let opts = TypeOptions::from_json(
            r#"
            {
                // 注释和未加引号的 key 都可以
                type: "JsonFormatter",
                options: {
                    pretty_print: true,
                    indent: "  ",
                },
            }
        "#,
        )?;

        assert_eq!(opts.type_name, "JsonFormatter");
        assert_eq!(opts.options["pretty_print"], true);
        assert_eq!(opts.options["indent"], "  ");
        Ok(())
    }

    #[test]
    fn test_type_options_missing_options_defaults_to_empty_object() -> Result<()> {
        let opts = TypeOptions::from_json(r#"{ "type": "RawFormatter" }"#)?;

        assert_eq!(opts, TypeOptions::new("RawFormatter"));
        assert!(opts.options.as_object().unwrap().is_empty());
        Ok(())
    }

    #[test]
    fn test_type_options_from_yaml() -> Result<()> {
        let opts = TypeOptions::from_yaml(
            r#"
type: FileAppender
options:
  file_path: /tmp/app.log
"#,
        )?;

        assert_eq!(opts.type_name, "FileAppender");
        assert_eq!(opts.options["file_path"], "/tmp/app.log");

        let yaml_output = opts.to_yaml()?;
        assert!(yaml_output.contains("FileAppender"));
        Ok(())
    }

    #[test]
    fn test_type_options_from_toml() -> Result<()> {
        let opts = TypeOptions::from_toml(
            r#"
type = "CsvFormatter"

[options]
timestamp_disabled = true
delimiter = ";"
"#,
        )?;

        assert_eq!(opts.type_name, "CsvFormatter");
        assert_eq!(opts.options["timestamp_disabled"], true);
        assert_eq!(opts.options["delimiter"], ";");
        Ok(())
    }

    #[test]
    fn test_type_options_cross_format() -> Result<()> {
        let original = TypeOptions::new("ConsoleAppender").with_options(serde_json::json!({
            "target": "stderr",
            "auto_flush": false
        }));

        let from_json = TypeOptions::from_json(&original.to_json()?)?;
        let from_yaml = TypeOptions::from_yaml(&from_json.to_yaml()?)?;
        let from_toml = TypeOptions::from_toml(&from_yaml.to_toml()?)?;

        assert_eq!(from_toml, original);
        Ok(())
    }

    #[test]
    fn test_type_options_invalid_json() {
        let result = TypeOptions::from_json(r#"{ "type": "TextFormatter", "options": { "#);
        assert!(result.is_err());
    }
}
