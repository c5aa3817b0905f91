use crate::log::appender::LogAppender;
use anyhow::Result;
use serde::Deserialize;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, PoisonError};

/// FileAppender 配置
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FileAppenderConfig {
    /// 日志文件路径
    pub file_path: String,
}

/// 文件输出器
///
/// 以追加方式写文件，第一次写入时才打开文件（必要时创建父目录）
pub struct FileAppender {
    config: FileAppenderConfig,
    file: Mutex<Option<File>>,
}

impl FileAppender {
    pub fn new(config: FileAppenderConfig) -> Self {
        Self {
            config,
            file: Mutex::new(None),
        }
    }

    /// 获取日志文件路径
    pub fn path(&self) -> &str {
        &self.config.file_path
    }

    fn open(&self) -> Result<File> {
        let path = Path::new(&self.config.file_path);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(file)
    }
}

impl LogAppender for FileAppender {
    fn append(&self, formatted_message: &str) -> Result<()> {
        let mut guard = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        if guard.is_none() {
            *guard = Some(self.open()?);
        }
        if let Some(file) = guard.as_mut() {
            file.write_all(formatted_message.as_bytes())?;
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        let mut guard = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(file) = guard.as_mut() {
            file.flush()?;
        }
        Ok(())
    }
}

crate::impl_from!(FileAppenderConfig => FileAppender);
crate::impl_box_from!(FileAppender => dyn LogAppender);

#[cfg(test)]
mod tests {
    use super::*;

    fn config(path: &Path) -> FileAppenderConfig {
        FileAppenderConfig {
            file_path: path.to_string_lossy().to_string(),
        }
    }

    #[test]
    fn test_file_appender_append() -> Result<()> {
        let temp_file = tempfile::NamedTempFile::new()?;
        let appender = FileAppender::new(config(temp_file.path()));

        appender.append("First message\n")?;
        appender.append("Second message\n")?;
        appender.flush()?;

        let contents = std::fs::read_to_string(temp_file.path())?;
        assert_eq!(contents, "First message\nSecond message\n");

        Ok(())
    }

    #[test]
    fn test_file_appender_appends_to_existing_file() -> Result<()> {
        let temp_file = tempfile::NamedTempFile::new()?;
        std::fs::write(temp_file.path(), "existing\n")?;

        let appender = FileAppender::new(config(temp_file.path()));
        appender.append("new\n")?;

        let contents = std::fs::read_to_string(temp_file.path())?;
        assert_eq!(contents, "existing\nnew\n");

        Ok(())
    }

    #[test]
    fn test_file_appender_creates_directory() -> Result<()> {
        let temp_dir = tempfile::TempDir::new()?;
        let log_path = temp_dir.path().join("nested").join("dir").join("test.log");

        let appender = FileAppender::new(config(&log_path));
        assert!(!log_path.exists());

        appender.append("Test\n")?;
        assert!(log_path.exists());

        Ok(())
    }

    #[test]
    fn test_file_appender_open_failure() -> Result<()> {
        let temp_dir = tempfile::TempDir::new()?;

        // 目录不能作为文件打开
        let appender = FileAppender::new(config(temp_dir.path()));
        assert!(appender.append("Test\n").is_err());
        assert!(appender.flush().is_ok());

        Ok(())
    }

    #[test]
    fn test_file_appender_from_config() {
        let appender = FileAppender::from(FileAppenderConfig {
            file_path: "/tmp/callerlog-test.log".to_string(),
        });
        assert_eq!(appender.path(), "/tmp/callerlog-test.log");
    }
}
