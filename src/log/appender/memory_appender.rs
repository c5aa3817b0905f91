use crate::log::appender::LogAppender;
use anyhow::Result;
use std::sync::{Mutex, PoisonError};

/// 内存输出器
///
/// 把日志累积在内存中，主要用于测试和捕获输出
#[derive(Debug, Default)]
pub struct MemoryAppender {
    buffer: Mutex<String>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前累积的全部内容
    pub fn contents(&self) -> String {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// 清空缓冲区
    pub fn clear(&self) {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }

    /// 取出全部内容并清空缓冲区
    pub fn take(&self) -> String {
        std::mem::take(&mut *self.buffer.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner).is_empty()
    }
}

impl LogAppender for MemoryAppender {
    fn append(&self, formatted_message: &str) -> Result<()> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_str(formatted_message);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_appender_append() -> Result<()> {
        let appender = MemoryAppender::new();
        assert!(appender.is_empty());

        appender.append("first\n")?;
        appender.append("second\n")?;
        assert_eq!(appender.contents(), "first\nsecond\n");

        Ok(())
    }

    #[test]
    fn test_memory_appender_clear_and_take() -> Result<()> {
        let appender = MemoryAppender::new();
        appender.append("first\n")?;
        appender.clear();
        assert!(appender.is_empty());

        appender.append("second\n")?;
        assert_eq!(appender.take(), "second\n");
        assert_eq!(appender.contents(), "");

        Ok(())
    }
}
