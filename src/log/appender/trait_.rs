use anyhow::Result;

/// 日志输出器 trait
///
/// 负责将格式化后的日志原样写入目标介质，不追加换行
pub trait LogAppender: Send + Sync {
    /// 输出日志
    fn append(&self, formatted_message: &str) -> Result<()>;

    /// 刷新缓冲区（默认实现为空操作）
    fn flush(&self) -> Result<()> {
        Ok(())
    }
}
