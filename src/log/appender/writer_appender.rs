use crate::log::appender::LogAppender;
use anyhow::Result;
use std::io::Write;
use std::sync::{Mutex, PoisonError};

/// 任意 `io::Write` 输出器
pub struct WriterAppender<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterAppender<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// 取回内部的 writer
    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> LogAppender for WriterAppender<W> {
    fn append(&self, formatted_message: &str) -> Result<()> {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(formatted_message.as_bytes())?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"))
        }
    }

    #[test]
    fn test_writer_appender_append() -> Result<()> {
        let appender = WriterAppender::new(Vec::new());
        appender.append("first\n")?;
        appender.append("second\n")?;
        appender.flush()?;

        assert_eq!(appender.into_inner(), b"first\nsecond\n");
        Ok(())
    }

    #[test]
    fn test_writer_appender_error() {
        let appender = WriterAppender::new(BrokenWriter);

        let err = appender.append("lost\n").unwrap_err();
        assert!(err.to_string().contains("broken pipe"));
        assert!(appender.flush().is_err());
    }
}
