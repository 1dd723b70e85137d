//! Shared in-memory character stream.

use std::{
    io::{self, Write},
    sync::{Arc, Mutex},
};

/// An `io::Write` sink whose clones share one buffer.
///
/// Hand a clone to `RunParameters` or `VerboseStream` and read the text back
/// from the handle the test kept.
#[derive(Debug, Clone, Default)]
pub struct MemoryStream {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemoryStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded.
    pub fn text(&self) -> String {
        self.buffer
            .lock()
            .map(|b| String::from_utf8_lossy(&b).into_owned())
            .unwrap_or_default()
    }
}

impl Write for MemoryStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut buffer = self
            .buffer
            .lock()
            .map_err(|_| io::Error::other("memory stream lock poisoned"))?;
        buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_text() {
        let stream = MemoryStream::new();
        let mut writer = stream.clone();
        writer.write_all(b"a\nb").unwrap();
        assert_eq!(stream.text(), "a\nb");
    }

    #[test]
    fn new_stream_is_empty() {
        assert!(MemoryStream::new().text().is_empty());
    }
}
