use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard};

static BUFFER: Mutex<Option<Vec<u8>>> = Mutex::new(None);

fn buffer() -> MutexGuard<'static, Option<Vec<u8>>> {
    BUFFER.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Activate buffering. While active, log output is stored instead of
/// being printed to stderr.
pub fn activate() {
    *buffer() = Some(Vec::new());
}

/// Deactivate buffering and return all collected lines.
pub fn drain() -> Vec<String> {
    buffer()
        .take()
        .map(|bytes| {
            String::from_utf8_lossy(&bytes)
                .lines()
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Deactivate buffering and print everything collected to stderr.
pub fn flush_to_stderr() {
    for line in drain() {
        eprintln!("{}", line);
    }
}

/// Stderr writer that respects the buffer. Used as the log writer.
#[derive(Debug, Default, Clone, Copy)]
pub struct BufferedStderr;

/// Writer factory for `tracing_subscriber::fmt().with_writer(..)`
pub fn writer() -> BufferedStderr {
    BufferedStderr
}

impl Write for BufferedStderr {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        let mut guard = buffer();
        if let Some(buf) = guard.as_mut() {
            buf.extend_from_slice(bytes);
            Ok(bytes.len())
        } else {
            drop(guard);
            io::stderr().write(bytes)
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        if buffer().is_some() {
            Ok(())
        } else {
            io::stderr().flush()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test covers the whole lifecycle: the buffer is process-global.
    #[test]
    fn test_buffer_lifecycle() {
        activate();
        let mut w = writer();
        w.write_all(b"first line\nsecond").unwrap();
        w.write_all(b" line\n").unwrap();

        let lines = drain();
        assert_eq!(lines, vec!["first line", "second line"]);

        // Inactive: nothing is collected
        assert!(drain().is_empty());
    }
}
