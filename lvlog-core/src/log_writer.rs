use std::{
    fs::File,
    io::{self, Write},
    path::Path,
    sync::{Arc, Mutex, PoisonError},
};

/// Destination of rendered log lines.
///
/// Implemented for every [`Write`] type: the line goes out in a single
/// `write_all` followed by a flush.
pub trait LogWriter: Send {
    fn write_line(&mut self, line: &str) -> io::Result<()>;
    fn flush(&mut self) -> io::Result<()>;
}

impl<W: Write + Send> LogWriter for W {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.write_all(line.as_bytes())?;
        Write::flush(self)
    }

    fn flush(&mut self) -> io::Result<()> {
        Write::flush(self)
    }
}

/// Opens a log file for appending, creating it if it does not exist.
pub fn open_log_file<P: AsRef<Path>>(path: P) -> Result<File, io::Error> {
    File::options().create(true).append(true).open(path)
}

/// In-memory sink whose clones share one buffer.
///
/// Hand one clone to a logger state and keep another to inspect the output.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Vec<u8> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Buffer contents, lossily decoded as UTF-8.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.contents()).into_owned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_log_file() {
    let path = std::env::temp_dir().join(format!("lvlog_test_log_file_{}.log", std::process::id()));
    std::fs::remove_file(&path).ok();
    let mut file = open_log_file(&path).unwrap();
    file.write_line("Hello, world!\n").unwrap();
    drop(file);
    let mut file = open_log_file(&path).unwrap();
    file.write_line("rust is awesome !\n").unwrap();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "Hello, world!\nrust is awesome !\n"
    );
    std::fs::remove_file(&path).ok();
}

#[test]
fn test_shared_buffer() {
    let buffer = SharedBuffer::new();
    let mut writer = buffer.clone();
    assert!(buffer.is_empty());
    writer.write_line("one\n").unwrap();
    writer.write_line("two\n").unwrap();
    assert_eq!(buffer.to_string_lossy(), "one\ntwo\n");
    assert_eq!(buffer.len(), 8);
    buffer.clear();
    assert!(writer.is_empty());
}
