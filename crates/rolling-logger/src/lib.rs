//! Rolling Logger
//!
//! Keeps the most recent formatted log lines in a fixed-size circular
//! buffer and installs it as the global `tracing` subscriber.
//! An optional echo sink receives every line as it is written.

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Default number of retained lines
pub const DEFAULT_CAPACITY: usize = 200;

/// Line sink called for every buffered line
pub type Echo = Box<dyn Fn(&str) + Send + Sync>;

/// Logger settings
#[derive(Clone, Copy, Debug)]
pub struct LoggerConfig {
    pub capacity: usize,
    pub level: LevelFilter,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            level: LevelFilter::INFO,
        }
    }
}

/// Parse a level name (`"debug"`, `"WARN"`, `"off"`, ...)
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    name.trim().parse().ok()
}

struct Inner {
    lines: VecDeque<String>,
    capacity: usize,
    /// Total lines ever pushed; lets readers cheaply detect changes
    version: u64,
    echo: Option<Echo>,
}

/// Shared handle to the circular line buffer
#[derive(Clone)]
pub struct RollingBuffer {
    inner: Arc<Mutex<Inner>>,
}

impl RollingBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            inner: Arc::new(Mutex::new(Inner {
                lines: VecDeque::with_capacity(capacity),
                capacity,
                version: 0,
                echo: None,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panic while holding the lock leaves the buffer usable
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Forward every future line to `echo` as well
    pub fn set_echo(&self, echo: Echo) {
        self.lock().echo = Some(echo);
    }

    /// Append one line, evicting the oldest when full
    pub fn push(&self, line: impl Into<String>) {
        let line = line.into();
        let mut inner = self.lock();
        if let Some(echo) = &inner.echo {
            echo(&line);
        }
        if inner.lines.len() == inner.capacity {
            inner.lines.pop_front();
        }
        inner.lines.push_back(line);
        inner.version += 1;
    }

    /// Oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lock().lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().lines.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.lock().capacity
    }

    pub fn version(&self) -> u64 {
        self.lock().version
    }

    pub fn clear(&self) {
        self.lock().lines.clear();
    }
}

/// Collects one formatted event and pushes it line by line on drop
pub struct LineWriter {
    buffer: RollingBuffer,
    pending: Vec<u8>,
}

impl io::Write for LineWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for LineWriter {
    fn drop(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let text = String::from_utf8_lossy(&self.pending);
        let stamp = chrono::Local::now().format("%H:%M:%S%.3f");
        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            self.buffer.push(format!("{} {}", stamp, line));
        }
    }
}

impl<'a> MakeWriter<'a> for RollingBuffer {
    type Writer = LineWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LineWriter {
            buffer: self.clone(),
            pending: Vec::new(),
        }
    }
}

static GLOBAL: OnceLock<RollingBuffer> = OnceLock::new();

/// Install the rolling buffer as the global subscriber.
///
/// Only the first call installs; later calls return the same buffer and
/// ignore `config`.
pub fn init(config: LoggerConfig) -> RollingBuffer {
    GLOBAL
        .get_or_init(|| {
            let buffer = RollingBuffer::new(config.capacity);
            let installed = tracing_subscriber::fmt()
                .with_writer(buffer.clone())
                .with_ansi(false)
                .without_time()
                .with_target(true)
                .with_max_level(config.level)
                .try_init();
            if installed.is_err() {
                buffer.push("rolling-logger: another subscriber is already installed");
            }
            buffer
        })
        .clone()
}

/// Buffer installed by [`init`], if any
pub fn global() -> Option<RollingBuffer> {
    GLOBAL.get().cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_evicts_oldest_when_full() {
        let buffer = RollingBuffer::new(3);
        for i in 0..5 {
            buffer.push(format!("line {}", i));
        }
        assert_eq!(buffer.lines(), vec!["line 2", "line 3", "line 4"]);
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.version(), 5);
    }

    #[test]
    fn test_zero_capacity_keeps_one_line() {
        let buffer = RollingBuffer::new(0);
        buffer.push("a");
        buffer.push("b");
        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.lines(), vec!["b"]);
    }

    #[test]
    fn test_writer_splits_lines_on_drop() {
        let buffer = RollingBuffer::new(10);
        {
            let mut w = buffer.make_writer();
            w.write_all(b"first\nsecond\n\n").unwrap();
            assert!(buffer.is_empty());
        }
        let lines = buffer.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" first"));
        assert!(lines[1].ends_with(" second"));
    }

    #[test]
    fn test_echo_sees_every_line() {
        static SEEN: AtomicUsize = AtomicUsize::new(0);
        let buffer = RollingBuffer::new(1);
        buffer.set_echo(Box::new(|_| {
            SEEN.fetch_add(1, Ordering::SeqCst);
        }));
        buffer.push("a");
        buffer.push("b");
        assert_eq!(SEEN.load(Ordering::SeqCst), 2);
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn test_clear() {
        let buffer = RollingBuffer::new(4);
        buffer.push("a");
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.version(), 1);
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::DEBUG));
        assert_eq!(parse_level(" WARN "), Some(LevelFilter::WARN));
        assert_eq!(parse_level("off"), Some(LevelFilter::OFF));
        assert_eq!(parse_level("loud"), None);
    }

    #[test]
    fn test_init_captures_events_once() {
        let buffer = init(LoggerConfig { capacity: 16, level: LevelFilter::DEBUG });
        let again = init(LoggerConfig::default());
        assert_eq!(again.capacity(), 16);

        tracing::info!(answer = 42, "hello from test");
        assert!(buffer.lines().iter().any(|l| l.contains("hello from test") && l.contains("answer=42")));
        assert!(global().is_some());
    }
}
