//! Deterministic random sources and log capture for unit tests.

use hippodrome_env::RandomSource;
use std::io;
use std::sync::{Arc, Mutex};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// Returns a scripted sequence of draws and records every requested range.
pub struct ScriptedDraw {
    values: Vec<f64>,
    pub calls: Vec<(f64, f64)>,
}

impl ScriptedDraw {
    /// Always returns `value`.
    pub fn fixed(value: f64) -> Self {
        Self::sequence(vec![value])
    }

    /// Returns `values` in order, repeating the last one once exhausted.
    pub fn sequence(values: Vec<f64>) -> Self {
        assert!(!values.is_empty());
        Self {
            values,
            calls: Vec::new(),
        }
    }
}

impl RandomSource for ScriptedDraw {
    fn random_double(&mut self, min: f64, max: f64) -> f64 {
        let idx = self.calls.len().min(self.values.len() - 1);
        self.calls.push((min, max));
        self.values[idx]
    }
}

/// In-memory sink for formatted log lines.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs `f` under a thread-local subscriber and returns what it logged.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .without_time()
        .with_writer(buffer.clone())
        .finish();

    let out = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8_lossy(&buffer.0.lock().unwrap()).into_owned();
    (out, logs)
}
