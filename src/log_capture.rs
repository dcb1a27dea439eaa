// ABOUTME: Test helper that records formatted tracing output in memory.
// ABOUTME: Lets tests assert on what was logged and at which level.

use std::io;
use std::sync::{Arc, Mutex};

use tracing::dispatcher::DefaultGuard;

/// Shared buffer the test subscriber writes into.
#[derive(Clone, Default)]
pub(crate) struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Everything logged so far, without ANSI colours.
    pub(crate) fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Install a capturing subscriber for the current thread.
///
/// Logging is captured until the returned guard is dropped. Tests using this
/// must run on a single-threaded runtime (the `#[tokio::test]` default).
pub(crate) fn capture_logs() -> (CapturedLogs, DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    (logs, tracing::subscriber::set_default(subscriber))
}
