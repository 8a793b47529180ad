#![allow(dead_code)]

use captain::{Captain, Settings};
use std::{
    io,
    sync::{Arc, Mutex},
};

// ============================================================================
// Test Types
// ============================================================================

pub type Args = Vec<String>;

pub fn quiet<R: 'static>() -> Captain<R> {
    Captain::with_settings(&Settings::default())
}

pub fn strings(items: &[&str]) -> Args {
    items.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// Test Orders and Inspections
// ============================================================================

pub fn echo(args: &[String], _ctx: &Captain<Args>) -> Args {
    args.to_vec()
}

pub fn tagged(
    tag: &'static str,
) -> impl Fn(&[String], &Captain<String>) -> String + Send + Sync + 'static {
    move |_, _| tag.to_string()
}

/// Records which inspections ran, in the order they ran.
#[derive(Clone, Default)]
pub struct InspectionLog {
    entries: Arc<Mutex<Vec<&'static str>>>,
}

impl InspectionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tag<R: 'static>(&self, id: &'static str) -> impl Fn(R) -> R + Send + Sync + 'static {
        let entries = self.entries.clone();
        move |response| {
            entries.lock().unwrap().push(id);
            response
        }
    }

    pub fn entries(&self) -> Vec<&'static str> {
        self.entries.lock().unwrap().clone()
    }
}

// ============================================================================
// Log Capture
// ============================================================================

/// Shared buffer a `fmt` subscriber writes into.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` under a thread-local subscriber and return what it logged at
/// `WARN` and above.
pub fn capture_warnings(f: impl FnOnce()) -> String {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8_lossy(&bytes).into_owned()
}
