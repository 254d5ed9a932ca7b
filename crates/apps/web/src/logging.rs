//! `tracing` output for the browser console.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Console method a record is written with.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConsoleMethod {
    Debug,
    Log,
    Warn,
    Error,
}

impl ConsoleMethod {
    pub fn for_level(level: &Level) -> Self {
        if *level == Level::ERROR {
            ConsoleMethod::Error
        } else if *level == Level::WARN {
            ConsoleMethod::Warn
        } else if *level == Level::INFO {
            ConsoleMethod::Log
        } else {
            ConsoleMethod::Debug
        }
    }
}

/// Buffers one formatted record and hands it to the console on drop.
pub struct ConsoleWriter {
    method: ConsoleMethod,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(method: ConsoleMethod) -> Self {
        Self {
            method,
            buf: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let text = String::from_utf8_lossy(&self.buf);
        emit(self.method, text.trim_end());
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(method: ConsoleMethod, text: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(text);
    match method {
        ConsoleMethod::Debug => console::debug_1(&value),
        ConsoleMethod::Log => console::log_1(&value),
        ConsoleMethod::Warn => console::warn_1(&value),
        ConsoleMethod::Error => console::error_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_method: ConsoleMethod, text: &str) {
    eprintln!("{text}");
}

#[derive(Debug, Default, Copy, Clone)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::Log)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::for_level(meta.level()))
    }
}

/// Level names accepted in configuration, case-insensitively. Unknown
/// names yield `None`.
pub fn parse_level(name: &str) -> Option<Level> {
    name.trim().parse::<Level>().ok()
}

/// Install the console subscriber. A second call is a no-op.
pub fn init(level: Level) {
    let installed = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(level)
        .with_ansi(false)
        .without_time()
        .try_init();
    if installed.is_err() {
        tracing::debug!("console subscriber already installed");
    }
}
