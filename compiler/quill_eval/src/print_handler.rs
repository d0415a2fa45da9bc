//! Destination for the `print` and `println` builtins.
//!
//! Hosts pick stdout (the default), a capture buffer for tests and
//! embedding, or a sink that drops everything. Enum dispatch keeps the call
//! static.

use parking_lot::Mutex;

/// Where printed text goes.
pub enum PrintHandlerImpl {
    /// Write to the process's stdout.
    Stdout,
    /// Append to an in-memory buffer.
    Buffer(Mutex<String>),
    /// Discard.
    Silent,
}

impl PrintHandlerImpl {
    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout => println!("{msg}"),
            Self::Buffer(buf) => {
                let mut buf = buf.lock();
                buf.push_str(msg);
                buf.push('\n');
            }
            Self::Silent => {}
        }
    }

    /// Print without newline.
    pub fn print(&self, msg: &str) {
        match self {
            Self::Stdout => print!("{msg}"),
            Self::Buffer(buf) => buf.lock().push_str(msg),
            Self::Silent => {}
        }
    }

    /// Everything captured so far. Empty for handlers that do not capture.
    pub fn output(&self) -> String {
        match self {
            Self::Buffer(buf) => buf.lock().clone(),
            Self::Stdout | Self::Silent => String::new(),
        }
    }

    /// Drop captured output.
    pub fn clear(&self) {
        if let Self::Buffer(buf) = self {
            buf.lock().clear();
        }
    }
}

/// Print handler shared between an interpreter and its host.
#[expect(
    clippy::disallowed_types,
    reason = "Arc required for SharedPrintHandler shared with the host"
)]
pub type SharedPrintHandler = std::sync::Arc<PrintHandlerImpl>;

/// Create a stdout print handler.
#[expect(
    clippy::disallowed_types,
    reason = "Arc required for SharedPrintHandler"
)]
pub fn stdout_handler() -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandlerImpl::Stdout)
}

/// Create a print handler that captures output.
#[expect(
    clippy::disallowed_types,
    reason = "Arc required for SharedPrintHandler"
)]
pub fn buffer_handler() -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandlerImpl::Buffer(Mutex::new(String::new())))
}

/// Create a print handler that discards all output.
#[expect(
    clippy::disallowed_types,
    reason = "Arc required for SharedPrintHandler"
)]
pub fn silent_handler() -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandlerImpl::Silent)
}
