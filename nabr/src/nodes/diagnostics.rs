use log::{info, warn};

/// Side channel through which nodes report to the host.
pub trait DiagnosticsSink {
    /// User-visible warning. Also appended to the log.
    fn warn(&mut self, message: &str);

    /// Append-only log of what the nodes attempted.
    fn log(&mut self, message: &str);
}

/// Keeps every diagnostic in memory, for the lifetime of a session.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub warnings: Vec<String>,
    pub log: Vec<String>,
}

impl DiagnosticsSink for RecordingSink {
    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
        self.log.push(message.to_string());
    }

    fn log(&mut self, message: &str) {
        self.log.push(message.to_string());
    }
}

/// Forwards diagnostics to the [`log`] facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticsSink for LogSink {
    fn warn(&mut self, message: &str) {
        warn!("{message}");
    }

    fn log(&mut self, message: &str) {
        info!("{message}");
    }
}
