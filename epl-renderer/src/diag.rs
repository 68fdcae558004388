/// Sink for human readable diagnostics emitted while rendering.
pub trait Diagnostics {
    fn report(&mut self, message: &str);
}

/// Forwards diagnostics to the `log` crate.
#[derive(Debug, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report(&mut self, message: &str) {
        log::warn!("{message}");
    }
}

/// Collects diagnostics in memory for later inspection.
#[derive(Debug, Default)]
pub struct CollectDiagnostics {
    pub messages: Vec<String>,
}

impl Diagnostics for CollectDiagnostics {
    fn report(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
