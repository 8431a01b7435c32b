/// Blocking validation notification, in the alert-dialog sense.
pub trait AlertSink {
    fn alert(&mut self, message: &str);
}

/// Writes alerts to stderr for headless hosts.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrAlertSink;

impl AlertSink for StderrAlertSink {
    fn alert(&mut self, message: &str) {
        eprintln!("{message}");
    }
}
