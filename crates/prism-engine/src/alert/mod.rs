//! User-visible failure notifications.
//!
//! Raised for failures that leave the application unable to draw anything,
//! as opposed to diagnostics that only go to the log.

/// Sink for user-facing alerts.
pub trait Alert {
    fn alert(&mut self, message: &str);
}

/// Reports alerts through the `log` facade at error level.
#[derive(Debug, Default, Copy, Clone)]
pub struct LogAlert;

impl Alert for LogAlert {
    fn alert(&mut self, message: &str) {
        log::error!("{message}");
    }
}

/// Keeps every alert message; for embedding and tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingAlert {
    messages: Vec<String>,
}

impl RecordingAlert {
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl Alert for RecordingAlert {
    fn alert(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
