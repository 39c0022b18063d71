//! Diagnostic reporting for skipped input lines.

use crate::line::LineFormatError;

/// Receives one message per invalid input line.
///
/// Invalid lines are skipped, never fatal. The sink is injected so
/// callers can route or capture the messages without global state.
pub trait DiagnosticSink {
    fn invalid_line(&mut self, line_number: usize, line: &str, error: &LineFormatError);
}

/// Default sink: one `tracing` warning per skipped line.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn invalid_line(&mut self, line_number: usize, line: &str, error: &LineFormatError) {
        tracing::warn!(line_number, line, %error, "skipping invalid line");
    }
}

/// Capture sink, mainly for tests.
impl DiagnosticSink for Vec<String> {
    fn invalid_line(&mut self, line_number: usize, line: &str, error: &LineFormatError) {
        self.push(format!("line {line_number}: {error}: `{line}`"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_sink_records_one_message_per_line() {
        let mut sink: Vec<String> = Vec::new();
        sink.invalid_line(3, "bogus", &LineFormatError::Shape);
        sink.invalid_line(4, "", &LineFormatError::Empty);
        assert_eq!(sink.len(), 2);
        assert!(sink[0].contains("line 3"));
        assert!(sink[0].contains("bogus"));
    }
}
