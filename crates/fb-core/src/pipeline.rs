//! Single-pass orchestration: parse, reconstruct, bill.

use crate::billing::{LogWindow, UserBilling, bill};
use crate::diagnostics::DiagnosticSink;
use crate::line::{InvalidTime, LogEvent, parse_line};
use crate::session::reconstruct;

/// Processes a complete log into per-user billing records.
///
/// Invalid lines are reported to `sink` and skipped; a pattern-valid line
/// with an impossible time of day aborts the run. Zero valid lines yield
/// an empty result set.
pub fn process_log<I, L, S>(lines: I, sink: &mut S) -> Result<Vec<UserBilling>, InvalidTime>
where
    I: IntoIterator<Item = L>,
    L: AsRef<str>,
    S: DiagnosticSink + ?Sized,
{
    let mut events: Vec<LogEvent> = Vec::new();
    for (number, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        match parse_line(line) {
            Ok(event) => events.push(event),
            Err(error) => sink.invalid_line(number + 1, line, &error),
        }
    }

    let (Some(first), Some(last)) = (events.first(), events.last()) else {
        return Ok(Vec::new());
    };

    // The window is fixed before reconstruction: missing session
    // boundaries are filled only once the whole log has been scanned.
    let window = LogWindow {
        first: first.time.to_time_of_day()?,
        last: last.time.to_time_of_day()?,
    };

    tracing::debug!(events = events.len(), "parsed log");

    let sessions = reconstruct(&events)?;
    Ok(bill(sessions, window))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_LOG: &[&str] = &[
        "14:02:03 ABC123 Start",
        "14:02:05 XYZ456 Start",
        "14:02:34 XYZ456 End",
        "14:02:58 ABC123 End",
        "14:03:02 DEF456 Start",
        "14:03:33 DEF456 Start",
        "14:03:35 DEF456 End",
    ];

    fn run(lines: &[&str]) -> (Vec<UserBilling>, Vec<String>) {
        let mut sink: Vec<String> = Vec::new();
        let results = process_log(lines.iter().copied(), &mut sink).unwrap();
        (results, sink)
    }

    #[test]
    fn sample_log_totals() {
        let (results, sink) = run(SAMPLE_LOG);
        assert!(sink.is_empty());

        let summary: Vec<(&str, usize, i64)> = results
            .iter()
            .map(|r| (r.user_id.as_str(), r.session_count, r.billable_seconds))
            .collect();
        // DEF456: the End at 14:03:35 closes the earliest open session
        // (14:03:02, 33s); the second Start fills to the last timestamp
        // in the file (14:03:35, 2s).
        assert_eq!(
            summary,
            vec![("ABC123", 1, 55), ("XYZ456", 1, 29), ("DEF456", 2, 35)]
        );
    }

    #[test]
    fn empty_input_yields_no_results() {
        let (results, sink) = run(&[]);
        assert!(results.is_empty());
        assert!(sink.is_empty());
    }

    #[test]
    fn all_invalid_input_yields_no_results() {
        let (results, sink) = run(&["", "not a log line", "14:02:03 ABC123 Stop"]);
        assert!(results.is_empty());
        assert_eq!(sink.len(), 3);
    }

    #[test]
    fn invalid_lines_are_skipped_with_one_diagnostic_each() {
        let (results, sink) = run(&[
            "14:02:03 ABC123 Start",
            "garbage",
            "",
            "14:02:58 ABC123 End",
        ]);
        assert_eq!(sink.len(), 2);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].billable_seconds, 55);
    }

    #[test]
    fn invalid_lines_do_not_shift_the_window() {
        // The trailing garbage line must not become the last timestamp;
        // the open session fills to 14:02:10.
        let (results, _sink) = run(&[
            "14:02:03 ABC123 Start",
            "14:02:10 XYZ456 Start",
            "99:99:99 bad line",
        ]);
        assert_eq!(results[0].billable_seconds, 7);
        assert_eq!(results[1].billable_seconds, 0);
    }

    #[test]
    fn out_of_range_time_is_fatal() {
        let mut sink: Vec<String> = Vec::new();
        let result = process_log(["14:61:00 ABC123 Start"], &mut sink);
        assert!(result.is_err());
        // The line matched the shape, so no diagnostic was emitted.
        assert!(sink.is_empty());
    }

    #[test]
    fn single_start_fills_to_last_timestamp() {
        let (results, _sink) = run(&[
            "14:00:00 ABC123 Start",
            "14:00:30 XYZ456 Start",
            "14:00:40 XYZ456 End",
        ]);
        assert_eq!(results[0].session_count, 1);
        assert_eq!(results[0].billable_seconds, 40);
    }

    #[test]
    fn single_end_fills_from_first_timestamp() {
        let (results, _sink) = run(&[
            "14:00:00 XYZ456 Start",
            "14:00:30 ABC123 End",
            "14:00:40 XYZ456 End",
        ]);
        let abc = results.iter().find(|r| r.user_id == "ABC123").unwrap();
        assert_eq!(abc.session_count, 1);
        assert_eq!(abc.billable_seconds, 30);
    }
}
