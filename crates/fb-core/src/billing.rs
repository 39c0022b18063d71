//! Billable time aggregation with window boundary fill.

use chrono::NaiveTime;
use rayon::prelude::*;
use serde::Serialize;

use crate::session::{SessionLog, UserSessions};

/// Times of the first and last valid parsed lines anywhere in the log,
/// regardless of which user they belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogWindow {
    pub first: NaiveTime,
    pub last: NaiveTime,
}

/// Aggregated billing record for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserBilling {
    pub user_id: String,
    pub session_count: usize,
    /// Sum of whole-second session durations. Signed: an end time logged
    /// before its paired start contributes a negative term, uncorrected.
    pub billable_seconds: i64,
}

/// Fills missing session boundaries from the window and totals each user.
///
/// A session with no recorded start is assumed to have begun before the
/// observed window; one with no recorded end is assumed still open at the
/// window's close. Users are billed in parallel but keep first-seen order
/// in the output.
pub fn bill(log: SessionLog, window: LogWindow) -> Vec<UserBilling> {
    log.into_users()
        .into_par_iter()
        .map(|user| bill_user(user, window))
        .collect()
}

fn bill_user(user: UserSessions, window: LogWindow) -> UserBilling {
    let session_count = user.sessions.len();
    let billable_seconds = user
        .sessions
        .iter()
        .map(|session| {
            let start = session.start.unwrap_or(window.first);
            let end = session.end.unwrap_or(window.last);
            (end - start).num_seconds()
        })
        .sum();

    UserBilling {
        user_id: user.user_id,
        session_count,
        billable_seconds,
    }
}
