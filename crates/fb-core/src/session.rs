//! Session reconstruction from the ordered event stream.
//!
//! Events are processed strictly in file order, one bucket per user.
//! Reconstruction is inherently sequential within a bucket: whether an
//! `End` closes an existing session depends on state built by earlier
//! events for the same user.

use std::collections::HashMap;

use chrono::NaiveTime;

use crate::line::{Action, InvalidTime, LogEvent};

/// One reconstructed interval of user activity.
///
/// Either side may be missing until the billing pass fills it from the
/// observed log window. Sessions are never deleted once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
}

impl Session {
    const fn started_at(time: NaiveTime) -> Self {
        Self {
            start: Some(time),
            end: None,
        }
    }

    const fn ended_at(time: NaiveTime) -> Self {
        Self {
            start: None,
            end: Some(time),
        }
    }

    /// An open session is one a later `End` event can still close.
    ///
    /// A session created by an unmatched `End` already has its end set,
    /// so it is not open even though its start is missing.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.end.is_none()
    }
}

/// All sessions reconstructed for one user, in creation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSessions {
    pub user_id: String,
    pub sessions: Vec<Session>,
}

/// Per-user session buckets, iterated in first-seen-user order.
#[derive(Debug, Default)]
pub struct SessionLog {
    users: Vec<UserSessions>,
    index: HashMap<String, usize>,
}

impl SessionLog {
    /// Applies one event to its user's bucket.
    ///
    /// `Start` always opens a brand-new session. `End` closes the
    /// earliest still-open session (first-open-session-wins), or records
    /// a new end-only session when none is open.
    pub fn record(&mut self, event: &LogEvent) -> Result<(), InvalidTime> {
        let time = event.time.to_time_of_day()?;
        let bucket = self.bucket_mut(&event.user_id);

        match event.action {
            Action::Start => bucket.sessions.push(Session::started_at(time)),
            Action::End => match bucket.sessions.iter_mut().find(|s| s.is_open()) {
                Some(open) => open.end = Some(time),
                None => bucket.sessions.push(Session::ended_at(time)),
            },
        }

        Ok(())
    }

    fn bucket_mut(&mut self, user_id: &str) -> &mut UserSessions {
        let idx = if let Some(&idx) = self.index.get(user_id) {
            idx
        } else {
            self.users.push(UserSessions {
                user_id: user_id.to_string(),
                sessions: Vec::new(),
            });
            self.index.insert(user_id.to_string(), self.users.len() - 1);
            self.users.len() - 1
        };
        &mut self.users[idx]
    }

    /// Iterates user buckets in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &UserSessions> {
        self.users.iter()
    }

    /// Consumes the log, yielding owned buckets in first-seen order.
    #[must_use]
    pub fn into_users(self) -> Vec<UserSessions> {
        self.users
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

/// Reconstructs per-user sessions from events in file order.
pub fn reconstruct<'a, I>(events: I) -> Result<SessionLog, InvalidTime>
where
    I: IntoIterator<Item = &'a LogEvent>,
{
    let mut log = SessionLog::default();
    for event in events {
        log.record(event)?;
    }
    Ok(log)
}
