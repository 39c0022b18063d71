//! Core domain logic for fair billing.
//!
//! This crate turns a session-activity log into per-user billing totals:
//! - Line parsing: `HH:MM:SS <userId> <Action>` lines into typed events
//! - Session reconstruction: pairing Start/End events per user
//! - Billing: boundary fill against the observed log window and totalling

pub mod billing;
pub mod diagnostics;
pub mod line;
pub mod pipeline;
pub mod session;

pub use billing::{LogWindow, UserBilling, bill};
pub use diagnostics::{DiagnosticSink, TracingSink};
pub use line::{Action, InvalidTime, LineFormatError, LogEvent, TimeFields, parse_line};
pub use pipeline::process_log;
pub use session::{Session, SessionLog, UserSessions, reconstruct};
