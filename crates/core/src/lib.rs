//! # SchoolHub Core
//!
//! The computational core of the school-administration dashboard:
//!
//! - [`recurrence`] expands one-off and weekly schedules into occurrences
//! - [`conflicts`] detects occurrences competing for a room, teacher or class
//! - [`statistics`] reduces attendance marks and assignment results to summaries
//!
//! Everything here is a pure function of its arguments. Callers pass in the
//! record snapshot they hold and get a new value back; no state is kept
//! between calls, so any storage backend can supply the records.

pub mod conflicts;
pub mod errors;
pub mod models;
pub mod recurrence;
pub mod statistics;

pub use conflicts::{find_conflicts, ConflictReport};
pub use recurrence::{expand, expand_all, timetable, Expansion, Occurrences};
pub use statistics::{aggregate_attendance, aggregate_results};
