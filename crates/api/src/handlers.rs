pub mod statistics;
pub mod timetable;
