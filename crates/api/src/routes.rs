pub mod health;
pub mod statistics;
pub mod timetable;
