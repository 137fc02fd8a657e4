pub mod assignment;
pub mod attendance;
pub mod occurrence;
pub mod schedule;
