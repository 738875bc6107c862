pub mod calendar;
pub mod holiday_cache;
pub mod lead_time;
pub mod messages;
pub mod workday;
