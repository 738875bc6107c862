pub mod bank_holiday;
pub mod workday;
