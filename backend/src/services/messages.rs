//! Display strings for computed lead times. No business rules live here.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::workday::{FeasibilityTable, WorkdaySequence};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct LeadTimeMessage {
    pub lead_days: u32,
    pub message: String,
}

/// 24-hour cutoff as `"12PM"`, `"9AM"`, `"5PM"`.
pub fn humanize_cutoff(hour: u32) -> String {
    match hour {
        0..=11 => format!("{}AM", hour),
        12 => "12PM".to_string(),
        _ => format!("{}PM", hour - 12),
    }
}

pub fn product_label(lead_days: u32) -> &'static str {
    match lead_days {
        1 => "one-day product",
        2 => "two-day product",
        _ => "product",
    }
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// `"Thursday 9th May, 2024"`
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{} {}{} {}",
        date.format("%A"),
        date.day(),
        ordinal_suffix(date.day()),
        date.format("%B, %Y")
    )
}

/// When work must be submitted for each lead time.
pub fn upload_messages(sequence: &WorkdaySequence, cutoff: &str) -> Vec<LeadTimeMessage> {
    sequence
        .lead_times()
        .map(|(lead_days, day)| LeadTimeMessage {
            lead_days,
            message: format!(
                "Work should be submitted before {} on {}.",
                cutoff,
                format_long_date(day.date())
            ),
        })
        .collect()
}

pub fn outcome_messages(max_lead_days: u32, cutoff: &str) -> Vec<LeadTimeMessage> {
    (1..=max_lead_days)
        .map(|lead_days| {
            let unit = if lead_days == 1 { "day" } else { "days" };
            LeadTimeMessage {
                lead_days,
                message: format!(
                    "This {} should be ordered before {} {} working {} clear of the end.",
                    product_label(lead_days),
                    cutoff,
                    lead_days,
                    unit
                ),
            }
        })
        .collect()
}

/// Order eligibility text per lead time.
pub fn eligibility_messages(
    table: &FeasibilityTable,
    sequence: &WorkdaySequence,
) -> Vec<LeadTimeMessage> {
    table
        .iter()
        .map(|(lead_days, feasible)| {
            let message = match (feasible, sequence.get(lead_days)) {
                (true, Some(day)) => format!(
                    "A {}-day lead time can be met: work completes by {}.",
                    lead_days,
                    format_long_date(day.date())
                ),
                _ => format!(
                    "A {}-day lead time cannot be met before the deadline.",
                    lead_days
                ),
            };
            LeadTimeMessage { lead_days, message }
        })
        .collect()
}
