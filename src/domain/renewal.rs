//! Renewal scheduling for monthly subscriptions.
//!
//! A client's due date is a recurring day-of-month anchor, not a calendar
//! date. Everything here is a pure function of the client snapshot and
//! "today"; callers recompute on every data load and nothing is persisted.

use chrono::{Datelike, NaiveDate};

use crate::domain::models::client::Client;

/// Alerting window: a client is notified when due today or tomorrow.
pub const NOTIFICATION_WINDOW_DAYS: u32 = 1;

/// Listing window: the dashboard shows renewals due within a week.
pub const UPCOMING_WINDOW_DAYS: u32 = 7;

/// Get the number of days in a given month and year
pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Check if a year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Days until the next occurrence of `due_day`, counted from `today`.
///
/// When the due day has already passed this month, the wraparound adds the
/// *current* month's length rather than the next month's. That is how the
/// system has always behaved, and callers depend on it, so it is kept as-is.
/// A `due_day` larger than the current month's length is not clamped either:
/// day 30 in February is simply "2 days away" on the 28th.
pub fn days_until_due(due_day: u32, today: NaiveDate) -> u32 {
    let current_day = today.day();
    let mut diff = due_day as i64 - current_day as i64;
    if diff < 0 {
        diff += days_in_month(today.month(), today.year()) as i64;
    }
    diff as u32
}

/// Human-readable renewal label for a days-until-due value.
pub fn renewal_text(days: u32) -> String {
    match days {
        0 => "Due today".to_string(),
        1 => "Due tomorrow".to_string(),
        n => format!("Due in {} days", n),
    }
}

/// A payment alert for a client due today or tomorrow.
#[derive(Debug, Clone, PartialEq)]
pub struct RenewalNotice {
    /// Stable notice id, `<client_id>-notification`, so the embedding UI can
    /// dismiss and re-derive notices without duplication.
    pub id: String,
    pub client_id: String,
    pub message: String,
}

/// Build the payment alerts for `today`: active clients whose due day is
/// today or tomorrow.
pub fn due_notifications(clients: &[Client], today: NaiveDate) -> Vec<RenewalNotice> {
    clients
        .iter()
        .filter(|client| client.is_active())
        .filter_map(|client| {
            let days = days_until_due(client.due_date, today);
            if days > NOTIFICATION_WINDOW_DAYS {
                return None;
            }
            let message = if days == 0 {
                format!("Payment for {} is due TODAY.", client.name)
            } else {
                format!("Payment for {} is due TOMORROW.", client.name)
            };
            Some(RenewalNotice {
                id: format!("{}-notification", client.id),
                client_id: client.id.clone(),
                message,
            })
        })
        .collect()
}

/// A dashboard row for a renewal inside the upcoming window.
#[derive(Debug, Clone, PartialEq)]
pub struct UpcomingRenewal {
    pub client: Client,
    pub days_until_due: u32,
}

/// Active clients due within [`UPCOMING_WINDOW_DAYS`], soonest first.
/// Ties keep the input order (stable sort).
pub fn upcoming_renewals(clients: &[Client], today: NaiveDate) -> Vec<UpcomingRenewal> {
    let mut upcoming: Vec<UpcomingRenewal> = clients
        .iter()
        .filter(|client| client.is_active())
        .map(|client| UpcomingRenewal {
            days_until_due: days_until_due(client.due_date, today),
            client: client.clone(),
        })
        .filter(|renewal| renewal.days_until_due <= UPCOMING_WINDOW_DAYS)
        .collect();
    upcoming.sort_by_key(|renewal| renewal.days_until_due);
    upcoming
}
