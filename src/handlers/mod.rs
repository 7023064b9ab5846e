pub mod analyze;
pub mod dashboard;
pub mod demo;
pub mod entries;
pub mod export;
pub mod health;

use chrono::{Local, NaiveDate};

/// The journal's calendar day, in the server's local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
