use crate::utils::error::Result;
use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime};

pub fn iso_date_format(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn ym_date_format(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

pub fn iso_date_time_format(date: NaiveDateTime) -> String {
    date.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Parses a "yyyy-MM" string to the first day of that month.
pub fn parse_year_month(text: &str) -> Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(&format!("{}-01", text), "%Y-%m-%d")?;
    Ok(date)
}

pub fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

pub fn month_end(date: NaiveDate) -> NaiveDate {
    month_start(date)
        .checked_add_months(Months::new(1))
        .and_then(|d| d.checked_sub_days(Days::new(1)))
        .unwrap_or(date)
}

/// A month boundary in the two forms the UI needs: a human readable date and
/// the value sent to the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthBounds {
    pub readable: String,
    pub api: String,
}

pub fn first_of_the_month(date: NaiveDate) -> MonthBounds {
    let first = month_start(date);
    MonthBounds {
        readable: first.format("%d.%m.%Y").to_string(),
        api: iso_date_format(first),
    }
}

/// The API form is exclusive, so it points one day past the end of the month.
pub fn last_of_the_month(date: NaiveDate) -> MonthBounds {
    let last = month_end(date);
    let api = last
        .checked_add_days(Days::new(1))
        .map(iso_date_format)
        .unwrap_or_else(|| iso_date_format(last));
    MonthBounds {
        readable: last.format("%d.%m.%Y").to_string(),
        api,
    }
}
