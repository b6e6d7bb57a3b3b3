//! Module for the calendar helpers behind pickup windows and report ranges.

use chrono::{Datelike, Duration, Local, NaiveDate};
use rand::Rng;

use crate::error::{Error, invalid_argument};

/// `count` strictly increasing dates, each 1 to 30 days after the previous,
/// starting from today.
pub fn future_dates(count: usize, rng: &mut impl Rng) -> Vec<NaiveDate> {
    let mut dates = Vec::with_capacity(count);
    let mut current = Local::now().date_naive();
    for _ in 0..count {
        current += Duration::days(rng.gen_range(1..=30));
        dates.push(current);
    }
    dates
}

/// `count` strictly decreasing dates, each 1 to 30 days before the previous,
/// starting from today.
pub fn past_dates(count: usize, rng: &mut impl Rng) -> Vec<NaiveDate> {
    let mut dates = Vec::with_capacity(count);
    let mut current = Local::now().date_naive();
    for _ in 0..count {
        current -= Duration::days(rng.gen_range(1..=30));
        dates.push(current);
    }
    dates
}

/// A uniformly random date strictly after today within the current month.
/// Fails on the last day of the month.
pub fn future_date_this_month(rng: &mut impl Rng) -> Result<NaiveDate, Error> {
    let today = Local::now().date_naive();
    future_date_before(today, last_day_of_month(today), rng)
        .ok_or_else(|| invalid_argument("no days left in the current month"))
}

/// A uniformly random date strictly after today within the current year.
/// Fails on the last day of the year.
pub fn future_date_this_year(rng: &mut impl Rng) -> Result<NaiveDate, Error> {
    let today = Local::now().date_naive();
    let year_end =
        NaiveDate::from_ymd_opt(today.year(), 12, 31).expect("december 31st exists in every year");
    future_date_before(today, year_end, rng)
        .ok_or_else(|| invalid_argument("no days left in the current year"))
}

/// Renders a date the way the shipping API expects it.
pub fn to_api_string(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn future_date_before(
    today: NaiveDate,
    upper: NaiveDate,
    rng: &mut impl Rng,
) -> Option<NaiveDate> {
    let remaining = (upper - today).num_days();
    if remaining < 1 {
        return None;
    }
    Some(today + Duration::days(rng.gen_range(1..=remaining)))
}

fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).expect("the 1st exists in every month")
        - Duration::days(1)
}
