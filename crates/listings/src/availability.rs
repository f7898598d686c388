//! Availability date ranges.
//!
//! Guests type dates as `day/month/year` (e.g. `26/8/2014`). Day always comes
//! first; never read these as month-first.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use travelhome_core::{DateRangeError, ValueObject};

const DATE_FORMAT: &str = "%d/%m/%Y";

/// One calendar day within a requested range.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateEntry {
    pub date: NaiveDate,
    pub available: bool,
}

impl DateEntry {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            available: true,
        }
    }
}

impl ValueObject for DateEntry {}

/// Parse a single `day/month/year` date.
///
/// Day and month take one or two digits, the year exactly four. Surrounding
/// whitespace is ignored. Impossible dates (month 13, 31 April) are rejected.
pub fn parse_date(input: &str) -> Result<NaiveDate, DateRangeError> {
    let trimmed = input.trim();

    let year = trimmed.rsplit('/').next().unwrap_or_default();
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateRangeError::invalid_format(input));
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| DateRangeError::invalid_format(input))
}

/// Every calendar day from `start` to `end`, inclusive, in ascending order.
///
/// All-or-nothing: if either date is malformed or `end` precedes `start`, no
/// entries are returned. A one-day range (`start == end`) yields one entry.
pub fn parse_available_dates(start: &str, end: &str) -> Result<Vec<DateEntry>, DateRangeError> {
    let start_date = parse_date(start)?;
    let end_date = parse_date(end)?;

    if end_date < start_date {
        debug!(%start_date, %end_date, "rejected inverted availability range");
        return Err(DateRangeError::InvalidRange {
            start: start_date,
            end: end_date,
        });
    }

    Ok(start_date
        .iter_days()
        .take_while(|day| *day <= end_date)
        .map(DateEntry::new)
        .collect())
}

/// Mark every entry whose date is in `booked` as unavailable.
///
/// Returns how many entries flipped from available to unavailable.
pub fn mark_booked<'a, I>(entries: &mut [DateEntry], booked: I) -> usize
where
    I: IntoIterator<Item = &'a NaiveDate>,
{
    let booked: BTreeSet<NaiveDate> = booked.into_iter().copied().collect();
    let mut flipped = 0;
    for entry in entries.iter_mut().filter(|e| booked.contains(&e.date)) {
        if entry.available {
            entry.available = false;
            flipped += 1;
        }
    }
    flipped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_available_dates() {
        let result = parse_available_dates("26/8/2014", "28/8/2014").unwrap();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].date, parse_date("26/8/2014").unwrap());
        let dates: Vec<NaiveDate> = result.iter().map(|e| e.date).collect();
        assert_eq!(dates, vec![ymd(2014, 8, 26), ymd(2014, 8, 27), ymd(2014, 8, 28)]);
        assert!(result.iter().all(|e| e.available));
    }

    #[test]
    fn day_comes_before_month() {
        assert_eq!(parse_date("3/4/2014").unwrap(), ymd(2014, 4, 3));
        assert_eq!(parse_date("03/04/2014").unwrap(), ymd(2014, 4, 3));
    }

    #[test]
    fn single_day_range_has_one_entry() {
        let result = parse_available_dates("1/1/2015", "1/1/2015").unwrap();
        assert_eq!(result, vec![DateEntry::new(ymd(2015, 1, 1))]);
    }

    #[test]
    fn range_crosses_month_and_year_boundaries() {
        let result = parse_available_dates("30/12/2014", "2/1/2015").unwrap();
        let dates: Vec<NaiveDate> = result.iter().map(|e| e.date).collect();
        assert_eq!(
            dates,
            vec![ymd(2014, 12, 30), ymd(2014, 12, 31), ymd(2015, 1, 1), ymd(2015, 1, 2)]
        );
    }

    #[test]
    fn leap_day_is_included() {
        let result = parse_available_dates("28/2/2016", "1/3/2016").unwrap();
        assert_eq!(result.len(), 3);
        assert_eq!(result[1].date, ymd(2016, 2, 29));
    }

    #[test]
    fn end_before_start_is_an_invalid_range() {
        let err = parse_available_dates("28/8/2014", "26/8/2014").unwrap_err();
        assert_eq!(
            err,
            DateRangeError::InvalidRange {
                start: ymd(2014, 8, 28),
                end: ymd(2014, 8, 26),
            }
        );
    }

    #[test]
    fn invalid_month_is_a_format_error() {
        let err = parse_available_dates("31/13/2014", "1/1/2015").unwrap_err();
        assert_eq!(err, DateRangeError::invalid_format("31/13/2014"));
    }

    #[test]
    fn malformed_end_date_is_reported() {
        let err = parse_available_dates("26/8/2014", "tomorrow").unwrap_err();
        assert_eq!(err, DateRangeError::invalid_format("tomorrow"));
    }

    #[test]
    fn rejects_impossible_and_malformed_dates() {
        for input in [
            "31/4/2014",
            "29/2/2015",
            "0/1/2014",
            "26/8/14",
            "26/8/02014",
            "2014-08-26",
            "26/8",
            "26/8/2014/1",
            "",
            "aa/bb/cccc",
        ] {
            assert!(
                matches!(parse_date(input), Err(DateRangeError::InvalidDateFormat { .. })),
                "expected {input:?} to be rejected"
            );
        }
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(parse_date(" 26/8/2014\n").unwrap(), ymd(2014, 8, 26));
    }

    #[test]
    fn parsing_is_repeatable() {
        let first = parse_available_dates("26/8/2014", "28/8/2014").unwrap();
        let second = parse_available_dates("26/8/2014", "28/8/2014").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn booked_days_become_unavailable() {
        let mut entries = parse_available_dates("26/8/2014", "28/8/2014").unwrap();
        let booked = [ymd(2014, 8, 27), ymd(2014, 9, 1)];

        assert_eq!(mark_booked(&mut entries, &booked), 1);
        let flags: Vec<bool> = entries.iter().map(|e| e.available).collect();
        assert_eq!(flags, vec![true, false, true]);

        assert_eq!(mark_booked(&mut entries, &booked), 0);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn date() -> impl Strategy<Value = NaiveDate> {
            (1990i32..2100, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| ymd(y, m, d))
        }

        fn format(date: NaiveDate) -> String {
            date.format("%-d/%-m/%Y").to_string()
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: a valid range covers every day exactly once, ascending,
            /// starting at the start date.
            #[test]
            fn covers_every_day_inclusive(start in date(), span in 0i64..400) {
                let end = start + chrono::Duration::days(span);
                let entries = parse_available_dates(&format(start), &format(end)).unwrap();

                prop_assert_eq!(entries.len() as i64, span + 1);
                prop_assert_eq!(entries[0].date, start);
                prop_assert_eq!(entries[entries.len() - 1].date, end);
                for pair in entries.windows(2) {
                    prop_assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
                }
            }

            /// Property: swapping distinct start/end always yields InvalidRange.
            #[test]
            fn inverted_ranges_fail(start in date(), span in 1i64..400) {
                let end = start + chrono::Duration::days(span);
                let result = parse_available_dates(&format(end), &format(start));
                let is_invalid_range = matches!(result, Err(DateRangeError::InvalidRange { .. }));
                prop_assert!(is_invalid_range);
            }
        }
    }
}
