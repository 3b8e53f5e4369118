/*!
A module for constants and the bounds checks built on top of them.

All conversion factors between clock units are defined here as `i64`
values. Callers that combine them with large quantities widen to `i128`
first, which is enough to hold any 64-bit duration component expressed in
nanoseconds without overflow.
*/

use crate::Error;

pub(crate) const NANOS_PER_MICRO: i64 = 1_000;
pub(crate) const NANOS_PER_MILLI: i64 = 1_000 * NANOS_PER_MICRO;
pub(crate) const NANOS_PER_SECOND: i64 = 1_000 * NANOS_PER_MILLI;
pub(crate) const NANOS_PER_MINUTE: i64 = 60 * NANOS_PER_SECOND;
pub(crate) const NANOS_PER_HOUR: i64 = 60 * NANOS_PER_MINUTE;
pub(crate) const NANOS_PER_CIVIL_DAY: i64 = 24 * NANOS_PER_HOUR;

pub(crate) const DAYS_PER_WEEK: i64 = 7;
pub(crate) const MONTHS_PER_YEAR: i64 = 12;

/// The smallest ISO year supported.
pub(crate) const YEAR_MIN: i32 = -271_821;
/// The biggest ISO year supported.
pub(crate) const YEAR_MAX: i32 = 275_760;

/// The smallest ISO year-month supported.
pub(crate) const YEAR_MONTH_MIN: (i32, i8) = (YEAR_MIN, 4);
/// The biggest ISO year-month supported.
pub(crate) const YEAR_MONTH_MAX: (i32, i8) = (YEAR_MAX, 9);

/// Checks that the given ISO year is in the supported range.
pub(crate) fn check_year(year: impl Into<i64>) -> Result<i32, Error> {
    let year = year.into();
    if !(i64::from(YEAR_MIN)..=i64::from(YEAR_MAX)).contains(&year) {
        return Err(Error::range("year", year, YEAR_MIN, YEAR_MAX));
    }
    // OK because we just checked it fits.
    Ok(year as i32)
}

/// Checks that the given ISO month is in the range `1..=12`.
pub(crate) fn check_month(month: impl Into<i64>) -> Result<i8, Error> {
    let month = month.into();
    if !(1..=MONTHS_PER_YEAR).contains(&month) {
        return Err(Error::range("month", month, 1, MONTHS_PER_YEAR));
    }
    Ok(month as i8)
}

/// Checks that the given day is valid for the given ISO year and month.
pub(crate) fn check_day(
    year: i32,
    month: i8,
    day: impl Into<i64>,
) -> Result<i8, Error> {
    let day = day.into();
    let max = days_in_month(year, month);
    if !(1..=i64::from(max)).contains(&day) {
        return Err(Error::range("day", day, 1, max));
    }
    Ok(day as i8)
}

/// Returns true if the given ISO year is a leap year.
pub(crate) fn is_leap_year(year: i32) -> bool {
    // From: https://github.com/BurntSushi/jiff/pull/23
    let d = if year % 25 != 0 { 4 } else { 16 };
    (year % d) == 0
}

/// Returns the number of days in the given ISO year and month.
pub(crate) fn days_in_month(year: i32, month: i8) -> i8 {
    if month == 2 {
        if is_leap_year(year) {
            29
        } else {
            28
        }
    } else {
        30 | (month ^ month >> 3)
    }
}

/// Returns the number of days in the given ISO year.
pub(crate) fn days_in_year(year: i32) -> i16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Converts an ISO date to a number of days since the Unix epoch.
///
/// This uses the algorithm from Howard Hinnant's `days_from_civil`, with
/// the era computation done on 64-bit integers so that every supported year
/// is in range.
///
/// Ref: http://howardhinnant.github.io/date_algorithms.html
pub(crate) fn to_unix_epoch_days(year: i32, month: i8, day: i8) -> i64 {
    let year = i64::from(year);
    let month = i64::from(month);
    let day = i64::from(day);

    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let year_of_era = year.rem_euclid(400);
    let day_of_year = (153 * (month + if month > 2 { -3 } else { 9 }) + 2)
        / 5
        + day
        - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100
        + day_of_year;
    era * 146_097 + day_of_era - 719_468
}

/// Converts a number of days since the Unix epoch to an ISO date.
///
/// This is the inverse of `to_unix_epoch_days`, again taken from Howard
/// Hinnant's `civil_from_days`.
///
/// Ref: http://howardhinnant.github.io/date_algorithms.html
pub(crate) fn from_unix_epoch_days(days: i64) -> (i64, i8, i8) {
    let days = days + 719_468;
    let era = days.div_euclid(146_097);
    let day_of_era = days.rem_euclid(146_097);
    let year_of_era = (day_of_era - day_of_era / 1_460 + day_of_era / 36_524
        - day_of_era / 146_096)
        / 365;
    let year = year_of_era + era * 400;
    let day_of_year =
        day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let mp = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = if month <= 2 { year + 1 } else { year };
    // OK because `day` is always in 1..=31 and `month` in 1..=12.
    (year, month as i8, day as i8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_days_roundtrip_around_epoch() {
        assert_eq!(to_unix_epoch_days(1970, 1, 1), 0);
        assert_eq!(to_unix_epoch_days(1969, 12, 31), -1);
        assert_eq!(to_unix_epoch_days(2000, 3, 1), 11_017);
        assert_eq!(from_unix_epoch_days(0), (1970, 1, 1));
        assert_eq!(from_unix_epoch_days(11_017), (2000, 3, 1));
    }

    #[test]
    fn epoch_days_roundtrip_at_limits() {
        for &(y, m, d) in
            &[(YEAR_MIN, 1, 1), (YEAR_MAX, 12, 31), (-4, 2, 29), (0, 2, 29)]
        {
            let days = to_unix_epoch_days(y, m, d);
            assert_eq!(from_unix_epoch_days(days), (i64::from(y), m, d));
        }
    }

    #[test]
    fn month_lengths() {
        let lengths: [i8; 12] =
            [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (i, &len) in lengths.iter().enumerate() {
            assert_eq!(days_in_month(2021, i as i8 + 1), len);
        }
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
    }

    #[test]
    fn bounds() {
        assert!(check_year(YEAR_MAX + 1).is_err());
        assert!(check_month(0).is_err());
        assert!(check_day(2021, 2, 29).is_err());
        assert_eq!(check_day(2024, 2, 29).unwrap(), 29);
    }
}
