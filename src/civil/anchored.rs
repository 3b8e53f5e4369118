/*!
Year-month arithmetic expressed through a calendar and an anchor date.

A year-month isn't a date, but calendars only know how to do arithmetic on
dates. So every operation here first picks a day of the month to turn a
year-month into an anchor date, does the arithmetic on dates, and then
throws the day away again.

For addition, the anchor day depends on the direction. Adding moves forward
from the first day of the month. Subtracting moves backward from the last
day of the month. This way, neither direction can skid into a neighboring
month when the target month is shorter than the starting one.

For differences, both year-months are anchored at the first day of their
months, so only whole months are ever between them.
*/

use crate::{
    calendar::{FieldName, Overflow},
    civil::{YearMonth, YearMonthDifference},
    error::{
        calendar::Error as CE, round::Error as RE, Error, ErrorContext,
    },
    round::{increment, relative::YearMonthRound},
    Duration, Unit,
};

/// Adds a duration to a year-month.
///
/// Sub-day units of `duration` are balanced into whole days first, and any
/// remainder smaller than a day is dropped.
pub(crate) fn add(
    ym: &YearMonth,
    duration: Duration,
    overflow: Overflow,
) -> Result<YearMonth, Error> {
    let calendar = ym.calendar();
    let cal = calendar.get();
    let date_duration = duration.to_date_duration()?;
    let sign = date_duration.sign();
    let day = if sign < 0 { cal.days_in_month(ym.to_iso_date()) } else { 1 };
    let anchor = calendar.anchor(ym.to_iso_date(), day)?;
    let end = cal
        .date_add(anchor, date_duration, overflow)
        .context(CE::DateAdd)?;
    trace!(
        "added {duration} to {ym} via anchor {anchor} \
         (day {day}), giving {end}",
    );
    let names = cal.fields(FieldName::YEAR_MONTH);
    let fields = cal.to_fields(end, &names);
    YearMonth::from_fields(&fields, calendar.clone(), overflow)
}

/// Returns the difference from `ym` to the year-month in `options`.
///
/// The duration returned only ever has years and months set.
pub(crate) fn until(
    ym: &YearMonth,
    options: &YearMonthDifference,
) -> Result<Duration, Error> {
    let (years, months) = difference(ym, options, options.mode)?;
    Duration::from_years_months(years, months)
}

/// Returns the difference from the year-month in `options` to `ym`.
///
/// This computes the same raw difference as `until`, anchors rounding at
/// `ym` too, but rounds with the negated mode and then negates the result.
pub(crate) fn since(
    ym: &YearMonth,
    options: &YearMonthDifference,
) -> Result<Duration, Error> {
    let (years, months) = difference(ym, options, options.mode.negate())?;
    Duration::from_years_months(-years, -months)
}

fn difference(
    ym: &YearMonth,
    options: &YearMonthDifference,
    mode: crate::RoundMode,
) -> Result<(i64, i64), Error> {
    let other = &options.other;
    if ym.calendar() != other.calendar() {
        return Err(Error::from(CE::mismatch(
            ym.calendar().id(),
            other.calendar().id(),
        )));
    }
    let (smallest, largest) = (options.smallest, options.largest);
    for unit in [smallest, largest] {
        if !matches!(unit, Unit::Year | Unit::Month) {
            return Err(Error::from(RE::NotAllowedUnit { unit }));
        }
    }
    if largest < smallest {
        return Err(Error::from(RE::LargestSmallerThanSmallest {
            smallest,
            largest,
        }));
    }
    let increment = increment::for_year_month(smallest, options.increment)?;

    let calendar = ym.calendar();
    let start = calendar.anchor(ym.to_iso_date(), 1)?;
    let end = calendar.anchor(other.to_iso_date(), 1)?;
    if start == end {
        return Ok((0, 0));
    }
    let raw = calendar
        .get()
        .date_until(start, end, largest)
        .context(CE::DateUntil)?;
    trace!(
        "raw difference from {start} to {end} with largest unit {largest} \
         is {years} years and {months} months",
        largest = largest.singular(),
        years = raw.years,
        months = raw.months,
    );
    if smallest == Unit::Month && increment == 1 {
        return Ok((raw.years, raw.months));
    }
    let round = YearMonthRound { smallest, largest, mode, increment };
    round
        .round(calendar, start, raw.years, raw.months)
        .context(RE::ForDifference)
}
