/*!
Balancing of the day and sub-day components of a duration.

Days and every smaller unit have a fixed length in nanoseconds (a day is
always 24 hours here), so they can be summed into a single total and then
re-split. The total is kept in an `i128`. The largest possible sum of ten
`i64` components, each multiplied by at most the number of nanoseconds in a
day, is below `2^113`, so the accumulation never overflows.
*/

use crate::{
    duration::{Duration, DurationFields},
    error::{duration::Error as E, Error},
    util::b,
    Unit,
};

/// The day and sub-day units, ordered largest to smallest.
const TIME_UNITS: [Unit; 7] = [
    Unit::Day,
    Unit::Hour,
    Unit::Minute,
    Unit::Second,
    Unit::Millisecond,
    Unit::Microsecond,
    Unit::Nanosecond,
];

/// Returns the total number of nanoseconds in the days and sub-day units of
/// the given duration.
pub(crate) fn total_nanoseconds(duration: &Duration) -> i128 {
    TIME_UNITS.iter().fold(0i128, |total, &unit| {
        // OK because every unit in `TIME_UNITS` has a fixed length.
        let per = unit.nanoseconds().unwrap_or(0);
        total + i128::from(duration.get(unit)) * per
    })
}

/// Folds days and every sub-day unit into a whole number of days.
///
/// The remainder smaller than a day is truncated toward zero and discarded.
pub(crate) fn balance_into_days(duration: &Duration) -> Result<i64, Error> {
    let nanos = total_nanoseconds(duration);
    let days = nanos / i128::from(b::NANOS_PER_CIVIL_DAY);
    i64::try_from(days)
        .map_err(|_| Error::from(E::BalanceOverflow { unit: Unit::Day }))
}

/// Re-splits the days and sub-day units of `duration` so that no unit
/// bigger than `largest` is non-zero among them.
pub(crate) fn balance(
    duration: Duration,
    largest: Unit,
) -> Result<Duration, Error> {
    if largest.is_calendar() {
        return Err(Error::from(E::BalanceLargestUnit { unit: largest }));
    }
    let mut remaining = total_nanoseconds(&duration);
    let mut fields = DurationFields {
        years: duration.get_years(),
        months: duration.get_months(),
        weeks: duration.get_weeks(),
        ..DurationFields::default()
    };
    for unit in TIME_UNITS.into_iter().filter(|&unit| unit <= largest) {
        let per = unit.nanoseconds().unwrap_or(1);
        // Truncating division keeps every quotient and remainder on the
        // same side of zero as the total.
        let quantity = remaining / per;
        remaining %= per;
        let value = i64::try_from(quantity)
            .map_err(|_| Error::from(E::BalanceOverflow { unit }))?;
        set(&mut fields, unit, value);
    }
    trace!(
        "balanced {duration} into largest unit of {largest}",
        largest = largest.plural(),
    );
    Duration::try_from(fields)
}

fn set(fields: &mut DurationFields, unit: Unit, value: i64) {
    match unit {
        Unit::Day => fields.days = value,
        Unit::Hour => fields.hours = value,
        Unit::Minute => fields.minutes = value,
        Unit::Second => fields.seconds = value,
        Unit::Millisecond => fields.milliseconds = value,
        Unit::Microsecond => fields.microseconds = value,
        Unit::Nanosecond => fields.nanoseconds = value,
        Unit::Year | Unit::Month | Unit::Week => {}
    }
}
