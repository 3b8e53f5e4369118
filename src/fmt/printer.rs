use core::fmt::Write;

use crate::{
    civil::YearMonth, duration::Duration, fmt::DisplayCalendar, util::b,
};

/// Writes an ISO 8601 year.
///
/// Years in `0..=9999` are written as four digits. Every other year is
/// written with an explicit sign followed by six digits.
pub(crate) fn write_year<W: Write>(
    year: i32,
    mut wtr: W,
) -> core::fmt::Result {
    if (0..=9999).contains(&year) {
        write!(wtr, "{year:04}")
    } else if year < 0 {
        write!(wtr, "-{:06}", year.unsigned_abs())
    } else {
        write!(wtr, "+{year:06}")
    }
}

/// Writes a year-month, followed by its reference day for non-ISO
/// calendars and then a calendar annotation as requested.
pub(crate) fn write_year_month<W: Write>(
    ym: &YearMonth,
    calendar: DisplayCalendar,
    mut wtr: W,
) -> core::fmt::Result {
    let iso = ym.to_iso_date();
    write_year(iso.year(), &mut wtr)?;
    write!(wtr, "-{:02}", iso.month())?;
    let is_iso = ym.calendar().is_iso();
    if !is_iso {
        write!(wtr, "-{:02}", iso.day())?;
    }
    let annotate = match calendar {
        DisplayCalendar::Auto => !is_iso,
        DisplayCalendar::Always => true,
        DisplayCalendar::Never => false,
    };
    if annotate {
        write!(wtr, "[u-ca={}]", ym.calendar().id())?;
    }
    Ok(())
}

/// Writes a duration in the ISO 8601 duration format, e.g., `P1Y2MT3.5S`.
///
/// A zero duration is written as `PT0S`. Milliseconds, microseconds and
/// nanoseconds are folded into a fractional number of seconds, since ISO
/// 8601 has no designators for them.
pub(crate) fn write_duration<W: Write>(
    duration: &Duration,
    mut wtr: W,
) -> core::fmt::Result {
    if duration.sign() < 0 {
        wtr.write_str("-")?;
    }
    wtr.write_str("P")?;
    let mut any_date = false;
    for (value, designator) in [
        (duration.get_years(), "Y"),
        (duration.get_months(), "M"),
        (duration.get_weeks(), "W"),
        (duration.get_days(), "D"),
    ] {
        if value != 0 {
            write!(wtr, "{}{designator}", value.unsigned_abs())?;
            any_date = true;
        }
    }

    let nanos = i128::from(duration.get_seconds().unsigned_abs())
        * i128::from(b::NANOS_PER_SECOND)
        + i128::from(duration.get_milliseconds().unsigned_abs())
            * i128::from(b::NANOS_PER_MILLI)
        + i128::from(duration.get_microseconds().unsigned_abs())
            * i128::from(b::NANOS_PER_MICRO)
        + i128::from(duration.get_nanoseconds().unsigned_abs());
    let (hours, minutes) = (
        duration.get_hours().unsigned_abs(),
        duration.get_minutes().unsigned_abs(),
    );
    let any_time = hours != 0 || minutes != 0 || nanos != 0;
    if !any_time && any_date {
        return Ok(());
    }
    wtr.write_str("T")?;
    if hours != 0 {
        write!(wtr, "{hours}H")?;
    }
    if minutes != 0 {
        write!(wtr, "{minutes}M")?;
    }
    if nanos != 0 || !any_time {
        let per_second = i128::from(b::NANOS_PER_SECOND);
        let (seconds, fraction) = (nanos / per_second, nanos % per_second);
        write!(wtr, "{seconds}")?;
        if fraction != 0 {
            let mut digits = alloc::format!("{fraction:09}");
            while digits.ends_with('0') {
                digits.pop();
            }
            write!(wtr, ".{digits}")?;
        }
        wtr.write_str("S")?;
    }
    Ok(())
}
