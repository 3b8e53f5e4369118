/*!
Printing of year-months and durations.

Both [`YearMonth`] and [`Duration`] implement `Display`, which is usually
all that's needed. This module exposes [`YearMonthPrinter`] for the one knob
that `Display` doesn't: whether the calendar annotation is written.

Year-months are written as `YYYY-MM`. For calendars other than ISO 8601, the
ISO reference day is appended (`YYYY-MM-DD`), since the ISO year and month
alone don't identify a month in another calendar. Years outside `0..=9999`
are written with a sign and six digits, e.g., `-000001-05`.

Durations are written in the ISO 8601 duration format, e.g., `P1Y2M` or
`-PT3.5S`.

[`YearMonth`]: crate::civil::YearMonth
[`Duration`]: crate::Duration
*/

use alloc::string::String;

use crate::{civil::YearMonth, error::Error};

pub(crate) use self::printer::{write_duration, write_year, write_year_month};

mod printer;

/// Whether to write the calendar annotation (e.g., `[u-ca=hebrew]`) when
/// printing a year-month.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum DisplayCalendar {
    /// Write the annotation for every calendar except ISO 8601.
    #[default]
    Auto,
    /// Always write the annotation, even for ISO 8601.
    Always,
    /// Never write the annotation.
    Never,
}

/// A printer for year-months.
///
/// # Example
///
/// ```
/// use caldelta::{
///     civil::YearMonth,
///     fmt::{DisplayCalendar, YearMonthPrinter},
/// };
///
/// let ym = YearMonth::iso(2024, 5)?;
/// assert_eq!(ym.to_string(), "2024-05");
///
/// let printer = YearMonthPrinter::new().calendar(DisplayCalendar::Always);
/// assert_eq!(printer.year_month_to_string(&ym), "2024-05[u-ca=iso8601]");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct YearMonthPrinter {
    calendar: DisplayCalendar,
}

impl YearMonthPrinter {
    /// Create a new printer with the default configuration.
    #[inline]
    pub const fn new() -> YearMonthPrinter {
        YearMonthPrinter { calendar: DisplayCalendar::Auto }
    }

    /// Set when the calendar annotation is written.
    ///
    /// This defaults to [`DisplayCalendar::Auto`].
    #[inline]
    pub const fn calendar(
        self,
        calendar: DisplayCalendar,
    ) -> YearMonthPrinter {
        YearMonthPrinter { calendar }
    }

    /// Print the given year-month to a string.
    pub fn year_month_to_string(&self, ym: &YearMonth) -> String {
        let mut buf = String::new();
        // OK because writing to a `String` never fails.
        let _ = write_year_month(ym, self.calendar, &mut buf);
        buf
    }

    /// Print the given year-month to the writer given.
    ///
    /// This only returns an error when the given writer returns an error.
    pub fn print_year_month<W: core::fmt::Write>(
        &self,
        ym: &YearMonth,
        wtr: W,
    ) -> Result<(), Error> {
        write_year_month(ym, self.calendar, wtr).map_err(|_| {
            Error::from_args(format_args!(
                "an error occurred when formatting an argument"
            ))
        })
    }
}
