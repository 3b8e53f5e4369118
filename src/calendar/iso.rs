use alloc::vec::Vec;

use crate::{
    calendar::{Calendar, DateDuration, FieldName, Fields, Overflow},
    civil::Date,
    error::Error,
    util::b,
    Unit,
};

/// The ISO 8601 calendar. That is, the proleptic Gregorian calendar.
///
/// Field records for this calendar use the ISO year, month and day
/// directly. There are no eras.
///
/// # Example
///
/// ```
/// use caldelta::{
///     calendar::{Calendar, DateDuration, Iso8601, Overflow},
///     civil::Date,
///     Unit,
/// };
///
/// let date = Date::new(2024, 1, 31)?;
/// let next = Iso8601.date_add(
///     date,
///     DateDuration::years_months(0, 1),
///     Overflow::Constrain,
/// )?;
/// assert_eq!(next, Date::new(2024, 2, 29)?);
/// assert_eq!(
///     Iso8601.date_until(date, next, Unit::Month)?,
///     DateDuration { days: 29, ..DateDuration::default() },
/// );
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Iso8601;

impl Iso8601 {
    /// The identifier of the ISO 8601 calendar.
    pub const ID: &'static str = "iso8601";
}

impl Calendar for Iso8601 {
    fn id(&self) -> &str {
        Iso8601::ID
    }

    fn fields(&self, requested: &[FieldName]) -> Vec<FieldName> {
        requested
            .iter()
            .copied()
            .filter(|name| {
                !matches!(name, FieldName::Era | FieldName::EraYear)
            })
            .collect()
    }

    fn to_fields(&self, date: Date, names: &[FieldName]) -> Fields {
        let all = Fields {
            year: Some(date.year()),
            month: Some(date.month()),
            day: Some(date.day()),
            ..Fields::new()
        };
        all.only(names)
    }

    fn date_from_fields(
        &self,
        fields: &Fields,
        overflow: Overflow,
    ) -> Result<Date, Error> {
        let year = Fields::require(fields.year, FieldName::Year)?;
        let month = Fields::require(fields.month, FieldName::Month)?;
        let day = Fields::require(fields.day, FieldName::Day)?;
        match overflow {
            Overflow::Reject => Date::new(year, month, day),
            Overflow::Constrain => {
                let year = b::check_year(year)?;
                let month = month.clamp(1, 12);
                Date::constrain(year, month, day)
            }
        }
    }

    fn date_add(
        &self,
        date: Date,
        duration: DateDuration,
        overflow: Overflow,
    ) -> Result<Date, Error> {
        date.iso_add(duration, overflow)
    }

    fn date_until(
        &self,
        date1: Date,
        date2: Date,
        largest: Unit,
    ) -> Result<DateDuration, Error> {
        date1.iso_until(date2, largest)
    }

    fn days_in_month(&self, date: Date) -> i8 {
        date.days_in_month()
    }
}
