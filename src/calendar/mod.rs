/*!
Pluggable calendars and the narrow interface year-month arithmetic uses to
talk to them.

The arithmetic in this crate never inspects how a calendar numbers its
years, months and days. Instead, it goes through the [`Calendar`] trait:
the calendar turns field records into dates, adds calendar durations to
dates and measures the calendar duration between two dates. Everything
specific to a calendar (leap rules, eras, month lengths) stays behind that
trait.

Dates themselves are always stored as ISO 8601 dates ([`civil::Date`]).
A calendar maps each of its own dates onto a unique ISO date.

A [`CalendarRef`] is a cheaply cloneable handle to a calendar. The ISO 8601
calendar, [`Iso8601`], is built in and is available without allocation as
[`CalendarRef::ISO`]. Any other calendar is registered by wrapping it with
[`CalendarRef::new`].

Calendars are identified by their [`Calendar::id`]. Two handles with the
same identifier are considered to be the same calendar, and handles are
ordered by identifier when two year-months with the same ISO fields need a
tiebreak.

[`civil::Date`]: crate::civil::Date
*/

use alloc::{boxed::Box, sync::Arc, vec::Vec};

use crate::{civil::Date, error::Error, Unit};

pub use self::iso::Iso8601;

mod iso;

/// The operations a calendar must provide for year-month arithmetic.
///
/// Implementations must be deterministic: the same inputs always produce the
/// same outputs. All dates passed in and returned are ISO 8601 dates that
/// the calendar interprets according to its own rules.
///
/// # Example
///
/// This shows a calendar that behaves exactly like the ISO 8601 calendar,
/// but reports a different identity. Year-months in this calendar can't be
/// compared with ISO year-months.
///
/// ```
/// use caldelta::{
///     calendar::{
///         Calendar, CalendarRef, DateDuration, FieldName, Fields, Iso8601,
///         Overflow,
///     },
///     civil::{Date, YearMonth},
///     Error, Unit,
/// };
///
/// #[derive(Debug)]
/// struct Proleptic;
///
/// impl Calendar for Proleptic {
///     fn id(&self) -> &str { "proleptic" }
///     fn to_fields(&self, date: Date, names: &[FieldName]) -> Fields {
///         Iso8601.to_fields(date, names)
///     }
///     fn date_from_fields(
///         &self,
///         fields: &Fields,
///         overflow: Overflow,
///     ) -> Result<Date, Error> {
///         Iso8601.date_from_fields(fields, overflow)
///     }
///     fn date_add(
///         &self,
///         date: Date,
///         duration: DateDuration,
///         overflow: Overflow,
///     ) -> Result<Date, Error> {
///         Iso8601.date_add(date, duration, overflow)
///     }
///     fn date_until(
///         &self,
///         date1: Date,
///         date2: Date,
///         largest: Unit,
///     ) -> Result<DateDuration, Error> {
///         Iso8601.date_until(date1, date2, largest)
///     }
///     fn days_in_month(&self, date: Date) -> i8 {
///         Iso8601.days_in_month(date)
///     }
/// }
///
/// let cal = CalendarRef::new(Proleptic);
/// let ym1 = YearMonth::new(2024, 5, cal, 1)?;
/// let ym2 = YearMonth::iso(2024, 5)?;
/// assert!(ym1.until(ym2).is_err());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Calendar: core::fmt::Debug + Send + Sync {
    /// Returns the identifier of this calendar, e.g., `iso8601`.
    fn id(&self) -> &str;

    /// Returns the fields this calendar uses, given a list of requested
    /// fields.
    ///
    /// A calendar may add fields it needs to resolve the requested ones.
    /// For example, a calendar with eras might add `era` and `eraYear` when
    /// `year` is requested. The default returns the requested fields
    /// unchanged.
    fn fields(&self, requested: &[FieldName]) -> Vec<FieldName> {
        requested.to_vec()
    }

    /// Returns the values of the given fields for the given date.
    fn to_fields(&self, date: Date, names: &[FieldName]) -> Fields;

    /// Merges `overrides` on top of `base`.
    ///
    /// The default copies every field set in `overrides` into `base`. When
    /// `overrides` sets `year`, any era fields in `base` are dropped since
    /// they would otherwise conflict with the new year.
    fn merge_fields(&self, base: Fields, overrides: &Fields) -> Fields {
        base.merge(overrides)
    }

    /// Resolves a complete field record (year, month and day) into a date.
    ///
    /// Fields that are out of range are clamped with `Overflow::Constrain`
    /// and rejected with `Overflow::Reject`. A missing required field is
    /// always an error.
    fn date_from_fields(
        &self,
        fields: &Fields,
        overflow: Overflow,
    ) -> Result<Date, Error>;

    /// Resolves a year and month into the canonical reference date used to
    /// represent that year-month.
    ///
    /// The default ignores any day in `fields` and resolves the first day of
    /// the month.
    fn year_month_from_fields(
        &self,
        fields: &Fields,
        overflow: Overflow,
    ) -> Result<Date, Error> {
        let fields = Fields { day: Some(1), ..fields.clone() };
        self.date_from_fields(&fields, overflow)
    }

    /// Adds the given calendar duration to `date`.
    ///
    /// Years and months are added first. If the day doesn't exist in the
    /// resulting month, it is regulated according to `overflow`. Weeks and
    /// days are added last.
    fn date_add(
        &self,
        date: Date,
        duration: DateDuration,
        overflow: Overflow,
    ) -> Result<Date, Error>;

    /// Returns the calendar duration from `date1` to `date2` with no unit
    /// bigger than `largest`.
    ///
    /// The result is signed such that adding it to `date1` yields `date2`.
    /// `largest` is one of years, months, weeks or days.
    fn date_until(
        &self,
        date1: Date,
        date2: Date,
        largest: Unit,
    ) -> Result<DateDuration, Error>;

    /// Returns the number of days in the month containing `date`.
    fn days_in_month(&self, date: Date) -> i8;

    /// Returns the number of days in the year containing `date`.
    ///
    /// The default follows ISO 8601.
    fn days_in_year(&self, date: Date) -> i16 {
        date.days_in_year()
    }

    /// Returns the number of months in the year containing `date`.
    ///
    /// The default follows ISO 8601, which always has 12.
    fn months_in_year(&self, _date: Date) -> i8 {
        12
    }

    /// Returns true when the year containing `date` is a leap year in this
    /// calendar.
    ///
    /// The default follows ISO 8601.
    fn in_leap_year(&self, date: Date) -> bool {
        date.in_leap_year()
    }
}

/// A cheaply cloneable handle to a [`Calendar`].
///
/// Equality, ordering and hashing all go through the calendar's identifier.
///
/// The default value is the ISO 8601 calendar.
#[derive(Clone, Default)]
pub struct CalendarRef {
    kind: Option<Arc<dyn Calendar>>,
}

impl CalendarRef {
    /// The ISO 8601 calendar.
    pub const ISO: CalendarRef = CalendarRef { kind: None };

    /// Wraps the given calendar in a handle.
    ///
    /// # Example
    ///
    /// ```
    /// use caldelta::calendar::{CalendarRef, Iso8601};
    ///
    /// // Wrapping the built in calendar yields a handle equal to `ISO`.
    /// assert_eq!(CalendarRef::new(Iso8601), CalendarRef::ISO);
    /// ```
    pub fn new<C: Calendar + 'static>(calendar: C) -> CalendarRef {
        CalendarRef { kind: Some(Arc::new(calendar)) }
    }

    /// Returns the identifier of this calendar.
    #[inline]
    pub fn id(&self) -> &str {
        self.get().id()
    }

    /// Returns true when this is the ISO 8601 calendar.
    #[inline]
    pub fn is_iso(&self) -> bool {
        self.id() == Iso8601::ID
    }

    /// Returns the underlying calendar.
    #[inline]
    pub fn get(&self) -> &dyn Calendar {
        match self.kind {
            None => &Iso8601,
            Some(ref calendar) => &**calendar,
        }
    }

    /// Resolves the fields of a year-month, with the given day, into a
    /// date.
    pub(crate) fn anchor(
        &self,
        date: Date,
        day: i8,
    ) -> Result<Date, Error> {
        let names = self.get().fields(FieldName::YEAR_MONTH);
        let fields =
            Fields { day: Some(day), ..self.get().to_fields(date, &names) };
        let anchor =
            self.get().date_from_fields(&fields, Overflow::Constrain)?;
        trace!(
            "resolved anchor {anchor} from {date} with day {day} \
             in calendar {id}",
            id = self.id(),
        );
        Ok(anchor)
    }
}

impl core::fmt::Debug for CalendarRef {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_tuple("CalendarRef").field(&self.id()).finish()
    }
}

impl core::fmt::Display for CalendarRef {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.id())
    }
}

impl Eq for CalendarRef {}

impl PartialEq for CalendarRef {
    fn eq(&self, rhs: &CalendarRef) -> bool {
        self.id() == rhs.id()
    }
}

impl PartialOrd for CalendarRef {
    fn partial_cmp(&self, rhs: &CalendarRef) -> Option<core::cmp::Ordering> {
        Some(self.cmp(rhs))
    }
}

impl Ord for CalendarRef {
    fn cmp(&self, rhs: &CalendarRef) -> core::cmp::Ordering {
        self.id().cmp(rhs.id())
    }
}

impl core::hash::Hash for CalendarRef {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

/// The name of a field in a calendar field record.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FieldName {
    Era,
    EraYear,
    Year,
    Month,
    Day,
}

impl FieldName {
    /// The fields every calendar must resolve a year-month from.
    pub const YEAR_MONTH: &'static [FieldName] =
        &[FieldName::Year, FieldName::Month];

    /// Returns the name of this field as it appears in a field record.
    pub fn as_str(&self) -> &'static str {
        match *self {
            FieldName::Era => "era",
            FieldName::EraYear => "eraYear",
            FieldName::Year => "year",
            FieldName::Month => "month",
            FieldName::Day => "day",
        }
    }
}

/// A record of calendar fields.
///
/// The meaning of every field is up to the calendar. For example, `month`
/// is the ordinal month in the calendar's year, which need not agree with
/// the ISO month. Fields that aren't set are `None`.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Fields {
    pub era: Option<Box<str>>,
    pub era_year: Option<i32>,
    pub year: Option<i32>,
    pub month: Option<i8>,
    pub day: Option<i8>,
}

impl Fields {
    /// Returns a record with every field unset.
    pub fn new() -> Fields {
        Fields::default()
    }

    /// Returns true when the field with the given name is set.
    pub fn has(&self, name: FieldName) -> bool {
        match name {
            FieldName::Era => self.era.is_some(),
            FieldName::EraYear => self.era_year.is_some(),
            FieldName::Year => self.year.is_some(),
            FieldName::Month => self.month.is_some(),
            FieldName::Day => self.day.is_some(),
        }
    }

    /// Returns a copy of this record with only the given fields kept.
    pub fn only(&self, names: &[FieldName]) -> Fields {
        let keep = |name| names.contains(&name);
        Fields {
            era: self.era.clone().filter(|_| keep(FieldName::Era)),
            era_year: self.era_year.filter(|_| keep(FieldName::EraYear)),
            year: self.year.filter(|_| keep(FieldName::Year)),
            month: self.month.filter(|_| keep(FieldName::Month)),
            day: self.day.filter(|_| keep(FieldName::Day)),
        }
    }

    /// Copies every field set in `overrides` into this record.
    ///
    /// If `overrides` sets a year, this record's era fields are cleared
    /// unless `overrides` sets them too.
    pub fn merge(mut self, overrides: &Fields) -> Fields {
        if overrides.year.is_some() {
            self.era = None;
            self.era_year = None;
        }
        if overrides.era.is_some() || overrides.era_year.is_some() {
            self.year = None;
        }
        if let Some(ref era) = overrides.era {
            self.era = Some(era.clone());
        }
        self.era_year = overrides.era_year.or(self.era_year);
        self.year = overrides.year.or(self.year);
        self.month = overrides.month.or(self.month);
        self.day = overrides.day.or(self.day);
        self
    }

    /// Returns the given field or an error if it isn't set.
    pub(crate) fn require<T: Copy>(
        field: Option<T>,
        name: FieldName,
    ) -> Result<T, Error> {
        field.ok_or_else(|| {
            Error::from(crate::error::calendar::Error::MissingField {
                field: name,
            })
        })
    }
}

/// The calendar units of a duration: years, months, weeks and days.
///
/// This is what a calendar adds to dates and returns from differences.
/// Sub-day units are folded into days before a duration reaches a calendar.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct DateDuration {
    pub years: i64,
    pub months: i64,
    pub weeks: i64,
    pub days: i64,
}

impl DateDuration {
    /// Returns a duration with only years and months set.
    pub fn years_months(years: i64, months: i64) -> DateDuration {
        DateDuration { years, months, weeks: 0, days: 0 }
    }

    /// Returns the sign of the first non-zero component, or `0` when every
    /// component is zero.
    pub fn sign(&self) -> i8 {
        [self.years, self.months, self.weeks, self.days]
            .into_iter()
            .find(|&n| n != 0)
            .map_or(0, |n| if n < 0 { -1 } else { 1 })
    }
}

/// How a calendar should handle a field that is out of range, such as the
/// 31st day of a 30 day month.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Overflow {
    /// Clamp the field to the nearest valid value.
    #[default]
    Constrain,
    /// Return an error.
    Reject,
}
