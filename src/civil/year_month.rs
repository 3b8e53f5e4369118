use core::cmp::Ordering;

use alloc::boxed::Box;

use crate::{
    calendar::{CalendarRef, FieldName, Fields, Overflow},
    civil::{anchored, Date},
    error::{civil::Error as E, Error, ErrorContext},
    fmt::{DisplayCalendar, YearMonthPrinter},
    util::b,
    Duration, RoundMode, Unit,
};

/// A month in a particular year of a particular calendar.
///
/// A `YearMonth` is represented by an ISO 8601 reference date plus a
/// [`CalendarRef`]. The reference date is the ISO date of a day in the
/// month. Which day is up to the calendar: for the ISO 8601 calendar it is
/// always the first of the month, while other calendars may pick a
/// different day because their months don't line up with ISO months.
///
/// Values are immutable. Every operation returns a new value.
///
/// # Arithmetic
///
/// Durations can be added to and subtracted from a year-month with
/// [`YearMonth::checked_add`] and [`YearMonth::checked_sub`]. Only whole
/// days affect the result: hours and smaller units are folded into days
/// first and whatever is left over is dropped.
///
/// ```
/// use caldelta::{civil::YearMonth, ToDuration};
///
/// let ym = YearMonth::iso(2021, 3)?;
/// assert_eq!(ym.checked_add(1.month())?, YearMonth::iso(2021, 4)?);
/// assert_eq!(ym.checked_sub(1.month())?, YearMonth::iso(2021, 2)?);
/// assert_eq!(ym.checked_add(1.year().months(10))?, YearMonth::iso(2023, 1)?);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Differences
///
/// The difference between two year-months is computed with
/// [`YearMonth::until`] and [`YearMonth::since`]. The result only ever has
/// years and months, and can be rounded with [`YearMonthDifference`].
///
/// ```
/// use caldelta::{
///     civil::{YearMonth, YearMonthDifference},
///     RoundMode, ToDuration, Unit,
/// };
///
/// let ym1 = YearMonth::iso(2021, 3)?;
/// let ym2 = YearMonth::iso(2023, 5)?;
/// assert_eq!(ym1.until(ym2.clone())?, 2.years().months(2));
///
/// let options = YearMonthDifference::new(ym2)
///     .smallest(Unit::Year)
///     .mode(RoundMode::HalfExpand);
/// assert_eq!(ym1.until(options)?, 2.years());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Comparisons
///
/// Year-months are ordered by their ISO reference date first, and then by
/// their calendar identifier. Two year-months are equal only when both
/// their ISO reference dates and their calendars are equal.
#[derive(Clone, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct YearMonth {
    iso: Date,
    calendar: CalendarRef,
}

impl YearMonth {
    /// Creates a new year-month from an ISO year, an ISO month, a calendar
    /// and an ISO reference day.
    ///
    /// # Errors
    ///
    /// This returns an error when the ISO year, month and reference day do
    /// not form a valid date, or when the year-month is outside the range
    /// `-271821-04..=275760-09`.
    ///
    /// # Example
    ///
    /// ```
    /// use caldelta::{calendar::CalendarRef, civil::YearMonth};
    ///
    /// let ym = YearMonth::new(2024, 2, CalendarRef::ISO, 29)?;
    /// assert_eq!(ym.iso_reference_day(), 29);
    ///
    /// assert!(YearMonth::new(2023, 2, CalendarRef::ISO, 29).is_err());
    /// assert!(YearMonth::new(-271821, 3, CalendarRef::ISO, 1).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(
        year: i32,
        month: i8,
        calendar: CalendarRef,
        reference_day: i8,
    ) -> Result<YearMonth, Error> {
        let iso = Date::new(year, month, reference_day)?;
        YearMonth::from_iso(iso, calendar)
    }

    /// Creates a new year-month in the ISO 8601 calendar.
    ///
    /// This is a convenience routine for `YearMonth::new(year, month,
    /// CalendarRef::ISO, 1)`.
    #[inline]
    pub fn iso(year: i32, month: i8) -> Result<YearMonth, Error> {
        YearMonth::new(year, month, CalendarRef::ISO, 1)
    }

    /// Resolves a year-month from a record of calendar fields.
    ///
    /// The calendar decides which fields are required and which reference
    /// day represents the resulting year-month.
    ///
    /// # Example
    ///
    /// ```
    /// use caldelta::{
    ///     calendar::{CalendarRef, Fields, Overflow},
    ///     civil::YearMonth,
    /// };
    ///
    /// let fields =
    ///     Fields { year: Some(2024), month: Some(13), ..Fields::new() };
    /// let ym = YearMonth::from_fields(
    ///     &fields,
    ///     CalendarRef::ISO,
    ///     Overflow::Constrain,
    /// )?;
    /// assert_eq!(ym, YearMonth::iso(2024, 12)?);
    /// let (cal, reject) = (CalendarRef::ISO, Overflow::Reject);
    /// assert!(YearMonth::from_fields(&fields, cal, reject).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_fields(
        fields: &Fields,
        calendar: CalendarRef,
        overflow: Overflow,
    ) -> Result<YearMonth, Error> {
        let iso = calendar
            .get()
            .year_month_from_fields(fields, overflow)
            .context(E::FailedFromFields)?;
        YearMonth::from_iso(iso, calendar)
    }

    /// Creates a year-month from its reference date, checking that it is in
    /// the supported range.
    pub(crate) fn from_iso(
        iso: Date,
        calendar: CalendarRef,
    ) -> Result<YearMonth, Error> {
        let key = (iso.year(), iso.month());
        if key < b::YEAR_MONTH_MIN || key > b::YEAR_MONTH_MAX {
            return Err(Error::from(E::YearMonthOutOfRange {
                year: iso.year(),
                month: iso.month(),
            }));
        }
        Ok(YearMonth { iso, calendar })
    }

    /// Returns the year of this year-month in its calendar.
    ///
    /// If the calendar doesn't report a `year` field, the ISO year is
    /// returned instead.
    #[inline]
    pub fn year(&self) -> i32 {
        self.fields_for(&[FieldName::Year]).year.unwrap_or(self.iso.year())
    }

    /// Returns the month of this year-month in its calendar.
    ///
    /// If the calendar doesn't report a `month` field, the ISO month is
    /// returned instead.
    #[inline]
    pub fn month(&self) -> i8 {
        self.fields_for(&[FieldName::Month]).month.unwrap_or(self.iso.month())
    }

    /// Returns the era of this year-month, if its calendar has eras.
    ///
    /// # Example
    ///
    /// ```
    /// use caldelta::civil::YearMonth;
    ///
    /// // The ISO 8601 calendar has no eras.
    /// let ym = YearMonth::iso(2024, 5)?;
    /// assert_eq!(ym.era(), None);
    /// assert_eq!(ym.era_year(), None);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn era(&self) -> Option<Box<str>> {
        self.fields_for(&[FieldName::Era, FieldName::EraYear]).era
    }

    /// Returns the year of this year-month within its era, if its calendar
    /// has eras.
    #[inline]
    pub fn era_year(&self) -> Option<i32> {
        self.fields_for(&[FieldName::Era, FieldName::EraYear]).era_year
    }

    /// Returns the number of days in this month, according to its calendar.
    #[inline]
    pub fn days_in_month(&self) -> i8 {
        self.calendar.get().days_in_month(self.iso)
    }

    /// Returns the number of days in the year of this year-month, according
    /// to its calendar.
    ///
    /// # Example
    ///
    /// ```
    /// use caldelta::civil::YearMonth;
    ///
    /// assert_eq!(YearMonth::iso(2024, 5)?.days_in_year(), 366);
    /// assert_eq!(YearMonth::iso(2023, 5)?.days_in_year(), 365);
    /// assert_eq!(YearMonth::iso(2023, 5)?.months_in_year(), 12);
    /// assert!(YearMonth::iso(2000, 1)?.in_leap_year());
    /// assert!(!YearMonth::iso(1900, 1)?.in_leap_year());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn days_in_year(&self) -> i16 {
        self.calendar.get().days_in_year(self.iso)
    }

    /// Returns the number of months in the year of this year-month,
    /// according to its calendar.
    #[inline]
    pub fn months_in_year(&self) -> i8 {
        self.calendar.get().months_in_year(self.iso)
    }

    /// Returns true when the year of this year-month is a leap year in its
    /// calendar.
    #[inline]
    pub fn in_leap_year(&self) -> bool {
        self.calendar.get().in_leap_year(self.iso)
    }

    /// Returns the ISO year of the reference date.
    #[inline]
    pub fn iso_year(&self) -> i32 {
        self.iso.year()
    }

    /// Returns the ISO month of the reference date.
    #[inline]
    pub fn iso_month(&self) -> i8 {
        self.iso.month()
    }

    /// Returns the ISO day of the reference date.
    #[inline]
    pub fn iso_reference_day(&self) -> i8 {
        self.iso.day()
    }

    /// Returns the ISO reference date of this year-month.
    #[inline]
    pub fn to_iso_date(&self) -> Date {
        self.iso
    }

    /// Returns the calendar of this year-month.
    #[inline]
    pub fn calendar(&self) -> &CalendarRef {
        &self.calendar
    }

    /// Returns the values of the requested fields, as the calendar reports
    /// them for this year-month.
    ///
    /// The calendar may add fields it needs (such as eras) to the ones
    /// requested.
    ///
    /// # Example
    ///
    /// ```
    /// use caldelta::{calendar::FieldName, civil::YearMonth};
    ///
    /// let ym = YearMonth::iso(2024, 5)?;
    /// let fields = ym.fields_for(FieldName::YEAR_MONTH);
    /// assert_eq!(fields.year, Some(2024));
    /// assert_eq!(fields.month, Some(5));
    /// assert_eq!(fields.day, None);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn fields_for(&self, requested: &[FieldName]) -> Fields {
        let cal = self.calendar.get();
        let names = cal.fields(requested);
        cal.to_fields(self.iso, &names)
    }

    /// Returns a new year-month with some of its fields replaced.
    ///
    /// Only the year-month fields of `partial` are used (for example, a
    /// `day` in `partial` is ignored). They are merged over the fields of
    /// this year-month by the calendar, and the result is resolved with
    /// the given overflow behavior.
    ///
    /// # Errors
    ///
    /// This returns an error when `partial` sets none of the calendar's
    /// year-month fields, or when the merged fields don't resolve to a
    /// year-month.
    ///
    /// # Example
    ///
    /// ```
    /// use caldelta::{
    ///     calendar::{Fields, Overflow},
    ///     civil::YearMonth,
    /// };
    ///
    /// let ym = YearMonth::iso(2024, 5)?;
    /// let partial = Fields { month: Some(11), ..Fields::new() };
    /// let got = ym.with(&partial, Overflow::Reject)?;
    /// assert_eq!(got, YearMonth::iso(2024, 11)?);
    ///
    /// let err = ym.with(&Fields::new(), Overflow::Reject).unwrap_err();
    /// assert!(err.is_invalid_input());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn with(
        &self,
        partial: &Fields,
        overflow: Overflow,
    ) -> Result<YearMonth, Error> {
        let cal = self.calendar.get();
        let names = cal.fields(FieldName::YEAR_MONTH);
        if !names.iter().any(|&name| partial.has(name)) {
            return Err(Error::from(E::EmptyWith));
        }
        let base = cal.to_fields(self.iso, &names);
        let merged = cal.merge_fields(base, &partial.only(&names));
        YearMonth::from_fields(&merged, self.calendar.clone(), overflow)
    }

    /// Returns the date in this year-month with the given day, according to
    /// its calendar.
    ///
    /// # Errors
    ///
    /// This returns an error when the day doesn't exist in this month.
    ///
    /// # Example
    ///
    /// ```
    /// use caldelta::civil::{Date, YearMonth};
    ///
    /// let ym = YearMonth::iso(2024, 2)?;
    /// assert_eq!(ym.to_date(29)?, Date::new(2024, 2, 29)?);
    /// assert!(ym.to_date(30).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn to_date(&self, day: i8) -> Result<Date, Error> {
        let cal = self.calendar.get();
        let names = cal.fields(FieldName::YEAR_MONTH);
        let fields =
            Fields { day: Some(day), ..cal.to_fields(self.iso, &names) };
        cal.date_from_fields(&fields, Overflow::Reject)
            .context(E::FailedToDate)
    }

    /// Adds a duration to this year-month.
    ///
    /// The argument may be a [`Duration`] or a [`YearMonthArithmetic`],
    /// the latter of which also sets how an out-of-range day is handled by
    /// the calendar.
    ///
    /// Forward movement (a positive duration) starts from the first day of
    /// this month, while backward movement starts from the last day. So
    /// adding `30.days()` to a 31 day month stays in that month, and so does
    /// subtracting `30.days()`.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range, or when the
    /// calendar can't perform the addition.
    ///
    /// # Example
    ///
    /// ```
    /// use caldelta::{civil::YearMonth, ToDuration};
    ///
    /// let ym = YearMonth::iso(2021, 3)?;
    /// assert_eq!(ym.checked_add(30.days())?, ym);
    /// assert_eq!(ym.checked_add(-30.days())?, ym);
    /// assert_eq!(ym.checked_add(31.days())?, YearMonth::iso(2021, 4)?);
    ///
    /// assert!(YearMonth::iso(275760, 9)?.checked_add(1.month()).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn checked_add<A: Into<YearMonthArithmetic>>(
        &self,
        duration: A,
    ) -> Result<YearMonth, Error> {
        let YearMonthArithmetic { duration, overflow } = duration.into();
        anchored::add(self, duration, overflow).context(E::FailedAdd)
    }

    /// Subtracts a duration from this year-month.
    ///
    /// This is equivalent to adding the negation of the duration.
    ///
    /// # Example
    ///
    /// ```
    /// use caldelta::{civil::YearMonth, ToDuration};
    ///
    /// let ym = YearMonth::iso(2021, 3)?;
    /// assert_eq!(ym.checked_sub(1.month())?, YearMonth::iso(2021, 2)?);
    /// assert_eq!(ym.checked_sub(2.years())?, YearMonth::iso(2019, 3)?);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn checked_sub<A: Into<YearMonthArithmetic>>(
        &self,
        duration: A,
    ) -> Result<YearMonth, Error> {
        let YearMonthArithmetic { duration, overflow } = duration.into();
        anchored::add(self, duration.negate(), overflow)
            .context(E::FailedSubtract)
    }

    /// Returns the duration from this year-month to another one.
    ///
    /// The argument may be a [`YearMonth`] or a [`YearMonthDifference`],
    /// the latter of which configures the units, rounding mode and rounding
    /// increment. By default, the result is not rounded, and has a largest
    /// unit of years and a smallest unit of months.
    ///
    /// # Errors
    ///
    /// This returns an error when the two year-months are in different
    /// calendars, or when the options are invalid: units other than years
    /// and months, a largest unit smaller than the smallest unit or an
    /// increment that isn't positive.
    ///
    /// # Example
    ///
    /// ```
    /// use caldelta::{
    ///     civil::{YearMonth, YearMonthDifference},
    ///     ToDuration, Unit,
    /// };
    ///
    /// let ym1 = YearMonth::iso(2021, 3)?;
    /// let ym2 = YearMonth::iso(2023, 5)?;
    /// assert_eq!(ym1.until(ym2.clone())?, 2.years().months(2));
    /// assert_eq!(ym2.until(ym1.clone())?, -2.years().months(2));
    /// assert_eq!(ym1.until((Unit::Year, ym2.clone()))?, 2.years());
    ///
    /// let options = YearMonthDifference::new(ym2).largest(Unit::Month);
    /// assert_eq!(ym1.until(options)?, 26.months());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn until<A: Into<YearMonthDifference>>(
        &self,
        other: A,
    ) -> Result<Duration, Error> {
        anchored::until(self, &other.into())
    }

    /// Returns the duration from another year-month to this one.
    ///
    /// This computes the same difference as [`YearMonth::until`], with the
    /// same anchor, but rounds it with the [negated](RoundMode::negate)
    /// rounding mode before negating the result. So for every mode,
    /// `a.since(options)` is equal to `a.until(options)` negated, where the
    /// second `options` has the negated mode.
    ///
    /// # Example
    ///
    /// ```
    /// use caldelta::{
    ///     civil::{YearMonth, YearMonthDifference},
    ///     RoundMode, ToDuration, Unit,
    /// };
    ///
    /// let ym1 = YearMonth::iso(2021, 3)?;
    /// let ym2 = YearMonth::iso(2023, 5)?;
    /// assert_eq!(ym1.since(ym2.clone())?, -2.years().months(2));
    ///
    /// let options = YearMonthDifference::new(ym2)
    ///     .smallest(Unit::Year)
    ///     .mode(RoundMode::Ceil);
    /// assert_eq!(ym1.until(options.clone())?, 3.years());
    /// assert_eq!(ym1.since(options)?, -2.years());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn since<A: Into<YearMonthDifference>>(
        &self,
        other: A,
    ) -> Result<Duration, Error> {
        anchored::since(self, &other.into())
    }

    /// Returns the ordering between this year-month and another one.
    ///
    /// This is the same as the `Ord` implementation: ISO reference dates
    /// are compared first, and calendar identifiers break ties.
    #[inline]
    pub fn compare(&self, other: &YearMonth) -> Ordering {
        self.cmp(other)
    }
}

impl core::fmt::Debug for YearMonth {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        crate::fmt::write_year_month(self, DisplayCalendar::Always, f)
    }
}

impl core::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let printer = YearMonthPrinter::new();
        printer.print_year_month(self, f).map_err(|_| core::fmt::Error)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for YearMonth {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for YearMonth {
    fn arbitrary(g: &mut quickcheck::Gen) -> YearMonth {
        let year = i32::from(i16::arbitrary(g) % 9_000);
        let month = 1 + (u8::arbitrary(g) % 12) as i8;
        YearMonth::iso(year, month).unwrap()
    }
}

/// Options for [`YearMonth::checked_add`] and [`YearMonth::checked_sub`].
///
/// This can be created from a [`Duration`], in which case the overflow
/// behavior is [`Overflow::Constrain`], or from a `(Duration, Overflow)`
/// tuple.
///
/// # Example
///
/// ```
/// use caldelta::{
///     calendar::Overflow,
///     civil::{YearMonth, YearMonthArithmetic},
///     ToDuration,
/// };
///
/// let ym = YearMonth::iso(2024, 1)?;
/// let options =
///     YearMonthArithmetic::from(1.month()).overflow(Overflow::Reject);
/// assert_eq!(ym.checked_add(options)?, YearMonth::iso(2024, 2)?);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct YearMonthArithmetic {
    duration: Duration,
    overflow: Overflow,
}

impl YearMonthArithmetic {
    /// Set how the calendar handles a day that doesn't exist in the month
    /// reached while adding.
    ///
    /// This defaults to [`Overflow::Constrain`].
    #[inline]
    pub fn overflow(self, overflow: Overflow) -> YearMonthArithmetic {
        YearMonthArithmetic { overflow, ..self }
    }
}

impl From<Duration> for YearMonthArithmetic {
    fn from(duration: Duration) -> YearMonthArithmetic {
        YearMonthArithmetic { duration, overflow: Overflow::Constrain }
    }
}

impl From<(Duration, Overflow)> for YearMonthArithmetic {
    fn from(
        (duration, overflow): (Duration, Overflow),
    ) -> YearMonthArithmetic {
        YearMonthArithmetic { duration, overflow }
    }
}

/// Options for [`YearMonth::until`] and [`YearMonth::since`].
///
/// This type provides a way to configure the calculation of the difference
/// between two year-months. In particular, the units, the rounding mode and
/// the rounding increment.
///
/// The defaults are a smallest unit of months, a largest unit of years, a
/// rounding mode of [`RoundMode::Trunc`] and an increment of `1`. With
/// these defaults, no rounding happens.
///
/// There are a few `From` trait implementations for convenience:
///
/// * `From<YearMonth>` and `From<&YearMonth>` use the defaults.
/// * `From<(Unit, YearMonth)>` sets the smallest unit.
///
/// # Example
///
/// This shows how to count whole quarters between two year-months:
///
/// ```
/// use caldelta::{
///     civil::{YearMonth, YearMonthDifference},
///     ToDuration, Unit,
/// };
///
/// let ym1 = YearMonth::iso(2024, 1)?;
/// let ym2 = YearMonth::iso(2024, 12)?;
/// let options = YearMonthDifference::new(ym2)
///     .largest(Unit::Month)
///     .increment(3);
/// assert_eq!(ym1.until(options)?, 9.months());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct YearMonthDifference {
    pub(crate) other: YearMonth,
    pub(crate) smallest: Unit,
    pub(crate) largest: Unit,
    pub(crate) mode: RoundMode,
    pub(crate) increment: i64,
}

impl YearMonthDifference {
    /// Create a new default configuration for computing the difference
    /// between the year-month given and another year-month.
    #[inline]
    pub fn new(other: YearMonth) -> YearMonthDifference {
        YearMonthDifference {
            other,
            smallest: Unit::Month,
            largest: Unit::Year,
            mode: RoundMode::Trunc,
            increment: 1,
        }
    }

    /// Set the smallest unit of the result. Only years and months are
    /// allowed.
    ///
    /// Setting this to [`Unit::Year`] rounds away any months.
    #[inline]
    pub fn smallest(self, unit: Unit) -> YearMonthDifference {
        YearMonthDifference { smallest: unit, ..self }
    }

    /// Set the largest unit of the result. Only years and months are
    /// allowed, and it must be at least as big as the smallest unit.
    ///
    /// Setting this to [`Unit::Month`] reports years as 12 months each.
    #[inline]
    pub fn largest(self, unit: Unit) -> YearMonthDifference {
        YearMonthDifference { largest: unit, ..self }
    }

    /// Set the rounding mode.
    ///
    /// This defaults to [`RoundMode::Trunc`].
    #[inline]
    pub fn mode(self, mode: RoundMode) -> YearMonthDifference {
        YearMonthDifference { mode, ..self }
    }

    /// Set the rounding increment for the smallest unit.
    ///
    /// This defaults to `1`. It must be positive, but otherwise has no
    /// upper bound and doesn't need to divide evenly into anything.
    #[inline]
    pub fn increment(self, increment: i64) -> YearMonthDifference {
        YearMonthDifference { increment, ..self }
    }
}

impl From<YearMonth> for YearMonthDifference {
    fn from(other: YearMonth) -> YearMonthDifference {
        YearMonthDifference::new(other)
    }
}

impl<'a> From<&'a YearMonth> for YearMonthDifference {
    fn from(other: &'a YearMonth) -> YearMonthDifference {
        YearMonthDifference::new(other.clone())
    }
}

impl From<(Unit, YearMonth)> for YearMonthDifference {
    fn from((smallest, other): (Unit, YearMonth)) -> YearMonthDifference {
        YearMonthDifference::new(other).smallest(smallest)
    }
}
