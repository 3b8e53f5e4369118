use crate::{
    calendar::{DateDuration, Overflow},
    error::{calendar::Error as CE, Error},
    util::b,
    Unit,
};

/// A representation of a proleptic Gregorian (ISO 8601) calendar date.
///
/// Every calendar in this crate describes its dates in terms of this type.
/// A calendar with its own notion of years and months still maps each of
/// its dates onto a unique ISO date, which is what gets stored, compared and
/// handed back to the calendar.
///
/// A `Date` value is always valid: its month is in `1..=12`, its day is
/// valid for its year and month, and its year is in the range
/// `-271821..=275760`.
///
/// # Example
///
/// ```
/// use caldelta::civil::Date;
///
/// let date = Date::new(2024, 2, 29)?;
/// assert_eq!(date.to_string(), "2024-02-29");
/// assert!(Date::new(2023, 2, 29).is_err());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Date {
    year: i32,
    month: i8,
    day: i8,
}

impl Date {
    /// Creates a new `Date` value from its component year, month and day
    /// values.
    ///
    /// # Errors
    ///
    /// This returns an error when the given components do not correspond to
    /// a valid date, or when the year is outside the supported range.
    #[inline]
    pub fn new(year: i32, month: i8, day: i8) -> Result<Date, Error> {
        let year = b::check_year(year)?;
        let month = b::check_month(month)?;
        let day = b::check_day(year, month, day)?;
        Ok(Date { year, month, day })
    }

    /// Creates a new `Date`, clamping the day to the last day of the month
    /// when it is too big.
    ///
    /// The year and month must still be valid.
    #[inline]
    pub fn constrain(year: i32, month: i8, day: i8) -> Result<Date, Error> {
        let year = b::check_year(year)?;
        let month = b::check_month(month)?;
        let day = day.clamp(1, b::days_in_month(year, month));
        Ok(Date { year, month, day })
    }

    /// Returns the year of this date.
    #[inline]
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month of this date, in the range `1..=12`.
    #[inline]
    pub fn month(self) -> i8 {
        self.month
    }

    /// Returns the day of this date.
    #[inline]
    pub fn day(self) -> i8 {
        self.day
    }

    /// Returns the number of days in the month of this date.
    #[inline]
    pub fn days_in_month(self) -> i8 {
        b::days_in_month(self.year, self.month)
    }

    /// Returns the number of days in the year of this date.
    #[inline]
    pub fn days_in_year(self) -> i16 {
        b::days_in_year(self.year)
    }

    /// Returns true if the year of this date is a leap year.
    #[inline]
    pub fn in_leap_year(self) -> bool {
        b::is_leap_year(self.year)
    }

    /// Adds the given number of days to this date.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is outside the supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use caldelta::civil::Date;
    ///
    /// let date = Date::new(2024, 2, 28)?;
    /// assert_eq!(date.checked_add_days(2)?, Date::new(2024, 3, 1)?);
    /// assert_eq!(date.checked_add_days(-59)?, Date::new(2023, 12, 31)?);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn checked_add_days(self, days: i64) -> Result<Date, Error> {
        if days == 0 {
            return Ok(self);
        }
        let epoch_days = self
            .to_unix_epoch_days()
            .checked_add(days)
            .ok_or_else(|| Error::slim_range("days"))?;
        Date::from_unix_epoch_days(epoch_days)
    }

    /// Returns the number of days from this date to `other`.
    ///
    /// The result is negative when `other` is before this date.
    ///
    /// # Example
    ///
    /// ```
    /// use caldelta::civil::Date;
    ///
    /// let d1 = Date::new(2024, 3, 1)?;
    /// let d2 = Date::new(2025, 3, 1)?;
    /// assert_eq!(d1.days_until(d2), 365);
    /// assert_eq!(d2.days_until(d1), -365);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn days_until(self, other: Date) -> i64 {
        other.to_unix_epoch_days() - self.to_unix_epoch_days()
    }

    /// Adds a calendar duration to this date using ISO 8601 rules.
    ///
    /// Years and months are added first, and the day is then regulated
    /// according to `overflow` if it no longer exists in the resulting
    /// month. Weeks and days are added last.
    pub(crate) fn iso_add(
        self,
        duration: DateDuration,
        overflow: Overflow,
    ) -> Result<Date, Error> {
        let (month, carry) = month_add_overflowing(self.month, duration.months)
            .ok_or_else(|| Error::slim_range("months"))?;
        let year = i64::from(self.year)
            .checked_add(carry)
            .and_then(|year| year.checked_add(duration.years))
            .ok_or_else(|| Error::slim_range("years"))?;
        let year = b::check_year(year)?;
        let date = match overflow {
            Overflow::Constrain => Date::constrain(year, month, self.day)?,
            Overflow::Reject => Date::new(year, month, self.day)?,
        };
        let days = duration
            .weeks
            .checked_mul(b::DAYS_PER_WEEK)
            .and_then(|days| days.checked_add(duration.days))
            .ok_or_else(|| Error::slim_range("days"))?;
        date.checked_add_days(days)
    }

    /// Returns the duration from this date to `other` using ISO 8601 rules,
    /// with no unit bigger than `largest`.
    ///
    /// The result satisfies `self.iso_add(result, Constrain) == other`.
    pub(crate) fn iso_until(
        self,
        other: Date,
        largest: Unit,
    ) -> Result<DateDuration, Error> {
        if largest < Unit::Day {
            return Err(Error::from(CE::UntilLargestUnit { unit: largest }));
        }
        if largest <= Unit::Week {
            let mut weeks = 0;
            let mut days = self.days_until(other);
            if largest == Unit::Week {
                weeks = days / b::DAYS_PER_WEEK;
                days %= b::DAYS_PER_WEEK;
            }
            return Ok(DateDuration { years: 0, months: 0, weeks, days });
        }

        let (year0, month0, day0) =
            (i64::from(self.year), i64::from(self.month), i64::from(self.day));
        let (mut year1, mut month1, day1) = (
            i64::from(other.year),
            i64::from(other.month),
            i64::from(other.day),
        );

        let mut years = year1 - year0;
        let mut months = month1 - month0;
        let mut days = day1 - day0;
        if years != 0 || months != 0 {
            let sign =
                if years != 0 { years.signum() } else { months.signum() };
            let mut days_in_month1 = days_in_month_wide(year1, month1);
            let mut day_correct = 0;
            if days.signum() == -sign {
                let original_days_in_month1 = days_in_month1;
                (year1, month1) = month_add_one(year1, month1, -sign);
                years = year1 - year0;
                months = month1 - month0;
                days_in_month1 = days_in_month_wide(year1, month1);
                day_correct = if sign < 0 {
                    -original_days_in_month1
                } else {
                    days_in_month1
                };
            }

            let day0_trunc = day0.min(days_in_month1);
            days = day1 - day0_trunc + day_correct;

            if years != 0 {
                months = month1 - month0;
                if months.signum() == -sign {
                    let month_correct = sign * b::MONTHS_PER_YEAR;
                    year1 -= sign;
                    years = year1 - year0;
                    months = month1 - month0 + month_correct;
                }
            }
        }
        if largest == Unit::Month && years != 0 {
            months += years * b::MONTHS_PER_YEAR;
            years = 0;
        }
        Ok(DateDuration { years, months, weeks: 0, days })
    }

    /// Returns the number of days since the Unix epoch for this date.
    #[inline]
    pub(crate) fn to_unix_epoch_days(self) -> i64 {
        b::to_unix_epoch_days(self.year, self.month, self.day)
    }

    /// Converts a number of days since the Unix epoch into a date.
    pub(crate) fn from_unix_epoch_days(days: i64) -> Result<Date, Error> {
        let min = b::to_unix_epoch_days(b::YEAR_MIN, 1, 1);
        let max = b::to_unix_epoch_days(b::YEAR_MAX, 12, 31);
        if !(min..=max).contains(&days) {
            return Err(Error::range("unix-epoch-day", days, min, max));
        }
        let (year, month, day) = b::from_unix_epoch_days(days);
        // OK because we checked that the epoch day is within the range of
        // supported years.
        Ok(Date { year: year as i32, month, day })
    }
}

impl core::fmt::Debug for Date {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl core::fmt::Display for Date {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        crate::fmt::write_year(self.year, &mut *f)?;
        write!(f, "-{:02}-{:02}", self.month, self.day)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Date {
    fn arbitrary(g: &mut quickcheck::Gen) -> Date {
        // Stay well clear of the boundaries so that adding small durations
        // never fails.
        let year = i32::from(i16::arbitrary(g) % 9_000);
        let month = 1 + (u8::arbitrary(g) % 12) as i8;
        let day = 1 + (u8::arbitrary(g) % 31) as i8;
        Date::constrain(year, month, day).unwrap()
    }
}

/// Adds the given number of months to `month`.
///
/// The month returned is in `1..=12`, and the number of years by which the
/// month overflowed (in either direction) is returned alongside it. `None`
/// is returned only when the intermediate sum overflows.
fn month_add_overflowing(month: i8, months: i64) -> Option<(i8, i64)> {
    let total = i64::from(month - 1).checked_add(months)?;
    let years = total.div_euclid(b::MONTHS_PER_YEAR);
    // OK because the remainder is always in `0..12`.
    let month = (total.rem_euclid(b::MONTHS_PER_YEAR) + 1) as i8;
    Some((month, years))
}

/// Adds or subtracts `sign` from the given `year`/`month`.
fn month_add_one(year: i64, month: i64, sign: i64) -> (i64, i64) {
    let month = month + sign;
    if month < 1 {
        (year - 1, month + b::MONTHS_PER_YEAR)
    } else if month > b::MONTHS_PER_YEAR {
        (year + 1, month - b::MONTHS_PER_YEAR)
    } else {
        (year, month)
    }
}

/// Like `b::days_in_month`, but for years one past either end of the
/// supported range, which `iso_until` can step onto while correcting.
fn days_in_month_wide(year: i64, month: i64) -> i64 {
    // OK because the year is always within one of the supported range, and
    // the month is in `1..=12`.
    i64::from(b::days_in_month(year as i32, month as i8))
}
