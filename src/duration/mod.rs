/*!
A ten-component signed duration and the sign rules it must obey.

The main type in this module is [`Duration`]. Unlike a single count of
nanoseconds, a `Duration` keeps every unit separate: "1 month" and "30 days"
are different durations, because adding them to a year-month may produce
different results depending on the calendar.

Every non-zero component of a `Duration` has the same sign. Mixing signs, as
in "add 2 months and subtract 3 days," has no unambiguous meaning in
calendar arithmetic, so such durations can't be constructed. The raw,
unchecked ten-field record is [`DurationFields`], which converts into a
`Duration` only through [`Duration::try_from`].
*/

use crate::{
    calendar::DateDuration,
    error::{duration::Error as E, Error, ErrorContext},
    Unit,
};

pub(crate) mod balance;

/// A signed quantity of time made of ten independent units.
///
/// A `Duration` stores years, months, weeks, days, hours, minutes, seconds,
/// milliseconds, microseconds and nanoseconds. The components are never
/// balanced automatically: `Duration::new().hours(25)` stays 25 hours.
///
/// # Invariants
///
/// * All non-zero components share the same sign.
/// * No component is equal to `i64::MIN`. This makes negation infallible.
///
/// Both invariants are checked whenever a component is set, so every
/// `Duration` value in existence satisfies them.
///
/// # Example
///
/// ```
/// use caldelta::{Duration, ToDuration};
///
/// let duration = Duration::new().years(1).months(2);
/// assert_eq!(duration, 1.year().months(2));
/// assert_eq!(duration.sign(), 1);
///
/// // Mixing signs is an error.
/// assert!(1.year().try_months(-1).is_err());
/// ```
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct Duration {
    sign: i8,
    years: i64,
    months: i64,
    weeks: i64,
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
    milliseconds: i64,
    microseconds: i64,
    nanoseconds: i64,
}

/// The raw, unvalidated components of a duration.
///
/// This is the shape of duration input accepted from outside the crate
/// before any validation has happened. Nothing stops the components from
/// having different signs; converting it into a [`Duration`] with
/// [`Duration::try_from`] rejects such records.
///
/// # Example
///
/// ```
/// use caldelta::{Duration, DurationFields};
///
/// let fields =
///     DurationFields { years: 1, months: -1, ..DurationFields::default() };
/// let err = Duration::try_from(fields).unwrap_err();
/// assert!(err.is_range());
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct DurationFields {
    pub years: i64,
    pub months: i64,
    pub weeks: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub milliseconds: i64,
    pub microseconds: i64,
    pub nanoseconds: i64,
}

impl DurationFields {
    /// Returns the value of the given unit in this record.
    pub fn get(&self, unit: Unit) -> i64 {
        match unit {
            Unit::Year => self.years,
            Unit::Month => self.months,
            Unit::Week => self.weeks,
            Unit::Day => self.days,
            Unit::Hour => self.hours,
            Unit::Minute => self.minutes,
            Unit::Second => self.seconds,
            Unit::Millisecond => self.milliseconds,
            Unit::Microsecond => self.microseconds,
            Unit::Nanosecond => self.nanoseconds,
        }
    }

    fn slot(&mut self, unit: Unit) -> &mut i64 {
        match unit {
            Unit::Year => &mut self.years,
            Unit::Month => &mut self.months,
            Unit::Week => &mut self.weeks,
            Unit::Day => &mut self.days,
            Unit::Hour => &mut self.hours,
            Unit::Minute => &mut self.minutes,
            Unit::Second => &mut self.seconds,
            Unit::Millisecond => &mut self.milliseconds,
            Unit::Microsecond => &mut self.microseconds,
            Unit::Nanosecond => &mut self.nanoseconds,
        }
    }
}

/// Returns the sign shared by all non-zero components of the given record.
///
/// This fails when one component is strictly positive while another is
/// strictly negative. Zero components impose no constraint. When every
/// component is zero, the sign returned is `0`.
pub(crate) fn validate_sign(fields: &DurationFields) -> Result<i8, Error> {
    let mut positive = None;
    let mut negative = None;
    for unit in Unit::ALL {
        let value = fields.get(unit);
        if value > 0 && positive.is_none() {
            positive = Some(unit);
        } else if value < 0 && negative.is_none() {
            negative = Some(unit);
        }
    }
    match (positive, negative) {
        (Some(positive), Some(negative)) => {
            Err(Error::from(E::MixedSign { positive, negative }))
        }
        (Some(_), None) => Ok(1),
        (None, Some(_)) => Ok(-1),
        (None, None) => Ok(0),
    }
}

macro_rules! define_units {
    ($(
        (
            $unit:expr,
            $field:ident,
            $get:ident,
            $set:ident,
            $try_set:ident $(,)?
        )
    ),* $(,)?) => {
        impl Duration {
            $(
                #[doc = concat!(
                    "Set the number of ", stringify!($field),
                    " on this duration.\n\n",
                    "# Panics\n\n",
                    "When the value has a sign different from the other ",
                    "non-zero components of this duration, or when it is ",
                    "`i64::MIN`. Use [`Duration::", stringify!($try_set),
                    "`] to get an error instead.",
                )]
                #[inline]
                pub fn $set<I: Into<i64>>(self, $field: I) -> Duration {
                    match self.$try_set($field) {
                        Ok(duration) => duration,
                        Err(err) => panic!("{err}"),
                    }
                }

                #[doc = concat!(
                    "Set the number of ", stringify!($field),
                    " on this duration, returning an error if doing so ",
                    "would violate the sign invariant.",
                )]
                #[inline]
                pub fn $try_set<I: Into<i64>>(
                    self,
                    $field: I,
                ) -> Result<Duration, Error> {
                    self.try_unit($unit, $field.into())
                }

                #[doc = concat!(
                    "Returns the number of ", stringify!($field),
                    " in this duration.",
                )]
                #[inline]
                pub fn $get(&self) -> i64 {
                    self.$field
                }
            )*
        }
    };
}

define_units!(
    (Unit::Year, years, get_years, years, try_years),
    (Unit::Month, months, get_months, months, try_months),
    (Unit::Week, weeks, get_weeks, weeks, try_weeks),
    (Unit::Day, days, get_days, days, try_days),
    (Unit::Hour, hours, get_hours, hours, try_hours),
    (Unit::Minute, minutes, get_minutes, minutes, try_minutes),
    (Unit::Second, seconds, get_seconds, seconds, try_seconds),
    (
        Unit::Millisecond,
        milliseconds,
        get_milliseconds,
        milliseconds,
        try_milliseconds,
    ),
    (
        Unit::Microsecond,
        microseconds,
        get_microseconds,
        microseconds,
        try_microseconds,
    ),
    (
        Unit::Nanosecond,
        nanoseconds,
        get_nanoseconds,
        nanoseconds,
        try_nanoseconds,
    ),
);

impl Duration {
    /// Creates a new duration with every component set to zero.
    ///
    /// # Example
    ///
    /// ```
    /// use caldelta::Duration;
    ///
    /// let duration = Duration::new();
    /// assert!(duration.is_zero());
    /// assert_eq!(duration.sign(), 0);
    /// ```
    #[inline]
    pub const fn new() -> Duration {
        Duration {
            sign: 0,
            years: 0,
            months: 0,
            weeks: 0,
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
            milliseconds: 0,
            microseconds: 0,
            nanoseconds: 0,
        }
    }

    /// Returns the value of the given unit in this duration.
    ///
    /// # Example
    ///
    /// ```
    /// use caldelta::{ToDuration, Unit};
    ///
    /// let duration = 5.months().days(3);
    /// assert_eq!(duration.get(Unit::Month), 5);
    /// assert_eq!(duration.get(Unit::Day), 3);
    /// assert_eq!(duration.get(Unit::Hour), 0);
    /// ```
    #[inline]
    pub fn get(&self, unit: Unit) -> i64 {
        self.to_fields().get(unit)
    }

    /// Returns the sign of this duration.
    ///
    /// This is `1` when any component is positive, `-1` when any component
    /// is negative and `0` when every component is zero.
    #[inline]
    pub fn sign(&self) -> i8 {
        self.sign
    }

    /// Returns true when every component of this duration is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.sign == 0
    }

    /// Returns a duration with every component negated.
    ///
    /// This never fails because no component can be `i64::MIN`.
    ///
    /// # Example
    ///
    /// ```
    /// use caldelta::ToDuration;
    ///
    /// assert_eq!(2.years().months(3).negate(), -2.years().months(3));
    /// ```
    #[inline]
    pub fn negate(self) -> Duration {
        Duration {
            sign: -self.sign,
            years: -self.years,
            months: -self.months,
            weeks: -self.weeks,
            days: -self.days,
            hours: -self.hours,
            minutes: -self.minutes,
            seconds: -self.seconds,
            milliseconds: -self.milliseconds,
            microseconds: -self.microseconds,
            nanoseconds: -self.nanoseconds,
        }
    }

    /// Returns the absolute value of this duration.
    #[inline]
    pub fn abs(self) -> Duration {
        if self.sign < 0 {
            self.negate()
        } else {
            self
        }
    }

    /// Returns the raw components of this duration.
    #[inline]
    pub fn to_fields(&self) -> DurationFields {
        DurationFields {
            years: self.years,
            months: self.months,
            weeks: self.weeks,
            days: self.days,
            hours: self.hours,
            minutes: self.minutes,
            seconds: self.seconds,
            milliseconds: self.milliseconds,
            microseconds: self.microseconds,
            nanoseconds: self.nanoseconds,
        }
    }

    /// Redistributes the days and sub-day units of this duration so that
    /// the biggest non-zero sub-day unit is at most `largest`.
    ///
    /// Days are treated as 24 hours. Years, months and weeks are left
    /// untouched. The total amount of time in days and smaller units is
    /// preserved exactly.
    ///
    /// # Errors
    ///
    /// This returns an error when `largest` is bigger than days, or when a
    /// balanced component doesn't fit in a 64-bit signed integer.
    ///
    /// # Example
    ///
    /// ```
    /// use caldelta::{ToDuration, Unit};
    ///
    /// let duration = 1.day().hours(1).minutes(90);
    /// assert_eq!(
    ///     duration.balance_time(Unit::Hour)?,
    ///     26.hours().minutes(30),
    /// );
    /// assert_eq!(
    ///     49.hours().balance_time(Unit::Day)?,
    ///     2.days().hours(1),
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn balance_time(self, largest: Unit) -> Result<Duration, Error> {
        balance::balance(self, largest)
    }

    /// Returns the calendar portion of this duration with every sub-day unit
    /// folded into whole days.
    ///
    /// Any remainder smaller than a day is discarded. This is the form of a
    /// duration handed to a calendar's `date_add`.
    pub(crate) fn to_date_duration(&self) -> Result<DateDuration, Error> {
        let days = balance::balance_into_days(self)?;
        Ok(DateDuration {
            years: self.years,
            months: self.months,
            weeks: self.weeks,
            days,
        })
    }

    /// Builds a duration with only years and months set.
    pub(crate) fn from_years_months(
        years: i64,
        months: i64,
    ) -> Result<Duration, Error> {
        Duration::new().try_years(years)?.try_months(months)
    }

    fn try_unit(self, unit: Unit, value: i64) -> Result<Duration, Error> {
        if value == i64::MIN {
            return Err(Error::from(E::MinimumValue { unit }));
        }
        let mut fields = self.to_fields();
        *fields.slot(unit) = value;
        Duration::try_from(fields)
    }
}

impl TryFrom<DurationFields> for Duration {
    type Error = Error;

    fn try_from(fields: DurationFields) -> Result<Duration, Error> {
        for unit in Unit::ALL {
            if fields.get(unit) == i64::MIN {
                return Err(Error::from(E::MinimumValue { unit }));
            }
        }
        let sign = validate_sign(&fields)?;
        Ok(Duration {
            sign,
            years: fields.years,
            months: fields.months,
            weeks: fields.weeks,
            days: fields.days,
            hours: fields.hours,
            minutes: fields.minutes,
            seconds: fields.seconds,
            milliseconds: fields.milliseconds,
            microseconds: fields.microseconds,
            nanoseconds: fields.nanoseconds,
        })
    }
}

impl From<Duration> for DurationFields {
    fn from(duration: Duration) -> DurationFields {
        duration.to_fields()
    }
}

impl TryFrom<DateDuration> for Duration {
    type Error = Error;

    fn try_from(duration: DateDuration) -> Result<Duration, Error> {
        let fields = DurationFields {
            years: duration.years,
            months: duration.months,
            weeks: duration.weeks,
            days: duration.days,
            ..DurationFields::default()
        };
        Duration::try_from(fields)
            .context(crate::error::calendar::Error::DateUntil)
    }
}

impl core::ops::Neg for Duration {
    type Output = Duration;

    #[inline]
    fn neg(self) -> Duration {
        self.negate()
    }
}

impl core::fmt::Debug for Duration {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl core::fmt::Display for Duration {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        crate::fmt::write_duration(self, f)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Duration {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Duration {
    fn arbitrary(g: &mut quickcheck::Gen) -> Duration {
        // Keep each component small so that adding the duration to a
        // year-month usually stays in range.
        let sign: i64 = *g.choose(&[-1, 0, 1]).unwrap();
        let mut fields = DurationFields::default();
        for unit in Unit::ALL {
            let magnitude = i64::from(u16::arbitrary(g) % 2_000);
            *fields.slot(unit) = sign * magnitude;
        }
        Duration::try_from(fields).unwrap()
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Self>> {
        let this = *self;
        alloc::boxed::Box::new(Unit::ALL.into_iter().filter_map(move |unit| {
            if this.get(unit) == 0 {
                return None;
            }
            let mut fields = this.to_fields();
            *fields.slot(unit) = 0;
            Duration::try_from(fields).ok()
        }))
    }
}

/// A trait for creating durations from integer literals.
///
/// This trait is implemented for all signed integer types that losslessly
/// convert into an `i64`. It provides a terse way to build durations:
///
/// ```
/// use caldelta::{Duration, ToDuration};
///
/// assert_eq!(3.months(), Duration::new().months(3));
/// assert_eq!(1.year().months(2), Duration::new().years(1).months(2));
/// assert_eq!(-5.days(), Duration::new().days(-5));
/// ```
///
/// Methods on `Duration` share their names with the methods here, so a
/// chain like `1.year().months(2)` first creates a duration and then sets
/// another component on it.
pub trait ToDuration: Sized {
    /// Create a new duration from this integer in units of years.
    fn years(self) -> Duration;

    /// Create a new duration from this integer in units of months.
    fn months(self) -> Duration;

    /// Create a new duration from this integer in units of weeks.
    fn weeks(self) -> Duration;

    /// Create a new duration from this integer in units of days.
    fn days(self) -> Duration;

    /// Create a new duration from this integer in units of hours.
    fn hours(self) -> Duration;

    /// Create a new duration from this integer in units of minutes.
    fn minutes(self) -> Duration;

    /// Create a new duration from this integer in units of seconds.
    fn seconds(self) -> Duration;

    /// Create a new duration from this integer in units of milliseconds.
    fn milliseconds(self) -> Duration;

    /// Create a new duration from this integer in units of microseconds.
    fn microseconds(self) -> Duration;

    /// Create a new duration from this integer in units of nanoseconds.
    fn nanoseconds(self) -> Duration;

    /// Equivalent to `years()`, but reads better for singular units.
    #[inline]
    fn year(self) -> Duration {
        self.years()
    }

    /// Equivalent to `months()`, but reads better for singular units.
    #[inline]
    fn month(self) -> Duration {
        self.months()
    }

    /// Equivalent to `weeks()`, but reads better for singular units.
    #[inline]
    fn week(self) -> Duration {
        self.weeks()
    }

    /// Equivalent to `days()`, but reads better for singular units.
    #[inline]
    fn day(self) -> Duration {
        self.days()
    }

    /// Equivalent to `hours()`, but reads better for singular units.
    #[inline]
    fn hour(self) -> Duration {
        self.hours()
    }

    /// Equivalent to `minutes()`, but reads better for singular units.
    #[inline]
    fn minute(self) -> Duration {
        self.minutes()
    }

    /// Equivalent to `seconds()`, but reads better for singular units.
    #[inline]
    fn second(self) -> Duration {
        self.seconds()
    }
}

macro_rules! impl_to_duration {
    ($ty:ty) => {
        impl ToDuration for $ty {
            #[inline]
            fn years(self) -> Duration {
                Duration::new().years(self)
            }
            #[inline]
            fn months(self) -> Duration {
                Duration::new().months(self)
            }
            #[inline]
            fn weeks(self) -> Duration {
                Duration::new().weeks(self)
            }
            #[inline]
            fn days(self) -> Duration {
                Duration::new().days(self)
            }
            #[inline]
            fn hours(self) -> Duration {
                Duration::new().hours(self)
            }
            #[inline]
            fn minutes(self) -> Duration {
                Duration::new().minutes(self)
            }
            #[inline]
            fn seconds(self) -> Duration {
                Duration::new().seconds(self)
            }
            #[inline]
            fn milliseconds(self) -> Duration {
                Duration::new().milliseconds(self)
            }
            #[inline]
            fn microseconds(self) -> Duration {
                Duration::new().microseconds(self)
            }
            #[inline]
            fn nanoseconds(self) -> Duration {
                Duration::new().nanoseconds(self)
            }
        }
    };
}

impl_to_duration!(i8);
impl_to_duration!(i16);
impl_to_duration!(i32);
impl_to_duration!(i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_sign_rejected_for_every_pair() {
        for positive in Unit::ALL {
            for negative in Unit::ALL {
                if positive == negative {
                    continue;
                }
                let mut fields = DurationFields::default();
                *fields.slot(positive) = 1;
                *fields.slot(negative) = -1;
                let err = Duration::try_from(fields).unwrap_err();
                assert!(err.is_range(), "{positive:?}/{negative:?}: {err}");
            }
        }
    }

    #[test]
    fn zero_components_impose_no_constraint() {
        let duration = Duration::new().years(-1).months(0).days(-3);
        assert_eq!(duration.sign(), -1);
        let duration = duration.months(0).try_hours(0).unwrap();
        assert_eq!(duration.sign(), -1);
    }

    #[test]
    fn setting_back_to_zero_resets_sign() {
        let duration = 5.days().days(0);
        assert_eq!(duration.sign(), 0);
        assert!(duration.is_zero());
        // After clearing, the opposite sign is allowed again.
        assert_eq!(duration.days(-5).sign(), -1);
    }

    #[test]
    fn minimum_value_rejected() {
        assert!(Duration::new().try_hours(i64::MIN).is_err());
        let fields =
            DurationFields { nanoseconds: i64::MIN, ..Default::default() };
        assert!(Duration::try_from(fields).is_err());
        assert_eq!(
            Duration::new().hours(i64::MAX).negate().get_hours(),
            -i64::MAX,
        );
    }

    #[test]
    #[should_panic]
    fn setter_panics_on_mixed_sign() {
        let _ = 1.year().months(-1);
    }

    #[test]
    fn to_date_duration_folds_time_into_days() {
        let duration = 1.month().days(2).hours(47).minutes(59);
        let date = duration.to_date_duration().unwrap();
        assert_eq!(
            date,
            DateDuration { years: 0, months: 1, weeks: 0, days: 3 }
        );

        let duration = -1.week().hours(24).nanoseconds(1);
        let date = duration.to_date_duration().unwrap();
        assert_eq!(
            date,
            DateDuration { years: 0, months: 0, weeks: -1, days: -1 }
        );
    }

    quickcheck::quickcheck! {
        fn prop_negate_flips_sign(duration: Duration) -> bool {
            let negated = duration.negate();
            negated.sign() == -duration.sign()
                && negated.negate() == duration
        }

        fn prop_fields_roundtrip(duration: Duration) -> bool {
            Duration::try_from(duration.to_fields()).unwrap() == duration
        }
    }
}
