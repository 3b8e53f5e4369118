use crate::util::b;

/// A way to refer to a single calendar or clock unit.
///
/// This type is principally used in APIs involving a [`Duration`], which is
/// a ten-component quantity of time. Units are also used to configure how
/// the difference between two year-month values is reported and rounded.
///
/// Units are ordered from largest to smallest: a year is bigger than a
/// month, a month is bigger than a week and so on down to nanoseconds.
///
/// # Example
///
/// ```
/// use caldelta::Unit;
///
/// assert!(Unit::Year > Unit::Month);
/// assert!(Unit::Day > Unit::Hour);
/// assert!(Unit::Microsecond > Unit::Nanosecond);
/// ```
///
/// [`Duration`]: crate::Duration
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Unit {
    /// A calendar year. Its length in days depends on the calendar and on
    /// which year is being measured.
    Year = 9,
    /// A calendar month. Its length in days depends on the calendar and on
    /// which month is being measured.
    Month = 8,
    /// A week is always 7 days.
    Week = 7,
    /// A day. For the purposes of balancing sub-day units, a day is always
    /// 24 hours.
    Day = 6,
    /// An hour is always 60 minutes.
    Hour = 5,
    /// A minute is always 60 seconds.
    Minute = 4,
    /// A second is always 1,000 milliseconds.
    Second = 3,
    /// A millisecond is always 1,000 microseconds.
    Millisecond = 2,
    /// A microsecond is always 1,000 nanoseconds.
    Microsecond = 1,
    /// A nanosecond is the smallest granularity of time supported.
    Nanosecond = 0,
}

impl Unit {
    /// All units, ordered from largest to smallest.
    pub(crate) const ALL: [Unit; 10] = [
        Unit::Year,
        Unit::Month,
        Unit::Week,
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
        Unit::Millisecond,
        Unit::Microsecond,
        Unit::Nanosecond,
    ];

    /// Returns the number of nanoseconds in this unit.
    ///
    /// Returns `None` for units whose length depends on a calendar. That is,
    /// years, months and weeks. (Weeks are uniform, but they are never
    /// balanced into sub-day units, so they are treated as calendar units.)
    pub(crate) fn nanoseconds(self) -> Option<i128> {
        let nanos = match self {
            Unit::Nanosecond => 1,
            Unit::Microsecond => b::NANOS_PER_MICRO,
            Unit::Millisecond => b::NANOS_PER_MILLI,
            Unit::Second => b::NANOS_PER_SECOND,
            Unit::Minute => b::NANOS_PER_MINUTE,
            Unit::Hour => b::NANOS_PER_HOUR,
            Unit::Day => b::NANOS_PER_CIVIL_DAY,
            Unit::Year | Unit::Month | Unit::Week => return None,
        };
        Some(i128::from(nanos))
    }

    /// Returns true when this unit is one of the units a calendar must be
    /// consulted for.
    pub(crate) fn is_calendar(self) -> bool {
        matches!(self, Unit::Year | Unit::Month | Unit::Week)
    }

    /// A human readable singular description of this unit of time.
    pub(crate) fn singular(&self) -> &'static str {
        match *self {
            Unit::Year => "year",
            Unit::Month => "month",
            Unit::Week => "week",
            Unit::Day => "day",
            Unit::Hour => "hour",
            Unit::Minute => "minute",
            Unit::Second => "second",
            Unit::Millisecond => "millisecond",
            Unit::Microsecond => "microsecond",
            Unit::Nanosecond => "nanosecond",
        }
    }

    /// A human readable plural description of this unit of time.
    pub(crate) fn plural(&self) -> &'static str {
        match *self {
            Unit::Year => "years",
            Unit::Month => "months",
            Unit::Week => "weeks",
            Unit::Day => "days",
            Unit::Hour => "hours",
            Unit::Minute => "minutes",
            Unit::Second => "seconds",
            Unit::Millisecond => "milliseconds",
            Unit::Microsecond => "microseconds",
            Unit::Nanosecond => "nanoseconds",
        }
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Unit {
    fn arbitrary(g: &mut quickcheck::Gen) -> Unit {
        *g.choose(&Unit::ALL).unwrap()
    }
}
