/*!
Rounding of year and month quantities relative to an anchor date.

A month (and therefore a year) has no fixed length. Whether 2 years and 7
months is closer to 2 years or 3 years depends on how many days are in the
months being skipped. So rounding is always done relative to an anchor: the
whole units are added to the anchor, the leftover is measured in days, and
the leftover is compared against the length in days of one more unit
starting from the end of the whole units.

All comparisons are done on integers. A fractional unit `whole + leftover /
unit_days` is rounded to an increment by rounding `whole * unit_days +
leftover` to a multiple of `increment * unit_days`, which is exact.
*/

use crate::{
    calendar::{CalendarRef, DateDuration, Overflow},
    civil::Date,
    error::{round::Error as E, Error, ErrorContext},
    round::RoundMode,
    Unit,
};

/// The resolved configuration for rounding a difference between
/// year-months.
#[derive(Clone, Copy, Debug)]
pub(crate) struct YearMonthRound {
    pub(crate) smallest: Unit,
    pub(crate) largest: Unit,
    pub(crate) mode: RoundMode,
    pub(crate) increment: i64,
}

impl YearMonthRound {
    /// Rounds `years` and `months` relative to `anchor` in the given
    /// calendar.
    ///
    /// `years` and `months` must have the same sign. The result never has a
    /// unit bigger than `self.largest` or a non-zero unit smaller than
    /// `self.smallest`.
    pub(crate) fn round(
        &self,
        calendar: &CalendarRef,
        anchor: Date,
        years: i64,
        months: i64,
    ) -> Result<(i64, i64), Error> {
        let sign = DateDuration::years_months(years, months).sign();
        if sign == 0 {
            return Ok((0, 0));
        }
        let (years, months) = match self.smallest {
            Unit::Year => {
                let years =
                    self.round_years(calendar, anchor, years, months, sign)?;
                (years, 0)
            }
            _ => {
                // No weeks or days are ever carried along with months, so
                // the leftover beyond the whole months is always zero and
                // the increment can be applied to the count directly.
                let rounded = self.mode.round(
                    i128::from(months),
                    i128::from(self.increment),
                );
                let months = i64::try_from(rounded).map_err(|_| {
                    Error::from(E::Overflow { unit: Unit::Month })
                })?;
                (years, months)
            }
        };
        // Whatever the unit, the rounded difference has to land on a date
        // the calendar can represent.
        let end = calendar
            .get()
            .date_add(
                anchor,
                DateDuration::years_months(years, months),
                Overflow::Constrain,
            )
            .context(E::Overflow { unit: self.smallest })?;
        let (years, months) = match self.smallest {
            Unit::Year => (years, months),
            _ => self.rebalance(calendar, anchor, end, years, months)?,
        };
        trace!(
            "rounded difference relative to {anchor} to {years} years and \
             {months} months (smallest: {smallest}, increment: {increment}, \
             mode: {mode:?})",
            smallest = self.smallest.singular(),
            increment = self.increment,
            mode = self.mode,
        );
        Ok((years, months))
    }

    fn round_years(
        &self,
        calendar: &CalendarRef,
        anchor: Date,
        years: i64,
        months: i64,
        sign: i8,
    ) -> Result<i64, Error> {
        let cal = calendar.get();
        let whole = cal.date_add(
            anchor,
            DateDuration::years_months(years, 0),
            Overflow::Constrain,
        )?;
        let target = cal.date_add(
            anchor,
            DateDuration::years_months(years, months),
            Overflow::Constrain,
        )?;
        let one_more = cal.date_add(
            whole,
            DateDuration::years_months(i64::from(sign), 0),
            Overflow::Constrain,
        )?;
        let leftover = i128::from(whole.days_until(target));
        let unit_days = i128::from(whole.days_until(one_more).abs());
        if unit_days == 0 {
            return Err(Error::from(E::Overflow { unit: Unit::Year }));
        }
        trace!(
            "rounding {years} years and {leftover} days \
             where one year from {whole} is {unit_days} days",
        );
        let quantity = i128::from(years) * unit_days + leftover;
        let increment = i128::from(self.increment) * unit_days;
        let rounded = self.mode.round(quantity, increment) / unit_days;
        i64::try_from(rounded)
            .map_err(|_| Error::from(E::Overflow { unit: Unit::Year }))
    }

    /// Moves whole years out of `months` when rounding pushed months up to
    /// (or past) the length of a year and years are allowed.
    fn rebalance(
        &self,
        calendar: &CalendarRef,
        anchor: Date,
        end: Date,
        years: i64,
        months: i64,
    ) -> Result<(i64, i64), Error> {
        if self.largest != Unit::Year || months == 0 {
            return Ok((years, months));
        }
        let balanced = calendar.get().date_until(anchor, end, Unit::Year)?;
        if balanced.weeks != 0 || balanced.days != 0 {
            return Ok((years, months));
        }
        Ok((balanced.years, balanced.months))
    }
}
