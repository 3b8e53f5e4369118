/*!
Calendar-qualified civil values: ISO reference dates and year-months.

The main type in this module is [`YearMonth`], a month in a particular year
of a particular calendar. It supports adding and subtracting durations,
computing (and rounding) the difference between two year-months, and
comparisons.

[`Date`] is the ISO 8601 date every calendar maps its dates onto.
*/

pub use self::{
    date::Date,
    year_month::{YearMonth, YearMonthArithmetic, YearMonthDifference},
};

mod anchored;
mod date;
mod year_month;
