/*!
Rounding of differences between year-months.

The public face of this module is [`RoundMode`], which selects how a
remainder is handled. The mode, a smallest unit and a rounding increment are
configured on [`YearMonthDifference`](crate::civil::YearMonthDifference).
*/

pub use self::mode::RoundMode;

pub(crate) mod increment;
mod mode;
pub(crate) mod relative;
