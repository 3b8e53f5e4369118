/*!
Validation of rounding increments.

Years and months have no fixed cardinality in a larger unit (there is no
"number of years in a century" that a calendar is required to respect), so
unlike clock units, an increment for them only has to be positive. It does
not need to divide evenly into anything.
*/

use crate::{
    error::{round::Error as E, Error},
    Unit,
};

/// Validates the given rounding increment for rounding a difference between
/// year-months in units of `unit`.
pub(crate) fn for_year_month(
    unit: Unit,
    increment: i64,
) -> Result<i64, Error> {
    if increment <= 0 {
        return Err(Error::from(E::IncrementNotPositive {
            unit,
            given: increment,
        }));
    }
    Ok(increment)
}
