/// The mode for dealing with the remainder when rounding a difference
/// between year-months.
///
/// This is used with [`YearMonthDifference::mode`] when asking for the
/// difference between two [`YearMonth`] values with a smallest unit of
/// years, or with a rounding increment bigger than `1`.
///
/// In the documentation for each variant, "the increment" refers to the
/// rounding increment in units of the smallest unit. For example, with a
/// smallest unit of months and an increment of `3`, results are rounded to a
/// multiple of 3 months.
///
/// # Example
///
/// This shows how the mode changes the result of rounding 2 years and 7
/// months to whole years:
///
/// ```
/// use caldelta::{
///     civil::{YearMonth, YearMonthDifference},
///     RoundMode, ToDuration, Unit,
/// };
///
/// let ym1 = YearMonth::iso(2021, 3)?;
/// let ym2 = YearMonth::iso(2023, 10)?;
///
/// // The default truncates.
/// let options = YearMonthDifference::new(ym2.clone()).smallest(Unit::Year);
/// assert_eq!(ym1.until(options)?, 2.years());
///
/// // But we can round to the nearest year instead.
/// let options = YearMonthDifference::new(ym2)
///     .smallest(Unit::Year)
///     .mode(RoundMode::HalfExpand);
/// assert_eq!(ym1.until(options)?, 3.years());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// [`YearMonthDifference::mode`]: crate::civil::YearMonthDifference::mode
/// [`YearMonth`]: crate::civil::YearMonth
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RoundMode {
    /// Rounds toward positive infinity.
    ///
    /// For negative differences, this makes the magnitude smaller. To round
    /// away from zero, use `Expand`.
    Ceil,
    /// Rounds toward negative infinity.
    ///
    /// For negative differences, this makes the magnitude bigger. To round
    /// toward zero, use `Trunc`.
    Floor,
    /// Rounds away from zero like `Ceil` for positive differences and like
    /// `Floor` for negative differences.
    Expand,
    /// Rounds toward zero, chopping off any fractional part of a unit.
    ///
    /// This is the default when computing the difference between
    /// year-months.
    Trunc,
    /// Rounds to the nearest allowed value like `HalfExpand`, but when there
    /// is a tie, round toward positive infinity like `Ceil`.
    HalfCeil,
    /// Rounds to the nearest allowed value like `HalfExpand`, but when there
    /// is a tie, round toward negative infinity like `Floor`.
    HalfFloor,
    /// Rounds to the nearest value allowed by the rounding increment and the
    /// smallest unit. When there is a tie, round away from zero.
    ///
    /// This corresponds to how rounding is often taught in school.
    HalfExpand,
    /// Rounds to the nearest allowed value like `HalfExpand`, but when there
    /// is a tie, round toward zero like `Trunc`.
    HalfTrunc,
    /// Rounds to the nearest allowed value like `HalfExpand`, but when there
    /// is a tie, round toward the value that is an even multiple of the
    /// rounding increment. For example, with a rounding increment of `3`,
    /// the number `10` would round up to `12` instead of down to `9`, because
    /// `12` is an even multiple of `3`, where as `9` is is an odd multiple.
    HalfEven,
}

impl RoundMode {
    /// Returns the mode that rounds a negated quantity the same way this
    /// mode rounds the original quantity.
    ///
    /// Directional modes swap (`Ceil` with `Floor`, and `HalfCeil` with
    /// `HalfFloor`). Every other mode is symmetric around zero and is
    /// returned unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use caldelta::RoundMode;
    ///
    /// assert_eq!(RoundMode::Ceil.negate(), RoundMode::Floor);
    /// assert_eq!(RoundMode::HalfFloor.negate(), RoundMode::HalfCeil);
    /// assert_eq!(RoundMode::HalfEven.negate(), RoundMode::HalfEven);
    /// ```
    pub fn negate(self) -> RoundMode {
        match self {
            RoundMode::Ceil => RoundMode::Floor,
            RoundMode::Floor => RoundMode::Ceil,
            RoundMode::HalfCeil => RoundMode::HalfFloor,
            RoundMode::HalfFloor => RoundMode::HalfCeil,
            RoundMode::Expand
            | RoundMode::Trunc
            | RoundMode::HalfExpand
            | RoundMode::HalfTrunc
            | RoundMode::HalfEven => self,
        }
    }

    /// Rounds `quantity` to a multiple of `increment` according to this
    /// mode.
    ///
    /// Callers must pass a positive `increment`. Both values are in the same
    /// (arbitrary) unit, so the fraction `quantity / increment` is rounded
    /// exactly without any floating point.
    pub(crate) fn round(self, quantity: i128, increment: i128) -> i128 {
        // ref: https://tc39.es/proposal-temporal/
        // #sec-temporal-roundnumbertoincrement
        let mut quotient = quantity / increment;
        let remainder = quantity % increment;
        if remainder == 0 {
            return quantity;
        }
        let sign = if remainder < 0 { -1 } else { 1 };
        let tiebreaker = (remainder * 2).abs();
        let tie = tiebreaker == increment;
        let expand_is_nearer = tiebreaker > increment;
        match self {
            RoundMode::Ceil => {
                if sign > 0 {
                    quotient += sign;
                }
            }
            RoundMode::Floor => {
                if sign < 0 {
                    quotient += sign;
                }
            }
            RoundMode::Expand => {
                quotient += sign;
            }
            RoundMode::Trunc => {}
            RoundMode::HalfCeil => {
                if expand_is_nearer || (tie && sign > 0) {
                    quotient += sign;
                }
            }
            RoundMode::HalfFloor => {
                if expand_is_nearer || (tie && sign < 0) {
                    quotient += sign;
                }
            }
            RoundMode::HalfExpand => {
                if expand_is_nearer || tie {
                    quotient += sign;
                }
            }
            RoundMode::HalfTrunc => {
                if expand_is_nearer {
                    quotient += sign;
                }
            }
            RoundMode::HalfEven => {
                if expand_is_nearer || (tie && quotient.rem_euclid(2) == 1) {
                    quotient += sign;
                }
            }
        }
        // Quantities here are day counts derived from 64-bit duration
        // components, so this saturates only on nonsensical inputs.
        quotient.saturating_mul(increment)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for RoundMode {
    fn arbitrary(g: &mut quickcheck::Gen) -> RoundMode {
        *g.choose(&[
            RoundMode::Ceil,
            RoundMode::Floor,
            RoundMode::Expand,
            RoundMode::Trunc,
            RoundMode::HalfCeil,
            RoundMode::HalfFloor,
            RoundMode::HalfExpand,
            RoundMode::HalfTrunc,
            RoundMode::HalfEven,
        ])
        .unwrap()
    }
}
