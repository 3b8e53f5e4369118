use crate::{error, Unit};

#[derive(Clone, Debug)]
pub(crate) enum Error {
    BalanceLargestUnit { unit: Unit },
    BalanceOverflow { unit: Unit },
    MinimumValue { unit: Unit },
    MixedSign { positive: Unit, negative: Unit },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Duration(err).into()
    }
}

impl error::IntoError for Error {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            BalanceLargestUnit { unit } => write!(
                f,
                "cannot balance duration into '{unit}', \
                 largest unit must be days or smaller",
                unit = unit.plural(),
            ),
            BalanceOverflow { unit } => write!(
                f,
                "balancing duration overflowed the supported range \
                 of '{unit}'",
                unit = unit.plural(),
            ),
            MinimumValue { unit } => write!(
                f,
                "duration component '{unit}' cannot be the minimum \
                 64-bit signed integer",
                unit = unit.plural(),
            ),
            MixedSign { positive, negative } => write!(
                f,
                "duration components must all have the same sign, \
                 but '{positive}' is positive and '{negative}' is negative",
                positive = positive.plural(),
                negative = negative.plural(),
            ),
        }
    }
}
