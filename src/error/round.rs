use crate::{error, Unit};

#[derive(Clone, Debug)]
pub(crate) enum Error {
    ForDifference,
    IncrementNotPositive { unit: Unit, given: i64 },
    LargestSmallerThanSmallest { smallest: Unit, largest: Unit },
    NotAllowedUnit { unit: Unit },
    Overflow { unit: Unit },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Round(err).into()
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
            ForDifference => {
                f.write_str("failed rounding difference between year-months")
            }
            IncrementNotPositive { unit, given } => write!(
                f,
                "rounding increment {given} for {unit} \
                 must be greater than zero",
                unit = unit.plural(),
            ),
            LargestSmallerThanSmallest { smallest, largest } => write!(
                f,
                "largest unit ('{largest}') cannot be smaller than \
                 smallest unit ('{smallest}')",
                largest = largest.singular(),
                smallest = smallest.singular(),
            ),
            NotAllowedUnit { unit } => write!(
                f,
                "difference between year-months can only use units of \
                 years or months, but found '{unit}'",
                unit = unit.singular(),
            ),
            Overflow { unit } => write!(
                f,
                "rounding overflowed the supported range of '{unit}'",
                unit = unit.plural(),
            ),
        }
    }
}
