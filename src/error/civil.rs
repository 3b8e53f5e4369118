use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    EmptyWith,
    FailedAdd,
    FailedFromFields,
    FailedSubtract,
    FailedToDate,
    YearMonthOutOfRange { year: i32, month: i8 },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Civil(err).into()
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
            EmptyWith => f.write_str(
                "year-month `with` requires a partial record \
                 that sets at least one field",
            ),
            FailedAdd => f.write_str("failed to add duration to year-month"),
            FailedFromFields => {
                f.write_str("failed to resolve year-month from fields")
            }
            FailedSubtract => {
                f.write_str("failed to subtract duration from year-month")
            }
            FailedToDate => {
                f.write_str("failed to combine year-month with day")
            }
            YearMonthOutOfRange { year, month } => write!(
                f,
                "year-month {year:04}-{month:02} is outside the supported \
                 range of -271821-04 to 275760-09",
            ),
        }
    }
}
