use alloc::boxed::Box;

use crate::{calendar::FieldName, error, Unit};

#[derive(Clone, Debug)]
pub(crate) enum Error {
    DateAdd,
    DateUntil,
    Mismatch { ours: Box<str>, theirs: Box<str> },
    MissingField { field: FieldName },
    UntilLargestUnit { unit: Unit },
}

impl Error {
    pub(crate) fn mismatch(ours: &str, theirs: &str) -> Error {
        Error::Mismatch { ours: ours.into(), theirs: theirs.into() }
    }
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Calendar(err).into()
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
            DateAdd => f.write_str("failed to add duration to anchor date"),
            DateUntil => {
                f.write_str("failed to compute difference between dates")
            }
            Mismatch { ref ours, ref theirs } => write!(
                f,
                "cannot compute difference between months of \
                 {ours} and {theirs} calendars",
            ),
            MissingField { field } => write!(
                f,
                "field record is missing required field '{field}'",
                field = field.as_str(),
            ),
            UntilLargestUnit { unit } => write!(
                f,
                "largest unit for a difference between dates must be \
                 days or bigger, but found '{unit}'",
                unit = unit.singular(),
            ),
        }
    }
}
