use alloc::{boxed::Box, sync::Arc};

pub(crate) mod calendar;
pub(crate) mod civil;
pub(crate) mod duration;
pub(crate) mod round;

/// An error that can occur in this crate.
///
/// Most errors are the result of a value falling outside of its supported
/// range. For example, adding a duration to a year-month that would produce
/// a year beyond the supported limits. Other errors include:
///
/// * A duration whose non-zero components do not all share the same sign.
/// * An invalid configuration of rounding options, like a largest unit that
/// is smaller than the smallest unit.
/// * Combining two year-month values that use different calendars.
/// * A field record that is missing a field required by a calendar.
///
/// # Introspection is limited
///
/// Other than implementing the [`std::error::Error`] trait when the
/// `std` feature is enabled, the [`core::fmt::Debug`] trait and the
/// [`core::fmt::Display`] trait, this error type provides two predicates:
/// [`Error::is_range`] and [`Error::is_invalid_input`]. Every error returned
/// by this crate (other than ad hoc errors created by a calendar
/// implementation via [`Error::from_args`]) satisfies exactly one of them.
///
/// # Design
///
/// This crate uses a single error type for every fallible operation. Errors
/// may carry a chain of causes, which are shown when the error is displayed.
#[derive(Clone)]
pub struct Error {
    /// The internal representation of an error.
    ///
    /// This is in an `Arc` to make an `Error` cloneable and one word in
    /// size.
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Creates a new error value from `core::fmt::Arguments`.
    ///
    /// This is primarily intended for implementations of
    /// [`Calendar`](crate::calendar::Calendar) that need to report a failure
    /// this crate doesn't otherwise know about.
    ///
    /// # Example
    ///
    /// ```
    /// use caldelta::Error;
    ///
    /// let err = Error::from_args(format_args!("something failed"));
    /// assert_eq!(err.to_string(), "something failed");
    /// ```
    pub fn from_args<'a>(message: core::fmt::Arguments<'a>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::from_args(message)))
    }

    /// Returns true when this error originated as a result of a value being
    /// out of range or an operation being asked to do something it does not
    /// support.
    ///
    /// This includes mixed-sign durations, disallowed or misordered rounding
    /// units, non-positive rounding increments and mismatched calendars.
    ///
    /// # Example
    ///
    /// ```
    /// use caldelta::civil::YearMonth;
    ///
    /// assert!(YearMonth::iso(2025, 13).unwrap_err().is_range());
    /// ```
    pub fn is_range(&self) -> bool {
        use self::ErrorKind::*;
        use self::{
            calendar::Error as CalendarError, civil::Error as CivilError,
        };

        match *self.root().kind() {
            Range(_) | SlimRange(_) | Duration(_) | Round(_) => true,
            Calendar(ref err) => {
                !matches!(*err, CalendarError::MissingField { .. })
            }
            Civil(ref err) => !matches!(*err, CivilError::EmptyWith),
            Adhoc(_) | Unknown => false,
        }
    }

    /// Returns true when this error originated as a result of malformed
    /// input. For example, a field record that is missing a field required
    /// by the calendar, or a partial record that sets nothing at all.
    ///
    /// # Example
    ///
    /// ```
    /// use caldelta::{calendar::{Fields, Overflow}, civil::YearMonth};
    ///
    /// let ym = YearMonth::iso(2025, 3)?;
    /// let err = ym.with(&Fields::new(), Overflow::Constrain).unwrap_err();
    /// assert!(err.is_invalid_input());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn is_invalid_input(&self) -> bool {
        use self::ErrorKind::*;
        use self::{
            calendar::Error as CalendarError, civil::Error as CivilError,
        };

        matches!(
            *self.root().kind(),
            Calendar(CalendarError::MissingField { .. })
                | Civil(CivilError::EmptyWith)
        )
    }
}

impl Error {
    /// Creates a new error indicating that a `given` value is out of the
    /// specified `min..=max` range. The given `what` label is used in the
    /// error message as a human readable description of what exactly is out
    /// of range. (e.g., "month")
    #[inline(never)]
    #[cold]
    pub(crate) fn range(
        what: &'static str,
        given: impl Into<i128>,
        min: impl Into<i128>,
        max: impl Into<i128>,
    ) -> Error {
        Error::from(ErrorKind::Range(RangeError::new(what, given, min, max)))
    }

    /// Creates a new error indicating that a value is out of the allowed
    /// range, without including the value or the range in the message.
    #[inline(never)]
    #[cold]
    pub(crate) fn slim_range(what: &'static str) -> Error {
        Error::from(ErrorKind::SlimRange(SlimRangeError { what }))
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let kind = match consequent.inner {
            None => ErrorKind::Unknown,
            Some(inner) => match Arc::try_unwrap(inner) {
                Ok(inner) => inner.kind,
                // A consequent with other references is a shared error
                // value we can't take ownership of, so keep the cause
                // chain of `self` and drop the consequent.
                Err(_) => return self,
            },
        };
        Error { inner: Some(Arc::new(ErrorInner { kind, cause: Some(self) })) }
    }

    /// Returns the root error in this chain.
    fn root(&self) -> &Error {
        let mut err = self;
        while let Some(cause) =
            err.inner.as_ref().and_then(|inner| inner.cause.as_ref())
        {
            err = cause;
        }
        err
    }

    /// Returns a chain of error values.
    ///
    /// This starts with the most recent error added to the chain. That is,
    /// the highest level context. The last error in the chain is always the
    /// "root" cause.
    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    /// Returns the kind of this error.
    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f
                    .debug_struct("Error")
                    .field("kind", &"None")
                    .finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

/// The underlying kind of a [`Error`].
#[derive(Debug)]
enum ErrorKind {
    Adhoc(AdhocError),
    Calendar(self::calendar::Error),
    Civil(self::civil::Error),
    Duration(self::duration::Error),
    Range(RangeError),
    Round(self::round::Error),
    SlimRange(SlimRangeError),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match *self {
            Adhoc(ref msg) => msg.fmt(f),
            Calendar(ref err) => err.fmt(f),
            Civil(ref err) => err.fmt(f),
            Duration(ref err) => err.fmt(f),
            Range(ref err) => err.fmt(f),
            Round(ref err) => err.fmt(f),
            SlimRange(ref err) => err.fmt(f),
            Unknown => f.write_str("unknown caldelta error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { inner: Some(Arc::new(ErrorInner { kind, cause: None })) }
    }
}

/// A generic error message.
///
/// This only exists to support `Error::from_args`, which lets calendar
/// implementations outside this crate manufacture an `Error`.
struct AdhocError {
    message: Box<str>,
}

impl AdhocError {
    fn from_args<'a>(message: core::fmt::Arguments<'a>) -> AdhocError {
        use alloc::string::ToString;

        AdhocError { message: message.to_string().into_boxed_str() }
    }
}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.message, f)
    }
}

impl core::fmt::Debug for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.message, f)
    }
}

/// An error that occurs when an input value is out of bounds.
///
/// The error message produced by this type will include a name describing
/// which input was out of bounds, the value given and its minimum and maximum
/// allowed values.
#[derive(Debug)]
struct RangeError {
    what: &'static str,
    given: i128,
    min: i128,
    max: i128,
}

impl RangeError {
    fn new(
        what: &'static str,
        given: impl Into<i128>,
        min: impl Into<i128>,
        max: impl Into<i128>,
    ) -> RangeError {
        RangeError {
            what,
            given: given.into(),
            min: min.into(),
            max: max.into(),
        }
    }
}

impl core::fmt::Display for RangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let RangeError { what, given, min, max } = *self;
        write!(
            f,
            "parameter '{what}' with value {given} \
             is not in the required range of {min}..={max}",
        )
    }
}

/// A slim error that occurs when an input value is out of bounds.
///
/// Unlike `RangeError`, this only includes a static description of the
/// value that is out of bounds.
#[derive(Clone, Debug)]
struct SlimRangeError {
    what: &'static str,
}

impl core::fmt::Display for SlimRangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let SlimRangeError { what } = *self;
        write!(f, "parameter '{what}' is not in the required range")
    }
}

/// A simple trait to encapsulate automatic conversion to `Error`.
///
/// This trait basically exists to make `ErrorContext::context` work without
/// needing to rely on public `From` impls for the internal structured error
/// types.
pub(crate) trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

/// A trait for contextualizing error values.
///
/// This makes it easy to contextualize either `Error` or `Result<T, Error>`.
/// Specifically, in the latter case, it absolves one of the need to call
/// `map_err` everywhere one wants to add context to an error.
pub(crate) trait ErrorContext<T, E> {
    /// Contextualize the given consequent error with this (`self`) error as
    /// the cause.
    ///
    /// This is equivalent to saying that "consequent is caused by self."
    fn context(self, consequent: impl IntoError) -> Result<T, Error>;
}

impl<T, E> ErrorContext<T, E> for Result<T, E>
where
    E: IntoError,
{
    fn context(self, consequent: impl IntoError) -> Result<T, Error> {
        self.map_err(|err| {
            err.into_error().context_impl(consequent.into_error())
        })
    }
}
