/*!
Calendar-relative duration arithmetic and rounding for year-month values.

This crate provides [`civil::YearMonth`], a month in a particular year of a
particular calendar, along with the arithmetic needed to move it around by a
[`Duration`] and to measure the [`Duration`] between two of them. Calendars
are pluggable through the [`calendar::Calendar`] trait. The ISO 8601
calendar is built in.

The hard part of this arithmetic is that months and years have no fixed
length. This crate handles that by always going through a calendar and an
anchor date:

* Adding a duration starts from the first day of the month when moving
forward, and from the last day of the month when moving backward, so that a
short target month never causes the result to skid into a neighboring
month.
* Differences are measured between the first days of both months, and
rounding compares leftover days against the real length of the next month
or year from the anchor.

# Example

```
use caldelta::{
    civil::{YearMonth, YearMonthDifference},
    RoundMode, ToDuration, Unit,
};

let start = YearMonth::iso(2021, 3)?;
assert_eq!(start.checked_add(1.month())?.to_string(), "2021-04");
assert_eq!(start.checked_sub(1.month())?.to_string(), "2021-02");

let end = YearMonth::iso(2023, 5)?;
assert_eq!(start.until(end.clone())?, 2.years().months(2));

let options = YearMonthDifference::new(end)
    .smallest(Unit::Year)
    .mode(RoundMode::HalfExpand);
assert_eq!(start.until(options)?, 2.years());

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Durations

A [`Duration`] has ten independent components, from years down to
nanoseconds. Every non-zero component must have the same sign: a duration
like "1 month and -3 days" is rejected when it is built, since it has no
unambiguous meaning in calendar arithmetic.

# Crate features

* **std** (enabled by default) - Implements `std::error::Error` for
[`Error`].
* **logging** - Emits `log` records (at `debug` and `trace` levels) that
describe the anchors and intermediate values used by arithmetic and
rounding. This is useful for understanding why a particular result was
produced.
* **serde** - Implements `serde::Serialize` for [`civil::YearMonth`] and
[`Duration`], using their `Display` representations.
*/

#![no_std]
#![deny(rustdoc::broken_intra_doc_links)]
// This adds Cargo feature annotations to items in the rustdoc output.
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// We generally want all types to impl Debug.
#![warn(missing_debug_implementations)]

#[cfg(any(test, feature = "std"))]
extern crate std;

// Errors and calendar handles both allocate, so there is no core-only mode.
extern crate alloc;

pub use crate::{
    duration::{Duration, DurationFields, ToDuration},
    error::Error,
    round::RoundMode,
    unit::Unit,
};

#[macro_use]
mod logging;

pub mod calendar;
pub mod civil;
mod duration;
mod error;
pub mod fmt;
pub mod round;
mod unit;
mod util;
