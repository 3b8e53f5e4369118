use std::{cmp::Ordering, collections::BTreeSet};

use caldelta::{calendar::CalendarRef, civil::YearMonth};

use super::{ym, Result};

#[test]
fn ordering() {
    assert_eq!(ym(2021, 3).compare(&ym(2021, 4)), Ordering::Less);
    assert_eq!(ym(2021, 4).compare(&ym(2021, 3)), Ordering::Greater);
    assert_eq!(ym(2021, 3).compare(&ym(2021, 3)), Ordering::Equal);
    assert_eq!(ym(2020, 12).compare(&ym(2021, 1)), Ordering::Less);
    assert_eq!(ym(-1, 12).compare(&ym(0, 1)), Ordering::Less);

    let sorted: Vec<YearMonth> =
        [ym(2024, 5), ym(-5, 1), ym(2024, 1), ym(10_000, 2), ym(2024, 5)]
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
    let want = vec![ym(-5, 1), ym(2024, 1), ym(2024, 5), ym(10_000, 2)];
    assert_eq!(sorted, want);
}

/// Equality includes the ISO reference day, even though it isn't part of
/// what a year-month means.
#[test]
fn equality_includes_reference_day() -> Result {
    let ym1 = YearMonth::new(2024, 2, CalendarRef::ISO, 1)?;
    let ym2 = YearMonth::new(2024, 2, CalendarRef::ISO, 29)?;
    assert_ne!(ym1, ym2);
    assert_eq!(ym1.compare(&ym2), Ordering::Less);
    assert_eq!(ym1, ym(2024, 2));
    Ok(())
}

/// Arithmetic always produces the calendar's canonical reference day.
#[test]
fn arithmetic_normalizes_reference_day() -> Result {
    let odd = YearMonth::new(2024, 2, CalendarRef::ISO, 29)?;
    assert_eq!(odd.until(ym(2024, 2))?, caldelta::Duration::new());
    assert_eq!(odd.checked_add(caldelta::Duration::new())?, ym(2024, 2));
    Ok(())
}

#[test]
fn range_limits() -> Result {
    assert!(YearMonth::iso(-271821, 4).is_ok());
    assert!(YearMonth::iso(275760, 9).is_ok());

    let err = YearMonth::iso(-271821, 3).unwrap_err();
    assert!(err.is_range(), "{err}");
    let err = YearMonth::iso(275760, 10).unwrap_err();
    assert!(err.is_range(), "{err}");
    let err = YearMonth::iso(2021, 0).unwrap_err();
    assert!(err.is_range(), "{err}");
    let err = YearMonth::iso(300_000, 1).unwrap_err();
    assert!(err.is_range(), "{err}");
    Ok(())
}

#[test]
fn display() {
    assert_eq!(ym(2021, 3).to_string(), "2021-03");
    assert_eq!(ym(0, 1).to_string(), "0000-01");
    assert_eq!(ym(-1, 12).to_string(), "-000001-12");
    assert_eq!(ym(10_000, 7).to_string(), "+010000-07");
    assert_eq!(ym(-271821, 4).to_string(), "-271821-04");
    assert_eq!(format!("{:?}", ym(2021, 3)), "2021-03[u-ca=iso8601]");
}
