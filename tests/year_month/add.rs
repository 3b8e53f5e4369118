use caldelta::{
    calendar::Overflow,
    civil::{Date, YearMonth, YearMonthArithmetic},
    ToDuration,
};

use super::{ym, Result};

#[test]
fn months_and_years() -> Result {
    let _ = crate::Logger::init();

    let start = ym(2021, 3);
    assert_eq!(start.checked_add(1.month())?, ym(2021, 4));
    assert_eq!(start.checked_add(-1.month())?, ym(2021, 2));
    assert_eq!(start.checked_add(10.months())?, ym(2022, 1));
    assert_eq!(start.checked_add(1.year().months(11))?, ym(2023, 2));
    assert_eq!(start.checked_add(-3.years())?, ym(2018, 3));
    assert_eq!(start.checked_sub(15.months())?, ym(2019, 12));
    assert_eq!(start.checked_sub(-15.months())?, ym(2022, 6));
    Ok(())
}

#[test]
fn zero_is_identity() -> Result {
    let start = ym(2021, 3);
    assert_eq!(start.checked_add(0.months())?, start);
    assert_eq!(start.checked_sub(0.days())?, start);
    Ok(())
}

/// Moving backward starts from the last day of the month, so that a longer
/// month can't skid over a shorter one.
#[test]
fn backward_from_end_of_month() -> Result {
    let _ = crate::Logger::init();

    assert_eq!(ym(2021, 3).checked_sub(1.month())?, ym(2021, 2));
    assert_eq!(ym(2024, 3).checked_sub(1.month())?, ym(2024, 2));
    assert_eq!(ym(2021, 5).checked_sub(1.month())?, ym(2021, 4));
    assert_eq!(ym(2021, 12).checked_sub(10.months())?, ym(2021, 2));
    Ok(())
}

/// With `Overflow::Reject`, backing up from the 31st into a shorter month
/// fails rather than clamping the day.
#[test]
fn backward_with_reject() -> Result {
    let arith =
        YearMonthArithmetic::from(1.month()).overflow(Overflow::Reject);
    assert!(ym(2021, 3).checked_sub(arith).is_err());
    assert_eq!(ym(2021, 4).checked_sub(arith)?, ym(2021, 3));

    // Moving forward starts on the 1st, which exists in every month.
    let arith = (1.month(), Overflow::Reject);
    assert_eq!(ym(2021, 1).checked_add(arith)?, ym(2021, 2));
    Ok(())
}

#[test]
fn days_and_weeks() -> Result {
    let start = ym(2021, 3);
    assert_eq!(start.checked_add(30.days())?, start);
    assert_eq!(start.checked_add(31.days())?, ym(2021, 4));
    assert_eq!(start.checked_add(-30.days())?, start);
    assert_eq!(start.checked_add(-31.days())?, ym(2021, 2));

    assert_eq!(ym(2021, 2).checked_add(3.weeks().days(6))?, ym(2021, 2));
    assert_eq!(ym(2021, 2).checked_add(4.weeks())?, ym(2021, 3));
    assert_eq!(ym(2024, 2).checked_add(4.weeks())?, ym(2024, 2));
    Ok(())
}

#[test]
fn sub_day_units_fold_into_days() -> Result {
    let _ = crate::Logger::init();

    // February 2021 has 28 days, or 672 hours.
    let feb = ym(2021, 2);
    assert_eq!(feb.checked_add(671.hours())?, feb);
    assert_eq!(feb.checked_add(672.hours())?, ym(2021, 3));
    assert_eq!(feb.checked_add(40_319.minutes())?, feb);
    assert_eq!(feb.checked_add(40_320.minutes())?, ym(2021, 3));

    let march_in_nanos = 31 * 86_400 * 1_000_000_000i64;
    assert_eq!(
        ym(2021, 3).checked_add((march_in_nanos - 1).nanoseconds())?,
        ym(2021, 3),
    );
    assert_eq!(
        ym(2021, 3).checked_add(march_in_nanos.nanoseconds())?,
        ym(2021, 4),
    );

    // Units are folded together before truncating, so these add up to one
    // whole day and then some.
    let duration = 23.hours().minutes(59).seconds(59).milliseconds(1_001);
    assert_eq!(ym(2021, 3).checked_add(duration.days(30))?, ym(2021, 4));
    Ok(())
}

#[test]
fn large_day_counts() -> Result {
    let expected = Date::new(2021, 3, 1)?.checked_add_days(1_000_000)?;
    let got = ym(2021, 3).checked_add(1_000_000.days())?;
    assert_eq!(got, ym(expected.year(), expected.month()));

    // Sub-day totals that overflow 64 bits of nanoseconds still work.
    let got = ym(2021, 3).checked_add(i64::MAX.nanoseconds().seconds(1))?;
    let nanos = i128::from(i64::MAX) + 1_000_000_000;
    let days = i64::try_from(nanos / 86_400_000_000_000).unwrap();
    let expected = Date::new(2021, 3, 1)?.checked_add_days(days)?;
    assert_eq!(got, ym(expected.year(), expected.month()));
    Ok(())
}

#[test]
fn out_of_range() -> Result {
    let max = YearMonth::iso(275760, 9)?;
    let err = max.checked_add(1.month()).unwrap_err();
    assert!(err.is_range(), "{err}");
    assert_eq!(max.checked_sub(1.month())?, ym(275760, 8));

    let min = YearMonth::iso(-271821, 4)?;
    let err = min.checked_sub(1.month()).unwrap_err();
    assert!(err.is_range(), "{err}");
    assert_eq!(min.checked_add(1.month())?, ym(-271821, 5));

    assert!(ym(2021, 3).checked_add(300_000.years()).is_err());
    assert!(ym(2021, 3).checked_add(i64::MAX.days()).is_err());
    Ok(())
}

#[test]
fn mixed_signs_are_rejected() {
    let err = 1.month().try_days(-3).unwrap_err();
    assert!(err.is_range());
    assert!(err.to_string().contains("same sign"), "{err}");

    let err = (-2).years().try_hours(5).unwrap_err();
    assert!(err.is_range());
}
