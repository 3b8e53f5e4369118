use caldelta::{
    civil::YearMonthDifference, RoundMode, ToDuration, Unit,
};

use super::{ym, Result};

#[test]
fn raw_difference() -> Result {
    let _ = crate::Logger::init();

    let (ym1, ym2) = (ym(2021, 3), ym(2023, 5));
    assert_eq!(ym1.until(&ym2)?, 2.years().months(2));
    assert_eq!(ym2.until(&ym1)?, -2.years().months(2));
    assert_eq!(ym1.since(&ym2)?, -2.years().months(2));
    assert_eq!(ym2.since(&ym1)?, 2.years().months(2));

    assert_eq!(ym(2021, 12).until(ym(2022, 1))?, 1.month());
    assert_eq!(ym(2022, 1).until(ym(2021, 12))?, -1.month());
    assert_eq!(ym(2020, 2).until(ym(2021, 2))?, 1.year());
    Ok(())
}

#[test]
fn largest_month() -> Result {
    let (ym1, ym2) = (ym(2021, 3), ym(2023, 5));
    let options = YearMonthDifference::new(ym2.clone()).largest(Unit::Month);
    assert_eq!(ym1.until(options.clone())?, 26.months());
    assert_eq!(ym1.since(options)?, -26.months());

    let options = YearMonthDifference::new(ym1).largest(Unit::Month);
    assert_eq!(ym2.until(options)?, -26.months());
    Ok(())
}

#[test]
fn identical_is_zero() -> Result {
    let ym1 = ym(2021, 3);
    for mode in [RoundMode::Expand, RoundMode::Ceil, RoundMode::Floor] {
        let options = YearMonthDifference::new(ym1.clone())
            .smallest(Unit::Year)
            .mode(mode)
            .increment(10);
        assert!(ym1.until(options.clone())?.is_zero());
        assert!(ym1.since(options)?.is_zero());
    }
    Ok(())
}

/// Rounding to years compares the leftover months against the real length
/// of the next year from the anchor. From 2021-03-01, two years and two
/// months is 793 days, and the following year is 366 days long.
#[test]
fn round_to_years() -> Result {
    let _ = crate::Logger::init();

    let (ym1, ym2) = (ym(2021, 3), ym(2023, 5));
    let options = |mode| {
        YearMonthDifference::new(ym2.clone()).smallest(Unit::Year).mode(mode)
    };
    assert_eq!(ym1.until(options(RoundMode::HalfExpand))?, 2.years());
    assert_eq!(ym1.until(options(RoundMode::Trunc))?, 2.years());
    assert_eq!(ym1.until(options(RoundMode::Floor))?, 2.years());
    assert_eq!(ym1.until(options(RoundMode::Ceil))?, 3.years());
    assert_eq!(ym1.until(options(RoundMode::Expand))?, 3.years());

    // The default mode truncates.
    assert_eq!(ym1.until((Unit::Year, ym2.clone()))?, 2.years());
    Ok(())
}

#[test]
fn round_to_years_negative() -> Result {
    let (ym1, ym2) = (ym(2023, 5), ym(2021, 3));
    let options = |mode| {
        YearMonthDifference::new(ym2.clone()).smallest(Unit::Year).mode(mode)
    };
    assert_eq!(ym1.until(options(RoundMode::HalfExpand))?, -2.years());
    assert_eq!(ym1.until(options(RoundMode::Trunc))?, -2.years());
    assert_eq!(ym1.until(options(RoundMode::Ceil))?, -2.years());
    assert_eq!(ym1.until(options(RoundMode::Floor))?, -3.years());
    assert_eq!(ym1.until(options(RoundMode::Expand))?, -3.years());
    Ok(())
}

/// `since` rounds with the opposite mode, so that flooring the elapsed time
/// floors its magnitude too.
#[test]
fn since_negates_mode() -> Result {
    let (ym1, ym2) = (ym(2021, 3), ym(2023, 5));
    let options = |mode| {
        YearMonthDifference::new(ym2.clone()).smallest(Unit::Year).mode(mode)
    };
    assert_eq!(ym1.since(options(RoundMode::Ceil))?, -2.years());
    assert_eq!(ym1.since(options(RoundMode::Floor))?, -3.years());
    assert_eq!(ym1.since(options(RoundMode::Trunc))?, -2.years());
    assert_eq!(ym1.since(options(RoundMode::Expand))?, -3.years());
    Ok(())
}

#[test]
fn round_months_with_increment() -> Result {
    let _ = crate::Logger::init();

    // Three months is one and a half increments of two months.
    let (ym1, ym2) = (ym(2021, 1), ym(2021, 4));
    let options = |mode| {
        YearMonthDifference::new(ym2.clone())
            .largest(Unit::Month)
            .increment(2)
            .mode(mode)
    };
    assert_eq!(ym1.until(options(RoundMode::Trunc))?, 2.months());
    assert_eq!(ym1.until(options(RoundMode::Floor))?, 2.months());
    assert_eq!(ym1.until(options(RoundMode::Ceil))?, 4.months());
    assert_eq!(ym1.until(options(RoundMode::Expand))?, 4.months());
    assert_eq!(ym1.until(options(RoundMode::HalfExpand))?, 4.months());
    assert_eq!(ym1.until(options(RoundMode::HalfTrunc))?, 2.months());
    assert_eq!(ym1.until(options(RoundMode::HalfCeil))?, 4.months());
    assert_eq!(ym1.until(options(RoundMode::HalfFloor))?, 2.months());
    assert_eq!(ym1.until(options(RoundMode::HalfEven))?, 4.months());

    let (ym1, ym2) = (ym(2021, 4), ym(2021, 1));
    let options = |mode| {
        YearMonthDifference::new(ym2.clone())
            .largest(Unit::Month)
            .increment(2)
            .mode(mode)
    };
    assert_eq!(ym1.until(options(RoundMode::Trunc))?, -2.months());
    assert_eq!(ym1.until(options(RoundMode::Floor))?, -4.months());
    assert_eq!(ym1.until(options(RoundMode::Ceil))?, -2.months());
    assert_eq!(ym1.until(options(RoundMode::Expand))?, -4.months());
    assert_eq!(ym1.until(options(RoundMode::HalfExpand))?, -4.months());
    assert_eq!(ym1.until(options(RoundMode::HalfTrunc))?, -2.months());
    assert_eq!(ym1.until(options(RoundMode::HalfCeil))?, -2.months());
    assert_eq!(ym1.until(options(RoundMode::HalfFloor))?, -4.months());
    assert_eq!(ym1.until(options(RoundMode::HalfEven))?, -4.months());

    // Five months is two and a half increments, and two is even.
    let options = YearMonthDifference::new(ym(2021, 6))
        .largest(Unit::Month)
        .increment(2)
        .mode(RoundMode::HalfEven);
    assert_eq!(ym(2021, 1).until(options)?, 4.months());
    Ok(())
}

/// When months round up into a whole year, the result is rebalanced so that
/// it reads as years.
#[test]
fn rounded_months_rebalance_into_years() -> Result {
    let (ym1, ym2) = (ym(2021, 3), ym(2023, 2));
    assert_eq!(ym1.until(&ym2)?, 1.year().months(11));

    let options = YearMonthDifference::new(ym2.clone())
        .increment(2)
        .mode(RoundMode::HalfExpand);
    assert_eq!(ym1.until(options)?, 2.years());

    let options =
        YearMonthDifference::new(ym2).increment(12).mode(RoundMode::Ceil);
    assert_eq!(ym1.until(options)?, 2.years());

    let options = YearMonthDifference::new(ym(2023, 5))
        .increment(3)
        .mode(RoundMode::Ceil);
    assert_eq!(ym1.until(options)?, 2.years().months(3));
    Ok(())
}

#[test]
fn round_years_with_increment() -> Result {
    let (ym1, ym2) = (ym(2021, 3), ym(2027, 3));
    let options = |mode| {
        YearMonthDifference::new(ym2.clone())
            .smallest(Unit::Year)
            .increment(5)
            .mode(mode)
    };
    assert_eq!(ym1.until(options(RoundMode::Trunc))?, 5.years());
    assert_eq!(ym1.until(options(RoundMode::Ceil))?, 10.years());
    assert_eq!(ym1.until(options(RoundMode::HalfExpand))?, 5.years());
    Ok(())
}

#[test]
fn invalid_options() {
    let (ym1, ym2) = (ym(2021, 3), ym(2023, 5));
    let base = YearMonthDifference::new(ym2);

    for unit in [Unit::Week, Unit::Day, Unit::Hour, Unit::Nanosecond] {
        let err = ym1.until(base.clone().smallest(unit)).unwrap_err();
        assert!(err.is_range(), "{err}");
        let name = format!("{unit:?}").to_lowercase();
        assert!(err.to_string().contains(&name), "{err}");

        let err = ym1.since(base.clone().largest(unit)).unwrap_err();
        assert!(err.is_range(), "{err}");
    }

    let err = ym1
        .until(base.clone().smallest(Unit::Year).largest(Unit::Month))
        .unwrap_err();
    assert!(err.is_range(), "{err}");

    for increment in [0, -1, i64::MIN] {
        let err = ym1.until(base.clone().increment(increment)).unwrap_err();
        assert!(err.is_range(), "{err}");
    }
}

#[test]
fn extremes() -> Result {
    let (min, max) = (ym(-271821, 4), ym(275760, 9));
    let expected = 547581.years().months(5);
    assert_eq!(min.until(&max)?, expected);
    assert_eq!(max.until(&min)?, -expected);

    // Rounding to years needs the year after the truncated one, which is
    // past the supported range here.
    let options = YearMonthDifference::new(max.clone())
        .smallest(Unit::Year)
        .mode(RoundMode::Expand);
    assert!(min.until(options).is_err());
    Ok(())
}

#[test]
fn huge_increment_overflows_for_every_unit() -> Result {
    let (ym1, ym2) = (ym(2021, 3), ym(2023, 5));
    let base = YearMonthDifference::new(ym2.clone()).increment(i64::MAX);

    for (smallest, largest) in [
        (Unit::Month, Unit::Month),
        (Unit::Month, Unit::Year),
        (Unit::Year, Unit::Year),
    ] {
        let options = base
            .clone()
            .smallest(smallest)
            .largest(largest)
            .mode(RoundMode::Expand);
        let err = ym1.until(options).unwrap_err();
        assert!(err.is_range(), "{smallest:?}/{largest:?}: {err}");
        let options = YearMonthDifference::new(ym1.clone())
            .increment(i64::MAX)
            .smallest(smallest)
            .largest(largest)
            .mode(RoundMode::Expand);
        assert!(ym2.since(options).is_err(), "{smallest:?}/{largest:?}");

        let options = base
            .clone()
            .smallest(smallest)
            .largest(largest)
            .mode(RoundMode::Trunc);
        assert!(ym1.until(options)?.is_zero(), "{smallest:?}/{largest:?}");
    }
    Ok(())
}
