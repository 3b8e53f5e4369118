use caldelta::{
    calendar::{
        Calendar, CalendarRef, DateDuration, FieldName, Fields, Iso8601,
        Overflow,
    },
    civil::{Date, YearMonth, YearMonthDifference},
    fmt::{DisplayCalendar, YearMonthPrinter},
    Error, RoundMode, ToDuration, Unit,
};

use super::{ym, Result};

/// A calendar that follows ISO 8601 rules, but numbers its years 1000
/// higher and represents each year-month by the 15th day of the month.
///
/// Its only era is `se`, and the era year is the same as the year.
#[derive(Debug)]
struct Shifted;

impl Shifted {
    const OFFSET: i32 = 1000;
    const ERA: &'static str = "se";
}

impl Calendar for Shifted {
    fn id(&self) -> &str {
        "shifted"
    }

    fn fields(&self, requested: &[FieldName]) -> Vec<FieldName> {
        let mut names = requested.to_vec();
        if requested.contains(&FieldName::Year) {
            for name in [FieldName::Era, FieldName::EraYear] {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }

    fn to_fields(&self, date: Date, names: &[FieldName]) -> Fields {
        let year = date.year() + Shifted::OFFSET;
        let all = Fields {
            era: Some(Shifted::ERA.into()),
            era_year: Some(year),
            year: Some(year),
            month: Some(date.month()),
            day: Some(date.day()),
        };
        all.only(names)
    }

    fn date_from_fields(
        &self,
        fields: &Fields,
        overflow: Overflow,
    ) -> std::result::Result<Date, Error> {
        if let Some(ref era) = fields.era {
            if &**era != Shifted::ERA {
                return Err(Error::from_args(format_args!(
                    "unknown era '{era}'"
                )));
            }
        }
        let year =
            fields.year.or(fields.era_year).map(|year| year - Shifted::OFFSET);
        let fields =
            Fields { era: None, era_year: None, year, ..fields.clone() };
        Iso8601.date_from_fields(&fields, overflow)
    }

    fn year_month_from_fields(
        &self,
        fields: &Fields,
        overflow: Overflow,
    ) -> std::result::Result<Date, Error> {
        let fields = Fields { day: Some(15), ..fields.clone() };
        self.date_from_fields(&fields, overflow)
    }

    fn date_add(
        &self,
        date: Date,
        duration: DateDuration,
        overflow: Overflow,
    ) -> std::result::Result<Date, Error> {
        Iso8601.date_add(date, duration, overflow)
    }

    fn date_until(
        &self,
        date1: Date,
        date2: Date,
        largest: Unit,
    ) -> std::result::Result<DateDuration, Error> {
        Iso8601.date_until(date1, date2, largest)
    }

    fn days_in_month(&self, date: Date) -> i8 {
        Iso8601.days_in_month(date)
    }
}

fn shifted(year: i32, month: i8) -> YearMonth {
    let fields =
        Fields { year: Some(year), month: Some(month), ..Fields::new() };
    let calendar = CalendarRef::new(Shifted);
    YearMonth::from_fields(&fields, calendar, Overflow::Reject).unwrap()
}

#[test]
fn fields_go_through_calendar() -> Result {
    let ym1 = shifted(3024, 5);
    assert_eq!(ym1.year(), 3024);
    assert_eq!(ym1.month(), 5);
    assert_eq!(ym1.iso_year(), 2024);
    assert_eq!(ym1.iso_month(), 5);
    assert_eq!(ym1.iso_reference_day(), 15);
    assert_eq!(ym1.calendar().id(), "shifted");
    assert!(!ym1.calendar().is_iso());
    assert_eq!(ym1.to_date(31)?, Date::new(2024, 5, 31)?);

    let partial = Fields { year: Some(3000), ..Fields::new() };
    let ym2 = ym1.with(&partial, Overflow::Reject)?;
    assert_eq!(ym2, YearMonth::new(2000, 5, CalendarRef::new(Shifted), 15)?);
    Ok(())
}

#[test]
fn arithmetic_goes_through_calendar() -> Result {
    let _ = crate::Logger::init();

    let ym1 = shifted(3021, 3);
    assert_eq!(ym1.checked_add(1.month())?, shifted(3021, 4));
    assert_eq!(ym1.checked_sub(1.month())?, shifted(3021, 2));
    assert_eq!(ym1.checked_add(31.days())?, shifted(3021, 4));
    assert_eq!(ym1.checked_add(-31.days())?, shifted(3021, 2));

    let ym2 = shifted(3023, 5);
    assert_eq!(ym1.until(&ym2)?, 2.years().months(2));
    let options = YearMonthDifference::new(ym2)
        .smallest(Unit::Year)
        .mode(RoundMode::HalfExpand);
    assert_eq!(ym1.until(options)?, 2.years());
    Ok(())
}

#[test]
fn mismatched_calendars() {
    let ym1 = shifted(3021, 3);
    let ym2 = ym(2021, 3);

    let err = ym1.until(&ym2).unwrap_err();
    assert!(err.is_range(), "{err}");
    let msg = err.to_string();
    assert!(msg.contains("shifted"), "{msg}");
    assert!(msg.contains("iso8601"), "{msg}");

    assert!(ym2.since(&ym1).is_err());
}

#[test]
fn calendar_breaks_ties() -> Result {
    let iso = YearMonth::new(2021, 3, CalendarRef::ISO, 15)?;
    let other = YearMonth::new(2021, 3, CalendarRef::new(Shifted), 15)?;
    assert_ne!(iso, other);
    assert!(iso < other);
    assert_eq!(other, shifted(3021, 3));
    Ok(())
}

#[test]
fn missing_fields() {
    let fields = Fields { month: Some(3), ..Fields::new() };
    let err =
        YearMonth::from_fields(&fields, CalendarRef::ISO, Overflow::Reject)
            .unwrap_err();
    assert!(err.is_invalid_input(), "{err}");
    assert!(err.to_string().contains("'year'"), "{err}");

    let err = ym(2021, 3).with(&Fields::new(), Overflow::Reject).unwrap_err();
    assert!(err.is_invalid_input(), "{err}");
}

#[test]
fn display() {
    let ym1 = shifted(3021, 3);
    assert_eq!(ym1.to_string(), "2021-03-15[u-ca=shifted]");

    let printer = YearMonthPrinter::new().calendar(DisplayCalendar::Never);
    assert_eq!(printer.year_month_to_string(&ym1), "2021-03-15");
    let printer = YearMonthPrinter::new().calendar(DisplayCalendar::Always);
    assert_eq!(
        printer.year_month_to_string(&ym(2021, 3)),
        "2021-03[u-ca=iso8601]",
    );
}

#[test]
fn year_properties_go_through_calendar() -> Result {
    let ym1 = shifted(3024, 2);
    assert_eq!(ym1.era().as_deref(), Some("se"));
    assert_eq!(ym1.era_year(), Some(3024));
    assert_eq!(ym1.days_in_month(), 29);
    assert_eq!(ym1.days_in_year(), 366);
    assert_eq!(ym1.months_in_year(), 12);
    assert!(ym1.in_leap_year());

    let ym2 = shifted(3023, 2);
    assert_eq!(ym2.days_in_year(), 365);
    assert!(!ym2.in_leap_year());

    let iso = ym(2024, 2);
    assert_eq!(iso.era(), None);
    assert_eq!(iso.era_year(), None);
    assert_eq!(iso.days_in_year(), 366);
    assert!(iso.in_leap_year());
    Ok(())
}

#[test]
fn eras_merge_through_calendar() -> Result {
    let ym1 = shifted(3024, 5);
    let partial = Fields { era_year: Some(3030), ..Fields::new() };
    let ym2 = ym1.with(&partial, Overflow::Reject)?;
    assert_eq!(ym2, shifted(3030, 5));
    assert_eq!(ym2.year(), 3030);

    let partial = Fields { era: Some("bogus".into()), ..Fields::new() };
    assert!(ym1.with(&partial, Overflow::Reject).is_err());
    Ok(())
}
