use caldelta::civil::YearMonth;

mod add;
mod calendar;
mod compare;
#[cfg(feature = "serde")]
mod serde;
mod until;

type Result = std::result::Result<(), caldelta::Error>;

fn ym(year: i32, month: i8) -> YearMonth {
    YearMonth::iso(year, month).unwrap()
}
