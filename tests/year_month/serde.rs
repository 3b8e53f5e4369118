use caldelta::ToDuration;

use super::{ym, Result};

#[test]
fn serialize_year_month() {
    let got = serde_json::to_string(&ym(2021, 3)).unwrap();
    assert_eq!(got, r#""2021-03""#);

    let got = serde_json::to_string(&[ym(-1, 1), ym(10_000, 12)]).unwrap();
    assert_eq!(got, r#"["-000001-01","+010000-12"]"#);
}

#[test]
fn serialize_difference() -> Result {
    let duration = ym(2021, 3).until(ym(2023, 5))?;
    let got = serde_json::to_string(&duration).unwrap();
    assert_eq!(got, r#""P2Y2M""#);

    let got = serde_json::to_string(&-1.day().hours(12)).unwrap();
    assert_eq!(got, r#""-P1DT12H""#);
    Ok(())
}
