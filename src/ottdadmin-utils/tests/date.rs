use chrono::NaiveDate;

use ottdadmin_utils::{date::*, Error};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn known_dates() {
    assert_eq!(gamedate_to_datetime(366), ymd(1, 1, 1));
    assert_eq!(gamedate_to_datetime(367), ymd(1, 1, 2));
    assert_eq!(gamedate_to_datetime(712223), ymd(1950, 1, 1));
    assert_eq!(gamedate_to_datetime(748913), ymd(2050, 6, 15));

    assert_eq!(datetime_to_gamedate(ymd(1, 1, 2)), 367);
    assert_eq!(datetime_to_gamedate(ymd(1950, 1, 1)), 712223);
    assert_eq!(datetime_to_gamedate(ymd(2050, 6, 15)), 748913);
}

#[test]
fn undefined_dates_collapse() {
    for code in 0..GAMEDATE_BASE_OFFSET {
        assert_eq!(gamedate_to_datetime(code), NaiveDate::MIN);
    }
    assert_eq!(gamedate_to_datetime(-1), NaiveDate::MIN);
    assert_eq!(gamedate_to_datetime(i32::MIN), NaiveDate::MIN);

    assert_eq!(datetime_to_gamedate(NaiveDate::MIN), 0);
    assert_eq!(datetime_to_gamedate(gamedate_to_datetime(42)), 0);

    // Undefined dates never alias the first calendar day.
    assert_ne!(gamedate_to_datetime(0), GAMEDATE_BASE_DATE);
    assert_eq!(gamedate_to_datetime(GAMEDATE_BASE_OFFSET), GAMEDATE_BASE_DATE);
}

#[test]
fn round_trip() {
    let codes = (GAMEDATE_BASE_OFFSET..GAMEDATE_BASE_OFFSET + 1500)
        .chain((700_000..800_000).step_by(997))
        .chain([5_000_000, 50_000_000]);

    for code in codes {
        assert_eq!(datetime_to_gamedate(gamedate_to_datetime(code)), code);
    }
}

#[test]
fn leap_days() {
    let feb29 = ymd(2000, 2, 29);
    let code = datetime_to_gamedate(feb29);

    assert_eq!(gamedate_to_datetime(code - 1), ymd(2000, 2, 28));
    assert_eq!(gamedate_to_datetime(code + 1), ymd(2000, 3, 1));
}

#[test]
fn out_of_range_saturates() {
    assert_eq!(gamedate_to_datetime(i32::MAX), NaiveDate::MAX);
}

#[test]
fn game_date_newtype() -> Result<(), Error> {
    let date = GameDate(712223);
    assert!(date.is_valid());
    assert_eq!(date.to_date(), ymd(1950, 1, 1));
    assert_eq!(date.to_string(), "1950-01-01");
    assert_eq!(GameDate::from(ymd(1950, 1, 1)), date);
    assert_eq!(i32::from(date), 712223);

    assert!(!GameDate::UNDEFINED.is_valid());
    assert_eq!(GameDate::UNDEFINED.to_string(), "-");
    assert_eq!(GameDate::default(), GameDate::UNDEFINED);

    assert_eq!("712223".parse::<GameDate>()?, date);
    assert_eq!("1950-01-01".parse::<GameDate>()?, date);
    assert!(matches!(
        "yesterday".parse::<GameDate>(),
        Err(Error::InvalidDate(s)) if s == "yesterday"
    ));

    Ok(())
}

#[test]
fn game_date_serializes_as_code() -> serde_json::Result<()> {
    let date = GameDate(748913);

    assert_eq!(serde_json::to_string(&date)?, "748913");
    assert_eq!(serde_json::from_str::<GameDate>("748913")?, date);

    Ok(())
}
