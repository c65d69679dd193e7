use std::num::IntErrorKind;

use routify::matcher::ScanError;
use routify::{Destination, ParamError, RouteTable, Scanner};

#[derive(Debug, Default, PartialEq, Eq)]
struct Month(u8);

impl Scanner for Month {
    fn scan(&mut self, value: &str) -> Result<(), ScanError> {
        let month: u8 = value.parse()?;
        if !(1..=12).contains(&month) {
            return Err(format!("month out of range: {month}").into());
        }
        self.0 = month;
        Ok(())
    }
}

fn archive_table() -> RouteTable<&'static str> {
    let mut table = RouteTable::new();
    table
        .add("GET", "/archives/$year/$month/$day", "archive")
        .unwrap();
    table.add("GET", "/coords/$lat/$lon", "coords").unwrap();
    table
}

#[test]
fn params_when_numeric_then_typed_getters_parse() {
    let table = archive_table();
    let (_, params) = table.get("GET", "/archives/2015/02/-3").unwrap();

    assert_eq!(params.get_int("year").unwrap(), 2015);
    assert_eq!(params.get_uint("month").unwrap(), 2);
    assert_eq!(params.get_int("day").unwrap(), -3);
    assert!(params.get_uint("day").is_err());
    assert_eq!(params.parse::<u16>("year"), Some(Ok(2015)));
    assert!(params.parse::<u16>("missing").is_none());
}

#[test]
fn params_when_name_absent_then_numeric_getters_yield_zero() {
    let table = archive_table();
    let (_, params) = table.get("GET", "/archives/2015/02/12").unwrap();

    assert_eq!(params.lookup("missing"), None);
    assert_eq!(params.get_int("missing").unwrap(), 0);
    assert_eq!(params.get_uint("missing").unwrap(), 0);
}

#[test]
fn params_when_float_requested_then_parsed() {
    let table = archive_table();
    let (_, params) = table.get("GET", "/coords/52.5/-13.25").unwrap();

    assert_eq!(params.get_float("lat").unwrap(), 52.5);
    let mut lon = 0f32;
    params.scan("lon", &mut lon).unwrap();
    assert_eq!(lon, -13.25);
}

#[test]
fn scan_when_destination_supported_then_value_stored() {
    let table = archive_table();
    let (_, params) = table.get("GET", "/archives/2015/02/12").unwrap();

    let mut year = String::from("stale");
    params.scan("year", &mut year).unwrap();
    assert_eq!(year, "2015");

    let mut raw = vec![0u8; 8];
    params.scan("month", &mut raw).unwrap();
    assert_eq!(raw, b"02");

    let mut day = 0u8;
    params.scan("day", &mut day).unwrap();
    assert_eq!(day, 12);

    let mut signed = 0i16;
    params.scan("year", Destination::from(&mut signed)).unwrap();
    assert_eq!(signed, 2015);
}

#[test]
fn scan_when_integer_overflows_then_parse_error_returned_unchanged() {
    let table = archive_table();
    let (_, params) = table.get("GET", "/archives/2015/02/12").unwrap();

    let mut small = 0i8;
    match params.scan("year", &mut small) {
        Err(ParamError::ParseInt(err)) => assert_eq!(err.kind(), &IntErrorKind::PosOverflow),
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(small, 0);
}

#[test]
fn scan_when_custom_scanner_then_scanner_decides() {
    let table = archive_table();

    let (_, params) = table.get("GET", "/archives/2015/02/12").unwrap();
    let mut month = Month::default();
    params.scan("month", &mut month).unwrap();
    assert_eq!(month, Month(2));

    let (_, params) = table.get("GET", "/archives/2015/13/12").unwrap();
    let mut month = Month::default();
    match params.scan("month", Destination::custom(&mut month)) {
        Err(ParamError::Scan { name, source }) => {
            assert_eq!(name, "month");
            assert_eq!(source.to_string(), "month out of range: 13");
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(month, Month(0));
}

#[test]
fn scan_any_when_type_supported_then_dispatched() {
    let table = archive_table();
    let (_, params) = table.get("GET", "/archives/2015/02/12").unwrap();

    let mut year = 0u32;
    params.scan_any("year", &mut year).unwrap();
    assert_eq!(year, 2015);

    let mut text = String::new();
    params.scan_any("day", &mut text).unwrap();
    assert_eq!(text, "12");
}

#[test]
fn scan_any_when_type_unsupported_then_rejected() {
    let table = archive_table();
    let (_, params) = table.get("GET", "/archives/2015/02/12").unwrap();

    let mut flag = false;
    match params.scan_any("year", &mut flag) {
        Err(ParamError::UnsupportedDestination { name }) => assert_eq!(name, "year"),
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(!flag);
}
