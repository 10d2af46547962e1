//! Integration tests for the public utility functions
//!
//! These tests go through the crate root re-exports the way a caller would.

use heaty_utils::{
    escape_var_name, expand_range_string, format_time, parse_time_string, RangeInput,
    TimeFormat, TimeOfDay, UtilError,
};
use std::collections::BTreeSet;
use std::thread;

fn hms(h: u32, m: u32, s: u32) -> TimeOfDay {
    TimeOfDay::from_hms(h, m, s).unwrap()
}

#[test]
fn test_escape_room_names() {
    let cases = vec![
        ("Living Room", "Living_Room"),
        ("kid's room", "kid_s_room"),
        ("2nd-bedroom", "_2nd_bedroom"),
        ("bath_1", "bath_1"),
        ("", ""),
    ];

    for (input, expected) in cases {
        assert_eq!(escape_var_name(input), expected, "Failed to escape: {}", input);
    }
}

#[test]
fn test_expand_weekday_schedule() {
    let days = expand_range_string("1,2-4,9,11-12").unwrap();
    assert_eq!(days, BTreeSet::from([1, 2, 3, 4, 9, 11, 12]));

    let days = expand_range_string("  3 , 5-5 ").unwrap();
    assert_eq!(days, BTreeSet::from([3, 5]));
}

#[test]
fn test_expand_from_range_input_values() {
    let inputs = vec![
        (RangeInput::Integer(7), BTreeSet::from([7])),
        (RangeInput::Float(7.9), BTreeSet::from([7])),
        (RangeInput::Text("5-3".to_string()), BTreeSet::new()),
    ];

    for (input, expected) in inputs {
        assert_eq!(expand_range_string(input.clone()).unwrap(), expected, "input: {:?}", input);
    }
}

#[test]
fn test_expand_errors_propagate_while_time_parsing_absorbs_them() {
    assert!(matches!(
        expand_range_string("abc"),
        Err(UtilError::RangeParseError { .. })
    ));
    assert_eq!(parse_time_string("garbage", &TimeFormat::default()), None);
}

#[test]
fn test_empty_range_expression_is_an_error() {
    assert!(expand_range_string("").is_err());
}

#[test]
fn test_default_time_round_trip() {
    let default = TimeFormat::default();
    assert_eq!(format_time(&hms(7, 5, 0), &default), "07:05");
    assert_eq!(parse_time_string("07:05", &default), Some(hms(7, 5, 0)));
    assert_eq!(parse_time_string("7:5", &default), Some(hms(7, 5, 0)));
}

#[test]
fn test_custom_format_from_string() {
    let format: TimeFormat = "%H.%M.%S".parse().unwrap();
    assert_eq!(hms(18, 0, 5).format(&format), "18.00.05");
    assert_eq!(parse_time_string("18.00.05", &format), Some(hms(18, 0, 5)));
    assert!("%H:%M%".parse::<TimeFormat>().is_err());
}

#[test]
fn test_functions_are_safe_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let expr = format!("{}-{}", i, i + 2);
                let numbers = expand_range_string(expr.as_str()).unwrap();
                let escaped = escape_var_name(&format!("{} zone", i));
                let parsed = parse_time_string(&format!("{:02}:30", i), &TimeFormat::default());
                (numbers.len(), escaped, parsed)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let (count, escaped, parsed) = handle.join().unwrap();
        assert_eq!(count, 3);
        assert_eq!(escaped, format!("_{}_zone", i));
        assert_eq!(parsed, TimeOfDay::from_hms(i as u32, 30, 0));
    }
}
