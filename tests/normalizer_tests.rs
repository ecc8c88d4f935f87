use rworkhours::core::normalizer::{normalize, on_focus};
use rworkhours::models::{FieldKind, TimeField};

#[test]
fn test_valid_hour_is_stable() {
    let first = normalize("15", FieldKind::Hour, TimeField::Value(3));
    let second = normalize("15", FieldKind::Hour, first);
    assert_eq!(first, TimeField::Value(15));
    assert_eq!(first, second);
}

#[test]
fn test_hour_out_of_range_keeps_previous() {
    assert_eq!(
        normalize("99", FieldKind::Hour, TimeField::Value(10)),
        TimeField::Value(10)
    );
    assert_eq!(
        normalize("24", FieldKind::Hour, TimeField::Value(23)),
        TimeField::Value(23)
    );
    // rejection also preserves an empty field
    assert_eq!(normalize("24", FieldKind::Hour, TimeField::Unset), TimeField::Unset);
}

#[test]
fn test_minute_out_of_range_clamps() {
    assert_eq!(
        normalize("75", FieldKind::Minute, TimeField::Value(10)),
        TimeField::Value(59)
    );
    assert_eq!(normalize("60", FieldKind::Minute, TimeField::Unset), TimeField::Value(59));
    assert_eq!(normalize("99", FieldKind::Minute, TimeField::Value(0)), TimeField::Value(59));
}

#[test]
fn test_double_zero_is_zero() {
    assert_eq!(normalize("00", FieldKind::Hour, TimeField::Value(5)), TimeField::Value(0));
    assert_eq!(normalize("00", FieldKind::Minute, TimeField::Unset), TimeField::Value(0));
}

#[test]
fn test_truncation_happens_before_double_zero() {
    assert_eq!(normalize("007", FieldKind::Hour, TimeField::Value(9)), TimeField::Value(0));
    assert_eq!(normalize("007", FieldKind::Minute, TimeField::Value(9)), TimeField::Value(0));
}

#[test]
fn test_extra_digits_are_dropped_not_shifted() {
    assert_eq!(normalize("123", FieldKind::Hour, TimeField::Unset), TimeField::Value(12));
    assert_eq!(normalize("987", FieldKind::Minute, TimeField::Unset), TimeField::Value(59));
    assert_eq!(normalize("3456", FieldKind::Minute, TimeField::Unset), TimeField::Value(34));
}

#[test]
fn test_non_digits_are_stripped() {
    assert_eq!(normalize("1a2", FieldKind::Hour, TimeField::Unset), TimeField::Value(12));
    assert_eq!(normalize(" 0 9 ", FieldKind::Hour, TimeField::Unset), TimeField::Value(9));
    assert_eq!(normalize("-5", FieldKind::Minute, TimeField::Unset), TimeField::Value(5));
}

#[test]
fn test_empty_input_clears_field() {
    assert_eq!(normalize("", FieldKind::Hour, TimeField::Value(9)), TimeField::Unset);
    assert_eq!(normalize("abc", FieldKind::Minute, TimeField::Value(30)), TimeField::Unset);
    // non-ASCII digits are not digits here
    assert_eq!(normalize("٣", FieldKind::Hour, TimeField::Value(1)), TimeField::Unset);
}

#[test]
fn test_leading_zero_single_value() {
    assert_eq!(normalize("09", FieldKind::Hour, TimeField::Unset), TimeField::Value(9));
    assert_eq!(normalize("05", FieldKind::Minute, TimeField::Unset), TimeField::Value(5));
}

#[test]
fn test_focus_always_zero() {
    assert_eq!(on_focus(), TimeField::Value(0));
    assert!(!on_focus().is_unset());
}
