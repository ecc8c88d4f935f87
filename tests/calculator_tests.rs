use proptest::prelude::*;
use rworkhours::core::calculator::{
    EMPTY_RESULT, MINUTES_PER_DAY, calculate_hours, worked_duration, worked_minutes,
};
use rworkhours::models::{TimeField, TimeOfDay, WorkedDuration};

fn t(h: u8, m: u8) -> TimeOfDay {
    TimeOfDay::new(h, m)
}

#[test]
fn test_regular_day() {
    assert_eq!(calculate_hours(&t(9, 0), &t(18, 0), &t(1, 0)), "8 h 0 min");
    assert_eq!(worked_minutes(&t(9, 0), &t(18, 0), &t(1, 0)), Some(480));
}

#[test]
fn test_minutes_are_carried() {
    assert_eq!(calculate_hours(&t(8, 10), &t(16, 45), &t(0, 30)), "8 h 5 min");
}

#[test]
fn test_overnight_wraparound() {
    assert_eq!(calculate_hours(&t(22, 0), &t(2, 0), &t(0, 0)), "4 h 0 min");
    assert_eq!(worked_minutes(&t(22, 0), &t(2, 0), &t(0, 0)), Some(240));
}

#[test]
fn test_break_longer_than_span_wraps_once() {
    // 10:00 → 10:00 with 1h break: -60 + 1440
    assert_eq!(calculate_hours(&t(10, 0), &t(10, 0), &t(1, 0)), "23 h 0 min");
}

#[test]
fn test_still_negative_after_wraparound_is_kept() {
    // -60 - 1439 = -1499, + 1440 = -59
    assert_eq!(worked_minutes(&t(12, 0), &t(11, 0), &t(23, 59)), Some(-59));
    assert_eq!(calculate_hours(&t(12, 0), &t(11, 0), &t(23, 59)), "-1 h -59 min");
}

#[test]
fn test_zero_span() {
    assert_eq!(worked_minutes(&t(9, 0), &t(9, 0), &t(0, 0)), Some(0));
    assert_eq!(calculate_hours(&t(9, 0), &t(9, 0), &t(0, 0)), "0 h 0 min");
}

#[test]
fn test_any_empty_field_gives_fallback() {
    let full = [t(9, 0), t(18, 0), t(1, 0)];

    for pair in 0..3 {
        for half in 0..2 {
            let mut p = full;
            if half == 0 {
                p[pair].hour = TimeField::Unset;
            } else {
                p[pair].minute = TimeField::Unset;
            }
            assert_eq!(calculate_hours(&p[0], &p[1], &p[2]), EMPTY_RESULT);
            assert_eq!(worked_duration(&p[0], &p[1], &p[2]), None);
        }
    }
    assert_eq!(EMPTY_RESULT, "0 h 0 min");
}

#[test]
fn test_worked_duration_parts() {
    let d = WorkedDuration::new(125);
    assert_eq!((d.hours_part(), d.minutes_part()), (2, 5));
    assert_eq!(d.to_string(), "2 h 5 min");

    let neg = WorkedDuration::new(-61);
    assert_eq!((neg.hours_part(), neg.minutes_part()), (-2, -1));
}

proptest! {
    #[test]
    fn prop_result_bounds(
        sh in 0u8..24, sm in 0u8..60,
        eh in 0u8..24, em in 0u8..60,
        bh in 0u8..24, bm in 0u8..60
    ) {
        let (s, e, b) = (t(sh, sm), t(eh, em), t(bh, bm));
        let worked = worked_minutes(&s, &e, &b).unwrap();

        prop_assert!(worked > -MINUTES_PER_DAY);
        prop_assert!(worked < MINUTES_PER_DAY);

        let d = WorkedDuration::new(worked);
        if worked >= 0 {
            prop_assert!((0..=23).contains(&d.hours_part()));
            prop_assert!((0..=59).contains(&d.minutes_part()));
        }
        prop_assert_eq!(
            calculate_hours(&s, &e, &b),
            format!("{} h {} min", d.hours_part(), d.minutes_part())
        );
    }
}
