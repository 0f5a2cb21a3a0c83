use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use qtty::Seconds;
use sharptime::{
    DateTime, DateTimeFormat, DateTimeKind, DayOfWeek, DotNet, Ldap, Reference, TickScale,
    TimeSpan, UnixEpoch,
};

#[test]
fn field_construction_round_trips_exactly() {
    let dt = DateTime::from_fields(
        1994,
        3,
        22,
        17,
        15,
        11,
        555,
        DateTimeKind::Utc,
        DayOfWeek::Sunday,
    );
    assert_eq!(
        (
            dt.year(),
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second(),
            dt.millisecond()
        ),
        (1994, 3, 22, 17, 15, 11, 555)
    );
}

#[test]
fn every_tick_scale_round_trips() {
    let dt = DateTime::from_fields(
        1961,
        4,
        1,
        12,
        55,
        22,
        555,
        DateTimeKind::Utc,
        DayOfWeek::Sunday,
    );
    fn check<S: TickScale>(dt: &DateTime) {
        let back = DateTime::from_ticks::<S>(dt.to_ticks::<S>(), DateTimeKind::Utc);
        let drift = (back.interval_utc() - dt.interval_utc()).value().abs();
        assert!(drift < 1e-6, "{} drifted by {drift} s", S::LABEL);
    }
    check::<Reference>(&dt);
    check::<UnixEpoch>(&dt);
    check::<Ldap>(&dt);
    check::<DotNet>(&dt);
}

#[test]
fn concrete_tick_scenarios() {
    let dt = DateTime::from_fields(
        1961,
        8,
        1,
        23,
        6,
        40,
        0,
        DateTimeKind::Utc,
        DayOfWeek::Sunday,
    );
    assert_eq!(dt.ticks_utc(), 618_700_000_000_000_000);

    let from_ticks = DateTime::from_dotnet_ticks(618_700_000_000_000_000, DateTimeKind::Utc);
    assert_eq!(from_ticks.hour(), 23);

    let ldap = DateTime::from_ldap_ticks(113_682_993_225_550_000, DateTimeKind::Utc);
    assert_eq!(
        (ldap.year(), ldap.month(), ldap.day(), ldap.millisecond()),
        (1961, 4, 1, 555)
    );
}

#[test]
fn ordering_is_a_total_order_on_the_instant() {
    let a = DateTime::new(2015, 6, 12, DateTimeKind::Utc);
    let b = DateTime::from_interval(a.interval_utc(), DateTimeKind::Local);
    let c = a.add_seconds(1.0);

    // Exactly one of <, ==, > holds for each pair, regardless of kind.
    assert!(a == b && !(a < b) && !(a > b));
    assert!(a < c && a != c && !(a > c));
    assert_eq!(a.compare_to(&b), 0);
    assert_eq!(c.compare_to(&a), 1);
}

#[test]
fn duration_decomposition_reconstructs_every_interval() {
    let samples = [0.0, 1.5, -1.5, 90_061.5, 987_654.321, -43_210.987];
    for interval in samples {
        let span = TimeSpan::new(interval);
        let rebuilt = span.days() as f64 * 86_400.0
            + span.hours() as f64 * 3_600.0
            + span.minutes() as f64 * 60.0
            + span.seconds() as f64
            + span.milliseconds() as f64 * 1e-3
            + span.nanoseconds() as f64 * 1e-9;
        assert!((rebuilt - interval).abs() < 1e-6);
    }
}

#[test]
fn instant_difference_decomposes_like_a_duration() {
    let start = DateTime::from_fields(
        2015,
        6,
        12,
        8,
        0,
        0,
        0,
        DateTimeKind::Utc,
        DayOfWeek::Sunday,
    );
    let end = start.add_days(1.0).add_hours(2.0).add_seconds(30.0);
    let span = end - start;
    assert_eq!(span.days(), 1);
    assert_eq!(span.hours(), 2);
    assert_eq!(span.minutes(), 0);
    assert_eq!(span.seconds(), 30);
}

#[test]
fn full_format_scenario() {
    let dt = DateTime::from_fields(
        1999,
        12,
        1,
        15,
        44,
        23,
        500,
        DateTimeKind::Local,
        DayOfWeek::Monday,
    );
    assert_eq!(dt.format(DateTimeFormat::Full), "1999-12-01 15:44:23.500");
}

#[test]
fn weekday_scenarios_for_2015_12_08() {
    let base = DateTime::new(2015, 12, 8, DateTimeKind::Utc);
    assert_eq!(base.with_week_starts(DayOfWeek::Monday).weekday(), 2);
    assert_eq!(base.with_week_starts(DayOfWeek::Tuesday).weekday(), 1);
    assert_eq!(base.weekday(), 3);
}

#[test]
fn leap_year_scenarios() {
    assert!(!sharptime::is_leap_year(2001));
    assert!(sharptime::is_leap_year(2008));
}

/// Unix timestamp of local noon on `date`, resolved by the host zone.
/// Transitions never land on noon, so this is always unambiguous.
fn local_noon_timestamp(date: NaiveDate) -> i64 {
    let noon = NaiveTime::from_hms_opt(12, 0, 0).expect("noon is a valid time");
    chrono::Local
        .from_local_datetime(&NaiveDateTime::new(date, noon))
        .earliest()
        .expect("local noon always resolves")
        .timestamp()
}

#[test]
fn calendar_and_interval_day_addition_diverge_across_dst() {
    // Scan a year of local noons for a day that is not 86 400 s long.
    let mut transition = None;
    let mut cursor = NaiveDate::from_ymd_opt(2015, 1, 1).expect("January 1 exists");
    for _ in 0..365 {
        let next = cursor.succ_opt().expect("mid-year successor exists");
        let elapsed = local_noon_timestamp(next) - local_noon_timestamp(cursor);
        if elapsed != 86_400 {
            transition = Some((cursor, elapsed));
            break;
        }
        cursor = next;
    }
    let Some((day, wall_clock_day_seconds)) = transition else {
        // The system timezone observes no DST; the divergence cannot be
        // exercised here.
        return;
    };

    let base = DateTime::from_fields(
        day.year(),
        day.month() as i32,
        day.day() as i32,
        12,
        0,
        0,
        0,
        DateTimeKind::Local,
        DayOfWeek::Sunday,
    );
    let calendar = base.add_days_component(1);
    let interval = base.add_days(1.0);

    // The calendar day preserves the wall clock and absorbs the shift.
    let elapsed = (calendar.interval_utc() - base.interval_utc()).value();
    assert_eq!(elapsed, wall_clock_day_seconds as f64);
    assert_ne!(elapsed, 86_400.0);
    assert_eq!(calendar.hour(), 12);

    // The interval day is exactly 86 400 s and the wall clock moves.
    let exact = (interval.interval_utc() - base.interval_utc()).value();
    assert_eq!(exact, 86_400.0);
    assert_ne!(interval.hour(), 12);
}

#[test]
fn local_dst_flag_follows_the_season() {
    let january = local_noon_offset(2015, 1, 15);
    let july = local_noon_offset(2015, 7, 15);
    if january == july {
        // The system timezone observes no DST.
        return;
    }
    // Whichever hemisphere: the larger offset is the DST side.
    let (dst_month, std_month) = if july > january { (7, 1) } else { (1, 7) };
    let summer = DateTime::new(2015, dst_month, 15, DateTimeKind::Local);
    let winter = DateTime::new(2015, std_month, 15, DateTimeKind::Local);
    assert!(summer.is_daylight_saving_time());
    assert!(!winter.is_daylight_saving_time());
}

/// System-timezone offset at local noon of the given date.
fn local_noon_offset(year: i32, month: u32, day: u32) -> i32 {
    let date = NaiveDate::from_ymd_opt(year, month, day).expect("probe date is valid");
    let noon = NaiveTime::from_hms_opt(12, 0, 0).expect("noon is a valid time");
    chrono::Local
        .from_local_datetime(&NaiveDateTime::new(date, noon))
        .earliest()
        .expect("local noon always resolves")
        .offset()
        .local_minus_utc()
}

#[test]
fn javascript_wire_form_round_trips() {
    let dt = DateTime::from_fields(
        2015,
        12,
        8,
        14,
        22,
        11,
        0,
        DateTimeKind::Local,
        DayOfWeek::Sunday,
    );
    let js = dt.to_javascript_ticks();
    let back = DateTime::from_javascript_ticks(js);
    assert_eq!(back, dt);
    assert_eq!(back.kind(), DateTimeKind::Utc);
}

#[test]
fn sentinels_are_the_platform_bounds() {
    let min = DateTime::min_value();
    assert!(min < DateTime::new(1, 1, 1, DateTimeKind::Utc));
    assert!(DateTime::max_value() > DateTime::new(9999, 12, 31, DateTimeKind::Utc));
}

#[test]
fn interval_reconstruction_via_seconds_quantity() {
    let dt = DateTime::new(2011, 4, 1, DateTimeKind::Utc);
    let shifted = dt.add_interval(Seconds::new(0.888));
    assert_eq!(shifted.millisecond(), 888);
}

#[cfg(feature = "serde")]
#[test]
fn datetime_serializes_as_a_single_integer() {
    let dt = DateTime::from_fields(
        2015,
        12,
        8,
        14,
        22,
        11,
        0,
        DateTimeKind::Utc,
        DayOfWeek::Sunday,
    );
    let json = serde_json::to_string(&dt).unwrap();
    assert_eq!(json, dt.to_javascript_ticks().to_string());

    let back: DateTime = serde_json::from_str(&json).unwrap();
    assert_eq!(back, dt);
}

#[cfg(feature = "serde")]
#[test]
fn malformed_datetime_decodes_to_the_minimum_sentinel() {
    let back: DateTime = serde_json::from_str("\"not a tick count\"").unwrap();
    assert_eq!(back, DateTime::min_value());
    assert_eq!(back.kind(), DateTimeKind::Utc);
}

#[cfg(feature = "serde")]
#[test]
fn timespan_serializes_as_its_interval() {
    let span = TimeSpan::from_units(1.0, 1.0, 0.0, 0.0, 0.0, 0.0);
    let json = serde_json::to_string(&span).unwrap();
    assert_eq!(json, "90000.0");
    let back: TimeSpan = serde_json::from_str(&json).unwrap();
    assert_eq!(back, span);
}
