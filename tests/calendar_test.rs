// ==========================================
// 历法层集成测试
// ==========================================
// 测试目标: 农历新年、闰月、干支循环、节气、每日宜忌
// ==========================================

mod helpers;

use chrono::Duration;
use helpers::{adapter, ymd};
use mourning_almanac::calendar::{LunarCalendar, TymeCalendar};
use mourning_almanac::engine::FUNERAL_ACTIVITIES;
use std::collections::HashSet;

#[test]
fn test_lunar_new_year_reference_dates() {
    let adapter = adapter();
    for (date, year) in [
        (ymd(2023, 1, 22), 2023),
        (ymd(2024, 2, 10), 2024),
        (ymd(2025, 1, 29), 2025),
        (ymd(2026, 2, 17), 2026),
    ] {
        let facts = adapter.resolve(date).unwrap();
        assert_eq!(facts.lunar.year, year, "{}", date);
        assert_eq!((facts.lunar.month, facts.lunar.day), (1, 1), "{}", date);
        assert!(!facts.lunar.is_leap_month);

        let eve = adapter.resolve(date - Duration::days(1)).unwrap();
        assert_eq!(eve.lunar.year, year - 1);
        assert_eq!(eve.lunar.month, 12);
    }
}

#[test]
fn test_leap_month_reference_dates() {
    let adapter = adapter();
    for (date, month, name) in [
        (ymd(2020, 5, 23), 4, "閏四月"),
        (ymd(2023, 3, 22), 2, "閏二月"),
        (ymd(2025, 7, 25), 6, "閏六月"),
    ] {
        let facts = adapter.resolve(date).unwrap();
        assert!(facts.lunar.is_leap_month, "{}", date);
        assert_eq!(facts.lunar.month, month);
        assert_eq!(facts.lunar.day, 1);
        assert_eq!(facts.lunar.month_name, name);

        let before = adapter.resolve(date - Duration::days(1)).unwrap();
        assert!(!before.lunar.is_leap_month);
        assert_eq!(before.lunar.month, month);
    }
}

#[test]
fn test_day_ganzhi_advances_one_step_per_day() {
    let adapter = adapter();
    let start = ymd(2024, 11, 1);
    let days: Vec<_> = (0..180)
        .map(|i| adapter.resolve(start + Duration::days(i)).unwrap())
        .collect();

    for pair in days.windows(2) {
        let a = pair[0].ganzhi.day.cycle_index().unwrap();
        let b = pair[1].ganzhi.day.cycle_index().unwrap();
        assert_eq!((a + 1) % 60, b, "{}", pair[1].solar);
    }
    for i in 0..120 {
        assert_eq!(days[i].ganzhi.day, days[i + 60].ganzhi.day);
    }
}

#[test]
fn test_all_pillars_are_valid_sexagenary_pairs() {
    let adapter = adapter();
    let start = ymd(2025, 1, 1);
    for i in 0..366 {
        let facts = adapter.resolve(start + Duration::days(i)).unwrap();
        assert!(facts.ganzhi.year.is_valid());
        assert!(facts.ganzhi.month.is_valid());
        assert!(facts.ganzhi.day.is_valid());
        assert_eq!(facts.ganzhi.year.branch.zodiac(), facts.zodiac);
    }
}

#[test]
fn test_lunar_day_sequence_and_month_lengths() {
    let adapter = adapter();
    let start = ymd(2025, 1, 29);
    let mut month_len = 0;
    let mut prev = adapter.resolve(start).unwrap().lunar;
    for i in 1..400 {
        let cur = adapter.resolve(start + Duration::days(i)).unwrap().lunar;
        if cur.day == 1 {
            assert!(prev.day == 29 || prev.day == 30, "{:?}", prev);
            month_len = 0;
        } else {
            assert_eq!(cur.day, prev.day + 1);
            month_len += 1;
        }
        assert!(month_len < 30);
        prev = cur;
    }
}

#[test]
fn test_solar_terms_on_known_days() {
    let calendar = TymeCalendar::new();
    assert_eq!(calendar.solar_to_lunar(ymd(2025, 2, 3)).unwrap().solar_term, "立春");
    assert_eq!(calendar.solar_to_lunar(ymd(2025, 4, 4)).unwrap().solar_term, "清明");
    assert_eq!(calendar.solar_to_lunar(ymd(2024, 12, 21)).unwrap().solar_term, "冬至");
    assert_eq!(calendar.solar_to_lunar(ymd(2024, 12, 22)).unwrap().solar_term, "");
}

#[test]
fn test_lunar_to_solar_matches_resolve() {
    let calendar = TymeCalendar::new();
    let adapter = adapter();
    for date in [ymd(2024, 6, 15), ymd(2025, 8, 30), ymd(2026, 1, 1)] {
        let lunar = adapter.resolve(date).unwrap().lunar;
        let back = calendar
            .lunar_to_solar(lunar.year, lunar.month, lunar.day, lunar.is_leap_month)
            .unwrap();
        assert_eq!(back, date);
    }
}

#[test]
fn test_solar_term_names_are_traditional() {
    let adapter = adapter();
    assert_eq!(adapter.resolve(ymd(2025, 3, 5)).unwrap().solar_term, "驚蟄");
    assert_eq!(adapter.resolve(ymd(2025, 4, 20)).unwrap().solar_term, "穀雨");
}

#[test]
fn test_yi_ji_vary_day_to_day() {
    let adapter = adapter();
    let start = ymd(2020, 1, 1);
    let mut pairs = HashSet::new();
    let mut funeral_days = 0;
    for i in 0..730 {
        let facts = adapter.resolve(start + Duration::days(i)).unwrap();
        if facts.yi.iter().any(|item| FUNERAL_ACTIVITIES.contains(&item.as_str()))
            && !facts.ji.iter().any(|item| FUNERAL_ACTIVITIES.contains(&item.as_str()))
        {
            funeral_days += 1;
        }
        pairs.insert((facts.yi, facts.ji));
    }
    // 宜忌随月份与日干支变化
    assert!(pairs.len() > 60, "distinct yi/ji pairs: {}", pairs.len());
    assert!(funeral_days > 0 && funeral_days < 730);
}

#[test]
fn test_historic_and_far_future_dates_resolve() {
    let adapter = adapter();
    let facts = adapter.resolve(ymd(1899, 1, 1)).unwrap();
    assert_eq!(facts.lunar.year, 1898);
    assert!(adapter.resolve(ymd(2150, 1, 1)).is_ok());
}

#[test]
fn test_unsupported_dates_are_conversion_errors() {
    let adapter = adapter();
    assert!(adapter.resolve(ymd(1500, 1, 1)).unwrap_err().is_conversion());
    assert!(adapter.resolve(ymd(10000, 1, 1)).unwrap_err().is_conversion());
}
