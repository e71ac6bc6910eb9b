//! 时间工具函数 — 业务时区转换
//!
//! 所有日期→时间戳转换统一在 API handler / validator 层完成，
//! repository 层只接收 `i64` Unix millis。
//!
//! The business timezone is always an explicit parameter. Date-key
//! extraction near midnight differs between UTC and the restaurant's
//! local zone, so nothing in this module reads an ambient default.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;

use super::{AppError, AppResult};

/// 当前时间 Unix millis
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// 解析日期字符串 (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// 时间戳 → 业务时区的日历日期
///
/// Returns `None` only for instants outside chrono's representable
/// range; callers treat those as matching no date.
pub fn to_calendar_date(millis: i64, tz: Tz) -> Option<NaiveDate> {
    DateTime::<Utc>::from_timestamp_millis(millis).map(|dt| dt.with_timezone(&tz).date_naive())
}

/// 两个时间戳之间的绝对小时差
pub fn hours_between(a_millis: i64, b_millis: i64) -> f64 {
    ((a_millis as f64) - (b_millis as f64)).abs() / 3_600_000.0
}

/// 时间戳是否严格早于 now
pub fn is_past(t_millis: i64, now_millis: i64) -> bool {
    t_millis < now_millis
}

/// 解析客户端提交的预订时间 → Unix millis (业务时区)
///
/// Accepts the HTML datetime-local shapes (`YYYY-MM-DDTHH:MM` and
/// `YYYY-MM-DDTHH:MM:SS`, interpreted in the business timezone) and
/// RFC 3339 with an explicit offset. Anything else is `None` — the
/// validator fails closed on unparseable input.
///
/// DST gap fallback: 如果本地时间不存在 (夏令时跳跃)，fallback 到 UTC。
pub fn parse_reservation_time(raw: &str, tz: Tz) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp_millis());
    }

    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()?;
    Some(
        naive
            .and_local_timezone(tz)
            .latest()
            .map(|dt| dt.timestamp_millis())
            .unwrap_or_else(|| naive.and_utc().timestamp_millis()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Tz;

    fn utc() -> Tz {
        chrono_tz::UTC
    }

    fn saigon() -> Tz {
        chrono_tz::Asia::Ho_Chi_Minh
    }

    #[test]
    fn parse_datetime_local_without_seconds() {
        let millis = parse_reservation_time("2030-06-01T19:00", utc()).unwrap();
        let back = DateTime::<Utc>::from_timestamp_millis(millis).unwrap();
        assert_eq!(back.to_rfc3339(), "2030-06-01T19:00:00+00:00");
    }

    #[test]
    fn parse_datetime_local_with_seconds_and_rfc3339() {
        let a = parse_reservation_time("2030-06-01T19:00:30", utc()).unwrap();
        let b = parse_reservation_time("2030-06-01T19:00:30+00:00", utc()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn parse_respects_business_timezone() {
        // 19:00 in Saigon (UTC+7) is 12:00 UTC
        let local = parse_reservation_time("2030-06-01T19:00", saigon()).unwrap();
        let utc_noon = parse_reservation_time("2030-06-01T12:00", utc()).unwrap();
        assert_eq!(local, utc_noon);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(parse_reservation_time("", utc()), None);
        assert_eq!(parse_reservation_time("   ", utc()), None);
        assert_eq!(parse_reservation_time("tomorrow at 7", utc()), None);
        assert_eq!(parse_reservation_time("2030-13-01T19:00", utc()), None);
    }

    #[test]
    fn calendar_date_depends_on_timezone() {
        // 2024-05-01 23:30 UTC is already 2024-05-02 in Saigon (UTC+7)
        let millis = parse_reservation_time("2024-05-01T23:30", utc()).unwrap();
        assert_eq!(
            to_calendar_date(millis, utc()).unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
        );
        assert_eq!(
            to_calendar_date(millis, saigon()).unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()
        );
    }

    #[test]
    fn hours_between_is_symmetric_and_fractional() {
        let a = parse_reservation_time("2030-06-01T19:00", utc()).unwrap();
        let b = parse_reservation_time("2030-06-01T21:30", utc()).unwrap();
        assert_eq!(hours_between(a, b), 2.5);
        assert_eq!(hours_between(b, a), 2.5);
        assert_eq!(hours_between(a, a), 0.0);
    }

    #[test]
    fn is_past_is_strict() {
        assert!(is_past(999, 1000));
        assert!(!is_past(1000, 1000));
        assert!(!is_past(1001, 1000));
    }

    #[test]
    fn parse_date_roundtrip() {
        assert_eq!(
            parse_date("2024-05-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
        );
        assert!(parse_date("05/01/2024").is_err());
    }
}
