//! Daily sampling times for the exchange rate history.
//!
//! Rates are sampled once a day at 12:00 UTC. The most recent sample is the
//! last noon that has already passed.

use chrono::{DateTime, Duration, TimeZone, Timelike, Utc};

/// Number of daily samples collected
pub const LOOK_BACK: usize = 7;
/// Seconds in a day
pub const DAY_SECONDS: i64 = 86_400;
/// UTC hour of the daily sample
const SAMPLE_HOUR: u32 = 12;

/// Unix timestamp of the last 12:00 UTC at or before `now`
#[must_use]
pub fn last_noon(now: DateTime<Utc>) -> i64 {
    let day = if now.hour() < SAMPLE_HOUR {
        now.date_naive() - Duration::days(1)
    } else {
        now.date_naive()
    };
    day.and_hms_opt(SAMPLE_HOUR, 0, 0)
        .map_or_else(|| now.timestamp(), |noon| Utc.from_utc_datetime(&noon).timestamp())
}

/// The `LOOK_BACK` daily sample timestamps ending at the last noon before
/// `now - warp_days`, oldest first.
#[must_use]
pub fn daily_timestamps(now: DateTime<Utc>, warp_days: u32) -> Vec<i64> {
    let anchor = last_noon(now - Duration::days(i64::from(warp_days)));
    (0..LOOK_BACK)
        .rev()
        .map(|i| anchor - i64::try_from(i).unwrap_or_default() * DAY_SECONDS)
        .collect()
}

/// Noons after the last daily sample that have passed by `now`.
///
/// Only non-empty when the history was warped into the past.
#[must_use]
pub fn next_day_timestamps(last_sample: i64, now: DateTime<Utc>) -> Vec<i64> {
    let now = now.timestamp();
    std::iter::successors(Some(last_sample + DAY_SECONDS), |t| Some(t + DAY_SECONDS))
        .take_while(|t| *t < now)
        .collect()
}

/// `yyyy-MM-dd HH:mm:ss` rendering of a unix timestamp, in UTC
#[must_use]
pub fn human_timestamp(timestamp: u64) -> String {
    i64::try_from(timestamp)
        .ok()
        .and_then(|t| DateTime::from_timestamp(t, 0))
        .map_or_else(String::new, |t| t.format("%Y-%m-%d %H:%M:%S").to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn utc(text: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(text).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_last_noon() {
        for (now, expected) in [
            // now,                     expected noon
            ("2023-10-05T15:30:00Z", "2023-10-05T12:00:00Z"),
            ("2023-10-05T12:00:00Z", "2023-10-05T12:00:00Z"),
            ("2023-10-05T11:59:59Z", "2023-10-04T12:00:00Z"),
            ("2023-10-01T03:00:00Z", "2023-09-30T12:00:00Z"),
        ] {
            assert_eq!(last_noon(utc(now)), utc(expected).timestamp(), "{now}");
        }
    }

    #[test]
    fn test_daily_timestamps() {
        let timestamps = daily_timestamps(utc("2023-10-05T15:30:00Z"), 0);

        assert_eq!(timestamps.len(), LOOK_BACK);
        assert_eq!(timestamps[0], utc("2023-09-29T12:00:00Z").timestamp());
        assert_eq!(timestamps[6], utc("2023-10-05T12:00:00Z").timestamp());
        assert!(timestamps.windows(2).all(|w| w[1] - w[0] == DAY_SECONDS));
    }

    #[test]
    fn test_daily_timestamps_warped() {
        let timestamps = daily_timestamps(utc("2023-10-05T09:00:00Z"), 3);
        // 2023-10-02T09:00 is before noon, so the last sample is the 1st
        assert_eq!(timestamps[6], utc("2023-10-01T12:00:00Z").timestamp());
    }

    #[test]
    fn test_next_day_timestamps() {
        let now = utc("2023-10-05T15:30:00Z");
        let last = utc("2023-10-02T12:00:00Z").timestamp();

        assert_eq!(
            next_day_timestamps(last, now),
            vec![
                utc("2023-10-03T12:00:00Z").timestamp(),
                utc("2023-10-04T12:00:00Z").timestamp(),
                utc("2023-10-05T12:00:00Z").timestamp(),
            ]
        );
        assert!(next_day_timestamps(last_noon(now), now).is_empty());
    }

    #[test]
    fn test_human_timestamp() {
        assert_eq!(human_timestamp(1_696_507_200), "2023-10-05 12:00:00");
        assert_eq!(human_timestamp(0), "1970-01-01 00:00:00");
    }
}
