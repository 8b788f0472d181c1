use chrono::{DateTime, TimeZone, Utc};
use std::fmt::Display;

const MILLIS_PER_SECOND: i64 = 1000;
const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Time left until a deadline, broken into display units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Countdown {
    Running {
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
    },
    Expired,
}

impl Countdown {
    pub fn until(deadline: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let millis = deadline.signed_duration_since(now).num_milliseconds();
        if millis <= 0 {
            return Countdown::Expired;
        }
        Countdown::Running {
            days: millis / MILLIS_PER_DAY,
            hours: (millis % MILLIS_PER_DAY) / MILLIS_PER_HOUR,
            minutes: (millis % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE,
            seconds: (millis % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND,
        }
    }

    pub fn is_expired(&self) -> bool {
        matches!(self, Countdown::Expired)
    }
}

/// `March 5, 2025`
pub fn format_long_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    date.format("%B %-d, %Y").to_string()
}

/// `Mar 5 - Mar 7, 2025`
pub fn format_date_range<Tz: TimeZone>(start: &DateTime<Tz>, end: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    format!("{} - {}", start.format("%b %-d"), end.format("%b %-d, %Y"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::TimeDelta;

    fn deadline() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 5, 0, 0, 0).unwrap()
    }

    #[test]
    fn countdown_breaks_down_remaining_time() {
        let now = deadline()
            - TimeDelta::days(2)
            - TimeDelta::hours(3)
            - TimeDelta::minutes(4)
            - TimeDelta::seconds(5)
            - TimeDelta::milliseconds(600);
        assert_eq!(
            Countdown::Running {
                days: 2,
                hours: 3,
                minutes: 4,
                seconds: 5,
            },
            Countdown::until(deadline(), now)
        );
    }

    #[test]
    fn countdown_under_a_second_is_still_running() {
        let now = deadline() - TimeDelta::milliseconds(400);
        assert_matches!(
            Countdown::until(deadline(), now),
            Countdown::Running { seconds: 0, .. }
        );
    }

    #[test]
    fn countdown_expires_at_deadline() {
        assert!(Countdown::until(deadline(), deadline()).is_expired());
        assert!(Countdown::until(deadline(), deadline() + TimeDelta::seconds(1)).is_expired());
    }

    #[test]
    fn dates_render_in_listing_formats() {
        let start = Utc.with_ymd_and_hms(2025, 3, 5, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 3, 17, 18, 0, 0).unwrap();
        assert_eq!("March 5, 2025", format_long_date(&start));
        assert_eq!("Mar 5 - Mar 17, 2025", format_date_range(&start, &end));
    }
}
