use time::macros::format_description;
use time::{OffsetDateTime, Time};

/// 24-hour `HH:MM:SS` rendering used everywhere a wall-clock time is shown.
pub fn clock_string(t: Time) -> String {
    format!("{:02}:{:02}:{:02}", t.hour(), t.minute(), t.second())
}

pub fn parse_clock(s: &str) -> Result<Time, time::error::Parse> {
    Time::parse(s.trim(), format_description!("[hour]:[minute]:[second]"))
}

/// Current local time of day, truncated to whole seconds.
///
/// Falls back to UTC when the local offset can't be determined (for example on
/// some unix targets once other threads are running).
pub fn local_time_of_day() -> Time {
    let now = OffsetDateTime::now_local().unwrap_or_else(|e| {
        log::debug!("local offset unavailable ({e}), using UTC");
        OffsetDateTime::now_utc()
    });
    truncate_to_seconds(now.time())
}

pub fn truncate_to_seconds(t: Time) -> Time {
    t.replace_nanosecond(0).unwrap_or(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::time;

    #[test]
    fn clock_string_pads_fields() {
        assert_eq!(clock_string(time!(7:04:09)), "07:04:09");
        assert_eq!(clock_string(time!(23:59:59)), "23:59:59");
    }

    #[test]
    fn parse_clock_accepts_24_hour_times() {
        assert_eq!(parse_clock("19:10:05").unwrap(), time!(19:10:05));
        assert_eq!(parse_clock(" 00:00:00 ").unwrap(), time!(0:00));
    }

    #[test]
    fn parse_clock_rejects_garbage() {
        assert!(parse_clock("25:00:00").is_err());
        assert!(parse_clock("12:00").is_err());
        assert!(parse_clock("noon").is_err());
    }

    #[test]
    fn truncation_drops_subsecond_part() {
        let t = Time::from_hms_nano(12, 0, 0, 999_999_999).unwrap();
        assert_eq!(truncate_to_seconds(t), time!(12:00:00));
    }
}
