use std::fmt;
use std::str::FromStr;

use time::Time;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Info, Severity::Success, Severity::Error];

    pub fn label(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Success => "OK",
            Severity::Error => "CRIT",
        }
    }

    /// The lowercase tag used by seed data and settings files.
    pub fn tag(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Severity {
    type Err = AlertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Severity::ALL
            .into_iter()
            .find(|sev| sev.tag().eq_ignore_ascii_case(tag))
            .ok_or_else(|| AlertError::UnknownSeverity(tag.to_string()))
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AlertError {
    #[error("unknown severity tag {0:?} (expected info, success or error)")]
    UnknownSeverity(String),
    #[error("invalid alert time {0:?} (expected HH:MM:SS)")]
    InvalidTime(String),
}

/// One entry of the incident feed. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlertRecord {
    time: Time,
    message: String,
    severity: Severity,
}

impl AlertRecord {
    pub fn new(time: Time, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            time: crate::util::time::truncate_to_seconds(time),
            message: message.into(),
            severity,
        }
    }

    /// Builds a record from untyped parts, rejecting unknown severities and
    /// malformed times instead of defaulting them.
    pub fn from_parts(time: &str, message: &str, severity: &str) -> Result<Self, AlertError> {
        let severity = severity.parse::<Severity>()?;
        let time = crate::util::time::parse_clock(time)
            .map_err(|_| AlertError::InvalidTime(time.to_string()))?;
        Ok(Self::new(time, message, severity))
    }

    pub fn time(&self) -> Time {
        self.time
    }

    pub fn time_label(&self) -> String {
        crate::util::time::clock_string(self.time)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::time;

    #[test]
    fn severity_parses_known_tags() {
        assert_eq!("info".parse::<Severity>(), Ok(Severity::Info));
        assert_eq!(" Success ".parse::<Severity>(), Ok(Severity::Success));
        assert_eq!("ERROR".parse::<Severity>(), Ok(Severity::Error));
    }

    #[test]
    fn severity_rejects_unknown_tags() {
        assert_eq!(
            "warning".parse::<Severity>(),
            Err(AlertError::UnknownSeverity("warning".into()))
        );
        assert!("".parse::<Severity>().is_err());
    }

    #[test]
    fn tags_round_trip_through_display() {
        for sev in Severity::ALL {
            assert_eq!(sev.to_string().parse::<Severity>(), Ok(sev));
        }
    }

    #[test]
    fn from_parts_builds_record() {
        let rec = AlertRecord::from_parts("19:04:22", "System Calibration Complete", "success")
            .unwrap();
        assert_eq!(rec.time(), time!(19:04:22));
        assert_eq!(rec.time_label(), "19:04:22");
        assert_eq!(rec.message(), "System Calibration Complete");
        assert_eq!(rec.severity(), Severity::Success);
    }

    #[test]
    fn from_parts_fails_fast() {
        assert_eq!(
            AlertRecord::from_parts("19:04:22", "x", "critical"),
            Err(AlertError::UnknownSeverity("critical".into()))
        );
        assert_eq!(
            AlertRecord::from_parts("7pm", "x", "info"),
            Err(AlertError::InvalidTime("7pm".into()))
        );
    }
}
