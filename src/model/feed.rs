use crate::model::{AlertStore, Severity};

pub const DEFAULT_FEED_LIMIT: usize = 6;

/// Visual treatment for a feed row. One per severity, no fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Treatment {
    Critical,
    Positive,
    Neutral,
}

impl Treatment {
    pub fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Error => Treatment::Critical,
            Severity::Success => Treatment::Positive,
            Severity::Info => Treatment::Neutral,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedRow {
    pub time: String,
    pub message: String,
    pub severity: Severity,
    pub treatment: Treatment,
}

impl FeedRow {
    pub fn headline(&self) -> String {
        format!("{} | {}", self.time, self.message)
    }
}

/// Maps the visible slice of an [`AlertStore`] to display rows.
#[derive(Clone, Copy, Debug)]
pub struct AlertFeedView {
    limit: usize,
}

impl Default for AlertFeedView {
    fn default() -> Self {
        Self::new(DEFAULT_FEED_LIMIT)
    }
}

impl AlertFeedView {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn render(&self, store: &AlertStore) -> Vec<FeedRow> {
        store
            .top_n(self.limit)
            .map(|r| FeedRow {
                time: r.time_label(),
                message: r.message().to_string(),
                severity: r.severity(),
                treatment: Treatment::for_severity(r.severity()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FixedClock, SimulationTrigger};
    use time::macros::time;

    #[test]
    fn render_is_idempotent() {
        let store = AlertStore::initialize();
        let view = AlertFeedView::default();
        assert_eq!(view.render(&store), view.render(&store));
    }

    #[test]
    fn treatment_is_keyed_by_severity() {
        assert_eq!(Treatment::for_severity(Severity::Error), Treatment::Critical);
        assert_eq!(Treatment::for_severity(Severity::Success), Treatment::Positive);
        assert_eq!(Treatment::for_severity(Severity::Info), Treatment::Neutral);
    }

    #[test]
    fn render_caps_at_limit() {
        let mut store = AlertStore::initialize();
        let trigger = SimulationTrigger::with_clock(FixedClock(time!(9:00:00)));
        for _ in 0..10 {
            trigger.fire(&mut store);
        }
        assert_eq!(AlertFeedView::default().render(&store).len(), 6);
        assert_eq!(AlertFeedView::new(3).render(&store).len(), 3);
        assert!(AlertFeedView::new(0).render(&store).is_empty());
    }

    #[test]
    fn surge_end_to_end() {
        let mut store = AlertStore::initialize();
        SimulationTrigger::with_clock(FixedClock(time!(12:00:00))).fire(&mut store);

        let rows = AlertFeedView::default().render(&store);
        let got: Vec<_> = rows
            .iter()
            .map(|r| (r.time.as_str(), r.message.as_str(), r.severity))
            .collect();
        assert_eq!(
            got,
            [
                ("12:00:00", "Density Spike: Gate 4", Severity::Error),
                ("19:10:05", "Sensor Node 14 Active", Severity::Info),
                ("19:04:22", "System Calibration Complete", Severity::Success),
            ]
        );
        assert_eq!(rows[0].treatment, Treatment::Critical);
        assert_eq!(rows[0].headline(), "12:00:00 | Density Spike: Gate 4");
    }
}
