use std::collections::VecDeque;
use std::collections::vec_deque;

use time::macros::time;

use crate::model::{AlertRecord, Severity};

/// Newest-first alert history for one dashboard session.
///
/// Index 0 is always the most recently prepended record. Nothing is ever
/// evicted; the display cap lives in the feed view.
#[derive(Clone, Debug, Default)]
pub struct AlertStore {
    records: VecDeque<AlertRecord>,
    counts: SeverityCounts,
}

/// Running per-severity totals, kept in step with `prepend`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct SeverityCounts {
    info: usize,
    success: usize,
    error: usize,
}

impl SeverityCounts {
    fn slot(&mut self, severity: Severity) -> &mut usize {
        match severity {
            Severity::Info => &mut self.info,
            Severity::Success => &mut self.success,
            Severity::Error => &mut self.error,
        }
    }

    fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::Info => self.info,
            Severity::Success => self.success,
            Severity::Error => self.error,
        }
    }
}

impl AlertStore {
    /// Store seeded with the two startup records, calibration first so the
    /// sensor notice ends up on top.
    pub fn initialize() -> Self {
        let mut s = Self::default();
        s.prepend(AlertRecord::new(
            time!(19:04:22),
            "System Calibration Complete",
            Severity::Success,
        ));
        s.prepend(AlertRecord::new(
            time!(19:10:05),
            "Sensor Node 14 Active",
            Severity::Info,
        ));
        s
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn prepend(&mut self, record: AlertRecord) {
        *self.counts.slot(record.severity()) += 1;
        self.records.push_front(record);
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, AlertRecord> {
        self.records.iter()
    }

    /// The first `min(n, len)` records, newest first. The returned iterator is
    /// `Clone`, so callers can walk the same slice more than once.
    pub fn top_n(&self, n: usize) -> vec_deque::Iter<'_, AlertRecord> {
        self.records.range(..n.min(self.records.len()))
    }

    /// Constant time; does not walk the history.
    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.counts.get(severity)
    }
}
