use time::Time;

use crate::model::{AlertRecord, AlertStore, Severity};

pub const SURGE_MESSAGE: &str = "Density Spike: Gate 4";

pub trait Clock {
    fn now(&self) -> Time;
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> Time {
        (**self).now()
    }
}

/// Local wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Time {
        crate::util::time::local_time_of_day()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub Time);

impl Clock for FixedClock {
    fn now(&self) -> Time {
        self.0
    }
}

/// Manual "critical surge" injection.
///
/// Every call adds a new record even when two land in the same second.
pub struct SimulationTrigger<C = SystemClock> {
    clock: C,
}

impl Default for SimulationTrigger<SystemClock> {
    fn default() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> SimulationTrigger<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    pub fn fire(&self, store: &mut AlertStore) {
        let record = AlertRecord::new(self.clock.now(), SURGE_MESSAGE, Severity::Error);
        log::info!(
            "surge simulated at {} ({} alerts in session)",
            record.time_label(),
            store.len() + 1
        );
        store.prepend(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::time;

    #[test]
    fn single_fire_on_fresh_store() {
        let mut store = AlertStore::initialize();
        SimulationTrigger::with_clock(FixedClock(time!(12:00:00))).fire(&mut store);

        assert_eq!(store.len(), 3);
        let first = store.iter().next().unwrap();
        assert_eq!(first.severity(), Severity::Error);
        assert_eq!(first.message(), SURGE_MESSAGE);
        assert_eq!(first.time_label(), "12:00:00");
    }

    #[test]
    fn k_fires_stack_in_reverse_invocation_order() {
        let mut store = AlertStore::initialize();
        let k = 5u8;
        for i in 0..k {
            let clock = FixedClock(Time::from_hms(12, 0, i).unwrap());
            SimulationTrigger::with_clock(clock).fire(&mut store);
        }

        assert_eq!(store.len(), 2 + k as usize);
        let secs: Vec<u8> = store.top_n(k as usize).map(|r| r.time().second()).collect();
        assert_eq!(secs, [4, 3, 2, 1, 0]);
        assert!(
            store
                .top_n(k as usize)
                .all(|r| r.severity() == Severity::Error && r.message() == SURGE_MESSAGE)
        );
    }

    #[test]
    fn same_second_fires_are_not_deduplicated() {
        let mut store = AlertStore::default();
        let trigger = SimulationTrigger::with_clock(FixedClock(time!(8:30:00)));
        trigger.fire(&mut store);
        trigger.fire(&mut store);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn system_clock_yields_whole_seconds() {
        assert_eq!(SystemClock.now().nanosecond(), 0);
    }
}
