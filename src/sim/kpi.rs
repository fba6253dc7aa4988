/// How a KPI delta should be coloured: `Inverse` means a drop is good news.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeltaColor {
    Normal,
    Inverse,
    Off,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Kpi {
    pub label: &'static str,
    pub value: &'static str,
    pub delta: &'static str,
    pub delta_color: DeltaColor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Good,
    Bad,
    Flat,
}

impl Kpi {
    /// Reads the sign off the delta text; deltas without one ("Stable",
    /// "Target Met") are flat.
    pub fn trend(&self) -> Trend {
        let sign = match self.delta.trim_start().chars().next() {
            Some('+') => 1,
            Some('-') => -1,
            _ => 0,
        };
        let sign = match self.delta_color {
            DeltaColor::Normal => sign,
            DeltaColor::Inverse => -sign,
            DeltaColor::Off => 0,
        };
        match sign {
            1 => Trend::Good,
            -1 => Trend::Bad,
            _ => Trend::Flat,
        }
    }
}

pub const LIVE_KPIS: [Kpi; 4] = [
    Kpi {
        label: "Live Attendance",
        value: "42,892",
        delta: "+1.4%",
        delta_color: DeltaColor::Normal,
    },
    Kpi {
        label: "Flow Velocity",
        value: "1.2 m/s",
        delta: "Stable",
        delta_color: DeltaColor::Normal,
    },
    Kpi {
        label: "Critical Points",
        value: "2 Areas",
        delta: "-1",
        delta_color: DeltaColor::Inverse,
    },
    Kpi {
        label: "Avg Response",
        value: "2.8 min",
        delta: "Target Met",
        delta_color: DeltaColor::Normal,
    },
];
