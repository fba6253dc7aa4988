#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Phase {
    pub title: &'static str,
    pub items: &'static [&'static str],
    /// Percent complete, `0..=100`.
    pub progress: u8,
    pub expanded: bool,
}

impl Phase {
    pub fn fraction(&self) -> f32 {
        f32::from(self.progress.min(100)) / 100.0
    }
}

pub const PHASES: [Phase; 3] = [
    Phase {
        title: "PHASE 1: Hardware Integration",
        items: &[
            "Edge-computing camera installation.",
            "Wi-Fi Mesh network for real-time triangulation.",
        ],
        progress: 100,
        expanded: true,
    },
    Phase {
        title: "PHASE 2: Neural Network Training",
        items: &[
            "Loading venue CAD models into the Digital Twin.",
            "Training surge-prediction algorithms.",
        ],
        progress: 75,
        expanded: false,
    },
    Phase {
        title: "PHASE 3: Staff Ecosystem",
        items: &[
            "Deployment of SmartCrowd mobile app for guards.",
            "Integration with Local Emergency Services (911/112).",
        ],
        progress: 20,
        expanded: false,
    },
];

pub const SCALABILITY_NOTE: &str = "System Scalability: Ready for venues up to 500k capacity.";
