mod run;
mod ui_state;

use crate::config::Settings;
use crate::model::{AlertFeedView, AlertStore, Clock, SimulationTrigger, SystemClock};
use crate::sim::SyntheticData;
use eframe::egui;

pub use run::run;
pub use ui_state::{Page, UiState};

/// One operator session: its own alert history plus everything the panels show.
pub struct DashboardApp {
    pub alerts: AlertStore,
    pub feed: AlertFeedView,
    pub trigger: SimulationTrigger<Box<dyn Clock>>,
    pub data: SyntheticData,
    pub settings: Settings,
    pub ui: UiState,
}

impl DashboardApp {
    pub fn new(settings: Settings) -> Self {
        Self::with_clock(settings, SystemClock)
    }

    pub fn with_clock(settings: Settings, clock: impl Clock + 'static) -> Self {
        let mut ui = UiState::default();
        let data = SyntheticData::generate(&settings).unwrap_or_else(|e| {
            log::error!("synthetic panel data unavailable: {e:#}");
            ui.last_error = Some(format!("{e:#}"));
            SyntheticData::default()
        });

        Self {
            alerts: AlertStore::initialize(),
            feed: AlertFeedView::new(settings.feed_limit),
            trigger: SimulationTrigger::with_clock(Box::new(clock)),
            data,
            settings,
            ui,
        }
    }

    pub fn simulate_surge(&mut self) {
        self.trigger.fire(&mut self.alerts);
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        crate::ui::render_app(ctx, frame, self);
    }
}
