use crate::app::DashboardApp;
use crate::config::Settings;
use eframe::egui;

pub const WINDOW_TITLE: &str = "SmartCrowd OS | AI Safety Terminal";

pub fn run(settings: Settings) -> eframe::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([settings.window_width, settings.window_height]),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(move |cc| {
            crate::ui::theme::apply(&cc.egui_ctx);
            Box::new(DashboardApp::new(settings))
        }),
    )
}
