use crate::app::DashboardApp;
use crate::sim::kpi::{Kpi, LIVE_KPIS, Trend};
use crate::ui::theme;
use eframe::egui;

pub fn live_page(ui: &mut egui::Ui, app: &mut DashboardApp) {
    ui.heading("Live Operational Intelligence");
    ui.add_space(8.0);

    ui.columns(LIVE_KPIS.len(), |cols| {
        for (col, kpi) in cols.iter_mut().zip(LIVE_KPIS.iter()) {
            kpi_card(col, kpi);
        }
    });

    ui.add_space(12.0);

    // Map takes two thirds of the width, feed the rest.
    let map_width = (ui.available_width() * 2.0 / 3.0).max(240.0);
    ui.horizontal_top(|ui| {
        ui.vertical(|ui| {
            ui.set_width(map_width - 12.0);
            ui.label(egui::RichText::new("Real-Time Density Heatmap").strong().size(17.0));
            ui.add_space(4.0);
            crate::ui::heatmap::heatmap(ui, &app.data.density);
        });
        ui.separator();
        ui.vertical(|ui| crate::ui::feed::incident_feed(ui, app));
    });
}

fn kpi_card(ui: &mut egui::Ui, kpi: &Kpi) {
    theme::card(theme::PANEL).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(egui::RichText::new(kpi.label).small().weak());
        ui.label(
            egui::RichText::new(kpi.value)
                .monospace()
                .size(24.0)
                .color(theme::ACCENT),
        );
        let color = match kpi.trend() {
            Trend::Good => egui::Color32::from_rgb(80, 220, 130),
            Trend::Bad => egui::Color32::from_rgb(255, 90, 90),
            Trend::Flat => egui::Color32::GRAY,
        };
        ui.colored_label(color, kpi.delta);
    });
}
