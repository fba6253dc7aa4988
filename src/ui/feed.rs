use crate::app::DashboardApp;
use crate::model::FeedRow;
use crate::ui::theme;
use eframe::egui;

pub fn incident_feed(ui: &mut egui::Ui, app: &mut DashboardApp) {
    ui.label(egui::RichText::new("Incident Feed").strong().size(17.0));
    ui.add_space(4.0);

    if ui
        .button(egui::RichText::new("Simulate Critical Surge").strong())
        .on_hover_text("Inject a synthetic density spike into the feed")
        .clicked()
    {
        app.simulate_surge();
    }
    ui.add_space(6.0);

    let rows = app.feed.render(&app.alerts);
    for row in &rows {
        feed_row(ui, row);
        ui.add_space(4.0);
    }

    let hidden = app.alerts.len().saturating_sub(rows.len());
    if hidden > 0 {
        ui.label(egui::RichText::new(format!("{hidden} older alerts")).small().weak());
    }
}

fn feed_row(ui: &mut egui::Ui, row: &FeedRow) {
    let (fg, bg) = crate::ui::treatment_colors(row.treatment);
    theme::card(bg).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal_wrapped(|ui| {
            ui.label(egui::RichText::new(&row.time).monospace().strong().color(fg));
            ui.label("|");
            ui.label(egui::RichText::new(&row.message).color(fg));
        });
    })
    .response
    .on_hover_text(format!("{} ({})", row.headline(), row.severity));
}
