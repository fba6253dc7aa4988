use crate::model::Treatment;
use crate::sim::roadmap::{PHASES, SCALABILITY_NOTE};
use crate::ui::theme;
use eframe::egui;

pub fn deployment_page(ui: &mut egui::Ui) {
    ui.heading("Implementation Roadmap");
    ui.add_space(10.0);

    for phase in PHASES {
        theme::card(theme::PANEL).show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            egui::CollapsingHeader::new(egui::RichText::new(phase.title).strong())
                .default_open(phase.expanded)
                .show(ui, |ui| {
                    for item in phase.items {
                        ui.label(format!("- {item}"));
                    }
                    ui.add_space(4.0);
                    ui.add(egui::ProgressBar::new(phase.fraction()).show_percentage());
                });
        });
        ui.add_space(6.0);
    }

    ui.add_space(6.0);
    let (fg, bg) = crate::ui::treatment_colors(Treatment::Positive);
    theme::card(bg).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.colored_label(fg, SCALABILITY_NOTE);
    });
}
