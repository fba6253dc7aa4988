use crate::app::DashboardApp;
use crate::sim::analytics::SCENARIOS;
use crate::ui::theme;
use eframe::egui;
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};

const SCENARIO_COLORS: [egui::Color32; 3] = [
    egui::Color32::from_rgb(99, 110, 250),
    egui::Color32::from_rgb(239, 85, 59),
    egui::Color32::from_rgb(0, 204, 150),
];

pub fn analytics_page(ui: &mut egui::Ui, app: &DashboardApp) {
    ui.heading("Safety Performance Analytics");
    ui.add_space(10.0);

    ui.columns(2, |cols| {
        response_lag_chart(&mut cols[0]);
        accuracy_chart(&mut cols[1], &app.data.accuracy);
    });
}

fn response_lag_chart(ui: &mut egui::Ui) {
    ui.label(egui::RichText::new("Reduction in Emergency Response Lag").strong());

    let charts: Vec<BarChart> = SCENARIOS
        .iter()
        .zip(SCENARIO_COLORS)
        .enumerate()
        .map(|(i, (scenario, color))| {
            let bar = Bar::new(i as f64, scenario.response_minutes)
                .name(format!(
                    "{}: {} min, {}% accuracy",
                    scenario.name, scenario.response_minutes, scenario.accuracy_pct
                ))
                .width(0.6);
            BarChart::new(vec![bar]).name(scenario.name).color(color)
        })
        .collect();

    Plot::new("response_lag")
        .height(300.0)
        .legend(Legend::default())
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .y_axis_label("Response Time (Min)")
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

fn accuracy_chart(ui: &mut egui::Ui, points: &[[f64; 2]]) {
    ui.label(egui::RichText::new("AI Predictive Accuracy (Training Epochs)").strong());

    let line = Line::new(PlotPoints::from(points.to_vec()))
        .name("accuracy")
        .color(theme::ACCENT);

    Plot::new("predictive_accuracy")
        .height(300.0)
        .legend(Legend::default())
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .x_axis_label("Epoch")
        .show(ui, |plot_ui| plot_ui.line(line));
}
