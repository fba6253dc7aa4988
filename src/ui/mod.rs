mod analytics;
mod deployment;
mod feed;
mod goals;
mod heatmap;
mod live;
pub mod theme;

use crate::app::{DashboardApp, Page};
use crate::model::{Severity, Treatment};
use eframe::egui;

pub fn render_app(ctx: &egui::Context, frame: &mut eframe::Frame, app: &mut DashboardApp) {
    top_bar(ctx, frame, app);

    egui::SidePanel::left("nav_panel")
        .resizable(true)
        .default_width(240.0)
        .show(ctx, |ui| nav_panel(ui, app));

    status_bar(ctx, app);

    let page = app.ui.page;
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .id_source("page_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| match page {
                Page::StrategicGoals => goals::goals_page(ui),
                Page::LiveCommandCenter => live::live_page(ui, app),
                Page::AiAnalytics => analytics::analytics_page(ui, app),
                Page::SystemDeployment => deployment::deployment_page(ui),
            });
    });

    about_window(ctx, app);
}

fn top_bar(ctx: &egui::Context, frame: &mut eframe::Frame, app: &mut DashboardApp) {
    egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Quit").clicked() {
                    let _ = frame;
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                for page in Page::ALL {
                    if ui.button(page.label()).clicked() {
                        app.ui.page = page;
                        ui.close_menu();
                    }
                }
                ui.separator();
                if ui.button("Reset zoom").clicked() {
                    ctx.set_zoom_factor(1.0);
                    ui.close_menu();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    app.ui.show_about = true;
                    ui.close_menu();
                }
            });
        });
    });
}

fn nav_panel(ui: &mut egui::Ui, app: &mut DashboardApp) {
    ui.add_space(6.0);
    ui.heading("Admin Terminal");
    ui.label(egui::RichText::new("AI-Powered Public Safety Interface").small().weak());
    ui.add_space(10.0);

    ui.label(egui::RichText::new("Navigation").strong());
    for page in Page::ALL {
        ui.radio_value(&mut app.ui.page, page, page.label());
    }

    ui.separator();
    ui.label(egui::RichText::new("Infrastructure Status").strong());
    ui.add_space(4.0);
    ui.colored_label(
        treatment_colors(Treatment::Positive).0,
        "\u{2714} AI Core: Operational",
    );
    ui.horizontal(|ui| {
        ui.label("Satellite Link:");
        ui.label(egui::RichText::new("Stable").strong());
    });
    ui.horizontal(|ui| {
        ui.label("Camera Nodes:");
        ui.label(egui::RichText::new("1,240 Active").strong());
    });
}

fn about_window(ctx: &egui::Context, app: &mut DashboardApp) {
    if !app.ui.show_about {
        return;
    }

    egui::Window::new("About SmartCrowd OS")
        .open(&mut app.ui.show_about)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label("Operator dashboard mockup for crowd-safety monitoring.");
            ui.label("Heatmap and analytics are synthetic; incidents are simulated.");
        });
}

fn status_bar(ctx: &egui::Context, app: &mut DashboardApp) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Alerts: {}", app.alerts.len()));
            for sev in Severity::ALL {
                ui.colored_label(
                    severity_color(sev),
                    format!("{} {}", sev.label(), app.alerts.count_by_severity(sev)),
                );
            }
            ui.separator();
            ui.label(format!("Page: {}", app.ui.page.label()));
            if let Some(err) = &app.ui.last_error {
                ui.separator();
                ui.colored_label(
                    egui::Color32::from_rgb(255, 70, 70),
                    format!("Error: {err}"),
                );
            }
        });
    });
}

pub fn severity_color(sev: Severity) -> egui::Color32 {
    treatment_colors(Treatment::for_severity(sev)).0
}

/// Text and fill colours for a feed treatment.
pub fn treatment_colors(t: Treatment) -> (egui::Color32, egui::Color32) {
    match t {
        Treatment::Critical => (
            egui::Color32::from_rgb(255, 90, 90),
            egui::Color32::from_rgb(61, 20, 24),
        ),
        Treatment::Positive => (
            egui::Color32::from_rgb(80, 220, 130),
            egui::Color32::from_rgb(16, 46, 30),
        ),
        Treatment::Neutral => (
            egui::Color32::from_rgb(90, 160, 255),
            egui::Color32::from_rgb(18, 34, 60),
        ),
    }
}
