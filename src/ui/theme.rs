use eframe::egui;

pub const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(11, 13, 17);
pub const PANEL: egui::Color32 = egui::Color32::from_rgb(22, 27, 34);
pub const BORDER: egui::Color32 = egui::Color32::from_rgb(48, 54, 61);
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(0, 212, 255);
pub const TEXT: egui::Color32 = egui::Color32::from_rgb(230, 237, 243);

pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BACKGROUND;
    visuals.window_fill = PANEL;
    visuals.extreme_bg_color = BACKGROUND;
    visuals.override_text_color = Some(TEXT);
    visuals.window_stroke = egui::Stroke::new(1.0, BORDER);
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, BORDER);
    visuals.selection.bg_fill = ACCENT.linear_multiply(0.4);
    ctx.set_visuals(visuals);
}

/// Bordered box used for cards and callouts.
pub fn card(fill: egui::Color32) -> egui::Frame {
    egui::Frame::none()
        .fill(fill)
        .stroke(egui::Stroke::new(1.0, BORDER))
        .rounding(6.0)
        .inner_margin(10.0)
}
