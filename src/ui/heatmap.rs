use crate::sim::density::DensityGrid;
use eframe::egui;

/// Blue (cold) through cyan, yellow to red (hot), `t` in `0.0..=1.0`.
pub fn jet(t: f32) -> egui::Color32 {
    let t = t.clamp(0.0, 1.0);
    let channel = |offset: f32| ((1.5 - (4.0 * t - offset).abs()).clamp(0.0, 1.0) * 255.0) as u8;
    egui::Color32::from_rgb(channel(3.0), channel(2.0), channel(1.0))
}

pub fn heatmap(ui: &mut egui::Ui, grid: &DensityGrid) {
    let side = ui.available_width().clamp(160.0, 560.0);
    let (rect, response) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 4.0, crate::ui::theme::BACKGROUND);

    let n = grid.size();
    if n == 0 || grid.peak() == 0 {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "No density data",
            egui::FontId::proportional(14.0),
            egui::Color32::GRAY,
        );
        return;
    }

    let cell = side / n as f32;
    for row in 0..n {
        for col in 0..n {
            let intensity = grid.intensity(row, col);
            if intensity <= 0.0 {
                continue;
            }
            let min = rect.min + egui::vec2(col as f32 * cell, row as f32 * cell);
            let color = jet(intensity).gamma_multiply(0.35 + 0.65 * intensity);
            painter.rect_filled(
                egui::Rect::from_min_size(min, egui::vec2(cell, cell)),
                0.0,
                color,
            );
        }
    }

    if let Some(pos) = response.hover_pos() {
        let col = (((pos.x - rect.left()) / cell) as usize).min(n - 1);
        let row = (((pos.y - rect.top()) / cell) as usize).min(n - 1);
        egui::show_tooltip_at_pointer(ui.ctx(), egui::Id::new("heatmap_hover"), |ui| {
            ui.label(egui::RichText::new("Density").strong());
            ui.monospace(format!("cell {row},{col}: {} people", grid.count(row, col)));
        });
    }
}
