use crate::model::Treatment;
use crate::ui::theme;
use eframe::egui;

const PILLARS: [(&str, &str); 3] = [
    (
        "Prevent",
        "AI detects early signs of 'crowd turbulence' before it turns into a crush.",
    ),
    (
        "Protect",
        "Real-time GPS routing for emergency responders to avoid dense areas.",
    ),
    (
        "Predict",
        "Machine Learning models forecast density for the next 30-60 minutes.",
    ),
];

const SAFETY_GAP: [(&str, &str); 3] = [
    ("Latency", "Human guards take ~15 mins to report a surge."),
    ("Blindspots", "CCTV blindspots lead to delayed rescues."),
    ("Inefficiency", "Panic often spreads faster than instructions."),
];

const SOLUTION: [(&str, &str); 3] = [
    ("Instant Alerts", "0.5s detection via Edge AI processing."),
    (
        "Total Visibility",
        "Sensor fusion combines CCTV + Wi-Fi Triangulation.",
    ),
    (
        "Direct Comms",
        "Push-alerts sent directly to on-ground staff apps.",
    ),
];

pub fn goals_page(ui: &mut egui::Ui) {
    ui.heading("SmartCrowd OS: Mission Protocol");
    ui.add_space(10.0);

    let (_, neutral_bg) = crate::ui::treatment_colors(Treatment::Neutral);
    ui.columns(PILLARS.len(), |cols| {
        for (col, (title, body)) in cols.iter_mut().zip(PILLARS) {
            theme::card(neutral_bg).show(col, |ui| {
                ui.label(egui::RichText::new(title).heading().color(theme::ACCENT));
                ui.add(egui::Label::new(body).wrap(true));
            });
        }
    });

    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);

    ui.columns(2, |cols| {
        bullet_card(&mut cols[0], "The Safety Gap", Treatment::Critical, &SAFETY_GAP);
        bullet_card(
            &mut cols[1],
            "The SmartCrowd Solution",
            Treatment::Positive,
            &SOLUTION,
        );
    });
}

fn bullet_card(ui: &mut egui::Ui, title: &str, treatment: Treatment, points: &[(&str, &str)]) {
    let (fg, bg) = crate::ui::treatment_colors(treatment);
    theme::card(bg).show(ui, |ui| {
        ui.label(egui::RichText::new(title).strong().size(18.0).color(fg));
    });
    ui.add_space(6.0);
    for (head, text) in points {
        ui.horizontal_wrapped(|ui| {
            ui.label("\u{2022}");
            ui.label(egui::RichText::new(format!("{head}:")).strong());
            ui.label(*text);
        });
    }
}
