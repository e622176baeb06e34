use eframe::egui;

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(120, 180, 255);

// --- Sizing ---
pub const CARD_SPACING: f32 = 8.0;
pub const SECTION_PADDING: f32 = 24.0;
pub const TAB_SPACING: f32 = 12.0;

// --- Helper functions ---

pub fn truncated_label(
    ui: &mut egui::Ui,
    text: impl Into<egui::WidgetText>,
) -> egui::Response {
    ui.add(egui::Label::new(text).truncate())
}

pub fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.add_space(SECTION_PADDING);
    ui.heading(egui::RichText::new(text).strong().size(22.0));
    ui.add_space(SECTION_PADDING / 2.0);
}

pub fn card_frame(ui: &egui::Ui) -> egui::Frame {
    egui::Frame::group(ui.style())
        .fill(ui.visuals().faint_bg_color)
        .inner_margin(egui::Margin::same(10))
}

/// Tab label; the active tab is drawn in the accent colour.
pub fn tab_text(label: &str, active: bool) -> egui::RichText {
    let text = egui::RichText::new(label);
    if active {
        text.color(ACCENT).strong()
    } else {
        text
    }
}
