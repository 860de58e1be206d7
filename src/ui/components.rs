//! Reusable UI components
//!
//! This module contains standalone UI components that can be used
//! throughout the application.

use crate::theme;
use eframe::egui;

/// Dim uppercase section label used above form controls
pub fn form_label(ui: &mut egui::Ui, text: &str) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(text.to_uppercase())
                .color(theme::TEXT_DIM)
                .size(theme::FONT_SECTION),
        )
        .selectable(false),
    );
}

/// Row of equal-width toggle buttons with single selection.
/// Returns true if the selection changed.
pub fn toggle_row(ui: &mut egui::Ui, labels: &[&str], selected: &mut usize) -> bool {
    let mut changed = false;
    let count = labels.len().max(1) as f32;
    let spacing = 4.0;
    let btn_width = ((ui.available_width() - spacing * (count - 1.0)) / count).floor();

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = spacing;
        for (i, label) in labels.iter().enumerate() {
            let fill = if *selected == i {
                theme::TOGGLE_SELECTED
            } else {
                theme::TOGGLE_UNSELECTED
            };
            let (rect, response) =
                ui.allocate_exact_size(egui::vec2(btn_width, 24.0), egui::Sense::click());
            if response.hovered() {
                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            }
            if ui.is_rect_visible(rect) {
                let (fill, draw_rect) = theme::button_visual(&response, fill, rect);
                ui.painter().rect_filled(draw_rect, 4.0, fill);
                ui.painter().text(
                    draw_rect.center(),
                    egui::Align2::CENTER_CENTER,
                    *label,
                    egui::FontId::proportional(theme::FONT_SECTION),
                    egui::Color32::WHITE,
                );
            }
            if response.clicked() && *selected != i {
                *selected = i;
                changed = true;
            }
        }
    });
    changed
}

/// Custom-painted button with centered text. Returns true if clicked.
pub fn painted_button(
    ui: &mut egui::Ui,
    text: &str,
    size: egui::Vec2,
    fill: egui::Color32,
    text_color: egui::Color32,
    enabled: bool,
) -> bool {
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    if response.hovered() {
        ui.ctx().set_cursor_icon(if enabled {
            egui::CursorIcon::PointingHand
        } else {
            egui::CursorIcon::NotAllowed
        });
    }
    let (fill, draw_rect) = if enabled {
        theme::button_visual(&response, fill, rect)
    } else {
        (theme::BTN_DISABLED, rect)
    };
    ui.painter().rect_filled(draw_rect, theme::RADIUS_DEFAULT, fill);
    ui.painter().text(
        draw_rect.center(),
        egui::Align2::CENTER_CENTER,
        text,
        egui::FontId::proportional(theme::FONT_BODY),
        if enabled { text_color } else { theme::TEXT_DIM },
    );
    enabled && response.clicked()
}

/// Bounded integer input used for the numeric form fields
pub fn number_field(ui: &mut egui::Ui, value: &mut u32, range: std::ops::RangeInclusive<u32>) {
    egui::Frame::new()
        .fill(theme::BG_INPUT)
        .stroke(egui::Stroke::new(1.0, theme::BORDER_SUBTLE))
        .corner_radius(theme::RADIUS_DEFAULT)
        .inner_margin(egui::Margin::symmetric(8, 4))
        .show(ui, |ui| {
            ui.add(egui::DragValue::new(value).range(range).speed(0.1));
        });
}
