//! App module - contains the main application state and logic

mod query;

use crate::constants::FEATURE_LEN;
use crate::dataset::TestDataset;
use crate::model::PurchaseModel;
use crate::settings::Settings;
use crate::theme;
use crate::types::*;
use eframe::egui;
use std::path::PathBuf;
use tracing::warn;

// ============================================================================
// LOADED RESOURCES
// ============================================================================

/// Model and test table, loaded once at startup and immutable afterwards.
pub struct Resources {
    pub model: PurchaseModel,
    pub test_data: TestDataset,
}

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) resources: Resources,
    // Page state machine
    pub(crate) page: Page,
    pub(crate) query: QueryKind,
    // Custom-example form
    pub(crate) form: QueryForm,
    pub(crate) last_prediction: Option<f32>,
    // Sample predictions, computed on first visit to the page
    pub(crate) first_five: Option<Vec<f32>>,
    // Sidebar logo
    pub(crate) logo_texture: Option<egui::TextureHandle>,
    // Settings modal
    pub(crate) show_settings: bool,
    pub(crate) model_path_str: String,
    pub(crate) data_path_str: String,
    // Window geometry tracking
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        resources: Resources,
        settings: Settings,
        data_dir: PathBuf,
    ) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Apply theme from theme.rs
        theme::apply_visuals(&cc.egui_ctx);

        // The form encoders and the model dump come from the same export
        // pipeline, but nothing enforces that; surface a mismatch early.
        if resources.model.feature_len != FEATURE_LEN {
            warn!(
                model = resources.model.feature_len,
                form = FEATURE_LEN,
                "Model feature length differs from the form encoding"
            );
        }

        let model_path_str = settings.model_path_or_default().to_string_lossy().to_string();
        let data_path_str = settings.data_path_or_default().to_string_lossy().to_string();

        Self {
            resources,
            page: Page::Overview,
            query: QueryKind::Rmse,
            form: QueryForm::default(),
            last_prediction: None,
            first_five: None,
            logo_texture: None,
            show_settings: false,
            model_path_str,
            data_path_str,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            model_path: Some(self.model_path_str.clone()),
            data_path: Some(self.data_path_str.clone()),
        };
        settings.save(&self.data_dir);
    }
}
