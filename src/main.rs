#![windows_subsystem = "windows"]
//! Purchase Predictor - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod constants;
mod dataset;
mod encoding;
mod model;
mod settings;
mod theme;
mod types;
mod ui;
mod utils;

use app::{App, Resources};
use constants::*;
use dataset::TestDataset;
use eframe::egui;
use model::PurchaseModel;
use tracing::{error, info};
use types::*;
use ui::components::{form_label, number_field, painted_button, toggle_row};
use utils::{format_amount, get_data_dir, rasterize_logo};

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "purchase-predictor.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,purchase_predictor=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = get_data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Purchase Predictor starting");

    let settings = settings::Settings::load(&data_dir);

    // Load failures abort the session before the UI starts; there is no
    // recovery path once the window is up.
    let model_path = settings.model_path_or_default();
    let model = match PurchaseModel::load(&model_path) {
        Ok(model) => {
            info!(path = %model_path.display(), rounds = model.stumps.len(), "Model loaded");
            model
        }
        Err(e) => {
            error!(error = %e, path = %model_path.display(), "Failed to load model");
            std::process::exit(1);
        }
    };

    let data_path = settings.data_path_or_default();
    let test_data = match TestDataset::load(&data_path) {
        Ok(table) => {
            info!(
                path = %data_path.display(),
                rows = table.num_rows(),
                columns = table.num_features(),
                "Test table loaded"
            );
            table
        }
        Err(e) => {
            error!(error = %e, path = %data_path.display(), "Failed to load test table");
            std::process::exit(1);
        }
    };

    let resources = Resources { model, test_data };

    // Load saved window position/size
    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => Some(egui::vec2(w, h)),
        _ => None,
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(980.0, 700.0)))
        .with_min_inner_size([820.0, 560.0])
        .with_title("Purchase Predictor");

    // Window/taskbar icon rasterized from the bundled SVG
    {
        let (pixels, w, h) = rasterize_logo(64);
        let icon = egui::IconData { rgba: pixels, width: w, height: h };
        viewport = viewport.with_icon(std::sync::Arc::new(icon));
    }

    let needs_center = win_pos.is_none();

    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Purchase Predictor",
        options,
        Box::new(move |cc| {
            let mut app = App::new(cc, resources, settings, data_dir);
            app.needs_center = needs_center;
            Ok(Box::new(app))
        }),
    )
}

// ============================================================================
// MAIN UPDATE LOOP & UI RENDERING
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        self.render_settings_modal(ctx);

        // Left sidebar - navigation (must be added BEFORE CentralPanel)
        egui::SidePanel::left("nav_panel")
            .exact_width(theme::SIDEBAR_WIDTH)
            .resizable(false)
            .show_separator_line(false)
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin { left: 16, right: 16, top: 0, bottom: 0 }),
            )
            .show(ctx, |ui| {
                self.render_sidebar(ui, ctx);
            });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin { left: 24, right: 24, top: 20, bottom: 16 }),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| match self.page {
                        Page::Overview => self.render_overview(ui),
                        Page::ModelQuery => self.render_model_query(ui),
                    });
            });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
        self.save_settings();
    }
}

// ============================================================================
// SIDEBAR
// ============================================================================

impl App {
    fn render_sidebar(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let panel_rect = ui.max_rect();
        let avail_w = ui.available_width();

        ui.add_space(21.0);
        ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
            let texture = self.logo_texture.get_or_insert_with(|| {
                let (pixels, w, h) = rasterize_logo(avail_w as u32 * 2);
                ctx.load_texture(
                    "logo",
                    egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &pixels),
                    egui::TextureOptions::LINEAR,
                )
            });

            let aspect = texture.size()[1] as f32 / texture.size()[0] as f32;
            let logo_w = avail_w * 0.35;
            let logo_size = egui::vec2(logo_w, logo_w * aspect);
            ui.image(egui::load::SizedTexture::new(texture.id(), logo_size));

            ui.add_space(4.0);
            ui.add(
                egui::Label::new(
                    egui::RichText::new("PURCHASE PREDICTOR")
                        .size(theme::FONT_SECTION)
                        .color(theme::TEXT_DIM),
                )
                .selectable(false),
            );
        });
        ui.add_space(theme::SPACING_XL);

        // Page navigation
        for page in Page::ALL {
            let is_active = self.page == page;
            let fill = if is_active {
                theme::TOGGLE_SELECTED
            } else {
                theme::TOGGLE_UNSELECTED
            };
            let (rect, response) = ui.allocate_exact_size(
                egui::vec2(ui.available_width(), theme::NAV_BUTTON_HEIGHT),
                egui::Sense::click(),
            );
            if response.hovered() {
                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            }
            if ui.is_rect_visible(rect) {
                let (fill, draw_rect) = theme::button_visual(&response, fill, rect);
                ui.painter().rect_filled(draw_rect, theme::RADIUS_DEFAULT, fill);
                let text = format!("{}  {}", page.icon(), page.label());
                ui.painter().text(
                    egui::pos2(draw_rect.left() + 12.0, draw_rect.center().y),
                    egui::Align2::LEFT_CENTER,
                    text,
                    egui::FontId::proportional(theme::FONT_LABEL),
                    if is_active { theme::TEXT_PRIMARY } else { theme::TEXT_MUTED },
                );
            }
            if response.clicked() {
                self.page = page;
            }
            ui.add_space(theme::SPACING_SM);
        }

        // Bottom area - settings button plus version/credit line
        let bottom_height = theme::BUTTON_HEIGHT + 6.0 + 14.0 + 8.0;
        let bottom_rect = egui::Rect::from_min_max(
            egui::pos2(panel_rect.left(), panel_rect.bottom() - bottom_height),
            panel_rect.max,
        );
        ui.allocate_ui_at_rect(bottom_rect, |ui| {
            ui.set_min_width(bottom_rect.width());
            ui.spacing_mut().item_spacing.y = 0.0;
            let gear_text = format!("{} Settings", egui_phosphor::regular::GEAR);
            if painted_button(
                ui,
                &gear_text,
                egui::vec2(ui.available_width(), theme::BUTTON_HEIGHT),
                theme::BORDER_SUBTLE,
                theme::TEXT_PRIMARY,
                true,
            ) {
                self.show_settings = true;
            }

            ui.add_space(6.0);

            let version_color = egui::Color32::from_rgb(0x45, 0x45, 0x4c);
            let font = egui::FontId::proportional(theme::FONT_CAPTION);
            let y = ui.cursor().top();
            ui.painter().text(
                egui::pos2(bottom_rect.left(), y),
                egui::Align2::LEFT_TOP,
                format!("v{}", APP_VERSION),
                font.clone(),
                version_color,
            );
            ui.painter().text(
                egui::pos2(bottom_rect.right(), y),
                egui::Align2::RIGHT_TOP,
                "ABC Private Limited demo",
                font,
                version_color,
            );
        });
    }
}

// ============================================================================
// OVERVIEW PAGE
// ============================================================================

const TASK_DESCRIPTION: &str = "Retail company ABC Private Limited wants to understand \
customer purchase behaviour (specifically, the purchase amount) against products from \
different categories. They have shared a purchase summary of various customers for \
selected high-volume products from the last month.\n\nThe dataset also contains customer \
demographics, product details, and the total purchase amount from the last month. The \
company now wants a model that predicts the purchase amount of customers against \
different products, to help them create personalized offers for customers across \
products.";

const COLUMN_NOTES: [(&str, &str); 11] = [
    ("User_ID", "customer identifier"),
    ("Product_ID", "product identifier"),
    ("Gender", "customer gender, M or F"),
    ("Age", "customer age bracket: 0-17, 18-25, 26-35, 36-45, 46-50, 51-55, 55+"),
    ("Occupation", "occupation code, 0 to 20; 0 means no occupation"),
    ("City_Category", "city category: A, B or C"),
    ("Stay_In_Current_City_Years", "years the customer has stayed in the current city"),
    ("Marital_Status", "1 if the customer is married, 0 otherwise"),
    ("Product_Category_1", "primary product category code; always present"),
    ("Product_Category_2", "secondary category code, when the product has one"),
    ("Product_Category_3", "tertiary category code, when the product has one"),
];

const FEATURE_NOTES: &str = "Categorical features: gender (M/F), occupation code, city \
category, and the product category codes. A product always has at least one category, \
recorded in Product_Category_1; additional categories fill Product_Category_2 and \
Product_Category_3.\n\nOrdinal features: the age bracket.\n\nBinary features: gender \
(M is 0, F is 1) and marital status (1 means married).\n\nNumeric features: the customer \
identifier, the product identifier, and the purchase amount.";

impl App {
    fn render_overview(&mut self, ui: &mut egui::Ui) {
        ui.add(egui::Label::new(
            egui::RichText::new("Task & Data").size(theme::FONT_TITLE).strong(),
        ));
        ui.add_space(theme::SPACING_MD);

        self.section_heading(ui, "Task");
        theme::card_frame().show(ui, |ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(TASK_DESCRIPTION)
                        .size(theme::FONT_BODY)
                        .color(theme::TEXT_SECONDARY),
                )
                .wrap(),
            );
        });

        ui.add_space(theme::SPACING_LG);

        self.section_heading(ui, "Columns");
        theme::card_frame().show(ui, |ui| {
            for (name, note) in COLUMN_NOTES {
                ui.horizontal_wrapped(|ui| {
                    ui.add(egui::Label::new(
                        egui::RichText::new(name)
                            .size(theme::FONT_LABEL)
                            .color(theme::ACCENT_LIGHT)
                            .monospace(),
                    ));
                    ui.add(egui::Label::new(
                        egui::RichText::new(format!("— {}", note))
                            .size(theme::FONT_LABEL)
                            .color(theme::TEXT_MUTED),
                    ));
                });
            }
        });

        ui.add_space(theme::SPACING_LG);

        self.section_heading(ui, "Feature types");
        theme::card_frame().show(ui, |ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(FEATURE_NOTES)
                        .size(theme::FONT_BODY)
                        .color(theme::TEXT_SECONDARY),
                )
                .wrap(),
            );
        });
    }

    fn section_heading(&self, ui: &mut egui::Ui, text: &str) {
        ui.add(egui::Label::new(
            egui::RichText::new(text)
                .size(theme::FONT_HEADING)
                .color(theme::ACCENT),
        ));
        ui.add_space(theme::SPACING_SM);
    }
}

// ============================================================================
// MODEL QUERY PAGE
// ============================================================================

impl App {
    fn render_model_query(&mut self, ui: &mut egui::Ui) {
        ui.add(egui::Label::new(
            egui::RichText::new("Model Query").size(theme::FONT_TITLE).strong(),
        ));
        ui.add_space(theme::SPACING_MD);

        form_label(ui, "Query");
        egui::ComboBox::from_id_salt("query_kind")
            .selected_text(self.query.label())
            .width(220.0)
            .show_ui(ui, |ui| {
                for kind in QueryKind::ALL {
                    ui.selectable_value(&mut self.query, kind, kind.label());
                }
            });

        ui.add_space(theme::SPACING_LG);

        match self.query {
            QueryKind::Rmse => self.render_rmse(ui),
            QueryKind::FirstFive => self.render_first_five(ui),
            QueryKind::Custom => self.render_custom(ui),
            QueryKind::EasterEgg => self.render_easter_egg(ui),
        }
    }

    fn render_rmse(&mut self, ui: &mut egui::Ui) {
        self.section_heading(ui, "Root-mean-square error");
        theme::card_frame().show(ui, |ui| {
            ui.add(egui::Label::new(
                egui::RichText::new(format!("{}", RMSE_PLACEHOLDER))
                    .size(28.0)
                    .color(theme::TEXT_PRIMARY)
                    .strong(),
            ));
            ui.add(egui::Label::new(
                egui::RichText::new("Held-out estimate from the training pipeline")
                    .size(theme::FONT_CAPTION)
                    .color(theme::TEXT_DIM),
            ));
        });
    }

    fn render_first_five(&mut self, ui: &mut egui::Ui) {
        use egui_extras::{Column, TableBuilder};

        self.section_heading(ui, "First 5 predicted values");

        let predictions: Vec<f32> = self.sample_predictions().to_vec();
        if predictions.is_empty() {
            ui.add(egui::Label::new(
                egui::RichText::new("The test table has no rows")
                    .size(theme::FONT_BODY)
                    .color(theme::STATUS_ERROR),
            ));
            return;
        }

        let row_height = 26.0;
        TableBuilder::new(ui)
            .striped(true)
            .resizable(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::exact(60.0))
            .column(Column::exact(180.0))
            .header(28.0, |mut header| {
                header.col(|ui| {
                    ui.add(egui::Label::new(
                        egui::RichText::new("ROW")
                            .size(theme::FONT_SECTION)
                            .strong()
                            .color(theme::TEXT_DIM),
                    ));
                });
                header.col(|ui| {
                    ui.add(egui::Label::new(
                        egui::RichText::new("PREDICTED AMOUNT")
                            .size(theme::FONT_SECTION)
                            .strong()
                            .color(theme::TEXT_DIM),
                    ));
                });
            })
            .body(|mut body| {
                for (idx, value) in predictions.iter().enumerate() {
                    body.row(row_height, |mut row| {
                        row.col(|ui| {
                            ui.add(egui::Label::new(
                                egui::RichText::new(format!("{}", idx))
                                    .size(theme::FONT_LABEL)
                                    .color(theme::TEXT_MUTED),
                            ));
                        });
                        row.col(|ui| {
                            ui.add(egui::Label::new(
                                egui::RichText::new(format_amount(*value))
                                    .size(theme::FONT_LABEL)
                                    .color(theme::TEXT_PRIMARY)
                                    .monospace(),
                            ));
                        });
                    });
                }
            });
    }

    fn render_custom(&mut self, ui: &mut egui::Ui) {
        self.section_heading(ui, "Custom example");

        let form_width = 360.0;
        ui.set_max_width(form_width);

        theme::section_frame().show(ui, |ui| {
            form_label(ui, "Gender");
            let mut male = self.form.gender == Gender::Male;
            if theme::segmented_toggle(ui, "Male", "Female", &mut male) {
                self.form.gender = if male { Gender::Male } else { Gender::Female };
            }

            ui.add_space(theme::SPACING_MD);
            form_label(ui, "Age");
            number_field(ui, &mut self.form.age, 0..=100);

            ui.add_space(theme::SPACING_MD);
            form_label(ui, "City category");
            let mut city_idx = CityCategory::ALL
                .iter()
                .position(|&c| c == self.form.city)
                .unwrap_or(0);
            let city_labels: Vec<&str> = CityCategory::ALL.iter().map(|c| c.label()).collect();
            if toggle_row(ui, &city_labels, &mut city_idx) {
                self.form.city = CityCategory::ALL[city_idx];
            }

            ui.add_space(theme::SPACING_MD);
            form_label(ui, "Years in current city");
            let mut stay_idx = StayYears::ALL
                .iter()
                .position(|&s| s == self.form.stay)
                .unwrap_or(0);
            let stay_labels: Vec<&str> = StayYears::ALL.iter().map(|s| s.label()).collect();
            if toggle_row(ui, &stay_labels, &mut stay_idx) {
                self.form.stay = StayYears::ALL[stay_idx];
            }

            ui.add_space(theme::SPACING_MD);
            form_label(ui, "Marital status");
            let mut single = !self.form.married;
            if theme::segmented_toggle(ui, "Single", "Married", &mut single) {
                self.form.married = !single;
            }

            ui.add_space(theme::SPACING_MD);
            form_label(ui, "Occupation code (0-19)");
            number_field(ui, &mut self.form.occupation, 0..=(OCCUPATION_BUCKETS as u32 - 1));

            ui.add_space(theme::SPACING_MD);
            form_label(ui, "Product category (0-20)");
            number_field(ui, &mut self.form.category, 0..=(CATEGORY_BUCKETS as u32 - 1));
        });

        ui.add_space(theme::SPACING_LG);

        let predict_text = format!("{} Predict", egui_phosphor::regular::PLAY);
        if painted_button(
            ui,
            &predict_text,
            egui::vec2(form_width, theme::BUTTON_HEIGHT_LARGE),
            theme::BTN_ACCENT,
            theme::BTN_ACCENT_TEXT,
            true,
        ) {
            self.run_custom_prediction();
        }

        if let Some(predicted) = self.last_prediction {
            ui.add_space(theme::SPACING_LG);
            theme::card_frame().show(ui, |ui| {
                ui.add(egui::Label::new(
                    egui::RichText::new("Predicted purchase amount")
                        .size(theme::FONT_CAPTION)
                        .color(theme::TEXT_DIM),
                ));
                ui.add(egui::Label::new(
                    egui::RichText::new(format_amount(predicted))
                        .size(24.0)
                        .color(theme::STATUS_SUCCESS)
                        .strong(),
                ));
            });
        }
    }

    fn render_easter_egg(&mut self, ui: &mut egui::Ui) {
        self.section_heading(ui, "Easter egg");
        ui.add(egui::Label::new(
            egui::RichText::new(":)").size(28.0).color(theme::TEXT_PRIMARY),
        ));
    }
}

// ============================================================================
// SETTINGS MODAL
// ============================================================================

impl App {
    fn render_settings_modal(&mut self, ctx: &egui::Context) {
        if !self.show_settings {
            return;
        }

        let modal_response = egui::Modal::new(egui::Id::new("settings_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(120))
            .frame(
                egui::Frame::new()
                    .fill(egui::Color32::from_rgb(0x1a, 0x1a, 0x1e))
                    .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(0x2a, 0x2a, 0x2e)))
                    .corner_radius(8.0)
                    .inner_margin(egui::Margin::same(20)),
            )
            .show(ctx, |ui| {
                ui.set_width(360.0);

                // Title bar with close button
                ui.horizontal(|ui| {
                    ui.add(
                        egui::Label::new(egui::RichText::new("Settings").size(16.0).strong())
                            .selectable(false),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let close_size = 24.0;
                        let (rect, response) = ui.allocate_exact_size(
                            egui::vec2(close_size, close_size),
                            egui::Sense::click(),
                        );
                        let close_color = if response.hovered() {
                            ui.painter().rect_filled(rect, 4.0, theme::BG_SURFACE);
                            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                            theme::STATUS_ERROR
                        } else {
                            theme::TEXT_DIM
                        };
                        ui.painter().text(
                            rect.center(),
                            egui::Align2::CENTER_CENTER,
                            egui_phosphor::regular::X,
                            egui::FontId::proportional(16.0),
                            close_color,
                        );
                        if response.clicked() {
                            self.show_settings = false;
                        }
                    });
                });
                ui.add_space(4.0);
                ui.separator();
                ui.add_space(theme::SPACING_SM);

                // — Resources —
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Resources").size(13.0).color(theme::ACCENT),
                    )
                    .selectable(false),
                );
                ui.add_space(2.0);

                let mut changed = false;
                changed |= Self::path_row(ui, "Model file", &mut self.model_path_str);
                ui.add_space(theme::SPACING_SM);
                changed |= Self::path_row(ui, "Test table", &mut self.data_path_str);

                ui.add_space(theme::SPACING_SM);
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Paths apply on the next launch")
                            .size(theme::FONT_CAPTION)
                            .color(theme::TEXT_DIM),
                    )
                    .selectable(false),
                );

                if changed {
                    self.save_settings();
                }

                ui.add_space(theme::SPACING_MD);
                ui.separator();
                ui.add_space(theme::SPACING_SM);

                // — Logs —
                ui.add(
                    egui::Label::new(egui::RichText::new("Logs").size(13.0).color(theme::ACCENT))
                        .selectable(false),
                );
                ui.add_space(2.0);
                let logs_text = format!("{}  Open Logs", egui_phosphor::regular::FOLDER_OPEN);
                if painted_button(
                    ui,
                    &logs_text,
                    egui::vec2(120.0, 26.0),
                    theme::BTN_DEFAULT,
                    theme::TEXT_PRIMARY,
                    true,
                ) {
                    let logs_dir = self.data_dir.join("logs");
                    std::fs::create_dir_all(&logs_dir).ok();
                    let _ = open::that(&logs_dir);
                }
            });

        if modal_response.should_close() {
            self.show_settings = false;
        }
    }

    /// Path text input with a browse button. Returns true if the path changed.
    fn path_row(ui: &mut egui::Ui, label: &str, path_str: &mut String) -> bool {
        form_label(ui, label);
        let mut changed = false;
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 4.0;
            let browse_width = 28.0 + 4.0;
            let frame_padding = 12.0 + 2.0;
            let text_width = (ui.available_width() - browse_width - frame_padding).max(40.0);
            let te = egui::Frame::new()
                .fill(theme::BG_INPUT)
                .stroke(egui::Stroke::new(1.0, theme::BORDER_SUBTLE))
                .corner_radius(4.0)
                .inner_margin(egui::Margin::symmetric(6, 4))
                .show(ui, |ui| {
                    ui.add(
                        egui::TextEdit::singleline(path_str)
                            .frame(false)
                            .desired_width(text_width)
                            .font(egui::FontId::proportional(13.0)),
                    )
                })
                .inner;
            // Browse button (aligned to text input height)
            let (rect, resp) = ui.allocate_exact_size(egui::vec2(28.0, 28.0), egui::Sense::click());
            if resp.hovered() {
                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                ui.painter().rect_filled(rect, 4.0, theme::BG_SURFACE);
            }
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                egui_phosphor::regular::FOLDER_OPEN,
                egui::FontId::proportional(16.0),
                theme::TEXT_SECONDARY,
            );
            if resp.clicked() || te.double_clicked() {
                if let Some(picked) = rfd::FileDialog::new().pick_file() {
                    *path_str = picked.to_string_lossy().to_string();
                    changed = true;
                }
            }
            if te.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                changed = true;
            }
        });
        changed
    }
}
