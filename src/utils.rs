//! Utility functions

use std::path::PathBuf;

// White bag + teal trend line, square viewBox — used for the sidebar logo
// and the window/taskbar icon.
pub const LOGO_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 256 256"><defs><style>.c1{fill:#fff;stroke:#09090b;stroke-width:1px}.c2{fill:#2dd4bf;stroke:#09090b;stroke-width:1px}</style></defs><path class="c1" d="M60,84h136c6,0,10,4,10,10l14,124c1,8-4,14-12,14H48c-8,0-13-6-12-14L50,94c0-6,4-10,10-10Zm30,0v-18c0-21,17-38,38-38s38,17,38,38v18h-20v-18c0-10-8-18-18-18s-18,8-18,18v18Z"/><path class="c2" d="M76,186l34-34,26,20,44-52v22l-42,50-26-20-22,22c-6,6-20,-2-14,-8Zm104-66v-14h-30l12,10Z"/></svg>"#;

/// Rasterize `LOGO_SVG` at the given width, preserving aspect ratio.
/// Returns straight-alpha RGBA bytes plus the image dimensions.
pub fn rasterize_logo(width: u32) -> (Vec<u8>, u32, u32) {
    let tree = resvg::usvg::Tree::from_str(LOGO_SVG, &resvg::usvg::Options::default()).unwrap();
    let svg_size = tree.size();
    let scale = width as f32 / svg_size.width();
    let height = (svg_size.height() * scale).ceil() as u32;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height).unwrap();
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    let pixels = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                // Undo premultiplication for egui/eframe consumers.
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect();
    (pixels, width, height)
}

/// Get the app data directory path
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Purchase Predictor")
}

/// Format a predicted purchase amount for display
pub fn format_amount(value: f32) -> String {
    format!("{:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_render_with_two_decimals() {
        assert_eq!(format_amount(8370.0), "8370.00");
        assert_eq!(format_amount(1422.251), "1422.25");
        assert_eq!(format_amount(-3.5), "-3.50");
    }
}
