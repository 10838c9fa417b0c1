//! CJK glyph fallback for the translation panel.
//!
//! egui's bundled fonts carry no Han glyphs. The first system CJK font found
//! is appended as a fallback to both families; without one the panel still
//! renders, with placeholder boxes.

use eframe::egui::{self, FontData, FontDefinitions, FontFamily};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

const CJK_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Light.ttc",
    "C:\\Windows\\Fonts\\msyh.ttc",
];

const FONT_NAME: &str = "cjk-fallback";

pub fn install_cjk_fallback(ctx: &egui::Context) {
    let Some((path, bytes)) = CJK_CANDIDATES
        .iter()
        .map(Path::new)
        .find_map(|p| std::fs::read(p).ok().map(|bytes| (p, bytes)))
    else {
        debug!("no CJK font found, translated text will show placeholders");
        return;
    };

    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(FONT_NAME.to_owned(), Arc::new(FontData::from_owned(bytes)));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(FONT_NAME.to_owned());
    }
    ctx.set_fonts(fonts);
    info!(path = %path.display(), "CJK fallback font installed");
}
