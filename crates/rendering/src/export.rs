//! Chart to PNG: rasterize the chart SVG at 300 DPI, crop to the drawn
//! content plus a small margin, and tag the file with its resolution.

use std::sync::{Arc, OnceLock};

use bevy::log::warn;
use bevy::text::DEFAULT_FONT_DATA;
use resvg::tiny_skia::{Color, IntRect, Pixmap, Transform};
use resvg::usvg::{fontdb, Options, Tree};

use crate::chart::BarChart;
use crate::export_error::ExportError;
use crate::svg::{chart_svg, POINTS_PER_INCH};

pub const EXPORT_DPI: f32 = 300.0;
/// Padding kept around the drawn content when cropping, in inches.
pub const TIGHT_PAD_IN: f32 = 0.1;
/// 300 DPI in pixels per metre, as stored in the PNG `pHYs` chunk.
pub const PIXELS_PER_METER: u32 = 11_811;

/// Pixels brighter than this in every channel count as background.
const BACKGROUND_THRESHOLD: u8 = 250;

/// Add the font compiled into the binary and point the generic `sans-serif`
/// family at it when nothing already loaded answers to that name.
pub fn add_bundled_font(db: &mut fontdb::Database) {
    db.load_font_data(DEFAULT_FONT_DATA.to_vec());

    let sans_serif = fontdb::Query {
        families: &[fontdb::Family::SansSerif],
        ..fontdb::Query::default()
    };
    if db.query(&sans_serif).is_some() {
        return;
    }
    let bundled_family = db
        .faces()
        .last()
        .and_then(|face| face.families.first())
        .map(|(name, _)| name.clone());
    if let Some(family) = bundled_family {
        warn!("No system sans-serif font found, chart text uses {}", family);
        db.set_sans_serif_family(family);
    }
}

/// System fonts are scanned once per process.
fn font_database() -> Arc<fontdb::Database> {
    static FONTS: OnceLock<Arc<fontdb::Database>> = OnceLock::new();
    FONTS
        .get_or_init(|| {
            let mut db = fontdb::Database::new();
            db.load_system_fonts();
            add_bundled_font(&mut db);
            Arc::new(db)
        })
        .clone()
}

/// Rasterize an SVG document at `dpi` onto a white canvas.
pub fn rasterize_svg(svg: &str, dpi: f32) -> Result<Pixmap, ExportError> {
    rasterize_svg_with_fonts(svg, dpi, font_database())
}

pub fn rasterize_svg_with_fonts(
    svg: &str,
    dpi: f32,
    fonts: Arc<fontdb::Database>,
) -> Result<Pixmap, ExportError> {
    let options = Options {
        fontdb: fonts,
        ..Options::default()
    };
    let tree = Tree::from_data(svg.as_bytes(), &options)?;

    let scale = dpi / POINTS_PER_INCH;
    let size = tree.size();
    let width = (size.width() * scale).round() as u32;
    let height = (size.height() * scale).round() as u32;

    let mut pixmap = Pixmap::new(width, height).ok_or(ExportError::Pixmap { width, height })?;
    pixmap.fill(Color::WHITE);
    resvg::render(
        &tree,
        Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Ok(pixmap)
}

/// Bounding box `(left, top, right, bottom)` of the non-background pixels,
/// right/bottom exclusive. `None` for a blank image.
pub fn content_bounds(pixmap: &Pixmap) -> Option<(u32, u32, u32, u32)> {
    let width = pixmap.width();
    let mut bounds: Option<(u32, u32, u32, u32)> = None;

    for (i, px) in pixmap.pixels().iter().enumerate() {
        let is_background = px.red() >= BACKGROUND_THRESHOLD
            && px.green() >= BACKGROUND_THRESHOLD
            && px.blue() >= BACKGROUND_THRESHOLD;
        if is_background {
            continue;
        }
        let x = i as u32 % width;
        let y = i as u32 / width;
        bounds = Some(match bounds {
            None => (x, y, x + 1, y + 1),
            Some((l, t, r, b)) => (l.min(x), t.min(y), r.max(x + 1), b.max(y + 1)),
        });
    }
    bounds
}

/// Crop to the drawn content plus `pad` pixels on every side, clamped to the
/// image. A blank image is returned unchanged.
pub fn crop_to_content(pixmap: Pixmap, pad: u32) -> Result<Pixmap, ExportError> {
    let Some((left, top, right, bottom)) = content_bounds(&pixmap) else {
        return Ok(pixmap);
    };

    let left = left.saturating_sub(pad);
    let top = top.saturating_sub(pad);
    let right = (right + pad).min(pixmap.width());
    let bottom = (bottom + pad).min(pixmap.height());
    let (width, height) = (right - left, bottom - top);

    IntRect::from_xywh(left as i32, top as i32, width, height)
        .and_then(|rect| pixmap.clone_rect(rect))
        .ok_or(ExportError::Pixmap { width, height })
}

/// Encode as an 8-bit RGBA PNG carrying a 300 DPI `pHYs` chunk.
pub fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>, ExportError> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, pixmap.width(), pixmap.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_pixel_dims(Some(png::PixelDimensions {
            xppu: PIXELS_PER_METER,
            yppu: PIXELS_PER_METER,
            unit: png::Unit::Meter,
        }));
        let mut writer = encoder.write_header()?;
        // The canvas is opaque, so premultiplied and straight alpha agree.
        writer.write_image_data(pixmap.data())?;
    }
    Ok(out)
}

/// Render `chart` to PNG bytes.
pub fn render_png(chart: &BarChart) -> Result<Vec<u8>, ExportError> {
    let pixmap = rasterize_svg(&chart_svg(chart), EXPORT_DPI)?;
    let pad = (TIGHT_PAD_IN * EXPORT_DPI).round() as u32;
    let cropped = crop_to_content(pixmap, pad)?;
    encode_png(&cropped)
}
