use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::{
    foundation::core::Rgba8,
    foundation::error::{StarsError, StarsResult},
};

/// Options for [`rasterize_svg`].
#[derive(Clone, Debug)]
pub struct RasterOptions {
    /// Device pixels per SVG unit.
    pub scale: f32,
    /// Extra directories scanned for `.ttf`/`.otf`/`.ttc` files after system fonts.
    pub font_dirs: Vec<PathBuf>,
    /// Opaque or translucent backdrop; `None` keeps the canvas transparent.
    pub background: Option<Rgba8>,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            font_dirs: Vec::new(),
            background: None,
        }
    }
}

/// Straight-alpha RGBA8 pixels, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl RgbaImage {
    /// Pixel at `(x, y)` as `[r, g, b, a]`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.data.get(i..i + 4).and_then(|px| px.try_into().ok())
    }

    /// Encode as PNG at `path`.
    pub fn save_png(&self, path: impl AsRef<Path>) -> StarsResult<()> {
        let path = path.as_ref();
        image::save_buffer_with_format(
            path,
            &self.data,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

/// Rasterize an SVG document with `usvg` + `resvg`.
#[tracing::instrument(skip(svg, opts), fields(scale = opts.scale))]
pub fn rasterize_svg(svg: &str, opts: &RasterOptions) -> StarsResult<RgbaImage> {
    if !opts.scale.is_finite() || opts.scale <= 0.0 {
        return Err(StarsError::render("raster scale must be finite and > 0"));
    }

    let usvg_opts = usvg::Options {
        fontdb: build_fontdb(&opts.font_dirs),
        font_resolver: make_font_resolver(),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(svg, &usvg_opts).context("parse svg document")?;

    let size = tree.size();
    let width = (size.width() * opts.scale).ceil() as u32;
    let height = (size.height() * opts.scale).ceil() as u32;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| StarsError::render(format!("cannot allocate {width}x{height} canvas")))?;
    if let Some(bg) = opts.background {
        pixmap.fill(resvg::tiny_skia::Color::from_rgba8(bg.r, bg.g, bg.b, bg.a));
    }

    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(opts.scale, opts.scale),
        &mut pixmap.as_mut(),
    );

    let mut data = Vec::with_capacity(pixmap.pixels().len() * 4);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    tracing::debug!(width, height, "rasterized svg");
    Ok(RgbaImage {
        width,
        height,
        data,
    })
}

fn build_fontdb(font_dirs: &[PathBuf]) -> std::sync::Arc<usvg::fontdb::Database> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    for dir in font_dirs {
        load_fonts_from_dir(&mut db, dir);
    }
    std::sync::Arc::new(db)
}

fn load_fonts_from_dir(db: &mut usvg::fontdb::Database, dir: &Path) {
    let Ok(rd) = std::fs::read_dir(dir) else {
        tracing::warn!(dir = %dir.display(), "font directory is not readable");
        return;
    };

    for entry in rd.flatten() {
        let path = entry.path();
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        if !matches!(ext.to_ascii_lowercase().as_str(), "ttf" | "otf" | "ttc") {
            continue;
        }
        if let Err(err) = db.load_font_file(&path) {
            tracing::warn!(path = %path.display(), %err, "skipping font file");
        }
    }
}

/// Resolve requested families, then generic families, then any face at all, so
/// star symbols still render on hosts without the requested font.
fn make_font_resolver() -> usvg::FontResolver<'static> {
    use usvg::FontResolver;

    FontResolver {
        select_font: Box::new(|font, fontdb| {
            let mut families = Vec::<usvg::fontdb::Family<'_>>::new();
            for family in font.families() {
                families.push(match family {
                    usvg::FontFamily::Serif => usvg::fontdb::Family::Serif,
                    usvg::FontFamily::SansSerif => usvg::fontdb::Family::SansSerif,
                    usvg::FontFamily::Cursive => usvg::fontdb::Family::Cursive,
                    usvg::FontFamily::Fantasy => usvg::fontdb::Family::Fantasy,
                    usvg::FontFamily::Monospace => usvg::fontdb::Family::Monospace,
                    usvg::FontFamily::Named(s) => usvg::fontdb::Family::Name(s),
                });
            }
            families.push(usvg::fontdb::Family::SansSerif);
            families.push(usvg::fontdb::Family::Serif);

            let query = usvg::fontdb::Query {
                families: &families,
                weight: usvg::fontdb::Weight(font.weight()),
                stretch: usvg::fontdb::Stretch::Normal,
                style: usvg::fontdb::Style::Normal,
            };
            fontdb
                .query(&query)
                .or_else(|| fontdb.faces().next().map(|f| f.id))
        }),
        select_fallback: FontResolver::default_fallback_selector(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paint/raster.rs"]
mod tests;
