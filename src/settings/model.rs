use std::path::Path;

use anyhow::Context;

use crate::{
    fill::mode::FillMode,
    foundation::core::Rgba8,
    foundation::error::{StarsError, StarsResult},
    foundation::math::{clamp_or_lo, non_negative},
    measure::FontSpec,
};

/// Largest star count [`StarSettings::validate`] accepts.
pub const MAX_TOTAL_STARS: usize = 1_000;

/// Appearance and behaviour of a star rating.
///
/// Every field is optional in JSON; missing fields take the values of
/// [`StarSettings::default`]. Out-of-range numbers are clamped where they are
/// used rather than rejected: negative ratios count as 0 and a negative star
/// count as no stars.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StarSettings {
    /// Number of stars drawn, at most [`MAX_TOTAL_STARS`].
    #[serde(
        default = "default_total_stars",
        deserialize_with = "de_total_stars"
    )]
    pub total_stars: usize,
    /// Fill granularity. Unknown names fall back to `half`.
    #[serde(default, deserialize_with = "de_fill_mode")]
    pub fill_mode: FillMode,
    /// Apply the glyph padding correction in `precise` mode.
    #[serde(default = "default_true")]
    pub correct_precise_fill: bool,
    /// Font used for the star glyphs.
    #[serde(default = "default_star_font")]
    pub star_font: FontSpec,
    /// Gap between stars as a fraction of the star font size.
    #[serde(default = "default_star_spacing_ratio")]
    pub star_spacing_ratio: f64,
    /// Glyph drawn for a filled star.
    #[serde(default = "default_filled_glyph")]
    pub filled_glyph: String,
    /// Glyph drawn for an empty star.
    #[serde(default = "default_empty_glyph")]
    pub empty_glyph: String,
    /// Colour of filled glyphs.
    #[serde(default = "default_star_color")]
    pub filled_color: Rgba8,
    /// Colour of empty glyphs.
    #[serde(default = "default_star_color")]
    pub empty_color: Rgba8,
    /// Font used for the trailing label.
    #[serde(default = "default_label_font")]
    pub label_font: FontSpec,
    /// Colour of the trailing label.
    #[serde(default = "default_label_color")]
    pub label_color: Rgba8,
    /// Gap between the last star and the label as a fraction of the star font size.
    #[serde(default = "default_label_gap_ratio")]
    pub label_gap_ratio: f64,
    /// How partially filled stars are painted.
    #[serde(default)]
    pub partial_paint: PartialPaint,
    /// Lowest rating a touch can select.
    #[serde(default = "default_min_touch_rating")]
    pub min_touch_rating: f64,
}

/// Strategy used by the paint boundary for partially filled stars.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartialPaint {
    /// Empty glyph underneath, filled glyph on top clipped to the fill width.
    #[default]
    Overlay,
    /// One filled glyph painted with a hard-stop gradient at the fill fraction.
    Gradient,
}

fn default_total_stars() -> usize {
    5
}

fn default_true() -> bool {
    true
}

fn default_star_font() -> FontSpec {
    FontSpec::sized(20.0)
}

fn default_star_spacing_ratio() -> f64 {
    0.1
}

fn default_filled_glyph() -> String {
    "★".to_string()
}

fn default_empty_glyph() -> String {
    "☆".to_string()
}

fn default_star_color() -> Rgba8 {
    Rgba8::opaque(0xff, 0xb9, 0x00)
}

fn default_label_font() -> FontSpec {
    FontSpec::sized(14.0)
}

fn default_label_color() -> Rgba8 {
    Rgba8::opaque(0x80, 0x80, 0x80)
}

fn default_label_gap_ratio() -> f64 {
    0.25
}

fn default_min_touch_rating() -> f64 {
    1.0
}

fn de_total_stars<'de, D>(de: D) -> Result<usize, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = <i64 as serde::Deserialize>::deserialize(de)?;
    Ok(usize::try_from(raw).unwrap_or(0))
}

fn de_fill_mode<'de, D>(de: D) -> Result<FillMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = <String as serde::Deserialize>::deserialize(de)?;
    Ok(FillMode::parse_lenient(&raw))
}

impl Default for StarSettings {
    fn default() -> Self {
        Self {
            total_stars: default_total_stars(),
            fill_mode: FillMode::default(),
            correct_precise_fill: true,
            star_font: default_star_font(),
            star_spacing_ratio: default_star_spacing_ratio(),
            filled_glyph: default_filled_glyph(),
            empty_glyph: default_empty_glyph(),
            filled_color: default_star_color(),
            empty_color: default_star_color(),
            label_font: default_label_font(),
            label_color: default_label_color(),
            label_gap_ratio: default_label_gap_ratio(),
            partial_paint: PartialPaint::default(),
            min_touch_rating: default_min_touch_rating(),
        }
    }
}

impl StarSettings {
    /// Parse settings from JSON and validate them.
    pub fn from_json_str(json: &str) -> StarsResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        tracing::debug!(
            total_stars = settings.total_stars,
            fill_mode = settings.fill_mode.as_str(),
            "loaded star settings"
        );
        Ok(settings)
    }

    /// Read and parse a JSON settings file.
    pub fn from_path(path: impl AsRef<Path>) -> StarsResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read settings file '{}'", path.display()))?;
        Self::from_json_str(&json)
    }

    pub fn to_json_pretty(&self) -> StarsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject settings that cannot be laid out at all.
    pub fn validate(&self) -> StarsResult<()> {
        if self.total_stars > MAX_TOTAL_STARS {
            return Err(StarsError::validation(format!(
                "total_stars must be <= {MAX_TOTAL_STARS}, got {}",
                self.total_stars
            )));
        }
        for (name, font) in [("star_font", &self.star_font), ("label_font", &self.label_font)] {
            if !font.size_px.is_finite() || font.size_px <= 0.0 {
                return Err(StarsError::validation(format!(
                    "{name}.size_px must be finite and > 0"
                )));
            }
            if let Some(family) = &font.family
                && family.trim().is_empty()
            {
                return Err(StarsError::validation(format!(
                    "{name}.family must be non-empty when set"
                )));
            }
        }
        if self.filled_glyph.is_empty() || self.empty_glyph.is_empty() {
            return Err(StarsError::validation("star glyphs must be non-empty"));
        }
        Ok(())
    }

    /// Horizontal gap between stars in pixels.
    pub fn star_spacing(&self) -> f64 {
        non_negative(self.star_spacing_ratio) * non_negative(self.star_font.size_px)
    }

    /// Horizontal gap between the star block and the label in pixels.
    pub fn label_gap(&self) -> f64 {
        non_negative(self.label_gap_ratio) * non_negative(self.star_font.size_px)
    }

    /// `total_stars` capped at [`MAX_TOTAL_STARS`], for callers that skip validation.
    pub fn star_count(&self) -> usize {
        self.total_stars.min(MAX_TOTAL_STARS)
    }

    /// `min_touch_rating` clamped into `[0, total_stars]`.
    pub fn min_touch_rating(&self) -> f64 {
        clamp_or_lo(self.min_touch_rating, 0.0, self.total_stars as f64)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/settings/model.rs"]
mod tests;
