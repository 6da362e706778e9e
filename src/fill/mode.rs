use std::str::FromStr;

use crate::foundation::error::StarsError;

/// Granularity used when snapping a star's fill fraction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillMode {
    /// Stars are either full or empty.
    Full,
    /// Stars are full, half or empty.
    #[default]
    Half,
    /// Stars show the exact fractional fill.
    Precise,
}

impl FillMode {
    pub const ALL: [FillMode; 3] = [Self::Full, Self::Half, Self::Precise];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Half => "half",
            Self::Precise => "precise",
        }
    }

    /// Parse a mode name, falling back to [`FillMode::default`] for anything unknown.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.parse() {
            Ok(mode) => mode,
            Err(_) => {
                let fallback = Self::default();
                tracing::warn!(
                    raw,
                    fallback = fallback.as_str(),
                    "unknown fill mode, using default"
                );
                fallback
            }
        }
    }
}

impl FromStr for FillMode {
    type Err = StarsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "half" => Ok(Self::Half),
            "precise" => Ok(Self::Precise),
            _ => Err(StarsError::config(format!("unknown fill mode '{s}'"))),
        }
    }
}

impl std::fmt::Display for FillMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fill/mode.rs"]
mod tests;
