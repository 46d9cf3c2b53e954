//! Output mode for conversion.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Which flavour of Bazel workspace to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionMode {
    /// Self-contained BUILD files that Bazel can build directly.
    #[default]
    Native,
    /// Read-only query overlay. Targets are generic `soong_module` calls
    /// backed by generated rule shims.
    Overlay,
}

impl ConversionMode {
    /// Returns the mode identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversionMode::Native => "native",
            ConversionMode::Overlay => "overlay",
        }
    }

    pub fn is_overlay(&self) -> bool {
        matches!(self, ConversionMode::Overlay)
    }
}

impl fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ConversionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "native" | "bp2build" => Ok(ConversionMode::Native),
            "overlay" | "queryview" => Ok(ConversionMode::Overlay),
            _ => Err(format!(
                "unknown mode '{}', expected 'native' or 'overlay'",
                s
            )),
        }
    }
}
