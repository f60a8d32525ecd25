//! Bell control configuration supplied by the hosting UI.

use serde::{Deserialize, Serialize};

/// Button style passed through to the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BellVariant {
    Default,
    Outline,
    #[default]
    Ghost,
}

/// Control size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BellSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl BellSize {
    /// Icon edge length in pixels.
    pub fn icon_px(self) -> u32 {
        match self {
            Self::Sm => 16,
            Self::Md => 18,
            Self::Lg => 20,
        }
    }

    /// Square button edge length in pixels.
    pub fn button_px(self) -> u32 {
        match self {
            Self::Sm => 32,
            Self::Md => 40,
            Self::Lg => 48,
        }
    }
}

/// Per-instance bell configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BellConfig {
    pub variant: BellVariant,
    pub size: BellSize,
}
