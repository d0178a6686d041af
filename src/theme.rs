// SPDX-License-Identifier: MPL-2.0
//! Dark/light theming with system detection.

use dark_light;
use serde::{Deserialize, Serialize};

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex rendering, e.g. `#222222`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Color palette for a theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScheme {
    /// Page background once styles have settled.
    pub background: Rgb,
    /// Background painted before any stylesheet arrives, to avoid a
    /// flash of the wrong theme.
    pub prepaint_background: Rgb,
    /// Accent reported to the surrounding browser chrome.
    pub chrome_accent: Rgb,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            background: Rgb::new(234, 234, 234),
            prepaint_background: Rgb::new(255, 255, 255),
            chrome_accent: Rgb::new(238, 238, 238),
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            background: Rgb::new(34, 34, 34),
            prepaint_background: Rgb::new(0, 0, 0),
            chrome_accent: Rgb::new(52, 52, 52),
        }
    }

    /// Detects the system theme and returns the appropriate `ColorScheme`.
    #[must_use]
    pub fn from_system() -> Self {
        if let Ok(dark_light::Mode::Light) = dark_light::detect() {
            Self::light()
        } else {
            Self::dark() // Default to dark for Dark mode or on error
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// The light-switch action: resolves the effective theme and flips
    /// it to the opposite explicit mode. System never survives a
    /// toggle, so the result is always persistable as-is.
    #[must_use]
    pub fn toggled(self) -> Self {
        if self.is_dark() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }
}

/// Resolved theme: a mode plus its palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
}

impl SiteTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let colors = match mode {
            ThemeMode::Light => ColorScheme::light(),
            ThemeMode::Dark => ColorScheme::dark(),
            ThemeMode::System => ColorScheme::from_system(),
        };

        Self { colors, mode }
    }
}
