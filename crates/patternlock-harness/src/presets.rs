#![forbid(unsafe_code)]

//! Named configurations matching the demo screens hosts usually ship.

use std::fmt;
use std::str::FromStr;

use patternlock_core::color::Rgba;
use patternlock_widgets::style::CellStyle;
use patternlock_widgets::{LineStyle, PatternLockConfig, PatternStyle};

use crate::error::ReplayError;

/// A named configuration and style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Preset {
    /// 3x3, common line.
    #[default]
    Default,
    /// 3x3 with indicator arrows.
    Indicator,
    /// Indicator arrows on filled cell discs, orange accent.
    JdStyle,
    /// 9x9 with tight spacing.
    NineByNine,
    /// 3x3 in secure mode.
    Secure,
}

const JD_ACCENT: Rgba = Rgba::rgb(0xff, 0x57, 0x22);
const JD_DISC: Rgba = Rgba::rgba(0xff, 0x57, 0x22, 0x33);
const JD_REGULAR: Rgba = Rgba::rgb(0xe0, 0xe0, 0xe0);

impl Preset {
    pub const ALL: [Self; 5] = [
        Self::Default,
        Self::Indicator,
        Self::JdStyle,
        Self::NineByNine,
        Self::Secure,
    ];

    /// Name used in traces and on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Indicator => "indicator",
            Self::JdStyle => "jd-style",
            Self::NineByNine => "nine-by-nine",
            Self::Secure => "secure",
        }
    }

    #[must_use]
    pub fn config(self) -> PatternLockConfig {
        let base = PatternLockConfig::default();
        match self {
            Self::Default => base,
            Self::Indicator | Self::JdStyle => base.line_style(LineStyle::Indicator),
            Self::NineByNine => base.grid(9, 9).spacing(8),
            Self::Secure => base.secure_mode(true),
        }
    }

    #[must_use]
    pub fn style(self) -> PatternStyle {
        let mut style = PatternStyle::default();
        if self == Self::JdStyle {
            style.regular = CellStyle::dot(JD_REGULAR).background(JD_REGULAR);
            style.selected = CellStyle::dot(JD_ACCENT).background(JD_DISC);
            style.error = style.error.background(Rgba::rgba(0xf4, 0x43, 0x36, 0x33));
            style.success = style.selected;
            style.regular_line_color = JD_ACCENT;
            style.set_success_line_color(JD_ACCENT);
        }
        style
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = ReplayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name() == s)
            .ok_or_else(|| ReplayError::Usage(format!("unknown preset: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for preset in Preset::ALL {
            assert_eq!(preset.name().parse::<Preset>().ok(), Some(preset));
        }
        assert!("ten-by-ten".parse::<Preset>().is_err());
    }

    #[test]
    fn every_preset_is_valid() {
        for preset in Preset::ALL {
            assert!(preset.config().validate().is_ok(), "{preset}");
        }
    }

    #[test]
    fn presets_differ_where_expected() {
        assert_eq!(Preset::NineByNine.config().cell_count(), 81);
        assert!(Preset::Secure.config().secure_mode);
        assert_eq!(Preset::JdStyle.config().line_style, LineStyle::Indicator);
        assert!(Preset::JdStyle.style().regular.background.is_some());
        assert_eq!(Preset::Default.style(), PatternStyle::default());
    }
}
