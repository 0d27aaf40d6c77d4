//! Design-system colours resolved through enumerated tokens.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    Light,
    #[default]
    Dark,
}

impl ColorScheme {
    pub fn is_dark(self) -> bool {
        self == ColorScheme::Dark
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeToken {
    BackgroundPrimary,
    BackgroundSecondary,
    BackgroundTertiary,
    TextPrimary,
    TextSecondary,
    TextTertiary,
    TextQuaternary,
    CardBase,
    CardBorder,
    CardShadow,
    OptionActiveBackground,
    OptionActiveBorder,
    OptionActiveText,
    OptionInactiveBackground,
    OptionInactiveBorder,
    OptionInactiveText,
}

impl ThemeToken {
    pub const ALL: [ThemeToken; 16] = [
        ThemeToken::BackgroundPrimary,
        ThemeToken::BackgroundSecondary,
        ThemeToken::BackgroundTertiary,
        ThemeToken::TextPrimary,
        ThemeToken::TextSecondary,
        ThemeToken::TextTertiary,
        ThemeToken::TextQuaternary,
        ThemeToken::CardBase,
        ThemeToken::CardBorder,
        ThemeToken::CardShadow,
        ThemeToken::OptionActiveBackground,
        ThemeToken::OptionActiveBorder,
        ThemeToken::OptionActiveText,
        ThemeToken::OptionInactiveBackground,
        ThemeToken::OptionInactiveBorder,
        ThemeToken::OptionInactiveText,
    ];

    pub fn resolve(self, scheme: ColorScheme) -> &'static str {
        use ThemeToken::*;

        match scheme {
            ColorScheme::Light => match self {
                BackgroundPrimary => "#FFFFFF",
                BackgroundSecondary => "#F8FAFC",
                BackgroundTertiary => "#F1F5F9",
                TextPrimary => "#0F172B",
                TextSecondary => "#45556C",
                TextTertiary => "#62748E",
                TextQuaternary => "#90A1B9",
                CardBase => "#FFFFFF",
                CardBorder => "#E2E8F0",
                CardShadow => "rgba(0, 0, 0, 0.08)",
                OptionActiveBackground => "#FFFFFF",
                OptionActiveBorder => "#E2E8F0",
                OptionActiveText => "#1D293D",
                OptionInactiveBackground => "#F1F5F9",
                OptionInactiveBorder => "#E2E8F0",
                OptionInactiveText => "#62748E",
            },
            ColorScheme::Dark => match self {
                BackgroundPrimary => "#020618",
                BackgroundSecondary => "#1D293D",
                BackgroundTertiary => "#314158",
                TextPrimary => "#FFFFFF",
                TextSecondary => "#CAD5E2",
                TextTertiary => "#90A1B9",
                TextQuaternary => "#62748E",
                CardBase => "rgba(45, 55, 72, 0.3)",
                CardBorder => "rgba(203, 213, 225, 0.1)",
                CardShadow => "rgba(0, 0, 0, 0.3)",
                OptionActiveBackground => "#314158",
                OptionActiveBorder => "#1D293D",
                OptionActiveText => "#FFFFFF",
                OptionInactiveBackground => "#020618",
                OptionInactiveBorder => "rgba(203, 213, 225, 0.1)",
                OptionInactiveText => "#90A1B9",
            },
        }
    }
}

pub fn background_gradient(scheme: ColorScheme) -> [&'static str; 3] {
    match scheme {
        ColorScheme::Light => ["#E9D5FF", "#FBCFE8", "#FED7AA"],
        ColorScheme::Dark => ["#7F22FE", "#4D179A", "#1D293D"],
    }
}
