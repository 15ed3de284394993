use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::paint::{CustomSlot, GradientBorder};

/// Widget categories the engine shades differently.
///
/// Closed set: every consumer matches it exhaustively.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Button,
    ToolButton,
    ComboBox,
    CheckBox,
    Slider,
    SliderGroove,
    ScrollBar,
    ScrollBarTrough,
    ProgressBar,
    ProgressGroove,
    MenuBar,
    MenuItem,
    MenuBarItem,
    Tab,
    Header,
    ToolBar,
    Selection,
}

impl WidgetKind {
    pub const ALL: [WidgetKind; 17] = [
        WidgetKind::Button,
        WidgetKind::ToolButton,
        WidgetKind::ComboBox,
        WidgetKind::CheckBox,
        WidgetKind::Slider,
        WidgetKind::SliderGroove,
        WidgetKind::ScrollBar,
        WidgetKind::ScrollBarTrough,
        WidgetKind::ProgressBar,
        WidgetKind::ProgressGroove,
        WidgetKind::MenuBar,
        WidgetKind::MenuItem,
        WidgetKind::MenuBarItem,
        WidgetKind::Tab,
        WidgetKind::Header,
        WidgetKind::ToolBar,
        WidgetKind::Selection,
    ];

    /// Widgets that show mouse-over feedback in their fill.
    pub const fn reacts_to_hover(self) -> bool {
        match self {
            WidgetKind::Button
            | WidgetKind::ToolButton
            | WidgetKind::ComboBox
            | WidgetKind::CheckBox
            | WidgetKind::Slider
            | WidgetKind::ScrollBar
            | WidgetKind::Tab
            | WidgetKind::Header => true,
            WidgetKind::SliderGroove
            | WidgetKind::ScrollBarTrough
            | WidgetKind::ProgressBar
            | WidgetKind::ProgressGroove
            | WidgetKind::MenuBar
            | WidgetKind::MenuItem
            | WidgetKind::MenuBarItem
            | WidgetKind::ToolBar
            | WidgetKind::Selection => false,
        }
    }

    /// Whether `kind` is meaningful for this widget; the resolver replaces
    /// anything else with [`AppearanceKind::Gradient`].
    pub const fn supports(self, kind: AppearanceKind) -> bool {
        match kind {
            AppearanceKind::Striped => matches!(
                self,
                WidgetKind::ProgressBar
                    | WidgetKind::ProgressGroove
                    | WidgetKind::MenuBar
                    | WidgetKind::ToolBar
            ),
            AppearanceKind::Fade => matches!(
                self,
                WidgetKind::MenuItem | WidgetKind::MenuBarItem | WidgetKind::Selection
            ),
            _ => true,
        }
    }
}

/// How a widget surface is filled.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AppearanceKind {
    Flat,
    Raised,
    Gradient,
    SoftGradient,
    HarshGradient,
    Inverted,
    DullGlass,
    ShinyGlass,
    Agua,
    SplitGradient,
    Bevelled,
    Fade,
    Striped,
    Custom(CustomSlot),
}

/// Where the inner shades of a four-stop built-in curve sit.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BandLayout {
    /// Hard split at the middle (stops at `0.499` and `0.5`).
    Split,
    /// Thin bands at both ends, sized from the border width.
    Bevel,
}

/// Inner shades of a four-stop curve (top, inner, inner, bottom).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct InnerBands {
    pub layout: BandLayout,
    pub upper: f64,
    pub lower: f64,
}

impl AppearanceKind {
    pub const BUILTIN: [AppearanceKind; 13] = [
        AppearanceKind::Flat,
        AppearanceKind::Raised,
        AppearanceKind::Gradient,
        AppearanceKind::SoftGradient,
        AppearanceKind::HarshGradient,
        AppearanceKind::Inverted,
        AppearanceKind::DullGlass,
        AppearanceKind::ShinyGlass,
        AppearanceKind::Agua,
        AppearanceKind::SplitGradient,
        AppearanceKind::Bevelled,
        AppearanceKind::Fade,
        AppearanceKind::Striped,
    ];

    /// `(top, bottom)` shade factors of a built-in curve. Custom kinds take
    /// theirs from the slot's stops; this returns the neutral `(1.0, 1.0)` for them.
    pub const fn shades(self) -> (f64, f64) {
        match self {
            AppearanceKind::Flat | AppearanceKind::Raised | AppearanceKind::Striped => (1.0, 1.0),
            AppearanceKind::Gradient => (1.1, 0.94),
            AppearanceKind::SoftGradient => (1.04, 0.98),
            AppearanceKind::HarshGradient => (1.3, 0.925),
            AppearanceKind::Inverted => (0.93, 1.04),
            AppearanceKind::DullGlass => (1.05, 1.0),
            AppearanceKind::ShinyGlass => (1.2, 1.06),
            AppearanceKind::Agua => (0.6, 1.1),
            AppearanceKind::SplitGradient => (1.06, 0.92),
            AppearanceKind::Bevelled => (1.05, 0.94),
            AppearanceKind::Fade => (1.1, 1.0),
            AppearanceKind::Custom(_) => (1.0, 1.0),
        }
    }

    /// Inner band shades for the four-stop kinds.
    pub const fn inner_bands(self) -> Option<InnerBands> {
        let (layout, upper, lower) = match self {
            AppearanceKind::DullGlass => (BandLayout::Split, 0.984, 0.928),
            AppearanceKind::ShinyGlass => (BandLayout::Split, 0.984, 0.9),
            AppearanceKind::SplitGradient => (BandLayout::Split, 1.004, 0.986),
            AppearanceKind::Bevelled => (BandLayout::Bevel, 1.02, 0.985),
            _ => return None,
        };
        Some(InnerBands { layout, upper, lower })
    }

    /// Border treatment of a built-in kind. Custom kinds use their slot's border.
    pub const fn builtin_border(self) -> GradientBorder {
        match self {
            AppearanceKind::Flat | AppearanceKind::Fade | AppearanceKind::Striped => {
                GradientBorder::None
            }
            AppearanceKind::Raised => GradientBorder::ThreeDFull,
            AppearanceKind::DullGlass | AppearanceKind::ShinyGlass => GradientBorder::Light,
            AppearanceKind::Agua => GradientBorder::Shine,
            AppearanceKind::Gradient
            | AppearanceKind::SoftGradient
            | AppearanceKind::HarshGradient
            | AppearanceKind::Inverted
            | AppearanceKind::SplitGradient
            | AppearanceKind::Bevelled
            | AppearanceKind::Custom(_) => GradientBorder::ThreeD,
        }
    }

    /// Name used in theme files; `None` for custom kinds (`customN`).
    pub const fn builtin_name(self) -> Option<&'static str> {
        Some(match self {
            AppearanceKind::Flat => "flat",
            AppearanceKind::Raised => "raised",
            AppearanceKind::Gradient => "gradient",
            AppearanceKind::SoftGradient => "soft-gradient",
            AppearanceKind::HarshGradient => "harsh-gradient",
            AppearanceKind::Inverted => "inverted",
            AppearanceKind::DullGlass => "dull-glass",
            AppearanceKind::ShinyGlass => "shiny-glass",
            AppearanceKind::Agua => "agua",
            AppearanceKind::SplitGradient => "split-gradient",
            AppearanceKind::Bevelled => "bevelled",
            AppearanceKind::Fade => "fade",
            AppearanceKind::Striped => "striped",
            AppearanceKind::Custom(_) => return None,
        })
    }
}

impl fmt::Display for AppearanceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, self.builtin_name()) {
            (AppearanceKind::Custom(slot), _) => write!(f, "{slot}"),
            (_, Some(name)) => f.write_str(name),
            (_, None) => unreachable!("every built-in kind has a name"),
        }
    }
}

/// An appearance name that is neither built-in nor a valid `customN` slot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown appearance {0:?}")]
pub struct UnknownAppearance(pub String);

impl FromStr for AppearanceKind {
    type Err = UnknownAppearance;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        if let Some(n) = name.strip_prefix("custom") {
            return n
                .parse::<usize>()
                .ok()
                .and_then(CustomSlot::from_number)
                .map(AppearanceKind::Custom)
                .ok_or_else(|| UnknownAppearance(s.to_string()));
        }
        Self::BUILTIN
            .into_iter()
            .find(|k| k.builtin_name() == Some(name.as_str()))
            .ok_or_else(|| UnknownAppearance(s.to_string()))
    }
}

impl TryFrom<String> for AppearanceKind {
    type Error = UnknownAppearance;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<AppearanceKind> for String {
    fn from(kind: AppearanceKind) -> Self {
        kind.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for kind in AppearanceKind::BUILTIN {
            assert_eq!(kind.to_string().parse::<AppearanceKind>().unwrap(), kind);
        }
        let custom = AppearanceKind::Custom(CustomSlot::from_number(4).unwrap());
        assert_eq!(custom.to_string(), "custom4");
        assert_eq!("Custom4".parse::<AppearanceKind>().unwrap(), custom);
    }

    #[test]
    fn bad_names_are_rejected() {
        assert!("glossy".parse::<AppearanceKind>().is_err());
        assert!("custom0".parse::<AppearanceKind>().is_err());
        assert!("custom99".parse::<AppearanceKind>().is_err());
        assert!("customx".parse::<AppearanceKind>().is_err());
    }

    #[test]
    fn only_four_stop_kinds_have_inner_bands() {
        let with_bands: Vec<AppearanceKind> = AppearanceKind::BUILTIN
            .into_iter()
            .filter(|k| k.inner_bands().is_some())
            .collect();
        assert_eq!(
            with_bands,
            vec![
                AppearanceKind::DullGlass,
                AppearanceKind::ShinyGlass,
                AppearanceKind::SplitGradient,
                AppearanceKind::Bevelled
            ]
        );
    }

    #[test]
    fn striped_and_fade_are_restricted() {
        assert!(WidgetKind::ProgressBar.supports(AppearanceKind::Striped));
        assert!(!WidgetKind::Button.supports(AppearanceKind::Striped));
        assert!(WidgetKind::MenuItem.supports(AppearanceKind::Fade));
        assert!(!WidgetKind::Tab.supports(AppearanceKind::Fade));
        for w in WidgetKind::ALL {
            assert!(w.supports(AppearanceKind::Gradient));
        }
    }
}
