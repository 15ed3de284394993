use serde::{Deserialize, Serialize};

use crate::cache::CacheConfig;
use crate::paint::shade_table::{STD_SHADE_COUNT, clamp_contrast};
use crate::paint::{Color, GradientLibrary, ShadeCurve, ShadeModel, clamp_shade};

use super::{AppearanceKind, WidgetKind};

/// Accepted range of [`Options::highlight_factor`], in percent.
pub const HIGHLIGHT_FACTOR_RANGE: std::ops::RangeInclusive<i32> = -50..=50;
pub const DEFAULT_HIGHLIGHT_FACTOR: i32 = 3;

/// Mouse-over feedback style.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MouseOver {
    None,
    #[default]
    Colored,
    ThickColored,
    /// Plastik-style hover only touches the border; the fill stays on the base table.
    Plastik,
    Glow,
}

impl MouseOver {
    /// Modes that fill hovered widgets from the mouse-over table.
    #[inline]
    pub const fn uses_colored_table(self) -> bool {
        matches!(self, MouseOver::Colored | MouseOver::ThickColored | MouseOver::Glow)
    }
}

/// How the default button of a dialog is marked.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DefaultIndicator {
    None,
    Corner,
    #[default]
    Colored,
    /// Fills the whole bevel from a button×highlight tinted table.
    Tint,
    Glow,
    Darken,
}

/// Appearance per widget family.
///
/// Field names double as the keys of a theme's `[appearance]` table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Appearances {
    pub button: AppearanceKind,
    pub slider: AppearanceKind,
    pub scrollbar: AppearanceKind,
    pub groove: AppearanceKind,
    pub progress: AppearanceKind,
    pub progress_groove: AppearanceKind,
    pub menubar: AppearanceKind,
    pub menuitem: AppearanceKind,
    pub tab: AppearanceKind,
    pub active_tab: AppearanceKind,
    pub header: AppearanceKind,
    pub toolbar: AppearanceKind,
    pub selection: AppearanceKind,
}

impl Default for Appearances {
    fn default() -> Self {
        Self {
            button: AppearanceKind::SoftGradient,
            slider: AppearanceKind::SoftGradient,
            scrollbar: AppearanceKind::SoftGradient,
            groove: AppearanceKind::Inverted,
            progress: AppearanceKind::DullGlass,
            progress_groove: AppearanceKind::Inverted,
            menubar: AppearanceKind::Flat,
            menuitem: AppearanceKind::Fade,
            tab: AppearanceKind::SoftGradient,
            active_tab: AppearanceKind::SoftGradient,
            header: AppearanceKind::SoftGradient,
            toolbar: AppearanceKind::Flat,
            selection: AppearanceKind::Flat,
        }
    }
}

impl Appearances {
    /// Configured kind for a widget. Selected tabs use `active_tab`.
    pub fn for_widget(&self, widget: WidgetKind, selected: bool) -> AppearanceKind {
        match widget {
            WidgetKind::Button
            | WidgetKind::ToolButton
            | WidgetKind::ComboBox
            | WidgetKind::CheckBox => self.button,
            WidgetKind::Slider => self.slider,
            WidgetKind::ScrollBar => self.scrollbar,
            WidgetKind::SliderGroove | WidgetKind::ScrollBarTrough => self.groove,
            WidgetKind::ProgressBar => self.progress,
            WidgetKind::ProgressGroove => self.progress_groove,
            WidgetKind::MenuBar => self.menubar,
            WidgetKind::MenuItem | WidgetKind::MenuBarItem => self.menuitem,
            WidgetKind::Tab if selected => self.active_tab,
            WidgetKind::Tab => self.tab,
            WidgetKind::Header => self.header,
            WidgetKind::ToolBar => self.toolbar,
            WidgetKind::Selection => self.selection,
        }
    }
}

/// Base colors supplied by the host toolkit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Palette {
    pub button: Color,
    pub window: Color,
    pub highlight: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            button: Color::new(0xe0, 0xdf, 0xde),
            window: Color::new(0xd6, 0xd5, 0xd4),
            highlight: Color::new(0x30, 0x8c, 0xc6),
        }
    }
}

/// Global engine configuration.
///
/// Values are accepted as-is; [`Options::sanitized`] brings them into range
/// and is applied by the engine whenever options are installed.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Contrast level, `0..=10`. Anything else means the default (7).
    pub contrast: i32,
    pub shading: ShadeModel,
    /// Explicit std-shade factors, used instead of the contrast curve.
    pub custom_shades: Option<[f64; STD_SHADE_COUNT]>,
    /// Hover lightening in percent (`3` ⇒ factor `1.03`).
    pub highlight_factor: i32,
    pub appearances: Appearances,
    pub mouse_over: MouseOver,
    pub default_button: DefaultIndicator,
    /// Blend of a selected tab toward the highlight color, `0..=1`.
    pub active_tab_highlight: f64,
    /// Flip tab gradients for tabs drawn below their pages.
    pub invert_bottom_tabs: bool,
    pub border_width: u32,
    pub cache: CacheConfig,
    pub gradients: GradientLibrary,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            contrast: crate::paint::shade_table::DEFAULT_CONTRAST,
            shading: ShadeModel::default(),
            custom_shades: None,
            highlight_factor: DEFAULT_HIGHLIGHT_FACTOR,
            appearances: Appearances::default(),
            mouse_over: MouseOver::default(),
            default_button: DefaultIndicator::default(),
            active_tab_highlight: 0.2,
            invert_bottom_tabs: true,
            border_width: 1,
            cache: CacheConfig::default(),
            gradients: GradientLibrary::default(),
        }
    }
}

impl Options {
    /// Returns a copy with every numeric field in its valid range.
    pub fn sanitized(mut self) -> Self {
        self.contrast = clamp_contrast(self.contrast);
        self.custom_shades = self.custom_shades.map(|s| s.map(clamp_shade));
        self.highlight_factor = self
            .highlight_factor
            .clamp(*HIGHLIGHT_FACTOR_RANGE.start(), *HIGHLIGHT_FACTOR_RANGE.end());
        self.active_tab_highlight = if self.active_tab_highlight.is_nan() {
            0.0
        } else {
            self.active_tab_highlight.clamp(0.0, 1.0)
        };
        self
    }

    pub fn shade_curve(&self) -> ShadeCurve {
        match self.custom_shades {
            Some(values) => ShadeCurve::Custom(values),
            None => ShadeCurve::Contrast(self.contrast),
        }
    }

    /// Hover shade factor derived from [`highlight_factor`](Self::highlight_factor).
    #[inline]
    pub fn highlight(&self) -> f64 {
        (100 + self.highlight_factor) as f64 / 100.0
    }
}
