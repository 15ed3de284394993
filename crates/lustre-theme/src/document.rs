use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use lustre_engine::appearance::{
    Appearances, DefaultIndicator, HIGHLIGHT_FACTOR_RANGE, MouseOver, Options, Palette,
};
use lustre_engine::paint::shade_table::{MAX_CONTRAST, STD_SHADE_COUNT};
use lustre_engine::paint::{Color, CustomSlot, GradientLibrary, ShadeModel};

use crate::error::{Result, ThemeError};
use crate::gradient::{format_custom_gradient, parse_custom_gradient};

/// Base colors as `#rrggbb` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteSection {
    pub button: String,
    pub window: String,
    pub highlight: String,
}

impl PaletteSection {
    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            button: palette.button.to_hex(),
            window: palette.window.to_hex(),
            highlight: palette.highlight.to_hex(),
        }
    }

    pub fn to_palette(&self) -> Result<Palette> {
        Ok(Palette {
            button: Color::from_hex(&self.button)?,
            window: Color::from_hex(&self.window)?,
            highlight: Color::from_hex(&self.highlight)?,
        })
    }
}

/// A theme file as stored on disk.
///
/// Missing keys take their defaults. Values are kept as written; range checks
/// happen in [`ThemeDocument::to_options`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeDocument {
    pub contrast: i32,
    pub shading: ShadeModel,
    /// Empty means "use the contrast curve"; otherwise exactly six factors.
    pub custom_shades: Vec<f64>,
    pub highlight_factor: i32,
    pub mouse_over: MouseOver,
    pub default_button: DefaultIndicator,
    pub active_tab_highlight: f64,
    pub invert_bottom_tabs: bool,
    pub border_width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette: Option<PaletteSection>,
    pub appearance: Appearances,
    /// `customN` → `border,pos,value,...`
    pub gradients: BTreeMap<String, String>,
}

impl Default for ThemeDocument {
    fn default() -> Self {
        Self::from_options(&Options::default())
    }
}

impl ThemeDocument {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let doc = Self::from_toml_str(&data)?;
        log::debug!("loaded theme {}", path.display());
        Ok(doc)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_toml_string()?).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Snapshot of `options`. Only defined gradient slots are written.
    pub fn from_options(options: &Options) -> Self {
        Self {
            contrast: options.contrast,
            shading: options.shading,
            custom_shades: options.custom_shades.map(Vec::from).unwrap_or_default(),
            highlight_factor: options.highlight_factor,
            mouse_over: options.mouse_over,
            default_button: options.default_button,
            active_tab_highlight: options.active_tab_highlight,
            invert_bottom_tabs: options.invert_bottom_tabs,
            border_width: options.border_width,
            palette: None,
            appearance: options.appearances,
            gradients: options
                .gradients
                .defined()
                .map(|(slot, g)| (slot.to_string(), format_custom_gradient(g)))
                .collect(),
        }
    }

    /// Records `palette` in the document.
    pub fn with_palette(mut self, palette: &Palette) -> Self {
        self.palette = Some(PaletteSection::from_palette(palette));
        self
    }

    /// Engine options described by this document.
    ///
    /// Out-of-range numbers are clamped with a warning. Structural problems
    /// (bad slot names, malformed gradients, a shade override of the wrong
    /// length) are errors.
    pub fn to_options(&self) -> Result<Options> {
        if !(0..=MAX_CONTRAST).contains(&self.contrast) {
            log::warn!("contrast {} out of range, using default", self.contrast);
        }
        if !HIGHLIGHT_FACTOR_RANGE.contains(&self.highlight_factor) {
            log::warn!("highlight_factor {} out of range, clamped", self.highlight_factor);
        }
        if !(0.0..=1.0).contains(&self.active_tab_highlight) {
            log::warn!("active_tab_highlight {} out of range, clamped", self.active_tab_highlight);
        }

        let custom_shades = match self.custom_shades.len() {
            0 => None,
            STD_SHADE_COUNT => {
                let mut shades = [1.0; STD_SHADE_COUNT];
                shades.copy_from_slice(&self.custom_shades);
                if shades.iter().any(|v| !(0.0..=2.0).contains(v)) {
                    log::warn!("custom_shades {shades:?} out of range, clamped");
                }
                Some(shades)
            }
            n => return Err(ThemeError::CustomShadeCount(n)),
        };

        let mut gradients = GradientLibrary::new();
        for (name, encoded) in &self.gradients {
            let slot = parse_slot(name)?;
            let gradient = parse_custom_gradient(encoded).map_err(|source| ThemeError::Gradient {
                slot: name.clone(),
                source,
            })?;
            gradients.set(slot, gradient);
        }

        let options = Options {
            contrast: self.contrast,
            shading: self.shading,
            custom_shades,
            highlight_factor: self.highlight_factor,
            appearances: self.appearance,
            mouse_over: self.mouse_over,
            default_button: self.default_button,
            active_tab_highlight: self.active_tab_highlight,
            invert_bottom_tabs: self.invert_bottom_tabs,
            border_width: self.border_width,
            gradients,
            ..Options::default()
        };
        Ok(options.sanitized())
    }

    /// The palette section, if the theme has one.
    pub fn palette(&self) -> Result<Option<Palette>> {
        self.palette.as_ref().map(PaletteSection::to_palette).transpose()
    }
}

/// `customN` (1-based, case-insensitive) → slot.
fn parse_slot(name: &str) -> Result<CustomSlot> {
    name.trim()
        .to_ascii_lowercase()
        .strip_prefix("custom")
        .and_then(|n| n.parse::<usize>().ok())
        .and_then(CustomSlot::from_number)
        .ok_or_else(|| ThemeError::BadSlot(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lustre_engine::appearance::AppearanceKind;
    use lustre_engine::paint::GradientBorder;

    const SAMPLE: &str = r##"
contrast = 5
shading = "hcy"
custom_shades = []
highlight_factor = 8
mouse_over = "glow"
default_button = "tint"
active_tab_highlight = 0.35
invert_bottom_tabs = false
border_width = 2

[palette]
button = "#c0c0c0"
window = "#d0d0d0"
highlight = "#3070c0"

[appearance]
button = "shiny-glass"
tab = "custom1"

[gradients]
custom1 = "3d,0,1.2,0.5,0.95,1,0.9"
"##;

    fn slot(n: usize) -> CustomSlot {
        CustomSlot::from_number(n).unwrap()
    }

    // ── parsing ───────────────────────────────────────────────────────────

    #[test]
    fn sample_theme_parses() {
        let doc = ThemeDocument::from_toml_str(SAMPLE).unwrap();
        let options = doc.to_options().unwrap();
        assert_eq!(options.contrast, 5);
        assert_eq!(options.shading, ShadeModel::Hcy);
        assert_eq!(options.custom_shades, None);
        assert_eq!(options.highlight_factor, 8);
        assert_eq!(options.mouse_over, MouseOver::Glow);
        assert_eq!(options.default_button, DefaultIndicator::Tint);
        assert_eq!(options.active_tab_highlight, 0.35);
        assert!(!options.invert_bottom_tabs);
        assert_eq!(options.border_width, 2);
        assert_eq!(options.appearances.button, AppearanceKind::ShinyGlass);
        assert_eq!(options.appearances.tab, AppearanceKind::Custom(slot(1)));
        assert_eq!(options.appearances.header, Appearances::default().header);
        let custom1 = options.gradients.get(slot(1));
        assert_eq!(custom1.border, GradientBorder::ThreeD);
        assert_eq!(custom1.stops.len(), 3);

        let palette = doc.palette().unwrap().unwrap();
        assert_eq!(palette.highlight, Color::new(0x30, 0x70, 0xc0));
    }

    #[test]
    fn empty_document_is_default() {
        let doc = ThemeDocument::from_toml_str("").unwrap();
        assert_eq!(doc, ThemeDocument::default());
        assert_eq!(doc.to_options().unwrap(), Options::default());
        assert!(doc.palette().unwrap().is_none());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let doc = ThemeDocument::from_toml_str(
            "contrast = 99\nhighlight_factor = -80\nactive_tab_highlight = 3.0\n\
             custom_shades = [1.2, 1.1, 0.9, 0.8, 0.85, 9.0]",
        )
        .unwrap();
        let options = doc.to_options().unwrap();
        assert_eq!(options.contrast, 7);
        assert_eq!(options.highlight_factor, -50);
        assert_eq!(options.active_tab_highlight, 1.0);
        assert_eq!(options.custom_shades.unwrap()[5], 2.0);
    }

    // ── errors ────────────────────────────────────────────────────────────

    #[test]
    fn wrong_shade_count_is_an_error() {
        let doc = ThemeDocument::from_toml_str("custom_shades = [1.0, 0.9]").unwrap();
        assert!(matches!(doc.to_options(), Err(ThemeError::CustomShadeCount(2))));
    }

    #[test]
    fn bad_slot_names_are_errors() {
        for name in ["custom0", "custom17", "gradient1"] {
            let text = format!("[gradients]\n{name} = \"3d,0,1\"");
            let doc = ThemeDocument::from_toml_str(&text).unwrap();
            assert!(matches!(doc.to_options(), Err(ThemeError::BadSlot(_))), "{name}");
        }
    }

    #[test]
    fn malformed_gradient_names_its_slot() {
        let doc = ThemeDocument::from_toml_str("[gradients]\ncustom2 = \"3d,0\"").unwrap();
        match doc.to_options() {
            Err(ThemeError::Gradient { slot, .. }) => assert_eq!(slot, "custom2"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn unknown_appearance_is_a_parse_error() {
        let err = ThemeDocument::from_toml_str("[appearance]\nbutton = \"glossy\"").unwrap_err();
        assert!(matches!(err, ThemeError::Parse(_)));
        assert!(err.to_string().contains("glossy"));
    }

    #[test]
    fn bad_palette_color_is_an_error() {
        let doc = ThemeDocument::from_toml_str(
            "[palette]\nbutton = \"#zzzzzz\"\nwindow = \"#000000\"\nhighlight = \"#000000\"",
        )
        .unwrap();
        assert!(matches!(doc.palette(), Err(ThemeError::BadColor(_))));
    }

    // ── writing ───────────────────────────────────────────────────────────

    #[test]
    fn toml_round_trip_preserves_options() {
        let mut options = ThemeDocument::from_toml_str(SAMPLE).unwrap().to_options().unwrap();
        options.custom_shades = Some([1.15, 1.05, 0.9, 0.8, 0.84, 0.6]);
        options.gradients.add_stop(slot(16), 0.25, 1.125);

        let text = ThemeDocument::from_options(&options).to_toml_string().unwrap();
        let back = ThemeDocument::from_toml_str(&text).unwrap().to_options().unwrap();

        assert_eq!(back.contrast, options.contrast);
        assert_eq!(back.custom_shades, options.custom_shades);
        assert_eq!(back.appearances, options.appearances);
        for (slot, g) in options.gradients.defined() {
            let restored = back.gradients.get(slot);
            assert_eq!(restored.border, g.border);
            assert!(restored.stops.fix().approx_eq(&g.stops.fix()));
        }
        assert_eq!(back.gradients.defined().count(), 2);
    }

    #[test]
    fn undefined_slots_are_not_written() {
        let doc = ThemeDocument::from_options(&Options::default());
        assert!(doc.gradients.is_empty());
        assert!(!doc.to_toml_string().unwrap().contains("custom1"));
    }
}
