use crate::coords::Direction;
use crate::paint::GradientBorder;
use crate::paint::shade_table::{ORIG_HIGHLIGHT, ORIGINAL_SHADE, PRESSED_SHADE, SHADE_4_HIGHLIGHT};

use super::options::{DefaultIndicator, MouseOver, Options};
use super::{AppearanceKind, WidgetKind};

/// Interaction state of the widget being painted.
///
/// Builder-style setters make call sites read like the state they describe:
/// `InteractionFlags::new().sunken(true).mouse_over(true)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct InteractionFlags {
    pub enabled: bool,
    pub sunken: bool,
    pub mouse_over: bool,
    pub default_button: bool,
    pub selected: bool,
    /// Drawn mirrored from its usual placement (e.g. tabs below their page).
    pub flipped: bool,
}

impl Default for InteractionFlags {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionFlags {
    /// Enabled, idle widget.
    pub const fn new() -> Self {
        Self {
            enabled: true,
            sunken: false,
            mouse_over: false,
            default_button: false,
            selected: false,
            flipped: false,
        }
    }

    pub const fn enabled(mut self, v: bool) -> Self {
        self.enabled = v;
        self
    }

    pub const fn sunken(mut self, v: bool) -> Self {
        self.sunken = v;
        self
    }

    pub const fn mouse_over(mut self, v: bool) -> Self {
        self.mouse_over = v;
        self
    }

    pub const fn default_button(mut self, v: bool) -> Self {
        self.default_button = v;
        self
    }

    pub const fn selected(mut self, v: bool) -> Self {
        self.selected = v;
        self
    }

    pub const fn flipped(mut self, v: bool) -> Self {
        self.flipped = v;
        self
    }
}

/// Which shade table a fill is taken from.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum ShadeSource {
    #[default]
    Base,
    /// Base tinted toward the highlight color.
    MouseOver,
    /// Base tinted toward the highlight color (tint-mode default button).
    DefaultButton,
}

/// Everything the compositor and the cache need to know about one fill.
///
/// Produced by [`resolve`]; plain data, cheap to copy.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AppearanceSpec {
    pub kind: AppearanceKind,
    pub widget: WidgetKind,
    /// Shade factor at the start of the ramp.
    pub top_shade: f64,
    /// Shade factor at the end of the ramp.
    pub bottom_shade: f64,
    pub direction: Direction,
    /// `false` reverses the ramp end for end.
    pub increasing: bool,
    pub sunken: bool,
    pub selected: bool,
    /// Flip the gradient for mirrored placement (bottom tabs).
    pub inverted: bool,
    /// Blend of the fill color toward the highlight color, `0..=1`.
    pub selected_blend: f64,
    pub source: ShadeSource,
    /// Shade table index of the fill color.
    pub fill: usize,
    /// Border style requested from the drawing layer.
    pub border: GradientBorder,
    /// Drawing layer should add a glow overlay.
    pub glow: bool,
}

/// Derives the fill parameters for a widget in a given state.
///
/// Total over its inputs: a kind the widget cannot use degrades to
/// [`AppearanceKind::Gradient`] and an empty custom slot to a flat fill.
///
/// Rules:
/// - disabled widgets use the original shade, with no hover, tint or blend
/// - sunken widgets swap top and bottom shades
/// - colored and glow hover paint from the mouse-over table
/// - a tint-mode default button paints from the default-button table
pub fn resolve(
    widget: WidgetKind,
    flags: InteractionFlags,
    direction: Direction,
    options: &Options,
) -> AppearanceSpec {
    let configured = options.appearances.for_widget(widget, flags.selected);
    let kind = if widget.supports(configured) { configured } else { AppearanceKind::Gradient };

    let (mut top_shade, mut bottom_shade, border) = match kind {
        AppearanceKind::Custom(slot) => {
            let gradient = options.gradients.get(slot);
            let fixed = gradient.stops.fix();
            match (fixed.first(), fixed.last()) {
                (Some(first), Some(last)) => (first.value, last.value, gradient.border),
                _ => (1.0, 1.0, gradient.border),
            }
        }
        _ => {
            let (top, bottom) = kind.shades();
            (top, bottom, kind.builtin_border())
        }
    };

    let inverted = widget == WidgetKind::Tab && flags.flipped && options.invert_bottom_tabs;

    if !flags.enabled {
        return AppearanceSpec {
            kind,
            widget,
            top_shade,
            bottom_shade,
            direction,
            increasing: true,
            sunken: false,
            selected: false,
            inverted,
            selected_blend: 0.0,
            source: ShadeSource::Base,
            fill: ORIGINAL_SHADE,
            border,
            glow: false,
        };
    }

    if flags.sunken {
        std::mem::swap(&mut top_shade, &mut bottom_shade);
    }

    let hovered = flags.mouse_over && widget.reacts_to_hover();
    let source = if flags.default_button
        && widget == WidgetKind::Button
        && options.default_button == DefaultIndicator::Tint
    {
        ShadeSource::DefaultButton
    } else if hovered && options.mouse_over.uses_colored_table() {
        ShadeSource::MouseOver
    } else {
        ShadeSource::Base
    };

    let highlight_fill =
        hovered && options.mouse_over != MouseOver::None && source == ShadeSource::Base;
    let fill = match (flags.sunken, highlight_fill) {
        (true, true) => SHADE_4_HIGHLIGHT,
        (true, false) => PRESSED_SHADE,
        (false, true) => ORIG_HIGHLIGHT,
        (false, false) => ORIGINAL_SHADE,
    };

    let selected_blend = if widget == WidgetKind::Tab && flags.selected {
        options.active_tab_highlight
    } else {
        0.0
    };

    AppearanceSpec {
        kind,
        widget,
        top_shade,
        bottom_shade,
        direction,
        increasing: true,
        sunken: flags.sunken,
        selected: flags.selected,
        inverted,
        selected_blend,
        source,
        fill,
        border,
        glow: hovered && options.mouse_over == MouseOver::Glow,
    }
}
