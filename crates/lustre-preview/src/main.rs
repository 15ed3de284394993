use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use lustre_engine::AppearanceEngine;
use lustre_engine::appearance::{InteractionFlags, Options, Palette, WidgetKind};
use lustre_engine::coords::{Direction, Rect};
use lustre_engine::logging::{LoggingConfig, init_logging};
use lustre_engine::paint::{Color, Pixmap};
use lustre_theme::ThemeDocument;

/// Gap between swatches, in pixels.
const GAP: u32 = 4;

#[derive(Debug, Parser)]
#[command(version, about = "Render every widget kind in every state for a theme")]
struct Cli {
    /// Theme file (TOML). Defaults are used when omitted.
    #[arg(long)]
    theme: Option<PathBuf>,
    /// Output PNG.
    #[arg(long, default_value = "preview.png")]
    out: PathBuf,
    /// Button color, overrides the theme palette.
    #[arg(long)]
    button: Option<Color>,
    /// Window color, overrides the theme palette.
    #[arg(long)]
    window: Option<Color>,
    /// Highlight color, overrides the theme palette.
    #[arg(long)]
    highlight: Option<Color>,
    /// Swatch size as WIDTHxHEIGHT.
    #[arg(long, default_value = "64x24", value_parser = parse_size)]
    size: (u32, u32),
    /// Log filter (env_logger syntax); falls back to RUST_LOG.
    #[arg(long)]
    log: Option<String>,
}

fn parse_size(s: &str) -> Result<(u32, u32)> {
    let Some((w, h)) = s.split_once(['x', 'X']) else {
        bail!("expected WIDTHxHEIGHT, got {s:?}");
    };
    let w: u32 = w.trim().parse().with_context(|| format!("bad width in {s:?}"))?;
    let h: u32 = h.trim().parse().with_context(|| format!("bad height in {s:?}"))?;
    if w == 0 || h == 0 {
        bail!("swatch size must be non-zero, got {s:?}");
    }
    Ok((w, h))
}

/// Interaction states shown as columns.
const STATES: [(&str, InteractionFlags); 8] = [
    ("normal", InteractionFlags::new()),
    ("hover", InteractionFlags::new().mouse_over(true)),
    ("pressed", InteractionFlags::new().sunken(true)),
    ("hover+pressed", InteractionFlags::new().mouse_over(true).sunken(true)),
    ("selected", InteractionFlags::new().selected(true)),
    ("default", InteractionFlags::new().default_button(true)),
    ("flipped", InteractionFlags::new().flipped(true)),
    ("disabled", InteractionFlags::new().enabled(false)),
];

/// Ramp direction of a widget drawn in its usual orientation.
fn direction_for(widget: WidgetKind) -> Direction {
    match widget {
        WidgetKind::ScrollBar | WidgetKind::ScrollBarTrough => Direction::Horizontal,
        _ => Direction::Vertical,
    }
}

/// Base color a widget is painted from.
fn base_for(widget: WidgetKind, palette: &Palette) -> Color {
    match widget {
        WidgetKind::ProgressBar | WidgetKind::Selection | WidgetKind::MenuItem => palette.highlight,
        WidgetKind::MenuBar | WidgetKind::ToolBar | WidgetKind::ProgressGroove => palette.window,
        _ => palette.button,
    }
}

fn load_theme(cli: &Cli) -> Result<(Options, Palette)> {
    let Some(path) = &cli.theme else {
        return Ok((Options::default(), Palette::default()));
    };
    let doc = ThemeDocument::load(path).with_context(|| format!("loading {}", path.display()))?;
    let options = doc.to_options().with_context(|| format!("applying {}", path.display()))?;
    let palette = doc.palette()?.unwrap_or_default();
    log::info!("theme {} loaded", path.display());
    Ok((options, palette))
}

fn render_sheet(engine: &mut AppearanceEngine, (w, h): (u32, u32)) -> Pixmap {
    let palette = *engine.palette();
    let cols = STATES.len() as u32;
    let rows = WidgetKind::ALL.len() as u32;
    let mut sheet = Pixmap::filled(cols * (w + GAP) + GAP, rows * (h + GAP) + GAP, palette.window);

    for (row, widget) in WidgetKind::ALL.into_iter().enumerate() {
        let base = base_for(widget, &palette);
        for (col, (name, flags)) in STATES.iter().enumerate() {
            let fill = engine.render_bevel_fill(
                base,
                Rect::from_size(w, h),
                direction_for(widget),
                widget,
                *flags,
            );
            let x = GAP + col as u32 * (w + GAP);
            let y = GAP + row as u32 * (h + GAP);
            log::trace!("{widget:?} {name} at ({x}, {y})");
            sheet.blit(&fill, x as i32, y as i32);
        }
    }
    sheet
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(LoggingConfig::with_filter(cli.log.clone()));

    let (options, mut palette) = load_theme(&cli)?;
    palette.button = cli.button.unwrap_or(palette.button);
    palette.window = cli.window.unwrap_or(palette.window);
    palette.highlight = cli.highlight.unwrap_or(palette.highlight);

    let mut engine = AppearanceEngine::new(options, palette);
    let sheet = render_sheet(&mut engine, cli.size);

    let image = image::RgbaImage::from_raw(sheet.width(), sheet.height(), sheet.as_bytes().to_vec())
        .context("sheet buffer does not match its dimensions")?;
    image
        .save(&cli.out)
        .with_context(|| format!("writing {}", cli.out.display()))?;

    let stats = engine.cache_stats();
    log::info!(
        "wrote {} ({}x{}); cache: {} hits, {} misses, {} items, {} bytes, {} evicted, {} oversize",
        cli.out.display(),
        sheet.width(),
        sheet.height(),
        stats.hits,
        stats.misses,
        stats.items,
        stats.bytes,
        stats.evictions,
        stats.oversize,
    );
    Ok(())
}
