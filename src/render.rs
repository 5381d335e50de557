//! Render driver - dispatches each configured widget to its generator and writes the result.

use crate::error::{MotionError, MotionResult};
use crate::svg::{
    decorate, render_badge_svg, render_counter_svg, render_progress_svg, render_sparkline_svg,
    render_ticker_svg, render_typewriter_svg, resolve_palette, Palette, ThemeTable,
};
use crate::types::{ConfigItem, RenderConfig, WidgetSpec};
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of a render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderSummary {
    /// Files written, in item order
    pub written: Vec<PathBuf>,
    /// `type` values of skipped items (`None` when the tag was missing)
    pub skipped: Vec<Option<String>>,
}

/// Generate the SVG for one widget with an already resolved palette.
pub fn render_widget(spec: &WidgetSpec, palette: &Palette, easter_egg: Option<&str>) -> String {
    let svg = match spec {
        WidgetSpec::Typewriter(s) => render_typewriter_svg(s, palette),
        WidgetSpec::Progress(s) => render_progress_svg(s, palette),
        WidgetSpec::Badge(s) => render_badge_svg(s, palette),
        WidgetSpec::Counter(s) => render_counter_svg(s, palette),
        WidgetSpec::Sparkline(s) => render_sparkline_svg(s, palette),
        WidgetSpec::Ticker(s) => render_ticker_svg(s, palette),
    };
    let (width, height) = spec.size();
    decorate(svg, easter_egg, width, height)
}

/// Resolve the widget's palette against `themes` and generate its SVG.
pub fn render_with_theme(
    spec: &WidgetSpec,
    themes: &ThemeTable,
    default_theme: &str,
    easter_egg: Option<&str>,
) -> MotionResult<String> {
    let common = spec.common();
    let requested = common.theme.as_deref().unwrap_or(default_theme);
    let palette = resolve_palette(themes, requested, &common.overrides())?;
    Ok(render_widget(spec, &palette, easter_egg))
}

/// Render every item of `config` into its output directory, resolved against `base_dir`.
///
/// Unknown widget types are skipped with a warning. Theme and I/O failures abort the pass.
pub fn render_config(
    config: &RenderConfig,
    themes: &ThemeTable,
    base_dir: &Path,
) -> MotionResult<RenderSummary> {
    let out_dir = base_dir.join(&config.out_dir);
    fs::create_dir_all(&out_dir).map_err(|e| MotionError::io(&out_dir, e))?;

    let mut summary = RenderSummary::default();
    for item in &config.items {
        let spec = match item {
            ConfigItem::Widget(spec) => spec,
            ConfigItem::Unknown { type_name } => {
                tracing::warn!(
                    "skipping unknown type: {}",
                    type_name.as_deref().unwrap_or("<missing>")
                );
                summary.skipped.push(type_name.clone());
                continue;
            }
        };

        let svg = render_with_theme(spec, themes, &config.theme, config.easter_egg.as_deref())?;
        let path = out_dir.join(spec.file_name()?);
        write_file(&path, &svg)?;
        summary.written.push(path);
    }
    Ok(summary)
}

fn write_file(path: &Path, content: &str) -> MotionResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| MotionError::io(parent, e))?;
    }
    fs::write(path, content).map_err(|e| MotionError::io(path, e))?;
    tracing::info!("wrote {}", path.display());
    Ok(())
}
