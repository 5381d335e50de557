//! Ticker widget - marquee text scrolling right to left at constant speed, forever.
//!
//! The text is repeated three times so short strings fill the strip. This hides gaps for
//! typical inputs only; very short text on a wide, fast strip can still show a seam.

use super::styles::{
    background_rect, escape_xml, fmt_num, font_style_block, svg_open_tag, FontSizes, FontWeights,
    SVG_CLOSE, TEXT_BASELINE_SHIFT,
};
use super::theme::Palette;
use crate::types::TickerSpec;

pub(crate) const DEFAULT_SIZE: (f64, f64) = (600.0, 36.0);
const DEFAULT_TEXT: &str = "readme-motion";
const DEFAULT_SPEED: f64 = 80.0;
const MIN_SPEED: f64 = 20.0;
const REPEAT: usize = 3;
const SEPARATOR: &str = "  •  ";
/// Estimated width of one character at the ticker font size
const CHAR_WIDTH: f64 = 9.0;
/// Trailing space after the buffer before it wraps
const GAP: f64 = 48.0;

/// Scroll geometry and timing of one ticker.
#[derive(Debug, Clone, PartialEq)]
pub struct TickerLayout {
    /// The repeated text actually drawn
    pub buffer: String,
    pub content_width: f64,
    /// Seconds for one full pass from off-screen right to off-screen left
    pub duration_secs: f64,
}

pub fn ticker_layout(text: &str, viewport_width: f64, speed: Option<f64>) -> TickerLayout {
    let speed = speed
        .filter(|s| s.is_finite())
        .unwrap_or(DEFAULT_SPEED)
        .max(MIN_SPEED);
    let buffer = vec![text; REPEAT].join(SEPARATOR);
    let content_width = buffer.chars().count() as f64 * CHAR_WIDTH + GAP;
    TickerLayout {
        duration_secs: (content_width + viewport_width) / speed,
        content_width,
        buffer,
    }
}

/// Render a ticker widget to SVG
pub fn render_ticker_svg(spec: &TickerSpec, palette: &Palette) -> String {
    let (width, height) = spec.common.size_or(DEFAULT_SIZE);
    let text = spec
        .text
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_TEXT);
    let layout = ticker_layout(text, width, spec.speed);

    let mut parts: Vec<String> = Vec::new();
    parts.push(svg_open_tag(width, height));
    parts.push(background_rect(&palette.bg, 0.0));
    parts.push(font_style_block(
        "tk",
        spec.common.font_family(),
        FontSizes::TICKER,
        FontWeights::LABEL,
    ));
    parts.push(format!(
        r#"  <defs>
    <clipPath id="tk-view">
      <rect x="0" y="0" width="{w}" height="{h}"/>
    </clipPath>
  </defs>
  <g clip-path="url(#tk-view)">
    <g>
      <text class="tk" x="0" y="{y}" dy="{TEXT_BASELINE_SHIFT}" fill="{fill}" xml:space="preserve">{buffer}</text>
      <animateTransform attributeName="transform" type="translate" from="{w} 0" to="{to} 0" dur="{dur}s" repeatCount="indefinite"/>
    </g>
  </g>"#,
        w = fmt_num(width),
        h = fmt_num(height),
        y = fmt_num(height / 2.0),
        fill = palette.text,
        buffer = escape_xml(&layout.buffer),
        to = fmt_num(-layout.content_width),
        dur = fmt_num(layout.duration_secs),
    ));
    parts.push(SVG_CLOSE.to_string());
    parts.join("\n")
}
