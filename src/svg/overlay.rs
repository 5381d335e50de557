//! Decorative sparkle overlay, appended to any widget when the easter egg is switched on.

use super::styles::{fmt_num, SVG_CLOSE};

/// `easterEgg` value that turns the overlay on.
pub const SPARKLE_FLAG: &str = "sparkles";

const SPARKLE_COLOR: &str = "#FFD36E";
const INSET: f64 = 14.0;
const ROTATE_PERIOD: &str = "6s";
const TWINKLE_PERIOD: &str = "1.8s";
/// Four-pointed star centered on the origin
const STAR_PATH: &str = "M0,-8 L2,-2 L8,0 L2,2 L0,8 L-2,2 L-8,0 L-2,-2 Z";

/// Sparkle fragment near the top-right corner, or nothing when the flag doesn't match.
pub fn overlay(easter_egg: Option<&str>, width: f64, _height: f64) -> String {
    if easter_egg != Some(SPARKLE_FLAG) {
        return String::new();
    }
    format!(
        r#"  <g transform="translate({x} {y})" opacity="0.9">
    <path d="{STAR_PATH}" fill="{SPARKLE_COLOR}">
      <animateTransform attributeName="transform" type="rotate" from="0" to="360" dur="{ROTATE_PERIOD}" repeatCount="indefinite"/>
      <animate attributeName="opacity" values="1;0.3;1" dur="{TWINKLE_PERIOD}" repeatCount="indefinite"/>
    </path>
  </g>"#,
        x = fmt_num(width - INSET),
        y = fmt_num(INSET),
    )
}

/// Insert the overlay before the closing tag of `svg`. Returns the document unchanged when off.
pub fn decorate(svg: String, easter_egg: Option<&str>, width: f64, height: f64) -> String {
    let fragment = overlay(easter_egg, width, height);
    if fragment.is_empty() {
        return svg;
    }
    match svg.rfind(SVG_CLOSE) {
        Some(idx) => format!("{}{}\n{}", &svg[..idx], fragment, &svg[idx..]),
        None => svg,
    }
}
