//! Font metrics, shared constants and markup helpers.
//!
//! Text widths are estimated from character counts; no real font metrics are available.

/// Font stack used when an item does not name one.
pub const DEFAULT_FONT_FAMILY: &str = "Inter, Segoe UI, Roboto, Arial";

/// Rough glyph width as a fraction of the font size, for monospace-ish estimates.
pub const CHAR_WIDTH_RATIO: f64 = 0.6;

/// Vertical shift applied to centered text elements.
pub const TEXT_BASELINE_SHIFT: &str = "0.35em";

/// Estimated rendered width of `text` in px at the given font size and weight.
pub fn estimate_text_width(text: &str, font_size: f64, font_weight: u32) -> f64 {
    let width_ratio = if font_weight >= 600 {
        0.62
    } else if font_weight >= 500 {
        0.58
    } else {
        0.55
    };
    text.chars().count() as f64 * font_size * width_ratio
}

/// Fixed font sizes used by the generators (in px)
pub struct FontSizes;

impl FontSizes {
    pub const LABEL: f64 = 14.0;
    pub const BADGE: f64 = 12.0;
    pub const SPARK_LABEL: f64 = 12.0;
    pub const TICKER: f64 = 16.0;
}

/// Font weights used per element type
pub struct FontWeights;

impl FontWeights {
    pub const LABEL: u32 = 500;
    pub const VALUE: u32 = 600;
    pub const DIGIT: u32 = 700;
}

/// Escape the reserved markup characters `&`, `<` and `>` in user-supplied text.
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Format a number for an attribute value: at most three decimals, no trailing zeros.
pub fn fmt_num(n: f64) -> String {
    if !n.is_finite() {
        return "0".to_string();
    }
    // Beyond 2^53 every f64 is already an integer.
    if n.abs() >= 9.0e15 {
        return format!("{:.0}", n);
    }
    let rounded = (n * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    if rounded.fract() == 0.0 {
        return format!("{:.0}", rounded);
    }
    let s = format!("{:.3}", rounded);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Format a millisecond count as an SMIL clock value in seconds, e.g. `700` → `0.7s`.
pub fn fmt_secs(ms: u64) -> String {
    format!("{}s", fmt_num(ms as f64 / 1000.0))
}

/// Format a microsecond count as an SMIL clock value in seconds, e.g. `1_250_000` → `1.25s`.
pub fn fmt_secs_us(us: u64) -> String {
    format!("{}s", fmt_num(us as f64 / 1_000_000.0))
}

/// XML prolog plus the SVG opening tag.
pub fn svg_open_tag(width: f64, height: f64) -> String {
    let w = fmt_num(width);
    let h = fmt_num(height);
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg">"#
    )
}

/// Full-canvas background rectangle.
pub fn background_rect(fill: &str, radius: f64) -> String {
    format!(
        r#"  <rect width="100%" height="100%" rx="{r}" ry="{r}" fill="{fill}"/>"#,
        r = fmt_num(radius),
    )
}

/// `<style>` block binding the font stack to a CSS class.
pub fn font_style_block(class: &str, font_family: &str, font_size: f64, weight: u32) -> String {
    format!(
        r#"  <style>
    .{class} {{ font-family: {family}; font-size: {size}px; font-weight: {weight}; }}
  </style>"#,
        family = escape_xml(font_family),
        size = fmt_num(font_size),
    )
}

pub const SVG_CLOSE: &str = "</svg>";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_replaces_reserved_characters() {
        let escaped = escape_xml("a < b && c > d");
        assert_eq!(escaped, "a &lt; b &amp;&amp; c &gt; d");
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
    }

    #[test]
    fn escape_leaves_plain_text_alone() {
        let plain = "Hello, \"world\" — it's 100% ✨";
        assert_eq!(escape_xml(plain), plain);
    }

    #[test]
    fn escape_does_not_double_escape_order() {
        assert_eq!(escape_xml("<&>"), "&lt;&amp;&gt;");
    }

    #[test]
    fn numbers_are_trimmed() {
        assert_eq!(fmt_num(42.0), "42");
        assert_eq!(fmt_num(241.92), "241.92");
        assert_eq!(fmt_num(0.1 + 0.2), "0.3");
        assert_eq!(fmt_num(-0.0001), "0");
        assert_eq!(fmt_num(-12.5), "-12.5");
        assert_eq!(fmt_num(1.0 / 3.0), "0.333");
    }

    #[test]
    fn seconds_from_millis() {
        assert_eq!(fmt_secs(700), "0.7s");
        assert_eq!(fmt_secs(0), "0s");
        assert_eq!(fmt_secs(1200), "1.2s");
        assert_eq!(fmt_secs_us(700_000), "0.7s");
        assert_eq!(fmt_secs_us(12_400), "0.012s");
    }

    #[test]
    fn extreme_numbers_stay_plain() {
        assert_eq!(fmt_num(1e19), "10000000000000000000");
        assert_eq!(fmt_num(-1e19), "-10000000000000000000");
        assert_eq!(fmt_num(123456789012.0), "123456789012");
        assert_eq!(fmt_num(f64::NAN), "0");
        assert_eq!(fmt_num(f64::INFINITY), "0");
    }

    #[test]
    fn text_width_counts_chars_not_bytes() {
        assert_eq!(
            estimate_text_width("éé", 10.0, 400),
            estimate_text_width("ee", 10.0, 400)
        );
    }
}
