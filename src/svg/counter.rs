//! Odometer counter widget - every digit column rolls from its start glyph to its target glyph.
//!
//! Columns animate independently and simultaneously; there is no carry between them.

use super::styles::{
    background_rect, escape_xml, estimate_text_width, fmt_num, fmt_secs, font_style_block,
    svg_open_tag, FontSizes, FontWeights, SVG_CLOSE, TEXT_BASELINE_SHIFT,
};
use super::theme::Palette;
use crate::types::CounterSpec;

pub(crate) const DEFAULT_SIZE: (f64, f64) = (320.0, 64.0);
const DEFAULT_DURATION_MS: u64 = 1200;
const MIN_DURATION_MS: u64 = 200;
const PAD: f64 = 12.0;
/// Gap between neighbouring digit cells
const CELL_GAP: f64 = 4.0;
const DIGIT_FONT_RATIO: f64 = 0.7;

/// Start and target glyph of one digit column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitColumn {
    pub from: u8,
    pub to: u8,
}

/// Floor a raw count to a non-negative integer.
pub fn floor_count(value: Option<f64>) -> u64 {
    value
        .filter(|v| v.is_finite())
        .map(|v| v.max(0.0).floor() as u64)
        .unwrap_or(0)
}

/// Number of decimal digits in `n` (`0` has one digit).
pub fn digit_len(n: u64) -> usize {
    n.to_string().len()
}

/// Zero-pad `n` to `width` digits. Wider values are never truncated.
pub fn zero_pad(n: u64, width: usize) -> String {
    format!("{:0>width$}", n, width = width)
}

/// Pair up the padded digits of `from` and `to`.
///
/// `digits` defaults to the length of the larger value and is widened if a value needs more.
pub fn digit_columns(from: u64, to: u64, digits: Option<usize>) -> Vec<DigitColumn> {
    let natural = digit_len(from.max(to));
    let width = digits.unwrap_or(natural).max(natural);
    let from = zero_pad(from, width);
    let to = zero_pad(to, width);
    from.bytes()
        .zip(to.bytes())
        .map(|(f, t)| DigitColumn {
            from: f - b'0',
            to: t - b'0',
        })
        .collect()
}

/// Render a counter widget to SVG
pub fn render_counter_svg(spec: &CounterSpec, palette: &Palette) -> String {
    let (width, height) = spec.common.size_or(DEFAULT_SIZE);
    let columns = digit_columns(floor_count(spec.from), floor_count(spec.to), spec.digits);
    let duration_ms = spec
        .duration_ms
        .filter(|d| d.is_finite())
        .map(|d| d.max(0.0).round() as u64)
        .unwrap_or(DEFAULT_DURATION_MS)
        .max(MIN_DURATION_MS);
    let label = spec.label.as_deref().unwrap_or("");

    let label_width = if label.is_empty() {
        0.0
    } else {
        estimate_text_width(label, FontSizes::LABEL, FontWeights::LABEL) + PAD
    };
    let col_w = ((width - PAD * 2.0 - label_width) / columns.len() as f64).max(0.0);
    let pitch = (height - PAD * 2.0).max(0.0);
    let cell_w = (col_w - CELL_GAP).max(0.0);
    let digit_size = pitch * DIGIT_FONT_RATIO;
    let dur = fmt_secs(duration_ms);

    let mut parts: Vec<String> = Vec::new();
    parts.push(svg_open_tag(width, height));
    parts.push(background_rect(&palette.bg, 0.0));
    parts.push(font_style_block(
        "od",
        spec.common.font_family(),
        digit_size,
        FontWeights::DIGIT,
    ));
    parts.push(font_style_block(
        "ol",
        spec.common.font_family(),
        FontSizes::LABEL,
        FontWeights::LABEL,
    ));

    let mut clips: Vec<String> = Vec::new();
    let mut strips: Vec<String> = Vec::new();

    for (idx, column) in columns.iter().enumerate() {
        let x = PAD + col_w * idx as f64;
        let cx = x + cell_w / 2.0;

        clips.push(format!(
            r#"    <clipPath id="od-clip-{idx}">
      <rect x="{x}" y="{y}" width="{w}" height="{h}"/>
    </clipPath>"#,
            x = fmt_num(x),
            y = fmt_num(PAD),
            w = fmt_num(cell_w),
            h = fmt_num(pitch),
        ));

        let glyphs: Vec<String> = (0..10u8)
            .map(|digit| {
                format!(
                    r#"      <text class="od" x="{x}" y="{y}" dy="{TEXT_BASELINE_SHIFT}" text-anchor="middle" fill="{fill}">{digit}</text>"#,
                    x = fmt_num(cx),
                    y = fmt_num(PAD + pitch * digit as f64 + pitch / 2.0),
                    fill = palette.text,
                )
            })
            .collect();

        strips.push(format!(
            r#"  <rect x="{x}" y="{y}" width="{w}" height="{h}" rx="4" ry="4" fill="{track}"/>
  <g clip-path="url(#od-clip-{idx})">
    <g transform="translate(0 {start})">
{glyphs}
      <animateTransform attributeName="transform" type="translate" from="0 {start}" to="0 {end}" dur="{dur}" fill="freeze"/>
    </g>
  </g>"#,
            x = fmt_num(x),
            y = fmt_num(PAD),
            w = fmt_num(cell_w),
            h = fmt_num(pitch),
            track = palette.track,
            start = fmt_num(-pitch * column.from as f64),
            end = fmt_num(-pitch * column.to as f64),
            glyphs = glyphs.join("\n"),
        ));
    }

    parts.push("  <defs>".to_string());
    parts.extend(clips);
    parts.push("  </defs>".to_string());
    parts.extend(strips);

    if !label.is_empty() {
        parts.push(format!(
            r#"  <text class="ol" x="{x}" y="{y}" dy="{TEXT_BASELINE_SHIFT}" fill="{fill}">{label}</text>"#,
            x = fmt_num(width - label_width),
            y = fmt_num(height / 2.0),
            fill = palette.muted,
            label = escape_xml(label),
        ));
    }

    parts.push(SVG_CLOSE.to_string());
    parts.join("\n")
}
