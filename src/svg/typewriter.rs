//! Typewriter widget - lines typed out one after another, looping forever.
//!
//! Each line owns a reveal window `[begin, begin + typing + pause)`. Windows are laid end to end,
//! so exactly one line is visible at any time. All begins are offsets from a looping
//! no-op animation (`#loop`), which restarts the whole sequence when it ends.

use super::styles::{
    background_rect, escape_xml, fmt_num, fmt_secs_us, font_style_block, svg_open_tag,
    CHAR_WIDTH_RATIO, SVG_CLOSE,
};
use super::theme::Palette;
use crate::types::TypewriterSpec;

pub(crate) const DEFAULT_SIZE: (f64, f64) = (600.0, 60.0);
const DEFAULT_FONT_SIZE: f64 = 26.0;
const DEFAULT_SPEED_MS: f64 = 60.0;
const DEFAULT_PAUSE_MS: f64 = 1200.0;
const MIN_SPEED_MS: f64 = 10.0;
const MIN_PAUSE_MS: f64 = 200.0;
/// Upper bound for a per-character delay or a pause (one hour)
const MAX_STEP_MS: f64 = 3_600_000.0;
const DEFAULT_LINE: &str = "readme-motion";

/// Left padding before the first glyph
const PAD_X: f64 = 16.0;
const CURSOR_WIDTH: f64 = 2.0;
const BLINK_SECS: &str = "0.9s";

/// Timing of one line, in microseconds from the start of the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineWindow {
    pub begin_us: u64,
    /// Time spent revealing characters
    pub type_us: u64,
    /// Line is hidden again from here on
    pub end_us: u64,
}

/// Compute the reveal window of every line. Arithmetic saturates instead of overflowing.
pub fn line_windows(lines: &[String], speed_us: u64, pause_us: u64) -> Vec<LineWindow> {
    let mut begin_us: u64 = 0;
    lines
        .iter()
        .map(|line| {
            let chars = u64::try_from(line.chars().count()).unwrap_or(u64::MAX);
            let type_us = chars.saturating_mul(speed_us);
            let window = LineWindow {
                begin_us,
                type_us,
                end_us: begin_us.saturating_add(type_us).saturating_add(pause_us),
            };
            begin_us = window.end_us;
            window
        })
        .collect()
}

/// Length of one full pass through all lines.
pub fn total_duration_us(windows: &[LineWindow]) -> u64 {
    windows.last().map(|w| w.end_us).unwrap_or(0)
}

/// Clamp a millisecond setting into `[min, MAX_STEP_MS]` and convert it to whole microseconds.
/// Unset or non-finite values fall back to `default`.
fn clamp_to_us(value: Option<f64>, default: f64, min: f64) -> u64 {
    let ms = value
        .filter(|v| v.is_finite())
        .unwrap_or(default)
        .clamp(min, MAX_STEP_MS);
    (ms * 1000.0).round() as u64
}

/// Render a typewriter widget to SVG
pub fn render_typewriter_svg(spec: &TypewriterSpec, palette: &Palette) -> String {
    let (width, height) = spec.common.size_or(DEFAULT_SIZE);
    let font_size = spec
        .font_size
        .filter(|s| *s > 0.0)
        .unwrap_or(DEFAULT_FONT_SIZE);
    let speed_us = clamp_to_us(spec.speed_ms, DEFAULT_SPEED_MS, MIN_SPEED_MS);
    let pause_us = clamp_to_us(spec.pause_ms, DEFAULT_PAUSE_MS, MIN_PAUSE_MS);

    let default_lines = [DEFAULT_LINE.to_string()];
    let lines: &[String] = if spec.lines.is_empty() {
        &default_lines
    } else {
        &spec.lines
    };

    let windows = line_windows(lines, speed_us, pause_us);
    let text_y = (height * 0.67).floor();
    let char_w = font_size * CHAR_WIDTH_RATIO;

    let mut clips: Vec<String> = Vec::new();
    let mut groups: Vec<String> = Vec::new();

    for (idx, (line, window)) in lines.iter().zip(&windows).enumerate() {
        let end_x = PAD_X + char_w * line.chars().count() as f64;
        let begin = format!("loop.begin+{}", fmt_secs_us(window.begin_us));
        let hide = format!("loop.begin+{}", fmt_secs_us(window.end_us));
        // SMIL rejects a zero duration; empty lines get the shortest representable one.
        let type_dur = fmt_secs_us(window.type_us.max(1000));

        clips.push(format!(
            r#"    <clipPath id="tw-clip-{idx}">
      <rect x="0" y="0" width="0" height="{h}">
        <animate attributeName="width" from="0" to="{to}" dur="{type_dur}" begin="{begin}" fill="freeze"/>
      </rect>
    </clipPath>"#,
            h = fmt_num(height),
            to = fmt_num(end_x + 4.0),
        ));

        groups.push(format!(
            r#"  <g visibility="hidden">
    <text class="tw" x="{pad}" y="{ty}" fill="{text}" clip-path="url(#tw-clip-{idx})">{content}</text>
    <rect x="{pad}" y="{cy}" width="{cw}" height="{ch}" fill="{cursor}">
      <animate attributeName="x" from="{pad}" to="{end_x}" dur="{type_dur}" begin="{begin}" fill="freeze"/>
      <animate attributeName="opacity" values="1;0;1" dur="{BLINK_SECS}" repeatCount="indefinite"/>
    </rect>
    <set attributeName="visibility" to="visible" begin="{begin}"/>
    <set attributeName="visibility" to="hidden" begin="{hide}"/>
  </g>"#,
            pad = fmt_num(PAD_X),
            ty = fmt_num(text_y),
            text = palette.text,
            content = escape_xml(line),
            cy = fmt_num(text_y - font_size + 4.0),
            cw = fmt_num(CURSOR_WIDTH),
            ch = fmt_num(font_size + 6.0),
            cursor = palette.accent,
            end_x = fmt_num(end_x),
        ));
    }

    let mut parts: Vec<String> = Vec::new();
    parts.push(svg_open_tag(width, height));
    parts.push(background_rect(&palette.bg, 0.0));
    parts.push(font_style_block(
        "tw",
        spec.common.font_family(),
        font_size,
        400,
    ));
    parts.push("  <defs>".to_string());
    parts.extend(clips);
    parts.push("  </defs>".to_string());
    parts.extend(groups);
    parts.push(format!(
        r#"  <animate id="loop" attributeName="visibility" from="visible" to="visible" begin="0s;loop.end" dur="{}"/>"#,
        fmt_secs_us(total_duration_us(&windows).max(1000))
    ));
    parts.push(SVG_CLOSE.to_string());
    parts.join("\n")
}
