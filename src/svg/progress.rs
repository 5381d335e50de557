//! Progress bar widget - a track with a bar that grows once to the target percentage.

use super::styles::{
    background_rect, escape_xml, fmt_num, font_style_block, svg_open_tag, FontSizes, FontWeights,
    SVG_CLOSE,
};
use super::theme::Palette;
use crate::types::ProgressSpec;

pub(crate) const DEFAULT_SIZE: (f64, f64) = (600.0, 60.0);
const DEFAULT_LABEL: &str = "Progress";
const PAD: f64 = 12.0;
/// Vertical room reserved above the bar for the label
const LABEL_BAND: f64 = 18.0;
const RADIUS: f64 = 6.0;
const FILL_DURATION: &str = "1.2s";

/// Geometry of the bar area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressLayout {
    pub percent: f64,
    pub inner_width: f64,
    pub inner_height: f64,
    pub bar_width: f64,
}

/// Clamp `percent` to [0, 100] and size the track and bar.
pub fn progress_layout(width: f64, height: f64, percent: f64) -> ProgressLayout {
    let percent = if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    };
    let inner_width = (width - PAD * 2.0).max(0.0);
    let inner_height = (height - PAD * 2.0 - LABEL_BAND).max(0.0);
    ProgressLayout {
        percent,
        inner_width,
        inner_height,
        bar_width: inner_width * (percent / 100.0),
    }
}

/// Render a progress widget to SVG
pub fn render_progress_svg(spec: &ProgressSpec, palette: &Palette) -> String {
    let (width, height) = spec.common.size_or(DEFAULT_SIZE);
    let layout = progress_layout(width, height, spec.percent.unwrap_or(0.0));
    let label = spec.label.as_deref().unwrap_or(DEFAULT_LABEL);

    let x = fmt_num(PAD);
    let bar_y = fmt_num(PAD + LABEL_BAND);
    let r = fmt_num(RADIUS);

    let mut parts: Vec<String> = Vec::new();
    parts.push(svg_open_tag(width, height));
    parts.push(background_rect(&palette.bg, 0.0));
    parts.push(font_style_block(
        "pl",
        spec.common.font_family(),
        FontSizes::LABEL,
        FontWeights::LABEL,
    ));
    parts.push(format!(
        r#"  <text class="pl" x="{x}" y="{y}" fill="{fill}">{label} — {percent}%</text>"#,
        y = fmt_num(PAD + 14.0),
        fill = palette.text,
        label = escape_xml(label),
        percent = fmt_num(layout.percent),
    ));
    parts.push(format!(
        r#"  <rect x="{x}" y="{bar_y}" rx="{r}" ry="{r}" width="{w}" height="{h}" fill="{fill}"/>"#,
        w = fmt_num(layout.inner_width),
        h = fmt_num(layout.inner_height),
        fill = palette.track,
    ));
    parts.push(format!(
        r#"  <rect x="{x}" y="{bar_y}" rx="{r}" ry="{r}" width="0" height="{h}" fill="{fill}">
    <animate attributeName="width" from="0" to="{to}" dur="{FILL_DURATION}" fill="freeze"/>
  </rect>"#,
        h = fmt_num(layout.inner_height),
        fill = palette.accent,
        to = fmt_num(layout.bar_width),
    ));
    parts.push(SVG_CLOSE.to_string());
    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_is_clamped() {
        assert_eq!(progress_layout(600.0, 60.0, 150.0).percent, 100.0);
        assert_eq!(progress_layout(600.0, 60.0, -5.0).percent, 0.0);
        assert_eq!(progress_layout(600.0, 60.0, f64::NAN).percent, 0.0);
    }

    #[test]
    fn bar_width_is_proportional() {
        let layout = progress_layout(600.0, 60.0, 42.0);
        assert_eq!(layout.inner_width, 576.0);
        assert_eq!(layout.inner_height, 6.0);
        assert_eq!(layout.bar_width, 576.0 * (42.0 / 100.0));

        let full = progress_layout(600.0, 60.0, 150.0);
        assert_eq!(full.bar_width, full.inner_width);
        assert_eq!(progress_layout(600.0, 60.0, -5.0).bar_width, 0.0);
    }

    #[test]
    fn renders_label_and_frozen_animation() {
        let spec = ProgressSpec {
            percent: Some(42.0),
            label: Some("Build & Test".into()),
            ..Default::default()
        };
        let svg = render_progress_svg(&spec, &Palette::default());
        assert!(svg.contains("Build &amp; Test — 42%"));
        assert!(svg.contains(r#"to="241.92" dur="1.2s" fill="freeze""#));
        assert!(!svg.contains("repeatCount"));
    }

    #[test]
    fn uses_track_and_accent_colors() {
        let palette = Palette {
            track: "#123456".into(),
            accent: "#abcdef".into(),
            ..Palette::default()
        };
        let svg = render_progress_svg(&ProgressSpec::default(), &palette);
        assert!(svg.contains(r##"fill="#123456""##));
        assert!(svg.contains(r##"fill="#abcdef""##));
        assert!(svg.contains("Progress — 0%"));
    }
}
