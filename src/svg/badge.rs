//! Status badge widget - a dimmed label next to a value pill tinted by tone.

use super::styles::{
    background_rect, escape_xml, estimate_text_width, fmt_num, font_style_block, svg_open_tag,
    FontSizes, FontWeights, SVG_CLOSE, TEXT_BASELINE_SHIFT,
};
use super::theme::Palette;
use crate::types::BadgeSpec;

pub(crate) const DEFAULT_SIZE: (f64, f64) = (240.0, 32.0);
const DEFAULT_LABEL: &str = "status";
const DEFAULT_VALUE: &str = "ok";
const PAD: f64 = 10.0;
/// Gap between the pill and the badge's outer edge
const INSET: f64 = 4.0;
const LABEL_OPACITY: &str = "0.7";
const PULSE_PERIOD: &str = "1.6s";
const DOT_RADIUS: f64 = 3.0;

/// Render a badge widget to SVG
pub fn render_badge_svg(spec: &BadgeSpec, palette: &Palette) -> String {
    let (width, height) = spec.common.size_or(DEFAULT_SIZE);
    let label = spec.label.as_deref().unwrap_or(DEFAULT_LABEL);
    let value = spec.value.as_deref().unwrap_or(DEFAULT_VALUE);
    let tone_color = palette.get(spec.tone.role());

    let label_zone = estimate_text_width(label, FontSizes::BADGE, FontWeights::LABEL) + PAD * 2.0;
    let pill_x = label_zone.min(width - INSET);
    let pill_y = INSET;
    let pill_w = (width - pill_x - INSET).max(0.0);
    let pill_h = (height - INSET * 2.0).max(0.0);
    let mid_y = height / 2.0;

    // The dot sits at the pill's left end; the value shifts right to make room.
    let dot_cx = pill_x + PAD;
    let value_cx = if spec.pulse {
        pill_x + pill_w / 2.0 + DOT_RADIUS
    } else {
        pill_x + pill_w / 2.0
    };

    let mut parts: Vec<String> = Vec::new();
    parts.push(svg_open_tag(width, height));
    parts.push(background_rect(&palette.bg, 6.0));
    parts.push(font_style_block(
        "bd",
        spec.common.font_family(),
        FontSizes::BADGE,
        FontWeights::LABEL,
    ));
    parts.push(format!(
        r#"  <text class="bd" x="{x}" y="{y}" dy="{TEXT_BASELINE_SHIFT}" fill="{fill}" opacity="{LABEL_OPACITY}">{label}</text>"#,
        x = fmt_num(PAD),
        y = fmt_num(mid_y),
        fill = palette.text,
        label = escape_xml(label),
    ));
    parts.push(format!(
        r#"  <rect x="{x}" y="{y}" width="{w}" height="{h}" rx="{r}" ry="{r}" fill="{tone_color}"/>"#,
        x = fmt_num(pill_x),
        y = fmt_num(pill_y),
        w = fmt_num(pill_w),
        h = fmt_num(pill_h),
        r = fmt_num(pill_h / 2.0),
    ));
    parts.push(format!(
        r#"  <text class="bd" x="{x}" y="{y}" dy="{TEXT_BASELINE_SHIFT}" text-anchor="middle" font-weight="{weight}" fill="{fill}">{value}</text>"#,
        x = fmt_num(value_cx),
        y = fmt_num(mid_y),
        weight = FontWeights::VALUE,
        fill = palette.bg,
        value = escape_xml(value),
    ));

    if spec.pulse {
        parts.push(format!(
            r#"  <circle cx="{cx}" cy="{cy}" r="{r}" fill="{fill}">
    <animate attributeName="r" values="{r};{r_max};{r}" dur="{PULSE_PERIOD}" repeatCount="indefinite"/>
    <animate attributeName="opacity" values="1;0.35;1" dur="{PULSE_PERIOD}" repeatCount="indefinite"/>
  </circle>"#,
            cx = fmt_num(dot_cx),
            cy = fmt_num(mid_y),
            r = fmt_num(DOT_RADIUS),
            r_max = fmt_num(DOT_RADIUS * 5.0 / 3.0),
            fill = palette.bg,
        ));
    }

    parts.push(SVG_CLOSE.to_string());
    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Tone;

    #[test]
    fn tone_selects_status_color() {
        let palette = Palette::default();
        for (tone, color) in [
            (Tone::Good, &palette.good),
            (Tone::Warn, &palette.warn),
            (Tone::Bad, &palette.bad),
        ] {
            let spec = BadgeSpec {
                tone,
                ..Default::default()
            };
            let svg = render_badge_svg(&spec, &palette);
            assert!(svg.contains(&format!(r#"fill="{}"/>"#, color)), "{:?}", tone);
        }
    }

    #[test]
    fn static_without_pulse() {
        let svg = render_badge_svg(&BadgeSpec::default(), &Palette::default());
        assert!(!svg.contains("<animate"));
        assert!(!svg.contains("<circle"));
        assert!(svg.contains(">status</text>"));
        assert!(svg.contains(">ok</text>"));
        assert!(svg.contains(r#"opacity="0.7""#));
    }

    #[test]
    fn pulse_adds_oscillating_dot() {
        let spec = BadgeSpec {
            pulse: true,
            ..Default::default()
        };
        let svg = render_badge_svg(&spec, &Palette::default());
        assert_eq!(svg.matches("<circle").count(), 1);
        assert_eq!(svg.matches(r#"repeatCount="indefinite""#).count(), 2);
        assert!(svg.contains(r#"values="3;5;3""#));
    }

    #[test]
    fn label_and_value_are_escaped() {
        let spec = BadgeSpec {
            label: Some("a<b".into()),
            value: Some("x&y".into()),
            ..Default::default()
        };
        let svg = render_badge_svg(&spec, &Palette::default());
        assert!(svg.contains(">a&lt;b</text>"));
        assert!(svg.contains(">x&amp;y</text>"));
    }
}
