//! Sparkline widget - a polyline through scaled samples, drawn in once with a dash reveal.

use super::styles::{
    background_rect, escape_xml, fmt_num, font_style_block, svg_open_tag, FontSizes, FontWeights,
    SVG_CLOSE,
};
use super::theme::Palette;
use crate::types::SparklineSpec;

pub(crate) const DEFAULT_SIZE: (f64, f64) = (320.0, 80.0);
const SAMPLE_DATA: [f64; 10] = [3.0, 5.0, 4.0, 6.0, 8.0, 7.0, 9.0, 12.0, 10.0, 13.0];
const PAD: f64 = 12.0;
const LABEL_BAND: f64 = 16.0;
/// Added per sample on top of the bounding diagonal when estimating path length
const LENGTH_PER_POINT: f64 = 8.0;
const REVEAL_DURATION: &str = "1.4s";
const STROKE_WIDTH: f64 = 2.0;

/// A 2D point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// The rectangle samples are scaled into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Map samples onto `area`: index spreads across the width, value across the height (inverted).
pub fn sparkline_points(data: &[f64], area: PlotArea) -> Vec<Point> {
    let min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    // Halved so the span stays finite even for data spanning most of the f64 range.
    let half_span = max * 0.5 - min * 0.5;
    let scale = |v: f64| {
        if half_span > 0.0 {
            (v * 0.5 - min * 0.5) / half_span
        } else {
            0.0
        }
    };
    let step = if data.len() > 1 {
        area.width / (data.len() - 1) as f64
    } else {
        0.0
    };

    data.iter()
        .enumerate()
        .map(|(i, v)| Point {
            x: area.x + step * i as f64,
            y: area.y + area.height - scale(*v) * area.height,
        })
        .collect()
}

/// Approximate path length for the dash animation. Deliberately not the exact arc length.
pub fn estimated_path_length(area: PlotArea, points: usize) -> f64 {
    (area.width.powi(2) + area.height.powi(2)).sqrt() + LENGTH_PER_POINT * points as f64
}

/// Convert points to SVG path data: "M x1,y1 L x2,y2 ..."
fn points_to_path(points: &[Point]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let cmd = if i == 0 { 'M' } else { 'L' };
            format!("{}{},{}", cmd, fmt_num(p.x), fmt_num(p.y))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a sparkline widget to SVG
pub fn render_sparkline_svg(spec: &SparklineSpec, palette: &Palette) -> String {
    let (width, height) = spec.common.size_or(DEFAULT_SIZE);
    let data: &[f64] = if spec.data.is_empty() {
        &SAMPLE_DATA
    } else {
        &spec.data
    };
    let label = spec.label.as_deref().unwrap_or("");
    let top = if label.is_empty() {
        PAD
    } else {
        PAD + LABEL_BAND
    };
    let area = PlotArea {
        x: PAD,
        y: top,
        width: (width - PAD * 2.0).max(0.0),
        height: (height - top - PAD).max(0.0),
    };

    let points = sparkline_points(data, area);
    let length = fmt_num(estimated_path_length(area, points.len()));

    let mut parts: Vec<String> = Vec::new();
    parts.push(svg_open_tag(width, height));
    parts.push(background_rect(&palette.bg, 0.0));
    if !label.is_empty() {
        parts.push(font_style_block(
            "sl",
            spec.common.font_family(),
            FontSizes::SPARK_LABEL,
            FontWeights::LABEL,
        ));
        parts.push(format!(
            r#"  <text class="sl" x="{x}" y="{y}" fill="{fill}">{label}</text>"#,
            x = fmt_num(PAD),
            y = fmt_num(PAD + FontSizes::SPARK_LABEL),
            fill = palette.muted,
            label = escape_xml(label),
        ));
    }
    parts.push(format!(
        r#"  <path d="{d}" fill="none" stroke="{stroke}" stroke-width="{sw}" stroke-linecap="round" stroke-linejoin="round" stroke-dasharray="{length}" stroke-dashoffset="{length}">
    <animate attributeName="stroke-dashoffset" from="{length}" to="0" dur="{REVEAL_DURATION}" fill="freeze"/>
  </path>"#,
        d = points_to_path(&points),
        stroke = palette.accent,
        sw = fmt_num(STROKE_WIDTH),
    ));
    parts.push(SVG_CLOSE.to_string());
    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: PlotArea = PlotArea {
        x: 10.0,
        y: 20.0,
        width: 100.0,
        height: 50.0,
    };

    #[test]
    fn flat_data_maps_to_one_row() {
        let points = sparkline_points(&[5.0, 5.0, 5.0], AREA);
        assert_eq!(points.len(), 3);
        assert!(points.iter().all(|p| p.y.is_finite()));
        assert!(points.iter().all(|p| p.y == points[0].y));
        assert_eq!(points[0].y, 70.0);
    }

    #[test]
    fn extremes_touch_area_edges() {
        let points = sparkline_points(&[1.0, 3.0, 2.0], AREA);
        assert_eq!(points[0], Point { x: 10.0, y: 70.0 });
        assert_eq!(points[1], Point { x: 60.0, y: 20.0 });
        assert_eq!(points[2], Point { x: 110.0, y: 45.0 });
    }

    #[test]
    fn extreme_range_stays_finite() {
        let points = sparkline_points(&[1e308, -1e308, 0.0], AREA);
        assert_eq!(points[0].y, 20.0);
        assert_eq!(points[1].y, 70.0);
        assert_eq!(points[2].y, 45.0);

        let spec = SparklineSpec {
            data: vec![1e308, -1e308],
            ..Default::default()
        };
        let svg = render_sparkline_svg(&spec, &Palette::default());
        assert!(!svg.contains("NaN"));
        assert!(!svg.contains("inf"));
    }

    #[test]
    fn single_sample_stays_at_left_edge() {
        let points = sparkline_points(&[42.0], AREA);
        assert_eq!(points, vec![Point { x: 10.0, y: 70.0 }]);
    }

    #[test]
    fn path_length_is_diagonal_plus_per_point() {
        let area = PlotArea {
            x: 0.0,
            y: 0.0,
            width: 30.0,
            height: 40.0,
        };
        assert_eq!(estimated_path_length(area, 4), 50.0 + 32.0);
    }

    #[test]
    fn empty_data_uses_sample() {
        let svg = render_sparkline_svg(&SparklineSpec::default(), &Palette::default());
        assert_eq!(svg.matches(" L").count(), SAMPLE_DATA.len() - 1);
        assert!(svg.contains(r#"dur="1.4s" fill="freeze""#));
        assert!(!svg.contains("<text"));
    }

    #[test]
    fn label_is_escaped_and_muted() {
        let spec = SparklineSpec {
            data: vec![1.0, 2.0],
            label: Some("p<50".into()),
            ..Default::default()
        };
        let palette = Palette::default();
        let svg = render_sparkline_svg(&spec, &palette);
        assert!(svg.contains(&format!(r#"fill="{}">p&lt;50</text>"#, palette.muted)));
    }
}
