//! readme-motion - Animated SVG widgets for README files
//!
//! This library turns a declarative widget description into a self-contained SVG document
//! whose animation is expressed with SMIL elements, so it plays inside a plain `<img>` tag.
//!
//! # Example
//!
//! ```rust
//! use readme_motion::render_to_svg;
//!
//! let svg = render_to_svg(r#"{ "type": "progress", "label": "Docs", "percent": 60 }"#).unwrap();
//! assert!(svg.contains("Docs — 60%"));
//! ```
//!
//! # Supported Widget Types
//!
//! - Typewriter (lines typed out in a loop)
//! - Progress bar
//! - Status badge (optionally pulsing)
//! - Odometer counter
//! - Sparkline
//! - Ticker marquee

pub mod types;
pub mod error;
pub mod config;
pub mod svg;
pub mod render;

pub use config::{load_config, load_themes, parse_config, sample_config, write_sample_config};
pub use error::{MotionError, MotionResult};
pub use render::{render_config, render_widget, render_with_theme, RenderSummary};
pub use types::*;

/// Render a single widget, given as a JSON object, with the built-in dark theme.
///
/// # Example
/// ```rust
/// let svg = readme_motion::render_to_svg(r#"{ "type": "badge", "value": "passing" }"#).unwrap();
/// assert!(svg.starts_with("<?xml"));
/// ```
pub fn render_to_svg(item: &str) -> MotionResult<String> {
    let value: serde_json::Value = serde_json::from_str(item)?;
    match config::parse_item(0, value)? {
        ConfigItem::Widget(spec) => {
            render_with_theme(&spec, &svg::ThemeTable::builtin(), svg::FALLBACK_THEME, None)
        }
        ConfigItem::Unknown { type_name } => Err(MotionError::config(format!(
            "unknown widget type: {}",
            type_name.as_deref().unwrap_or("<missing>")
        ))),
    }
}
