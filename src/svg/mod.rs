//! SVG generators - turn a widget spec and a resolved palette into an animated SVG string.
//!
//! One generator per widget type:
//! - Typewriter (render_typewriter_svg)
//! - Progress bar (render_progress_svg)
//! - Status badge (render_badge_svg)
//! - Odometer counter (render_counter_svg)
//! - Sparkline (render_sparkline_svg)
//! - Ticker marquee (render_ticker_svg)
//!
//! Pure string building with SMIL animation elements; no scripting.
//! Every generator is deterministic: identical inputs yield byte-identical output.

mod theme;
mod styles;
mod typewriter;
mod progress;
mod badge;
mod counter;
mod sparkline;
mod ticker;
mod overlay;

pub use theme::{
    resolve_palette, ColorOverrides, ColorRole, Palette, ThemeEntry, ThemeTable, FALLBACK_THEME,
};
pub use styles::{escape_xml, fmt_num, DEFAULT_FONT_FAMILY};
pub use typewriter::{line_windows, render_typewriter_svg, total_duration_us, LineWindow};
pub use progress::{progress_layout, render_progress_svg, ProgressLayout};
pub use badge::render_badge_svg;
pub use counter::{digit_columns, floor_count, render_counter_svg, zero_pad, DigitColumn};
pub use sparkline::{
    estimated_path_length, render_sparkline_svg, sparkline_points, PlotArea, Point,
};
pub use ticker::{render_ticker_svg, ticker_layout, TickerLayout};
pub use overlay::{decorate, overlay, SPARKLE_FLAG};

use crate::types::WidgetKind;

/// Width and height a widget of `kind` gets when the item doesn't set them.
pub fn default_size(kind: WidgetKind) -> (f64, f64) {
    match kind {
        WidgetKind::Typewriter => typewriter::DEFAULT_SIZE,
        WidgetKind::Progress => progress::DEFAULT_SIZE,
        WidgetKind::Badge => badge::DEFAULT_SIZE,
        WidgetKind::Counter => counter::DEFAULT_SIZE,
        WidgetKind::Sparkline => sparkline::DEFAULT_SIZE,
        WidgetKind::Ticker => ticker::DEFAULT_SIZE,
    }
}
