//! Type definitions for render configuration and widget specifications

use crate::error::{MotionError, MotionResult};
use crate::svg::{ColorOverrides, ColorRole};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

/// Treat an explicit `null` like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Fields every widget accepts, whatever its type.
///
/// Fields not claimed by the widget or by this struct land in `extra`, which is where
/// color overrides (`bg`, `textColor`, `barColor`, ...) are picked up from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonOptions {
    /// Output file name, relative to the output directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Per-item theme, takes precedence over the config-level theme
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl CommonOptions {
    pub fn overrides(&self) -> ColorOverrides {
        ColorOverrides::from_fields(&self.extra)
    }

    /// Set a loosely-typed field, e.g. a color override.
    pub fn with_field(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(key.to_string(), value.into());
        self
    }

    pub(crate) fn size_or(&self, (width, height): (f64, f64)) -> (f64, f64) {
        (
            self.width.filter(|w| *w > 0.0).unwrap_or(width),
            self.height.filter(|h| *h > 0.0).unwrap_or(height),
        )
    }

    pub(crate) fn font_family(&self) -> &str {
        self.font_family
            .as_deref()
            .unwrap_or(crate::svg::DEFAULT_FONT_FAMILY)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypewriterSpec {
    #[serde(default, deserialize_with = "null_as_default")]
    pub lines: Vec<String>,
    /// Delay per character in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed_ms: Option<f64>,
    /// Hold time after a line finishes typing, in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pause_ms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(flatten)]
    pub common: CommonOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(flatten)]
    pub common: CommonOptions,
}

/// Status tone of a badge, selecting one of the three status colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Good,
    Warn,
    Bad,
}

impl Tone {
    pub fn role(self) -> ColorRole {
        match self {
            Tone::Good => ColorRole::Good,
            Tone::Warn => ColorRole::Warn,
            Tone::Bad => ColorRole::Bad,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tone: Tone,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pulse: bool,
    #[serde(flatten)]
    pub common: CommonOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digits: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(flatten)]
    pub common: CommonOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SparklineSpec {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(flatten)]
    pub common: CommonOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Horizontal speed in px/s
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    #[serde(flatten)]
    pub common: CommonOptions,
}

/// The widget types this tool knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Typewriter,
    Progress,
    Badge,
    Counter,
    Sparkline,
    Ticker,
}

/// `type` tag ↔ widget kind.
const WIDGET_TAGS: [(&str, WidgetKind); 6] = [
    ("typewriter", WidgetKind::Typewriter),
    ("progress", WidgetKind::Progress),
    ("badge", WidgetKind::Badge),
    ("counter", WidgetKind::Counter),
    ("sparkline", WidgetKind::Sparkline),
    ("ticker", WidgetKind::Ticker),
];

impl WidgetKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        WIDGET_TAGS
            .iter()
            .find(|(name, _)| *name == tag)
            .map(|(_, kind)| *kind)
    }

    pub fn tag(self) -> &'static str {
        WIDGET_TAGS
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(name, _)| *name)
            .unwrap_or("widget")
    }
}

impl std::fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// A fully parsed widget, one variant per generator.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetSpec {
    Typewriter(TypewriterSpec),
    Progress(ProgressSpec),
    Badge(BadgeSpec),
    Counter(CounterSpec),
    Sparkline(SparklineSpec),
    Ticker(TickerSpec),
}

impl WidgetSpec {
    pub fn kind(&self) -> WidgetKind {
        match self {
            WidgetSpec::Typewriter(_) => WidgetKind::Typewriter,
            WidgetSpec::Progress(_) => WidgetKind::Progress,
            WidgetSpec::Badge(_) => WidgetKind::Badge,
            WidgetSpec::Counter(_) => WidgetKind::Counter,
            WidgetSpec::Sparkline(_) => WidgetKind::Sparkline,
            WidgetSpec::Ticker(_) => WidgetKind::Ticker,
        }
    }

    pub fn common(&self) -> &CommonOptions {
        match self {
            WidgetSpec::Typewriter(spec) => &spec.common,
            WidgetSpec::Progress(spec) => &spec.common,
            WidgetSpec::Badge(spec) => &spec.common,
            WidgetSpec::Counter(spec) => &spec.common,
            WidgetSpec::Sparkline(spec) => &spec.common,
            WidgetSpec::Ticker(spec) => &spec.common,
        }
    }

    /// Rendered width and height, after per-widget defaults.
    pub fn size(&self) -> (f64, f64) {
        self.common().size_or(crate::svg::default_size(self.kind()))
    }

    /// Output path relative to the output directory: the item's `file`, or `<type>.svg`.
    ///
    /// Absolute paths and `..` components are rejected so every document lands inside `outDir`.
    pub fn file_name(&self) -> MotionResult<PathBuf> {
        let name = match self.common().file.as_deref().filter(|f| !f.is_empty()) {
            Some(file) => file.to_string(),
            None => return Ok(PathBuf::from(format!("{}.svg", self.kind()))),
        };
        let path = Path::new(&name);
        let escapes = path.components().any(|c| {
            matches!(
                c,
                Component::RootDir | Component::Prefix(_) | Component::ParentDir
            )
        });
        if escapes || path.is_absolute() {
            return Err(MotionError::config(format!(
                "{} file '{}' must be a relative path inside the output directory",
                self.kind(),
                name
            )));
        }
        Ok(path.to_path_buf())
    }
}

/// One entry of the `items` list.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigItem {
    Widget(WidgetSpec),
    /// An item whose `type` is missing or not a known widget; skipped at render time.
    Unknown { type_name: Option<String> },
}

/// Top-level render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Default theme name for items that don't name one
    pub theme: String,
    pub out_dir: PathBuf,
    pub easter_egg: Option<String>,
    pub items: Vec<ConfigItem>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            theme: crate::svg::FALLBACK_THEME.to_string(),
            out_dir: PathBuf::from("assets"),
            easter_egg: None,
            items: Vec::new(),
        }
    }
}
