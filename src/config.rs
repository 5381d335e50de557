//! Loading of render configurations and theme tables from JSON.

use crate::error::{MotionError, MotionResult};
use crate::svg::ThemeTable;
use crate::types::{
    BadgeSpec, ConfigItem, CounterSpec, ProgressSpec, RenderConfig, SparklineSpec, TickerSpec,
    TypewriterSpec, WidgetKind, WidgetSpec,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Theme file looked up next to the config when none is given explicitly.
pub const THEMES_FILE: &str = "themes.json";

/// File written by the `--init` scaffold.
pub const SAMPLE_CONFIG_FILE: &str = "motion.config.json";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfig {
    #[serde(default)]
    theme: Option<String>,
    #[serde(default)]
    out_dir: Option<String>,
    #[serde(default)]
    easter_egg: Option<String>,
    #[serde(default)]
    items: Option<Value>,
}

/// Parse a render configuration from JSON text.
pub fn parse_config(input: &str) -> MotionResult<RenderConfig> {
    let root: Value = serde_json::from_str(input)?;
    if !root.is_object() {
        return Err(MotionError::config("top level must be a JSON object"));
    }
    let raw: RawConfig = serde_json::from_value(root)
        .map_err(|e| MotionError::config(format!("invalid top-level field: {}", e)))?;

    let items = match raw.items {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| parse_item(index, item))
            .collect::<MotionResult<Vec<_>>>()?,
        Some(_) => return Err(MotionError::config("`items` must be an array")),
    };

    let defaults = RenderConfig::default();
    Ok(RenderConfig {
        theme: raw.theme.filter(|t| !t.is_empty()).unwrap_or(defaults.theme),
        out_dir: raw
            .out_dir
            .filter(|d| !d.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.out_dir),
        easter_egg: raw.easter_egg,
        items,
    })
}

/// Parse one entry of `items`. Unknown or missing `type` tags are kept as `ConfigItem::Unknown`.
pub(crate) fn parse_item(index: usize, item: Value) -> MotionResult<ConfigItem> {
    if !item.is_object() {
        return Err(MotionError::config(format!("item {} is not an object", index)));
    }
    let type_name = item.get("type").and_then(Value::as_str).map(str::to_string);
    let kind = match type_name.as_deref().and_then(WidgetKind::from_tag) {
        Some(kind) => kind,
        None => return Ok(ConfigItem::Unknown { type_name }),
    };

    let invalid = |e: serde_json::Error| {
        MotionError::config(format!("item {} ({}): {}", index, kind, e))
    };
    let spec = match kind {
        WidgetKind::Typewriter => {
            WidgetSpec::Typewriter(serde_json::from_value::<TypewriterSpec>(item).map_err(invalid)?)
        }
        WidgetKind::Progress => {
            WidgetSpec::Progress(serde_json::from_value::<ProgressSpec>(item).map_err(invalid)?)
        }
        WidgetKind::Badge => {
            WidgetSpec::Badge(serde_json::from_value::<BadgeSpec>(item).map_err(invalid)?)
        }
        WidgetKind::Counter => {
            WidgetSpec::Counter(serde_json::from_value::<CounterSpec>(item).map_err(invalid)?)
        }
        WidgetKind::Sparkline => {
            WidgetSpec::Sparkline(serde_json::from_value::<SparklineSpec>(item).map_err(invalid)?)
        }
        WidgetKind::Ticker => {
            WidgetSpec::Ticker(serde_json::from_value::<TickerSpec>(item).map_err(invalid)?)
        }
    };
    spec.file_name()?;
    Ok(ConfigItem::Widget(spec))
}

/// Read and parse a render configuration file.
pub fn load_config(path: &Path) -> MotionResult<RenderConfig> {
    let text = fs::read_to_string(path).map_err(|e| MotionError::io(path, e))?;
    parse_config(&text)
}

/// Pick the theme table for a run.
///
/// An explicit path must exist. Otherwise `themes.json` beside the config is used when present,
/// and the built-in table when not.
pub fn load_themes(explicit: Option<&Path>, config_path: &Path) -> MotionResult<ThemeTable> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let sibling = config_path
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .join(THEMES_FILE);
            if !sibling.is_file() {
                tracing::debug!("no {} beside config, using built-in themes", THEMES_FILE);
                return Ok(ThemeTable::builtin());
            }
            sibling
        }
    };
    tracing::debug!(path = %path.display(), "loading theme table");
    let text = fs::read_to_string(&path).map_err(|e| MotionError::io(&path, e))?;
    ThemeTable::from_json(&text)
}

/// Sample configuration showing every widget type.
pub fn sample_config() -> Value {
    json!({
        "theme": "dark",
        "outDir": "assets",
        "items": [
            {
                "type": "typewriter",
                "file": "typing.svg",
                "width": 600,
                "height": 60,
                "fontFamily": "Inter, Segoe UI, Roboto, Arial",
                "fontSize": 26,
                "bg": "transparent",
                "lines": ["Hello, world!", "Welcome to readme-motion."],
                "speedMs": 70,
                "pauseMs": 1000
            },
            {
                "type": "progress",
                "file": "progress-demo.svg",
                "label": "Demo Progress",
                "percent": 42
            },
            {
                "type": "badge",
                "file": "build-badge.svg",
                "label": "build",
                "value": "passing",
                "tone": "good",
                "pulse": true
            },
            {
                "type": "counter",
                "file": "stars.svg",
                "label": "stars",
                "from": 0,
                "to": 1280,
                "durationMs": 1600
            },
            {
                "type": "sparkline",
                "file": "downloads.svg",
                "label": "weekly downloads",
                "data": [12, 18, 9, 22, 30, 26, 41]
            },
            {
                "type": "ticker",
                "file": "news.svg",
                "text": "v0.1.0 released — animated SVG widgets for your README",
                "speed": 90
            }
        ]
    })
}

/// Write the sample configuration to `path`, creating parent directories as needed.
pub fn write_sample_config(path: &Path) -> MotionResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| MotionError::io(parent, e))?;
    }
    let text = serde_json::to_string_pretty(&sample_config())?;
    fs::write(path, text).map_err(|e| MotionError::io(path, e))?;
    tracing::info!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Tone;

    #[test]
    fn missing_items_is_a_noop() {
        let config = parse_config("{}").unwrap();
        assert!(config.items.is_empty());
        assert_eq!(config.theme, "dark");
        assert_eq!(config.out_dir, PathBuf::from("assets"));
        assert_eq!(config.easter_egg, None);

        let config = parse_config(r#"{ "items": null }"#).unwrap();
        assert!(config.items.is_empty());
    }

    #[test]
    fn non_array_items_is_a_config_error() {
        let err = parse_config(r#"{ "items": { "type": "badge" } }"#).unwrap_err();
        assert!(matches!(err, MotionError::Config(_)));
    }

    #[test]
    fn non_object_top_level_is_a_config_error() {
        let err = parse_config("[1, 2]").unwrap_err();
        assert!(matches!(err, MotionError::Config(_)));
    }

    #[test]
    fn syntax_errors_surface_as_json_errors() {
        let err = parse_config("{ items: ").unwrap_err();
        assert!(matches!(err, MotionError::Json(_)));
    }

    #[test]
    fn unknown_and_missing_types_are_kept_for_the_driver() {
        let config = parse_config(
            r#"{ "items": [ { "type": "bogus" }, { "label": "no type" }, { "type": "badge" } ] }"#,
        )
        .unwrap();
        assert_eq!(
            config.items[0],
            ConfigItem::Unknown {
                type_name: Some("bogus".into())
            }
        );
        assert_eq!(config.items[1], ConfigItem::Unknown { type_name: None });
        assert!(matches!(
            config.items[2],
            ConfigItem::Widget(WidgetSpec::Badge(_))
        ));
    }

    #[test]
    fn widget_fields_and_overrides_are_parsed() {
        let config = parse_config(
            r##"{
                "theme": "ocean",
                "outDir": "out",
                "easterEgg": "sparkles",
                "items": [
                    { "type": "badge", "file": "b.svg", "label": "ci", "value": "red",
                      "tone": "bad", "pulse": true, "width": 200, "badColor": "#f00" }
                ]
            }"##,
        )
        .unwrap();
        assert_eq!(config.theme, "ocean");
        assert_eq!(config.out_dir, PathBuf::from("out"));
        assert_eq!(config.easter_egg.as_deref(), Some("sparkles"));

        let badge = match &config.items[0] {
            ConfigItem::Widget(WidgetSpec::Badge(badge)) => badge,
            other => panic!("Expected badge, got {:?}", other),
        };
        assert_eq!(badge.tone, Tone::Bad);
        assert!(badge.pulse);
        assert_eq!(badge.common.width, Some(200.0));
        assert_eq!(badge.common.file.as_deref(), Some("b.svg"));
        assert_eq!(
            badge.common.overrides().get(crate::svg::ColorRole::Bad),
            Some("#f00")
        );
    }

    #[test]
    fn ticker_text_is_content_not_a_color() {
        let config =
            parse_config(r#"{ "items": [ { "type": "ticker", "text": "hello" } ] }"#).unwrap();
        let ticker = match &config.items[0] {
            ConfigItem::Widget(WidgetSpec::Ticker(ticker)) => ticker,
            other => panic!("Expected ticker, got {:?}", other),
        };
        assert_eq!(ticker.text.as_deref(), Some("hello"));
        assert_eq!(
            ticker.common.overrides().get(crate::svg::ColorRole::Text),
            None
        );
    }

    #[test]
    fn malformed_known_item_names_its_index() {
        let err = parse_config(
            r#"{ "items": [ { "type": "badge" }, { "type": "progress", "percent": "lots" } ] }"#,
        )
        .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("item 1 (progress)"), "{}", msg);
    }

    #[test]
    fn null_fields_fall_back_to_defaults() {
        let config = parse_config(
            r#"{ "items": [
                { "type": "typewriter", "lines": null },
                { "type": "sparkline", "data": null },
                { "type": "badge", "tone": null, "pulse": null }
            ] }"#,
        )
        .unwrap();
        match &config.items[0] {
            ConfigItem::Widget(WidgetSpec::Typewriter(tw)) => assert!(tw.lines.is_empty()),
            other => panic!("Expected typewriter, got {:?}", other),
        }
        match &config.items[1] {
            ConfigItem::Widget(WidgetSpec::Sparkline(spark)) => assert!(spark.data.is_empty()),
            other => panic!("Expected sparkline, got {:?}", other),
        }
        match &config.items[2] {
            ConfigItem::Widget(WidgetSpec::Badge(badge)) => {
                assert_eq!(badge.tone, Tone::Good);
                assert!(!badge.pulse);
            }
            other => panic!("Expected badge, got {:?}", other),
        }
    }

    #[test]
    fn escaping_file_paths_are_rejected() {
        for file in ["/tmp/escaped.svg", "../escaped.svg", "a/../../b.svg"] {
            let input = json!({ "items": [ { "type": "badge", "file": file } ] }).to_string();
            let err = parse_config(&input).unwrap_err();
            assert!(matches!(err, MotionError::Config(_)), "{}", file);
        }
        let ok = parse_config(r#"{ "items": [ { "type": "badge", "file": "badges/ci.svg" } ] }"#);
        assert!(ok.is_ok());
    }

    #[test]
    fn sample_config_parses_into_every_widget() {
        let config = parse_config(&sample_config().to_string()).unwrap();
        let kinds: Vec<_> = config
            .items
            .iter()
            .map(|item| match item {
                ConfigItem::Widget(spec) => spec.kind(),
                other => panic!("Unexpected {:?}", other),
            })
            .collect();
        assert_eq!(
            kinds,
            vec![
                WidgetKind::Typewriter,
                WidgetKind::Progress,
                WidgetKind::Badge,
                WidgetKind::Counter,
                WidgetKind::Sparkline,
                WidgetKind::Ticker,
            ]
        );
    }
}
