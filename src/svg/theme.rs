//! Theme system - named palettes, per-item color overrides and resolution.
//!
//! Resolution order for each of the eight color roles:
//!   1. item-level override, looked up through the role's alias list in priority order
//!   2. the requested theme's value (or the "dark" entry when the requested theme is absent)
//!   3. the built-in dark palette, for roles an incomplete theme leaves unset

use crate::error::{MotionError, MotionResult};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Name of the theme every lookup falls back to.
pub const FALLBACK_THEME: &str = "dark";

/// Semantic color roles a generator can consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Background,
    Text,
    Muted,
    Accent,
    Track,
    Good,
    Warn,
    Bad,
}

/// Accepted item-level field names per role, highest priority first.
const ROLE_ALIASES: [(ColorRole, &[&str]); 8] = [
    (ColorRole::Background, &["bg", "background", "bgColor"]),
    (ColorRole::Text, &["textColor", "text", "color"]),
    (ColorRole::Muted, &["mutedColor", "muted"]),
    (
        ColorRole::Accent,
        &["accent", "accentColor", "barColor", "cursorColor", "lineColor"],
    ),
    (ColorRole::Track, &["trackColor", "track"]),
    (ColorRole::Good, &["goodColor", "good"]),
    (ColorRole::Warn, &["warnColor", "warn"]),
    (ColorRole::Bad, &["badColor", "bad"]),
];

impl ColorRole {
    pub const ALL: [ColorRole; 8] = [
        ColorRole::Background,
        ColorRole::Text,
        ColorRole::Muted,
        ColorRole::Accent,
        ColorRole::Track,
        ColorRole::Good,
        ColorRole::Warn,
        ColorRole::Bad,
    ];

    /// Item-level field names that override this role, in lookup order.
    pub fn aliases(self) -> &'static [&'static str] {
        ROLE_ALIASES
            .iter()
            .find(|(role, _)| *role == self)
            .map(|(_, aliases)| *aliases)
            .unwrap_or(&[])
    }
}

/// A fully resolved set of concrete colors for one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub bg: String,
    pub text: String,
    pub muted: String,
    pub accent: String,
    pub track: String,
    pub good: String,
    pub warn: String,
    pub bad: String,
}

impl Palette {
    pub fn get(&self, role: ColorRole) -> &str {
        match role {
            ColorRole::Background => &self.bg,
            ColorRole::Text => &self.text,
            ColorRole::Muted => &self.muted,
            ColorRole::Accent => &self.accent,
            ColorRole::Track => &self.track,
            ColorRole::Good => &self.good,
            ColorRole::Warn => &self.warn,
            ColorRole::Bad => &self.bad,
        }
    }

    fn slot_mut(&mut self, role: ColorRole) -> &mut String {
        match role {
            ColorRole::Background => &mut self.bg,
            ColorRole::Text => &mut self.text,
            ColorRole::Muted => &mut self.muted,
            ColorRole::Accent => &mut self.accent,
            ColorRole::Track => &mut self.track,
            ColorRole::Good => &mut self.good,
            ColorRole::Warn => &mut self.warn,
            ColorRole::Bad => &mut self.bad,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        BUILTIN_DARK.clone()
    }
}

lazy_static! {
    static ref BUILTIN_DARK: Palette = Palette {
        bg: "#0d1117".to_string(),
        text: "#E6EDF3".to_string(),
        muted: "#8B949E".to_string(),
        accent: "#00E5FF".to_string(),
        track: "#1f2937".to_string(),
        good: "#2EA043".to_string(),
        warn: "#D29922".to_string(),
        bad: "#F85149".to_string(),
    };
}

/// A theme as written in a theme file. Roles may be missing; unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muted: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub good: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bad: Option<String>,
}

impl ThemeEntry {
    pub fn get(&self, role: ColorRole) -> Option<&str> {
        let value = match role {
            ColorRole::Background => &self.bg,
            ColorRole::Text => &self.text,
            ColorRole::Muted => &self.muted,
            ColorRole::Accent => &self.accent,
            ColorRole::Track => &self.track,
            ColorRole::Good => &self.good,
            ColorRole::Warn => &self.warn,
            ColorRole::Bad => &self.bad,
        };
        value.as_deref().filter(|v| !v.is_empty())
    }
}

impl From<&Palette> for ThemeEntry {
    fn from(palette: &Palette) -> Self {
        Self {
            bg: Some(palette.bg.clone()),
            text: Some(palette.text.clone()),
            muted: Some(palette.muted.clone()),
            accent: Some(palette.accent.clone()),
            track: Some(palette.track.clone()),
            good: Some(palette.good.clone()),
            warn: Some(palette.warn.clone()),
            bad: Some(palette.bad.clone()),
        }
    }
}

/// Theme name → palette template. Read-only during a render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeTable {
    themes: BTreeMap<String, ThemeEntry>,
}

impl ThemeTable {
    /// The table used when no theme file is supplied: a single "dark" entry.
    pub fn builtin() -> Self {
        let mut table = Self::default();
        table.insert(FALLBACK_THEME, ThemeEntry::from(&*BUILTIN_DARK));
        table
    }

    pub fn from_json(input: &str) -> MotionResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn insert(&mut self, name: impl Into<String>, entry: ThemeEntry) {
        self.themes.insert(name.into(), entry);
    }

    pub fn get(&self, name: &str) -> Option<&ThemeEntry> {
        self.themes.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }
}

/// Item-level color overrides, keyed by the field name used in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorOverrides {
    fields: BTreeMap<String, String>,
}

impl ColorOverrides {
    /// Collect override candidates from loosely-typed item fields. Nulls and non-strings are dropped.
    pub fn from_fields(fields: &BTreeMap<String, serde_json::Value>) -> Self {
        let fields = fields
            .iter()
            .filter_map(|(key, value)| value.as_str().map(|s| (key.clone(), s.to_string())))
            .collect();
        Self { fields }
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// First non-empty override for `role`, checking aliases in priority order.
    pub fn get(&self, role: ColorRole) -> Option<&str> {
        role.aliases()
            .iter()
            .filter_map(|alias| self.fields.get(*alias))
            .map(String::as_str)
            .find(|v| !v.is_empty())
    }
}

/// Merge a named theme with item overrides into one concrete palette.
pub fn resolve_palette(
    themes: &ThemeTable,
    requested: &str,
    overrides: &ColorOverrides,
) -> MotionResult<Palette> {
    let theme = match themes.get(requested) {
        Some(theme) => theme,
        None => {
            tracing::debug!(requested, "theme not found, falling back to '{}'", FALLBACK_THEME);
            themes
                .get(FALLBACK_THEME)
                .ok_or_else(|| MotionError::theme_resolution(requested))?
        }
    };

    let mut palette = BUILTIN_DARK.clone();
    for role in ColorRole::ALL {
        let value = match (overrides.get(role), theme.get(role)) {
            (Some(value), _) => value,
            (None, Some(value)) => value,
            (None, None) => {
                tracing::debug!(requested, ?role, "theme leaves role unset, using built-in color");
                continue;
            }
        };
        *palette.slot_mut(role) = value.to_string();
    }
    Ok(palette)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with(name: &str, entry: ThemeEntry) -> ThemeTable {
        let mut table = ThemeTable::default();
        table.insert(name, entry);
        table
    }

    #[test]
    fn item_override_beats_theme() {
        let table = table_with(
            "dark",
            ThemeEntry {
                accent: Some("#111".into()),
                ..Default::default()
            },
        );
        let overrides = ColorOverrides::default().with("accent", "#222");
        let palette = resolve_palette(&table, "dark", &overrides).unwrap();
        assert_eq!(palette.accent, "#222");

        let palette = resolve_palette(&table, "dark", &ColorOverrides::default()).unwrap();
        assert_eq!(palette.accent, "#111");
    }

    #[test]
    fn aliases_are_checked_in_priority_order() {
        let overrides = ColorOverrides::default()
            .with("cursorColor", "#333")
            .with("barColor", "#444");
        assert_eq!(overrides.get(ColorRole::Accent), Some("#444"));

        let overrides = ColorOverrides::default().with("background", "transparent");
        assert_eq!(overrides.get(ColorRole::Background), Some("transparent"));
    }

    #[test]
    fn non_string_and_null_fields_are_ignored() {
        let mut fields = BTreeMap::new();
        fields.insert("bg".to_string(), serde_json::Value::Null);
        fields.insert("background".to_string(), serde_json::json!("#abcdef"));
        fields.insert("textColor".to_string(), serde_json::json!(12));
        let overrides = ColorOverrides::from_fields(&fields);
        assert_eq!(overrides.get(ColorRole::Background), Some("#abcdef"));
        assert_eq!(overrides.get(ColorRole::Text), None);
    }

    #[test]
    fn missing_theme_falls_back_to_dark() {
        let table = ThemeTable::builtin();
        let palette = resolve_palette(&table, "solarized", &ColorOverrides::default()).unwrap();
        assert_eq!(palette, Palette::default());
    }

    #[test]
    fn missing_theme_and_fallback_is_an_error() {
        let table = table_with("light", ThemeEntry::default());
        let err = resolve_palette(&table, "neon", &ColorOverrides::default()).unwrap_err();
        assert!(matches!(err, MotionError::ThemeResolution { ref requested } if requested == "neon"));
    }

    #[test]
    fn incomplete_theme_fills_from_builtin() {
        let table = table_with(
            "light",
            ThemeEntry {
                bg: Some("#ffffff".into()),
                text: Some(String::new()),
                ..Default::default()
            },
        );
        let palette = resolve_palette(&table, "light", &ColorOverrides::default()).unwrap();
        assert_eq!(palette.bg, "#ffffff");
        assert_eq!(palette.text, Palette::default().text);
        for role in ColorRole::ALL {
            assert!(!palette.get(role).is_empty());
        }
    }

    #[test]
    fn theme_table_ignores_unknown_keys() {
        let table = ThemeTable::from_json(
            r##"{ "ocean": { "bg": "#001", "accent": "#0ff", "shadow": "#000" } }"##,
        )
        .unwrap();
        let ocean = table.get("ocean").unwrap();
        assert_eq!(ocean.get(ColorRole::Accent), Some("#0ff"));
        assert_eq!(ocean.get(ColorRole::Track), None);
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["ocean"]);
    }
}
