//! Theme token domain types
//!
//! The front-end colour tokens live in `assets/theme.yaml` as plain data.
//! This module parses and validates them and renders the styling tool's
//! config module (`tailwind.config.js`) from them.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::ThemeError;

/// Theme shipped with the binary
const BUILTIN_THEME: &str = include_str!("../../assets/theme.yaml");

/// Shade steps every colour scale must define
pub const SHADE_STEPS: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

static HEX_COLOR: OnceLock<Regex> = OnceLock::new();

fn hex_color() -> &'static Regex {
    HEX_COLOR.get_or_init(|| Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap())
}

/// Complete theme definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Dark mode strategy (`class` or `media`)
    #[serde(default = "default_dark_mode")]
    pub dark_mode: String,

    /// Globs the styling tool scans for class usage
    pub content: Vec<String>,

    pub colors: ColorTokens,
}

fn default_dark_mode() -> String {
    "class".to_string()
}

/// Semantic colour groups
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorTokens {
    pub primary: ShadeScale,
    pub secondary: ShadeScale,
    pub dark: DarkPalette,
}

/// A `DEFAULT` colour plus numbered shades
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShadeScale {
    pub default: String,
    pub shades: BTreeMap<u16, String>,
}

/// Surface colours used in dark mode
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DarkPalette {
    pub background: String,
    pub card: String,
    pub border: String,
    pub text: String,
    pub heading: String,
}

impl DarkPalette {
    /// Field name (as written in the token file) and value pairs
    pub fn tokens(&self) -> [(&'static str, &str); 5] {
        [
            ("background", self.background.as_str()),
            ("card", self.card.as_str()),
            ("border", self.border.as_str()),
            ("text", self.text.as_str()),
            ("heading", self.heading.as_str()),
        ]
    }

    /// Rendered key and value pairs, in render order
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("bg", self.background.as_str()),
            ("card", self.card.as_str()),
            ("border", self.border.as_str()),
            ("text", self.text.as_str()),
            ("heading", self.heading.as_str()),
        ]
    }
}

impl ThemeConfig {
    /// Parse the embedded theme
    pub fn builtin() -> Result<Self, ThemeError> {
        Self::from_yaml(BUILTIN_THEME, "built-in theme")
    }

    /// Parse a theme file
    pub fn load(path: &Path) -> Result<Self, ThemeError> {
        if !path.exists() {
            return Err(ThemeError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path).map_err(|e| ThemeError::Parse {
            source_name: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_yaml(&content, &path.display().to_string())
    }

    fn from_yaml(content: &str, source_name: &str) -> Result<Self, ThemeError> {
        serde_yaml::from_str(content).map_err(|e| ThemeError::Parse {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })
    }

    /// Check every token; reports all problems at once
    pub fn validate(&self) -> Result<(), ThemeError> {
        let mut problems = Vec::new();

        if self.content.is_empty() {
            problems.push("content must list at least one glob".to_string());
        }
        if self.dark_mode != "class" && self.dark_mode != "media" {
            problems.push(format!(
                "dark_mode must be `class` or `media`, got `{}`",
                self.dark_mode
            ));
        }

        validate_scale("primary", &self.colors.primary, &mut problems);
        validate_scale("secondary", &self.colors.secondary, &mut problems);

        for (name, value) in self.colors.dark.tokens() {
            check_color(&format!("dark.{}", name), value, &mut problems);
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ThemeError::Invalid { problems })
        }
    }

    /// Colour object as consumed under `theme.extend.colors`
    pub fn colors_value(&self) -> Value {
        let mut colors = Map::new();
        colors.insert("primary".to_string(), scale_value(&self.colors.primary));

        let mut dark = Map::new();
        for (name, value) in self.colors.dark.entries() {
            dark.insert(name.to_string(), Value::String(value.to_string()));
        }
        colors.insert("dark".to_string(), Value::Object(dark));

        colors.insert("secondary".to_string(), scale_value(&self.colors.secondary));
        Value::Object(colors)
    }

    /// Render the `tailwind.config.js` module
    pub fn render_tailwind_config(&self) -> Result<String, ThemeError> {
        let config = json!({
            "darkMode": self.dark_mode,
            "content": self.content,
            "theme": {
                "extend": {
                    "colors": self.colors_value(),
                },
            },
            "plugins": [],
        });

        let body = serde_json::to_string_pretty(&config).map_err(|e| ThemeError::Parse {
            source_name: "rendered config".to_string(),
            message: e.to_string(),
        })?;

        Ok(format!(
            "/** @type {{import('tailwindcss').Config}} */\nexport default {}\n",
            body
        ))
    }
}

fn scale_value(scale: &ShadeScale) -> Value {
    let mut map = Map::new();
    map.insert("DEFAULT".to_string(), Value::String(scale.default.clone()));
    for (step, value) in &scale.shades {
        map.insert(step.to_string(), Value::String(value.clone()));
    }
    Value::Object(map)
}

fn validate_scale(name: &str, scale: &ShadeScale, problems: &mut Vec<String>) {
    check_color(&format!("{}.default", name), &scale.default, problems);

    for step in SHADE_STEPS {
        match scale.shades.get(&step) {
            Some(value) => check_color(&format!("{}.{}", name, step), value, problems),
            None => problems.push(format!("{} is missing shade {}", name, step)),
        }
    }
    for step in scale.shades.keys() {
        if !SHADE_STEPS.contains(step) {
            problems.push(format!("{} has non-standard shade {}", name, step));
        }
    }
}

fn check_color(token: &str, value: &str, problems: &mut Vec<String>) {
    if !hex_color().is_match(value) {
        problems.push(format!("{} is not a #rrggbb colour: `{}`", token, value));
    }
}
