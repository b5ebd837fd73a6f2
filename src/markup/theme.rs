//! Syntax themes for rendered code blocks
//!
//! Provides YAML-based theming support with compile-time embedded themes
//! and user-defined themes from the config directory.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/glint/themes/{id}.yaml`
//! 2. Embedded: Built-in themes compiled into binary

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;

use serde::Deserialize;

use crate::syntax::{TokenCategory, ALL_CATEGORIES};

// Embed theme YAML files at compile time
pub const DARK_YAML: &str = include_str!("../../themes/dark.yaml");
pub const LIGHT_YAML: &str = include_str!("../../themes/light.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "dark", "light")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "dark",
        yaml: DARK_YAML,
    },
    BuiltinTheme {
        id: "light",
        yaml: LIGHT_YAML,
    },
];

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<SyntaxTheme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    SyntaxTheme::from_yaml(&content)
}

/// Load theme by id with priority: user → builtin
pub fn load_theme(id: &str) -> Result<SyntaxTheme, String> {
    if let Some(user_dir) = crate::config_paths::themes_dir() {
        let user_path = user_dir.join(format!("{}.yaml", id));
        if user_path.exists() {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path);
        }
    }

    tracing::debug!("Loading builtin theme: {}", id);
    SyntaxTheme::from_builtin(id)
}

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let hex = s.trim_start_matches('#');
        if !hex.is_ascii() {
            return Err(format!("Invalid color format: {}", s));
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| e.to_string());
        match hex.len() {
            6 => Ok(Color {
                r: channel(0)?,
                g: channel(2)?,
                b: channel(4)?,
                a: 255,
            }),
            8 => Ok(Color {
                r: channel(0)?,
                g: channel(2)?,
                b: channel(4)?,
                a: channel(6)?,
            }),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }

    /// CSS hex notation, alpha only when not opaque
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub ui: UiThemeData,
    /// Category name (`keyword`, `string`, ...) to hex color
    #[serde(default)]
    pub syntax: BTreeMap<String, String>,
}

/// Code block chrome colors (raw strings from YAML)
#[derive(Debug, Clone, Deserialize)]
pub struct UiThemeData {
    pub background: String,
    pub foreground: String,
    #[serde(default)]
    pub inline_code_background: Option<String>,
    #[serde(default)]
    pub border: Option<String>,
}

/// Resolved theme with parsed colors
#[derive(Debug, Clone)]
pub struct SyntaxTheme {
    pub name: String,
    pub background: Color,
    pub foreground: Color,
    pub inline_code_background: Color,
    pub border: Color,
    colors: Vec<(TokenCategory, Color)>,
}

impl SyntaxTheme {
    /// Parse theme from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))?;
        Self::from_data(data)
    }

    /// Load a built-in theme by id
    pub fn from_builtin(id: &str) -> Result<Self, String> {
        BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown builtin theme: {}", id))
            .and_then(|t| Self::from_yaml(t.yaml))
    }

    fn from_data(data: ThemeData) -> Result<Self, String> {
        if data.version != 1 {
            return Err(format!("Unsupported theme version: {}", data.version));
        }

        let mut colors = Vec::with_capacity(data.syntax.len());
        for (key, value) in &data.syntax {
            let category = ALL_CATEGORIES
                .iter()
                .copied()
                .find(|c| c.name() == key)
                .ok_or_else(|| format!("Unknown syntax category in theme: {}", key))?;
            colors.push((category, Color::from_hex(value)?));
        }
        colors.sort_by_key(|(category, _)| ALL_CATEGORIES.iter().position(|c| c == category));

        let background = Color::from_hex(&data.ui.background)?;
        Ok(Self {
            name: data.name,
            background,
            foreground: Color::from_hex(&data.ui.foreground)?,
            inline_code_background: data
                .ui
                .inline_code_background
                .as_deref()
                .map(Color::from_hex)
                .transpose()?
                .unwrap_or(background),
            border: data
                .ui
                .border
                .as_deref()
                .map(Color::from_hex)
                .transpose()?
                .unwrap_or(background),
            colors,
        })
    }

    /// Color for a category, if the theme styles it
    pub fn color(&self, category: TokenCategory) -> Option<Color> {
        self.colors
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, color)| *color)
    }

    /// CSS rules for the code block container, inline code and one rule per
    /// styled category class
    pub fn stylesheet(&self) -> String {
        let mut css = format!(
            ".code-block {{\n    background: {bg};\n    color: {fg};\n    border: 1px solid {border};\n    border-radius: 6px;\n    padding: 16px;\n    overflow-x: auto;\n    font-family: \"SF Mono\", \"Fira Code\", Consolas, Menlo, monospace;\n    white-space: pre;\n}}\n\n.inline-code {{\n    background: {inline};\n    padding: 0.2em 0.4em;\n    border-radius: 3px;\n    font-family: \"SF Mono\", \"Fira Code\", Consolas, Menlo, monospace;\n}}\n",
            bg = self.background.to_css(),
            fg = self.foreground.to_css(),
            border = self.border.to_css(),
            inline = self.inline_code_background.to_css(),
        );
        for (category, color) in &self.colors {
            let _ = write!(
                css,
                "\n.{} {{\n    color: {};\n",
                category.css_class(),
                color.to_css()
            );
            if *category == TokenCategory::Comment {
                css.push_str("    font-style: italic;\n");
            }
            css.push_str("}\n");
        }
        css
    }
}

impl Default for SyntaxTheme {
    fn default() -> Self {
        match Self::from_yaml(DARK_YAML) {
            Ok(theme) => theme,
            Err(e) => {
                tracing::warn!("Embedded dark theme failed to parse: {}", e);
                Self {
                    name: "Glint Dark".to_string(),
                    background: Color::rgb(0x1E, 0x1E, 0x1E),
                    foreground: Color::rgb(0xD4, 0xD4, 0xD4),
                    inline_code_background: Color::rgb(0x2D, 0x2D, 0x30),
                    border: Color::rgb(0x3C, 0x3C, 0x3C),
                    colors: Vec::new(),
                }
            }
        }
    }
}
