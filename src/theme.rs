//! Theme system
//!
//! YAML-based themes with compile-time embedded built-ins and user-defined
//! themes from the config directory.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/semicell/themes/{id}.yaml`
//! 2. Embedded: Built-in themes compiled into binary

use std::path::Path;

use serde::Deserialize;

// Embed theme YAML files at compile time
pub const DEFAULT_LIGHT_YAML: &str = include_str!("../themes/default-light.yaml");
pub const DEFAULT_DARK_YAML: &str = include_str!("../themes/default-dark.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "default-light")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "default-light",
        yaml: DEFAULT_LIGHT_YAML,
    },
    BuiltinTheme {
        id: "default-dark",
        yaml: DEFAULT_DARK_YAML,
    },
];

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    Theme::from_yaml(&content)
}

/// Load theme by id with priority: user → builtin
pub fn load_theme(id: &str) -> Result<Theme, String> {
    if let Some(user_dir) = crate::config_paths::themes_dir() {
        let user_path = user_dir.join(format!("{}.yaml", id));
        if user_path.exists() {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path);
        }
    }

    tracing::info!("Loading builtin theme: {}", id);
    Theme::from_builtin(id)
}

/// Load theme by id, falling back to the default light theme
pub fn load_theme_or_default(id: &str) -> Theme {
    match load_theme(id) {
        Ok(theme) => theme,
        Err(e) => {
            tracing::warn!("Failed to load theme '{}': {}, using default", id, e);
            Theme::default_light()
        }
    }
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

    /// Convert to ARGB u32 for softbuffer
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            s.get(range)
                .ok_or_else(|| format!("Invalid color format: {}", s))
                .and_then(|hex| u8::from_str_radix(hex, 16).map_err(|e| e.to_string()))
        };
        match s.len() {
            6 => Ok(Color {
                r: channel(0..2)?,
                g: channel(2..4)?,
                b: channel(4..6)?,
                a: 255,
            }),
            8 => Ok(Color {
                r: channel(0..2)?,
                g: channel(2..4)?,
                b: channel(4..6)?,
                a: channel(6..8)?,
            }),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub ui: UiThemeData,
}

/// UI theme colors (raw strings from YAML)
#[derive(Debug, Clone, Deserialize)]
pub struct UiThemeData {
    pub table: TableThemeData,
    pub gutter: GutterThemeData,
    pub menu_bar: MenuBarThemeData,
    pub status_bar: StatusBarThemeData,
    #[serde(default)]
    pub cell_editor: CellEditorThemeData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TableThemeData {
    pub background: String,
    pub foreground: String,
    pub grid_line: String,
    pub heading_background: String,
    pub heading_foreground: String,
    pub selection_background: String,
    #[serde(default)]
    pub selection_border: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GutterThemeData {
    pub background: String,
    pub foreground: String,
    #[serde(default)]
    pub border_color: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuBarThemeData {
    pub background: String,
    pub foreground: String,
    pub hover_background: String,
    pub disabled_foreground: String,
    #[serde(default)]
    pub dropdown_background: Option<String>,
    #[serde(default)]
    pub border: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusBarThemeData {
    pub background: String,
    pub foreground: String,
}

/// Cell editor overlay colors (all optional, derived from the table colors)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CellEditorThemeData {
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub foreground: Option<String>,
    #[serde(default)]
    pub cursor_color: Option<String>,
    #[serde(default)]
    pub border: Option<String>,
}

/// Resolved theme with parsed colors
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub table: TableTheme,
    pub gutter: GutterTheme,
    pub menu_bar: MenuBarTheme,
    pub status_bar: StatusBarTheme,
    pub cell_editor: CellEditorTheme,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableTheme {
    pub background: Color,
    pub foreground: Color,
    pub grid_line: Color,
    pub heading_background: Color,
    pub heading_foreground: Color,
    pub selection_background: Color,
    pub selection_border: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GutterTheme {
    pub background: Color,
    pub foreground: Color,
    pub border_color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuBarTheme {
    pub background: Color,
    pub foreground: Color,
    pub hover_background: Color,
    pub disabled_foreground: Color,
    pub dropdown_background: Color,
    pub border: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusBarTheme {
    pub background: Color,
    pub foreground: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CellEditorTheme {
    pub background: Color,
    pub foreground: Color,
    pub cursor_color: Color,
    pub border: Color,
}

fn optional_color(value: Option<&String>, fallback: Color) -> Result<Color, String> {
    value
        .map(|s| Color::from_hex(s))
        .transpose()
        .map(|c| c.unwrap_or(fallback))
}

impl Theme {
    /// Load theme from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))?;
        Self::from_data(data)
    }

    /// Load a built-in theme by id
    pub fn from_builtin(id: &str) -> Result<Self, String> {
        let entry = BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown theme id: {}", id))?;
        Theme::from_yaml(entry.yaml)
    }

    /// Convert raw theme data to resolved theme
    pub fn from_data(data: ThemeData) -> Result<Self, String> {
        let ui = &data.ui;

        let table = TableTheme {
            background: Color::from_hex(&ui.table.background)?,
            foreground: Color::from_hex(&ui.table.foreground)?,
            grid_line: Color::from_hex(&ui.table.grid_line)?,
            heading_background: Color::from_hex(&ui.table.heading_background)?,
            heading_foreground: Color::from_hex(&ui.table.heading_foreground)?,
            selection_background: Color::from_hex(&ui.table.selection_background)?,
            selection_border: optional_color(
                ui.table.selection_border.as_ref(),
                Color::from_hex(&ui.table.foreground)?,
            )?,
        };

        let gutter = GutterTheme {
            background: Color::from_hex(&ui.gutter.background)?,
            foreground: Color::from_hex(&ui.gutter.foreground)?,
            border_color: optional_color(ui.gutter.border_color.as_ref(), table.grid_line)?,
        };

        let menu_background = Color::from_hex(&ui.menu_bar.background)?;
        let menu_bar = MenuBarTheme {
            background: menu_background,
            foreground: Color::from_hex(&ui.menu_bar.foreground)?,
            hover_background: Color::from_hex(&ui.menu_bar.hover_background)?,
            disabled_foreground: Color::from_hex(&ui.menu_bar.disabled_foreground)?,
            dropdown_background: optional_color(
                ui.menu_bar.dropdown_background.as_ref(),
                menu_background,
            )?,
            border: optional_color(ui.menu_bar.border.as_ref(), table.grid_line)?,
        };

        let status_bar = StatusBarTheme {
            background: Color::from_hex(&ui.status_bar.background)?,
            foreground: Color::from_hex(&ui.status_bar.foreground)?,
        };

        let cell_editor = CellEditorTheme {
            background: optional_color(ui.cell_editor.background.as_ref(), table.background)?,
            foreground: optional_color(ui.cell_editor.foreground.as_ref(), table.foreground)?,
            cursor_color: optional_color(
                ui.cell_editor.cursor_color.as_ref(),
                table.foreground,
            )?,
            border: optional_color(ui.cell_editor.border.as_ref(), table.selection_border)?,
        };

        Ok(Theme {
            name: data.name,
            table,
            gutter,
            menu_bar,
            status_bar,
            cell_editor,
        })
    }

    /// Default light theme (YAML-backed with Rust fallback)
    pub fn default_light() -> Self {
        match Theme::from_yaml(DEFAULT_LIGHT_YAML) {
            Ok(theme) => theme,
            Err(_) => {
                let text = Color::rgb(0x1F, 0x1F, 0x1F);
                let line = Color::rgb(0xD9, 0xD9, 0xD9);
                let accent = Color::rgb(0x2F, 0x7B, 0xD9);
                Theme {
                    name: "Default Light".to_string(),
                    table: TableTheme {
                        background: Color::rgb(0xFF, 0xFF, 0xFF),
                        foreground: text,
                        grid_line: line,
                        heading_background: Color::rgb(0xF0, 0xF0, 0xF0),
                        heading_foreground: text,
                        selection_background: Color::rgb(0xCC, 0xE4, 0xF7),
                        selection_border: accent,
                    },
                    gutter: GutterTheme {
                        background: Color::rgb(0xF7, 0xF7, 0xF7),
                        foreground: Color::rgb(0x8A, 0x8A, 0x8A),
                        border_color: line,
                    },
                    menu_bar: MenuBarTheme {
                        background: Color::rgb(0xF3, 0xF3, 0xF3),
                        foreground: text,
                        hover_background: Color::rgb(0xDD, 0xE7, 0xF3),
                        disabled_foreground: Color::rgb(0xA0, 0xA0, 0xA0),
                        dropdown_background: Color::rgb(0xFF, 0xFF, 0xFF),
                        border: Color::rgb(0xC8, 0xC8, 0xC8),
                    },
                    status_bar: StatusBarTheme {
                        background: Color::rgb(0xED, 0xED, 0xED),
                        foreground: Color::rgb(0x40, 0x40, 0x40),
                    },
                    cell_editor: CellEditorTheme {
                        background: Color::rgb(0xFF, 0xFF, 0xFF),
                        foreground: Color::rgb(0x00, 0x00, 0x00),
                        cursor_color: Color::rgb(0x00, 0x00, 0x00),
                        border: accent,
                    },
                }
            }
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_light()
    }
}
