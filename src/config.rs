use ratatui::style::Color;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use xdg::BaseDirectories;

use crate::formatting::BoxChars;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    /// Seconds between background data refreshes
    pub refresh_interval: u32,
    /// strftime pattern used wherever a date is shown
    pub date_format: String,
    /// Currency code appended to money amounts
    pub currency: String,
    pub use_unicode: bool,
    pub theme: ThemeConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ThemeConfig {
    /// Highlight for the focused selection (tab, table row, calendar cursor)
    #[serde(deserialize_with = "deserialize_color")]
    pub accent_fg: Color,
    /// Used when a selection exists but the pane is not focused
    #[serde(deserialize_with = "deserialize_color_optional")]
    pub unfocused_accent_fg: Option<Color>,
    /// Days inside a selected date range
    #[serde(deserialize_with = "deserialize_color")]
    pub range_fg: Color,
    /// The "today" marker in the calendar
    #[serde(deserialize_with = "deserialize_color")]
    pub today_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub error_fg: Color,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            refresh_interval: 30,
            date_format: "%Y-%m-%d".to_string(),
            currency: "EUR".to_string(),
            use_unicode: true,
            theme: ThemeConfig::default(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            accent_fg: Color::Rgb(255, 165, 0),
            unfocused_accent_fg: None,
            range_fg: Color::Rgb(95, 175, 255),
            today_fg: Color::Rgb(159, 226, 191),
            error_fg: Color::Red,
        }
    }
}

impl ThemeConfig {
    /// Unfocused accent, falling back to a 50% darker accent
    pub fn unfocused_accent_fg(&self) -> Color {
        self.unfocused_accent_fg
            .unwrap_or_else(|| darken(self.accent_fg, 0.5))
    }
}

/// Everything the render layer needs, assembled once per session
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    pub use_unicode: bool,
    pub date_format: String,
    pub currency: String,
    pub theme: ThemeConfig,
    pub box_chars: BoxChars,
}

impl DisplayConfig {
    pub fn from_config(config: &Config) -> Self {
        DisplayConfig {
            use_unicode: config.use_unicode,
            date_format: config.date_format.clone(),
            currency: config.currency.clone(),
            theme: config.theme.clone(),
            box_chars: BoxChars::from_use_unicode(config.use_unicode),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

fn darken(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            (r as f32 * factor) as u8,
            (g as f32 * factor) as u8,
            (b as f32 * factor) as u8,
        ),
        other => other,
    }
}

fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", s)))
}

fn deserialize_color_optional<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(s) => parse_color(&s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", s))),
        None => Ok(None),
    }
}

/// Parse a color string: named ("cyan"), hex ("#FF6600" / "#f60"), or "r,g,b"
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();

    let named = match s.as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "white" => Some(Color::White),
        "orange" => Some(Color::Rgb(255, 165, 0)),
        _ => None,
    };
    if named.is_some() {
        return named;
    }

    if let Some(hex) = s.strip_prefix('#') {
        let channel = |a: &str| u8::from_str_radix(a, 16).ok();
        return match hex.len() {
            6 => Some(Color::Rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => Some(Color::Rgb(
                channel(&hex[0..1].repeat(2))?,
                channel(&hex[1..2].repeat(2))?,
                channel(&hex[2..3].repeat(2))?,
            )),
            _ => None,
        };
    }

    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() == 3 {
        let r = parts[0].trim().parse::<u8>().ok()?;
        let g = parts[1].trim().parse::<u8>().ok()?;
        let b = parts[2].trim().parse::<u8>().ok()?;
        return Some(Color::Rgb(r, g, b));
    }

    None
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

/// Read the config file, falling back to defaults on any problem
pub fn read() -> Config {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return Config::default(),
    };

    if !config_path.exists() {
        return Config::default();
    }

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };

    toml::from_str(&content).unwrap_or_else(|_| Config::default())
}
