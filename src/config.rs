use crate::theme::Theme;
use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize)]
pub struct RenderConfig {
    /// Leading part of exported file names: `<prefix>-<board>-pinout.<ext>`.
    pub file_prefix: String,
    /// Shown in place of an alias that is empty after trimming.
    pub alias_placeholder: String,
    pub show_groups: bool,
    pub show_legend: bool,
    pub brand_text: String,
    pub model_text: String,
    pub chip_text: String,
    pub secondary_title: String,
    pub aria_label: String,
    /// Raster size for PNG output.
    pub width: f32,
    pub height: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            file_prefix: "seeed".to_string(),
            alias_placeholder: "ALIAS".to_string(),
            show_groups: true,
            show_legend: false,
            brand_text: "Seeed Studio".to_string(),
            model_text: "Model: XIAO-nRF52840".to_string(),
            chip_text: "nRF52840".to_string(),
            secondary_title: "XIAO nRF52840 Plus".to_string(),
            aria_label: "Seeed XIAO nRF52840 pin assignment".to_string(),
            width: 1300.0,
            height: 1500.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub theme: Theme,
    pub render: RenderConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    font_family: Option<String>,
    font_size: Option<f32>,
    secondary_font_size: Option<f32>,
    background: Option<String>,
    board_fill_top: Option<String>,
    board_fill_bottom: Option<String>,
    board_stroke: Option<String>,
    edge_pad_fill: Option<String>,
    edge_pad_stroke: Option<String>,
    line_color: Option<String>,
    pin_text_color: Option<String>,
    pin_text_dark: Option<String>,
    alias_active_color: Option<String>,
    group_label_color: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RenderConfigFile {
    file_prefix: Option<String>,
    alias_placeholder: Option<String>,
    show_groups: Option<bool>,
    show_legend: Option<bool>,
    brand_text: Option<String>,
    model_text: Option<String>,
    chip_text: Option<String>,
    secondary_title: Option<String>,
    aria_label: Option<String>,
    width: Option<f32>,
    height: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    render: Option<RenderConfigFile>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let parsed: ConfigFile = parse_lenient(contents).context("invalid config file")?;
    Ok(apply_config_file(Config::default(), parsed))
}

/// Reads a `{ "pinId": "alias" }` object.
pub fn load_alias_file(path: &Path) -> anyhow::Result<BTreeMap<String, String>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read alias file {}", path.display()))?;
    parse_lenient(&contents).with_context(|| format!("invalid alias file {}", path.display()))
}

/// Strict JSON first, JSON5 as a fallback so hand-written files may carry
/// comments and trailing commas.
fn parse_lenient<T: DeserializeOwned>(contents: &str) -> anyhow::Result<T> {
    match serde_json::from_str(contents) {
        Ok(parsed) => Ok(parsed),
        Err(json_err) => {
            json5::from_str(contents).map_err(|_| anyhow::Error::new(json_err))
        }
    }
}

fn apply_config_file(mut config: Config, parsed: ConfigFile) -> Config {
    if let Some(theme_name) = parsed.theme.as_deref() {
        match theme_name {
            "print" => config.theme = Theme::print(),
            "standard" | "default" => config.theme = Theme::standard(),
            other => tracing::warn!(theme = other, "unknown theme name, keeping default"),
        }
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.font_family {
            config.theme.font_family = v;
        }
        if let Some(v) = vars.font_size {
            config.theme.font_size = v;
        }
        if let Some(v) = vars.secondary_font_size {
            config.theme.secondary_font_size = v;
        }
        if let Some(v) = vars.background {
            config.theme.background = v;
        }
        if let Some(v) = vars.board_fill_top {
            config.theme.board_fill_top = v;
        }
        if let Some(v) = vars.board_fill_bottom {
            config.theme.board_fill_bottom = v;
        }
        if let Some(v) = vars.board_stroke {
            config.theme.board_stroke = v;
        }
        if let Some(v) = vars.edge_pad_fill {
            config.theme.edge_pad_fill = v;
        }
        if let Some(v) = vars.edge_pad_stroke {
            config.theme.edge_pad_stroke = v;
        }
        if let Some(v) = vars.line_color {
            config.theme.line_color = v;
        }
        if let Some(v) = vars.pin_text_color {
            config.theme.pin_text_color = v;
        }
        if let Some(v) = vars.pin_text_dark {
            config.theme.pin_text_dark = v;
        }
        if let Some(v) = vars.alias_active_color {
            config.theme.alias_active_color = v;
        }
        if let Some(v) = vars.group_label_color {
            config.theme.group_label_color = v;
        }
    }

    if let Some(render) = parsed.render {
        if let Some(v) = render.file_prefix {
            config.render.file_prefix = v;
        }
        if let Some(v) = render.alias_placeholder {
            config.render.alias_placeholder = v;
        }
        if let Some(v) = render.show_groups {
            config.render.show_groups = v;
        }
        if let Some(v) = render.show_legend {
            config.render.show_legend = v;
        }
        if let Some(v) = render.brand_text {
            config.render.brand_text = v;
        }
        if let Some(v) = render.model_text {
            config.render.model_text = v;
        }
        if let Some(v) = render.chip_text {
            config.render.chip_text = v;
        }
        if let Some(v) = render.secondary_title {
            config.render.secondary_title = v;
        }
        if let Some(v) = render.aria_label {
            config.render.aria_label = v;
        }
        if let Some(v) = render.width {
            config.render.width = v;
        }
        if let Some(v) = render.height {
            config.render.height = v;
        }
    }

    config
}
