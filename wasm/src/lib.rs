use serde::Deserialize;
use wasm_bindgen::prelude::*;
use xiao_pinmap::{
    AliasMap, AliasState, Config, Theme, export_file_name, export_svg, get_board_variant,
    legend_entries, list_board_variants, render_pinout,
};
use xiao_pinmap::export::ExportFormat;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PinoutRenderOptions {
    theme: Option<String>,
    font_family: Option<String>,
    alias_placeholder: Option<String>,
    file_prefix: Option<String>,
    show_groups: Option<bool>,
    show_legend: Option<bool>,
}

fn build_config(options: PinoutRenderOptions) -> Config {
    let mut config = Config::default();
    if options.theme.as_deref() == Some("print") {
        config.theme = Theme::print();
    }
    if let Some(font_family) = options.font_family {
        config.theme.font_family = font_family;
    }
    if let Some(placeholder) = options.alias_placeholder {
        config.render.alias_placeholder = placeholder;
    }
    if let Some(prefix) = options.file_prefix {
        config.render.file_prefix = prefix;
    }
    if let Some(show_groups) = options.show_groups {
        config.render.show_groups = show_groups;
    }
    if let Some(show_legend) = options.show_legend {
        config.render.show_legend = show_legend;
    }
    config
}

fn parse_options(options_json: Option<String>) -> Result<PinoutRenderOptions, String> {
    match options_json {
        Some(raw) => serde_json::from_str(&raw).map_err(|error| error.to_string()),
        None => Ok(PinoutRenderOptions::default()),
    }
}

fn render_inner(
    board_id: &str,
    aliases_json: Option<String>,
    options_json: Option<String>,
) -> Result<String, String> {
    let board = get_board_variant(board_id).map_err(|error| error.to_string())?;
    let mut state = AliasState::init_template();
    if let Some(raw) = aliases_json {
        let edits: AliasMap = serde_json::from_str(&raw).map_err(|error| error.to_string())?;
        for (pin, text) in edits {
            state = state
                .set_alias(board.id, &pin, text)
                .map_err(|error| error.to_string())?;
        }
    }
    let config = build_config(parse_options(options_json)?);
    let aliases = state.board(board.id).map_err(|error| error.to_string())?;
    Ok(render_pinout(&board.pins, aliases, &config))
}

/// Board summaries as a JSON array, in selector order.
#[wasm_bindgen]
pub fn list_boards() -> Result<String, JsValue> {
    serde_json::to_string(&list_board_variants()).map_err(|error| JsValue::from_str(&error.to_string()))
}

/// Category labels and colors as a JSON array.
#[wasm_bindgen]
pub fn legend() -> Result<String, JsValue> {
    serde_json::to_string(&legend_entries()).map_err(|error| JsValue::from_str(&error.to_string()))
}

#[wasm_bindgen]
pub fn render_pinout_svg(
    board_id: &str,
    aliases_json: Option<String>,
    options_json: Option<String>,
) -> Result<String, JsValue> {
    render_inner(board_id, aliases_json, options_json).map_err(|error| JsValue::from_str(&error))
}

/// Download name for the current board. Returns `undefined` when there is
/// no drawing to export.
#[wasm_bindgen]
pub fn export_file(board_id: &str, svg: Option<String>, prefix: Option<String>) -> Option<String> {
    let prefix = prefix.unwrap_or_else(|| Config::default().render.file_prefix);
    export_svg(&prefix, board_id, svg.as_deref()).map(|file| file.file_name)
}

#[wasm_bindgen]
pub fn export_name(board_id: &str, prefix: Option<String>) -> String {
    let prefix = prefix.unwrap_or_else(|| Config::default().render.file_prefix);
    export_file_name(&prefix, board_id, ExportFormat::Svg)
}

#[cfg(test)]
mod tests {
    use crate::{export_file, render_inner};

    #[test]
    fn renders_plus_board_with_alias() {
        let svg = render_inner(
            "xiao-nrf-plus",
            Some(r#"{"p0_31": "LiPo"}"#.to_string()),
            Some(r#"{"theme": "print"}"#.to_string()),
        )
        .expect("plus board should render");

        assert!(svg.contains("<svg"));
        assert!(svg.contains(">LiPo</tspan>"));
        assert!(svg.contains("fill=\"#FFFFFF\""));
    }

    #[test]
    fn rejects_unknown_pin() {
        let err = render_inner("xiao-nrf", Some(r#"{"p1_07": "x"}"#.to_string()), None)
            .unwrap_err();
        assert_eq!(err, "board `xiao-nrf` has no pin `p1_07`");
    }

    #[test]
    fn export_without_drawing_is_none() {
        assert_eq!(export_file("xiao-nrf", None, None), None);
        assert_eq!(
            export_file("xiao-nrf", Some("<svg/>".to_string()), None).as_deref(),
            Some("seeed-xiao-nrf-pinout.svg")
        );
    }
}
