use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Theme {
    pub font_family: String,
    pub font_size: f32,
    pub secondary_font_size: f32,
    pub background: String,
    pub board_fill_top: String,
    pub board_fill_bottom: String,
    pub board_stroke: String,
    pub board_panel: String,
    pub board_text_color: String,
    pub connector_cap: String,
    pub accent_start: String,
    pub accent_end: String,
    pub edge_pad_fill: String,
    pub edge_pad_stroke: String,
    pub line_color: String,
    pub pin_stroke: String,
    pub pin_text_color: String,
    pub pin_text_dark: String,
    pub alias_placeholder_color: String,
    pub alias_active_color: String,
    pub group_label_color: String,
    pub analog_group_fill: String,
    pub analog_group_stroke: String,
    pub high_freq_group_fill: String,
    pub high_freq_group_stroke: String,
}

impl Theme {
    /// Dark board on a transparent canvas, matching the on-screen preview.
    pub fn standard() -> Self {
        Self {
            font_family: "Inter, \"Noto Sans JP\", system-ui, sans-serif".to_string(),
            font_size: 18.0,
            secondary_font_size: 14.0,
            background: "none".to_string(),
            board_fill_top: "#2c2f41".to_string(),
            board_fill_bottom: "#1a1d2b".to_string(),
            board_stroke: "#f0f3ff".to_string(),
            board_panel: "#fdfdfd".to_string(),
            board_text_color: "#1a1d2b".to_string(),
            connector_cap: "#d1d6e5".to_string(),
            accent_start: "#7af4ff".to_string(),
            accent_end: "#6c92ff".to_string(),
            edge_pad_fill: "#fddb6f".to_string(),
            edge_pad_stroke: "#f2b200".to_string(),
            line_color: "#ffd166".to_string(),
            pin_stroke: "rgba(0,0,0,0.15)".to_string(),
            pin_text_color: "#1c2430".to_string(),
            pin_text_dark: "#f5f7ff".to_string(),
            alias_placeholder_color: "rgba(28,36,48,0.45)".to_string(),
            alias_active_color: "#0b3d91".to_string(),
            group_label_color: "#5a6275".to_string(),
            analog_group_fill: "rgba(255,165,165,0.25)".to_string(),
            analog_group_stroke: "rgba(255,145,145,0.6)".to_string(),
            high_freq_group_fill: "rgba(137,165,255,0.18)".to_string(),
            high_freq_group_stroke: "rgba(122,146,255,0.6)".to_string(),
        }
    }

    /// Solid white background for printing or raster export.
    pub fn print() -> Self {
        Self {
            background: "#FFFFFF".to_string(),
            line_color: "#c9a227".to_string(),
            group_label_color: "#333333".to_string(),
            ..Self::standard()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::standard()
    }
}
