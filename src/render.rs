use crate::config::RenderConfig;
use crate::geometry::BoardSection;
use crate::layout::{BoardLayout, GroupKind, GroupLayout, PinLayout, PinoutLayout};
use crate::legend::legend_entries;
use crate::theme::Theme;
use anyhow::Result;
use std::path::Path;

const PIN_CORNER_RADIUS: f32 = 14.0;
const EDGE_PAD_RADIUS: f32 = 6.0;
const TEXT_INSET_X: f32 = 14.0;
const PRIMARY_LINE_Y: f32 = 32.0;
const SECONDARY_LINE_Y: f32 = 58.0;
/// Full-width space between terminal and alias keeps the pair readable in
/// both Latin and CJK fonts.
const LABEL_SEPARATOR: &str = "\u{3000}";

/// Serializes a laid-out pinout to a standalone SVG document. Output depends
/// only on the arguments, so equal inputs give byte-identical documents.
pub fn render_svg(layout: &PinoutLayout, theme: &Theme, config: &RenderConfig) -> String {
    let mut svg = String::new();
    let width = layout.width;
    let height = layout.height;

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" class=\"pin-board\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\" role=\"img\" aria-label=\"{}\">",
        escape_xml(&config.aria_label)
    ));

    svg.push_str(&style_block(theme));

    if theme.background != "none" {
        svg.push_str(&format!(
            "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
            theme.background
        ));
    }

    svg.push_str("<defs>");
    svg.push_str(&format!(
        "<linearGradient id=\"boardBody\" x1=\"0%\" y1=\"0%\" x2=\"0%\" y2=\"100%\"><stop offset=\"0%\" stop-color=\"{}\"/><stop offset=\"100%\" stop-color=\"{}\"/></linearGradient>",
        theme.board_fill_top, theme.board_fill_bottom
    ));
    svg.push_str(&format!(
        "<linearGradient id=\"boardAccent\" x1=\"0%\" y1=\"0%\" x2=\"100%\" y2=\"0%\"><stop offset=\"0%\" stop-color=\"{}\"/><stop offset=\"100%\" stop-color=\"{}\"/></linearGradient>",
        theme.accent_start, theme.accent_end
    ));
    svg.push_str("</defs>");

    if config.show_legend {
        svg.push_str(&legend_svg(theme));
    }

    svg.push_str("<g>");
    if let Some(primary) = layout.board(BoardSection::Primary) {
        svg.push_str(&primary_board_svg(primary, theme, config));
    }
    if config.show_groups {
        for group in &layout.groups {
            svg.push_str(&group_svg(group, theme));
        }
    }
    svg.push_str(&edge_pads_svg(layout, BoardSection::Primary, theme));
    svg.push_str("</g>");

    if let Some(secondary) = layout.board(BoardSection::Secondary) {
        svg.push_str(&secondary_board_svg(secondary, theme, config));
        svg.push_str(&edge_pads_svg(layout, BoardSection::Secondary, theme));
    }

    for pin in &layout.pins {
        svg.push_str(&pin_svg(pin, theme, config));
    }

    svg.push_str("</svg>");
    svg
}

fn style_block(theme: &Theme) -> String {
    format!(
        "<style>.pin-board text{{font-family:{font};}}.board-brand,.board-label,.board-chip,.board-title,.board-subtitle,.group-label{{text-anchor:middle;}}.pin-label-primary{{font-size:{size}px;}}.pin-label-secondary{{font-size:{small}px;}}.pin-terminal{{font-weight:700;}}.pin-node--dark text{{fill:{dark};}}</style>",
        font = theme.font_family,
        size = theme.font_size,
        small = theme.secondary_font_size,
        dark = theme.pin_text_dark,
    )
}

fn primary_board_svg(board: &BoardLayout, theme: &Theme, config: &RenderConfig) -> String {
    let rect = board.rect;
    let center_x = rect.center_x();
    let panel_width = rect.width * 0.62;
    let mut out = String::new();
    out.push_str(&format!(
        "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"42\" fill=\"url(#boardBody)\" stroke=\"{}\" stroke-width=\"2\"/>",
        rect.x, rect.y, rect.width, rect.height, theme.board_stroke
    ));
    out.push_str(&format!(
        "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"26\" fill=\"{}\"/>",
        rect.x + (rect.width - panel_width) / 2.0,
        rect.y + 60.0,
        panel_width,
        rect.height - 190.0,
        theme.board_panel
    ));
    out.push_str(&format!(
        "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"90\" height=\"36\" rx=\"12\" fill=\"{}\"/>",
        center_x - 45.0,
        rect.y - 28.0,
        theme.connector_cap
    ));
    out.push_str(&board_text(center_x, rect.y + 130.0, "board-brand", 20.0, &config.brand_text, theme));
    out.push_str(&board_text(center_x, rect.y + 170.0, "board-label", 13.0, &config.model_text, theme));
    out.push_str(&board_text(center_x, rect.y + 260.0, "board-chip", 24.0, &config.chip_text, theme));
    out.push_str(&format!(
        "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"110\" height=\"24\" rx=\"10\" fill=\"url(#boardAccent)\"/>",
        center_x - 55.0,
        rect.bottom() - 54.0
    ));
    out
}

fn secondary_board_svg(board: &BoardLayout, theme: &Theme, config: &RenderConfig) -> String {
    let rect = board.rect;
    let center_x = rect.center_x();
    let center_y = rect.center_y();
    let panel_width = rect.width * 0.62;
    let mut out = String::new();
    out.push_str(&format!(
        "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"36\" fill=\"url(#boardBody)\" stroke=\"{}\" stroke-width=\"2\"/>",
        rect.x, rect.y, rect.width, rect.height, theme.board_stroke
    ));
    out.push_str(&format!(
        "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"26\" fill=\"{}\"/>",
        rect.x + (rect.width - panel_width) / 2.0,
        rect.y + 50.0,
        panel_width,
        rect.height - 180.0,
        theme.board_panel
    ));
    out.push_str(&format!(
        "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"90\" height=\"36\" rx=\"12\" fill=\"{}\"/>",
        center_x - 45.0,
        rect.y - 28.0,
        theme.connector_cap
    ));
    out.push_str(&board_text(
        center_x,
        center_y - 10.0,
        "board-title board-title--secondary",
        20.0,
        &config.brand_text,
        theme,
    ));
    out.push_str(&board_text(
        center_x,
        center_y + 20.0,
        "board-subtitle board-subtitle--secondary",
        14.0,
        &config.secondary_title,
        theme,
    ));
    out
}

fn board_text(x: f32, y: f32, class: &str, size: f32, text: &str, theme: &Theme) -> String {
    format!(
        "<text x=\"{x:.2}\" y=\"{y:.2}\" class=\"{class}\" font-size=\"{size}\" fill=\"{}\">{}</text>",
        theme.board_text_color,
        escape_xml(text)
    )
}

fn group_svg(group: &GroupLayout, theme: &Theme) -> String {
    let (fill, stroke) = match group.kind {
        GroupKind::AnalogInput => (&theme.analog_group_fill, &theme.analog_group_stroke),
        GroupKind::HighFrequency => (&theme.high_freq_group_fill, &theme.high_freq_group_stroke),
    };
    let rect = group.rect;
    format!(
        "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-dasharray=\"{}\"/><text x=\"{:.2}\" y=\"{:.2}\" class=\"group-label\" font-size=\"14\" fill=\"{}\">{}</text>",
        rect.x,
        rect.y,
        rect.width,
        rect.height,
        group.corner_radius,
        fill,
        stroke,
        group.dash,
        group.label_x,
        group.label_y,
        theme.group_label_color,
        escape_xml(&group.label)
    )
}

fn edge_pads_svg(layout: &PinoutLayout, section: BoardSection, theme: &Theme) -> String {
    let mut out = String::new();
    for pad in layout.edge_pads.iter().filter(|pad| pad.section == section) {
        let rect = pad.rect;
        out.push_str(&format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"{EDGE_PAD_RADIUS}\" fill=\"{}\" stroke=\"{}\"/>",
            rect.x, rect.y, rect.width, rect.height, theme.edge_pad_fill, theme.edge_pad_stroke
        ));
    }
    out
}

fn pin_svg(pin: &PinLayout, theme: &Theme, config: &RenderConfig) -> String {
    let class = if pin.dark {
        "pin-node pin-node--dark"
    } else {
        "pin-node"
    };
    let text_fill = if pin.dark {
        theme.pin_text_dark.as_str()
    } else {
        theme.pin_text_color.as_str()
    };
    let rect = pin.rect;
    let line = pin.connector;
    let text_x = rect.x + TEXT_INSET_X;

    let mut out = String::new();
    out.push_str(&format!(
        "<g class=\"{class}\" data-pin=\"{}\">",
        escape_xml(&pin.id)
    ));
    out.push_str(&format!(
        "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"3\" stroke-linecap=\"round\"/>",
        line.x1, line.y1, line.x2, line.y2, theme.line_color
    ));
    out.push_str(&format!(
        "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"{PIN_CORNER_RADIUS}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"2\"/>",
        rect.x, rect.y, rect.width, rect.height, pin.fill, theme.pin_stroke
    ));

    let (alias_class, alias_text, alias_fill) = match pin.alias.as_deref() {
        Some(alias) => (
            "pin-alias pin-alias--active",
            alias,
            if pin.dark {
                text_fill
            } else {
                theme.alias_active_color.as_str()
            },
        ),
        None => (
            "pin-alias",
            config.alias_placeholder.as_str(),
            if pin.dark {
                text_fill
            } else {
                theme.alias_placeholder_color.as_str()
            },
        ),
    };
    out.push_str(&format!(
        "<text x=\"{text_x:.2}\" y=\"{:.2}\" class=\"pin-label-primary\" fill=\"{text_fill}\"><tspan class=\"pin-terminal\">{}</tspan><tspan>{LABEL_SEPARATOR}</tspan><tspan class=\"{alias_class}\" fill=\"{alias_fill}\">{}</tspan></text>",
        rect.y + PRIMARY_LINE_Y,
        escape_xml(&pin.terminal),
        escape_xml(alias_text)
    ));

    let mut designation = escape_xml(&pin.designation);
    if let Some(secondary) = &pin.secondary_label {
        designation.push_str(LABEL_SEPARATOR);
        designation.push_str(&escape_xml(secondary));
    }
    out.push_str(&format!(
        "<text x=\"{text_x:.2}\" y=\"{:.2}\" class=\"pin-label-secondary\" fill=\"{text_fill}\">{designation}</text>",
        rect.y + SECONDARY_LINE_Y
    ));
    out.push_str("</g>");
    out
}

/// Category swatches across the top of the canvas, read from the same
/// table that colors the pads.
fn legend_svg(theme: &Theme) -> String {
    let mut out = String::from("<g class=\"legend\">");
    let mut x = 40.0_f32;
    let y = 30.0_f32;
    for entry in legend_entries() {
        out.push_str(&format!(
            "<rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"18\" height=\"18\" rx=\"4\" fill=\"{}\"/>",
            entry.color
        ));
        out.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" font-size=\"14\" fill=\"{}\">{}</text>",
            x + 26.0,
            y + 14.0,
            theme.group_label_color,
            escape_xml(entry.label)
        ));
        x += 136.0;
    }
    out.push_str("</g>");
    out
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path, render_cfg: &RenderConfig) -> Result<()> {
    let mut opt = usvg::Options::default();
    opt.font_family = "Inter".to_string();

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = usvg::Size::from_wh(render_cfg.width, render_cfg.height)
        .ok_or_else(|| anyhow::anyhow!("Invalid raster size"))?
        .to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    // Scale the drawing's own canvas onto the configured raster.
    let transform = resvg::tiny_skia::Transform::from_scale(
        size.width() as f32 / tree.size().width(),
        size.height() as f32 / tree.size().height(),
    );
    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, transform, &mut pixmap_mut);
    pixmap.save_png(output)?;
    Ok(())
}

pub(crate) fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
