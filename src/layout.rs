use serde::Serialize;

use crate::alias::AliasMap;
use crate::catalog::{PinCategory, PinDefinition};
use crate::geometry::{
    Anchor, BoardSection, EDGE_PAD_HEIGHT, EDGE_PAD_WIDTH, PIN_HEIGHT, PIN_WIDTH, Rect,
    board_rect, canvas, pin_rect,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupKind {
    AnalogInput,
    HighFrequency,
}

/// A named set of pins that gets a dashed annotation box.
#[derive(Debug, Clone, Copy)]
pub struct PinGroup {
    pub kind: GroupKind,
    pub label: &'static str,
    pub pin_ids: &'static [&'static str],
    pub padding: f32,
    pub corner_radius: f32,
    pub dash: &'static str,
    /// Distance between the label baseline and the top of the box.
    pub label_gap: f32,
    pub shift_y: f32,
}

pub const PIN_GROUPS: [PinGroup; 2] = [
    PinGroup {
        kind: GroupKind::AnalogInput,
        label: "Analog Input",
        pin_ids: &["p0_02", "p0_03", "p0_28", "p0_29", "p0_04", "p0_05"],
        padding: 24.0,
        corner_radius: 18.0,
        dash: "6 6",
        label_gap: 12.0,
        shift_y: 0.0,
    },
    PinGroup {
        kind: GroupKind::HighFrequency,
        label: "High Frequency",
        pin_ids: &["p1_11"],
        padding: 24.0,
        corner_radius: 16.0,
        dash: "4 4",
        label_gap: 10.0,
        shift_y: 8.0,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Connector {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardLayout {
    pub section: BoardSection,
    pub rect: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgePad {
    pub section: BoardSection,
    pub rect: Rect,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupLayout {
    pub kind: GroupKind,
    pub label: String,
    pub rect: Rect,
    pub corner_radius: f32,
    pub dash: String,
    pub label_x: f32,
    pub label_y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PinLayout {
    pub id: String,
    pub category: PinCategory,
    pub section: BoardSection,
    pub anchor: Anchor,
    pub rect: Rect,
    pub connector: Connector,
    pub fill: String,
    pub designation: String,
    pub secondary_label: Option<String>,
    pub terminal: String,
    /// Trimmed alias, `None` when blank.
    pub alias: Option<String>,
    pub dark: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PinoutLayout {
    pub width: f32,
    pub height: f32,
    pub boards: Vec<BoardLayout>,
    pub edge_pads: Vec<EdgePad>,
    pub groups: Vec<GroupLayout>,
    pub pins: Vec<PinLayout>,
}

impl PinoutLayout {
    pub fn board(&self, section: BoardSection) -> Option<&BoardLayout> {
        self.boards.iter().find(|board| board.section == section)
    }

    pub fn pin(&self, pin_id: &str) -> Option<&PinLayout> {
        self.pins.iter().find(|pin| pin.id == pin_id)
    }

    pub fn group(&self, kind: GroupKind) -> Option<&GroupLayout> {
        self.groups.iter().find(|group| group.kind == kind)
    }
}

/// Lays out one board's pins. A pure function of its inputs: pin positions
/// come precomputed from the catalog and only the alias text is looked up.
pub fn compute_layout(pins: &[PinDefinition], aliases: &AliasMap) -> PinoutLayout {
    let area = canvas();
    let mut boards = vec![BoardLayout {
        section: BoardSection::Primary,
        rect: board_rect(BoardSection::Primary),
    }];
    if pins.iter().any(|pin| pin.section == BoardSection::Secondary) {
        boards.push(BoardLayout {
            section: BoardSection::Secondary,
            rect: board_rect(BoardSection::Secondary),
        });
    }

    let groups = PIN_GROUPS
        .iter()
        .filter_map(|group| layout_group(pins, group))
        .collect();

    let edge_pads = pins.iter().filter_map(edge_pad).collect();

    let pins = pins
        .iter()
        .map(|pin| layout_pin(pin, aliases.get(pin.id).map(String::as_str)))
        .collect();

    PinoutLayout {
        width: area.width,
        height: area.height,
        boards,
        edge_pads,
        groups,
        pins,
    }
}

/// Smallest rectangle covering every listed pin present in `pins`, grown by
/// `padding` on each side. `None` when no listed pin is present.
pub fn group_bounds(pins: &[PinDefinition], ids: &[&str], padding: f32) -> Option<Rect> {
    let mut selected = pins
        .iter()
        .filter(|pin| ids.contains(&pin.id))
        .map(|pin| pin_rect(pin.position.x, pin.position.y));
    let first = selected.next()?;
    let (min_x, min_y, max_x, max_y) = selected.fold(
        (first.x, first.y, first.right(), first.bottom()),
        |(min_x, min_y, max_x, max_y), rect| {
            (
                min_x.min(rect.x),
                min_y.min(rect.y),
                max_x.max(rect.right()),
                max_y.max(rect.bottom()),
            )
        },
    );
    Some(Rect::new(
        min_x - padding,
        min_y - padding,
        max_x - min_x + padding * 2.0,
        max_y - min_y + padding * 2.0,
    ))
}

fn layout_group(pins: &[PinDefinition], group: &PinGroup) -> Option<GroupLayout> {
    let bounds = group_bounds(pins, group.pin_ids, group.padding)?;
    let rect = Rect::new(
        bounds.x,
        bounds.y + group.shift_y,
        bounds.width,
        bounds.height,
    );
    Some(GroupLayout {
        kind: group.kind,
        label: group.label.to_string(),
        rect,
        corner_radius: group.corner_radius,
        dash: group.dash.to_string(),
        label_x: rect.center_x(),
        label_y: rect.y - group.label_gap,
    })
}

/// Gold contact drawn on the board outline for side-mounted pins.
fn edge_pad(pin: &PinDefinition) -> Option<EdgePad> {
    let board = board_rect(pin.section);
    let center_y = pin.position.y + PIN_HEIGHT / 2.0;
    let edge_x = match pin.position.anchor {
        Anchor::Left => board.x,
        Anchor::Right => board.right(),
        Anchor::Bottom => return None,
    };
    Some(EdgePad {
        section: pin.section,
        rect: Rect::new(
            edge_x - EDGE_PAD_WIDTH / 2.0,
            center_y - EDGE_PAD_HEIGHT / 2.0,
            EDGE_PAD_WIDTH,
            EDGE_PAD_HEIGHT,
        ),
    })
}

/// Connector from the pin's own board outline to the pin rectangle. Bounds
/// always come from the pin's section, never the other board.
pub fn connector_for(pin: &PinDefinition) -> Connector {
    let board = board_rect(pin.section);
    let rect = pin_rect(pin.position.x, pin.position.y);
    let center_y = rect.center_y();
    match pin.position.anchor {
        Anchor::Left => Connector {
            x1: board.x,
            y1: center_y,
            x2: rect.right(),
            y2: center_y,
        },
        Anchor::Right => Connector {
            x1: board.right(),
            y1: center_y,
            x2: rect.x,
            y2: center_y,
        },
        Anchor::Bottom => Connector {
            x1: rect.center_x(),
            y1: board.bottom(),
            x2: rect.center_x(),
            y2: rect.y,
        },
    }
}

fn layout_pin(pin: &PinDefinition, alias: Option<&str>) -> PinLayout {
    let alias = alias
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string);
    PinLayout {
        id: pin.id.to_string(),
        category: pin.category,
        section: pin.section,
        anchor: pin.position.anchor,
        rect: Rect::new(pin.position.x, pin.position.y, PIN_WIDTH, PIN_HEIGHT),
        connector: connector_for(pin),
        fill: pin.category.color().to_string(),
        designation: pin.designation.to_string(),
        secondary_label: pin.secondary_label.map(str::to_string),
        terminal: pin.terminal.to_string(),
        alias,
        dark: pin.category.is_ground(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alias::AliasState;
    use crate::board::get_board_variant;

    fn layout_for(board_id: &str) -> PinoutLayout {
        let board = get_board_variant(board_id).unwrap();
        let template = AliasState::init_template();
        compute_layout(&board.pins, template.board(board_id).unwrap())
    }

    #[test]
    fn connectors_start_on_their_own_board() {
        let layout = layout_for("xiao-nrf-plus");
        let primary = layout.board(BoardSection::Primary).unwrap().rect;
        let secondary = layout.board(BoardSection::Secondary).unwrap().rect;

        let tx = layout.pin("p1_11").unwrap();
        assert_eq!(tx.connector.x1, primary.x);
        assert_eq!(tx.connector.x2, tx.rect.right());

        let bat = layout.pin("p0_31").unwrap();
        assert_eq!(bat.connector.x1, secondary.right());
        assert_eq!(bat.connector.x2, bat.rect.x);
        assert_eq!(bat.connector.y1, bat.rect.center_y());
    }

    #[test]
    fn bottom_connectors_drop_from_board_bottom() {
        let layout = layout_for("xiao-nrf");
        let primary = layout.board(BoardSection::Primary).unwrap().rect;
        for pin in layout.pins.iter().filter(|pin| pin.anchor == Anchor::Bottom) {
            assert_eq!(pin.connector.y1, primary.bottom());
            assert_eq!(pin.connector.y2, pin.rect.y);
            assert_eq!(pin.connector.x1, pin.connector.x2);
        }
    }

    #[test]
    fn secondary_board_only_when_needed() {
        assert_eq!(layout_for("xiao-nrf").boards.len(), 1);
        assert_eq!(layout_for("xiao-nrf-plus").boards.len(), 2);
    }

    #[test]
    fn edge_pads_skip_bottom_pins() {
        assert_eq!(layout_for("xiao-nrf").edge_pads.len(), 14);
        assert_eq!(layout_for("xiao-nrf-plus").edge_pads.len(), 23);
    }

    #[test]
    fn analog_group_wraps_the_six_analog_rows() {
        let layout = layout_for("xiao-nrf");
        let group = layout.group(GroupKind::AnalogInput).unwrap();
        assert_eq!(group.rect, Rect::new(166.0, 106.0, 238.0, 458.0));
        assert_eq!(group.label_y, 94.0);
    }

    #[test]
    fn high_frequency_group_is_shifted() {
        let layout = layout_for("xiao-nrf");
        let group = layout.group(GroupKind::HighFrequency).unwrap();
        assert_eq!(group.rect.y, 550.0 - 24.0 + 8.0);
        assert_eq!(group.label_y, group.rect.y - 10.0);
    }

    #[test]
    fn group_without_members_is_omitted() {
        let board = get_board_variant("xiao-nrf-plus").unwrap();
        let secondary_only: Vec<_> = board
            .pins
            .iter()
            .filter(|pin| pin.section == BoardSection::Secondary)
            .cloned()
            .collect();
        let layout = compute_layout(&secondary_only, &AliasMap::new());
        assert!(layout.groups.is_empty());
        assert_eq!(group_bounds(&secondary_only, &["p1_11"], 24.0), None);
    }

    #[test]
    fn blank_alias_is_none_and_text_is_trimmed() {
        let board = get_board_variant("xiao-nrf").unwrap();
        let mut aliases = AliasMap::new();
        aliases.insert("p0_02".to_string(), "  Sensor IN ".to_string());
        aliases.insert("p0_03".to_string(), "   ".to_string());
        let layout = compute_layout(&board.pins, &aliases);
        assert_eq!(layout.pin("p0_02").unwrap().alias.as_deref(), Some("Sensor IN"));
        assert_eq!(layout.pin("p0_03").unwrap().alias, None);
        assert!(layout.pin("gnd").unwrap().dark);
    }
}
