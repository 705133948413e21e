use std::collections::HashSet;
use std::sync::Arc;

use xiao_pinmap::geometry::{Anchor, BoardSection};
use xiao_pinmap::layout::GroupKind;
use xiao_pinmap::catalog::PinPosition;
use xiao_pinmap::{
    AliasMap, AliasState, BoardVariant, Config, PinCategory, PinDefinition, Session,
    compute_layout, get_board_variant, list_board_variants, render_pinout,
};

fn board_ids() -> Vec<&'static str> {
    list_board_variants().iter().map(|board| board.id).collect()
}

fn assert_valid_svg(svg: &str, board: &str) {
    assert!(svg.contains("<svg"), "{board}: missing <svg tag");
    assert!(svg.contains("</svg>"), "{board}: missing </svg tag");
}

#[test]
fn pin_ids_are_unique_per_board() {
    for id in board_ids() {
        let board = get_board_variant(id).unwrap();
        let unique: HashSet<_> = board.pins.iter().map(|pin| pin.id).collect();
        assert_eq!(unique.len(), board.pins.len(), "{id}: duplicate pin id");
    }
}

#[test]
fn template_has_entry_for_every_pin() {
    let template = AliasState::init_template();
    for id in board_ids() {
        let board = get_board_variant(id).unwrap();
        for pin in &board.pins {
            assert!(
                template.alias(id, pin.id).is_ok(),
                "{id}: template missing {}",
                pin.id
            );
        }
    }
}

#[test]
fn set_alias_leaves_other_boards_alone() {
    let state = AliasState::init_template();
    for edited in board_ids() {
        let board = get_board_variant(edited).unwrap();
        for pin in &board.pins {
            let next = state.set_alias(edited, pin.id, "X").unwrap();
            for other in board_ids().into_iter().filter(|other| *other != edited) {
                assert!(Arc::ptr_eq(
                    state.board(other).unwrap(),
                    next.board(other).unwrap()
                ));
            }
        }
    }
}

#[test]
fn reset_restores_every_pin_of_the_board() {
    let template = AliasState::init_template();
    let board = get_board_variant("xiao-nrf-plus").unwrap();
    let mut state = template.clone();
    for pin in board.pins.iter().step_by(3) {
        state = state.set_alias(board.id, pin.id, format!("edited {}", pin.id)).unwrap();
    }
    state = state.set_alias("xiao-nrf", "gnd", "0V").unwrap();

    let reset = state.reset_board(&template, board.id).unwrap();

    let restored: &AliasMap = reset.board(board.id).unwrap();
    let expected: &AliasMap = template.board(board.id).unwrap();
    assert_eq!(restored, expected);
    assert_eq!(reset.alias("xiao-nrf", "gnd").unwrap(), "0V");
}

#[test]
fn rendering_is_deterministic() {
    let config = Config::default();
    for id in board_ids() {
        let board = get_board_variant(id).unwrap();
        let mut aliases = AliasMap::new();
        aliases.insert(board.pins[0].id.to_string(), "First".to_string());
        let first = render_pinout(&board.pins, &aliases, &config);
        let second = render_pinout(&board.pins, &aliases, &config);
        assert_valid_svg(&first, id);
        assert_eq!(first, second, "{id}: render differs between calls");
    }
}

#[test]
fn connectors_anchor_on_board_edges() {
    for id in board_ids() {
        let board = get_board_variant(id).unwrap();
        let layout = compute_layout(&board.pins, &AliasMap::new());
        for pin in &layout.pins {
            let outline = layout.board(pin.section).unwrap().rect;
            match pin.anchor {
                Anchor::Left => assert_eq!(pin.connector.x1, outline.x, "{}", pin.id),
                Anchor::Right => assert_eq!(pin.connector.x1, outline.right(), "{}", pin.id),
                Anchor::Bottom => assert_eq!(pin.connector.y1, outline.bottom(), "{}", pin.id),
            }
        }
    }
}

#[test]
fn group_overlay_omitted_when_no_member_present() {
    let board = get_board_variant("xiao-nrf").unwrap();
    let without_tx: Vec<_> = board
        .pins
        .iter()
        .filter(|pin| pin.id != "p1_11")
        .cloned()
        .collect();
    let layout = compute_layout(&without_tx, &AliasMap::new());
    assert!(layout.group(GroupKind::HighFrequency).is_none());
    assert!(layout.group(GroupKind::AnalogInput).is_some());

    let svg = render_pinout(&without_tx, &AliasMap::new(), &Config::default());
    assert!(!svg.contains("High Frequency"));
    assert!(svg.contains("Analog Input"));
}

#[test]
fn sensor_alias_scenario() {
    let config = Config::default();
    let mut session = Session::new().unwrap();
    assert_eq!(session.active_board().id, "xiao-nrf");

    session.edit_alias("p0_02", "Sensor IN").unwrap();
    let layout = session.layout().unwrap();
    let ain0 = layout.pins.iter().find(|pin| pin.terminal == "AIN0").unwrap();
    assert_eq!(ain0.alias.as_deref(), Some("Sensor IN"));
    let gnd = layout.pin("gnd").unwrap();
    assert_eq!(gnd.category, PinCategory::Ground);
    assert!(gnd.dark);

    let svg = session.render(&config).unwrap();
    assert!(svg.contains(
        "<tspan class=\"pin-terminal\">AIN0</tspan><tspan>\u{3000}</tspan><tspan class=\"pin-alias pin-alias--active\""
    ));
    assert!(svg.contains(">Sensor IN</tspan>"));
    assert!(svg.contains("<g class=\"pin-node pin-node--dark\" data-pin=\"gnd\">"));

    session.edit_alias("gnd", "Chassis").unwrap();
    let svg = session.render(&config).unwrap();
    assert!(svg.contains("<g class=\"pin-node pin-node--dark\" data-pin=\"gnd\">"));

    session.select_board("xiao-nrf-plus").unwrap();
    let template = AliasState::init_template();
    assert_eq!(
        session.active_aliases().unwrap()["p0_02"],
        template.alias("xiao-nrf-plus", "p0_02").unwrap()
    );
    let plus_layout = session.layout().unwrap();
    assert!(plus_layout.board(BoardSection::Secondary).is_some());
    assert_eq!(plus_layout.pin("p0_02").unwrap().alias, None);
}

#[test]
fn export_is_byte_identical_without_changes() {
    let mut session = Session::with_board("xiao-nrf-plus").unwrap();
    session.edit_alias("p0_31", "LiPo").unwrap();
    let config = Config::default();
    let first = session.export(&config).unwrap();
    let second = session.export(&config).unwrap();
    assert_eq!(first.contents.as_bytes(), second.contents.as_bytes());
    assert_eq!(first.file_name, "seeed-xiao-nrf-plus-pinout.svg");

    let dir = tempfile::tempdir().unwrap();
    let path = first.write_into(dir.path()).unwrap();
    assert_eq!(std::fs::read(path).unwrap(), second.contents.into_bytes());
}

#[test]
fn template_seeds_catalog_default_alias() {
    let board = BoardVariant {
        id: "bench-board",
        label: "Bench board",
        description: "Single battery pin",
        pins: vec![PinDefinition {
            id: "vbat",
            designation: "BAT+",
            terminal: "VBAT",
            secondary_label: None,
            category: PinCategory::Power,
            section: BoardSection::Primary,
            position: PinPosition {
                x: 190.0,
                y: 200.0,
                anchor: Anchor::Left,
            },
            default_alias: Some("VBAT"),
        }],
    };
    let template = AliasState::from_boards(std::slice::from_ref(&board));
    assert_eq!(template.alias("bench-board", "vbat").unwrap(), "VBAT");

    let edited = template.set_alias("bench-board", "vbat", "LiPo").unwrap();
    assert_eq!(edited.alias("bench-board", "vbat").unwrap(), "LiPo");
    let reset = edited.reset_board(&template, "bench-board").unwrap();
    assert_eq!(reset.alias("bench-board", "vbat").unwrap(), "VBAT");

    let layout = compute_layout(&board.pins, reset.board("bench-board").unwrap());
    assert_eq!(layout.pin("vbat").unwrap().alias.as_deref(), Some("VBAT"));
}
