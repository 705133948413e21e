//! Static pin tables for each board variant.
//!
//! Pins are declared column by column; positions are resolved from the
//! geometry module when the tables are expanded into [`PinDefinition`]s.

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use crate::geometry::{Anchor, BoardSection, Column, column_pin_origin};

use PinCategory::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PinCategory {
    Analog,
    Digital,
    Power,
    Ground,
    Spi,
    I2c,
    Uart,
    GenericPin,
    Nfc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub label: &'static str,
    pub color: &'static str,
}

impl PinCategory {
    /// Declaration order; the legend lists categories in this order.
    pub const ALL: [PinCategory; 9] = [
        PinCategory::Analog,
        PinCategory::Digital,
        PinCategory::Power,
        PinCategory::Ground,
        PinCategory::Spi,
        PinCategory::I2c,
        PinCategory::Uart,
        PinCategory::GenericPin,
        PinCategory::Nfc,
    ];

    /// The one category-to-color table. Pads and the legend both read it.
    pub const fn info(self) -> CategoryInfo {
        match self {
            PinCategory::Analog => CategoryInfo {
                label: "Analog",
                color: "#f7b2c4",
            },
            PinCategory::Digital => CategoryInfo {
                label: "Digital",
                color: "#8cc3ff",
            },
            PinCategory::Power => CategoryInfo {
                label: "Power",
                color: "#ff8fa2",
            },
            PinCategory::Ground => CategoryInfo {
                label: "GND",
                color: "#4c4f58",
            },
            PinCategory::Spi => CategoryInfo {
                label: "SPI",
                color: "#d0c1ff",
            },
            PinCategory::I2c => CategoryInfo {
                label: "I2C",
                color: "#86d7a2",
            },
            PinCategory::Uart => CategoryInfo {
                label: "UART",
                color: "#ffe28b",
            },
            PinCategory::GenericPin => CategoryInfo {
                label: "Pin No.",
                color: "#a8d07c",
            },
            PinCategory::Nfc => CategoryInfo {
                label: "NFC",
                color: "#6cd6ff",
            },
        }
    }

    pub fn color(self) -> &'static str {
        self.info().color
    }

    pub fn is_ground(self) -> bool {
        self == PinCategory::Ground
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PinPosition {
    pub x: f32,
    pub y: f32,
    pub anchor: Anchor,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PinDefinition {
    /// Unique within one board's catalog only.
    pub id: &'static str,
    /// Hardware designation, e.g. `P0.02`.
    pub designation: &'static str,
    /// Functional signal name, e.g. `MOSI`.
    pub terminal: &'static str,
    /// Arduino-style numbering, when the pin has one.
    pub secondary_label: Option<&'static str>,
    pub category: PinCategory,
    pub section: BoardSection,
    pub position: PinPosition,
    pub default_alias: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("board `{board}` declares pin id `{pin}` more than once")]
    DuplicatePin { board: String, pin: String },
    #[error("board id `{0}` is declared more than once")]
    DuplicateBoard(String),
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct PinSpec {
    id: &'static str,
    designation: &'static str,
    terminal: &'static str,
    secondary_label: Option<&'static str>,
    category: PinCategory,
    default_alias: Option<&'static str>,
}

const fn pin(
    id: &'static str,
    designation: &'static str,
    terminal: &'static str,
    secondary_label: Option<&'static str>,
    category: PinCategory,
) -> PinSpec {
    PinSpec {
        id,
        designation,
        terminal,
        secondary_label,
        category,
        default_alias: None,
    }
}

pub(crate) struct ColumnSpec {
    pub column: Column,
    pub pins: &'static [PinSpec],
}

/// Expands column tables into positioned pins, in declaration order.
pub(crate) fn build_pins(columns: &[ColumnSpec]) -> Vec<PinDefinition> {
    let mut pins = Vec::new();
    for spec in columns {
        for (index, pin) in spec.pins.iter().enumerate() {
            let (x, y) = column_pin_origin(spec.column, index);
            pins.push(PinDefinition {
                id: pin.id,
                designation: pin.designation,
                terminal: pin.terminal,
                secondary_label: pin.secondary_label,
                category: pin.category,
                section: spec.column.section,
                position: PinPosition {
                    x,
                    y,
                    anchor: spec.column.edge,
                },
                default_alias: pin.default_alias,
            });
        }
    }
    pins
}

pub fn validate_pins(board_id: &str, pins: &[PinDefinition]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for pin in pins {
        if !seen.insert(pin.id) {
            return Err(CatalogError::DuplicatePin {
                board: board_id.to_string(),
                pin: pin.id.to_string(),
            });
        }
    }
    Ok(())
}

const PRIMARY_LEFT: Column = Column::new(BoardSection::Primary, Anchor::Left);
const PRIMARY_RIGHT: Column = Column::new(BoardSection::Primary, Anchor::Right);
const PRIMARY_BOTTOM: Column = Column::new(BoardSection::Primary, Anchor::Bottom);
const SECONDARY_RIGHT: Column = Column::new(BoardSection::Secondary, Anchor::Right);
// Three pins against a six-pin right column; pulled up one row to sit by the
// back-side header.
const SECONDARY_LEFT_PLUS: Column =
    Column::new(BoardSection::Secondary, Anchor::Left).with_slot_offset(-1);

const XIAO_NRF_LEFT: &[PinSpec] = &[
    pin("p0_02", "P0.02", "AIN0", Some("D0 / A0"), Analog),
    pin("p0_03", "P0.03", "AIN1", Some("D1 / A1"), Analog),
    pin("p0_28", "P0.28", "AIN4", Some("D2 / A2"), Analog),
    pin("p0_29", "P0.29", "AIN5", Some("D3 / A3"), Analog),
    pin("p0_04", "P0.04", "SDA / AIN2", Some("D4 / A4"), I2c),
    pin("p0_05", "P0.05", "SCL / AIN3", Some("D5 / A5"), I2c),
    pin("p1_11", "P1.11", "TX", Some("D6"), Uart),
];

const XIAO_NRF_PLUS_LEFT: &[PinSpec] = &[
    pin("p0_02", "P0.02", "AIN0", Some("D0 / A0"), Analog),
    pin("p0_03", "P0.03", "AIN1", Some("D1 / A1"), Analog),
    pin("p0_28", "P0.28", "AIN2", Some("D2 / A2"), Analog),
    pin("p0_29", "P0.29", "AIN3", Some("D3 / A3"), Analog),
    pin("p0_04", "P0.04", "SDA / A4", Some("D4 / SDA"), I2c),
    pin("p0_05", "P0.05", "SCL / A5", Some("D5 / SCL"), I2c),
    pin("p1_11", "P1.11", "TX", Some("D6"), Uart),
];

const XIAO_RIGHT: &[PinSpec] = &[
    pin("5v", "5V", "Power In", Some("5V"), Power),
    pin("gnd", "GND", "Ground", Some("GND"), Ground),
    pin("3v3", "3V3", "Power Out", Some("3V3"), Power),
    pin("p1_15", "P1.15", "MOSI", Some("D10"), Spi),
    pin("p1_14", "P1.14", "MISO", Some("D9"), Spi),
    pin("p1_13", "P1.13", "SCK", Some("D8"), Spi),
    pin("p1_12", "P1.12", "RX", Some("D7"), Uart),
];

const XIAO_NRF_BOTTOM: &[PinSpec] = &[
    pin("p0_16", "P0.16", "General IO", None, GenericPin),
    pin("p1_00", "P1.00", "General IO", None, GenericPin),
    pin("p1_10", "P1.10", "General IO", None, GenericPin),
    pin("p0_10", "P0.10", "NFC 1", None, Nfc),
    pin("p0_09", "P0.09", "NFC 2", None, Nfc),
];

const XIAO_NRF_PLUS_SECONDARY_LEFT: &[PinSpec] = &[
    pin("p1_07", "P1.07", "MOSI1", Some("D19"), Spi),
    pin("p1_05", "P1.05", "MISO1", Some("D18"), Spi),
    pin("p1_03", "P1.03", "SCK1", Some("D17"), Spi),
];

const XIAO_NRF_PLUS_SECONDARY_RIGHT: &[PinSpec] = &[
    pin("p1_15_i2s", "P0.15", "I2S_SD", Some("D11"), GenericPin),
    pin("p0_19", "P0.19", "I2S_SCK", Some("D12"), GenericPin),
    pin("p1_01", "P1.01", "I2S_WS", Some("D13"), GenericPin),
    pin("p0_08", "P0.08", "RX1 / NFC1", Some("D14"), Uart),
    pin("p0_10_plus", "P0.10", "TX1 / NFC2", Some("D15"), Uart),
    pin("p0_31", "P0.31", "BAT", Some("D16"), Power),
];

pub(crate) fn xiao_nrf_pins() -> Vec<PinDefinition> {
    build_pins(&[
        ColumnSpec {
            column: PRIMARY_LEFT,
            pins: XIAO_NRF_LEFT,
        },
        ColumnSpec {
            column: PRIMARY_RIGHT,
            pins: XIAO_RIGHT,
        },
        ColumnSpec {
            column: PRIMARY_BOTTOM,
            pins: XIAO_NRF_BOTTOM,
        },
    ])
}

pub(crate) fn xiao_nrf_plus_pins() -> Vec<PinDefinition> {
    build_pins(&[
        ColumnSpec {
            column: PRIMARY_LEFT,
            pins: XIAO_NRF_PLUS_LEFT,
        },
        ColumnSpec {
            column: PRIMARY_RIGHT,
            pins: XIAO_RIGHT,
        },
        ColumnSpec {
            column: SECONDARY_LEFT_PLUS,
            pins: XIAO_NRF_PLUS_SECONDARY_LEFT,
        },
        ColumnSpec {
            column: SECONDARY_RIGHT,
            pins: XIAO_NRF_PLUS_SECONDARY_RIGHT,
        },
    ])
}
