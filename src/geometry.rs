//! Fixed layout constants for the pinout canvas and the formulas that turn a
//! column slot into absolute pin coordinates.
//!
//! Every coordinate in the pin catalog is derived from these values once, at
//! catalog construction. Nothing here is recomputed per render.

use serde::Serialize;

pub const CANVAS_WIDTH: f32 = 1300.0;
pub const CANVAS_HEIGHT: f32 = 1500.0;

pub const BOARD_WIDTH: f32 = 260.0;
pub const BOARD_HEIGHT: f32 = 420.0;
pub const PRIMARY_BOARD_Y: f32 = 160.0;
/// Vertical gap between the primary board's bottom edge and the secondary board.
pub const SECONDARY_BOARD_GAP: f32 = 220.0;

pub const PIN_WIDTH: f32 = 190.0;
pub const PIN_HEIGHT: f32 = 60.0;
/// Horizontal distance between a board edge and the facing side of a pin rectangle.
pub const PIN_GAP: f32 = 140.0;
pub const ROW_SPACING: f32 = 70.0;
/// Secondary columns start this far below the secondary board's top edge.
pub const SECONDARY_ROW_INSET: f32 = 40.0;

pub const BOTTOM_ROW_OFFSET: f32 = 80.0;
pub const BOTTOM_ROW_INSET: f32 = 20.0;
pub const BOTTOM_ROW_STRIDE: f32 = 110.0;

pub const EDGE_PAD_WIDTH: f32 = 14.0;
pub const EDGE_PAD_HEIGHT: f32 = 26.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Which physical board a pin sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardSection {
    Primary,
    Secondary,
}

/// Board edge a pin is attached to. Decides where the pin sits and how its
/// connector is routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    Left,
    Right,
    Bottom,
}

/// A vertical run of pins along one edge of one board section.
///
/// `slot_offset` shifts the whole column by whole rows. A column with fewer
/// pins than its neighbour can be pulled up (negative offset) so it lines up
/// with the header it is physically next to; each board variant declares the
/// offset for each of its columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub section: BoardSection,
    pub edge: Anchor,
    pub slot_offset: i32,
}

impl Column {
    pub const fn new(section: BoardSection, edge: Anchor) -> Self {
        Self {
            section,
            edge,
            slot_offset: 0,
        }
    }

    pub const fn with_slot_offset(mut self, slot_offset: i32) -> Self {
        self.slot_offset = slot_offset;
        self
    }
}

pub fn board_x() -> f32 {
    (CANVAS_WIDTH - BOARD_WIDTH) / 2.0
}

pub fn canvas() -> Rect {
    Rect::new(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT)
}

pub fn board_rect(section: BoardSection) -> Rect {
    let y = match section {
        BoardSection::Primary => PRIMARY_BOARD_Y,
        BoardSection::Secondary => PRIMARY_BOARD_Y + BOARD_HEIGHT + SECONDARY_BOARD_GAP,
    };
    Rect::new(board_x(), y, BOARD_WIDTH, BOARD_HEIGHT)
}

/// Y of the first row center for a side column of the given section.
pub fn column_start_y(section: BoardSection) -> f32 {
    match section {
        BoardSection::Primary => board_rect(section).y,
        BoardSection::Secondary => board_rect(section).y + SECONDARY_ROW_INSET,
    }
}

/// Top edge of a pin rectangle whose vertical center lands on row `slot`.
pub fn row_y(start_y: f32, spacing: f32, slot: i32) -> f32 {
    start_y + spacing * slot as f32 - PIN_HEIGHT / 2.0
}

/// X of a pin rectangle on a side edge. Bottom pins have no fixed X.
pub fn side_pin_x(section: BoardSection, edge: Anchor) -> Option<f32> {
    let board = board_rect(section);
    match edge {
        Anchor::Left => Some(board.x - PIN_WIDTH - PIN_GAP),
        Anchor::Right => Some(board.right() + PIN_GAP),
        Anchor::Bottom => None,
    }
}

/// Top-left corner of the pin rectangle at `index` within `column`.
pub fn column_pin_origin(column: Column, index: usize) -> (f32, f32) {
    let slot = index as i32 + column.slot_offset;
    match side_pin_x(column.section, column.edge) {
        Some(x) => {
            let y = row_y(column_start_y(column.section), ROW_SPACING, slot);
            (x, y)
        }
        None => {
            let board = board_rect(column.section);
            let x = board.x + BOTTOM_ROW_INSET + slot as f32 * BOTTOM_ROW_STRIDE;
            let y = board.bottom() + BOTTOM_ROW_OFFSET;
            (x, y)
        }
    }
}

pub fn pin_rect(x: f32, y: f32) -> Rect {
    Rect::new(x, y, PIN_WIDTH, PIN_HEIGHT)
}
