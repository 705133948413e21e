use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::Serialize;
use thiserror::Error;

use crate::catalog::{self, CatalogError, PinDefinition};
use crate::geometry::BoardSection;

pub const DEFAULT_BOARD_ID: &str = "xiao-nrf";

#[derive(Debug, Clone, Serialize)]
pub struct BoardVariant {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub pins: Vec<PinDefinition>,
}

impl BoardVariant {
    pub fn has_secondary(&self) -> bool {
        self.pins
            .iter()
            .any(|pin| pin.section == BoardSection::Secondary)
    }

    pub fn summary(&self) -> BoardSummary {
        BoardSummary {
            id: self.id,
            label: self.label,
            description: self.description,
            pin_count: self.pins.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSummary {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub pin_count: usize,
}

/// Lookup misses against the closed board/pin id sets. These indicate a
/// caller out of sync with the catalog, never bad user data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("unknown board id `{0}`")]
    UnknownBoard(String),
    #[error("board `{board}` has no pin `{pin}`")]
    UnknownPin { board: String, pin: String },
}

static BOARDS: Lazy<Vec<BoardVariant>> = Lazy::new(|| {
    vec![
        BoardVariant {
            id: "xiao-nrf",
            label: "XIAO nRF52840",
            description: "Standard nRF52840 / Sense pin layout",
            pins: catalog::xiao_nrf_pins(),
        },
        BoardVariant {
            id: "xiao-nrf-plus",
            label: "XIAO nRF52840 Plus",
            description: "Plus edition with the castellated back-side IO",
            pins: catalog::xiao_nrf_plus_pins(),
        },
    ]
});

pub fn boards() -> &'static [BoardVariant] {
    &BOARDS
}

pub fn get_board_variant(board_id: &str) -> Result<&'static BoardVariant, LookupError> {
    BOARDS
        .iter()
        .find(|board| board.id == board_id)
        .ok_or_else(|| LookupError::UnknownBoard(board_id.to_string()))
}

pub fn list_board_variants() -> Vec<BoardSummary> {
    BOARDS.iter().map(BoardVariant::summary).collect()
}

/// Checks the registry invariants: board ids are unique and every board's
/// pin ids are unique within that board.
pub fn validate_catalog() -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for board in BOARDS.iter() {
        if !seen.insert(board.id) {
            return Err(CatalogError::DuplicateBoard(board.id.to_string()));
        }
        catalog::validate_pins(board.id, &board.pins)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_boards_in_declaration_order() {
        let ids: Vec<_> = list_board_variants().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["xiao-nrf", "xiao-nrf-plus"]);
    }

    #[test]
    fn unknown_board_is_an_error() {
        let err = get_board_variant("xiao-esp32").unwrap_err();
        assert_eq!(err, LookupError::UnknownBoard("xiao-esp32".to_string()));
    }

    #[test]
    fn catalog_is_valid() {
        validate_catalog().unwrap();
    }

    #[test]
    fn only_plus_has_secondary_board() {
        assert!(!get_board_variant("xiao-nrf").unwrap().has_secondary());
        assert!(get_board_variant("xiao-nrf-plus").unwrap().has_secondary());
        assert_eq!(get_board_variant(DEFAULT_BOARD_ID).unwrap().pins.len(), 19);
        assert_eq!(get_board_variant("xiao-nrf-plus").unwrap().summary().pin_count, 23);
    }
}
