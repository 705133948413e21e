//! Per-board alias text with reset-to-template semantics.
//!
//! Each board's slice lives behind an `Arc`, so an edit to one board clones
//! only that board's map; every other slice keeps pointing at the same
//! allocation.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::board::{BoardVariant, LookupError, boards};

/// `pin id -> alias text` for one board.
pub type AliasMap = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AliasState {
    slices: BTreeMap<String, Arc<AliasMap>>,
}

impl AliasState {
    /// One entry per pin per board, seeded from each pin's default alias.
    pub fn init_template() -> Self {
        Self::from_boards(boards())
    }

    pub fn from_boards(boards: &[BoardVariant]) -> Self {
        let slices = boards
            .iter()
            .map(|board| {
                let map: AliasMap = board
                    .pins
                    .iter()
                    .map(|pin| {
                        (
                            pin.id.to_string(),
                            pin.default_alias.unwrap_or_default().to_string(),
                        )
                    })
                    .collect();
                (board.id.to_string(), Arc::new(map))
            })
            .collect();
        Self { slices }
    }

    pub fn board(&self, board_id: &str) -> Result<&Arc<AliasMap>, LookupError> {
        self.slices
            .get(board_id)
            .ok_or_else(|| LookupError::UnknownBoard(board_id.to_string()))
    }

    pub fn alias(&self, board_id: &str, pin_id: &str) -> Result<&str, LookupError> {
        self.board(board_id)?
            .get(pin_id)
            .map(String::as_str)
            .ok_or_else(|| LookupError::UnknownPin {
                board: board_id.to_string(),
                pin: pin_id.to_string(),
            })
    }

    /// Returns a new state with exactly one `(board, pin)` entry replaced.
    /// The text is stored as given; blank text means "no alias".
    pub fn set_alias(
        &self,
        board_id: &str,
        pin_id: &str,
        text: impl Into<String>,
    ) -> Result<AliasState, LookupError> {
        let slice = self.board(board_id)?;
        if !slice.contains_key(pin_id) {
            return Err(LookupError::UnknownPin {
                board: board_id.to_string(),
                pin: pin_id.to_string(),
            });
        }
        let mut next = self.clone();
        let target = next
            .slices
            .get_mut(board_id)
            .ok_or_else(|| LookupError::UnknownBoard(board_id.to_string()))?;
        let text = text.into();
        debug!(board = board_id, pin = pin_id, alias = %text, "set alias");
        Arc::make_mut(target).insert(pin_id.to_string(), text);
        Ok(next)
    }

    /// Returns a new state whose `board_id` slice is a fresh copy of the
    /// template's slice. Other boards are untouched.
    pub fn reset_board(
        &self,
        template: &AliasState,
        board_id: &str,
    ) -> Result<AliasState, LookupError> {
        let fresh = AliasMap::clone(template.board(board_id)?);
        if !self.slices.contains_key(board_id) {
            return Err(LookupError::UnknownBoard(board_id.to_string()));
        }
        let mut next = self.clone();
        debug!(board = board_id, "reset aliases");
        next.slices.insert(board_id.to_string(), Arc::new(fresh));
        Ok(next)
    }
}

/// Holds the template captured at startup alongside the live state. All
/// mutation goes through [`AliasStore::set_alias`] and
/// [`AliasStore::reset_board`].
#[derive(Debug, Clone)]
pub struct AliasStore {
    template: AliasState,
    current: AliasState,
}

impl AliasStore {
    pub fn new() -> Self {
        let template = AliasState::init_template();
        Self {
            current: template.clone(),
            template,
        }
    }

    pub fn template(&self) -> &AliasState {
        &self.template
    }

    pub fn state(&self) -> &AliasState {
        &self.current
    }

    pub fn slice(&self, board_id: &str) -> Result<&AliasMap, LookupError> {
        self.current.board(board_id).map(Arc::as_ref)
    }

    pub fn set_alias(
        &mut self,
        board_id: &str,
        pin_id: &str,
        text: impl Into<String>,
    ) -> Result<(), LookupError> {
        self.current = self.current.set_alias(board_id, pin_id, text)?;
        Ok(())
    }

    pub fn reset_board(&mut self, board_id: &str) -> Result<(), LookupError> {
        self.current = self.current.reset_board(&self.template, board_id)?;
        Ok(())
    }
}

impl Default for AliasStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_covers_every_pin() {
        let template = AliasState::init_template();
        for board in boards() {
            let slice = template.board(board.id).unwrap();
            assert_eq!(slice.len(), board.pins.len());
            for pin in &board.pins {
                assert_eq!(
                    template.alias(board.id, pin.id).unwrap(),
                    pin.default_alias.unwrap_or_default()
                );
            }
        }
    }

    #[test]
    fn set_alias_shares_untouched_slices() {
        let state = AliasState::init_template();
        let next = state.set_alias("xiao-nrf", "p0_02", "Sensor IN").unwrap();
        assert_eq!(next.alias("xiao-nrf", "p0_02").unwrap(), "Sensor IN");
        assert_eq!(state.alias("xiao-nrf", "p0_02").unwrap(), "");
        assert!(Arc::ptr_eq(
            state.board("xiao-nrf-plus").unwrap(),
            next.board("xiao-nrf-plus").unwrap()
        ));
    }

    #[test]
    fn set_alias_rejects_unknown_ids() {
        let state = AliasState::init_template();
        assert_eq!(
            state.set_alias("nope", "p0_02", "x").unwrap_err(),
            LookupError::UnknownBoard("nope".to_string())
        );
        // p0_16 exists on the base board only.
        assert_eq!(
            state.set_alias("xiao-nrf-plus", "p0_16", "x").unwrap_err(),
            LookupError::UnknownPin {
                board: "xiao-nrf-plus".to_string(),
                pin: "p0_16".to_string(),
            }
        );
    }

    #[test]
    fn empty_text_is_accepted() {
        let mut store = AliasStore::new();
        store.set_alias("xiao-nrf", "gnd", "   ").unwrap();
        assert_eq!(store.state().alias("xiao-nrf", "gnd").unwrap(), "   ");
        store.set_alias("xiao-nrf", "gnd", "").unwrap();
        assert_eq!(store.state().alias("xiao-nrf", "gnd").unwrap(), "");
    }

    #[test]
    fn reset_restores_template_and_leaves_other_boards() {
        let mut store = AliasStore::new();
        store.set_alias("xiao-nrf", "p0_02", "A").unwrap();
        store.set_alias("xiao-nrf", "p1_12", "B").unwrap();
        store.set_alias("xiao-nrf-plus", "p0_31", "Battery").unwrap();

        store.reset_board("xiao-nrf").unwrap();

        let expected: &AliasMap = store.template().board("xiao-nrf").unwrap();
        assert_eq!(store.slice("xiao-nrf").unwrap(), expected);
        assert_eq!(
            store.state().alias("xiao-nrf-plus", "p0_31").unwrap(),
            "Battery"
        );
    }
}
