//! The single owner of mutable state: which board is active and the alias
//! store. Every user action maps to one method here and completes
//! synchronously.

use tracing::debug;

use crate::alias::{AliasMap, AliasStore};
use crate::board::{BoardVariant, DEFAULT_BOARD_ID, LookupError, get_board_variant};
use crate::config::Config;
use crate::export::{ExportedFile, svg_file};
use crate::layout::{PinoutLayout, compute_layout};
use crate::pin_list::{PinRow, pin_rows};
use crate::render::render_svg;

#[derive(Debug, Clone)]
pub struct Session {
    active: &'static BoardVariant,
    aliases: AliasStore,
}

impl Session {
    pub fn new() -> Result<Self, LookupError> {
        Self::with_board(DEFAULT_BOARD_ID)
    }

    pub fn with_board(board_id: &str) -> Result<Self, LookupError> {
        Ok(Self {
            active: get_board_variant(board_id)?,
            aliases: AliasStore::new(),
        })
    }

    pub fn active_board(&self) -> &'static BoardVariant {
        self.active
    }

    /// Switches the active board. Alias slices of every board are kept.
    pub fn select_board(&mut self, board_id: &str) -> Result<(), LookupError> {
        self.active = get_board_variant(board_id)?;
        debug!(board = board_id, "selected board");
        Ok(())
    }

    pub fn active_aliases(&self) -> Result<&AliasMap, LookupError> {
        self.aliases.slice(self.active.id)
    }

    pub fn alias_store(&self) -> &AliasStore {
        &self.aliases
    }

    /// Edits one alias on the active board.
    pub fn edit_alias(&mut self, pin_id: &str, text: impl Into<String>) -> Result<(), LookupError> {
        self.aliases.set_alias(self.active.id, pin_id, text)
    }

    /// Restores the active board's aliases to their defaults.
    pub fn reset_aliases(&mut self) -> Result<(), LookupError> {
        self.aliases.reset_board(self.active.id)
    }

    pub fn rows(&self) -> Result<Vec<PinRow>, LookupError> {
        Ok(pin_rows(&self.active.pins, self.active_aliases()?))
    }

    pub fn layout(&self) -> Result<PinoutLayout, LookupError> {
        Ok(compute_layout(&self.active.pins, self.active_aliases()?))
    }

    pub fn render(&self, config: &Config) -> Result<String, LookupError> {
        Ok(render_svg(&self.layout()?, &config.theme, &config.render))
    }

    /// Renders the current state and packages it for download. The drawing
    /// is dropped once the file is built.
    pub fn export(&self, config: &Config) -> Result<ExportedFile, LookupError> {
        let drawing = self.render(config)?;
        Ok(svg_file(&config.render.file_prefix, self.active.id, &drawing))
    }
}
