pub mod alias;
pub mod board;
pub mod catalog;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod export;
pub mod geometry;
pub mod layout;
pub mod layout_dump;
pub mod legend;
pub mod pin_list;
pub mod render;
pub mod session;
pub mod theme;

pub use alias::{AliasMap, AliasState, AliasStore};
pub use board::{
    BoardSummary, BoardVariant, LookupError, get_board_variant, list_board_variants,
    validate_catalog,
};
pub use catalog::{CatalogError, PinCategory, PinDefinition};
#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, RenderConfig, load_config};
pub use export::{ExportedFile, export_file_name, export_svg};
pub use layout::{PinoutLayout, compute_layout};
pub use legend::legend_entries;
pub use render::render_svg;
pub use session::Session;
pub use theme::Theme;

/// Lays out and renders `pins` with `aliases` in one call.
pub fn render_pinout(pins: &[PinDefinition], aliases: &AliasMap, config: &Config) -> String {
    let layout = compute_layout(pins, aliases);
    render_svg(&layout, &config.theme, &config.render)
}
