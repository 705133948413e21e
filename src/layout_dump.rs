use crate::layout::PinoutLayout;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// JSON snapshot of a computed layout, for inspecting coordinates without
/// reading SVG.
#[derive(Debug, Serialize)]
pub struct LayoutDump<'a> {
    pub board: &'a str,
    #[serde(flatten)]
    pub layout: &'a PinoutLayout,
}

impl<'a> LayoutDump<'a> {
    pub fn new(board: &'a str, layout: &'a PinoutLayout) -> Self {
        Self { board, layout }
    }
}

pub fn write_layout_dump(path: &Path, board: &str, layout: &PinoutLayout) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &LayoutDump::new(board, layout))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alias::AliasMap;
    use crate::board::get_board_variant;
    use crate::layout::compute_layout;

    #[test]
    fn dump_carries_board_and_pins() {
        let board = get_board_variant("xiao-nrf").unwrap();
        let layout = compute_layout(&board.pins, &AliasMap::new());
        let value = serde_json::to_value(LayoutDump::new(board.id, &layout)).unwrap();
        assert_eq!(value["board"], "xiao-nrf");
        assert_eq!(value["pins"].as_array().unwrap().len(), 19);
        assert_eq!(value["pins"][8]["category"], "ground");
        assert_eq!(value["pins"][0]["anchor"], "left");
    }
}
