//! Tabular view of a board's pins and their editable alias fields.

use serde::Serialize;

use crate::alias::AliasMap;
use crate::catalog::PinDefinition;

/// Shown in the secondary-label column when a pin has no Arduino number.
pub const MISSING_LABEL: &str = "\u{2014}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PinRow {
    pub id: String,
    pub designation: String,
    pub secondary_label: String,
    pub terminal: String,
    /// Raw alias text as stored, untrimmed.
    pub alias: String,
}

/// One row per pin, in catalog order.
pub fn pin_rows(pins: &[PinDefinition], aliases: &AliasMap) -> Vec<PinRow> {
    pins.iter()
        .map(|pin| PinRow {
            id: pin.id.to_string(),
            designation: pin.designation.to_string(),
            secondary_label: pin.secondary_label.unwrap_or(MISSING_LABEL).to_string(),
            terminal: pin.terminal.to_string(),
            alias: aliases.get(pin.id).cloned().unwrap_or_default(),
        })
        .collect()
}

/// Plain-text table with aligned columns.
pub fn format_table(rows: &[PinRow]) -> String {
    const HEADERS: [&str; 5] = ["ID", "Pin", "Arduino", "Terminal", "Alias"];
    let cells: Vec<[&str; 5]> = rows
        .iter()
        .map(|row| {
            [
                row.id.as_str(),
                row.designation.as_str(),
                row.secondary_label.as_str(),
                row.terminal.as_str(),
                row.alias.as_str(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|header| header.chars().count());
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS, &widths);
    for line in &cells {
        push_row(&mut out, line, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[&str; 5], widths: &[usize; 5]) {
    let mut line = String::new();
    for (idx, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if idx > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        let pad = width - cell.chars().count();
        line.extend(std::iter::repeat_n(' ', pad));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::get_board_variant;

    #[test]
    fn rows_follow_catalog_order_with_dash_placeholder() {
        let board = get_board_variant("xiao-nrf").unwrap();
        let mut aliases = AliasMap::new();
        aliases.insert("p0_02".to_string(), "Sensor IN".to_string());
        let rows = pin_rows(&board.pins, &aliases);

        assert_eq!(rows.len(), board.pins.len());
        assert_eq!(rows[0].id, "p0_02");
        assert_eq!(rows[0].alias, "Sensor IN");
        assert_eq!(rows[0].secondary_label, "D0 / A0");
        let nfc = rows.iter().find(|row| row.id == "p0_09").unwrap();
        assert_eq!(nfc.secondary_label, MISSING_LABEL);
        assert_eq!(nfc.alias, "");
    }

    #[test]
    fn table_aligns_columns() {
        let board = get_board_variant("xiao-nrf").unwrap();
        let table = format_table(&pin_rows(&board.pins, &AliasMap::new()));
        let mut lines = table.lines();
        assert!(lines.next().unwrap().starts_with("ID     Pin    Arduino  Terminal"));
        assert!(lines.next().unwrap().starts_with("p0_02  P0.02  D0 / A0  AIN0"));
        assert_eq!(table.lines().count(), board.pins.len() + 1);
    }
}
