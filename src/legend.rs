//! Read-only listing of pin categories for the legend.

use crate::catalog::PinCategory;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub category: PinCategory,
    pub label: &'static str,
    pub color: &'static str,
}

pub fn legend_entries() -> Vec<LegendEntry> {
    PinCategory::ALL
        .iter()
        .map(|&category| {
            let info = category.info();
            LegendEntry {
                category,
                label: info.label,
                color: info.color,
            }
        })
        .collect()
}

/// One `label  color` line per category, labels padded to a common width.
pub fn format_legend(entries: &[LegendEntry]) -> String {
    let width = entries
        .iter()
        .map(|entry| entry.label.chars().count())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for entry in entries {
        out.push_str(&format!("{:<width$}  {}\n", entry.label, entry.color));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legend_follows_category_table() {
        let entries = legend_entries();
        assert_eq!(entries.len(), PinCategory::ALL.len());
        for entry in &entries {
            assert_eq!(entry.color, entry.category.color());
        }
        assert_eq!(entries[0].label, "Analog");
        assert_eq!(entries[3].label, "GND");
    }

    #[test]
    fn format_pads_labels() {
        let text = format_legend(&legend_entries());
        assert!(text.contains("Analog   #f7b2c4\n"));
        assert!(text.contains("Pin No.  #a8d07c\n"));
    }
}
