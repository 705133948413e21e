//! Turning a rendered drawing into a named, downloadable file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

pub const SVG_MIME: &str = "image/svg+xml;charset=utf-8";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Svg,
    Png,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Svg => "svg",
            ExportFormat::Png => "png",
        }
    }
}

/// `<prefix>-<board>-pinout.<ext>`
pub fn export_file_name(prefix: &str, board_id: &str, format: ExportFormat) -> String {
    format!("{prefix}-{board_id}-pinout.{}", format.extension())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub file_name: String,
    pub mime_type: &'static str,
    pub contents: String,
}

impl ExportedFile {
    pub fn write_into(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.contents)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), bytes = self.contents.len(), "exported pinout");
        Ok(path)
    }
}

pub fn svg_file(prefix: &str, board_id: &str, drawing: &str) -> ExportedFile {
    ExportedFile {
        file_name: export_file_name(prefix, board_id, ExportFormat::Svg),
        mime_type: SVG_MIME,
        contents: drawing.to_string(),
    }
}

/// Packages the current drawing as an SVG file. Returns `None` when there is
/// nothing rendered yet. The drawing is copied, never modified.
pub fn export_svg(prefix: &str, board_id: &str, drawing: Option<&str>) -> Option<ExportedFile> {
    drawing.map(|drawing| svg_file(prefix, board_id, drawing))
}
