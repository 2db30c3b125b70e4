//! Artifact export.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::sanitize::sanitize_svg;

/// MIME type for exported artifacts.
pub const SVG_MIME: &str = "image/svg+xml";

/// A downloadable artifact file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    /// File name, derived from the 1-based version index.
    pub name: String,
    pub mime: &'static str,
    pub contents: String,
}

impl ExportFile {
    /// Build the export for the version at `index` (0-based). The contents
    /// go through the sanitizing pass, same as any display surface.
    pub fn for_version(index: usize, artifact: &str) -> Self {
        Self {
            name: format!("version-{}.svg", index + 1),
            mime: SVG_MIME,
            contents: sanitize_svg(artifact),
        }
    }

    /// Write the file under `dir`, returning the full path.
    pub fn write_to(&self, dir: &Path) -> std::io::Result<PathBuf> {
        let path = dir.join(&self.name);
        let mut file = std::fs::File::create(&path)?;
        file.write_all(self.contents.as_bytes())?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_uses_one_based_index() {
        let export = ExportFile::for_version(0, "<svg/>");
        assert_eq!(export.name, "version-1.svg");
        assert_eq!(export.mime, "image/svg+xml");

        let export = ExportFile::for_version(4, "<svg/>");
        assert_eq!(export.name, "version-5.svg");
    }

    #[test]
    fn contents_are_sanitized() {
        let export = ExportFile::for_version(0, "<svg><script>x()</script><rect/></svg>");
        assert_eq!(export.contents, "<svg><rect/></svg>");
    }

    #[test]
    fn write_to_creates_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let export = ExportFile::for_version(1, "<svg><circle r=\"4\"/></svg>");
        let path = export.write_to(dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "version-2.svg");
        assert_eq!(
            std::fs::read_to_string(path).unwrap(),
            "<svg><circle r=\"4\"/></svg>"
        );
    }
}
