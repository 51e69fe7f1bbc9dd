use std::fs;
use std::path::Path;

use tracing::info;

use super::Offsets;
use crate::error::Result;

/// Load offsets from a JSON file
pub fn load_offsets<P: AsRef<Path>>(path: P) -> Result<Offsets> {
    let content = fs::read_to_string(&path)?;
    let offsets: Offsets = serde_json::from_str(&content)?;
    Ok(offsets)
}

/// Save offsets to a JSON file
pub fn save_offsets<P: AsRef<Path>>(path: P, offsets: &Offsets) -> Result<()> {
    let content = serde_json::to_string_pretty(offsets)?;
    fs::write(&path, content)?;
    info!("Saved offsets to {}", path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_offsets_save_and_load() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_path_buf();

        let offsets = Offsets {
            version: "2.7".to_string(),
            unit_table: 0x1000,
            ui: 0x2000,
            hover: 0x3000,
            widget_states: 0x4000,
            char_data: 0x5000,
            ..Default::default()
        };

        save_offsets(&path, &offsets).unwrap();
        let loaded = load_offsets(&path).unwrap();
        assert_eq!(loaded, offsets);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_offsets(dir.path().join("missing.json")).unwrap_err();
        assert!(err.is_not_found());
    }
}
