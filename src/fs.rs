//! File system utilities.

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Writes content to a file atomically using a temp file and rename.
///
/// The temp file is created in the same directory as the target file so
/// the rename stays on one filesystem and is atomic.
///
/// # Errors
///
/// Returns an error if the temp file cannot be written or renamed.
pub fn atomic_write(file_path: &str, content: &[u8]) -> Result<()> {
    let path = Path::new(file_path);
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = path.file_name().unwrap_or_default().to_string_lossy();
    let temp_path = parent.join(format!(".{file_name}.tmp"));

    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, file_path)?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("out.md");
        let file_path_str = file_path.to_str().unwrap();

        atomic_write(file_path_str, b"Generated content").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "Generated content");
    }

    #[test]
    fn test_atomic_write_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("out.md");
        let file_path_str = file_path.to_str().unwrap();

        fs::write(&file_path, "Original").unwrap();
        atomic_write(file_path_str, b"Replaced").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "Replaced");
    }

    #[test]
    fn test_atomic_write_no_temp_file_remains() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("out.md");

        atomic_write(file_path.to_str().unwrap(), b"content").unwrap();

        assert!(!temp_dir.path().join(".out.md.tmp").exists());
    }

    #[test]
    fn test_atomic_write_binary_content() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("image.png");

        let bytes = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        atomic_write(file_path.to_str().unwrap(), &bytes).unwrap();

        assert_eq!(fs::read(&file_path).unwrap(), bytes);
    }
}
