use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

/// Regular files directly inside `dir`, sorted by name
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    tracing::info!("Reading dir: {}", dir.display());

    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to read entry in {}", dir.display()))?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// File contents as text, invalid UTF-8 is replaced rather than rejected
pub fn read_text(path: &Path) -> Result<String> {
    tracing::debug!("File: {}", path.display());
    let data = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(String::from_utf8_lossy(&data).into_owned())
}

/// Text of every file in `dir`, concatenated in name order
pub fn read_dir_text(dir: &Path) -> Result<String> {
    let mut text = String::new();
    for file in list_files(dir)? {
        text.push_str(&read_text(&file)?);
    }
    Ok(text)
}

/// Write `data` to `path`, replacing any previous file
pub fn save_file(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, data).with_context(|| format!("Failed to write {}", path.display()))
}

/// Directory and file stem of `path`, used to name side-car outputs
pub fn output_paths(path: &Path) -> Result<(PathBuf, String)> {
    let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
        bail!("Cannot derive an output name from {}", path.display());
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok((dir, stem.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_only_files_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "二").unwrap();
        fs::write(dir.path().join("a.txt"), "一").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let files = list_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|f| f.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);

        assert_eq!(read_dir_text(dir.path()).unwrap(), "一二");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = list_files(&dir.path().join("missing")).unwrap_err();
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.txt");
        fs::write(&path, [0xE6, 0x97, 0xA5, 0xFF, b'a']).unwrap();

        assert_eq!(read_text(&path).unwrap(), "日\u{FFFD}a");
    }

    #[test]
    fn output_paths_split_stem() {
        let (dir, stem) = output_paths(Path::new("scripts/ep01.txt")).unwrap();
        assert_eq!(dir, PathBuf::from("scripts"));
        assert_eq!(stem, "ep01");

        let (dir, stem) = output_paths(Path::new("notes")).unwrap();
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(stem, "notes");
    }

    #[test]
    fn save_file_creates_parents_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("values.txt");

        save_file(&path, "first, longer contents".as_bytes()).unwrap();
        save_file(&path, "second".as_bytes()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }
}
