//! Generic JSON persistence helpers for ~/.trainer_forge/ save files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const FORGE_DIR: &str = ".trainer_forge";

/// Get the ~/.trainer_forge/ directory path, creating it if needed.
pub fn forge_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(FORGE_DIR);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a save file in ~/.trainer_forge/.
pub fn save_path(filename: &str) -> io::Result<PathBuf> {
    Ok(forge_dir()?.join(filename))
}

/// Load a JSON file, returning `T::default()` if missing or invalid.
pub fn load_json_at_or_default<T: Default + serde::de::DeserializeOwned>(path: &Path) -> T {
    match fs::read_to_string(path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
            log::warn!("Ignoring unreadable save {}: {}", path.display(), e);
            T::default()
        }),
        Err(_) => T::default(),
    }
}

/// Save a value as pretty-printed JSON, creating parent directories.
pub fn save_json_at<T: serde::Serialize>(path: &Path, data: &T) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)
}

/// Load a JSON file from ~/.trainer_forge/, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(filename: &str) -> T {
    match save_path(filename) {
        Ok(path) => load_json_at_or_default(&path),
        Err(_) => T::default(),
    }
}

/// Save a value as pretty-printed JSON to ~/.trainer_forge/.
pub fn save_json<T: serde::Serialize>(filename: &str, data: &T) -> io::Result<()> {
    save_json_at(&save_path(filename)?, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("trainer_forge_{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_load_missing_returns_default() {
        let val: Vec<String> = load_json_at_or_default(&temp_file("nonexistent_12345.json"));
        assert!(val.is_empty());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_file("persistence_test.json");
        let data = vec!["hello".to_string(), "world".to_string()];
        save_json_at(&path, &data).expect("save should succeed");

        let loaded: Vec<String> = load_json_at_or_default(&path);
        assert_eq!(loaded, data);

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_corrupt_file_returns_default() {
        let path = temp_file("corrupt_test.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        let loaded: Vec<u32> = load_json_at_or_default(&path);
        assert!(loaded.is_empty());

        fs::remove_file(path).ok();
    }
}
