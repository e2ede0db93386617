//! Rival save file at ~/.trainer_forge/rival_save.json.

use super::selection::RivalSave;
use crate::utils::persistence::{load_json_at_or_default, load_json_or_default, save_json, save_json_at};
use std::io;
use std::path::Path;

pub const RIVAL_SAVE_FILE: &str = "rival_save.json";

/// Loads the rival save, or a fresh one when missing or unreadable.
pub fn load_rival_save() -> RivalSave {
    load_json_or_default(RIVAL_SAVE_FILE)
}

pub fn save_rival_save(save: &RivalSave) -> io::Result<()> {
    save_json(RIVAL_SAVE_FILE, save)
}

pub fn load_rival_save_at(path: &Path) -> RivalSave {
    load_json_at_or_default(path)
}

pub fn save_rival_save_at(path: &Path, save: &RivalSave) -> io::Result<()> {
    save_json_at(path, save)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rival::RivalTrainerType;
    use std::fs;

    #[test]
    fn test_save_and_reload() {
        let dir = std::env::temp_dir().join(format!("trainer_forge_rival_{}", std::process::id()));
        let path = dir.join(RIVAL_SAVE_FILE);

        assert_eq!(load_rival_save_at(&path), RivalSave::default());

        let mut save = RivalSave::default().with_unlocks(true, false);
        save.player_rival = Some(RivalTrainerType::Nemona);
        save.record_defeat(RivalTrainerType::Allister);
        save_rival_save_at(&path, &save).unwrap();

        assert_eq!(load_rival_save_at(&path), save);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_corrupt_file_loads_default() {
        let dir = std::env::temp_dir().join(format!("trainer_forge_rival_bad_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(RIVAL_SAVE_FILE);
        fs::write(&path, "not json").unwrap();
        assert_eq!(load_rival_save_at(&path), RivalSave::default());
        let _ = fs::remove_dir_all(&dir);
    }
}
