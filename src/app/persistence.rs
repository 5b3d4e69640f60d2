use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Visits {
    pub count: u64,
}

pub fn get_visits_path() -> Option<PathBuf> {
    super::config::config_dir().map(|dir| dir.join("visits.toml"))
}

pub fn load_visits(path: &Path) -> u64 {
    if path.exists() {
        if let Ok(content) = std::fs::read_to_string(path) {
            if let Ok(visits) = toml::from_str::<Visits>(&content) {
                return visits.count;
            }
        }
    }
    0
}

pub fn save_visits(path: &Path, count: u64) {
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    match toml::to_string(&Visits { count }) {
        Ok(content) => {
            if let Err(e) = std::fs::write(path, content) {
                log::debug!("could not save visits to {}: {e}", path.display());
            }
        }
        Err(e) => log::debug!("could not encode visits: {e}"),
    }
}

/// Bumps the stored counter and returns the new value. Never fails.
pub fn record_visit(path: &Path) -> u64 {
    let count = load_visits(path).saturating_add(1);
    save_visits(path, count);
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_visit_starts_at_one() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("visits.toml");
        assert_eq!(record_visit(&path), 1);
        assert_eq!(record_visit(&path), 2);
        assert_eq!(load_visits(&path), 2);
    }

    #[test]
    fn corrupt_file_restarts_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("visits.toml");
        std::fs::write(&path, "count = \"many\"").unwrap();
        assert_eq!(record_visit(&path), 1);
    }
}
