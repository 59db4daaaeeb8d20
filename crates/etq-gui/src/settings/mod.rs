//! User preferences, persisted between sessions.

mod persistence;

pub use persistence::{load_settings, save_settings, settings_path};

use std::path::{Path, PathBuf};

/// GUI preferences. The record set itself is never persisted; only chrome
/// state survives a restart.
#[derive(Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Dark mode enabled
    pub dark_mode: bool,
    /// Recently loaded CSV files, most recent first
    pub recent_files: Vec<PathBuf>,
    /// Maximum recent files to remember
    pub max_recent: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            recent_files: Vec::new(),
            max_recent: 10,
        }
    }
}

impl Settings {
    /// Move `path` to the front of the recent list, keeping it deduplicated
    /// and capped.
    pub fn remember_recent(&mut self, path: &Path) {
        let path = path.to_path_buf();
        self.recent_files.retain(|known| known != &path);
        self.recent_files.insert(0, path);
        if self.recent_files.len() > self.max_recent {
            self.recent_files.truncate(self.max_recent);
        }
    }

    /// Directory of the most recent file, used to seed the file dialog.
    pub fn last_dir(&self) -> Option<&Path> {
        self.recent_files.first().and_then(|path| path.parent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remember_recent_dedups_and_caps() {
        let mut settings = Settings {
            max_recent: 2,
            ..Settings::default()
        };
        settings.remember_recent(Path::new("/a.csv"));
        settings.remember_recent(Path::new("/b.csv"));
        settings.remember_recent(Path::new("/a.csv"));
        assert_eq!(
            settings.recent_files,
            vec![PathBuf::from("/a.csv"), PathBuf::from("/b.csv")]
        );

        settings.remember_recent(Path::new("/c.csv"));
        assert_eq!(settings.recent_files.len(), 2);
        assert_eq!(settings.recent_files[0], PathBuf::from("/c.csv"));
    }
}
