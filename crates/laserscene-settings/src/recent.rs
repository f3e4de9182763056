//! Bounded most-recent-last list of file paths.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Maximum number of remembered paths.
pub const MAX_RECENT_FILES: usize = 50;

/// Recently used files, oldest first.
///
/// Adding a path already in the list moves it to the end. When the list
/// grows past [`MAX_RECENT_FILES`] the oldest entries are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentFiles {
    paths: Vec<PathBuf>,
}

impl RecentFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `path` as the most recent entry.
    pub fn add(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        self.paths.retain(|p| p != &path);
        self.paths.push(path);
        self.truncate();
    }

    /// Up to `n` entries, newest first.
    pub fn recent(&self, n: usize) -> Vec<&Path> {
        self.paths.iter().rev().take(n).map(PathBuf::as_path).collect()
    }

    /// All entries, oldest first.
    pub fn as_slice(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    // Hand-edited files may carry more than the cap
    pub(crate) fn truncate(&mut self) {
        if self.paths.len() > MAX_RECENT_FILES {
            let excess = self.paths.len() - MAX_RECENT_FILES;
            self.paths.drain(..excess);
        }
    }
}

impl FromIterator<PathBuf> for RecentFiles {
    fn from_iter<I: IntoIterator<Item = PathBuf>>(iter: I) -> Self {
        let mut recent = Self::new();
        for path in iter {
            recent.add(path);
        }
        recent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_moves_existing_to_end() {
        let mut recent = RecentFiles::new();
        recent.add("a.txt");
        recent.add("b.txt");
        recent.add("a.txt");

        assert_eq!(
            recent.as_slice(),
            &[PathBuf::from("b.txt"), PathBuf::from("a.txt")]
        );
        assert_eq!(recent.recent(1), vec![Path::new("a.txt")]);
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let recent: RecentFiles = (0..60).map(|i| PathBuf::from(format!("{i}.csv"))).collect();
        assert_eq!(recent.len(), MAX_RECENT_FILES);
        assert_eq!(recent.as_slice()[0], PathBuf::from("10.csv"));
        assert_eq!(recent.recent(2), vec![Path::new("59.csv"), Path::new("58.csv")]);
    }
}
