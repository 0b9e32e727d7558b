//! Path management for TrustComply
//!
//! Resolves where the compliance policy file lives.
//!
//! ## Path Resolution Order
//!
//! 1. `TRUSTCOMPLY_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/trustcomply` on Linux,
//!    the equivalent on macOS/Windows) via the `directories` crate

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::TrustError;

/// Manages all paths used by TrustComply
#[derive(Debug, Clone)]
pub struct TrustPaths {
    /// Base directory for all TrustComply data
    base_dir: PathBuf,
}

impl TrustPaths {
    /// Create a new TrustPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// environment override is set.
    pub fn new() -> Result<Self, TrustError> {
        let base_dir = if let Ok(custom) = std::env::var("TRUSTCOMPLY_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("", "", "trustcomply")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    TrustError::Config(
                        "Could not determine a config directory; set TRUSTCOMPLY_DATA_DIR".into(),
                    )
                })?
        };

        Ok(Self { base_dir })
    }

    /// Create TrustPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the compliance policy file
    pub fn policy_file(&self) -> PathBuf {
        self.base_dir.join("policy.json")
    }

    /// Create the base directory if it does not exist yet
    pub fn ensure_directories(&self) -> Result<(), TrustError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TrustError::Io(format!("Failed to create {:?}: {}", self.base_dir, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_with_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrustPaths::with_base_dir(temp_dir.path().to_path_buf());
        assert_eq!(paths.base_dir(), &temp_dir.path().to_path_buf());
        assert_eq!(
            paths.policy_file(),
            temp_dir.path().join("policy.json")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let paths = TrustPaths::with_base_dir(nested.clone());

        assert!(!nested.exists());
        paths.ensure_directories().unwrap();
        assert!(nested.exists());
    }
}
