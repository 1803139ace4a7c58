//! XDG-style path utilities for configuration and cache directories.

use std::path::PathBuf;

/// Returns the configuration directory for cgen.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/cgen` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/cgen` otherwise
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
pub fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME").map_or_else(
        |_| home_dir().join(".config").join("cgen"),
        |xdg| PathBuf::from(xdg).join("cgen"),
    )
}

/// Returns the cache directory for cgen.
///
/// Resolution order:
/// 1. `$XDG_CACHE_HOME/cgen` if `XDG_CACHE_HOME` is set
/// 2. `~/.cache/cgen` otherwise
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
pub fn cache_dir() -> PathBuf {
    std::env::var("XDG_CACHE_HOME").map_or_else(
        |_| home_dir().join(".cache").join("cgen"),
        |xdg| PathBuf::from(xdg).join("cgen"),
    )
}

/// Returns the user's home directory.
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
#[allow(clippy::expect_used)]
fn home_dir() -> PathBuf {
    dirs::home_dir().expect("Failed to determine home directory")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_config_dir_xdg_override() {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe { std::env::set_var("XDG_CONFIG_HOME", "/custom/config") };

        let dir = config_dir();
        assert_eq!(dir, PathBuf::from("/custom/config/cgen"));

        if let Some(val) = original {
            unsafe { std::env::set_var("XDG_CONFIG_HOME", val) };
        } else {
            unsafe { std::env::remove_var("XDG_CONFIG_HOME") };
        }
    }

    #[test]
    #[serial]
    fn test_config_dir_default() {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe { std::env::remove_var("XDG_CONFIG_HOME") };

        let dir = config_dir();
        assert!(dir.ends_with(".config/cgen"));

        if let Some(val) = original {
            unsafe { std::env::set_var("XDG_CONFIG_HOME", val) };
        }
    }

    #[test]
    #[serial]
    fn test_cache_dir_xdg_override() {
        let original = std::env::var("XDG_CACHE_HOME").ok();
        unsafe { std::env::set_var("XDG_CACHE_HOME", "/custom/cache") };

        let dir = cache_dir();
        assert_eq!(dir, PathBuf::from("/custom/cache/cgen"));

        if let Some(val) = original {
            unsafe { std::env::set_var("XDG_CACHE_HOME", val) };
        } else {
            unsafe { std::env::remove_var("XDG_CACHE_HOME") };
        }
    }
}
