//
//  twitter-rest
//  config/file.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration File I/O
//!
//! Thin wrappers used by [`Config`](super::Config) for reading and writing
//! the TOML file. Write operations create missing parent directories.

use std::path::Path;

use anyhow::{Context, Result};

/// Reads the whole configuration file.
///
/// # Errors
///
/// Fails when the file is missing, unreadable, or not UTF-8. The error names
/// the path.
pub fn read_config_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))
}

/// Writes `content` to `path`, creating parent directories first.
///
/// ```rust,no_run
/// use std::path::Path;
/// use twitter_rest::config::write_config_file;
///
/// write_config_file(Path::new("/tmp/tw/config.toml"), "[api]\n")?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn write_config_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config file {}", path.display()))
}

/// `true` when a regular file exists at `path`.
pub fn config_exists(path: &Path) -> bool {
    path.is_file()
}
