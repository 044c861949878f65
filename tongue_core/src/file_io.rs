//! # File I/O Module
//!
//! Saves and loads [`TrailerConfig`] files:
//! - **Atomic saves**: Write to .tmp, fsync, rename to prevent corruption
//! - **Version validation**: Ensure schema compatibility on load
//!
//! ## Example
//!
//! ```rust,no_run
//! use tongue_core::file_io::{load_config, save_config};
//! use tongue_core::trailer::TrailerConfig;
//! use std::path::Path;
//!
//! let config = TrailerConfig::default_layout(2);
//! let path = Path::new("utility_trailer.json");
//!
//! save_config(&config, path)?;
//! let loaded = load_config(path)?;
//! assert_eq!(loaded.axles, config.axles);
//! # Ok::<(), tongue_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::errors::{CalcError, CalcResult};
use crate::trailer::{TrailerConfig, SCHEMA_VERSION};

/// Save a configuration with atomic write semantics.
///
/// The save process:
/// 1. Serialize to JSON
/// 2. Write to a temporary file next to the target
/// 3. Sync to disk (fsync)
/// 4. Rename over the target (atomic on most filesystems)
pub fn save_config(config: &TrailerConfig, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(config)
        .map_err(|e| CalcError::serialization(e.to_string()))?;

    let tmp_path = tmp_path_for(path);
    debug!("writing {} bytes to {}", json.len(), tmp_path.display());

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    info!("saved trailer configuration '{}' to {}", config.meta.name, path.display());
    Ok(())
}

/// Load a configuration from a file.
///
/// # Returns
///
/// * `Ok(TrailerConfig)` - Successfully loaded configuration
/// * `Err(CalcError::VersionMismatch)` - File version is incompatible
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_config(path: &Path) -> CalcResult<TrailerConfig> {
    let mut file = File::open(path)
        .map_err(|e| CalcError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    let config: TrailerConfig = serde_json::from_str(&contents).map_err(|e| {
        CalcError::serialization(format!("Invalid JSON in {}: {}", path.display(), e))
    })?;

    validate_version(&config.meta.version)?;

    info!(
        "loaded trailer configuration '{}' ({} loads, {} axles) from {}",
        config.meta.name,
        config.loads.len(),
        config.axles.len(),
        path.display()
    );
    Ok(config)
}

/// Temporary file used during an atomic save
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp_path = path.to_path_buf();
    let extension = tmp_path
        .extension()
        .map(|e| format!("{}.tmp", e.to_string_lossy()))
        .unwrap_or_else(|| "tmp".to_string());
    tmp_path.set_extension(extension);
    tmp_path
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // For 0.x versions a newer minor may contain breaking changes
    if current_parts[0] == 0
        && file_parts.len() > 1
        && current_parts.len() > 1
        && file_parts[1] > current_parts[1]
    {
        return Err(mismatch());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;

    fn temp_config_path(name: &str) -> PathBuf {
        temp_dir().join(format!("hitchscale_test_{}.json", name))
    }

    #[test]
    fn test_tmp_path_generation() {
        let path = Path::new("/path/to/trailer.json");
        assert_eq!(tmp_path_for(path), Path::new("/path/to/trailer.json.tmp"));
        assert_eq!(tmp_path_for(Path::new("trailer")), Path::new("trailer.tmp"));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_config_path("roundtrip");

        let config = TrailerConfig::default_layout(2);
        save_config(&config, &path).unwrap();

        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded.meta.name, "Default trailer");
        assert_eq!(loaded.axles, vec![180.0, 228.0]);
        assert_eq!(loaded.loads, config.loads);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_config_path("atomic");
        let tmp_path = tmp_path_for(&path);

        save_config(&TrailerConfig::default_layout(1), &path).unwrap();

        assert!(!tmp_path.exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config(&temp_config_path("does_not_exist")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_invalid_json() {
        let path = temp_config_path("invalid_json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_config(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_rejects_newer_schema() {
        let path = temp_config_path("newer_schema");
        let mut config = TrailerConfig::default_layout(1);
        config.meta.version = "0.9.0".to_string();
        save_config(&config, &path).unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, CalcError::VersionMismatch { .. }));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.7").is_ok());
        assert!(validate_version("0.0.3").is_ok());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("garbage").is_err());
    }
}
