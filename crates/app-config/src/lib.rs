// In crates/app-config/src/lib.rs

use config::{Config, File, FileFormat};
use std::path::Path;

pub mod error;
pub mod types;

// Re-export the most important types for easy access.
pub use error::{Error, Result};
pub use types::JobConfig;

use types::RawJobConfig;

/// Loads and validates the job configuration at `path`.
///
/// The file format follows the extension: `.toml` and `.json` are read as such,
/// anything else is read as YAML. The keys `seed`, `window` and `version` must
/// all be present; any other keys are ignored.
pub fn load_job_config(path: impl AsRef<Path>) -> Result<JobConfig> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::ConfigNotFound);
    }

    let settings = Config::builder()
        .add_source(File::from(path).format(format_for(path)))
        .build()?;

    let raw: RawJobConfig = settings.try_deserialize()?;
    let (Some(seed), Some(window), Some(version)) = (raw.seed, raw.window, raw.version) else {
        return Err(Error::InvalidConfig);
    };

    if window < 1 {
        return Err(Error::InvalidWindow(window));
    }
    let window = usize::try_from(window).map_err(|_| Error::InvalidWindow(window))?;

    tracing::debug!(path = %path.display(), "Job configuration parsed.");

    Ok(JobConfig {
        seed,
        window,
        version,
    })
}

/// Picks the parser for a config file from its extension, defaulting to YAML.
fn format_for(path: &Path) -> FileFormat {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("toml") => FileFormat::Toml,
        Some("json") => FileFormat::Json,
        _ => FileFormat::Yaml,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_yaml_config() {
        let dir = tempdir().unwrap();
        let path = write(&dir, "config.yaml", "seed: 42\nwindow: 3\nversion: \"v1\"\n");

        let config = load_job_config(&path).unwrap();
        assert_eq!(
            config,
            JobConfig {
                seed: 42,
                window: 3,
                version: "v1".to_string(),
            }
        );
    }

    #[test]
    fn loads_toml_and_ignores_extra_keys() {
        let dir = tempdir().unwrap();
        let path = write(
            &dir,
            "config.toml",
            "seed = 7\nwindow = 20\nversion = \"v2\"\n\n[extra]\nnote = \"ignored\"\n",
        );

        let config = load_job_config(&path).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.window, 20);
        assert_eq!(config.version, "v2");
    }

    #[test]
    fn unknown_extension_is_read_as_yaml() {
        let dir = tempdir().unwrap();
        let path = write(&dir, "job.cfg", "seed: 1\nwindow: 5\nversion: beta\n");

        let config = load_job_config(&path).unwrap();
        assert_eq!(config.window, 5);
        assert_eq!(config.version, "beta");
    }

    #[test]
    fn missing_file_is_config_not_found() {
        let dir = tempdir().unwrap();
        let err = load_job_config(dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound));
        assert_eq!(err.to_string(), "Configuration file not found.");
    }

    #[test]
    fn directory_path_exists_but_fails_to_load() {
        let dir = tempdir().unwrap();
        let err = load_job_config(dir.path()).unwrap_err();
        assert!(matches!(err, Error::LoadError(_)), "{err}");
    }

    #[test]
    fn each_required_key_is_enforced() {
        let dir = tempdir().unwrap();
        let cases = [
            "window: 3\nversion: v1\n",
            "seed: 42\nversion: v1\n",
            "seed: 42\nwindow: 3\n",
        ];
        for (i, contents) in cases.iter().enumerate() {
            let path = write(&dir, &format!("partial_{i}.yaml"), contents);
            let err = load_job_config(&path).unwrap_err();
            assert!(matches!(err, Error::InvalidConfig), "case {i}: {err}");
        }
    }

    #[test]
    fn empty_file_is_invalid_structure() {
        let dir = tempdir().unwrap();
        let path = write(&dir, "empty.yaml", "");
        assert!(matches!(load_job_config(&path), Err(Error::InvalidConfig)));
    }

    #[test]
    fn zero_window_is_rejected() {
        let dir = tempdir().unwrap();
        let path = write(&dir, "zero.yaml", "seed: 42\nwindow: 0\nversion: v1\n");
        assert!(matches!(load_job_config(&path), Err(Error::InvalidWindow(0))));
    }

    #[test]
    fn malformed_file_is_load_error() {
        let dir = tempdir().unwrap();
        let path = write(&dir, "broken.toml", "seed = = 42\n");
        let err = load_job_config(&path).unwrap_err();
        assert!(matches!(err, Error::LoadError(_)));
        assert!(err.to_string().starts_with("Failed to load configuration"));
    }
}
