use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::{get_config_path, Config};

const HEADER: &str = "\
# wiki-search configuration
#
# language:       Wikipedia edition used for search and article links
# api_url:        optional override for the search API endpoint
# page_url:       optional override for the article view endpoint
# result_limit:   number of results per search (1-500)
# *_timeout_secs: network timeouts
";

/// Write a config file populated with defaults.
///
/// If `path` is None the default location is used. An existing file is left
/// untouched unless `force` is set. The write is atomic, so an interrupted
/// run never leaves a half-written config behind.
pub fn write_default_config(path: Option<PathBuf>, force: bool) -> Result<PathBuf> {
    let config_path = path.unwrap_or_else(get_config_path);

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let yaml = serde_saphyr::to_string(&Config::default())
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    write_atomically(&config_path, &format!("{}\n{}", HEADER, yaml))?;

    Ok(config_path)
}

fn write_atomically(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    file.write_all(contents.as_bytes())
        .context("Failed to write config")?;

    file.commit()
        .with_context(|| format!("Failed to write config to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config;
    use std::env;

    #[test]
    fn test_written_config_loads_as_default() {
        let dir = env::temp_dir().join("wiki_search_test_init");
        let path = dir.join("config.yaml");
        let _ = std::fs::remove_file(&path);

        let written = write_default_config(Some(path.clone()), false).unwrap();
        assert_eq!(written, path);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("# wiki-search configuration"));
        assert_eq!(load_config(Some(path.clone())).unwrap(), Config::default());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_refuses_to_overwrite_without_force() {
        let path = env::temp_dir().join("wiki_search_test_init_existing.yaml");
        std::fs::write(&path, "language: ru\n").unwrap();

        assert!(write_default_config(Some(path.clone()), false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "language: ru\n");

        write_default_config(Some(path.clone()), true).unwrap();
        assert_eq!(load_config(Some(path.clone())).unwrap().language, "en");

        let _ = std::fs::remove_file(&path);
    }
}
