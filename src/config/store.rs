use anyhow::bail;

use super::structure::{AiUserConfigInner, AiUserConfigTOML};
use std::{ops::Deref, path::PathBuf};

/// Global bot configuration, read from a TOML file at startup.
///
/// A missing file is created with defaults so the operator has something to
/// fill in. Guild-scoped settings live elsewhere, see
/// [`crate::settings::GuildStore`].
#[derive(Debug, Clone)]
pub struct AiUserConfig {
    pub path: PathBuf,
    cached: AiUserConfigTOML,
}

impl AiUserConfig {
    pub fn read(path: PathBuf) -> Result<Self, anyhow::Error> {
        let path = match path.is_dir() {
            true => path.join("config.toml"),
            false => path,
        };

        if !path.exists() {
            return Self::new(path);
        }

        if !path.is_file() {
            bail!(
                "Given path exists and is not a file... either change the path or delete the file."
            );
        }

        let config_str = std::fs::read_to_string(&path)?;

        Ok(Self {
            path,
            cached: toml::from_str(&config_str)?,
        })
    }

    fn new(path: PathBuf) -> Result<Self, anyhow::Error> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let config = Self {
            path,
            cached: AiUserConfigTOML::default(),
        };

        config.save()?;

        Ok(config)
    }

    pub fn save(&self) -> Result<(), anyhow::Error> {
        std::fs::write(&self.path, toml::to_string(&self.cached)?)?;

        Ok(())
    }
}

impl Deref for AiUserConfig {
    type Target = AiUserConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.cached.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = AiUserConfig::read(path.clone()).unwrap();

        assert!(path.is_file());
        assert_eq!(config.discord.token, "");
        assert_eq!(config.storage.guilds, PathBuf::from("guilds.json"));
    }

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        std::fs::write(
            &path,
            "[config.discord]\ntoken = \"abc\"\n\n[config.storage]\nguilds = \"data/guilds.json\"\n",
        )
        .unwrap();

        let config = AiUserConfig::read(path).unwrap();

        assert_eq!(config.discord.token, "abc");
        assert_eq!(config.storage.guilds, PathBuf::from("data/guilds.json"));
    }
}
