use anyhow::bail;
use serenity::all::GuildId;
use tokio::sync::RwLock;

use super::GuildSettings;
use std::{collections::HashMap, path::PathBuf};

/// Guild-scoped settings store, one JSON document on disk.
///
/// The file is the single source of truth. Every mutation goes through
/// [`GuildStore::update`], which persists the whole document before
/// returning, so a command either lands its one write or leaves the store
/// untouched. Concurrent updates are last-write-wins per guild.
#[derive(Debug)]
pub struct GuildStore {
    pub path: PathBuf,
    cached: RwLock<HashMap<GuildId, GuildSettings>>,
}

impl GuildStore {
    pub fn read(path: PathBuf) -> Result<Self, anyhow::Error> {
        let path = match path.is_dir() {
            true => path.join("guilds.json"),
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

        let store_str = std::fs::read_to_string(&path)?;

        Ok(Self {
            path,
            cached: RwLock::new(serde_json::from_str(&store_str)?),
        })
    }

    fn new(path: PathBuf) -> Result<Self, anyhow::Error> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, "{}")?;

        Ok(Self {
            path,
            cached: RwLock::new(HashMap::new()),
        })
    }

    /// Current settings for a guild, defaults if it was never configured.
    pub async fn guild(&self, guild_id: GuildId) -> GuildSettings {
        self.cached
            .read()
            .await
            .get(&guild_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Applies a single mutation to a guild's settings and persists the
    /// store once, returning the settings as stored.
    pub async fn update<F>(&self, guild_id: GuildId, f: F) -> Result<GuildSettings, anyhow::Error>
    where
        F: FnOnce(&mut GuildSettings),
    {
        let mut cached = self.cached.write().await;

        let settings = cached.entry(guild_id).or_default();
        f(settings);
        let settings = settings.clone();

        tokio::fs::write(&self.path, serde_json::to_string_pretty(&*cached)?).await?;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, Value, json};

    fn guild() -> GuildId {
        GuildId::new(1120638385124556870)
    }

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn unconfigured_guild_gets_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = GuildStore::read(dir.path().join("guilds.json")).unwrap();

        assert_eq!(store.guild(guild()).await, GuildSettings::default());

        // reads never write
        assert_eq!(std::fs::read_to_string(&store.path).unwrap(), "{}");
    }

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = GuildStore::read(dir.path().join("guilds.json")).unwrap();

        let parameters = object(json!({"frequency_penalty": 2.0, "max_tokens": 200}));
        let expected = parameters.clone();

        store
            .update(guild(), |settings| settings.parameters = Some(parameters))
            .await
            .unwrap();

        assert_eq!(store.guild(guild()).await.parameters, Some(expected));
    }

    #[tokio::test]
    async fn set_replaces_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let store = GuildStore::read(dir.path().join("guilds.json")).unwrap();

        let before = object(json!({"max_tokens": 100}));
        store
            .update(guild(), |settings| settings.parameters = Some(before))
            .await
            .unwrap();

        let after = object(json!({"frequency_penalty": 2.0}));
        let expected = after.clone();
        store
            .update(guild(), |settings| settings.parameters = Some(after))
            .await
            .unwrap();

        // full replace, not a merge
        assert_eq!(store.guild(guild()).await.parameters, Some(expected));
    }

    #[tokio::test]
    async fn reset_clears_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = GuildStore::read(dir.path().join("guilds.json")).unwrap();

        let parameters = object(json!({"temperature": 0.2}));
        store
            .update(guild(), |settings| settings.parameters = Some(parameters))
            .await
            .unwrap();

        store
            .update(guild(), |settings| settings.parameters = None)
            .await
            .unwrap();
        assert_eq!(store.guild(guild()).await.parameters, None);

        store
            .update(guild(), |settings| settings.parameters = None)
            .await
            .unwrap();
        assert_eq!(store.guild(guild()).await.parameters, None);
    }

    #[tokio::test]
    async fn survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("guilds.json");

        {
            let store = GuildStore::read(path.clone()).unwrap();
            store
                .update(guild(), |settings| {
                    settings.model = "gpt-4".to_string();
                    settings.parameters = Some(object(json!({"max_tokens": 200})));
                })
                .await
                .unwrap();
        }

        let store = GuildStore::read(path).unwrap();
        let settings = store.guild(guild()).await;

        assert_eq!(settings.model, "gpt-4");
        assert_eq!(settings.parameters, Some(object(json!({"max_tokens": 200}))));
    }

    #[tokio::test]
    async fn directory_path_gets_a_default_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = GuildStore::read(dir.path().to_path_buf()).unwrap();

        assert_eq!(store.path, dir.path().join("guilds.json"));
    }
}
