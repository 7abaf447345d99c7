use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct AiUserConfigTOML {
    pub config: AiUserConfigInner,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AiUserConfigInner {
    pub discord: DiscordConfig,
    pub storage: StorageConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct DiscordConfig {
    pub token: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StorageConfig {
    /// Where the per-guild settings document lives.
    pub guilds: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            guilds: PathBuf::from("guilds.json"),
        }
    }
}
